//! Post generation.

use blog::{NewPost, User};
use fake::{Fake, faker::lorem::en::Sentence};
use rand::Rng;

/// Generates randomized post drafts for already-persisted authors.
pub struct PostGenerator;

impl PostGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates one post draft owned by `author`.
    ///
    /// Title and content are independently generated sentences; the
    /// author must already carry a database-assigned identifier, which
    /// the [`User`] type guarantees.
    pub fn generate(&self, author: &User, rng: &mut impl Rng) -> NewPost {
        let title: String = Sentence(3..8).fake_with_rng(rng);
        let content: String = Sentence(8..20).fake_with_rng(rng);
        NewPost::authored_by(author, title, content)
    }
}

impl Default for PostGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn author(id: i64) -> User {
        User {
            id,
            user_name: Some(format!("author-{id}")),
        }
    }

    #[test]
    fn test_generate_post() {
        let post_gen = PostGenerator::new();
        let mut rng = rand::thread_rng();
        let post = post_gen.generate(&author(3), &mut rng);

        assert!(!post.title.is_empty());
        assert!(!post.content.is_empty());
        assert_eq!(post.author_id, 3);
    }

    #[test]
    fn test_same_seed_same_sentences() {
        let post_gen = PostGenerator::new();

        let mut first_rng = StdRng::seed_from_u64(11);
        let mut second_rng = StdRng::seed_from_u64(11);

        let first = post_gen.generate(&author(1), &mut first_rng);
        let second = post_gen.generate(&author(1), &mut second_rng);

        assert_eq!(first.title, second.title);
        assert_eq!(first.content, second.content);
    }
}
