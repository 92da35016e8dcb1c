//! User generation.

use blog::NewUser;
use fake::{Fake, faker::internet::en::Username};
use rand::Rng;

/// Generates randomized user drafts.
pub struct UserGenerator;

impl UserGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a single user draft with a plausible username.
    pub fn generate(&self, rng: &mut impl Rng) -> NewUser {
        let user_name: String = Username().fake_with_rng(rng);
        NewUser::with_name(user_name)
    }

    /// Generates multiple user drafts.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<NewUser> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_user() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();
        let user = user_gen.generate(&mut rng);

        assert!(user.user_name.is_some_and(|name| !name.is_empty()));
    }

    #[test]
    fn test_generate_batch() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();
        let users = user_gen.generate_batch(10, &mut rng);

        assert_eq!(users.len(), 10);
    }

    #[test]
    fn test_same_seed_same_usernames() {
        let user_gen = UserGenerator::new();

        let mut first_rng = StdRng::seed_from_u64(7);
        let mut second_rng = StdRng::seed_from_u64(7);

        let first: Vec<_> = user_gen
            .generate_batch(5, &mut first_rng)
            .into_iter()
            .map(|u| u.user_name)
            .collect();
        let second: Vec<_> = user_gen
            .generate_batch(5, &mut second_rng)
            .into_iter()
            .map(|u| u.user_name)
            .collect();

        assert_eq!(first, second);
    }
}
