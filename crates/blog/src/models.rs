use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted user. The identifier is assigned by the database on
/// first save; in-memory drafts are [`NewUser`].
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub user_name: Option<String>,
}

/// A persisted post, owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
}

/// A user draft awaiting persistence. Carries no identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub user_name: Option<String>,
}

impl NewUser {
    pub fn with_name(user_name: impl Into<String>) -> Self {
        Self {
            user_name: Some(user_name.into()),
        }
    }
}

/// A post draft awaiting persistence.
///
/// Construction goes through [`NewPost::authored_by`], which takes a
/// persisted [`User`], so the author foreign key always points at a
/// row whose identifier is already known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: i64,
}

impl NewPost {
    pub fn authored_by(
        author: &User,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author_id: author.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_with_name() {
        let draft = NewUser::with_name("grace");
        assert_eq!(draft.user_name.as_deref(), Some("grace"));
    }

    #[test]
    fn test_new_post_takes_author_id() {
        let author = User {
            id: 7,
            user_name: Some("ada".to_string()),
        };
        let post = NewPost::authored_by(&author, "First post", "Hello there");

        assert_eq!(post.author_id, 7);
        assert_eq!(post.title, "First post");
        assert_eq!(post.content, "Hello there");
    }
}
