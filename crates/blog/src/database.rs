use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;

use crate::models::{NewPost, NewUser, Post, User};
use crate::schema;

/// Persistence operations the seeding workflow depends on.
///
/// Each `save_*` call persists its whole batch inside one transaction,
/// so a batch lands completely or not at all, and returns the
/// identifier-bearing rows in input order.
#[async_trait]
pub trait Store {
    /// Drops and recreates the schema. Destructive: every existing row
    /// is lost.
    async fn reset_schema(&self) -> Result<(), sqlx::Error>;

    /// Persists a batch of user drafts and returns the persisted forms.
    async fn save_users(&self, users: Vec<NewUser>) -> Result<Vec<User>, sqlx::Error>;

    /// Persists a batch of post drafts and returns the persisted forms.
    async fn save_posts(&self, posts: Vec<NewPost>) -> Result<Vec<Post>, sqlx::Error>;
}

/// Postgres-backed persistence for the blog entities.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn count_users(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
    }

    pub async fn count_posts(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
    }

    /// Loads the posts owned by a user. The back-reference is computed
    /// by query, not stored.
    pub async fn posts_by_author(&self, author_id: i64) -> Result<Vec<Post>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, title, content, author_id
            FROM posts
            WHERE author_id = $1
            ORDER BY id
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Loads the owning user of a post.
    pub async fn post_author(&self, post_id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT u.id, u.user_name
            FROM users u
            JOIN posts p ON p.author_id = u.id
            WHERE p.id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for Database {
    async fn reset_schema(&self) -> Result<(), sqlx::Error> {
        warn!("Dropping and recreating blog schema; all existing rows are lost");

        for statement in schema::RESET_STATEMENTS {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        Ok(())
    }

    async fn save_users(&self, users: Vec<NewUser>) -> Result<Vec<User>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let mut saved = Vec::with_capacity(users.len());

        for user in users {
            let row: User = sqlx::query_as(
                r#"
                INSERT INTO users (user_name)
                VALUES ($1)
                RETURNING id, user_name
                "#,
            )
            .bind(user.user_name)
            .fetch_one(&mut *tx)
            .await?;

            saved.push(row);
        }

        tx.commit().await?;
        Ok(saved)
    }

    async fn save_posts(&self, posts: Vec<NewPost>) -> Result<Vec<Post>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let mut saved = Vec::with_capacity(posts.len());

        for post in posts {
            let row: Post = sqlx::query_as(
                r#"
                INSERT INTO posts (title, content, author_id)
                VALUES ($1, $2, $3)
                RETURNING id, title, content, author_id
                "#,
            )
            .bind(post.title)
            .bind(post.content)
            .bind(post.author_id)
            .fetch_one(&mut *tx)
            .await?;

            saved.push(row);
        }

        tx.commit().await?;
        Ok(saved)
    }
}
