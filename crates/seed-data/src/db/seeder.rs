//! Seeding orchestration.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::info;

use blog::{NewPost, Post, Store, User};

use crate::config::SeedConfig;
use crate::generators::{PostGenerator, UserGenerator};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to reset schema: {0}")]
    Reset(#[source] sqlx::Error),

    #[error("failed to persist {entity} batch: {source}")]
    Persistence {
        entity: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("no persisted users available to author posts")]
    NoAuthors,
}

/// Result of a completed seeding run.
#[derive(Debug)]
pub struct SeedResult {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
}

/// Seeds a blog store with randomized users and posts.
///
/// The user batch is persisted, with its database-assigned identifiers
/// in hand, before any post referencing it is constructed. A failure
/// while saving posts leaves the already-persisted user batch in
/// place; there is no cross-batch rollback.
pub struct Seeder<S> {
    store: S,
    config: SeedConfig,
}

impl<S: Store> Seeder<S> {
    /// Creates a seeder with the default configuration.
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: SeedConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SeedConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the full workflow: destructive schema reset, then the user
    /// batch, then the post batch.
    pub async fn run(&self, rng: &mut impl Rng) -> Result<SeedResult, SeedError> {
        self.store.reset_schema().await.map_err(SeedError::Reset)?;

        let users = self.seed_users(rng).await?;
        let posts = self.seed_posts(&users, rng).await?;

        Ok(SeedResult { users, posts })
    }

    /// Generates and persists the user batch.
    async fn seed_users(&self, rng: &mut impl Rng) -> Result<Vec<User>, SeedError> {
        info!("Seeding {} users...", self.config.user_count);

        let drafts = UserGenerator::new().generate_batch(self.config.user_count, rng);
        let users = self
            .store
            .save_users(drafts)
            .await
            .map_err(|source| SeedError::Persistence {
                entity: "users",
                source,
            })?;

        info!("Seeded {} users", users.len());
        Ok(users)
    }

    /// Generates posts authored by randomly chosen persisted users and
    /// persists them as one batch.
    async fn seed_posts(&self, users: &[User], rng: &mut impl Rng) -> Result<Vec<Post>, SeedError> {
        info!("Seeding {} posts...", self.config.post_count);

        let post_gen = PostGenerator::new();
        let mut drafts: Vec<NewPost> = Vec::with_capacity(self.config.post_count);

        for _ in 0..self.config.post_count {
            let Some(author) = users.choose(rng) else {
                return Err(SeedError::NoAuthors);
            };
            drafts.push(post_gen.generate(author, rng));
        }

        let posts = self
            .store
            .save_posts(drafts)
            .await
            .map_err(|source| SeedError::Persistence {
                entity: "posts",
                source,
            })?;

        info!("Seeded {} posts", posts.len());
        Ok(posts)
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
