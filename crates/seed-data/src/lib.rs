//! Synthetic blog data generation.
//!
//! This crate provides generators for randomized users and posts, and a
//! seeder that populates a development database with them for manual
//! verification.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::default();
//! let mut rng = config.rng();
//!
//! let seeder = Seeder::new(Database::new(pool)).with_config(config);
//! let result = seeder.run(&mut rng).await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, SeedResult, Seeder};
    pub use crate::generators::{PostGenerator, UserGenerator};
    pub use blog::{Database, NewPost, NewUser, Post, Store, User};
}
