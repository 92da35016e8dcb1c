//! Blog entities and their Postgres persistence.
//!
//! The data model is two relational entities: a [`User`] owns zero or
//! more [`Post`]s, and every post has exactly one owning user. Drafts
//! ([`NewUser`], [`NewPost`]) carry no identifier; identifiers are
//! assigned by the database on first save and returned on the
//! persisted forms.

pub mod database;
pub mod models;
pub mod schema;

pub use database::{Database, Store};
pub use models::{NewPost, NewUser, Post, User};
