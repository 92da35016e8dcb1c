//! Database seeding workflow.
//!
//! The [`Seeder`] drives the reset → users → posts workflow against any
//! [`blog::Store`] implementation.

mod seeder;

pub use seeder::{SeedError, SeedResult, Seeder};
