//! Entity generators for synthetic blog data.
//!
//! - [`UserGenerator`]: users with plausible usernames
//! - [`PostGenerator`]: posts with random titles and contents, bound to
//!   an already-persisted author

pub mod post;
pub mod user;

pub use post::PostGenerator;
pub use user::UserGenerator;
