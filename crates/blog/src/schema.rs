//! SQL schema for the blog tables.

/// Statements executed by [`reset_schema`](crate::Store::reset_schema),
/// in order. Posts are dropped before users because of the author
/// foreign key.
pub const RESET_STATEMENTS: &[&str] = &[
    "DROP TABLE IF EXISTS posts",
    "DROP TABLE IF EXISTS users",
    r#"
    CREATE TABLE users (
        id        BIGSERIAL PRIMARY KEY,
        user_name TEXT
    )
    "#,
    r#"
    CREATE TABLE posts (
        id        BIGSERIAL PRIMARY KEY,
        title     TEXT NOT NULL,
        content   TEXT NOT NULL,
        author_id BIGINT NOT NULL REFERENCES users(id)
    )
    "#,
];
