//! Incident Counter Test Utils
//!
//! Shared helpers for tests that need a database. Tests describe the tables they need
//! with `TestBuilder` and get back a `TestContext` holding an in-memory SQLite
//! connection with those tables created.
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn reads_counter_record() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_counter_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
