//! Generic nullable values with SQL-style NULL semantics.
//!
//! `Nullable<T>` holds either a `T` or NULL, tracked by a validity flag rather
//! than by a sentinel value. It converts to and from the database-style
//! `SqlNull<T>` pair and (de)serializes through serde, with NULL mapped to the
//! format's own null.
pub mod error;
pub mod null;
pub mod sql_null;
#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use error::Error;
pub use null::{equal, Null, Nullable, NULL};
pub use sql_null::SqlNull;

pub type Result<T, E = error::Error> = core::result::Result<T, E>;
