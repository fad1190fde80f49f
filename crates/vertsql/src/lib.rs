//! # vertsql
//!
//! Client-side SQL building blocks for Vertica-flavored databases.
//!
//! ## Features
//!
//! - **SQL explicit**: builders format exact SQL text; nothing is hidden
//!   behind a query planner or dialect abstraction
//! - **Typed fragments**: [`StringSql`] pairs SQL text with an optional
//!   declared result type for type-aware composition
//! - **Safe interpolation**: literals are quoted via [`IntoSqlText`],
//!   identifiers validated via [`Ident`]; the two never mix
//! - **Connection registry**: named credentials in a user-level toml file,
//!   with environment-variable indirection for secrets
//! - **Header introspection**: derive column names from delimited files
//!   when assembling load statements
//!
//! ## Expression building
//!
//! ```
//! use vertsql::{col, functions::regexp_count};
//!
//! let has_title = regexp_count(col("name")?, r"([A-Za-z])+\.").to_sql();
//! assert_eq!(has_title.as_sql(), r"REGEXP_COUNT(name, '([A-Za-z])+\.', 1)");
//! # Ok::<(), vertsql::SqlError>(())
//! ```
//!
//! Fragments nest: passing a [`StringSql`] (or an unfinished builder) as an
//! argument inlines its text verbatim, while plain strings become quoted
//! SQL literals.

pub mod connection;
pub mod error;
pub mod expr;
pub mod functions;
pub mod ident;
pub mod parse;
pub mod prelude;
pub mod value;

pub use connection::{ConnectionInfo, ConnectionRegistry};
pub use error::{SqlError, SqlResult};
pub use expr::{SqlType, StringSql};
pub use ident::{Ident, col};
pub use value::{IntoSqlText, quote_literal};
