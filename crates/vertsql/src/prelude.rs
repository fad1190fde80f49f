//! Convenient imports for typical `vertsql` usage.
//!
//! This module is intentionally small and focused on the most common APIs so
//! examples can start with:
//!
//! ```ignore
//! use vertsql::prelude::*;
//! ```

pub use crate::{Ident, IntoSqlText, SqlError, SqlResult, SqlType, StringSql, col};

pub use crate::functions::{
    regexp_count, regexp_ilike, regexp_instr, regexp_like, regexp_replace, regexp_substr,
};

pub use crate::connection::{ConnectionInfo, ConnectionRegistry};
