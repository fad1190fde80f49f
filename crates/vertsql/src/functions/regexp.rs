//! Regular-expression SQL functions.
//!
//! Formats `REGEXP_*` calls. Patterns travel to the database verbatim; no
//! client-side regex validation happens, so a malformed pattern surfaces as
//! a SQL error at execution time, not here.
//!
//! Functions whose SQL form has optional integer parameters return a small
//! builder with the documented defaults baked in:
//!
//! ```
//! use vertsql::{col, functions::regexp_count};
//!
//! let e = regexp_count(col("name")?, r"([A-Za-z])+\.").to_sql();
//! assert_eq!(e.as_sql(), r"REGEXP_COUNT(name, '([A-Za-z])+\.', 1)");
//! # Ok::<(), vertsql::SqlError>(())
//! ```

use crate::expr::{SqlType, StringSql};
use crate::value::IntoSqlText;
use std::fmt;

/// Count how many times a regular expression matches a string.
///
/// Renders `REGEXP_COUNT(expr, pattern, position)` and declares an `int`
/// result.
pub fn regexp_count(expr: impl IntoSqlText, pattern: impl IntoSqlText) -> RegexpCount {
    RegexpCount {
        expr: expr.into_sql_text(),
        pattern: pattern.into_sql_text(),
        position: 1,
    }
}

/// True when the string contains a match for the regular expression,
/// ignoring case.
///
/// Renders `REGEXP_ILIKE(expr, pattern)`.
pub fn regexp_ilike(expr: impl IntoSqlText, pattern: impl IntoSqlText) -> StringSql {
    StringSql::raw(format!(
        "REGEXP_ILIKE({}, {})",
        expr.into_sql_text(),
        pattern.into_sql_text()
    ))
}

/// Position in a string where a regular expression matches.
///
/// Renders
/// `REGEXP_INSTR(expr, pattern, position, occurrence, return_position)`.
pub fn regexp_instr(expr: impl IntoSqlText, pattern: impl IntoSqlText) -> RegexpInstr {
    RegexpInstr {
        expr: expr.into_sql_text(),
        pattern: pattern.into_sql_text(),
        position: 1,
        occurrence: 1,
        return_position: 0,
    }
}

/// True when the string contains a match for the regular expression.
///
/// Renders `REGEXP_LIKE(expr, pattern)`.
pub fn regexp_like(expr: impl IntoSqlText, pattern: impl IntoSqlText) -> StringSql {
    StringSql::raw(format!(
        "REGEXP_LIKE({}, {})",
        expr.into_sql_text(),
        pattern.into_sql_text()
    ))
}

/// Replace substrings matching a regular expression.
///
/// Renders
/// `REGEXP_REPLACE(expr, target, replacement, position, occurrence)`.
pub fn regexp_replace(
    expr: impl IntoSqlText,
    target: impl IntoSqlText,
    replacement: impl IntoSqlText,
) -> RegexpReplace {
    RegexpReplace {
        expr: expr.into_sql_text(),
        target: target.into_sql_text(),
        replacement: replacement.into_sql_text(),
        position: 1,
        occurrence: 1,
    }
}

/// Extract the substring matching a regular expression.
///
/// Renders `REGEXP_SUBSTR(expr, pattern, position, occurrence)`.
pub fn regexp_substr(expr: impl IntoSqlText, pattern: impl IntoSqlText) -> RegexpSubstr {
    RegexpSubstr {
        expr: expr.into_sql_text(),
        pattern: pattern.into_sql_text(),
        position: 1,
        occurrence: 1,
    }
}

/// Builder for `REGEXP_COUNT`.
#[derive(Debug, Clone)]
#[must_use]
pub struct RegexpCount {
    expr: String,
    pattern: String,
    position: i32,
}

impl RegexpCount {
    /// Character offset (1-based) at which the search starts.
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Render the call as a [`StringSql`] fragment.
    pub fn to_sql(&self) -> StringSql {
        StringSql::new(
            format!(
                "REGEXP_COUNT({}, {}, {})",
                self.expr, self.pattern, self.position
            ),
            SqlType::Int,
        )
    }
}

/// Builder for `REGEXP_INSTR`.
#[derive(Debug, Clone)]
#[must_use]
pub struct RegexpInstr {
    expr: String,
    pattern: String,
    position: i32,
    occurrence: i32,
    return_position: i32,
}

impl RegexpInstr {
    /// Character offset (1-based) at which the search starts.
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Which occurrence of the match to report (1-based).
    pub fn occurrence(mut self, occurrence: i32) -> Self {
        self.occurrence = occurrence;
        self
    }

    /// Position within the match to report: 0 for its start, 1 for the
    /// character after its end.
    pub fn return_position(mut self, return_position: i32) -> Self {
        self.return_position = return_position;
        self
    }

    /// Render the call as a [`StringSql`] fragment.
    pub fn to_sql(&self) -> StringSql {
        StringSql::raw(format!(
            "REGEXP_INSTR({}, {}, {}, {}, {})",
            self.expr, self.pattern, self.position, self.occurrence, self.return_position
        ))
    }
}

/// Builder for `REGEXP_REPLACE`.
#[derive(Debug, Clone)]
#[must_use]
pub struct RegexpReplace {
    expr: String,
    target: String,
    replacement: String,
    position: i32,
    occurrence: i32,
}

impl RegexpReplace {
    /// Character offset (1-based) at which the search starts.
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Which occurrence of the match to replace; 0 replaces all.
    pub fn occurrence(mut self, occurrence: i32) -> Self {
        self.occurrence = occurrence;
        self
    }

    /// Render the call as a [`StringSql`] fragment.
    pub fn to_sql(&self) -> StringSql {
        StringSql::raw(format!(
            "REGEXP_REPLACE({}, {}, {}, {}, {})",
            self.expr, self.target, self.replacement, self.position, self.occurrence
        ))
    }
}

/// Builder for `REGEXP_SUBSTR`.
#[derive(Debug, Clone)]
#[must_use]
pub struct RegexpSubstr {
    expr: String,
    pattern: String,
    position: i32,
    occurrence: i32,
}

impl RegexpSubstr {
    /// Character offset (1-based) at which the search starts.
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Which occurrence of the match to extract (1-based).
    pub fn occurrence(mut self, occurrence: i32) -> Self {
        self.occurrence = occurrence;
        self
    }

    /// Render the call as a [`StringSql`] fragment.
    pub fn to_sql(&self) -> StringSql {
        StringSql::raw(format!(
            "REGEXP_SUBSTR({}, {}, {}, {})",
            self.expr, self.pattern, self.position, self.occurrence
        ))
    }
}

macro_rules! impl_builder_render {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.to_sql().as_sql())
                }
            }

            impl IntoSqlText for $ty {
                fn into_sql_text(self) -> String {
                    self.to_sql().into_sql()
                }
            }

            impl From<$ty> for StringSql {
                fn from(builder: $ty) -> Self {
                    builder.to_sql()
                }
            }
        )*
    };
}

impl_builder_render!(RegexpCount, RegexpInstr, RegexpReplace, RegexpSubstr);
