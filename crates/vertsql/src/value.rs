//! Value formatting for SQL interpolation.
//!
//! [`IntoSqlText`] turns a native value or an existing [`StringSql`]
//! fragment into SQL text. String literals are single-quoted with embedded
//! quotes doubled, numerics and booleans render bare, `None` renders as
//! `NULL`, and fragments pass through verbatim without re-quoting.
//!
//! Column references are identifiers, not literals; build them with
//! [`crate::col`] so they skip literal quoting.

use crate::expr::StringSql;

/// Quote a string as a SQL literal, doubling embedded single quotes.
pub fn quote_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push('\'');
            out.push('\'');
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    out
}

/// Convert a value into SQL text for interpolation into a function call.
///
/// Total over all implemented types; conversion never fails.
pub trait IntoSqlText {
    fn into_sql_text(self) -> String;
}

impl IntoSqlText for StringSql {
    fn into_sql_text(self) -> String {
        self.into_sql()
    }
}

impl IntoSqlText for &StringSql {
    fn into_sql_text(self) -> String {
        self.as_sql().to_string()
    }
}

impl IntoSqlText for &str {
    fn into_sql_text(self) -> String {
        quote_literal(self)
    }
}

impl IntoSqlText for String {
    fn into_sql_text(self) -> String {
        quote_literal(&self)
    }
}

impl IntoSqlText for &String {
    fn into_sql_text(self) -> String {
        quote_literal(self)
    }
}

impl IntoSqlText for bool {
    fn into_sql_text(self) -> String {
        if self { "TRUE" } else { "FALSE" }.to_string()
    }
}

impl<T: IntoSqlText> IntoSqlText for Option<T> {
    fn into_sql_text(self) -> String {
        match self {
            Some(v) => v.into_sql_text(),
            None => "NULL".to_string(),
        }
    }
}

macro_rules! impl_into_sql_text_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoSqlText for $t {
                fn into_sql_text(self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_into_sql_text_numeric!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
