//! Safe SQL identifier handling.
//!
//! Column and table references must never go through literal quoting, so
//! they get their own type. [`Ident`] accepts dotted notation
//! (`schema.table.column`) and quoted parts (`"CamelCase"`).
//!
//! - Unquoted parts are validated against: `[A-Za-z_][A-Za-z0-9_$]*`
//! - Quoted parts allow any characters except NUL and escape `"` as `""`

use crate::error::{SqlError, SqlResult};
use crate::expr::StringSql;
use std::fmt;

/// A validated SQL identifier (schema, table, or column reference).
///
/// The identifier is normalized to its SQL rendering at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident(String);

impl Ident {
    /// Parse an identifier string, supporting dotted and quoted forms.
    ///
    /// - Dotted: `schema.table.column`
    /// - Quoted: `"CamelCase"."UserTable"`
    /// - Mixed: `public."UserTable".id`
    pub fn parse(s: &str) -> SqlResult<Self> {
        if s.is_empty() {
            return Err(SqlError::validation("Identifier cannot be empty"));
        }
        if s.contains('\0') {
            return Err(SqlError::validation(
                "Identifier cannot contain NUL character",
            ));
        }

        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();
        let mut first_part = true;

        while chars.peek().is_some() {
            if !first_part {
                match chars.next() {
                    Some('.') => {
                        if chars.peek().is_none() {
                            return Err(SqlError::validation("Trailing '.' in identifier"));
                        }
                        out.push('.');
                    }
                    Some(c) => {
                        return Err(SqlError::validation(format!(
                            "Expected '.' between identifier parts, got '{c}'"
                        )));
                    }
                    None => break,
                }
            }
            first_part = false;

            // Quoted part: re-emit with `"` escaped as `""`.
            if chars.peek() == Some(&'"') {
                chars.next();
                out.push('"');
                let mut len = 0usize;
                loop {
                    match chars.next() {
                        Some('"') => {
                            if chars.peek() == Some(&'"') {
                                chars.next();
                                out.push_str("\"\"");
                                len += 1;
                            } else {
                                break;
                            }
                        }
                        Some(c) => {
                            out.push(c);
                            len += 1;
                        }
                        None => {
                            return Err(SqlError::validation("Unclosed quoted identifier"));
                        }
                    }
                }
                if len == 0 {
                    return Err(SqlError::validation("Empty quoted identifier"));
                }
                out.push('"');
                continue;
            }

            // Unquoted part.
            let mut len = 0usize;
            while let Some(&c) = chars.peek() {
                if c == '.' {
                    break;
                }
                let valid = if len == 0 {
                    c == '_' || c.is_ascii_alphabetic()
                } else {
                    c == '_' || c == '$' || c.is_ascii_alphanumeric()
                };
                if !valid {
                    return Err(SqlError::validation(format!(
                        "Invalid character in identifier: '{c}'"
                    )));
                }
                out.push(c);
                len += 1;
                chars.next();
            }
            if len == 0 {
                return Err(SqlError::validation("Empty identifier segment"));
            }
        }

        Ok(Self(out))
    }

    /// The rendered SQL form.
    pub fn as_sql(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Ident> for StringSql {
    fn from(ident: Ident) -> Self {
        StringSql::raw(ident.0)
    }
}

/// Build a column-reference expression from an identifier string.
///
/// # Example
/// ```
/// use vertsql::col;
///
/// let c = col("public.users.name")?;
/// assert_eq!(c.as_sql(), "public.users.name");
/// # Ok::<(), vertsql::SqlError>(())
/// ```
pub fn col(name: &str) -> SqlResult<StringSql> {
    Ident::parse(name).map(StringSql::from)
}
