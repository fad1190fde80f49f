//! SQL function-call builders.
//!
//! Each builder formats its arguments into the textual call form of a
//! Vertica SQL function and returns a [`StringSql`](crate::StringSql)
//! fragment. Nothing is evaluated client-side; the database parses and
//! executes the rendered text.

pub mod regexp;

pub use regexp::{
    RegexpCount, RegexpInstr, RegexpReplace, RegexpSubstr, regexp_count, regexp_ilike,
    regexp_instr, regexp_like, regexp_replace, regexp_substr,
};
