//! End-to-end checks of the public expression-building surface.
//!
//! Exercises the crate the way a caller would: `prelude` imports, column
//! references via `col`, and exact rendered SQL.

use vertsql::prelude::*;

#[test]
fn titanic_title_expressions() -> SqlResult<()> {
    let pattern = r"([A-Za-z])+\.";

    let has_title = regexp_count(col("name")?, pattern).to_sql();
    assert_eq!(has_title.as_sql(), r"REGEXP_COUNT(name, '([A-Za-z])+\.', 1)");
    assert_eq!(has_title.ty(), Some(SqlType::Int));

    let is_titled = regexp_like(col("name")?, pattern);
    assert_eq!(is_titled.as_sql(), r"REGEXP_LIKE(name, '([A-Za-z])+\.')");

    let title = regexp_substr(col("name")?, pattern).position(1).occurrence(1).to_sql();
    assert_eq!(title.as_sql(), r"REGEXP_SUBSTR(name, '([A-Za-z])+\.', 1, 1)");

    Ok(())
}

#[test]
fn composed_expression_reads_like_handwritten_sql() -> SqlResult<()> {
    // Strip the title out of a name, then test what is left.
    let stripped = regexp_replace(col("name")?, r"([A-Za-z])+\.", "").to_sql();
    let check = regexp_ilike(stripped, "^\\s*brown");
    assert_eq!(
        check.as_sql(),
        r"REGEXP_ILIKE(REGEXP_REPLACE(name, '([A-Za-z])+\.', '', 1, 1), '^\s*brown')"
    );
    Ok(())
}

#[test]
fn fragments_embed_into_larger_statements() -> SqlResult<()> {
    let predicate = regexp_like(col("users.email")?, "@example\\.com$");
    let statement = format!("SELECT * FROM users WHERE {predicate}");
    assert_eq!(
        statement,
        r"SELECT * FROM users WHERE REGEXP_LIKE(users.email, '@example\.com$')"
    );
    Ok(())
}

#[test]
fn instr_defaults_match_explicit_values() -> SqlResult<()> {
    let implicit = regexp_instr(col("name")?, "a").to_sql();
    let explicit = regexp_instr(col("name")?, "a")
        .position(1)
        .occurrence(1)
        .return_position(0)
        .to_sql();
    assert_eq!(implicit, explicit);
    Ok(())
}
