//! Delimited-file header introspection.
//!
//! Reads the first record of a CSV-like file to derive column names, e.g.
//! when assembling the column list of a load statement. The separator can
//! be guessed from the header line when it is not known up front.

use crate::error::{SqlError, SqlResult};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Guess the separator used by a delimited line.
///
/// Picks the most frequent of `,`, `|` and `;`; ties go to `,`.
pub fn guess_sep(line: &str) -> char {
    let mut sep = ',';
    let mut max_occur = line.matches(',').count();
    for candidate in ['|', ';'] {
        let occurrences = line.matches(candidate).count();
        if occurrences > max_occur {
            max_occur = occurrences;
            sep = candidate;
        }
    }
    sep
}

/// Column names from the header record of a delimited file.
///
/// When `sep` is `None` it is guessed with [`guess_sep`]. When
/// `record_terminator` is `None` the header is the first line of the file;
/// otherwise input is scanned until the terminator, and never finding it is
/// an error. Double quotes are stripped and names are trimmed. An empty
/// name (isolated separator) is replaced with `colN` and logged, since it
/// usually means the file was exported with a leading index column.
pub fn header_names(
    path: impl AsRef<Path>,
    sep: Option<char>,
    record_terminator: Option<&str>,
) -> SqlResult<Vec<String>> {
    let first = read_first_record(path.as_ref(), record_terminator)?;

    let header = match record_terminator {
        Some(term) => first.replace(term, ""),
        None => first.trim_end_matches(['\r', '\n']).to_string(),
    };
    let header = header.replace('"', "");
    let sep = sep.unwrap_or_else(|| guess_sep(&header));

    let mut names: Vec<String> = header.split(sep).map(str::to_string).collect();
    let last = names.len() - 1;
    for (idx, name) in names.iter_mut().enumerate() {
        if name.is_empty() {
            let position = match idx {
                0 => "beginning",
                i if i == last => "end",
                _ => "middle",
            };
            tracing::warn!(
                position,
                index = idx,
                "isolated separator in file header, substituting a generated name"
            );
            *name = format!("col{idx}");
        }
    }
    Ok(names.into_iter().map(|s| s.trim().to_string()).collect())
}

/// First record of the file, terminator included.
fn read_first_record(path: &Path, record_terminator: Option<&str>) -> SqlResult<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let Some(term) = record_terminator else {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        return Ok(line);
    };
    if term.is_empty() {
        return Err(SqlError::validation("Record terminator cannot be empty"));
    }

    let term_bytes = term.as_bytes();
    let mut buf: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            return Err(SqlError::parse(format!(
                "record terminator {term:?} not found in {} bytes of {}",
                buf.len(),
                path.display()
            )));
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_subsequence(&buf, term_bytes) {
            let record = &buf[..pos + term_bytes.len()];
            return Ok(String::from_utf8_lossy(record).into_owned());
        }
    }
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn make_temp_file(contents: &str) -> std::path::PathBuf {
        let nonce = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("vertsql-parse-test-{nonce}.csv"));
        std::fs::write(&path, contents).expect("write");
        path
    }

    #[test]
    fn guess_sep_prefers_most_frequent() {
        assert_eq!(guess_sep("col1, col2,col3,  col4"), ',');
        assert_eq!(guess_sep("col1; col2;col3;  col4"), ';');
        assert_eq!(guess_sep("a|b|c"), '|');
    }

    #[test]
    fn guess_sep_defaults_to_comma() {
        assert_eq!(guess_sep("single_column"), ',');
    }

    #[test]
    fn header_names_explicit_sep() {
        let path = make_temp_file("A;B;C;D\n1;2;3;4\n");
        let names = header_names(&path, Some(';'), None).unwrap();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        std::fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn header_names_guesses_sep_and_trims() {
        let path = make_temp_file("name, age, city\nalice, 30, paris\n");
        let names = header_names(&path, None, None).unwrap();
        assert_eq!(names, vec!["name", "age", "city"]);
        std::fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn header_names_strips_quotes() {
        let path = make_temp_file("\"name\",\"age\"\n");
        let names = header_names(&path, Some(','), None).unwrap();
        assert_eq!(names, vec!["name", "age"]);
        std::fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn header_names_substitutes_isolated_separator() {
        let path = make_temp_file(",age,city\n0,30,paris\n");
        let names = header_names(&path, Some(','), None).unwrap();
        assert_eq!(names, vec!["col0", "age", "city"]);
        std::fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn header_names_substitutes_in_middle_and_end() {
        let path = make_temp_file("a,,c,\n");
        let names = header_names(&path, Some(','), None).unwrap();
        assert_eq!(names, vec!["a", "col1", "c", "col3"]);
        std::fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn header_names_custom_record_terminator() {
        let path = make_temp_file("A;B;C~1;2;3~");
        let names = header_names(&path, Some(';'), Some("~")).unwrap();
        assert_eq!(names, vec!["A", "B", "C"]);
        std::fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn header_names_missing_terminator_errors() {
        let path = make_temp_file("A;B;C");
        let err = header_names(&path, Some(';'), Some("~")).unwrap_err();
        assert!(err.to_string().contains("record terminator"));
        std::fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn header_names_missing_file_errors() {
        let err = header_names("/nonexistent/vertsql-test.csv", None, None).unwrap_err();
        assert!(matches!(err, SqlError::Io(_)));
    }
}
