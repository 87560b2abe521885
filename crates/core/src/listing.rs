//! List-endpoint building blocks: pagination defaults and the
//! client-facing sort specification.
//!
//! A sort specification is a comma-separated list of column names
//! (`?filter=genre,name`). Unknown columns are dropped rather than
//! rejected, and matching is exact, so stray whitespace around a token
//! disqualifies it. Sorting is always ascending.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default row offset for list queries.
pub const DEFAULT_LIST_OFFSET: i64 = 0;

/// Default page size for list queries.
pub const DEFAULT_LIST_LIMIT: i64 = 30;

/// Default page number; zero means "use `offset` as given".
pub const DEFAULT_LIST_PAGE: i64 = 0;

/// Smallest accepted `limit`.
pub const MIN_LIST_LIMIT: i64 = 1;

/// Largest accepted `limit`.
pub const MAX_LIST_LIMIT: i64 = 50;

/// Association rows expanded per actor when resolving their movies.
pub const ACTOR_MOVIES_LIMIT: i64 = 10;

// ---------------------------------------------------------------------------
// Sort specifications
// ---------------------------------------------------------------------------

/// Parse a client sort specification into an `ORDER BY` fragment.
///
/// Tokens are matched against `whitelist` exactly; survivors keep their
/// request order and render as double-quoted identifiers with `ASC`.
/// Returns `None` when the specification is absent, empty, or loses all
/// of its tokens, so callers never embed a column-less `ORDER BY`.
pub fn parse_sort(raw: Option<&str>, whitelist: &[&str]) -> Option<String> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }

    let columns: Vec<String> = raw
        .split(',')
        .filter(|token| whitelist.contains(token))
        .map(|column| {
            // Quoting characters never reach the rendered identifier.
            let clean: String = column.chars().filter(|c| *c != '"' && *c != '`').collect();
            format!("\"{clean}\" ASC")
        })
        .collect();

    if columns.is_empty() {
        return None;
    }
    Some(format!("ORDER BY {}", columns.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[&str] = &["name", "genre", "year-release"];

    // -- parse_sort ----------------------------------------------------------

    #[test]
    fn absent_spec_yields_no_fragment() {
        assert_eq!(parse_sort(None, COLUMNS), None);
    }

    #[test]
    fn empty_spec_yields_no_fragment() {
        assert_eq!(parse_sort(Some(""), COLUMNS), None);
    }

    #[test]
    fn single_known_column() {
        assert_eq!(
            parse_sort(Some("name"), COLUMNS).as_deref(),
            Some(r#"ORDER BY "name" ASC"#)
        );
    }

    #[test]
    fn unknown_columns_are_dropped() {
        assert_eq!(
            parse_sort(Some("genre,bogus,name"), COLUMNS).as_deref(),
            Some(r#"ORDER BY "genre" ASC, "name" ASC"#)
        );
    }

    #[test]
    fn request_order_is_preserved() {
        assert_eq!(
            parse_sort(Some("name,genre"), COLUMNS).as_deref(),
            Some(r#"ORDER BY "name" ASC, "genre" ASC"#)
        );
    }

    #[test]
    fn all_tokens_dropped_yields_no_fragment() {
        assert_eq!(parse_sort(Some("bogus,title"), COLUMNS), None);
    }

    #[test]
    fn matching_is_exact_no_trimming() {
        assert_eq!(
            parse_sort(Some("genre, name"), COLUMNS).as_deref(),
            Some(r#"ORDER BY "genre" ASC"#)
        );
    }

    #[test]
    fn duplicate_columns_survive() {
        assert_eq!(
            parse_sort(Some("name,name"), COLUMNS).as_deref(),
            Some(r#"ORDER BY "name" ASC, "name" ASC"#)
        );
    }

    #[test]
    fn hyphenated_column_is_quoted() {
        assert_eq!(
            parse_sort(Some("year-release"), COLUMNS).as_deref(),
            Some(r#"ORDER BY "year-release" ASC"#)
        );
    }
}
