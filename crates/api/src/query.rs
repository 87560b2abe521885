//! Shared query parameter types for API handlers.

use serde::Deserialize;
use serde_json::{Map, Value};

use filmoteka_core::listing::{DEFAULT_LIST_LIMIT, DEFAULT_LIST_OFFSET, DEFAULT_LIST_PAGE};

use crate::coerce;

/// Pagination and sort parameters for list endpoints
/// (`?offset=&limit=&page=&filter=`).
///
/// Everything arrives as text and is coerced before validation, so
/// malformed input surfaces as a validation message instead of a
/// framework-level rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
    pub filter: Option<String>,
}

impl ListParams {
    /// Build the record to validate. Absent parameters fall back to
    /// their defaults (offset 0, limit 30, page 0, filter null), and a
    /// non-zero `page` overrides `offset` with `(page - 1) * limit`
    /// before validation runs.
    pub fn into_record(self) -> Value {
        let mut offset = query_int(self.offset.as_deref(), DEFAULT_LIST_OFFSET);
        let limit = query_int(self.limit.as_deref(), DEFAULT_LIST_LIMIT);
        let page = query_int(self.page.as_deref(), DEFAULT_LIST_PAGE);

        // Anything but a literal zero page fires the override,
        // unparsable input included; an unusable page or limit then
        // degrades the offset to null for validation to report.
        if page.as_i64() != Some(0) {
            offset = match (page.as_f64(), limit.as_f64()) {
                (Some(p), Some(l)) => coerce::number_from_f64((p - 1.0) * l),
                _ => Value::Null,
            };
        }

        let mut record = Map::new();
        record.insert("offset".to_string(), offset);
        record.insert("limit".to_string(), limit);
        record.insert("page".to_string(), page);
        record.insert(
            "filter".to_string(),
            self.filter.map(Value::from).unwrap_or(Value::Null),
        );
        Value::Object(record)
    }
}

fn query_int(raw: Option<&str>, default: i64) -> Value {
    match raw {
        Some(s) => coerce::int_str(s),
        None => Value::from(default),
    }
}
