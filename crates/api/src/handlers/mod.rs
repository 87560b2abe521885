//! HTTP handler modules, one per resource, plus helpers they share.

pub mod actor;
pub mod movie;

use serde_json::Value;

use filmoteka_core::schema::{FieldType, Schema};
use filmoteka_core::types::DbId;
use filmoteka_db::update::UpdateSet;

/// Parse a path identifier. Ids travel as raw strings because each
/// endpoint has its own contract for an unparsable one (404, `"0"`,
/// `[]`, or a success envelope); the caller picks.
fn parse_id(raw: &str) -> Option<DbId> {
    raw.trim().parse::<DbId>().ok()
}

/// Extract a string field from a record that already passed validation.
fn record_str(record: &Value, key: &str) -> String {
    record[key].as_str().unwrap_or_default().to_string()
}

/// Extract an integer field from a record that already passed validation.
fn record_int(record: &Value, key: &str) -> i64 {
    record[key].as_i64().unwrap_or_default()
}

/// Build the partial-update set by walking the schema's declared
/// fields; inclusion follows [`UpdateSet`]'s truthy rules, so the SET
/// clause ends up in declaration order.
fn update_set_from(schema: &Schema, record: &Value) -> UpdateSet {
    let mut set = UpdateSet::new();
    for field in schema.fields() {
        match field.ty {
            FieldType::String => set.push_text(field.name, record[field.name].as_str()),
            FieldType::Integer => set.push_int(field.name, record[field.name].as_i64()),
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id("-3"), Some(-3));
    }

    #[test]
    fn parse_id_rejects_junk() {
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("5.5"), None);
        assert_eq!(parse_id(""), None);
    }
}
