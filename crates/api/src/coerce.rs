//! Loose input coercion for request records.
//!
//! Bodies and query strings arrive as raw JSON values. Before
//! validation, each declared field is normalized: numeric strings
//! become integers, an empty or blank string counts as zero, unusable
//! numeric input degrades to null, and string fields pass through
//! untouched for the schema to judge. Null is how the update path says
//! "not supplied", so coercion never invents an error on its own.

use serde_json::{Map, Value};

use filmoteka_core::schema::{FieldType, Schema};

/// Coerce one body field expected to hold an integer.
///
/// Integers pass through; integral floats and numeric strings collapse
/// to integers; non-integral numbers survive as-is so validation can
/// reject them; everything else (absent, null, booleans, unparsable
/// strings) becomes null.
pub fn int_field(body: &Value, key: &str) -> Value {
    match body.get(key) {
        Some(Value::Number(n)) => coerce_number(n),
        Some(Value::String(s)) => int_str(s),
        _ => Value::Null,
    }
}

fn coerce_number(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::from(i);
    }
    if let Some(f) = n.as_f64() {
        if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
            return Value::from(f as i64);
        }
    }
    Value::Number(n.clone())
}

/// Coerce a bare string (query parameters arrive this way) with the
/// same rules as [`int_field`]'s string branch.
pub fn int_str(s: &str) -> Value {
    let s = s.trim();
    if s.is_empty() {
        return Value::from(0);
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return number_from_f64(f);
    }
    Value::Null
}

/// Turn a float into a JSON number, collapsing integral in-range values
/// to integers. Non-finite input degrades to null.
pub fn number_from_f64(f: f64) -> Value {
    if !f.is_finite() {
        return Value::Null;
    }
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        return Value::from(f as i64);
    }
    Value::from(f)
}

/// Assemble a create-path record from `body`, walking the schema's
/// declared fields. String fields are copied only when the key is
/// present so `required` can fire; integer fields are always present
/// after numeric coercion.
pub fn create_record(body: &Value, schema: &Schema) -> Value {
    let mut record = Map::new();
    for field in schema.fields() {
        match field.ty {
            FieldType::String => {
                if let Some(value) = body.get(field.name) {
                    record.insert(field.name.to_string(), value.clone());
                }
            }
            FieldType::Integer => {
                record.insert(field.name.to_string(), int_field(body, field.name));
            }
        }
    }
    Value::Object(record)
}

/// Assemble an update-path record. Every declared field ends up present,
/// absent input degrading to null so a nullable schema reads it as "not
/// supplied".
pub fn update_record(body: &Value, schema: &Schema) -> Value {
    let mut record = Map::new();
    for field in schema.fields() {
        let value = match field.ty {
            FieldType::String => body.get(field.name).cloned().unwrap_or(Value::Null),
            FieldType::Integer => int_field(body, field.name),
        };
        record.insert(field.name.to_string(), value);
    }
    Value::Object(record)
}
