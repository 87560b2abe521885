//! Declarative request-record validation.
//!
//! Handlers coerce incoming bodies into flat JSON records and run them
//! through a static [`Schema`]. Validation failures are data, not
//! errors: each violated field contributes one message, in declaration
//! order, and the messages travel back to the client inside the normal
//! response envelope.
//!
//! A second pass, [`Schema::check_required_present`], covers the
//! business rule that required fields must also be non-empty (strings)
//! and non-zero (integers). That pass stops at the first offender and
//! phrases its message with the field's human label (`Enter year
//! release`).

use serde_json::Value;

/// Primitive type a field is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
}

/// Validation rules for a single record field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Key in the JSON record; also the column the field maps to.
    pub name: &'static str,
    /// Human label used by presence messages.
    pub label: &'static str,
    pub ty: FieldType,
    /// Required fields must carry a key; optional ones may be absent.
    pub required: bool,
    /// Nullable fields accept explicit `null`. Update paths use this to
    /// read null as "not supplied".
    pub nullable: bool,
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
}

impl FieldSpec {
    /// Required, non-nullable string.
    pub const fn string(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            ty: FieldType::String,
            required: true,
            nullable: false,
            minimum: None,
            maximum: None,
        }
    }

    /// Required, non-nullable integer.
    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            ty: FieldType::Integer,
            required: true,
            nullable: false,
            minimum: None,
            maximum: None,
        }
    }

    /// Optional, nullable string.
    pub const fn nullable_string(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            ty: FieldType::String,
            required: false,
            nullable: true,
            minimum: None,
            maximum: None,
        }
    }

    /// Optional, nullable integer.
    pub const fn nullable_integer(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            ty: FieldType::Integer,
            required: false,
            nullable: true,
            minimum: None,
            maximum: None,
        }
    }

    /// Optional integer that still rejects explicit `null`.
    pub const fn optional_integer(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            ty: FieldType::Integer,
            required: false,
            nullable: false,
            minimum: None,
            maximum: None,
        }
    }

    /// Restrict an integer field to an inclusive range.
    pub const fn bounded(mut self, minimum: i64, maximum: i64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    /// One violation message for this field against `record`, or `None`
    /// when the field passes.
    fn check(&self, record: &Value) -> Option<String> {
        let Some(value) = record.get(self.name) else {
            if self.required {
                return Some(format!("must have required property '{}'", self.name));
            }
            return None;
        };

        if value.is_null() {
            if self.nullable {
                return None;
            }
            return Some(self.type_message());
        }

        match self.ty {
            FieldType::String => {
                if value.is_string() {
                    None
                } else {
                    Some(self.type_message())
                }
            }
            FieldType::Integer => {
                let Some(n) = value.as_i64() else {
                    return Some(self.type_message());
                };
                if let Some(minimum) = self.minimum {
                    if n < minimum {
                        return Some(format!("must be >= {minimum}"));
                    }
                }
                if let Some(maximum) = self.maximum {
                    if n > maximum {
                        return Some(format!("must be <= {maximum}"));
                    }
                }
                None
            }
        }
    }

    fn type_message(&self) -> String {
        match self.ty {
            FieldType::String => "must be string".to_string(),
            FieldType::Integer => "must be integer".to_string(),
        }
    }
}

/// An ordered set of field rules. Declaration order controls both the
/// order of violation messages and the column order callers derive from
/// [`Schema::fields`].
#[derive(Debug)]
pub struct Schema {
    fields: &'static [FieldSpec],
}

impl Schema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    /// The declared fields, in order.
    pub fn fields(&self) -> &[FieldSpec] {
        self.fields
    }

    /// Validate `record`, collecting one message per violated field in
    /// declaration order.
    pub fn validate(&self, record: &Value) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        for field in self.fields {
            if let Some(message) = field.check(record) {
                errors.push(message);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Presence pass for required fields: an empty string or a zero
    /// integer reads as "not entered". Stops at the first offender.
    /// Meant to run after [`Schema::validate`] has passed.
    pub fn check_required_present(&self, record: &Value) -> Result<(), String> {
        for field in self.fields {
            if !field.required {
                continue;
            }
            let not_entered = match (field.ty, record.get(field.name)) {
                (FieldType::String, Some(Value::String(s))) => s.is_empty(),
                (FieldType::Integer, Some(value)) => value.as_i64() == Some(0),
                _ => false,
            };
            if not_entered {
                return Err(format!("Enter {}", field.label));
            }
        }
        Ok(())
    }
}
