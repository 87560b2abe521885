//! Partial-update builder for the PUT endpoints.
//!
//! Update payloads include a column only when its value is "truthy": a
//! non-empty string or a non-zero integer. Falsy and absent values mean
//! "leave the column alone", so this path cannot set a column to an
//! empty string or to zero.

/// Typed bind value for dynamically-built statements.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    BigInt(i64),
    Text(String),
}

/// Accumulates truthy column assignments in push order.
#[derive(Debug, Default)]
pub struct UpdateSet {
    assignments: Vec<(&'static str, BindValue)>,
}

impl UpdateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include a text column when the value is a non-empty string.
    pub fn push_text(&mut self, column: &'static str, value: Option<&str>) {
        if let Some(text) = value {
            if !text.is_empty() {
                self.assignments
                    .push((column, BindValue::Text(text.to_string())));
            }
        }
    }

    /// Include an integer column when the value is non-zero.
    pub fn push_int(&mut self, column: &'static str, value: Option<i64>) {
        if let Some(n) = value {
            if n != 0 {
                self.assignments.push((column, BindValue::BigInt(n)));
            }
        }
    }

    /// True when nothing was included. Callers treat an empty set as a
    /// no-op instead of issuing a column-less UPDATE.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Render `UPDATE "<table>" SET ... WHERE "id" = $1` with one
    /// placeholder per included column, starting at `$2`; `$1` is
    /// reserved for the row id. Returns `None` when the set is empty.
    pub fn into_query(self, table: &str) -> Option<(String, Vec<BindValue>)> {
        if self.assignments.is_empty() {
            return None;
        }

        let mut clauses: Vec<String> = Vec::with_capacity(self.assignments.len());
        let mut values: Vec<BindValue> = Vec::with_capacity(self.assignments.len());
        for (idx, (column, value)) in self.assignments.into_iter().enumerate() {
            clauses.push(format!("\"{column}\" = ${}", idx + 2));
            values.push(value);
        }

        let query = format!(
            "UPDATE \"{table}\" SET {} WHERE \"id\" = $1",
            clauses.join(", ")
        );
        Some((query, values))
    }
}
