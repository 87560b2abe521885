//! Actor entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use filmoteka_core::types::DbId;

/// A row from the `actors` table. `gender` is an integer code; the API
/// does not interpret it beyond "non-zero means entered".
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    #[sqlx(rename = "year-birth")]
    #[serde(rename = "year-birth")]
    pub year_birth: i64,
    pub gender: i64,
}

/// Insert payload, built by the handlers once validation has passed.
#[derive(Debug, Clone)]
pub struct CreateActor {
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub year_birth: i64,
    pub gender: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_serializes_with_hyphenated_year() {
        let actor = Actor {
            id: 3,
            name: "Sigourney".to_string(),
            surname: "Weaver".to_string(),
            patronymic: "Alexandra".to_string(),
            year_birth: 1949,
            gender: 2,
        };
        let json = serde_json::to_value(&actor).unwrap();
        assert_eq!(json["year-birth"], 1949);
        assert!(json.get("year_birth").is_none());
    }
}
