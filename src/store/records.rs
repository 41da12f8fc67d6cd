//! Typed shapes of the persisted records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The personal profile, saved and loaded wholesale.
///
/// Every field is optional in the stored form; absent fields decode to
/// empty strings (or no date) so partially written records from older
/// versions still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub company: String,
}

/// A single interest, read-only on this screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_decodes_with_missing_fields() {
        let record: ProfileRecord =
            serde_json::from_value(serde_json::json!({ "fullname": "Ann" })).unwrap();

        assert_eq!(record.fullname, "Ann");
        assert_eq!(record.country, "");
        assert_eq!(record.language, "");
        assert_eq!(record.company, "");
        assert_eq!(record.birthdate, None);
    }

    #[test]
    fn profile_round_trips_birthdate_as_iso_date() {
        let record = ProfileRecord {
            fullname: "Ann".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1990, 4, 2),
            ..Default::default()
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["birthdate"], "1990-04-02");

        let back: ProfileRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn interest_uses_type_as_wire_name() {
        let interest: Interest =
            serde_json::from_value(serde_json::json!({ "name": "A", "type": "B" })).unwrap();

        assert_eq!(interest.name, "A");
        assert_eq!(interest.kind, "B");
        assert_eq!(
            serde_json::to_value(&interest).unwrap(),
            serde_json::json!({ "name": "A", "type": "B" })
        );
    }
}
