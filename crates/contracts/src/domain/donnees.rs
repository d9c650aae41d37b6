use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::FieldError;

/// Visibility flag on a dataset record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Acces {
    Public,
    Abonne,
}

impl Acces {
    /// Wire value, as sent in the multipart `acces` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Acces::Public => "public",
            Acces::Abonne => "abonne",
        }
    }
}

impl Default for Acces {
    // The entry form defaults new records to subscriber-gated.
    fn default() -> Self {
        Acces::Abonne
    }
}

/// A dataset record as returned by `GET /api/donnees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donnee {
    pub id_donnee: i64,
    pub titre: String,
    pub id_type: Option<i64>,
    pub pays: Option<String>,
    pub region: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    /// ISO date (`YYYY-MM-DD`), absent when never collected.
    pub date_collecte: Option<String>,
    pub acces: Acces,
    pub fichier_url: Option<String>,
    pub vignette_url: Option<String>,
    /// Free-form metadata, raw JSON text.
    pub meta: Option<String>,
}

/// Form draft for creating or updating a dataset record. Fields hold the
/// raw user input; `validate` gates submission, `fields` produces the
/// multipart string pairs.
#[derive(Debug, Clone, Default)]
pub struct DonneeInput {
    /// Present when editing an existing record.
    pub id_donnee: Option<i64>,
    /// Selected type id, empty string when nothing selected.
    pub id_type: String,
    pub titre: String,
    pub pays: String,
    pub region: String,
    pub latitude: String,
    pub longitude: String,
    pub description: String,
    /// `YYYY-MM-DD`, empty when unset.
    pub date_collecte: String,
    pub acces: Acces,
    pub meta: String,
}

impl DonneeInput {
    /// Pre-fill the draft from an existing record (edit mode).
    pub fn from_record(record: &Donnee) -> Self {
        Self {
            id_donnee: Some(record.id_donnee),
            id_type: record.id_type.map(|t| t.to_string()).unwrap_or_default(),
            titre: record.titre.clone(),
            pays: record.pays.clone().unwrap_or_default(),
            region: record.region.clone().unwrap_or_default(),
            latitude: record.latitude.map(|v| v.to_string()).unwrap_or_default(),
            longitude: record.longitude.map(|v| v.to_string()).unwrap_or_default(),
            description: record.description.clone().unwrap_or_default(),
            date_collecte: record.date_collecte.clone().unwrap_or_default(),
            acces: record.acces,
            meta: record.meta.clone().unwrap_or_default(),
        }
    }

    /// Client-boundary validation, run before any network call.
    ///
    /// Geographic bounds are inclusive: latitude 90 and longitude 180 are
    /// accepted, 91 and 181 are not.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.id_type.trim().is_empty() {
            errors.push(FieldError::new("id_type", "Le type est obligatoire"));
        }
        if self.titre.trim().is_empty() {
            errors.push(FieldError::new("titre", "Le titre est obligatoire"));
        }

        if !self.latitude.trim().is_empty() {
            match self.latitude.trim().parse::<f64>() {
                Ok(v) if (-90.0..=90.0).contains(&v) => {}
                _ => errors.push(FieldError::new("latitude", "Latitude invalide (-90 à 90)")),
            }
        }
        if !self.longitude.trim().is_empty() {
            match self.longitude.trim().parse::<f64>() {
                Ok(v) if (-180.0..=180.0).contains(&v) => {}
                _ => errors.push(FieldError::new(
                    "longitude",
                    "Longitude invalide (-180 à 180)",
                )),
            }
        }

        if !self.date_collecte.trim().is_empty()
            && NaiveDate::parse_from_str(self.date_collecte.trim(), "%Y-%m-%d").is_err()
        {
            errors.push(FieldError::new(
                "date_collecte",
                "Date invalide (format AAAA-MM-JJ)",
            ));
        }

        if !self.meta.trim().is_empty()
            && serde_json::from_str::<serde_json::Value>(&self.meta).is_err()
        {
            errors.push(FieldError::new("meta", "JSON invalide"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// String pairs of the multipart payload, in wire order. Binary
    /// attachments (`fichier`, `vignette`) are appended separately by the
    /// HTTP layer.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::with_capacity(11);
        if let Some(id) = self.id_donnee {
            out.push(("id_donnee", id.to_string()));
        }
        out.push(("id_type", self.id_type.clone()));
        out.push(("titre", self.titre.clone()));
        out.push(("pays", self.pays.clone()));
        out.push(("region", self.region.clone()));
        out.push(("latitude", self.latitude.clone()));
        out.push(("longitude", self.longitude.clone()));
        out.push(("description", self.description.clone()));
        out.push(("date_collecte", self.date_collecte.clone()));
        out.push(("acces", self.acces.as_str().to_string()));
        out.push(("meta", self.meta.clone()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> DonneeInput {
        DonneeInput {
            id_type: "3".into(),
            titre: "Relevé pluviométrique".into(),
            ..Default::default()
        }
    }

    #[test]
    fn type_and_title_are_mandatory() {
        let errors = DonneeInput::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"id_type"));
        assert!(fields.contains(&"titre"));
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut input = valid_input();
        input.titre = "   ".into();
        assert!(input.validate().is_err());
    }

    #[test]
    fn coordinate_bounds_are_inclusive() {
        let mut input = valid_input();
        input.latitude = "90".into();
        input.longitude = "180".into();
        assert!(input.validate().is_ok());

        input.latitude = "-90".into();
        input.longitude = "-180".into();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let mut input = valid_input();
        input.latitude = "91".into();
        let errors = input.validate().unwrap_err();
        assert_eq!(errors[0].field, "latitude");

        let mut input = valid_input();
        input.longitude = "181".into();
        let errors = input.validate().unwrap_err();
        assert_eq!(errors[0].field, "longitude");
    }

    #[test]
    fn non_numeric_coordinates_are_rejected() {
        let mut input = valid_input();
        input.latitude = "nord".into();
        assert!(input.validate().is_err());
    }

    #[test]
    fn meta_must_be_json() {
        let mut input = valid_input();
        input.meta = r#"{"a":1}"#.into();
        assert!(input.validate().is_ok());

        input.meta = "{a:1}".into();
        let errors = input.validate().unwrap_err();
        assert_eq!(errors[0].field, "meta");
    }

    #[test]
    fn empty_optional_fields_pass() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn date_format_is_checked() {
        let mut input = valid_input();
        input.date_collecte = "2026-02-30".into();
        assert!(input.validate().is_err());

        input.date_collecte = "2026-02-28".into();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn acces_wire_values() {
        assert_eq!(
            serde_json::to_string(&Acces::Abonne).unwrap(),
            r#""abonne""#
        );
        let parsed: Acces = serde_json::from_str(r#""public""#).unwrap();
        assert_eq!(parsed, Acces::Public);
    }

    #[test]
    fn fields_carry_record_id_only_when_editing() {
        let input = valid_input();
        assert!(input.fields().iter().all(|(k, _)| *k != "id_donnee"));

        let mut editing = valid_input();
        editing.id_donnee = Some(12);
        assert_eq!(editing.fields()[0], ("id_donnee", "12".to_string()));
    }

    #[test]
    fn prefill_round_trip() {
        let record = Donnee {
            id_donnee: 7,
            titre: "Sols".into(),
            id_type: Some(2),
            pays: Some("CM".into()),
            region: Some("Littoral".into()),
            latitude: Some(4.05),
            longitude: Some(9.7),
            description: None,
            date_collecte: Some("2025-11-02".into()),
            acces: Acces::Public,
            fichier_url: None,
            vignette_url: None,
            meta: None,
        };
        let input = DonneeInput::from_record(&record);
        assert_eq!(input.id_donnee, Some(7));
        assert_eq!(input.id_type, "2");
        assert_eq!(input.acces, Acces::Public);
        assert!(input.validate().is_ok());
    }
}
