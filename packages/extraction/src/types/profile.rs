//! The extracted CV profile.

use serde::{Deserialize, Deserializer, Serialize};

/// Structured personal information extracted from a CV.
///
/// The JSON keys are the French field labels the service has always
/// exposed; they are part of the public API contract, so renames live
/// here rather than in the HTTP layer. A response carries all 17 keys:
/// fields the model could not find stay `null` (`0` for the child count).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvProfile {
    #[serde(rename = "Nom")]
    pub last_name: Option<String>,

    #[serde(rename = "Prénom")]
    pub first_name: Option<String>,

    #[serde(rename = "Nom de jeune fille")]
    pub maiden_name: Option<String>,

    #[serde(rename = "Numéro d'employé")]
    pub employee_number: Option<String>,

    #[serde(rename = "Titre")]
    pub title: Option<String>,

    /// JJ/MM/AAAA, as written in the source document.
    #[serde(rename = "Date de naissance")]
    pub birth_date: Option<String>,

    #[serde(rename = "Lieu de naissance")]
    pub birth_place: Option<String>,

    #[serde(rename = "Nationalité")]
    pub nationality: Option<String>,

    #[serde(rename = "Sexe")]
    pub gender: Option<String>,

    #[serde(rename = "Situation familiale")]
    pub marital_status: Option<String>,

    #[serde(
        rename = "Nombre d'enfants",
        default,
        deserialize_with = "null_as_zero"
    )]
    pub children_count: u32,

    #[serde(rename = "Numéro de sécurité sociale")]
    pub social_security_number: Option<String>,

    #[serde(rename = "Adresse postale")]
    pub postal_address: Option<String>,

    #[serde(rename = "Code postal")]
    pub postal_code: Option<String>,

    #[serde(rename = "Adresse e-mail")]
    pub email: Option<String>,

    #[serde(rename = "Numéro de téléphone")]
    pub phone: Option<String>,

    #[serde(rename = "Adresse")]
    pub address: Option<String>,
}

/// The wire-format keys, in response order.
pub const WIRE_KEYS: [&str; 17] = [
    "Nom",
    "Prénom",
    "Nom de jeune fille",
    "Numéro d'employé",
    "Titre",
    "Date de naissance",
    "Lieu de naissance",
    "Nationalité",
    "Sexe",
    "Situation familiale",
    "Nombre d'enfants",
    "Numéro de sécurité sociale",
    "Adresse postale",
    "Code postal",
    "Adresse e-mail",
    "Numéro de téléphone",
    "Adresse",
];

impl CvProfile {
    /// Overlay `other` onto this profile.
    ///
    /// A value only replaces the current one when it is present and
    /// non-blank, so a sparse model reply never erases defaults.
    pub fn merge(&mut self, other: CvProfile) {
        merge_field(&mut self.last_name, other.last_name);
        merge_field(&mut self.first_name, other.first_name);
        merge_field(&mut self.maiden_name, other.maiden_name);
        merge_field(&mut self.employee_number, other.employee_number);
        merge_field(&mut self.title, other.title);
        merge_field(&mut self.birth_date, other.birth_date);
        merge_field(&mut self.birth_place, other.birth_place);
        merge_field(&mut self.nationality, other.nationality);
        merge_field(&mut self.gender, other.gender);
        merge_field(&mut self.marital_status, other.marital_status);
        merge_field(&mut self.social_security_number, other.social_security_number);
        merge_field(&mut self.postal_address, other.postal_address);
        merge_field(&mut self.postal_code, other.postal_code);
        merge_field(&mut self.email, other.email);
        merge_field(&mut self.phone, other.phone);
        merge_field(&mut self.address, other.address);

        if other.children_count != 0 {
            self.children_count = other.children_count;
        }
    }
}

fn merge_field(dest: &mut Option<String>, src: Option<String>) {
    if let Some(value) = src {
        if !value.trim().is_empty() {
            *dest = Some(value);
        }
    }
}

/// Models asked for `0` on a missing count still occasionally send `null`.
fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_serializes_all_wire_keys() {
        let json = serde_json::to_value(CvProfile::default()).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), WIRE_KEYS.len());
        for key in WIRE_KEYS {
            assert!(object.contains_key(key), "missing wire key: {key}");
        }
        assert_eq!(object["Nom"], serde_json::Value::Null);
        assert_eq!(object["Nombre d'enfants"], serde_json::json!(0));
    }

    #[test]
    fn deserializes_french_keys() {
        let profile: CvProfile = serde_json::from_str(
            r#"{"Nom": "Dupont", "Prénom": "Jean", "Nombre d'enfants": 2}"#,
        )
        .unwrap();

        assert_eq!(profile.last_name.as_deref(), Some("Dupont"));
        assert_eq!(profile.first_name.as_deref(), Some("Jean"));
        assert_eq!(profile.children_count, 2);
        assert_eq!(profile.email, None);
    }

    #[test]
    fn null_children_count_parses_as_zero() {
        let profile: CvProfile =
            serde_json::from_str(r#"{"Nombre d'enfants": null}"#).unwrap();
        assert_eq!(profile.children_count, 0);
    }

    #[test]
    fn merge_skips_null_and_blank_values() {
        let mut profile = CvProfile {
            last_name: Some("Dupont".into()),
            email: Some("jean@example.com".into()),
            ..Default::default()
        };

        profile.merge(CvProfile {
            last_name: Some("".into()),
            first_name: Some("Jean".into()),
            email: None,
            ..Default::default()
        });

        assert_eq!(profile.last_name.as_deref(), Some("Dupont"));
        assert_eq!(profile.first_name.as_deref(), Some("Jean"));
        assert_eq!(profile.email.as_deref(), Some("jean@example.com"));
    }

    #[test]
    fn merge_keeps_zero_children_count() {
        let mut profile = CvProfile {
            children_count: 2,
            ..Default::default()
        };
        profile.merge(CvProfile::default());
        assert_eq!(profile.children_count, 2);

        profile.merge(CvProfile {
            children_count: 3,
            ..Default::default()
        });
        assert_eq!(profile.children_count, 3);
    }
}
