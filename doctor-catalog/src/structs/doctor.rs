//! Doctor record: the unit of search.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Doctor gender as exposed to the gender facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ways a consultation can be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationType {
    Audio,
    Video,
    Instant,
    Chat,
}

impl ConsultationType {
    pub const ALL: [ConsultationType; 4] = [
        ConsultationType::Audio,
        ConsultationType::Video,
        ConsultationType::Instant,
        ConsultationType::Chat,
    ];
}

/// One line of a doctor's education history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub title: String,
    pub place: String,
    /// Free-form year span, e.g. "2009-2012".
    pub years: String,
}

/// A single doctor in the catalog.
///
/// Profile-only fields (`about`, `education`, `specialty_tags`,
/// `satisfaction`) stay empty in search results and are filled in by the
/// profile lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRecord {
    /// Stable id, e.g. "doc-17".
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub gender: Gender,
    pub qualifications: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<EducationEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specialty_tags: Vec<String>,

    /// "City, ST".
    pub location: String,
    pub clinic: String,
    pub clinic_address: String,

    /// Whole currency units.
    pub consultation_fee: u32,
    pub duration_minutes: u32,
    pub experience_years: u32,

    /// Has capacity today.
    pub available: bool,
    /// Ascending time labels, possibly empty.
    pub available_slots_today: Vec<String>,
    pub consultation_types: Vec<ConsultationType>,

    /// One decimal place, roughly 3.5..=5.0.
    pub rating: f64,
    pub review_count: u32,
    /// Percentage; profile view only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfaction: Option<u8>,

    pub languages: Vec<String>,
}

impl DoctorRecord {
    pub fn offers(&self, kind: ConsultationType) -> bool {
        self.consultation_types.contains(&kind)
    }

    pub fn speaks(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    /// Copy of this record enriched with the fields shown on a profile page.
    ///
    /// Existing profile data is kept; only missing pieces get defaults.
    pub fn profile_view(&self) -> DoctorRecord {
        let mut profile = self.clone();

        if profile.about.is_none() {
            profile.about = Some(format!(
                "{} brings {} years of experience in {}. Committed to patient-centered care and evidence-based practice.",
                profile.name, profile.experience_years, profile.specialty
            ));
        }
        if profile.education.is_empty() {
            profile.education = vec![
                EducationEntry {
                    title: "Residency".into(),
                    place: "University Hospital".into(),
                    years: "2009-2012".into(),
                },
                EducationEntry {
                    title: "Doctor of Medicine (MD)".into(),
                    place: "Medical School".into(),
                    years: "2005-2009".into(),
                },
            ];
        }
        if profile.specialty_tags.is_empty() {
            profile.specialty_tags = vec![profile.specialty.clone()];
        }
        if profile.satisfaction.is_none() {
            profile.satisfaction = Some(satisfaction_for(&profile.id));
        }

        profile
    }
}

/// Stable satisfaction score in 95..=98 for a given id.
fn satisfaction_for(id: &str) -> u8 {
    let spread = id.bytes().fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    95 + (spread % 4) as u8
}


#[cfg(test)]
mod tests {
    use super::fixtures::doctor;
    use super::*;

    #[test]
    fn serializes_with_camel_case_field_names() {
        let d = doctor("doc-1", "Dr. Ada Brown", "Cardiology");
        let json = serde_json::to_value(&d).unwrap();

        assert_eq!(json["consultationFee"], 100);
        assert_eq!(json["availableSlotsToday"][0], "09:00 AM");
        assert_eq!(json["gender"], "female");
        assert_eq!(json["consultationTypes"][0], "video");
        assert!(json.get("satisfaction").is_none());
        assert!(json.get("specialtyTags").is_none());
    }

    #[test]
    fn profile_view_fills_missing_profile_fields_only() {
        let mut d = doctor("doc-7", "Dr. Ada Brown", "Neurology");
        d.about = Some("Custom bio".into());

        let profile = d.profile_view();

        assert_eq!(profile.about.as_deref(), Some("Custom bio"));
        assert_eq!(profile.education.len(), 2);
        assert_eq!(profile.specialty_tags, vec!["Neurology".to_string()]);
        let sat = profile.satisfaction.unwrap();
        assert!((95..=98).contains(&sat));
        // Source record untouched.
        assert!(d.satisfaction.is_none());
    }

    #[test]
    fn satisfaction_is_stable_per_id() {
        assert_eq!(satisfaction_for("doc-42"), satisfaction_for("doc-42"));
    }
}
