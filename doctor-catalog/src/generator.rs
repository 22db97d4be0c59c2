//! Pseudo-random catalog generation.
//!
//! Randomness happens here and only here; once generated, the catalog is
//! read-only and every search over it is deterministic.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

use crate::structs::doctor::{ConsultationType, DoctorRecord, Gender};

pub const SPECIALTIES: [&str; 10] = [
    "Psychologist",
    "Pediatrician",
    "Cardiology",
    "Urology",
    "Psychiatry",
    "Neurology",
    "Pulmonology",
    "Dentist",
    "Orthopedist",
    "Gynecologist",
];

const LOCATIONS: [&str; 7] = [
    "Minneapolis, MN",
    "Ogden, IA",
    "Chicago, IL",
    "Houston, TX",
    "Phoenix, AZ",
    "Philadelphia, PA",
    "New York, NY",
];

/// (clinic name, clinic address)
pub const CLINICS: [(&str, &str); 7] = [
    ("Bright Smiles Dental Clinic", "100 Main St. Minneapolis, MN"),
    ("Family Care Clinic", "22 Baker St. New York, NY"),
    ("Express Health Clinic", "105 5th Ave, New York, NY"),
    ("City Medical Center", "450 Lexington Ave, New York, NY"),
    ("City Heart Clinic", "22 Baker St. New York, NY"),
    ("East Side Cardiology", "105 5th Ave, New York, NY"),
    ("NY Medical Center", "450 Lexington Ave, New York, NY"),
];

const QUALIFICATIONS: [&str; 5] = [
    "MBBS, MD, FRCP",
    "MBBS, PhD",
    "MD, FACC",
    "MD, FACP",
    "DO, MPH",
];

/// Ascending by time of day.
const SLOT_TIMES: [&str; 9] = [
    "09:00 AM", "10:00 AM", "10:30 AM", "11:30 AM", "01:00 PM", "02:00 PM", "03:30 PM",
    "04:30 PM", "05:00 PM",
];

pub const LANGUAGES: [&str; 6] = [
    "English",
    "French",
    "Spanish",
    "German",
    "Mandarin",
    "Cantonese",
];

const FIRST_NAMES: [&str; 13] = [
    "James", "Sarah", "Michael", "Emily", "David", "Jessica", "Robert", "Amanda", "John", "Lisa",
    "Chen", "Mitchell", "Wilson",
];

const LAST_NAMES: [&str; 12] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Wilson",
    "Martinez", "Chen", "Mitchell",
];

const EXPERIENCE_YEARS: [u32; 5] = [2, 5, 10, 14, 22];
const DURATIONS: [u32; 3] = [30, 45, 60];

/// Generate `count` records with ids `doc-1..doc-count`.
///
/// The same `seed` always yields the same catalog; `None` seeds from OS entropy.
pub fn generate_doctors(count: usize, seed: Option<u64>) -> Vec<DoctorRecord> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let doctors: Vec<DoctorRecord> = (0..count)
        .map(|i| generate_one(&mut rng, i + 1))
        .collect();

    info!(
        target: "doctor_catalog::generator",
        count = doctors.len(),
        seeded = seed.is_some(),
        "generate_doctors: catalog ready"
    );

    doctors
}

fn generate_one(rng: &mut StdRng, ordinal: usize) -> DoctorRecord {
    let (clinic, clinic_address) = *pick(rng, &CLINICS);
    let experience_years = *pick(rng, &EXPERIENCE_YEARS);
    let slot_count = if rng.gen_bool(0.8) {
        rng.gen_range(2..=5)
    } else {
        0
    };

    DoctorRecord {
        id: format!("doc-{ordinal}"),
        name: format!("Dr. {} {}", pick(rng, &FIRST_NAMES), pick(rng, &LAST_NAMES)),
        specialty: pick(rng, &SPECIALTIES).to_string(),
        rating: ((3.5 + rng.r#gen::<f64>() * 1.5) * 10.0).round() / 10.0,
        review_count: rng.gen_range(80..=1200),
        available: rng.gen_bool(0.75),
        location: pick(rng, &LOCATIONS).to_string(),
        clinic_address: clinic_address.to_string(),
        duration_minutes: *pick(rng, &DURATIONS),
        consultation_fee: rng.gen_range(95..=500),
        gender: if rng.gen_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        },
        experience_years,
        qualifications: format!(
            "{} - {experience_years} Years Experience",
            pick(rng, &QUALIFICATIONS)
        ),
        clinic: clinic.to_string(),
        consultation_types: ConsultationType::ALL
            .into_iter()
            .filter(|_| rng.gen_bool(0.6))
            .collect(),
        languages: LANGUAGES
            .iter()
            .filter(|_| rng.gen_bool(0.5))
            .map(|l| l.to_string())
            .collect(),
        available_slots_today: SLOT_TIMES[..slot_count]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        about: None,
        education: Vec::new(),
        specialty_tags: Vec::new(),
        satisfaction: None,
    }
}

fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn same_seed_same_catalog() {
        assert_eq!(generate_doctors(50, Some(7)), generate_doctors(50, Some(7)));
    }

    #[test]
    fn ids_are_unique_and_sequential() {
        let doctors = generate_doctors(450, Some(1));
        let ids: HashSet<&str> = doctors.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), 450);
        assert_eq!(doctors[0].id, "doc-1");
        assert_eq!(doctors[449].id, "doc-450");
    }

    #[test]
    fn attributes_stay_within_generated_domains() {
        for d in generate_doctors(450, Some(3)) {
            assert!(SPECIALTIES.contains(&d.specialty.as_str()));
            assert!((3.5..=5.0).contains(&d.rating));
            assert_eq!((d.rating * 10.0).round() / 10.0, d.rating);
            assert!((95..=500).contains(&d.consultation_fee));
            assert!((80..=1200).contains(&d.review_count));
            assert!(EXPERIENCE_YEARS.contains(&d.experience_years));
            assert!(d.qualifications.ends_with("Years Experience"));
            assert!(CLINICS.iter().any(|(name, addr)| *name == d.clinic && *addr == d.clinic_address));
            assert!(d.available_slots_today.is_empty() || (2..=5).contains(&d.available_slots_today.len()));
            assert!(d.languages.iter().all(|l| LANGUAGES.contains(&l.as_str())));
        }
    }

    #[test]
    fn slots_keep_ascending_order() {
        for d in generate_doctors(100, Some(11)) {
            let expected: Vec<String> = SLOT_TIMES[..d.available_slots_today.len()]
                .iter()
                .map(|s| s.to_string())
                .collect();
            assert_eq!(d.available_slots_today, expected);
        }
    }
}
