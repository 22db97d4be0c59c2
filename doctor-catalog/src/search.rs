//! Search pipeline: predicate filters, total count, ordering and windowing.

use std::cmp::Ordering;

use tracing::debug;

use crate::structs::doctor::DoctorRecord;
use crate::structs::filter_query::{FilterQuery, SortBy};
use crate::structs::result_page::ResultPage;

/// Run a query over `records` and return the requested window.
///
/// Stages are applied as a conjunction in a fixed order. `total` is taken
/// after filtering and before sorting/slicing. Only the window is cloned.
pub fn run_search(records: &[DoctorRecord], query: &FilterQuery) -> ResultPage {
    let mut hits: Vec<&DoctorRecord> = records.iter().filter(|d| matches(d, query)).collect();
    let total = hits.len();

    sort_hits(&mut hits, query.sort_key());

    let (offset, limit) = query.window();
    let doctors: Vec<DoctorRecord> = hits
        .into_iter()
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    debug!(
        target: "doctor_catalog::search",
        total,
        offset,
        limit,
        returned = doctors.len(),
        "run_search: done"
    );

    ResultPage { doctors, total }
}

/// True when `d` satisfies every predicate present in `q`.
pub fn matches(d: &DoctorRecord, q: &FilterQuery) -> bool {
    // 1) Free text over name / specialty / location / clinic.
    if let Some(text) = non_empty(&q.search) {
        let needle = text.to_lowercase();
        let hit = [&d.name, &d.specialty, &d.location, &d.clinic]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));
        if !hit {
            return false;
        }
    }

    // 2) Location substring.
    if let Some(loc) = non_empty(&q.location) {
        if !d.location.to_lowercase().contains(&loc.to_lowercase()) {
            return false;
        }
    }

    // 3) Specialty, 4) gender: exact.
    if let Some(specialty) = non_empty(&q.specialty) {
        if d.specialty != specialty {
            return false;
        }
    }
    if let Some(gender) = q.gender {
        if d.gender != gender {
            return false;
        }
    }

    // 5) Today and tomorrow share the one availability flag.
    if (q.available_today == Some(true) || q.available_tomorrow == Some(true)) && !d.available {
        return false;
    }

    // 6) Consultation type membership.
    if let Some(kind) = q.consultation_type {
        if !d.offers(kind) {
            return false;
        }
    }

    // 7) Price, inclusive; bounds checked independently so min > max matches nothing.
    if q.price_min.is_some_and(|min| d.consultation_fee < min) {
        return false;
    }
    if q.price_max.is_some_and(|max| d.consultation_fee > max) {
        return false;
    }

    // 8) Experience.
    if q.experience_min.is_some_and(|min| d.experience_years < min) {
        return false;
    }

    // 9) Clinic: exact.
    if let Some(clinic) = non_empty(&q.clinic) {
        if d.clinic != clinic {
            return false;
        }
    }

    // 10) Language membership.
    if let Some(language) = non_empty(&q.language) {
        if !d.speaks(language) {
            return false;
        }
    }

    // 11) Rating. A NaN minimum is unsatisfiable, like an inverted price range.
    if q.rating_min.is_some_and(|min| min.is_nan() || d.rating < min) {
        return false;
    }

    true
}

/// Stable sort; ties keep catalog order.
pub fn sort_hits(hits: &mut [&DoctorRecord], key: SortBy) {
    match key {
        SortBy::PriceAsc => hits.sort_by_key(|d| d.consultation_fee),
        SortBy::PriceDesc => hits.sort_by(|a, b| b.consultation_fee.cmp(&a.consultation_fee)),
        SortBy::Rating => hits.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Name => hits.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{SPECIALTIES, generate_doctors};
    use crate::structs::doctor::fixtures::doctor;
    use crate::structs::doctor::{ConsultationType, Gender};

    fn fixture() -> Vec<DoctorRecord> {
        let mut a = doctor("doc-1", "Dr. Zoe Adams", "Cardiology");
        a.consultation_fee = 300;
        a.rating = 4.2;
        a.location = "Houston, TX".into();
        a.clinic = "City Heart Clinic".into();

        let mut b = doctor("doc-2", "Dr. amy Brown", "Neurology");
        b.consultation_fee = 120;
        b.rating = 4.9;
        b.gender = Gender::Male;
        b.available = false;
        b.consultation_types = vec![ConsultationType::Chat];
        b.languages = vec!["French".into(), "English".into()];

        let mut c = doctor("doc-3", "Dr. Carl Chen", "Cardiology");
        c.consultation_fee = 120;
        c.rating = 5.0;
        c.experience_years = 2;
        c.location = "New York, NY".into();

        let mut e = doctor("doc-4", "Dr. Eve Davis", "Dentist");
        e.consultation_fee = 500;
        e.rating = 3.5;
        e.clinic = "Bright Smiles Dental Clinic".into();
        e.languages = vec!["Spanish".into()];

        vec![a, b, c, e]
    }

    fn ids(page: &ResultPage) -> Vec<&str> {
        page.doctors.iter().map(|d| d.id.as_str()).collect()
    }

    fn all(limit: usize) -> FilterQuery {
        FilterQuery {
            limit: Some(limit),
            ..FilterQuery::default()
        }
    }

    #[test]
    fn no_predicates_returns_whole_catalog_total() {
        let catalog = generate_doctors(450, Some(42));
        let page = run_search(&catalog, &FilterQuery::default());
        assert_eq!(page.total, 450);
        assert_eq!(page.doctors.len(), 9);
    }

    #[test]
    fn default_sort_is_rating_descending() {
        let page = run_search(&fixture(), &all(10));
        assert_eq!(ids(&page), vec!["doc-3", "doc-2", "doc-1", "doc-4"]);
    }

    #[test]
    fn free_text_matches_any_field_case_insensitively() {
        let catalog = fixture();
        let by = |s: &str| {
            run_search(
                &catalog,
                &FilterQuery {
                    search: Some(s.into()),
                    ..all(10)
                },
            )
        };

        assert_eq!(ids(&by("ADAMS")), vec!["doc-1"]);
        assert_eq!(by("cardio").total, 2);
        assert_eq!(ids(&by("houston")), vec!["doc-1"]);
        assert_eq!(ids(&by("bright smiles")), vec!["doc-4"]);
        assert_eq!(by("nowhere").total, 0);
    }

    #[test]
    fn empty_strings_are_no_constraint() {
        let q = FilterQuery {
            search: Some(String::new()),
            location: Some(String::new()),
            specialty: Some(String::new()),
            clinic: Some(String::new()),
            language: Some(String::new()),
            ..all(10)
        };
        assert_eq!(run_search(&fixture(), &q).total, 4);
    }

    #[test]
    fn exact_facets_and_memberships() {
        let catalog = fixture();

        let q = FilterQuery {
            specialty: Some("Cardiology".into()),
            ..all(10)
        };
        assert_eq!(run_search(&catalog, &q).total, 2);

        let q = FilterQuery {
            specialty: Some("cardiology".into()),
            ..all(10)
        };
        assert_eq!(run_search(&catalog, &q).total, 0);

        let q = FilterQuery {
            gender: Some(Gender::Male),
            ..all(10)
        };
        assert_eq!(ids(&run_search(&catalog, &q)), vec!["doc-2"]);

        let q = FilterQuery {
            clinic: Some("Bright Smiles Dental Clinic".into()),
            ..all(10)
        };
        assert_eq!(ids(&run_search(&catalog, &q)), vec!["doc-4"]);

        let q = FilterQuery {
            language: Some("French".into()),
            ..all(10)
        };
        assert_eq!(ids(&run_search(&catalog, &q)), vec!["doc-2"]);

        let q = FilterQuery {
            consultation_type: Some(ConsultationType::Video),
            ..all(10)
        };
        assert_eq!(run_search(&catalog, &q).total, 3);
    }

    #[test]
    fn tomorrow_uses_the_same_availability_flag_as_today() {
        let catalog = fixture();
        let today = FilterQuery {
            available_today: Some(true),
            ..all(10)
        };
        let tomorrow = FilterQuery {
            available_tomorrow: Some(true),
            ..all(10)
        };
        assert_eq!(run_search(&catalog, &today), run_search(&catalog, &tomorrow));
        assert_eq!(run_search(&catalog, &today).total, 3);

        let off = FilterQuery {
            available_today: Some(false),
            ..all(10)
        };
        assert_eq!(run_search(&catalog, &off).total, 4);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let q = FilterQuery {
            price_min: Some(120),
            price_max: Some(300),
            ..all(10)
        };
        let page = run_search(&fixture(), &q);
        assert_eq!(page.total, 3);
        assert!(page.doctors.iter().all(|d| (120..=300).contains(&d.consultation_fee)));
    }

    #[test]
    fn inverted_price_range_is_empty_not_an_error() {
        let catalog = generate_doctors(450, Some(42));
        let q = FilterQuery {
            price_min: Some(600),
            price_max: Some(50),
            ..FilterQuery::default()
        };
        assert_eq!(run_search(&catalog, &q), ResultPage::empty());
    }

    #[test]
    fn minimum_experience_and_rating_are_inclusive() {
        let catalog = fixture();
        let q = FilterQuery {
            experience_min: Some(5),
            ..all(10)
        };
        assert_eq!(run_search(&catalog, &q).total, 3);

        let q = FilterQuery {
            rating_min: Some(4.9),
            ..all(10)
        };
        assert_eq!(ids(&run_search(&catalog, &q)), vec!["doc-3", "doc-2"]);
    }

    #[test]
    fn rating_min_five_keeps_only_exact_fives() {
        let catalog = generate_doctors(450, Some(42));
        let fives = catalog.iter().filter(|d| d.rating == 5.0).count();
        let q = FilterQuery {
            rating_min: Some(5.0),
            limit: Some(450),
            ..FilterQuery::default()
        };
        let page = run_search(&catalog, &q);
        assert_eq!(page.total, fives);
        assert!(page.doctors.iter().all(|d| d.rating == 5.0));
    }

    #[test]
    fn nan_rating_min_matches_nothing() {
        let q = FilterQuery {
            rating_min: Some(f64::NAN),
            ..all(10)
        };
        assert_eq!(run_search(&fixture(), &q), ResultPage::empty());

        let q = FilterQuery {
            rating_min: Some(f64::NEG_INFINITY),
            ..all(10)
        };
        assert_eq!(run_search(&fixture(), &q).total, 4);
    }

    #[test]
    fn price_sorts_are_stable() {
        let catalog = fixture();
        let asc = run_search(
            &catalog,
            &FilterQuery {
                sort_by: Some(SortBy::PriceAsc),
                ..all(10)
            },
        );
        assert_eq!(ids(&asc), vec!["doc-2", "doc-3", "doc-1", "doc-4"]);

        let desc = run_search(
            &catalog,
            &FilterQuery {
                sort_by: Some(SortBy::PriceDesc),
                ..all(10)
            },
        );
        assert_eq!(ids(&desc), vec!["doc-4", "doc-1", "doc-2", "doc-3"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let page = run_search(
            &fixture(),
            &FilterQuery {
                sort_by: Some(SortBy::Name),
                ..all(10)
            },
        );
        assert_eq!(ids(&page), vec!["doc-2", "doc-3", "doc-4", "doc-1"]);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let catalog = generate_doctors(450, Some(9));
        for key in [SortBy::PriceAsc, SortBy::PriceDesc, SortBy::Rating, SortBy::Name] {
            let mut once: Vec<&DoctorRecord> = catalog.iter().collect();
            sort_hits(&mut once, key);
            let mut twice = once.clone();
            sort_hits(&mut twice, key);
            let a: Vec<&str> = once.iter().map(|d| d.id.as_str()).collect();
            let b: Vec<&str> = twice.iter().map(|d| d.id.as_str()).collect();
            assert_eq!(a, b, "{key:?}");
        }
    }

    #[test]
    fn cardiology_by_price_scenario() {
        let catalog = generate_doctors(450, Some(2024));
        let expected = catalog.iter().filter(|d| d.specialty == "Cardiology").count();
        assert!(expected > 0);

        let page = run_search(
            &catalog,
            &FilterQuery {
                specialty: Some("Cardiology".into()),
                sort_by: Some(SortBy::PriceAsc),
                offset: Some(0),
                limit: Some(9),
                ..FilterQuery::default()
            },
        );

        assert_eq!(page.total, expected);
        assert!(page.doctors.len() <= 9);
        assert!(page.doctors.iter().all(|d| d.specialty == "Cardiology"));
        assert!(
            page.doctors
                .windows(2)
                .all(|w| w[0].consultation_fee <= w[1].consultation_fee)
        );
    }

    #[test]
    fn specialty_totals_partition_the_catalog() {
        let catalog = generate_doctors(450, Some(5));
        let sum: usize = SPECIALTIES
            .iter()
            .map(|s| {
                run_search(
                    &catalog,
                    &FilterQuery {
                        specialty: Some(s.to_string()),
                        ..FilterQuery::default()
                    },
                )
                .total
            })
            .sum();
        assert_eq!(sum, run_search(&catalog, &FilterQuery::default()).total);
    }

    #[test]
    fn windows_are_disjoint_contiguous_and_complete() {
        let catalog = generate_doctors(450, Some(77));
        let base = FilterQuery {
            available_today: Some(true),
            sort_by: Some(SortBy::Name),
            ..FilterQuery::default()
        };

        let full = run_search(
            &catalog,
            &FilterQuery {
                limit: Some(usize::MAX),
                ..base.clone()
            },
        );
        assert_eq!(full.doctors.len(), full.total);

        let mut stitched = Vec::new();
        let mut offset = 0;
        loop {
            let page = run_search(
                &catalog,
                &FilterQuery {
                    offset: Some(offset),
                    limit: Some(10),
                    ..base.clone()
                },
            );
            assert_eq!(page.total, full.total);
            assert!(page.doctors.len() <= 10);
            if page.doctors.is_empty() {
                break;
            }
            stitched.extend(page.doctors);
            offset += 10;
        }

        assert_eq!(stitched, full.doctors);
    }

    #[test]
    fn offset_past_total_is_empty_with_total() {
        let q = FilterQuery {
            offset: Some(100),
            limit: Some(10),
            ..FilterQuery::default()
        };
        let page = run_search(&fixture(), &q);
        assert!(page.doctors.is_empty());
        assert_eq!(page.total, 4);
        assert!(!page.is_no_results());
    }

    #[test]
    fn zero_limit_keeps_total() {
        let page = run_search(&fixture(), &all(0));
        assert!(page.doctors.is_empty());
        assert_eq!(page.total, 4);
    }

    #[test]
    fn returned_records_are_independent_copies() {
        let catalog = fixture();
        let mut page = run_search(&catalog, &all(10));
        page.doctors[0].name = "changed".into();
        assert!(catalog.iter().all(|d| d.name != "changed"));
        assert_ne!(run_search(&catalog, &all(10)).doctors[0].name, "changed");
    }
}
