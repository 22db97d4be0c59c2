//! Maps directory page state into a normalized [`FilterQuery`].

use crate::structs::doctor::ConsultationType;
use crate::structs::filter_query::FilterQuery;
use crate::structs::search_form::{AvailabilityOption, SearchForm};

/// Translate UI state into a query. Pure.
pub fn translate(form: &SearchForm) -> FilterQuery {
    let filters = &form.filters;
    let option = filters.availability_option;
    let page_size = form.view_mode.page_size();

    let search = non_empty(&form.search).or_else(|| non_empty(&filters.search_in_filters));

    let experience_min = if filters.experience_5_plus {
        Some(5)
    } else if filters.experience_2_plus {
        Some(2)
    } else {
        None
    };

    FilterQuery {
        search,
        location: non_empty(&form.location),
        specialty: filters.specialties.first().cloned(),
        gender: filters.gender,
        available_today: flag(option == Some(AvailabilityOption::Today) || filters.available_today),
        available_tomorrow: flag(
            option == Some(AvailabilityOption::Tomorrow) || filters.available_tomorrow,
        ),
        consultation_type: (option == Some(AvailabilityOption::Video))
            .then_some(ConsultationType::Video),
        price_min: Some(filters.price_range[0]),
        price_max: Some(filters.price_range[1]),
        experience_min,
        clinic: filters.clinics.first().cloned(),
        language: filters.languages.first().cloned(),
        rating_min: filters.rating,
        sort_by: Some(form.sort_by),
        offset: Some((form.page.max(1) - 1).saturating_mul(page_size)),
        limit: Some(page_size),
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

fn flag(on: bool) -> Option<bool> {
    on.then_some(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::filter_query::SortBy;
    use crate::structs::search_form::{DoctorFiltersState, ViewMode};

    fn bare_filters() -> DoctorFiltersState {
        DoctorFiltersState {
            availability_option: None,
            available_today: false,
            ..DoctorFiltersState::default()
        }
    }

    fn form(filters: DoctorFiltersState) -> SearchForm {
        SearchForm {
            filters,
            ..SearchForm::default()
        }
    }

    #[test]
    fn defaults_filter_today_over_full_price_range() {
        let q = translate(&SearchForm::default());
        assert_eq!(q.available_today, Some(true));
        assert_eq!(q.available_tomorrow, None);
        assert_eq!(q.consultation_type, None);
        assert_eq!((q.price_min, q.price_max), (Some(0), Some(500)));
        assert_eq!(q.sort_by, Some(SortBy::Rating));
        assert_eq!((q.offset, q.limit), (Some(0), Some(10)));
        assert_eq!(q.search, None);
    }

    #[test]
    fn search_bar_wins_over_filter_search() {
        let mut f = form(DoctorFiltersState {
            search_in_filters: "secondary".into(),
            ..bare_filters()
        });
        assert_eq!(translate(&f).search.as_deref(), Some("secondary"));

        f.search = "primary".into();
        assert_eq!(translate(&f).search.as_deref(), Some("primary"));
    }

    #[test]
    fn availability_radio_collapses_to_flags() {
        let with = |option| {
            translate(&form(DoctorFiltersState {
                availability_option: Some(option),
                ..bare_filters()
            }))
        };

        let today = with(AvailabilityOption::Today);
        assert_eq!((today.available_today, today.available_tomorrow), (Some(true), None));
        assert_eq!(today.consultation_type, None);

        let tomorrow = with(AvailabilityOption::Tomorrow);
        assert_eq!((tomorrow.available_today, tomorrow.available_tomorrow), (None, Some(true)));

        let video = with(AvailabilityOption::Video);
        assert_eq!((video.available_today, video.available_tomorrow), (None, None));
        assert_eq!(video.consultation_type, Some(ConsultationType::Video));
    }

    #[test]
    fn legacy_checkboxes_are_or_ed_with_radio() {
        let q = translate(&form(DoctorFiltersState {
            availability_option: Some(AvailabilityOption::Video),
            available_today: true,
            available_tomorrow: true,
            ..bare_filters()
        }));
        assert_eq!(q.available_today, Some(true));
        assert_eq!(q.available_tomorrow, Some(true));
        assert_eq!(q.consultation_type, Some(ConsultationType::Video));
    }

    #[test]
    fn five_plus_experience_wins() {
        let both = translate(&form(DoctorFiltersState {
            experience_2_plus: true,
            experience_5_plus: true,
            ..bare_filters()
        }));
        assert_eq!(both.experience_min, Some(5));

        let two = translate(&form(DoctorFiltersState {
            experience_2_plus: true,
            ..bare_filters()
        }));
        assert_eq!(two.experience_min, Some(2));

        assert_eq!(translate(&form(bare_filters())).experience_min, None);
    }

    #[test]
    fn multi_select_forwards_first_value_only() {
        let q = translate(&form(DoctorFiltersState {
            specialties: vec!["Urology".into(), "Neurology".into()],
            clinics: vec!["City Heart Clinic".into(), "NY Medical Center".into()],
            languages: vec!["French".into(), "German".into()],
            ..bare_filters()
        }));
        assert_eq!(q.specialty.as_deref(), Some("Urology"));
        assert_eq!(q.clinic.as_deref(), Some("City Heart Clinic"));
        assert_eq!(q.language.as_deref(), Some("French"));
    }

    #[test]
    fn page_and_view_mode_become_offset_and_limit() {
        let grid = SearchForm {
            page: 3,
            view_mode: ViewMode::Grid,
            sort_by: SortBy::Name,
            ..SearchForm::default()
        };
        let q = translate(&grid);
        assert_eq!((q.offset, q.limit), (Some(18), Some(9)));
        assert_eq!(q.sort_by, Some(SortBy::Name));

        let list = SearchForm {
            page: 0,
            ..SearchForm::default()
        };
        assert_eq!(translate(&list).offset, Some(0));
    }

    #[test]
    fn form_json_uses_ui_field_names() {
        let form: SearchForm = serde_json::from_str(
            r#"{"search":"","location":"Chicago","page":2,"viewMode":"grid","sortBy":"price_desc",
                "filters":{"availabilityOption":"tomorrow","experience5Plus":true,"priceRange":[100,200]}}"#,
        )
        .unwrap();
        let q = translate(&form);

        assert_eq!(q.location.as_deref(), Some("Chicago"));
        assert_eq!(q.available_tomorrow, Some(true));
        assert_eq!(q.experience_min, Some(5));
        assert_eq!((q.price_min, q.price_max), (Some(100), Some(200)));
        assert_eq!((q.offset, q.limit), (Some(9), Some(9)));
    }
}
