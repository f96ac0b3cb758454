// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::site_profile::{
    FieldSelector, ParameterKeyMap, ProfileSelectors, SiteProfile,
};

/// Human-readable experience levels accepted by
/// [`experience_level_param`], in the order LinkedIn codes them.
pub const EXPERIENCE_LEVELS: [&str; 6] = [
    "Internship",
    "Associate",
    "Entry Level",
    "Mid-Senior Level",
    "Director",
    "Executive",
];

/// Map experience level names to LinkedIn's comma-separated 1-based `f_E`
/// codes. Unknown names are ignored; no known name yields `None`.
pub fn experience_level_param(levels: &[&str]) -> Option<String> {
    let codes: Vec<String> = levels
        .iter()
        .filter_map(|level| {
            EXPERIENCE_LEVELS
                .iter()
                .position(|known| known == level)
                .map(|index| (index + 1).to_string())
        })
        .collect();

    if codes.is_empty() {
        None
    } else {
        Some(codes.join(","))
    }
}

pub fn profile() -> SiteProfile {
    SiteProfile {
        platform: "LinkedIn".to_string(),
        domain_name: "https://linkedin.com".to_string(),
        search_endpoint: "https://linkedin.com/jobs/search".to_string(),
        page_multiplier: 1,
        parameter_keys: ParameterKeyMap {
            search_query: Some("keywords".to_string()),
            job_location: Some("location".to_string()),
            experience_level: Some("f_E".to_string()),
            date_posted: Some("f_TPR".to_string()),
            page: Some("pageNums".to_string()),
        },
        selectors: ProfileSelectors {
            result_list: FieldSelector::new("ul", Some("jobs-search__results-list")),
            result_item_tag: "li".to_string(),
            title: FieldSelector::new("h3", Some("base-search-card__title")),
            company: FieldSelector::new("h4", Some("base-search-card__subtitle")),
            location: FieldSelector::new("span", Some("job-search-card__location")),
            posted: FieldSelector::new("time", None),
            link: FieldSelector::new("a", Some("base-card__full-link")),
        },
    }
}
