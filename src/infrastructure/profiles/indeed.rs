// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::site_profile::{
    FieldSelector, ParameterKeyMap, ProfileSelectors, SiteProfile,
};

/// Indeed profile. No experience-level or date-posted query keys; those
/// fields are dropped from built URLs. Result cards are wrapped in their
/// own anchor, which the extractor's self-is-link check handles.
pub fn profile() -> SiteProfile {
    SiteProfile {
        platform: "Indeed".to_string(),
        domain_name: "https://in.indeed.com".to_string(),
        search_endpoint: "https://in.indeed.com/jobs".to_string(),
        page_multiplier: 10,
        parameter_keys: ParameterKeyMap {
            search_query: Some("q".to_string()),
            job_location: Some("l".to_string()),
            experience_level: None,
            date_posted: None,
            page: Some("start".to_string()),
        },
        selectors: ProfileSelectors {
            result_list: FieldSelector::new("div", Some("mosaic-provider-jobcards")),
            result_item_tag: "a".to_string(),
            title: FieldSelector::new("h2", Some("jobTitle")),
            company: FieldSelector::new("span", Some("companyName")),
            location: FieldSelector::new("div", Some("companyLocation")),
            posted: FieldSelector::new("span", Some("date")),
            link: FieldSelector::new("a", Some("result")),
        },
    }
}
