// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_request::SearchRequest;
use crate::domain::models::site_profile::{SearchField, SiteProfile};
use crate::domain::scrape::error::ScrapeError;
use tracing::warn;
use url::Url;

/// Build the concrete request URL for one page of a platform search.
///
/// Pure function of `(profile, request, page_index)`. Request fields iterate
/// in key order, so the output is deterministic for a given input. Fields the
/// platform does not map are dropped silently; field names the pipeline does
/// not recognize at all are diagnosed and skipped. The `NumberOfPages` field
/// only tells the caller how many pages to fan out; its emitted value is
/// always the native page offset `page_index * page_multiplier`.
///
/// A trailing `&` is left in place; every supported platform tolerates it.
pub fn build_query_url(
    profile: &SiteProfile,
    request: &SearchRequest,
    page_index: u32,
) -> Result<String, ScrapeError> {
    if profile.search_endpoint.is_empty() {
        return Err(ScrapeError::InvalidRequest(format!(
            "profile {} has no search endpoint",
            profile.platform
        )));
    }
    Url::parse(&profile.search_endpoint).map_err(|e| {
        ScrapeError::InvalidRequest(format!(
            "profile {} search endpoint {:?} is not an absolute URL: {e}",
            profile.platform, profile.search_endpoint
        ))
    })?;

    let mut query_url = format!("{}?", profile.search_endpoint);
    for (name, value) in request.iter() {
        let Some(field) = SearchField::from_name(name) else {
            warn!(field = %name, "query field not recognized, skipping");
            continue;
        };
        let Some(native_key) = profile.native_key(field) else {
            // Platform has no equivalent for this field.
            continue;
        };
        if field == SearchField::NumberOfPages {
            let offset = page_index * profile.page_multiplier;
            query_url.push_str(&format!("{native_key}={offset}&"));
        } else {
            query_url.push_str(&format!("{native_key}={}&", urlencoding::encode(value)));
        }
    }

    Ok(query_url)
}
