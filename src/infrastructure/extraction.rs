// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::extraction_rule::ExtractionRule;
use crate::domain::models::job_record::{JobRecord, ResultSet};
use crate::domain::models::site_profile::{FieldSelector, SiteProfile};
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Turn a tag plus optional class into a CSS selector. Lookup style: a
/// selector that fails to parse is diagnosed and treated as matching
/// nothing, never as a fault.
fn selector_for(tag: &str, class: Option<&str>) -> Option<Selector> {
    let css = match class {
        Some(class) => format!("{tag}.{class}"),
        None => tag.to_string(),
    };
    let selector = match Selector::parse(&css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            warn!(selector = %css, error = %e, "selector failed to parse, treating as no match");
            None
        }
    };
    selector
}

/// The single extraction primitive every field goes through: find the first
/// descendant of `item` matching `(tag, class)` and return the named
/// attribute's value, or the trimmed inner text when no attribute is given.
/// Absent on no match.
pub fn get_field(
    item: &ElementRef,
    tag: &str,
    class: Option<&str>,
    attribute: Option<&str>,
) -> Option<String> {
    let selector = selector_for(tag, class)?;
    let node = item.select(&selector).next()?;
    match attribute {
        Some(attribute) => node.value().attr(attribute).map(|v| v.trim().to_string()),
        None => Some(node.text().collect::<String>().trim().to_string()),
    }
}

fn get_selected_field(item: &ElementRef, selector: &FieldSelector) -> Option<String> {
    get_field(item, &selector.tag, selector.class.as_deref(), None)
}

/// Resolve the posting link for one result card. Some platforms wrap the
/// whole card in the anchor, so the card element itself is checked against
/// the link selector before searching its descendants. Relative links are
/// absolutized against the profile's domain.
fn resolve_link(profile: &SiteProfile, item: &ElementRef) -> Option<String> {
    let link = &profile.selectors.link;
    let element = item.value();

    let item_is_anchor = element.name() == link.tag
        && link
            .class
            .as_deref()
            .is_some_and(|class| element.classes().any(|c| c == class));

    let raw = if item_is_anchor {
        element.attr("href").map(|v| v.trim().to_string())
    } else {
        None
    }
    .or_else(|| get_field(item, &link.tag, link.class.as_deref(), Some("href")))?;

    Some(absolutize(&profile.domain_name, &raw))
}

fn absolutize(domain: &str, link: &str) -> String {
    if link.starts_with("https://") || link.starts_with("http://") {
        link.to_string()
    } else {
        format!("{domain}{link}")
    }
}

/// Extract all job records from one page of result markup.
///
/// A page without the result-list container is treated as an empty listing,
/// not as a fault; markup that cannot carry results at all is the
/// transport's problem, not the extractor's. Cards without a resolvable
/// link are dropped since the link is the record's identity. Records come
/// out in document order, so identical markup yields identical output.
pub fn extract(
    profile: &SiteProfile,
    html: &str,
    rules: &BTreeMap<String, ExtractionRule>,
    requested_fields: &[String],
) -> Vec<JobRecord> {
    let document = Html::parse_document(html);
    let selectors = &profile.selectors;

    let Some(list_selector) = selector_for(
        &selectors.result_list.tag,
        selectors.result_list.class.as_deref(),
    ) else {
        return Vec::new();
    };
    let Some(container) = document.select(&list_selector).next() else {
        debug!(platform = %profile.platform, "no result container in page, treating as empty listing");
        return Vec::new();
    };
    let Some(item_selector) = selector_for(&selectors.result_item_tag, None) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for item in container.select(&item_selector) {
        let Some(job_link) = resolve_link(profile, &item) else {
            debug!(platform = %profile.platform, "dropping result card without a link");
            continue;
        };

        let mut record = JobRecord::new(job_link);
        record.job_title = get_selected_field(&item, &selectors.title);
        record.company_name = get_selected_field(&item, &selectors.company);
        record.job_location = get_selected_field(&item, &selectors.location);
        record.time_posted = get_selected_field(&item, &selectors.posted);

        for name in requested_fields {
            if ResultSet::is_fixed_column(name) {
                continue;
            }
            let value = match rules.get(name) {
                Some(rule) => get_field(
                    &item,
                    &rule.tag,
                    rule.class.as_deref(),
                    rule.attribute.as_deref(),
                ),
                None => {
                    warn!(field = %name, "no extraction rule registered for requested field");
                    None
                }
            };
            record.extras.insert(name.clone(), value);
        }

        records.push(record);
    }

    records
}
