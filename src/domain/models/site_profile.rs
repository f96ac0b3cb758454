// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Abstract query fields a caller can supply, independent of any platform's
/// native query-string vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    SearchQuery,
    JobLocation,
    ExperienceLevel,
    DatePosted,
    NumberOfPages,
}

impl SearchField {
    /// Parse an abstract field name as it appears in a search request.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SearchQuery" => Some(Self::SearchQuery),
            "JobLocation" => Some(Self::JobLocation),
            "ExperienceLevel" => Some(Self::ExperienceLevel),
            "DatePosted" => Some(Self::DatePosted),
            "NumberOfPages" => Some(Self::NumberOfPages),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SearchQuery => "SearchQuery",
            Self::JobLocation => "JobLocation",
            Self::ExperienceLevel => "ExperienceLevel",
            Self::DatePosted => "DatePosted",
            Self::NumberOfPages => "NumberOfPages",
        }
    }
}

/// Tag plus optional class, the unit every profile selector is made of.
/// A `None` class means "match the tag regardless of class".
#[derive(Debug, Clone)]
pub struct FieldSelector {
    pub tag: String,
    pub class: Option<String>,
}

impl FieldSelector {
    pub fn new(tag: &str, class: Option<&str>) -> Self {
        Self {
            tag: tag.to_string(),
            class: class.map(|c| c.to_string()),
        }
    }
}

/// Markup selectors for one platform's result page.
#[derive(Debug, Clone)]
pub struct ProfileSelectors {
    /// The element wrapping the whole listing.
    pub result_list: FieldSelector,
    /// Tag of one result card inside the listing.
    pub result_item_tag: String,
    pub title: FieldSelector,
    pub company: FieldSelector,
    pub location: FieldSelector,
    pub posted: FieldSelector,
    /// Anchor carrying the posting link. Some platforms wrap the whole
    /// card in this anchor, which the extractor checks for explicitly.
    pub link: FieldSelector,
}

/// Native query keys for the abstract search fields. `None` means the
/// platform has no equivalent and the field is dropped from built URLs.
#[derive(Debug, Clone, Default)]
pub struct ParameterKeyMap {
    pub search_query: Option<String>,
    pub job_location: Option<String>,
    pub experience_level: Option<String>,
    pub date_posted: Option<String>,
    pub page: Option<String>,
}

/// Static per-platform configuration. Profiles carry no logic; the query
/// builder and the record extractor are driven entirely by their contents.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    /// Registry name, e.g. "LinkedIn".
    pub platform: String,
    /// Prefix for absolutizing relative posting links.
    pub domain_name: String,
    /// Absolute search URL without query string.
    pub search_endpoint: String,
    /// Native page offset = page index * multiplier.
    pub page_multiplier: u32,
    pub parameter_keys: ParameterKeyMap,
    pub selectors: ProfileSelectors,
}

impl SiteProfile {
    /// Native query key for an abstract field, if the platform supports it.
    pub fn native_key(&self, field: SearchField) -> Option<&str> {
        let key = match field {
            SearchField::SearchQuery => &self.parameter_keys.search_query,
            SearchField::JobLocation => &self.parameter_keys.job_location,
            SearchField::ExperienceLevel => &self.parameter_keys.experience_level,
            SearchField::DatePosted => &self.parameter_keys.date_posted,
            SearchField::NumberOfPages => &self.parameter_keys.page,
        };
        key.as_deref()
    }
}
