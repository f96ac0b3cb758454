// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::scrape::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Canonical abstract field names accepted in a [`SearchRequest`].
pub mod fields {
    pub const SEARCH_QUERY: &str = "SearchQuery";
    pub const JOB_LOCATION: &str = "JobLocation";
    pub const EXPERIENCE_LEVEL: &str = "ExperienceLevel";
    pub const DATE_POSTED: &str = "DatePosted";
    pub const NUMBER_OF_PAGES: &str = "NumberOfPages";
}

/// Abstract, platform-independent search input: a mapping of abstract field
/// name to value. Keys are plain strings so that unrecognized names survive
/// to the query builder, which diagnoses and skips them instead of failing.
///
/// Iteration order is the `BTreeMap` key order, which keeps built URLs
/// deterministic for a given request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    fields: BTreeMap<String, String>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, value: impl Into<String>) -> &mut Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_field(mut self, field: &str, value: impl Into<String>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// How many result pages to request. Defaults to 1 when the field is
    /// absent; zero or a non-numeric value is malformed input.
    pub fn number_of_pages(&self) -> Result<u32, ScrapeError> {
        let Some(raw) = self.fields.get(fields::NUMBER_OF_PAGES) else {
            return Ok(1);
        };
        let pages: u32 = raw.parse().map_err(|_| {
            ScrapeError::InvalidRequest(format!("NumberOfPages is not a number: {raw:?}"))
        })?;
        if pages == 0 {
            return Err(ScrapeError::InvalidRequest(
                "NumberOfPages must be at least 1".to_string(),
            ));
        }
        Ok(pages)
    }
}

impl fmt::Display for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, value) in &self.fields {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{field}={value}")?;
            first = false;
        }
        Ok(())
    }
}
