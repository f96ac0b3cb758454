// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod indeed;
pub mod linkedin;

use crate::domain::models::site_profile::SiteProfile;
use crate::domain::scrape::error::ScrapeError;
use std::collections::BTreeMap;

/// Static registry of site profiles, populated at startup. Replaces the
/// dynamic per-platform module loading of older designs: an unknown name is
/// an `UnknownPlatform` error, not an import failure.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, SiteProfile>,
}

impl ProfileRegistry {
    /// Registry with the built-in LinkedIn and Indeed profiles.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        registry.register(linkedin::profile());
        registry.register(indeed::profile());
        registry
    }

    /// Register or replace a profile under its platform name.
    pub fn register(&mut self, profile: SiteProfile) {
        self.profiles.insert(profile.platform.clone(), profile);
    }

    pub fn get(&self, platform: &str) -> Result<&SiteProfile, ScrapeError> {
        self.profiles
            .get(platform)
            .ok_or_else(|| ScrapeError::UnknownPlatform(platform.to_string()))
    }

    pub fn contains(&self, platform: &str) -> bool {
        self.profiles.contains_key(platform)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.profiles.keys().map(String::as_str)
    }

    pub(crate) fn snapshot(&self) -> BTreeMap<String, SiteProfile> {
        self.profiles.clone()
    }
}
