// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::models::extraction_rule::ExtractionRule;
use crate::domain::models::job_record::ResultSet;
use crate::domain::models::search_request::SearchRequest;
use crate::domain::models::site_profile::SiteProfile;
use crate::domain::scrape::error::ScrapeError;
use crate::domain::services::query_builder::build_query_url;
use crate::infrastructure::extraction;
use crate::infrastructure::orchestrator::{FetchOrchestrator, PageScraper, PageTask};
use crate::infrastructure::profiles::ProfileRegistry;
use crate::infrastructure::storage::csv_writer::{write_table, WriteMode};
use crate::infrastructure::storage::StorageError;
use crate::infrastructure::transport::{HttpTransport, Transport};
use crate::utils::history::{HistoryEntry, HistoryRing};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

type RuleMap = BTreeMap<String, ExtractionRule>;

/// Production [`PageScraper`]: fetch a page through the transport and run
/// the record extractor over it with the platform's profile and rules.
struct PlatformScraper {
    transport: Arc<dyn Transport>,
    profiles: BTreeMap<String, SiteProfile>,
    rules: BTreeMap<String, RuleMap>,
}

#[async_trait]
impl PageScraper for PlatformScraper {
    async fn scrape(&self, task: &PageTask) -> Result<ResultSet, ScrapeError> {
        let profile = self
            .profiles
            .get(&task.platform)
            .ok_or_else(|| ScrapeError::UnknownPlatform(task.platform.clone()))?;

        let html = self.transport.fetch(&task.url).await?;

        let empty = RuleMap::new();
        let rules = self.rules.get(&task.platform).unwrap_or(&empty);
        let requested: Vec<String> = rules.keys().cloned().collect();
        let records = extraction::extract(profile, &html, rules, &requested);
        Ok(ResultSet::from_records(&requested, records))
    }
}

/// Facade composing the whole pipeline: profile registry, query builder,
/// bounded fetch orchestrator, record extractor, history ring and CSV
/// persistence.
pub struct JobListing {
    registry: ProfileRegistry,
    rules: BTreeMap<String, RuleMap>,
    transport: Arc<dyn Transport>,
    orchestrator: FetchOrchestrator,
    history: HistoryRing,
    last_results: Option<ResultSet>,
}

impl JobListing {
    pub fn new(settings: &Settings) -> Self {
        let transport = Arc::new(HttpTransport::new(&settings.scraper));
        Self::with_transport(settings, transport)
    }

    /// Construct with an injected transport; used by tests and by callers
    /// that bring their own HTTP stack.
    pub fn with_transport(settings: &Settings, transport: Arc<dyn Transport>) -> Self {
        Self {
            registry: ProfileRegistry::builtin(),
            rules: BTreeMap::new(),
            transport,
            orchestrator: FetchOrchestrator::new(settings.scraper.pool_width),
            history: HistoryRing::new(settings.history.capacity),
            last_results: None,
        }
    }

    /// Register an additional site profile (or replace a built-in one).
    pub fn register_profile(&mut self, profile: SiteProfile) {
        self.registry.register(profile);
    }

    /// Register a user extraction rule; the field becomes part of the
    /// result schema for that platform.
    pub fn register_rule(
        &mut self,
        platform: &str,
        field: &str,
        rule: ExtractionRule,
    ) -> Result<(), ScrapeError> {
        if !self.registry.contains(platform) {
            return Err(ScrapeError::UnknownPlatform(platform.to_string()));
        }
        self.rules
            .entry(platform.to_string())
            .or_default()
            .insert(field.to_string(), rule);
        Ok(())
    }

    /// Fan one request per platform out into page tasks, fetch them over
    /// the bounded pool and merge the extracted records.
    ///
    /// Malformed requests and unknown platform names fail fast before any
    /// fetch. Per-page network and parse failures are isolated: they are
    /// logged and counted on the returned result set, which otherwise
    /// carries everything the surviving pages produced.
    pub async fn send_requests(
        &mut self,
        requests: &BTreeMap<String, SearchRequest>,
    ) -> Result<ResultSet, ScrapeError> {
        let started = Instant::now();

        let mut tasks = Vec::new();
        for (platform, request) in requests {
            let profile = self.registry.get(platform)?;
            let pages = request.number_of_pages()?;
            for page_index in 0..pages {
                let url = build_query_url(profile, request, page_index)?;
                debug!(platform = %platform, url = %url, "queued page request");
                tasks.push(PageTask {
                    platform: platform.clone(),
                    url,
                });
            }
        }

        let scraper = Arc::new(PlatformScraper {
            transport: self.transport.clone(),
            profiles: self.registry.snapshot(),
            rules: self.rules.clone(),
        });
        let results = self.orchestrator.run(&tasks, scraper).await;

        if results.failed_tasks() > 0 {
            warn!(
                failed = results.failed_tasks(),
                total = tasks.len(),
                "some page tasks failed, result set is partial"
            );
        }
        info!(
            records = results.len(),
            failed = results.failed_tasks(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "scrape finished"
        );

        self.history
            .append(HistoryEntry::new(describe(requests), results.clone()));
        self.last_results = Some(results.clone());
        Ok(results)
    }

    /// The most recent result set, if a search has run.
    pub fn results(&self) -> Option<&ResultSet> {
        self.last_results.as_ref()
    }

    /// Persist the most recent result set as a delimited file. Without a
    /// prior search there is nothing to save and the call is a logged no-op.
    pub fn save_results(&self, path: &Path, mode: WriteMode) -> Result<(), StorageError> {
        match &self.last_results {
            Some(results) => write_table(results, path, mode),
            None => {
                warn!("no search has been done, nothing to save");
                Ok(())
            }
        }
    }

    pub fn history_display(&self) -> String {
        self.history.to_string()
    }

    /// Result set of the nth most recent query, 1-based from the newest.
    pub fn nth_recent_query(&self, n: i64) -> Result<Option<&ResultSet>, ScrapeError> {
        Ok(self.history.nth_most_recent(n)?.map(|entry| &entry.results))
    }
}

fn describe(requests: &BTreeMap<String, SearchRequest>) -> String {
    requests
        .iter()
        .map(|(platform, request)| format!("{platform}: {{{request}}}"))
        .collect::<Vec<_>>()
        .join("; ")
}
