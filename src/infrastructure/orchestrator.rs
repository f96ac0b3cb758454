// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_record::ResultSet;
use crate::domain::scrape::error::ScrapeError;
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tracing::warn;

/// Default number of page fetches in flight at once.
pub const DEFAULT_POOL_WIDTH: usize = 5;

/// One unit of work: fetch a URL and extract records for a platform.
#[derive(Debug, Clone)]
pub struct PageTask {
    pub platform: String,
    pub url: String,
}

/// Seam between the orchestrator and the fetch/extract pipeline. The
/// production implementation lives in the listing facade; tests inject
/// stubs with scripted outcomes.
#[async_trait]
pub trait PageScraper: Send + Sync {
    async fn scrape(&self, task: &PageTask) -> Result<ResultSet, ScrapeError>;
}

/// Fans page tasks out over a bounded worker pool and merges their results.
///
/// Concurrency is capped by a semaphore; each task's outcome lands in its
/// own slot via `join_all`, so the merge runs single-threaded over slots in
/// submission order. That keeps the combined result set deterministic for a
/// given set of task outcomes and leaves no accumulator shared between
/// workers.
///
/// A failing task never aborts the batch: it is logged and counted on the
/// merged result set, and contributes no records. No retries, no backoff.
pub struct FetchOrchestrator {
    pool_width: usize,
}

impl Default for FetchOrchestrator {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_WIDTH)
    }
}

impl FetchOrchestrator {
    pub fn new(pool_width: usize) -> Self {
        Self {
            pool_width: pool_width.max(1),
        }
    }

    pub async fn run(&self, tasks: &[PageTask], scraper: Arc<dyn PageScraper>) -> ResultSet {
        self.run_with_cancellation(tasks, scraper, CancellationToken::new())
            .await
    }

    /// Like [`run`](Self::run), but aborts tasks still pending when `cancel`
    /// fires. Slots already completed stay in the merged result set;
    /// cancelled tasks count as failed.
    pub async fn run_with_cancellation(
        &self,
        tasks: &[PageTask],
        scraper: Arc<dyn PageScraper>,
        cancel: CancellationToken,
    ) -> ResultSet {
        let semaphore = Arc::new(Semaphore::new(self.pool_width));

        let task_futures = tasks.iter().map(|task| {
            let semaphore = semaphore.clone();
            let scraper = scraper.clone();
            let cancel = cancel.clone();
            async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => {
                        return Err(ScrapeError::Network("worker pool closed".to_string()));
                    }
                };
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        Err(ScrapeError::Network("batch cancelled".to_string()))
                    }
                    outcome = scraper.scrape(task) => outcome,
                }
            }
        });

        let outcomes = join_all(task_futures).await;

        let mut merged = ResultSet::default();
        for (task, outcome) in tasks.iter().zip(outcomes) {
            match outcome {
                Ok(result_set) => merged.merge(result_set),
                Err(e) => {
                    warn!(
                        platform = %task.platform,
                        url = %task.url,
                        error = %e,
                        "page task failed, contributing no records"
                    );
                    merged.record_failure();
                }
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::job_record::JobRecord;

    /// Scripted scraper: URLs containing "fail" error out, everything else
    /// yields one record per trailing digit of the URL.
    struct ScriptedScraper;

    #[async_trait]
    impl PageScraper for ScriptedScraper {
        async fn scrape(&self, task: &PageTask) -> Result<ResultSet, ScrapeError> {
            if task.url.contains("fail") {
                return Err(ScrapeError::Network("connection refused".to_string()));
            }
            let count: usize = task.url.chars().last().unwrap().to_digit(10).unwrap() as usize;
            let mut set = ResultSet::default();
            for i in 0..count {
                set.push(JobRecord::new(format!("{}#{i}", task.url)));
            }
            Ok(set)
        }
    }

    fn task(url: &str) -> PageTask {
        PageTask {
            platform: "Test".to_string(),
            url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_failed_task_does_not_abort_batch() {
        let orchestrator = FetchOrchestrator::default();
        let tasks = vec![
            task("https://x.test/page-2"),
            task("https://x.test/fail-0"),
            task("https://x.test/page-1"),
        ];

        let merged = orchestrator.run(&tasks, Arc::new(ScriptedScraper)).await;
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.failed_tasks(), 1);
    }

    #[tokio::test]
    async fn test_merge_preserves_submission_order() {
        let orchestrator = FetchOrchestrator::new(2);
        let tasks = vec![
            task("https://x.test/a-1"),
            task("https://x.test/b-1"),
            task("https://x.test/c-1"),
        ];

        let merged = orchestrator.run(&tasks, Arc::new(ScriptedScraper)).await;
        let links: Vec<&str> = merged.records().iter().map(|r| r.job_link.as_str()).collect();
        assert_eq!(
            links,
            vec![
                "https://x.test/a-1#0",
                "https://x.test/b-1#0",
                "https://x.test/c-1#0"
            ]
        );
    }

    #[tokio::test]
    async fn test_all_tasks_failing_yields_empty_partial_set() {
        let orchestrator = FetchOrchestrator::default();
        let tasks = vec![task("https://x.test/fail-0"), task("https://x.test/fail-1")];

        let merged = orchestrator.run(&tasks, Arc::new(ScriptedScraper)).await;
        assert!(merged.is_empty());
        assert_eq!(merged.failed_tasks(), 2);
    }

    #[tokio::test]
    async fn test_cancelled_batch_counts_pending_tasks_as_failed() {
        let orchestrator = FetchOrchestrator::default();
        let tasks = vec![task("https://x.test/a-1"), task("https://x.test/b-1")];

        let cancel = CancellationToken::new();
        cancel.cancel();

        let merged = orchestrator
            .run_with_cancellation(&tasks, Arc::new(ScriptedScraper), cancel)
            .await;
        assert_eq!(merged.failed_tasks(), 2);
        assert!(merged.is_empty());
    }

    #[tokio::test]
    async fn test_pool_width_bounds_concurrency() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct CountingScraper {
            in_flight: AtomicUsize,
            peak: AtomicUsize,
        }

        #[async_trait]
        impl PageScraper for CountingScraper {
            async fn scrape(&self, _task: &PageTask) -> Result<ResultSet, ScrapeError> {
                let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                self.peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                self.in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok(ResultSet::default())
            }
        }

        let scraper = Arc::new(CountingScraper {
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        });
        let tasks: Vec<PageTask> = (0..8).map(|i| task(&format!("https://x.test/{i}"))).collect();

        FetchOrchestrator::new(2).run(&tasks, scraper.clone()).await;
        assert!(scraper.peak.load(Ordering::SeqCst) <= 2);
    }
}
