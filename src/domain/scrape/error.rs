// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// Error taxonomy for the scraping pipeline.
///
/// `InvalidRequest` and `UnknownPlatform` abort a call before any fetch is
/// issued. `Network` and `Parse` are scoped to a single page task and are
/// isolated by the orchestrator rather than aborting the batch.
#[derive(Debug, Error, Clone)]
pub enum ScrapeError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
