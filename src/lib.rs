// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Application layer
///
/// The listing facade composing the scraping pipeline per request.
pub mod application;

/// Configuration
///
/// Settings loaded from defaults, config files and environment variables.
pub mod config;

/// Domain layer
///
/// Core models (site profiles, requests, records), the error taxonomy and
/// the query-URL builder.
pub mod domain;

/// Infrastructure layer
///
/// HTTP transport, markup extraction, the fetch orchestrator, the site
/// profile registry and CSV persistence.
pub mod infrastructure;

/// Utilities
///
/// Telemetry bootstrap and the query history ring.
pub mod utils;
