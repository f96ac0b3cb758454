// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::Parser;
use scoutrs::application::listing::JobListing;
use scoutrs::config::settings::Settings;
use scoutrs::domain::models::search_request::{fields, SearchRequest};
use scoutrs::infrastructure::profiles::linkedin;
use scoutrs::infrastructure::storage::csv_writer::WriteMode;
use scoutrs::utils::telemetry;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Scrape job postings from multiple platforms into one table.
#[derive(Parser, Debug)]
#[command(name = "scoutrs", version, about)]
struct Cli {
    /// Platforms to query (repeatable)
    #[arg(short, long, default_values_t = [String::from("LinkedIn")])]
    platform: Vec<String>,

    /// Search keywords
    #[arg(short, long)]
    query: String,

    /// Job location
    #[arg(short, long)]
    location: Option<String>,

    /// Experience level filter (platform dependent)
    #[arg(long)]
    experience: Option<String>,

    /// Date-posted filter (platform dependent)
    #[arg(long)]
    date_posted: Option<String>,

    /// Result pages to request per platform
    #[arg(long, default_value_t = 1)]
    pages: u32,

    /// CSV output path (defaults to the configured path)
    #[arg(short, long)]
    output: Option<String>,

    /// Append to the output file instead of recreating it
    #[arg(long)]
    append: bool,

    /// Print records as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Print the recent query history after the run
    #[arg(long)]
    show_history: bool,
}

impl Cli {
    fn to_request(&self) -> SearchRequest {
        let mut request = SearchRequest::new().with_field(fields::SEARCH_QUERY, self.query.as_str());
        if let Some(location) = &self.location {
            request.insert(fields::JOB_LOCATION, location);
        }
        if let Some(experience) = &self.experience {
            // Accept friendly level names ("Associate,Director") and fall
            // back to the raw value for platform-native codes.
            let names: Vec<&str> = experience.split(',').map(str::trim).collect();
            let value = linkedin::experience_level_param(&names)
                .unwrap_or_else(|| experience.clone());
            request.insert(fields::EXPERIENCE_LEVEL, value);
        }
        if let Some(date_posted) = &self.date_posted {
            request.insert(fields::DATE_POSTED, date_posted);
        }
        request.insert(fields::NUMBER_OF_PAGES, self.pages.to_string());
        request
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();
    let cli = Cli::parse();

    let settings = Settings::new()?;
    let mut listing = JobListing::new(&settings);

    let request = cli.to_request();
    let mut requests = BTreeMap::new();
    for platform in &cli.platform {
        requests.insert(platform.clone(), request.clone());
    }

    let results = listing.send_requests(&requests).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(results.records())?);
    } else {
        println!("{results}");
    }

    let path = cli.output.unwrap_or_else(|| settings.output.path.clone());
    let mode = if cli.append {
        WriteMode::Append
    } else {
        WriteMode::Create
    };
    listing.save_results(Path::new(&path), mode)?;
    info!(path = %path, "results saved");

    if cli.show_history {
        println!("{}", listing.history_display());
    }

    Ok(())
}
