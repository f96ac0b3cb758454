// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! End-to-end pipeline tests against a local mock server: query building,
//! HTTP fetch, record extraction, merging and CSV persistence.

use scoutrs::application::listing::JobListing;
use scoutrs::config::settings::Settings;
use scoutrs::domain::models::extraction_rule::ExtractionRule;
use scoutrs::domain::models::search_request::{fields, SearchRequest};
use scoutrs::domain::models::site_profile::{
    FieldSelector, ParameterKeyMap, ProfileSelectors, SiteProfile,
};
use scoutrs::infrastructure::storage::csv_writer::WriteMode;
use std::collections::BTreeMap;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING_PAGE: &str = r#"
    <html><body>
    <ul class="results-list">
      <li>
        <a class="card-link" href="/jobs/1"></a>
        <h3 class="card-title">Rust Engineer</h3>
        <h4 class="card-company">Acme</h4>
        <span class="card-location">Berlin</span>
        <time datetime="2025-06-01">3 days ago</time>
      </li>
      <li>
        <a class="card-link" href="https://elsewhere.test/jobs/2"></a>
        <h3 class="card-title">Backend Engineer</h3>
        <h4 class="card-company">Globex</h4>
      </li>
      <li>
        <h3 class="card-title">Card without a link</h3>
      </li>
    </ul>
    </body></html>
"#;

fn mock_profile(server: &MockServer) -> SiteProfile {
    SiteProfile {
        platform: "MockBoard".to_string(),
        domain_name: server.uri(),
        search_endpoint: format!("{}/jobs", server.uri()),
        page_multiplier: 10,
        parameter_keys: ParameterKeyMap {
            search_query: Some("q".to_string()),
            job_location: Some("l".to_string()),
            experience_level: None,
            date_posted: None,
            page: Some("start".to_string()),
        },
        selectors: ProfileSelectors {
            result_list: FieldSelector::new("ul", Some("results-list")),
            result_item_tag: "li".to_string(),
            title: FieldSelector::new("h3", Some("card-title")),
            company: FieldSelector::new("h4", Some("card-company")),
            location: FieldSelector::new("span", Some("card-location")),
            posted: FieldSelector::new("time", None),
            link: FieldSelector::new("a", Some("card-link")),
        },
    }
}

fn requests_for(platform: &str, pages: &str) -> BTreeMap<String, SearchRequest> {
    let mut requests = BTreeMap::new();
    requests.insert(
        platform.to_string(),
        SearchRequest::new()
            .with_field(fields::SEARCH_QUERY, "engineer")
            .with_field(fields::NUMBER_OF_PAGES, pages),
    );
    requests
}

#[tokio::test]
async fn test_full_scrape_flow_against_mock_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(query_param("q", "engineer"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING_PAGE))
        .mount(&server)
        .await;

    let mut listing = JobListing::new(&Settings::default());
    listing.register_profile(mock_profile(&server));

    let results = listing
        .send_requests(&requests_for("MockBoard", "1"))
        .await
        .unwrap();

    // The linkless card is dropped, the other two survive.
    assert_eq!(results.len(), 2);
    assert_eq!(results.failed_tasks(), 0);

    let first = &results.records()[0];
    assert_eq!(first.job_link, format!("{}/jobs/1", server.uri()));
    assert_eq!(first.job_title.as_deref(), Some("Rust Engineer"));
    assert_eq!(first.company_name.as_deref(), Some("Acme"));
    assert_eq!(first.job_location.as_deref(), Some("Berlin"));
    assert_eq!(first.time_posted.as_deref(), Some("3 days ago"));

    let second = &results.records()[1];
    assert_eq!(second.job_link, "https://elsewhere.test/jobs/2");
}

#[tokio::test]
async fn test_pagination_hits_offset_urls() {
    let server = MockServer::start().await;
    for offset in ["0", "10", "20"] {
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(query_param("start", offset))
            .respond_with(ResponseTemplate::new(200).set_body_string(LISTING_PAGE))
            .expect(1)
            .mount(&server)
            .await;
    }

    let mut listing = JobListing::new(&Settings::default());
    listing.register_profile(mock_profile(&server));

    let results = listing
        .send_requests(&requests_for("MockBoard", "3"))
        .await
        .unwrap();

    // Two records per page across three pages; mock expectations verify
    // each offset was requested exactly once.
    assert_eq!(results.len(), 6);
}

#[tokio::test]
async fn test_server_error_yields_partial_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING_PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(query_param("start", "10"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut listing = JobListing::new(&Settings::default());
    listing.register_profile(mock_profile(&server));

    let results = listing
        .send_requests(&requests_for("MockBoard", "2"))
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results.failed_tasks(), 1);
}

#[tokio::test]
async fn test_user_rule_flows_into_csv_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING_PAGE))
        .mount(&server)
        .await;

    let mut listing = JobListing::new(&Settings::default());
    listing.register_profile(mock_profile(&server));
    listing
        .register_rule(
            "MockBoard",
            "PostedAt",
            ExtractionRule::new("time", None, Some("datetime")),
        )
        .unwrap();

    listing
        .send_requests(&requests_for("MockBoard", "1"))
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("jobs.csv");
    listing.save_results(&csv_path, WriteMode::Create).unwrap();

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "JobLink,JobTitle,CompanyName,JobLocation,TimePosted,PostedAt"
    );
    assert!(contents.contains("2025-06-01"));
    assert_eq!(lines.count(), 2);
}

#[tokio::test]
async fn test_two_platforms_merge_into_one_result_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING_PAGE))
        .mount(&server)
        .await;

    let mut listing = JobListing::new(&Settings::default());
    let mut first = mock_profile(&server);
    first.platform = "BoardA".to_string();
    first.search_endpoint = format!("{}/jobs", server.uri());
    let mut second = mock_profile(&server);
    second.platform = "BoardB".to_string();
    second.search_endpoint = format!("{}/jobs", server.uri());
    listing.register_profile(first);
    listing.register_profile(second);

    let mut requests = requests_for("BoardA", "1");
    requests.extend(requests_for("BoardB", "1"));

    let results = listing.send_requests(&requests).await.unwrap();
    assert_eq!(results.len(), 4);
    assert!(listing.history_display().contains("BoardA"));
    assert!(listing.history_display().contains("BoardB"));
}
