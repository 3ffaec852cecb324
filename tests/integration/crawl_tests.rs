//! Integration tests for the harvester
//!
//! These tests use wiremock to serve a small store directory and drive the
//! full harvest end-to-end through the HTTP renderer.

use directory_harvest::config::{
    Config, CrawlerConfig, OutputConfig, SelectorConfig, UserAgentConfig,
};
use directory_harvest::crawler::harvest;
use directory_harvest::model::Record;
use directory_harvest::output::{CsvSink, NullProgress, Sink, SinkResult};
use directory_harvest::renderer::HttpRenderer;
use directory_harvest::HarvestError;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration rooted at the mock server
fn create_test_config(root_url: &str, csv_path: &str) -> Config {
    Config {
        crawler: CrawlerConfig {
            root_url: root_url.to_string(),
            navigation_timeout: 2_000,
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: "https://example.com/contact".to_string(),
            contact_email: "test@example.com".to_string(),
        },
        output: OutputConfig {
            csv_path: csv_path.to_string(),
        },
        selectors: SelectorConfig::default(),
    }
}

/// Sink that remembers what it was given
#[derive(Default)]
struct RecordingSink {
    calls: usize,
    records: Vec<Record>,
}

impl Sink for RecordingSink {
    fn write(&mut self, records: &[Record]) -> SinkResult<usize> {
        self.calls += 1;
        self.records = records.to_vec();
        Ok(records.len())
    }
}

fn renderer(config: &Config) -> HttpRenderer {
    HttpRenderer::from_config(config).expect("Failed to build renderer")
}

async fn mount_html(server: &MockServer, page_path: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html"))
        .mount(server)
        .await;
}

fn directory_page(links: &[&str]) -> String {
    let anchors: String = links
        .iter()
        .map(|href| format!(r#"<a class="Directory-listLink" href="{}">{}</a>"#, href, href))
        .collect();
    format!("<html><body><ul>{}</ul></body></html>", anchors)
}

fn suburb_page(links: &[&str]) -> String {
    let teasers: String = links
        .iter()
        .map(|href| {
            format!(
                r#"<article><h2><a class="Teaser-titleLink" href="{}">Store</a></h2></article>"#,
                href
            )
        })
        .collect();
    format!("<html><body>{}</body></html>", teasers)
}

fn store_page(name: &str, street: &str, suburb: &str, postcode: &str) -> String {
    format!(
        r#"<html><head>
        <meta itemprop="latitude" content="-33.8688">
        <meta itemprop="longitude" content="151.2093">
        </head><body>
        <h1 class="Heading Hero-heading" id="location-name"> {} </h1>
        <address>
            <div class="Address-line"><span class="Address-field Address-line1">{}</span></div>
            <div class="Address-line">
                <span class="Address-field Address-city">{}</span>
                <abbr class="Address-field Address-region">NSW</abbr>
                <span class="Address-field Address-postalCode">{}</span>
            </div>
        </address>
        </body></html>"#,
        name, street, suburb, postcode
    )
}

#[tokio::test]
async fn test_single_store_leaf_writes_one_row() {
    let mock_server = MockServer::start().await;

    mount_html(&mock_server, "/", directory_page(&["/nsw"])).await;
    mount_html(&mock_server, "/nsw", directory_page(&["/nsw/bondi-junction"])).await;
    mount_html(
        &mock_server,
        "/nsw/bondi-junction",
        store_page("ALDI Bondi Junction", "500 Oxford St", "Bondi Junction", "2022"),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("aldi_locations.csv");
    let config = create_test_config(
        &format!("{}/", mock_server.uri()),
        &csv_path.display().to_string(),
    );

    let mut sink = CsvSink::new(&config.output.csv_path);
    let result = harvest(&config, renderer(&config), &mut sink, &mut NullProgress)
        .await
        .expect("Harvest failed");

    assert_eq!(result.len(), 1);
    assert_eq!(
        result.records[0],
        Record {
            name: "ALDI Bondi Junction".to_string(),
            street: "500 Oxford St".to_string(),
            suburb: "Bondi Junction".to_string(),
            state: "NSW".to_string(),
            postcode: "2022".to_string(),
            latitude: "-33.8688".to_string(),
            longitude: "151.2093".to_string(),
        }
    );

    let content = std::fs::read_to_string(&csv_path).expect("CSV not written");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2, "expected header plus one row: {:?}", lines);
    assert_eq!(lines[0], "name,street,suburb,state,postcode,latitude,longitude");
    assert_eq!(
        lines[1],
        "ALDI Bondi Junction,500 Oxford St,Bondi Junction,NSW,2022,-33.8688,151.2093"
    );
}

#[tokio::test]
async fn test_suburb_listing_with_failing_store() {
    let mock_server = MockServer::start().await;

    mount_html(&mock_server, "/", directory_page(&["/nsw"])).await;
    mount_html(&mock_server, "/nsw", directory_page(&["/nsw/sydney"])).await;
    mount_html(
        &mock_server,
        "/nsw/sydney",
        suburb_page(&["/nsw/sydney/closed", "/nsw/sydney/george-st"]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/nsw/sydney/closed"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    mount_html(
        &mock_server,
        "/nsw/sydney/george-st",
        store_page("ALDI George St", "680 George St", "Sydney", "2000"),
    )
    .await;

    let config = create_test_config(&format!("{}/", mock_server.uri()), "unused.csv");
    let mut sink = RecordingSink::default();
    let result = harvest(&config, renderer(&config), &mut sink, &mut NullProgress)
        .await
        .expect("A failing store page must not abort the run");

    assert_eq!(result.len(), 1);
    assert_eq!(result.records[0].name, "ALDI George St");
    assert_eq!(result.stats.store_urls, 2);
    assert_eq!(result.stats.navigation_failures, 1);

    assert_eq!(sink.calls, 1);
    assert_eq!(sink.records, result.records);
}

#[tokio::test]
async fn test_unreachable_root_aborts_before_sink() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&format!("{}/", mock_server.uri()), "unused.csv");
    let mut sink = RecordingSink::default();
    let result = harvest(&config, renderer(&config), &mut sink, &mut NullProgress).await;

    assert!(
        matches!(result, Err(HarvestError::RootUnreachable { .. })),
        "expected RootUnreachable, got {:?}",
        result.map(|r| r.len())
    );
    assert_eq!(sink.calls, 0);
}

#[tokio::test]
async fn test_empty_root_keeps_previous_csv() {
    let mock_server = MockServer::start().await;

    mount_html(&mock_server, "/", String::new()).await;

    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("aldi_locations.csv");
    let previous = "name,street,suburb,state,postcode,latitude,longitude\nALDI Old,1 Old Rd,Old,NSW,2000,0,0\n";
    std::fs::write(&csv_path, previous).unwrap();

    let config = create_test_config(
        &format!("{}/", mock_server.uri()),
        &csv_path.display().to_string(),
    );
    let mut sink = CsvSink::new(&config.output.csv_path);
    let result = harvest(&config, renderer(&config), &mut sink, &mut NullProgress).await;

    assert!(
        matches!(result, Err(HarvestError::RootUnreadable { .. })),
        "expected RootUnreadable, got {:?}",
        result.map(|r| r.len())
    );
    assert_eq!(std::fs::read_to_string(&csv_path).unwrap(), previous);
}

#[tokio::test]
async fn test_failing_region_does_not_abort() {
    let mock_server = MockServer::start().await;

    mount_html(&mock_server, "/", directory_page(&["/qld", "/vic"])).await;
    Mock::given(method("GET"))
        .and(path("/qld"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    mount_html(&mock_server, "/vic", directory_page(&["/vic/richmond"])).await;
    mount_html(
        &mock_server,
        "/vic/richmond",
        store_page("ALDI Richmond", "9 Church St", "Richmond", "3121"),
    )
    .await;

    let config = create_test_config(&format!("{}/", mock_server.uri()), "unused.csv");
    let mut sink = RecordingSink::default();
    let result = harvest(&config, renderer(&config), &mut sink, &mut NullProgress)
        .await
        .expect("A failing region must not abort the run");

    assert_eq!(result.stats.regions, 2);
    assert_eq!(result.stats.leaf_urls, 1);
    assert_eq!(result.len(), 1);
    assert_eq!(result.records[0].suburb, "Richmond");
}

#[tokio::test]
async fn test_slow_leaf_times_out_and_is_skipped() {
    let mock_server = MockServer::start().await;

    mount_html(&mock_server, "/", directory_page(&["/wa"])).await;
    mount_html(&mock_server, "/wa", directory_page(&["/wa/slow", "/wa/perth"])).await;
    Mock::given(method("GET"))
        .and(path("/wa/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(store_page("Slow", "1 Slow Rd", "Nowhere", "6000"), "text/html")
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;
    mount_html(
        &mock_server,
        "/wa/perth",
        store_page("ALDI Perth", "1 Hay St", "Perth", "6000"),
    )
    .await;

    let mut config = create_test_config(&format!("{}/", mock_server.uri()), "unused.csv");
    config.crawler.navigation_timeout = 300;

    let mut sink = RecordingSink::default();
    let result = harvest(&config, renderer(&config), &mut sink, &mut NullProgress)
        .await
        .expect("A timed out page must not abort the run");

    assert_eq!(result.len(), 1);
    assert_eq!(result.records[0].name, "ALDI Perth");
    assert_eq!(result.stats.navigation_failures, 1);
}
