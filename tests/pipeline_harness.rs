//! End-to-end pipeline harness: record source → envelope → normalize → render.
//!
//! # What this covers
//!
//! - **HTTP**: bins fetched from a fake JSONBin API (axum), with and without
//!   an access key; unknown bins are a status error.
//! - **Envelope failures**: missing `record` and missing `gradientData` are
//!   reported as such, not as parse failures.
//! - **Parse failures** keep the detected format so the user sees which path
//!   failed.
//! - **File source** in envelope and raw mode.
//!
//! # What this does NOT cover
//!
//! - Live TLS handshakes against the real API (only the https URL is built)
//! - The interactive preview (see the `gradbin-tui` unit tests)
//!
//! # Running
//!
//! ```sh
//! cargo test --test pipeline_harness
//! ```

mod common;
use common::fake_jsonbin_api::FakeJsonBinApi;
use common::*;

use gradbin::{fetch_and_load, LoadError, PayloadKind, SourceFormat};
use gradbin_core::{config::Config, PayloadError};
use gradbin_feeds::{FetchError, FileSource, HttpSource, Source};
use pretty_assertions::assert_eq;

const XML_DESCRIPTOR: &str = "linear-gradient(to right, #112233 0%, #888888 50%, #FFFFFF 100%)";

async fn api_with(bins: &[(&str, String)]) -> FakeJsonBinApi {
    let api = FakeJsonBinApi::start().await.unwrap();
    for (id, body) in bins {
        api.put_bin(id, body.clone()).await;
    }
    api
}

#[tokio::test]
async fn xml_bin_loads_over_http() {
    let api = api_with(&[("xml-bin", envelope(XML_FULL))]).await;
    let source = HttpSource::new(api.base_url());

    let loaded = fetch_and_load(&source, "xml-bin", PayloadKind::Envelope)
        .await
        .unwrap();

    assert_eq!(loaded.format, SourceFormat::Xml);
    assert_descriptor!(loaded, XML_DESCRIPTOR);
    assert_eq!(
        loaded.messages()[0],
        "Format detected: XML → converted to structured JSON."
    );
    assert_eq!(api.last_master_key().await, None);
}

#[tokio::test]
async fn json_bin_loads_with_access_key() {
    let api = api_with(&[("json-bin", envelope(JSON_FULL))]).await;
    let source = HttpSource::new(api.base_url()).with_access_key(Some("$2a$10$key".into()));

    let loaded = fetch_and_load(&source, "  json-bin  ", PayloadKind::Envelope)
        .await
        .unwrap();

    assert_eq!(loaded.format, SourceFormat::Json);
    assert_descriptor!(loaded, XML_DESCRIPTOR);
    assert_eq!(api.last_master_key().await.as_deref(), Some("$2a$10$key"));
}

#[tokio::test]
async fn unknown_bin_is_a_status_error() {
    let api = api_with(&[]).await;
    let err = fetch_and_load(&HttpSource::new(api.base_url()), "nope", PayloadKind::Envelope)
        .await
        .unwrap_err();

    assert!(matches!(err, LoadError::Fetch(FetchError::Status { status: 404 })));
    assert!(!err.is_after_fetch());
}

#[tokio::test]
async fn blank_bin_id_never_hits_the_network() {
    let source = HttpSource::new("http://127.0.0.1:9/v3/b/");
    let err = fetch_and_load(&source, "   ", PayloadKind::Envelope)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Please enter a bin id.");
}

#[tokio::test]
async fn envelope_problems_are_not_parse_failures() {
    let api = api_with(&[
        ("no-record", r#"{"metadata":{"id":"x"}}"#.to_string()),
        ("no-data", r#"{"record":{"name":"x"}}"#.to_string()),
    ])
    .await;
    let source = HttpSource::new(api.base_url());

    let err = fetch_and_load(&source, "no-record", PayloadKind::Envelope)
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Payload(PayloadError::MissingRecord)));
    assert_eq!(err.to_string(), "No 'record' field found.");

    let err = fetch_and_load(&source, "no-data", PayloadKind::Envelope)
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Payload(PayloadError::MissingGradientData)));
    assert_eq!(err.format(), None);
}

#[tokio::test]
async fn malformed_payload_reports_detected_format() {
    let api = api_with(&[
        ("bad-xml", envelope("<root><colorSequence>")),
        ("bad-json", envelope("{\"colorSequence\": [")),
    ])
    .await;
    let source = HttpSource::new(api.base_url());

    for (id, format) in [("bad-xml", SourceFormat::Xml), ("bad-json", SourceFormat::Json)] {
        let err = fetch_and_load(&source, id, PayloadKind::Envelope)
            .await
            .unwrap_err();
        assert_eq!(err.format(), Some(format));
        assert_eq!(
            err.to_string(),
            "Unable to parse/convert into a structured document."
        );
    }
}

#[tokio::test]
async fn empty_gradient_is_not_an_error() {
    let api = api_with(&[("empty", envelope("<root></root>"))]).await;
    let loaded = fetch_and_load(&HttpSource::new(api.base_url()), "empty", PayloadKind::Envelope)
        .await
        .unwrap();
    assert!(loaded.rendering.is_empty());
    assert_eq!(loaded.messages()[1], "No colorSequence to display.");
}

#[tokio::test]
async fn file_source_in_both_modes() {
    let dir = tempfile::tempdir().unwrap();
    let wrapped = dir.path().join("bin.json");
    let bare = dir.path().join("gradient.xml");
    std::fs::write(&wrapped, envelope(JSON_FULL)).unwrap();
    std::fs::write(&bare, XML_FULL).unwrap();

    let loaded = fetch_and_load(&Source::File(FileSource::new(&wrapped)), "", PayloadKind::Envelope)
        .await
        .unwrap();
    assert_descriptor!(loaded, XML_DESCRIPTOR);

    let loaded = fetch_and_load(&Source::File(FileSource::new(&bare)), "", PayloadKind::Raw)
        .await
        .unwrap();
    assert_eq!(loaded.format, SourceFormat::Xml);
    assert_descriptor!(loaded, XML_DESCRIPTOR);
}

#[test]
fn default_config_targets_https_api() {
    let source = HttpSource::new(Config::defaults().source.base_url);
    let uri = source.bin_url("65a1b2c3d4").unwrap();
    assert_eq!(uri.to_string(), "https://api.jsonbin.io/v3/b/65a1b2c3d4");
}
