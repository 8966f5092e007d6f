#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Tests for routing tracing output into a sink

mod common;

use common::test_util::{capture_json, capture_plain, capture_with};
use logspy::{CaptureConfig, Format, InstallError, LogSink};
use tracing::{debug, error, info, info_span, warn};

#[test]
fn plain_events_land_in_the_sink() {
    let (sink, _guard) = capture_plain();

    info!("first message");
    warn!(attempt = 2, "second message");

    let lines = sink.strings();
    assert_eq!(lines.len(), 2, "Got: {:?}", lines);
    assert!(lines[0].starts_with("INFO"), "Got: {}", lines[0]);
    assert!(lines[0].ends_with("first message"), "Got: {}", lines[0]);
    assert!(lines[1].starts_with("WARN"), "Got: {}", lines[1]);
    assert!(lines[1].contains("second message"), "Got: {}", lines[1]);
    assert!(lines[1].contains("attempt=2"), "Got: {}", lines[1]);
}

#[test]
fn plain_events_without_level_are_bare_messages() {
    let (sink, _guard) = capture_with(CaptureConfig {
        with_level: false,
        ..CaptureConfig::default()
    });

    info!("output 1");
    info!("output 2");
    info!("output 3");

    assert_eq!(sink.content(), "output 1\noutput 2\noutput 3\n");
}

#[test]
fn json_events_decode_as_objects() {
    let (sink, _guard) = capture_json();

    info!(user = "ada", "logged in");
    error!(code = 7, "failed");

    let objects = sink.json_objects().expect("JSON output should decode");
    assert_eq!(objects.len(), 2);

    assert_eq!(objects[0]["level"], "INFO");
    assert_eq!(objects[0]["fields"]["message"], "logged in");
    assert_eq!(objects[0]["fields"]["user"], "ada");
    assert!(!objects[0].contains_key("timestamp"));
    assert!(!objects[0].contains_key("target"));

    assert_eq!(objects[1]["level"], "ERROR");
    assert_eq!(objects[1]["fields"]["code"], 7);
}

#[test]
fn json_events_inside_spans_still_decode() {
    let (sink, _guard) = capture_json();

    let span = info_span!("request", id = 42);
    let _entered = span.enter();
    info!("handled");

    let objects = sink.json_objects().unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0]["fields"]["message"], "handled");
    assert_eq!(objects[0]["span"]["name"], "request");
}

#[test]
fn directives_filter_out_lower_levels() {
    let (sink, _guard) = capture_with(CaptureConfig {
        directives: "warn".to_string(),
        ..CaptureConfig::default()
    });

    debug!("dropped");
    info!("dropped too");
    warn!("kept");

    let lines = sink.strings();
    assert_eq!(lines.len(), 1, "Got: {:?}", lines);
    assert!(lines[0].contains("kept"));
}

#[test]
fn target_and_time_are_opt_in() {
    let (sink, _guard) = capture_with(CaptureConfig {
        with_target: true,
        with_time: true,
        ..CaptureConfig::default()
    });

    info!("stamped");

    let line = sink.strings().remove(0);
    assert!(
        line.starts_with(|c: char| c.is_ascii_digit()),
        "Should start with a timestamp: {}",
        line
    );
    assert!(line.contains("subscriber_test:"), "Should name the target: {}", line);
}

#[test]
fn json_with_time_and_target() {
    let (sink, _guard) = capture_with(CaptureConfig {
        format: Format::Json,
        with_target: true,
        with_time: true,
        ..CaptureConfig::default()
    });

    info!("stamped");

    let objects = sink.json_objects().unwrap();
    assert!(objects[0].contains_key("timestamp"));
    assert_eq!(objects[0]["target"], "subscriber_test");
}

#[test]
fn invalid_directives_are_rejected() {
    let sink = LogSink::new();
    let config = CaptureConfig {
        directives: "logspy=bogus".to_string(),
        ..CaptureConfig::default()
    };

    let result = logspy::install(&sink, &config);

    assert!(
        matches!(result, Err(InstallError::InvalidFilter(_))),
        "Should reject the directive"
    );
}

#[test]
fn guard_drop_stops_capturing() {
    let (sink, guard) = capture_plain();
    info!("captured");
    drop(guard);

    info!("not captured");

    assert_eq!(sink.strings().len(), 1);
    assert!(!sink.contains("not captured"));
}

#[test]
fn reset_between_events_keeps_capturing() {
    let (sink, _guard) = capture_plain();
    info!("old");

    sink.reset();
    info!("new");

    let lines = sink.strings();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("new"));
}

#[test]
fn subscriber_can_be_used_with_a_scoped_dispatch() {
    let sink = LogSink::new();
    let subscriber = logspy::subscriber(&sink, &CaptureConfig::default()).unwrap();

    tracing::subscriber::with_default(subscriber, || {
        info!("scoped");
    });
    info!("outside");

    assert_eq!(sink.strings().len(), 1);
    assert!(sink.contains("scoped"));
}
