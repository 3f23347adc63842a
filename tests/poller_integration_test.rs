use clap::Parser;
use event_poller::{
    CliConfig, EventPoller, MonitorFactory, PollCycle, PollerError, Result, VenueMonitor,
    VividSeatsMonitorFactory,
};
use httpmock::prelude::*;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct RecordingFactory {
    created: Arc<Mutex<Vec<(String, String)>>>,
    fail_first: bool,
}

struct RecordingMonitor {
    performer_id: String,
    venue_id: String,
    fail: bool,
}

#[async_trait::async_trait]
impl VenueMonitor for RecordingMonitor {
    async fn monitor_venue(&self) -> Result<()> {
        if self.fail {
            return Err(PollerError::MonitorError {
                performer_id: self.performer_id.clone(),
                venue_id: self.venue_id.clone(),
                message: "simulated monitor failure".to_string(),
            });
        }
        Ok(())
    }
}

impl MonitorFactory for RecordingFactory {
    type Monitor = RecordingMonitor;

    fn create(&self, performer_id: &str, venue_id: &str) -> RecordingMonitor {
        let mut created = self.created.lock().unwrap();
        let fail = self.fail_first && created.is_empty();
        created.push((performer_id.to_string(), venue_id.to_string()));
        RecordingMonitor {
            performer_id: performer_id.to_string(),
            venue_id: venue_id.to_string(),
            fail,
        }
    }
}

fn config_for(endpoint: &str) -> CliConfig {
    CliConfig::parse_from(["event-poller", "--api-endpoint", endpoint])
}

#[tokio::test]
async fn test_end_to_end_poll_with_real_http() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/event");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "events": [
                    {"performerId": "12345", "venueId": "678"},
                    {"performerId": "54321", "venueId": "876"}
                ]
            }));
    });

    let factory = RecordingFactory::default();
    let poller = EventPoller::new(factory.clone(), config_for(&server.url("/api/event")));

    let dispatched = poller.poll_once().await.unwrap();

    api_mock.assert();
    assert_eq!(dispatched, 2);
    assert_eq!(
        factory.created.lock().unwrap().clone(),
        vec![
            ("12345".to_string(), "678".to_string()),
            ("54321".to_string(), "876".to_string())
        ]
    );
}

#[tokio::test]
async fn test_end_to_end_with_production_factory() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/event");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "events": [{"performerId": "12345", "venueId": "678"}]
            }));
    });

    let poller = EventPoller::new(
        VividSeatsMonitorFactory::new(),
        config_for(&server.url("/api/event")),
    );

    let dispatched = poller.poll_once().await.unwrap();

    api_mock.assert();
    assert_eq!(dispatched, 1);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_api_error() {
    // Nothing listens here; the connection is refused.
    let factory = RecordingFactory::default();
    let poller = EventPoller::new(factory.clone(), config_for("http://127.0.0.1:1/api/event"));

    let err = poller.poll_once().await.unwrap_err();

    assert!(matches!(err, PollerError::ApiError(_)));
    assert!(factory.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unexpected_payload_shape_is_schema_error() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/event");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"data": []}));
    });

    let factory = RecordingFactory::default();
    let poller = EventPoller::new(factory.clone(), config_for(&server.url("/api/event")));

    let err = poller.poll_once().await.unwrap_err();

    api_mock.assert();
    assert!(matches!(err, PollerError::SchemaError(_)));
    assert!(factory.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_monitor_failure_stops_the_cycle() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/event");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "events": [
                    {"performerId": "p1", "venueId": "v1"},
                    {"performerId": "p2", "venueId": "v2"}
                ]
            }));
    });

    let factory = RecordingFactory {
        fail_first: true,
        ..RecordingFactory::default()
    };
    let poller = EventPoller::new(factory.clone(), config_for(&server.url("/api/event")));

    let err = poller.poll_once().await.unwrap_err();

    api_mock.assert();
    assert!(matches!(err, PollerError::MonitorError { .. }));
    assert_eq!(
        factory.created.lock().unwrap().clone(),
        vec![("p1".to_string(), "v1".to_string())]
    );
}
