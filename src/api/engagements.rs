use super::errors::ApiError;
use super::transport::{HttpTransport, TransportError};
use super::types::{Engagement, PostEngagementRequest, PutEngagementRequest};
use crate::events::{AppEvent, Dispatch};

/// Collection endpoint; create and update both address the collection,
/// fetch-by-id appends the identifier.
pub const ENGAGEMENTS_PATH: &str = "/api/engagements";

fn engagement_path(id: u64) -> String {
    format!("{ENGAGEMENTS_PATH}/{id}")
}

/// Validate a raw identifier token at the string boundary.
///
/// Empty, non-numeric, and zero tokens are all rejected locally so that no
/// request is ever issued for them.
pub fn parse_engagement_id(raw: &str) -> Result<u64, ApiError> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::InvalidId(raw.to_string())),
    }
}

/// Stateless data-access layer for engagement records.
///
/// Each operation makes exactly one transport attempt and returns a
/// discriminated result; the error side always carries a normalized
/// message (see [`ApiError::message`]).
#[derive(Debug)]
pub struct EngagementApi<T> {
    transport: T,
}

impl<T: HttpTransport> EngagementApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch the full collection.
    ///
    /// An absent `result` payload is an empty list, never a failure. The
    /// loaded list is also emitted to the store side channel.
    pub async fn fetch_all(&self, dispatcher: &dyn Dispatch) -> Result<Vec<Engagement>, ApiError> {
        let envelope = self.transport.get(ENGAGEMENTS_PATH).await?;
        let engagements: Vec<Engagement> = match envelope.result {
            Some(value) => serde_json::from_value(value).map_err(TransportError::from)?,
            None => Vec::new(),
        };
        tracing::debug!(count = engagements.len(), "loaded engagement collection");
        dispatcher.dispatch(AppEvent::EngagementsLoaded(engagements.clone()));
        Ok(engagements)
    }

    /// Fetch a single record by id.
    ///
    /// A zero id is rejected before the request goes out. A resolved
    /// envelope without a record is a failure of its own kind.
    pub async fn fetch_one(&self, id: u64) -> Result<Engagement, ApiError> {
        if id == 0 {
            return Err(ApiError::InvalidId(id.to_string()));
        }
        let envelope = self.transport.get(&engagement_path(id)).await?;
        match envelope.result {
            Some(value) => Ok(serde_json::from_value(value).map_err(TransportError::from)?),
            None => Err(ApiError::MissingEngagement),
        }
    }

    /// Create a new engagement. The response body is ignored on success.
    pub async fn create(&self, request: PostEngagementRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(&request).map_err(TransportError::from)?;
        self.transport.post(ENGAGEMENTS_PATH, body).await?;
        tracing::debug!(name = %request.name, "engagement created");
        Ok(())
    }

    /// Update an existing engagement. Same contract as [`Self::create`].
    pub async fn update(&self, request: PutEngagementRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(&request).map_err(TransportError::from)?;
        self.transport.put(ENGAGEMENTS_PATH, body).await?;
        tracing::debug!(id = request.id, "engagement updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::api::transport::Envelope;
    use crate::events::Notification;

    /// Records every request and replays canned envelopes in order.
    /// Clones share state so a test can keep a handle for assertions.
    #[derive(Clone)]
    struct MockTransport {
        responses: Arc<Mutex<Vec<Result<Envelope, TransportError>>>>,
        requests: Arc<Mutex<Vec<(String, String, Option<serde_json::Value>)>>>,
    }

    impl MockTransport {
        fn new() -> Self {
            Self {
                responses: Arc::new(Mutex::new(Vec::new())),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn queue_result(&self, result: serde_json::Value) {
            self.queue_envelope(Envelope {
                result: Some(result),
            });
        }

        fn queue_empty(&self) {
            self.queue_envelope(Envelope { result: None });
        }

        fn queue_envelope(&self, envelope: Envelope) {
            self.responses.lock().unwrap().push(Ok(envelope));
        }

        fn queue_error(&self, error: TransportError) {
            self.responses.lock().unwrap().push(Err(error));
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn recorded(&self, index: usize) -> (String, String, Option<serde_json::Value>) {
            self.requests.lock().unwrap()[index].clone()
        }

        fn next(
            &self,
            method: &str,
            path: &str,
            body: Option<serde_json::Value>,
        ) -> Result<Envelope, TransportError> {
            self.requests
                .lock()
                .unwrap()
                .push((method.to_string(), path.to_string(), body));
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                return Ok(Envelope::default());
            }
            responses.remove(0)
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn get(&self, path: &str) -> Result<Envelope, TransportError> {
            self.next("GET", path, None)
        }

        async fn post(
            &self,
            path: &str,
            body: serde_json::Value,
        ) -> Result<Envelope, TransportError> {
            self.next("POST", path, Some(body))
        }

        async fn put(
            &self,
            path: &str,
            body: serde_json::Value,
        ) -> Result<Envelope, TransportError> {
            self.next("PUT", path, Some(body))
        }
    }

    struct RecordingDispatch {
        events: Mutex<Vec<AppEvent>>,
    }

    impl RecordingDispatch {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }

        fn events(&self) -> Vec<AppEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Dispatch for RecordingDispatch {
        fn dispatch(&self, event: AppEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn sample_engagement() -> serde_json::Value {
        json!({
            "id": 42,
            "name": "Budget Review",
            "description": "Public review of the annual budget",
            "status_id": 1,
            "status": { "status_name": "Draft" },
            "start_date": "2022-04-01",
            "end_date": "2022-04-30"
        })
    }

    #[test]
    fn parse_rejects_zero_empty_and_non_numeric_tokens() {
        for raw in ["0", "", "abc", "12abc"] {
            let err = parse_engagement_id(raw).unwrap_err();
            assert_eq!(err.message(), format!("Invalid Engagement Id {raw}"));
        }
        assert_eq!(parse_engagement_id("42").unwrap(), 42);
    }

    #[tokio::test]
    async fn fetch_one_rejects_zero_id_without_a_network_call() {
        let transport = MockTransport::new();
        let api = EngagementApi::new(transport.clone());

        let err = api.fetch_one(0).await.unwrap_err();
        assert_eq!(err.message(), "Invalid Engagement Id 0");
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn fetch_one_returns_the_parsed_record() {
        let transport = MockTransport::new();
        transport.queue_result(sample_engagement());
        let api = EngagementApi::new(transport.clone());

        let engagement = api.fetch_one(42).await.unwrap();
        assert_eq!(engagement.id, 42);
        assert_eq!(engagement.name, "Budget Review");
        assert_eq!(engagement.status.status_name, "Draft");

        let (method, path, _) = transport.recorded(0);
        assert_eq!(method, "GET");
        assert_eq!(path, "/api/engagements/42");
    }

    #[tokio::test]
    async fn fetch_one_without_a_result_payload_is_a_missing_object() {
        let transport = MockTransport::new();
        transport.queue_empty();
        let api = EngagementApi::new(transport.clone());

        let err = api.fetch_one(42).await.unwrap_err();
        assert_eq!(err.message(), "Missing engagement object");
    }

    #[tokio::test]
    async fn fetch_all_treats_an_absent_result_as_an_empty_list() {
        let transport = MockTransport::new();
        transport.queue_empty();
        let api = EngagementApi::new(transport.clone());
        let dispatcher = RecordingDispatch::new();

        let engagements = api.fetch_all(&dispatcher).await.unwrap();
        assert!(engagements.is_empty());
        assert_eq!(
            dispatcher.events(),
            vec![AppEvent::EngagementsLoaded(Vec::new())]
        );
    }

    #[tokio::test]
    async fn fetch_all_emits_the_loaded_list_to_the_store_channel() {
        let transport = MockTransport::new();
        transport.queue_result(json!([sample_engagement()]));
        let api = EngagementApi::new(transport.clone());
        let dispatcher = RecordingDispatch::new();

        let engagements = api.fetch_all(&dispatcher).await.unwrap();
        assert_eq!(engagements.len(), 1);
        match &dispatcher.events()[0] {
            AppEvent::EngagementsLoaded(list) => assert_eq!(list[0].name, "Budget Review"),
            AppEvent::Notification(Notification { .. }) => panic!("unexpected notification"),
        }
    }

    #[tokio::test]
    async fn create_posts_the_mapped_wire_shape_once() {
        let transport = MockTransport::new();
        transport.queue_empty();
        let api = EngagementApi::new(transport.clone());

        let form = crate::api::EngagementForm {
            name: "Budget Review".to_string(),
            from_date: chrono::NaiveDate::from_ymd_opt(2022, 4, 1),
            to_date: chrono::NaiveDate::from_ymd_opt(2022, 4, 30),
            rich_description: "<p>rich</p>".to_string(),
            ..Default::default()
        };
        api.create(form.into_create_request()).await.unwrap();

        assert_eq!(transport.request_count(), 1);
        let (method, path, body) = transport.recorded(0);
        let body = body.unwrap();
        assert_eq!(method, "POST");
        assert_eq!(path, ENGAGEMENTS_PATH);
        assert_eq!(body["start_date"], "2022-04-01");
        assert_eq!(body["end_date"], "2022-04-30");
        assert_eq!(body["rich_description"], "<p>rich</p>");
        assert!(body.get("from_date").is_none());
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn update_puts_the_mapped_wire_shape_with_the_id() {
        let transport = MockTransport::new();
        transport.queue_empty();
        let api = EngagementApi::new(transport.clone());

        let form = crate::api::EngagementForm {
            name: "Budget Review".to_string(),
            ..Default::default()
        };
        api.update(form.into_update_request(42)).await.unwrap();

        let (method, path, body) = transport.recorded(0);
        assert_eq!(method, "PUT");
        assert_eq!(path, ENGAGEMENTS_PATH);
        assert_eq!(body.unwrap()["id"], 42);
    }

    #[tokio::test]
    async fn transport_failures_are_normalized_not_rethrown() {
        let transport = MockTransport::new();
        transport.queue_error(TransportError::Message("connection reset".to_string()));
        let api = EngagementApi::new(transport.clone());

        let form = crate::api::EngagementForm::default();
        let err = api.create(form.into_create_request()).await.unwrap_err();
        assert_eq!(err.message(), "CONNECTION RESET");
    }
}
