// Recording fakes for the session collaborators - no side effects.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::{ApiError, Engagement, PostEngagementRequest, PutEngagementRequest};
use crate::events::{AppEvent, Dispatch, Notification};

use super::traits::{EngagementOps, Navigator, Route};

/// Data-access fake that replays queued results and records every call.
/// Clones share state so tests can keep a handle for assertions.
#[derive(Clone, Default)]
pub struct MockEngagementOps {
    fetch_results: Arc<Mutex<Vec<Result<Engagement, ApiError>>>>,
    create_results: Arc<Mutex<Vec<Result<(), ApiError>>>>,
    update_results: Arc<Mutex<Vec<Result<(), ApiError>>>>,
    pub fetch_calls: Arc<Mutex<Vec<u64>>>,
    pub create_requests: Arc<Mutex<Vec<PostEngagementRequest>>>,
    pub update_requests: Arc<Mutex<Vec<PutEngagementRequest>>>,
}

impl MockEngagementOps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_fetch(&self, result: Result<Engagement, ApiError>) {
        self.fetch_results.lock().unwrap().push(result);
    }

    pub fn queue_create(&self, result: Result<(), ApiError>) {
        self.create_results.lock().unwrap().push(result);
    }

    pub fn queue_update(&self, result: Result<(), ApiError>) {
        self.update_results.lock().unwrap().push(result);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl EngagementOps for MockEngagementOps {
    async fn fetch_one(&self, id: u64) -> Result<Engagement, ApiError> {
        self.fetch_calls.lock().unwrap().push(id);
        let mut results = self.fetch_results.lock().unwrap();
        assert!(!results.is_empty(), "no queued fetch result");
        results.remove(0)
    }

    async fn create(&self, request: PostEngagementRequest) -> Result<(), ApiError> {
        self.create_requests.lock().unwrap().push(request);
        let mut results = self.create_results.lock().unwrap();
        if results.is_empty() {
            return Ok(());
        }
        results.remove(0)
    }

    async fn update(&self, request: PutEngagementRequest) -> Result<(), ApiError> {
        self.update_requests.lock().unwrap().push(request);
        let mut results = self.update_results.lock().unwrap();
        if results.is_empty() {
            return Ok(());
        }
        results.remove(0)
    }
}

/// Navigation fake that records the requested routes in order.
#[derive(Clone, Default)]
pub struct MockNavigator {
    pub routes: Arc<Mutex<Vec<Route>>>,
}

impl MockNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for MockNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Event sink fake that records dispatched events in order.
#[derive(Clone, Default)]
pub struct MockDispatch {
    pub events: Arc<Mutex<Vec<AppEvent>>>,
}

impl MockDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AppEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                AppEvent::Notification(notification) => Some(notification),
                _ => None,
            })
            .collect()
    }
}

impl Dispatch for MockDispatch {
    fn dispatch(&self, event: AppEvent) {
        self.events.lock().unwrap().push(event);
    }
}
