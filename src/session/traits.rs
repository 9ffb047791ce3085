// Collaborator seams for the edit session, kept as traits so tests can
// substitute recording fakes for the real router, store, and API.

use async_trait::async_trait;

use crate::api::{
    ApiError, Engagement, EngagementApi, HttpTransport, PostEngagementRequest, PutEngagementRequest,
};

/// The two routes the edit session ever navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    CreateEngagement,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::CreateEngagement => "/engagement/create",
        }
    }
}

/// Routing collaborator; accepts navigation requests, nothing else.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// The slice of the data-access layer the form controller drives.
#[async_trait]
pub trait EngagementOps: Send + Sync {
    async fn fetch_one(&self, id: u64) -> Result<Engagement, ApiError>;
    async fn create(&self, request: PostEngagementRequest) -> Result<(), ApiError>;
    async fn update(&self, request: PutEngagementRequest) -> Result<(), ApiError>;
}

#[async_trait]
impl<T: HttpTransport> EngagementOps for EngagementApi<T> {
    async fn fetch_one(&self, id: u64) -> Result<Engagement, ApiError> {
        EngagementApi::fetch_one(self, id).await
    }

    async fn create(&self, request: PostEngagementRequest) -> Result<(), ApiError> {
        EngagementApi::create(self, request).await
    }

    async fn update(&self, request: PutEngagementRequest) -> Result<(), ApiError> {
        EngagementApi::update(self, request).await
    }
}
