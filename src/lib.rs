// Engagement Console - form-state controller and data access for
// engagement records. Exposes the core components for testing and
// integration.

pub mod api;
pub mod cli;
pub mod config;
pub mod events;
pub mod session;
pub mod telemetry;

// Re-export key types for easy access
pub use api::{
    parse_engagement_id, ApiError, Engagement, EngagementApi, EngagementForm, EngagementStatus,
    Envelope, HttpTransport, PostEngagementRequest, PutEngagementRequest, RestTransport,
    TransportError,
};
pub use config::{config, EngagementConsoleConfig};
pub use events::{AppEvent, Dispatch, Notification, Severity};
pub use session::{EditToken, EngagementOps, FormSession, Navigator, Route, SessionState};
pub use telemetry::{create_session_span, generate_correlation_id, init_telemetry};
