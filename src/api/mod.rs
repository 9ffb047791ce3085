pub mod engagements;
pub mod errors;
pub mod transport;
pub mod types;

pub use engagements::{parse_engagement_id, EngagementApi, ENGAGEMENTS_PATH};
pub use errors::ApiError;
pub use transport::{Envelope, HttpTransport, RestTransport, TransportError};
pub use types::{
    Engagement, EngagementForm, EngagementStatus, PostEngagementRequest, PutEngagementRequest,
};
