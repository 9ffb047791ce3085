//! Domain events the core emits instead of touching shared UI state.
//!
//! A collaborator owns the notification surface and the engagement store;
//! this crate only dispatches fire-and-forget events at it.

use serde::{Deserialize, Serialize};

use crate::api::Engagement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// Payload for the notification surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub open: bool,
    pub severity: Severity,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            open: true,
            severity: Severity::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            open: true,
            severity: Severity::Error,
            text: text.into(),
        }
    }
}

/// Events emitted by the data-access layer and the form controller.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Notification(Notification),
    EngagementsLoaded(Vec<Engagement>),
}

/// Fire-and-forget event sink. No acknowledgment is awaited.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, event: AppEvent);
}
