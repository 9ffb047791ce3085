use crate::api::{Engagement, EngagementForm};
use crate::events::{AppEvent, Dispatch, Notification};

use super::state::{EditToken, SessionState};
use super::traits::{EngagementOps, Navigator, Route};

/// Controller for one engagement create/edit session.
///
/// Owns the saved-record snapshot and the session state for the lifetime
/// of the session and drives the data-access layer against it. Side
/// effects (navigation, notifications, store updates) only ever leave
/// through the collaborator traits.
///
/// Driven from a single task; callers are expected to hold off further
/// submits while [`FormSession::is_saving`] is true. In-flight calls are
/// never cancelled, they run to completion or failure.
pub struct FormSession<E, N, D> {
    engagements: E,
    navigator: N,
    dispatcher: D,
    token: EditToken,
    state: SessionState,
    saved_engagement: Engagement,
}

impl<E, N, D> FormSession<E, N, D>
where
    E: EngagementOps,
    N: Navigator,
    D: Dispatch,
{
    pub fn new(engagements: E, navigator: N, dispatcher: D) -> Self {
        Self {
            engagements,
            navigator,
            dispatcher,
            token: EditToken::Create,
            state: SessionState::Initializing,
            saved_engagement: Engagement::default(),
        }
    }

    /// Start the session for a route-supplied identifier token.
    pub async fn mount(&mut self, raw_token: &str) {
        self.apply_token(EditToken::parse(raw_token)).await;
    }

    /// React to the identifier token changing while the session is alive
    /// (navigating between two edit URLs without tearing the screen down).
    /// Re-runs the whole mount decision with a fresh snapshot.
    pub async fn set_token(&mut self, raw_token: &str) {
        self.apply_token(EditToken::parse(raw_token)).await;
    }

    async fn apply_token(&mut self, token: EditToken) {
        self.token = token.clone();
        self.saved_engagement = Engagement::default();
        self.transition(SessionState::Initializing);

        match token {
            EditToken::Invalid(raw) => {
                tracing::warn!(
                    token = %raw,
                    "unusable engagement token, redirecting to the creation form"
                );
                self.navigator.navigate(Route::CreateEngagement);
                self.transition(SessionState::Redirected);
            }
            EditToken::Create => {
                self.transition(SessionState::Creating);
            }
            EditToken::Existing(id) => {
                self.transition(SessionState::Loading);
                match self.engagements.fetch_one(id).await {
                    Ok(engagement) => {
                        self.saved_engagement = engagement;
                        self.transition(SessionState::Ready);
                    }
                    Err(err) => {
                        // Load failures leave the edit screen entirely.
                        // Diagnostic log only, no notification.
                        tracing::error!(
                            engagement_id = id,
                            error = %err.message(),
                            "failed to load engagement"
                        );
                        self.navigator.navigate(Route::Landing);
                        self.transition(SessionState::Redirected);
                    }
                }
            }
        }
    }

    /// Submit the form, creating or updating depending on the token.
    ///
    /// On success: success notification, navigate to the landing route.
    /// On failure: error notification, stay on the form with the snapshot
    /// untouched.
    pub async fn submit(&mut self, form: EngagementForm) {
        if !self.state.can_submit() {
            tracing::warn!(state = ?self.state, "submit ignored outside an editable state");
            return;
        }

        match self.token.clone() {
            EditToken::Create => {
                self.transition(SessionState::Saving);
                match self.engagements.create(form.into_create_request()).await {
                    Ok(()) => self.finish_save("Engagement Created Successfully"),
                    Err(err) => {
                        self.fail_save("Error Creating Engagement", &err.message());
                        self.transition(SessionState::Creating);
                    }
                }
            }
            EditToken::Existing(id) => {
                self.transition(SessionState::Saving);
                match self.engagements.update(form.into_update_request(id)).await {
                    Ok(()) => self.finish_save("Engagement Updated Successfully"),
                    Err(err) => {
                        self.fail_save("Error Updating Engagement", &err.message());
                        self.transition(SessionState::Ready);
                    }
                }
            }
            // Invalid tokens never reach an editable state.
            EditToken::Invalid(_) => {}
        }
    }

    fn finish_save(&mut self, text: &str) {
        self.dispatcher
            .dispatch(AppEvent::Notification(Notification::success(text)));
        self.navigator.navigate(Route::Landing);
        self.transition(SessionState::Redirected);
    }

    fn fail_save(&mut self, text: &str, detail: &str) {
        tracing::error!(error = %detail, "failed to save engagement");
        self.dispatcher
            .dispatch(AppEvent::Notification(Notification::error(text)));
    }

    fn transition(&mut self, next: SessionState) {
        tracing::debug!(from = ?self.state, to = ?next, "session state change");
        self.state = next;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn token(&self) -> &EditToken {
        &self.token
    }

    pub fn saved_engagement(&self) -> &Engagement {
        &self.saved_engagement
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn is_saving(&self) -> bool {
        self.state.is_saving()
    }
}
