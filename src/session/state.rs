/// Route-supplied identifier token for an edit session.
///
/// The literal token `create` opens a blank form; a numeric token loads an
/// existing record; anything else is unusable and forces a redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditToken {
    Create,
    Existing(u64),
    Invalid(String),
}

impl EditToken {
    pub fn parse(raw: &str) -> Self {
        if raw == "create" {
            return EditToken::Create;
        }
        match raw.parse::<u64>() {
            Ok(id) => EditToken::Existing(id),
            Err(_) => EditToken::Invalid(raw.to_string()),
        }
    }

    pub fn engagement_id(&self) -> Option<u64> {
        match self {
            EditToken::Existing(id) => Some(*id),
            _ => None,
        }
    }
}

/// Explicit session state, one variant per phase of the editing workflow.
/// Impossible flag combinations (saving while loading) cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Mount decision not made yet.
    Initializing,
    /// Blank form for a brand new engagement.
    Creating,
    /// Fetch-one in flight for an existing record.
    Loading,
    /// Saved record loaded, form editable.
    Ready,
    /// Create-or-update in flight.
    Saving,
    /// Session abandoned via navigation, nothing more will happen here.
    Redirected,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Initializing | SessionState::Loading)
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, SessionState::Saving)
    }

    pub fn can_submit(&self) -> bool {
        matches!(self, SessionState::Creating | SessionState::Ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_literal_parses_to_the_create_token() {
        assert_eq!(EditToken::parse("create"), EditToken::Create);
    }

    #[test]
    fn numeric_tokens_parse_to_existing_ids() {
        assert_eq!(EditToken::parse("42"), EditToken::Existing(42));
        assert_eq!(EditToken::parse("0"), EditToken::Existing(0));
        assert_eq!(EditToken::parse("42").engagement_id(), Some(42));
    }

    #[test]
    fn anything_else_is_invalid() {
        for raw in ["", "draft", "-3", "4.2", "Create"] {
            assert_eq!(EditToken::parse(raw), EditToken::Invalid(raw.to_string()));
        }
    }

    #[test]
    fn loading_and_saving_never_overlap() {
        for state in [
            SessionState::Initializing,
            SessionState::Creating,
            SessionState::Loading,
            SessionState::Ready,
            SessionState::Saving,
            SessionState::Redirected,
        ] {
            assert!(!(state.is_loading() && state.is_saving()));
        }
    }

    #[test]
    fn only_editable_states_accept_a_submit() {
        assert!(SessionState::Creating.can_submit());
        assert!(SessionState::Ready.can_submit());
        assert!(!SessionState::Loading.can_submit());
        assert!(!SessionState::Saving.can_submit());
        assert!(!SessionState::Redirected.can_submit());
    }
}
