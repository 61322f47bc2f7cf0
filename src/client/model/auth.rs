use crate::{client::model::error::ApiError, model::pilot::PilotDto};

#[derive(Clone, PartialEq)]
pub enum AuthState {
    /// Session not checked yet
    Initializing,
    Authenticated(PilotDto),
    NotLoggedIn,
    /// Failed to check the session
    Error(ApiError),
}

impl From<Option<PilotDto>> for AuthState {
    fn from(pilot: Option<PilotDto>) -> Self {
        match pilot {
            Some(pilot) => AuthState::Authenticated(pilot),
            None => AuthState::NotLoggedIn,
        }
    }
}

impl AuthState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Initializing)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn is_admin(&self) -> bool {
        self.pilot().is_some_and(|pilot| pilot.is_admin)
    }

    pub fn pilot(&self) -> Option<&PilotDto> {
        match self {
            AuthState::Authenticated(pilot) => Some(pilot),
            _ => None,
        }
    }
}
