//! Backend-to-UI events and error modeling for the user list controller.

use client_core::ClientError;

use crate::controller::{form::FormState, user_list::UserRow};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load users. Please try again.";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save user. Please try again.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete user. Please try again.";
pub const VALIDATION_MESSAGE: &str = "Please fill all fields";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    RowsRendered(Vec<UserRow>),
    ErrorShown(String),
    ErrorCleared,
    FormShown(FormState),
    FormHidden,
    Notice(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Network,
    BadStatus,
    MalformedBody,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Load,
    Save,
    Delete,
}

/// A failed operation, reduced to what the error slot displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
}

impl UiError {
    pub fn from_client(context: UiErrorContext, err: &ClientError) -> Self {
        let category = match err {
            ClientError::BadStatus { .. } => UiErrorCategory::BadStatus,
            ClientError::Decode(_) => UiErrorCategory::MalformedBody,
            ClientError::Transport(_)
            | ClientError::InvalidUrl { .. }
            | ClientError::NotABase { .. }
            | ClientError::Builder(_) => UiErrorCategory::Network,
        };
        Self { category, context }
    }

    pub fn validation() -> Self {
        Self {
            category: UiErrorCategory::Validation,
            context: UiErrorContext::Save,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &'static str {
        if self.category == UiErrorCategory::Validation {
            return VALIDATION_MESSAGE;
        }
        match self.context {
            UiErrorContext::Load => LOAD_FAILED_MESSAGE,
            UiErrorContext::Save => SAVE_FAILED_MESSAGE,
            UiErrorContext::Delete => DELETE_FAILED_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::StatusCode;

    #[test]
    fn message_depends_only_on_failing_operation() {
        let status = ClientError::BadStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        let err = UiError::from_client(UiErrorContext::Delete, &status);
        assert_eq!(err.category(), UiErrorCategory::BadStatus);
        assert_eq!(err.message(), DELETE_FAILED_MESSAGE);

        let decode = serde_json::from_str::<Vec<u8>>("{").expect_err("malformed");
        let err = UiError::from_client(UiErrorContext::Load, &ClientError::Decode(decode));
        assert_eq!(err.category(), UiErrorCategory::MalformedBody);
        assert_eq!(err.message(), LOAD_FAILED_MESSAGE);
    }

    #[test]
    fn validation_has_its_own_message() {
        assert_eq!(UiError::validation().message(), VALIDATION_MESSAGE);
    }
}
