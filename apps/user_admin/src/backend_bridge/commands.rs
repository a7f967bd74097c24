//! Backend commands queued from UI to backend worker.

use shared::domain::UserId;

use crate::controller::form::FormField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    LoadUsers,
    OpenCreateForm,
    OpenEditForm { id: UserId },
    CloseForm,
    SetField { field: FormField, value: String },
    /// Submits the form's current values.
    SubmitForm,
    DeleteUser { id: UserId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadUsers => "load_users",
            Self::OpenCreateForm => "open_create_form",
            Self::OpenEditForm { .. } => "open_edit_form",
            Self::CloseForm => "close_form",
            Self::SetField { .. } => "set_field",
            Self::SubmitForm => "submit_form",
            Self::DeleteUser { .. } => "delete_user",
        }
    }
}
