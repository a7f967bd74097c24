//! Keeps the rendered user list and the form overlay in step with the remote collection.

use std::sync::Arc;

use client_core::UserApi;
use shared::{domain::UserId, protocol::User};
use tracing::{debug, info, warn};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::{UiError, UiErrorContext},
        form::{FormField, FormFields, FormMode, FormState},
        sync::{Mutation, SyncPolicy},
    },
};

/// Rendering surface driven by the controller.
pub trait UserListView: Send {
    /// Replaces everything previously rendered.
    fn render_rows(&mut self, rows: &[UserRow]);
    fn show_error(&mut self, message: &str);
    fn clear_error(&mut self);
    fn show_form(&mut self, form: &FormState);
    fn hide_form(&mut self);
}

/// Data-only list row. Actions are dispatched by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: Option<UserId>,
    pub label: String,
}

impl UserRow {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            label: format!("{} ({})", user.display_name(), user.email),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ControllerOptions {
    pub sync_policy: SyncPolicy,
    /// Clear the error slot after a successful load.
    pub clear_stale_errors: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            sync_policy: SyncPolicy::RefetchAll,
            clear_stale_errors: true,
        }
    }
}

pub struct UserListController<V> {
    api: Arc<dyn UserApi>,
    view: V,
    options: ControllerOptions,
    form: FormState,
    // Last successful fetch, in server order.
    users: Vec<User>,
    error_visible: bool,
}

impl<V: UserListView> UserListController<V> {
    pub fn new(api: Arc<dyn UserApi>, view: V, options: ControllerOptions) -> Self {
        Self {
            api,
            view,
            options,
            form: FormState::default(),
            users: Vec::new(),
            error_visible: false,
        }
    }

    pub async fn handle(&mut self, cmd: BackendCommand) {
        match cmd {
            BackendCommand::LoadUsers => {
                self.load_users().await;
            }
            BackendCommand::OpenCreateForm => self.open_create_form(),
            BackendCommand::OpenEditForm { id } => self.open_edit_form(&id),
            BackendCommand::CloseForm => self.close_form(),
            BackendCommand::SetField { field, value } => self.set_field(field, value),
            BackendCommand::SubmitForm => {
                if !self.form.visible {
                    warn!("submit ignored: form is hidden");
                    return;
                }
                let fields = self.form.fields.clone();
                self.submit_form(fields).await;
            }
            BackendCommand::DeleteUser { id } => self.delete_user(&id).await,
        }
    }

    /// Fetches the whole collection and re-renders it.
    ///
    /// On failure the previous rendering is left untouched. Returns whether the
    /// load succeeded.
    pub async fn load_users(&mut self) -> bool {
        match self.api.list_users().await {
            Ok(users) => {
                info!(count = users.len(), "loaded users");
                self.render_list(users);
                if self.options.clear_stale_errors && self.error_visible {
                    self.view.clear_error();
                    self.error_visible = false;
                }
                true
            }
            Err(err) => {
                warn!(error = %err, "failed to load users");
                self.report(UiError::from_client(UiErrorContext::Load, &err));
                false
            }
        }
    }

    pub fn render_list(&mut self, users: Vec<User>) {
        let rows: Vec<UserRow> = users.iter().map(UserRow::from_user).collect();
        self.view.render_rows(&rows);
        self.users = users;
    }

    pub fn open_create_form(&mut self) {
        self.form = FormState::open(FormMode::Create, FormFields::default());
        self.view.show_form(&self.form);
    }

    /// Populates the form from the last fetched record with this id.
    ///
    /// An id missing from the list opens the form with only the id filled in.
    pub fn open_edit_form(&mut self, id: &UserId) {
        let fields = match self.users.iter().find(|user| user.id.as_ref() == Some(id)) {
            Some(user) => FormFields::from_user(user),
            None => {
                warn!(id = %id, "edit requested for a user missing from the list");
                FormFields {
                    id: id.to_string(),
                    ..FormFields::default()
                }
            }
        };
        self.form = FormState::open(FormMode::Edit, fields);
        self.view.show_form(&self.form);
    }

    /// Hides the form; field values stay until the next open.
    pub fn close_form(&mut self) {
        self.form.visible = false;
        self.view.hide_form();
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        self.form.fields.set(field, value);
    }

    /// Creates or updates depending on whether `fields` carries an id.
    pub async fn submit_form(&mut self, fields: FormFields) {
        let Some(payload) = fields.to_payload() else {
            debug!("submit rejected: empty field");
            self.report(UiError::validation());
            return;
        };

        let result = match payload.id.clone() {
            Some(id) => self
                .api
                .update_user(&id, &payload)
                .await
                .map(|_| Mutation::Updated(id)),
            None => self
                .api
                .create_user(&payload)
                .await
                .map(|created| Mutation::Created(created.and_then(|user| user.id))),
        };

        match result {
            Ok(mutation) => {
                self.synchronize(mutation).await;
                self.close_form();
            }
            Err(err) => {
                warn!(error = %err, "failed to save user");
                self.report(UiError::from_client(UiErrorContext::Save, &err));
            }
        }
    }

    pub async fn delete_user(&mut self, id: &UserId) {
        match self.api.delete_user(id).await {
            Ok(()) => self.synchronize(Mutation::Deleted(id.clone())).await,
            Err(err) => {
                warn!(id = %id, error = %err, "failed to delete user");
                self.report(UiError::from_client(UiErrorContext::Delete, &err));
            }
        }
    }

    async fn synchronize(&mut self, mutation: Mutation) {
        match self.options.sync_policy {
            SyncPolicy::RefetchAll => {
                debug!(
                    mutation = mutation.kind(),
                    id = mutation.id().map(UserId::as_str),
                    "refetching users after mutation"
                );
                self.load_users().await;
            }
        }
    }

    fn report(&mut self, error: UiError) {
        debug!(
            context = ?error.context(),
            category = ?error.category(),
            "reporting failure"
        );
        self.view.show_error(error.message());
        self.error_visible = true;
    }
}

#[cfg(test)]
#[path = "tests/user_list_tests.rs"]
mod tests;
