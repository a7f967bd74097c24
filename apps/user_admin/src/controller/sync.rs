//! How the rendered list is brought back in line with the server after a write.

use shared::domain::UserId;

/// Post-mutation synchronization policy.
///
/// Callers only report the mutation; the policy decides how the view catches
/// up with the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPolicy {
    /// Discard the rendered list and fetch the whole collection again.
    #[default]
    RefetchAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Created(Option<UserId>),
    Updated(UserId),
    Deleted(UserId),
}

impl Mutation {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Updated(_) => "updated",
            Self::Deleted(_) => "deleted",
        }
    }

    pub fn id(&self) -> Option<&UserId> {
        match self {
            Self::Created(id) => id.as_ref(),
            Self::Updated(id) | Self::Deleted(id) => Some(id),
        }
    }
}
