use crate::types::DbId;

/// Errors surfaced by the listing domain.
///
/// The normalizer itself never fails; these come from parsing request
/// parameters and from lookups and access checks in the outer layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row of `entity` has this id.
    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: DbId },

    /// A parameter or record failed validation.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Credentials missing or wrong.
    #[error("Not authenticated: {0}")]
    Unauthorized(String),

    /// Credentials valid but the action is not allowed.
    #[error("Not allowed: {0}")]
    Forbidden(String),
}
