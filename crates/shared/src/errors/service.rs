use crate::{errors::repository::RepositoryError, model::ApplicationStatus};
use bcrypt::BcryptError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Email is already registered")]
    DuplicateEmail,

    #[error("You have already applied for this job")]
    DuplicateApplication,

    #[error("Job posting not found")]
    PostingNotFound,

    #[error("Job posting is not active")]
    PostingInactive,

    #[error("Job seeker profile not found")]
    SeekerNotFound,

    #[error("A profile already exists for user {0}")]
    ProfileExists(i32),

    #[error("Cannot change application status from {from} to {to}")]
    InvalidStatusTransition {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] BcryptError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        ServiceError::NotFound { entity, id }
    }

    /// A zero-row update becomes `NotFound` for `entity`.
    pub fn missing_row(err: RepositoryError, entity: &'static str, id: i32) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::not_found(entity, id),
            other => ServiceError::Repo(other),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |e| match &e.message {
                    Some(message) => format!("{field}: {message}"),
                    None => format!("{field}: invalid value ({})", e.code),
                })
            })
            .collect();
        messages.sort();

        ServiceError::Validation(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_row_names_the_entity() {
        let err = ServiceError::missing_row(RepositoryError::NotFound, "Job posting", 42);
        assert_eq!(err.to_string(), "Job posting with id 42 not found");

        let err = ServiceError::missing_row(RepositoryError::Custom("boom".into()), "Job posting", 42);
        assert!(matches!(err, ServiceError::Repo(RepositoryError::Custom(_))));
    }
}
