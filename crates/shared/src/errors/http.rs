use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();

        match err {
            ServiceError::Validation(_) | ServiceError::ForeignKeyViolation(_) => {
                HttpError::BadRequest(message)
            }

            ServiceError::InvalidCredentials => HttpError::Unauthorized(message),

            ServiceError::NotFound { .. }
            | ServiceError::PostingNotFound
            | ServiceError::SeekerNotFound => HttpError::NotFound(message),

            ServiceError::DuplicateEmail
            | ServiceError::DuplicateApplication
            | ServiceError::ProfileExists(_)
            | ServiceError::PostingInactive
            | ServiceError::InvalidStatusTransition { .. } => HttpError::Conflict(message),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Bcrypt(_) => {
                HttpError::Internal("Internal authentication error".into())
            }

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ApplicationStatus;
    use rstest::rstest;

    fn status_of(err: ServiceError) -> StatusCode {
        HttpError::from(err).into_response().status()
    }

    #[rstest]
    #[case(ServiceError::Validation(vec!["title: required".into()]), StatusCode::BAD_REQUEST)]
    #[case(ServiceError::ForeignKeyViolation("user 9".into()), StatusCode::BAD_REQUEST)]
    #[case(ServiceError::InvalidCredentials, StatusCode::UNAUTHORIZED)]
    #[case(ServiceError::not_found("Job posting", 3), StatusCode::NOT_FOUND)]
    #[case(ServiceError::PostingNotFound, StatusCode::NOT_FOUND)]
    #[case(ServiceError::SeekerNotFound, StatusCode::NOT_FOUND)]
    #[case(ServiceError::DuplicateEmail, StatusCode::CONFLICT)]
    #[case(ServiceError::DuplicateApplication, StatusCode::CONFLICT)]
    #[case(ServiceError::PostingInactive, StatusCode::CONFLICT)]
    #[case(
        ServiceError::InvalidStatusTransition {
            from: ApplicationStatus::Withdrawn,
            to: ApplicationStatus::Accepted,
        },
        StatusCode::CONFLICT
    )]
    #[case(ServiceError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(ServiceError::Repo(RepositoryError::NotFound), StatusCode::NOT_FOUND)]
    fn maps_service_errors_to_status(#[case] err: ServiceError, #[case] expected: StatusCode) {
        assert_eq!(status_of(err), expected);
    }

    #[test]
    fn login_failure_message_does_not_reveal_which_part_failed() {
        match HttpError::from(ServiceError::InvalidCredentials) {
            HttpError::Unauthorized(msg) => assert_eq!(msg, "Invalid email or password"),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }
}
