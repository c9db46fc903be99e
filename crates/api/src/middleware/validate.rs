use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationError, ValidationErrors};

type Rejection = (StatusCode, axum::Json<Value>);

/// JSON body that has passed its `validator` rules.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                malformed("Invalid JSON", rejection.status(), rejection.body_text())
            })?;

        value.validate().map_err(|errors| invalid(&errors))?;

        Ok(Self(value))
    }
}

/// Query string that has passed its `validator` rules.
pub struct SimpleValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for SimpleValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                malformed("Invalid query", rejection.status(), rejection.body_text())
            })?;

        value.validate().map_err(|errors| invalid(&errors))?;

        Ok(Self(value))
    }
}

fn malformed(error: &str, status: StatusCode, message: String) -> Rejection {
    let payload = json!({
        "status": "error",
        "error": error,
        "message": message,
    });
    (status, axum::Json(payload))
}

fn invalid(errors: &ValidationErrors) -> Rejection {
    let payload = json!({
        "status": "error",
        "error": "Validation failed",
        "message": format_validation_errors(errors),
        "details": format_validation_errors_detailed(errors),
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload))
}

fn describe(field: &str, error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => match error.code.as_ref() {
            "email" => "Invalid email format".to_string(),
            "url" => "Invalid URL format".to_string(),
            "length" => "Invalid length".to_string(),
            "range" => "Value out of range".to_string(),
            _ => format!("Invalid {field}"),
        },
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors
                .iter()
                .map(move |e| format!("{field}: {}", describe(&field, e)))
        })
        .collect();
    messages.sort();

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

fn format_validation_errors_detailed(errors: &ValidationErrors) -> Value {
    let mut error_map = serde_json::Map::new();

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors.iter().map(|e| describe(&field, e)).collect();
        error_map.insert(field.to_string(), json!(messages));
    }

    Value::Object(error_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::requests::RegisterRequest;

    #[test]
    fn field_messages_are_collected_per_field() {
        let req: RegisterRequest = serde_json::from_value(json!({
            "email": "not-an-email",
            "password": "short",
            "role": "job_seeker",
            "first_name": "Ada",
            "last_name": "Lovelace",
        }))
        .unwrap();

        let errors = req.validate().unwrap_err();
        let details = format_validation_errors_detailed(&errors);

        assert!(details.get("email").is_some());
        assert!(details.get("password").is_some());
        assert!(details.get("first_name").is_none());
        assert!(format_validation_errors(&errors).starts_with("email: "));
    }
}
