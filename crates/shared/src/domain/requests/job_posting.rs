use super::{Patch, not_null, required_text};
use crate::model::JobType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateJobPostingRequest {
    #[validate(range(min = 1, message = "company_id must be positive"))]
    pub company_id: i32,

    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde(rename = "type")]
    pub job_type: JobType,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub requirements: Option<String>,

    #[serde(default)]
    pub duration: Option<String>,

    #[serde(default)]
    pub compensation: Option<String>,

    #[serde(default)]
    pub application_deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateJobPostingRequest {
    #[serde(default)]
    pub id: i32,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    #[validate(custom(function = "required_text"))]
    pub title: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    #[validate(custom(function = "required_text"))]
    pub description: Patch<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<JobType>)]
    #[validate(custom(function = "not_null"))]
    pub job_type: Patch<JobType>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub location: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub requirements: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub duration: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub compensation: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub application_deadline: Patch<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<bool>)]
    #[validate(custom(function = "not_null"))]
    pub is_active: Patch<bool>,
}

fn default_limit() -> i64 {
    DEFAULT_SEARCH_LIMIT
}

/// Filters for the public posting search. Only active postings are ever
/// returned; blank `query` or `location` count as not provided.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct SearchJobPostingsRequest {
    #[serde(default)]
    pub query: Option<String>,

    #[serde(rename = "type", default)]
    pub job_type: Option<JobType>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub company_id: Option<i32>,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: i64,

    #[serde(default)]
    #[validate(range(min = 0, message = "offset must not be negative"))]
    pub offset: i64,
}

impl Default for SearchJobPostingsRequest {
    fn default() -> Self {
        Self {
            query: None,
            job_type: None,
            location: None,
            company_id: None,
            limit: DEFAULT_SEARCH_LIMIT,
            offset: 0,
        }
    }
}

impl SearchJobPostingsRequest {
    pub fn query_term(&self) -> Option<&str> {
        self.query.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    pub fn location_term(&self) -> Option<&str> {
        self.location.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }
}

/// Escapes `LIKE` metacharacters so user input only ever matches literally.
/// Patterns built from the result must use `ESCAPE '\'`.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn search_defaults() {
        let req: SearchJobPostingsRequest = serde_json::from_value(serde_json::json!({})).unwrap();

        assert_eq!(req.limit, DEFAULT_SEARCH_LIMIT);
        assert_eq!(req.offset, 0);
        assert!(req.validate().is_ok());
    }

    #[rstest]
    #[case(0, 0, false)]
    #[case(1, 0, true)]
    #[case(100, 0, true)]
    #[case(101, 0, false)]
    #[case(20, -1, false)]
    fn search_limit_and_offset_bounds(#[case] limit: i64, #[case] offset: i64, #[case] ok: bool) {
        let req = SearchJobPostingsRequest {
            limit,
            offset,
            ..Default::default()
        };

        assert_eq!(req.validate().is_ok(), ok);
    }

    #[test]
    fn blank_terms_are_ignored() {
        let req = SearchJobPostingsRequest {
            query: Some("   ".into()),
            location: Some(" Berlin ".into()),
            ..Default::default()
        };

        assert_eq!(req.query_term(), None);
        assert_eq!(req.location_term(), Some("Berlin"));
    }

    #[rstest]
    #[case("100%", "100\\%")]
    #[case("snake_case", "snake\\_case")]
    #[case("a\\b", "a\\\\b")]
    #[case("plain", "plain")]
    fn like_metacharacters_are_escaped(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_like(input), expected);
    }

    #[test]
    fn update_rejects_null_for_required_columns() {
        let req: UpdateJobPostingRequest =
            serde_json::from_value(serde_json::json!({ "is_active": null })).unwrap();
        assert!(req.validate().is_err());

        let req: UpdateJobPostingRequest =
            serde_json::from_value(serde_json::json!({ "type": "volunteer", "location": null }))
                .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.job_type, Patch::Value(JobType::Volunteer));
        assert_eq!(req.location, Patch::Null);
    }
}
