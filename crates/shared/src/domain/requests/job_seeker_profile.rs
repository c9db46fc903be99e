use super::{Patch, blank_to_none};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateJobSeekerProfileRequest {
    #[validate(range(min = 1, message = "user_id must be positive"))]
    pub user_id: i32,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub skills: Option<String>,

    #[serde(default)]
    pub education: Option<String>,

    #[serde(default)]
    pub experience: Option<String>,

    #[serde(default)]
    pub resume_url: Option<String>,
}

impl CreateJobSeekerProfileRequest {
    pub fn normalized(self) -> Self {
        Self {
            user_id: self.user_id,
            bio: blank_to_none(self.bio),
            skills: blank_to_none(self.skills),
            education: blank_to_none(self.education),
            experience: blank_to_none(self.experience),
            resume_url: blank_to_none(self.resume_url),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateJobSeekerProfileRequest {
    #[serde(default)]
    pub id: i32,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub bio: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub skills: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub education: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub experience: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<String>)]
    pub resume_url: Patch<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_normalizes_empty_strings() {
        let req = CreateJobSeekerProfileRequest {
            user_id: 7,
            bio: Some(String::new()),
            skills: Some("Rust, SQL".into()),
            ..Default::default()
        }
        .normalized();

        assert_eq!(req.bio, None);
        assert_eq!(req.skills.as_deref(), Some("Rust, SQL"));
    }

    #[test]
    fn update_keeps_missing_fields_absent() {
        let req: UpdateJobSeekerProfileRequest =
            serde_json::from_value(serde_json::json!({ "skills": "Go", "bio": null })).unwrap();

        assert_eq!(req.skills, Patch::Value("Go".into()));
        assert_eq!(req.bio, Patch::Null);
        assert!(req.education.is_absent());
        assert!(req.resume_url.is_absent());
    }
}
