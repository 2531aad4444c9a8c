use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request for the model-backed match between two people
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchRequest {
    #[validate(custom(function = "not_blank"))]
    #[serde(alias = "namePerson1")]
    pub name_person1: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(alias = "namePerson2")]
    pub name_person2: String,
}

/// Request for the closed-form compatibility report
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompatibilityRequest {
    #[validate(custom(function = "not_blank"))]
    #[serde(alias = "firstProfileLink")]
    pub first_profile_link: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(alias = "secondProfileLink")]
    pub second_profile_link: String,
}

/// Query for inspecting a synthetic profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SyntheticProfileQuery {
    #[validate(custom(function = "not_blank"))]
    pub link: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
