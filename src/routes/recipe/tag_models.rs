use serde::{Deserialize, Serialize};

use crate::error::{ApiError, BLANK_FIELD, REQUIRED_FIELD};
use crate::models::tag::Tag;

pub const TAG_NAME_MAX_LENGTH: usize = 255;

// Create tag request
#[derive(Debug, Deserialize)]
pub struct CreateTagRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl CreateTagRequest {
    /// The trimmed name, or a `name` field error.
    pub fn validated_name(&self) -> Result<String, ApiError> {
        let name = match &self.name {
            Some(name) => name.trim(),
            None => return Err(ApiError::field("name", REQUIRED_FIELD)),
        };

        if name.is_empty() {
            return Err(ApiError::field("name", BLANK_FIELD));
        }
        if name.chars().count() > TAG_NAME_MAX_LENGTH {
            return Err(ApiError::field(
                "name",
                format!(
                    "Ensure this field has no more than {} characters.",
                    TAG_NAME_MAX_LENGTH
                ),
            ));
        }

        Ok(name.to_string())
    }
}

// Tag representation returned by list and create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        TagResponse {
            id: tag.id,
            name: tag.name,
        }
    }
}
