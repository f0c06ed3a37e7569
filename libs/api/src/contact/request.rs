use entity::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

/// Every field is optional at the wire level so that a missing field
/// reaches validation instead of failing deserialization.
#[derive(Deserialize, ToSchema)]
pub struct PostContactRequest {
    #[schema(example = "Jan")]
    pub name: Option<String>,
    #[schema(example = "jan@example.com")]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[schema(example = "Web Design")]
    pub service_type: Option<String>,
    #[schema(example = "Hello")]
    pub message: Option<String>,
}

impl From<PostContactRequest> for ContactForm {
    fn from(value: PostContactRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            service_type: value.service_type,
            message: value.message,
        }
    }
}
