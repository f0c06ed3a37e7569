use crate::{response::api_error, ApiError};

pub(super) async fn get_404() -> ApiError {
    api_error("404-000")
}
