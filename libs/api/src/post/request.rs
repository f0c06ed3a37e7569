use entity::prelude::*;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetPostsParam {
    /// Only posts in this category, e.g. `Web Design` or `web-design`.
    #[param(value_type = Option<String>)]
    pub category: Option<Category>,
}
