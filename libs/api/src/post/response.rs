use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct CategoryStyle {
    pub badge_class: String,
    pub accent: String,
}

/// Card shown on the blog listing.
#[derive(Serialize, ToSchema)]
pub struct PostSummary {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    #[schema(example = "Web Design")]
    pub category: String,
    pub category_style: CategoryStyle,
    pub slug: String,
    pub image_src: String,
    pub read_time: u32,
}

#[derive(Serialize, ToSchema)]
pub struct Post {
    #[serde(flatten)]
    pub summary: PostSummary,
    /// Pre-rendered HTML.
    pub content: String,
}

#[derive(Serialize, ToSchema)]
pub struct GetPostsResponse {
    pub posts: Vec<PostSummary>,
}

#[derive(Serialize, ToSchema)]
pub struct GetPostResponse {
    pub post: Post,
}

impl From<&BlogPostEntity> for PostSummary {
    fn from(value: &BlogPostEntity) -> Self {
        let style = value.category.style();
        Self {
            id: value.id,
            title: value.title.to_string(),
            excerpt: value.excerpt.to_string(),
            date: value.date.to_string(),
            category: value.category.to_string(),
            category_style: CategoryStyle {
                badge_class: style.badge_class.to_string(),
                accent: style.accent.to_string(),
            },
            slug: value.slug.to_string(),
            image_src: value.image_src.to_string(),
            read_time: value.read_time,
        }
    }
}

impl From<&BlogPostEntity> for Post {
    fn from(value: &BlogPostEntity) -> Self {
        Self {
            summary: PostSummary::from(value),
            content: value.content.to_string(),
        }
    }
}
