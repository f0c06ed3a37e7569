use anyhow::anyhow;
use axum::{
    extract::{rejection::QueryRejection, Path, Query},
    Json,
};

pub mod request;
pub mod response;

use crate::response::{ApiResponse, ErrorResponse, IntoApiResponse};

use self::{
    request::GetPostsParam,
    response::{GetPostResponse, GetPostsResponse, Post, PostSummary},
};

/// List blog posts
#[utoipa::path(
    get,
    path = "/api/posts",
    responses(
        (status = 200, description = "List posts in publication order", body = GetPostsResponse),
        (status = 400, description = "Unknown category", body = ErrorResponse)
    ),
    params(
        GetPostsParam
    )
)]
pub async fn get_posts(
    params: Result<Query<GetPostsParam>, QueryRejection>,
) -> ApiResponse<Json<GetPostsResponse>> {
    let Query(params) = params.into_response("400-004")?;

    let posts = match params.category {
        Some(category) => content::posts_in_category(category)
            .map(PostSummary::from)
            .collect(),
        None => content::all_posts().iter().map(PostSummary::from).collect(),
    };

    Ok(Json(GetPostsResponse { posts }))
}

/// Get a blog post
#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    responses(
        (status = 200, description = "Post found", body = GetPostResponse),
        (status = 404, description = "No post has this slug", body = ErrorResponse)
    ),
    params(
        ("slug", description = "post slug"),
    )
)]
pub async fn get_post(
    Path(slug): Path<String>,
) -> ApiResponse<Json<GetPostResponse>> {
    let post = content::post_by_slug(&slug)
        .ok_or_else(|| anyhow!("no post with slug {slug}"))
        .into_response("404-001")?;

    Ok(Json(GetPostResponse {
        post: Post::from(post),
    }))
}
