use axum::http::StatusCode;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Server is up")
    )
)]
pub(super) async fn get_health() -> StatusCode {
    StatusCode::OK
}
