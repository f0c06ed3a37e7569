use std::any::Any;

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use repository::Repository;
use serde::Deserialize;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer,
};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::response::error_message;

pub mod contact;
pub mod healthz;
pub mod home;
pub mod not_found;
pub mod post;
mod response;

pub enum ApiError {
    ValidationError(String),
    NotFound(String),
    PersistenceError(String),
    UnknownError(String),
}

#[derive(Clone, Debug)]
pub struct ApiState {
    repo: Repository,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub server: Server,
    pub cors: Cors,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    pub port: u16,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Cors {
    pub allowed_origins: Vec<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz::get_health,
        contact::post_contact,
        post::get_posts,
        post::get_post,
        home::get_home,
    ),
    components(schemas(
        contact::request::PostContactRequest,
        contact::response::PostContactResponse,
        post::response::Post,
        post::response::PostSummary,
        post::response::CategoryStyle,
        post::response::GetPostsResponse,
        post::response::GetPostResponse,
        home::response::Service,
        home::response::CaseStudy,
        home::response::Testimonial,
        home::response::Faq,
        home::response::GetHomeResponse,
        response::ErrorResponse,
    )),
    tags(
        (name = "site", description = "Agency website API")
    )
)]
pub struct ApiDoc;

pub async fn serve(
    repository: Repository,
    config: &Config,
) -> anyhow::Result<Router> {
    info!(task = "start api serving");

    router(ApiState { repo: repository }, config)
}

fn router(state: ApiState, config: &Config) -> anyhow::Result<Router> {
    let origins = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid cors origin: {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    // contact
    let contact_router = Router::new()
        .route("/", post(contact::post_contact))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // posts
    let post_router = Router::new()
        .route("/", get(post::get_posts))
        .route("/:slug", get(post::get_post))
        .fallback(not_found::get_404);

    // home
    let home_router = Router::new()
        .route("/", get(home::get_home))
        .fallback(not_found::get_404);

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .route("/healthz", get(healthz::get_health))
        .nest("/api/contact", contact_router)
        .nest("/api/posts", post_router)
        .nest("/api/home", home_router)
        .fallback(not_found::get_404)
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic));

    Ok(router)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(task = "handler panicked", error = detail);

    ApiError::UnknownError(error_message("500-000")).into_response()
}

#[cfg(test)]
pub(crate) mod test {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
        Router,
    };
    use std::sync::Arc;

    use repository::Repository;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
    use serde_json::Value;
    use tower::ServiceExt as _;

    use super::*;

    pub(crate) fn test_config() -> Config {
        Config {
            server: Server { port: 8000 },
            cors: Cors {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            },
        }
    }

    pub(crate) fn app(db: Arc<DatabaseConnection>) -> Router {
        router(
            ApiState {
                repo: Repository::new(db),
            },
            &test_config(),
        )
        .unwrap()
    }

    pub(crate) fn app_without_db() -> Router {
        app(Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        ))
    }

    pub(crate) async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    /// Reads the statements a mock connection saw. Every router holding
    /// the connection must be dropped first.
    pub(crate) fn transaction_log(
        db: Arc<DatabaseConnection>,
    ) -> Vec<sea_orm::Transaction> {
        Arc::try_unwrap(db).ok().unwrap().into_transaction_log()
    }

    pub(crate) async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_healthz() {
        let response = get(app_without_db(), "/healthz").await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let response = get(app_without_db(), "/no/such/route").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "not found");
    }

    #[tokio::test]
    async fn test_panic_becomes_500() {
        let response = handle_panic(Box::new("boom"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["error"], "internal server error");
    }

    #[test]
    fn test_invalid_cors_origin() {
        let mut config = test_config();
        config.cors.allowed_origins = vec!["bad\norigin".to_string()];
        let state = ApiState {
            repo: Repository::new(Arc::new(
                MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
            )),
        };

        assert!(router(state, &config).is_err());
    }

    #[test]
    fn test_openapi_lists_endpoints() {
        let doc = ApiDoc::openapi();

        for path in ["/api/contact", "/api/posts", "/api/posts/{slug}"] {
            assert!(doc.paths.paths.contains_key(path), "{path}");
        }
    }
}
