use axum::{extract::rejection::JsonRejection, extract::State, Json};
use entity::prelude::*;
use tracing::info;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, ErrorResponse, IntoApiResponse};
use crate::ApiState;

use self::{request::PostContactRequest, response::PostContactResponse};

/// Submit the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = PostContactRequest,
    responses(
        (status = 200, description = "Submission stored", body = PostContactResponse),
        (status = 400, description = "A required field is missing", body = ErrorResponse),
        (status = 500, description = "Submission could not be stored", body = ErrorResponse)
    )
)]
pub async fn post_contact(
    State(state): State<ApiState>,
    payload: Result<Json<PostContactRequest>, JsonRejection>,
) -> ApiResponse<Json<PostContactResponse>> {
    let Json(params) = payload.into_response("400-000")?;

    let submission = match ContactForm::from(params).validate() {
        Ok(submission) => submission,
        Err(e) => {
            info!(task = "contact submission rejected", field = e.field());
            return Err(e).into_response(validation_code(e));
        }
    };

    state
        .repo
        .contact
        .save(submission)
        .await
        .into_response("502-001")?;

    info!(task = "contact submission saved");

    Ok(Json(PostContactResponse { success: true }))
}

fn validation_code(e: ValidationError) -> &'static str {
    match e {
        ValidationError::MissingName => "400-001",
        ValidationError::MissingEmail => "400-002",
        ValidationError::MissingMessage => "400-003",
    }
}

#[cfg(test)]
mod test {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
        Router,
    };
    use std::sync::Arc;

    use sea_orm::{
        DatabaseBackend, DatabaseConnection, DbErr, MockDatabase,
        MockExecResult,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt as _;

    use crate::test::{app, json_body, transaction_log};

    fn inserting_db() -> Arc<DatabaseConnection> {
        Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 1,
                    rows_affected: 1,
                }])
                .into_connection(),
        )
    }

    async fn submit(app: Router, body: String) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        app.oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_complete_submission_is_stored() {
        // Arrange
        let db = inserting_db();
        let body = json!({
            "name": "Jan",
            "email": "jan@example.com",
            "message": "Hello",
        });

        // Act
        let response = submit(app(db.clone()), body.to_string()).await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "success": true }));
        let log = transaction_log(db);
        assert_eq!(log.len(), 1);
        let executed = format!("{:?}", log[0]);
        assert!(executed.contains("INSERT INTO"));
        assert!(executed.contains("contact_submission"));
        assert!(executed.contains("String(Some(\"new\"))"));
    }

    #[tokio::test]
    async fn test_optional_fields_are_accepted() {
        let db = inserting_db();
        let body = json!({
            "name": "Jan",
            "email": "jan@example.com",
            "phone": "+48 600 100 200",
            "service_type": "Branding",
            "message": "Hello",
        });

        let response = submit(app(db.clone()), body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(transaction_log(db).len(), 1);
    }

    #[tokio::test]
    async fn test_missing_required_fields_are_rejected() {
        let cases = [
            (
                json!({ "name": "", "email": "jan@example.com", "message": "Hello" }),
                "name is required",
            ),
            (
                json!({ "email": "jan@example.com", "message": "Hello" }),
                "name is required",
            ),
            (
                json!({ "name": "Jan", "email": null, "message": "Hello" }),
                "email is required",
            ),
            (
                json!({ "name": "Jan", "email": "jan@example.com", "message": "  " }),
                "message is required",
            ),
            (json!({}), "name is required"),
        ];

        for (body, expected) in cases {
            // Arrange
            let db = inserting_db();

            // Act
            let response = submit(app(db.clone()), body.to_string()).await;

            // Assert
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(json_body(response).await["error"], expected);
            assert!(transaction_log(db).is_empty(), "{body}");
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let db = inserting_db();

        let response = submit(app(db.clone()), "{not json".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = json_body(response).await;
        assert_eq!(body["error"], "invalid request body");
        assert!(transaction_log(db).is_empty());
    }

    #[tokio::test]
    async fn test_missing_content_type_is_rejected() {
        // Arrange
        let db = inserting_db();
        let body = json!({
            "name": "Jan",
            "email": "jan@example.com",
            "message": "Hello",
        });
        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .body(Body::from(body.to_string()))
            .unwrap();

        // Act
        let response = app(db.clone()).oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "invalid request body");
        assert!(transaction_log(db).is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_is_500() {
        // Arrange
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_errors([DbErr::Custom(
                    "connection refused".to_string(),
                )])
                .into_connection(),
        );
        let body = json!({
            "name": "Jan",
            "email": "jan@example.com",
            "message": "Hello",
        });

        // Act
        let response = submit(app(db), body.to_string()).await;

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(
            body["error"],
            "failed to save your message, please try again later"
        );
        assert!(body.get("success").is_none());
    }

    #[tokio::test]
    async fn test_get_is_not_allowed() {
        let response = crate::test::get(app(inserting_db()), "/api/contact")
            .await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
