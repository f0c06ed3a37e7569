use axum::Json;

pub mod response;

use self::response::{
    CaseStudy, Faq, GetHomeResponse, Service, Testimonial,
};

/// Home page sections
#[utoipa::path(
    get,
    path = "/api/home",
    responses(
        (status = 200, description = "Static content of the home page sections", body = GetHomeResponse)
    )
)]
pub async fn get_home() -> Json<GetHomeResponse> {
    Json(GetHomeResponse {
        services: content::services().iter().map(Service::from).collect(),
        case_studies: content::case_studies()
            .iter()
            .map(CaseStudy::from)
            .collect(),
        testimonials: content::testimonials()
            .iter()
            .map(Testimonial::from)
            .collect(),
        faqs: content::faqs().iter().map(Faq::from).collect(),
    })
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;

    use crate::test::{app_without_db, get, json_body};

    #[tokio::test]
    async fn test_get_home() {
        let response = get(app_without_db(), "/api/home").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(
            body["services"].as_array().map(Vec::len),
            Some(content::services().len())
        );
        assert_eq!(
            body["testimonials"][0]["author"],
            content::testimonials()[0].author
        );
        assert_eq!(
            body["faqs"].as_array().map(Vec::len),
            Some(content::faqs().len())
        );
    }
}
