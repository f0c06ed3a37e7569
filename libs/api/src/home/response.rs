use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Serialize, ToSchema)]
pub struct CaseStudy {
    pub title: String,
    pub client: String,
    pub summary: String,
    pub image_src: String,
    pub tags: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub company: String,
}

#[derive(Serialize, ToSchema)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Serialize, ToSchema)]
pub struct GetHomeResponse {
    pub services: Vec<Service>,
    pub case_studies: Vec<CaseStudy>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<Faq>,
}

impl From<&ServiceEntity> for Service {
    fn from(value: &ServiceEntity) -> Self {
        Self {
            title: value.title.to_string(),
            description: value.description.to_string(),
            icon: value.icon.to_string(),
        }
    }
}

impl From<&CaseStudyEntity> for CaseStudy {
    fn from(value: &CaseStudyEntity) -> Self {
        Self {
            title: value.title.to_string(),
            client: value.client.to_string(),
            summary: value.summary.to_string(),
            image_src: value.image_src.to_string(),
            tags: value.tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

impl From<&TestimonialEntity> for Testimonial {
    fn from(value: &TestimonialEntity) -> Self {
        Self {
            quote: value.quote.to_string(),
            author: value.author.to_string(),
            role: value.role.to_string(),
            company: value.company.to_string(),
        }
    }
}

impl From<&FaqEntity> for Faq {
    fn from(value: &FaqEntity) -> Self {
        Self {
            question: value.question.to_string(),
            answer: value.answer.to_string(),
        }
    }
}
