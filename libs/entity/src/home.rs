use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct CaseStudy {
    pub title: &'static str,
    pub client: &'static str,
    pub summary: &'static str,
    pub image_src: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}
