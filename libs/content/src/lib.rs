//! Static site content compiled into the binary.
//!
//! Nothing here changes at runtime, so every accessor hands out the same
//! `'static` slice in declaration order.

use entity::prelude::*;

mod home;
mod posts;

pub fn all_posts() -> &'static [BlogPostEntity] {
    posts::POSTS
}

pub fn post_by_slug(slug: &str) -> Option<&'static BlogPostEntity> {
    posts::POSTS.iter().find(|post| post.slug == slug)
}

pub fn posts_in_category(
    category: Category,
) -> impl Iterator<Item = &'static BlogPostEntity> {
    posts::POSTS
        .iter()
        .filter(move |post| post.category == category)
}

pub fn services() -> &'static [ServiceEntity] {
    home::SERVICES
}

pub fn case_studies() -> &'static [CaseStudyEntity] {
    home::CASE_STUDIES
}

pub fn testimonials() -> &'static [TestimonialEntity] {
    home::TESTIMONIALS
}

pub fn faqs() -> &'static [FaqEntity] {
    home::FAQS
}
