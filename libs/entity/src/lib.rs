pub mod blog_post;
pub mod category;
pub mod contact;
pub mod home;

pub mod prelude {
    pub use crate::blog_post::BlogPost as BlogPostEntity;
    pub use crate::category::{Category, CategoryStyle};
    pub use crate::contact::{
        ContactForm, ContactSubmission as ContactSubmissionEntity,
        SubmissionStatus, ValidationError,
    };
    pub use crate::home::{
        CaseStudy as CaseStudyEntity, Faq as FaqEntity,
        Service as ServiceEntity, Testimonial as TestimonialEntity,
    };
}
