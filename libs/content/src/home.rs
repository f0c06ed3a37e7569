use entity::prelude::*;

pub(crate) static SERVICES: &[ServiceEntity] = &[
    ServiceEntity {
        title: "Web Design",
        description: "Responsive, accessible sites designed around what \
                      your customers need to do.",
        icon: "layout",
    },
    ServiceEntity {
        title: "Development",
        description: "Fast, maintainable builds on modern stacks, from \
                      marketing sites to web apps.",
        icon: "code",
    },
    ServiceEntity {
        title: "Digital Marketing",
        description: "SEO, paid search and content that bring the right \
                      visitors to your door.",
        icon: "megaphone",
    },
    ServiceEntity {
        title: "Branding",
        description: "Identities with a clear voice and a system that \
                      scales across every channel.",
        icon: "sparkles",
    },
];

pub(crate) static CASE_STUDIES: &[CaseStudyEntity] = &[
    CaseStudyEntity {
        title: "Doubling online bookings",
        client: "Harbour Physio",
        summary: "A redesigned booking flow and local SEO campaign took \
                  online appointments from 30% to 62% of the total.",
        image_src: "/images/cases/harbour-physio.jpg",
        tags: &["Web Design", "Marketing"],
    },
    CaseStudyEntity {
        title: "A brand for a new roastery",
        client: "Northline Coffee",
        summary: "Naming, identity and packaging for a specialty roaster \
                  launching into wholesale.",
        image_src: "/images/cases/northline.jpg",
        tags: &["Branding"],
    },
    CaseStudyEntity {
        title: "Replatforming a 4,000-page catalogue",
        client: "Meridian Supply",
        summary: "Migration to a headless commerce stack with zero lost \
                  rankings and a 3x faster storefront.",
        image_src: "/images/cases/meridian.jpg",
        tags: &["Development", "Strategy"],
    },
];

pub(crate) static TESTIMONIALS: &[TestimonialEntity] = &[
    TestimonialEntity {
        quote: "They understood our patients better than we did. The new \
                site paid for itself in two months.",
        author: "Dana Whitfield",
        role: "Practice Manager",
        company: "Harbour Physio",
    },
    TestimonialEntity {
        quote: "Every deadline met, every question answered the same \
                day. Rare in this industry.",
        author: "Omar Reyes",
        role: "Founder",
        company: "Northline Coffee",
    },
    TestimonialEntity {
        quote: "The migration was the least eventful project we ran all \
                year, which is exactly what we wanted.",
        author: "Priya Natarajan",
        role: "Head of E-commerce",
        company: "Meridian Supply",
    },
    TestimonialEntity {
        quote: "Clear reporting, honest advice, and results we can point \
                to in board meetings.",
        author: "Tomasz Nowak",
        role: "Marketing Director",
        company: "Fieldstone Legal",
    },
];

pub(crate) static FAQS: &[FaqEntity] = &[
    FaqEntity {
        question: "How long does a typical website project take?",
        answer: "Most marketing sites launch in six to ten weeks, \
                 depending on content readiness and the number of \
                 integrations.",
    },
    FaqEntity {
        question: "Do you work with businesses outside your city?",
        answer: "Yes. Most of our clients are remote and we run \
                 workshops over video.",
    },
    FaqEntity {
        question: "Can you take over an existing website?",
        answer: "We start with an audit, then either improve what is \
                 there or plan a rebuild if that is cheaper long-term.",
    },
    FaqEntity {
        question: "What does ongoing support include?",
        answer: "Hosting management, security updates, small content \
                 changes and a monthly performance report.",
    },
    FaqEntity {
        question: "How do you price projects?",
        answer: "Fixed-price proposals for defined scopes, and monthly \
                 retainers for ongoing marketing work.",
    },
];
