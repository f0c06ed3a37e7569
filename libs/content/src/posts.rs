use entity::prelude::*;

pub(crate) static POSTS: &[BlogPostEntity] = &[
    BlogPostEntity {
        id: 1,
        title: "Designing Landing Pages That Convert",
        excerpt: "Layout, hierarchy and copy decisions that turn visitors \
                  into leads, drawn from a year of A/B tests.",
        date: "March 12, 2024",
        category: Category::WebDesign,
        slug: "designing-landing-pages-that-convert",
        image_src: "/images/blog/landing-pages.jpg",
        read_time: 6,
        content: "<p>A landing page has one job: move a visitor to a \
                  single action. Everything on the page either supports \
                  that action or competes with it.</p>\
                  <h2>Lead with the outcome</h2>\
                  <p>Headlines that describe what the customer gets \
                  outperform headlines that describe what the product \
                  is.</p>\
                  <h2>One call to action</h2>\
                  <p>Repeat it, but never split it. Two equally weighted \
                  buttons halve the attention each one receives.</p>",
    },
    BlogPostEntity {
        id: 2,
        title: "Why We Build Marketing Sites on a Headless Stack",
        excerpt: "Separating content from presentation keeps editors \
                  fast and pages faster.",
        date: "April 3, 2024",
        category: Category::Development,
        slug: "why-we-build-on-a-headless-stack",
        image_src: "/images/blog/headless-stack.jpg",
        read_time: 8,
        content: "<p>Monolithic site builders couple the editing \
                  experience to the rendering pipeline. A headless setup \
                  lets both evolve independently.</p>\
                  <h2>Static where possible</h2>\
                  <p>Most marketing pages change weekly at most. \
                  Pre-rendering them removes a whole class of runtime \
                  failures.</p>\
                  <h2>Dynamic where it matters</h2>\
                  <p>Forms, search and personalisation stay behind small \
                  APIs that can be scaled on their own.</p>",
    },
    BlogPostEntity {
        id: 3,
        title: "A Practical Guide to Local SEO for Small Businesses",
        excerpt: "Listings, reviews and location pages: the three levers \
                  that move local rankings.",
        date: "May 21, 2024",
        category: Category::Marketing,
        slug: "practical-guide-to-local-seo",
        image_src: "/images/blog/local-seo.jpg",
        read_time: 7,
        content: "<p>Local search rewards consistency. The same name, \
                  address and phone number everywhere is the \
                  foundation.</p>\
                  <h2>Reviews are ranking signals</h2>\
                  <p>Ask every happy customer, reply to every review, and \
                  never buy them.</p>\
                  <h2>Location pages</h2>\
                  <p>One page per service area, each with genuinely local \
                  content, beats a single page listing every town.</p>",
    },
    BlogPostEntity {
        id: 4,
        title: "Rebranding Without Losing Recognition",
        excerpt: "How to evolve a visual identity while keeping the \
                  equity customers already associate with it.",
        date: "June 18, 2024",
        category: Category::Branding,
        slug: "rebranding-without-losing-recognition",
        image_src: "/images/blog/rebranding.jpg",
        read_time: 5,
        content: "<p>Recognition lives in a handful of distinctive \
                  assets: a colour, a shape, a sound. Identify them \
                  before changing anything.</p>\
                  <h2>Evolve, then replace</h2>\
                  <p>Staged rollouts let audiences carry their \
                  associations from the old mark to the new one.</p>",
    },
    BlogPostEntity {
        id: 5,
        title: "Setting Digital Goals Your Team Can Actually Hit",
        excerpt: "Turning a vague ambition to grow online into \
                  measurable quarterly targets.",
        date: "July 9, 2024",
        category: Category::Strategy,
        slug: "setting-digital-goals",
        image_src: "/images/blog/digital-goals.jpg",
        read_time: 9,
        content: "<p>Goals fail when nobody can tell whether they were \
                  met. Start from a metric the team already tracks.</p>\
                  <h2>Leading and lagging indicators</h2>\
                  <p>Revenue lags. Qualified leads, demo requests and \
                  return visits lead. Plan around the leading ones.</p>\
                  <h2>Review monthly</h2>\
                  <p>A quarterly target with monthly checkpoints leaves \
                  room to adjust before the quarter is lost.</p>",
    },
    BlogPostEntity {
        id: 6,
        title: "Accessible Colour Palettes Without Compromise",
        excerpt: "Meeting contrast requirements while keeping a palette \
                  that still feels like your brand.",
        date: "August 27, 2024",
        category: Category::WebDesign,
        slug: "accessible-colour-palettes",
        image_src: "/images/blog/colour-palettes.jpg",
        read_time: 4,
        content: "<p>Contrast ratios are a constraint, not a style. Most \
                  brand colours can hit them with small shifts in \
                  lightness.</p>\
                  <h2>Test in context</h2>\
                  <p>Check text on every background it will actually \
                  appear on, including hover and focus states.</p>",
    },
];
