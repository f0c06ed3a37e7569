use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Category {
    #[default]
    #[serde(rename = "Web Design", alias = "web-design")]
    #[strum(serialize = "Web Design")]
    WebDesign,
    #[serde(alias = "development")]
    Development,
    #[serde(alias = "marketing")]
    Marketing,
    #[serde(alias = "branding")]
    Branding,
    #[serde(alias = "strategy")]
    Strategy,
}

/// Display styling for a category badge.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct CategoryStyle {
    pub badge_class: &'static str,
    pub accent: &'static str,
}

impl Category {
    pub fn style(&self) -> CategoryStyle {
        match self {
            Category::WebDesign => CategoryStyle {
                badge_class: "bg-violet-100 text-violet-700",
                accent: "#7c3aed",
            },
            Category::Development => CategoryStyle {
                badge_class: "bg-sky-100 text-sky-700",
                accent: "#0284c7",
            },
            Category::Marketing => CategoryStyle {
                badge_class: "bg-amber-100 text-amber-700",
                accent: "#d97706",
            },
            Category::Branding => CategoryStyle {
                badge_class: "bg-rose-100 text-rose-700",
                accent: "#e11d48",
            },
            Category::Strategy => CategoryStyle {
                badge_class: "bg-emerald-100 text-emerald-700",
                accent: "#059669",
            },
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use strum::IntoEnumIterator as _;

    use super::*;

    #[test]
    fn test_every_category_has_distinct_style() {
        let classes: HashSet<_> =
            Category::iter().map(|c| c.style().badge_class).collect();

        assert_eq!(Category::iter().count(), 5);
        assert_eq!(classes.len(), 5);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::WebDesign.to_string(), "Web Design");
        assert_eq!(
            serde_json::to_string(&Category::WebDesign).unwrap(),
            "\"Web Design\""
        );
        assert_eq!(
            serde_json::from_str::<Category>("\"web-design\"").unwrap(),
            Category::WebDesign
        );
        assert_eq!(
            serde_json::from_str::<Category>("\"Strategy\"").unwrap(),
            Category::Strategy
        );
    }
}
