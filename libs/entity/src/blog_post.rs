use serde::Serialize;

use crate::category::Category;

/// A blog post compiled into the binary.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Display date, already formatted.
    pub date: &'static str,
    pub category: Category,
    pub slug: &'static str,
    pub image_src: &'static str,
    /// Minutes.
    pub read_time: u32,
    /// Pre-rendered HTML.
    pub content: &'static str,
}
