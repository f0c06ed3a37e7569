//! Interactive behaviour of the site's page sections.
//!
//! Each component is a plain state machine. Callers feed it events and a
//! monotonic clock (`Duration` since page load) and render whatever state
//! it reports; nothing here touches a DOM or spawns timers.

pub mod accordion;
pub mod carousel;
pub mod contact_form;
pub mod nav_pill;
pub mod timeline;
