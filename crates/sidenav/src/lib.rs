//! JSON-driven side navigation: fetches a nav tree, renders it as nested
//! lists into a page, and keeps `active` markers in step with the location
//! fragment.
//!
//! [`SideNav::init`] is the entry point; the step modules are public so the
//! pieces can be driven on their own.

pub mod app;
pub mod config;
pub mod error;
pub mod fetch;
pub mod highlight;
pub mod page;
pub mod render;
pub mod tree;
pub mod wiring;

pub use app::SideNav;
pub use config::NavConfig;
pub use error::{DomError, InitError, ParseError};
pub use fetch::{Fetcher, HttpFetcher};
pub use highlight::HighlightReport;
pub use page::{EventTarget, Location, Page};
pub use tree::{NavNode, NavTree, parse};
