//! Al-Noor Generator Library
//!
//! Page rendering and static site build.
//!
//! # Modules
//!
//! - [`template`] - HTML template system with variable interpolation
//! - [`views`] - markup fragments for cards, blocks, pagination and content sections
//! - [`partials`] - `data-include` placeholder resolution
//! - [`scripts`] - inline page scripts for search, filters, pagination and `?id=` lookup
//! - [`html`] - full pages from the content store and the article controllers
//! - [`build`] - build orchestration

pub mod build;
pub mod html;
pub mod partials;
pub mod scripts;
pub mod template;
pub mod views;

pub use build::{BuildError, BuildStats, Builder};
pub use html::{HtmlError, HtmlGenerator};
pub use partials::{
    DirFragmentSource, FragmentSource, Included, PartialError, include_partials, include_paths,
};
pub use template::{Template, TemplateContext, TemplateRegistry};
