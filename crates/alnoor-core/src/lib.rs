//! Al-Noor Core Library
//!
//! Configuration, the read-only content store, and error handling shared by
//! the article pipeline, the page generator and the CLI.

pub mod config;
pub mod content;
pub mod error;

pub use config::Config;
pub use content::{
    About, ContentFormat, ContentStore, Course, CallToAction, FaqEntry, Hero, PricingPlan,
    RawArticle, SiteContent,
};
pub use error::{CoreError, Result};
