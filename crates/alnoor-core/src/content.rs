//! Content types and the read-only content store.

use std::{path::Path, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Encoding of a content data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    /// TOML (.toml files).
    Toml,
    /// YAML (.yaml/.yml files).
    Yaml,
    /// JSON (.json files).
    Json,
}

impl ContentFormat {
    /// Determine content format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Determine content format from a file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// A call-to-action button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    /// Button label.
    pub label: String,

    /// Button target.
    pub link: String,
}

/// Homepage hero block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Arabic verse shown above the fold.
    pub verse: String,

    /// Verse translation and citation.
    pub translation: String,

    /// One-line pitch under the verse.
    pub subtext: String,

    /// Primary call to action.
    #[serde(alias = "ctaPrimary")]
    pub cta_primary: CallToAction,

    /// Secondary call to action; hidden when absent.
    #[serde(default, alias = "ctaSecondary")]
    pub cta_secondary: Option<CallToAction>,
}

/// Mission statement and goals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub mission: String,

    #[serde(default)]
    pub goals: Vec<String>,

    #[serde(default)]
    pub values: Vec<String>,
}

/// A course offered by the institute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub description: String,
    pub level: String,
}

/// An article record as stored in the content file.
///
/// Articles carry no identifier; their 1-based position in the list is their
/// identity, so reordering the file changes every permalink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawArticle {
    pub title: String,

    pub excerpt: String,

    pub category: String,

    pub author: String,

    /// Display date. ISO dates (`YYYY-MM-DD`) are reformatted, anything else is shown as-is.
    pub date: String,

    #[serde(default)]
    pub image: Option<String>,

    /// Article body; the excerpt stands in when absent.
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// A pricing plan. Original prices are shown struck through when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub plan: String,

    /// Class frequency, e.g. "2 classes / week".
    pub classes: String,

    pub usd: String,

    #[serde(default, alias = "originalUsd")]
    pub original_usd: Option<String>,

    #[serde(default)]
    pub gbp: Option<String>,

    #[serde(default, alias = "originalGbp")]
    pub original_gbp: Option<String>,

    #[serde(default)]
    pub eur: Option<String>,

    #[serde(default, alias = "originalEur")]
    pub original_eur: Option<String>,

    #[serde(default)]
    pub perks: Vec<String>,
}

/// A frequently asked question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// The full site data set as decoded from the content file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub hero: Hero,

    #[serde(default)]
    pub about: About,

    #[serde(default)]
    pub courses: Vec<Course>,

    /// `None` when the file has no articles collection at all, which is
    /// different from an empty one.
    #[serde(default)]
    pub articles: Option<Vec<RawArticle>>,

    #[serde(default)]
    pub pricing: Vec<PricingPlan>,

    #[serde(default)]
    pub faq: Vec<FaqEntry>,

    #[serde(default)]
    pub terms: Vec<String>,
}

/// Shared, immutable handle to the site content.
///
/// Cloning is cheap; every clone sees the same data.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    inner: Arc<SiteContent>,
}

impl ContentStore {
    /// Wrap decoded content in a store.
    pub fn new(content: SiteContent) -> Self {
        Self {
            inner: Arc::new(content),
        }
    }

    /// Load the content file, choosing the decoder by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = ContentFormat::from_path(path).ok_or_else(|| {
            CoreError::content(path, "unsupported extension (expected .toml, .yaml, .yml or .json)")
        })?;

        let source = std::fs::read_to_string(path)?;
        let store = Self::parse(&source, format)
            .map_err(|e| CoreError::content(path, e.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            ?format,
            articles = store.article_count(),
            "loaded content"
        );
        Ok(store)
    }

    /// Decode content from a string in the given format.
    pub fn parse(source: &str, format: ContentFormat) -> Result<Self> {
        let content: SiteContent = match format {
            ContentFormat::Toml => toml::from_str(source)?,
            ContentFormat::Yaml => serde_yaml::from_str(source)?,
            ContentFormat::Json => serde_json::from_str(source)?,
        };
        Ok(Self::new(content))
    }

    pub fn hero(&self) -> &Hero {
        &self.inner.hero
    }

    pub fn about(&self) -> &About {
        &self.inner.about
    }

    pub fn courses(&self) -> &[Course] {
        &self.inner.courses
    }

    /// The articles collection, or `None` when the content has none at all.
    pub fn articles(&self) -> Option<&[RawArticle]> {
        self.inner.articles.as_deref()
    }

    /// Look up an article by its 1-based ordinal.
    pub fn article(&self, ordinal: usize) -> Option<&RawArticle> {
        let index = ordinal.checked_sub(1)?;
        self.articles()?.get(index)
    }

    /// Number of articles; zero when the collection is absent.
    pub fn article_count(&self) -> usize {
        self.articles().map_or(0, <[RawArticle]>::len)
    }

    pub fn pricing(&self) -> &[PricingPlan] {
        &self.inner.pricing
    }

    pub fn faq(&self) -> &[FaqEntry] {
        &self.inner.faq
    }

    pub fn terms(&self) -> &[String] {
        &self.inner.terms
    }
}

impl From<SiteContent> for ContentStore {
    fn from(content: SiteContent) -> Self {
        Self::new(content)
    }
}
