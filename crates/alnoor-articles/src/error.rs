//! Article pipeline errors.

use thiserror::Error;

/// Result type for article operations.
pub type Result<T> = std::result::Result<T, ArticleError>;

/// Failure states of the listing and detail views.
///
/// Every variant is terminal and local: the view renders a fallback and
/// nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArticleError {
    /// The content has no articles collection.
    #[error("no articles available")]
    NoArticles,

    /// The requested ordinal does not name an article.
    #[error("article not found: {id}")]
    NotFound { id: String },

    /// The page was opened without an `id` parameter.
    #[error("article ID not provided")]
    MissingId,
}

impl ArticleError {
    /// Create a not-found error for the given raw identifier.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ArticleError::NoArticles.to_string(), "no articles available");
        assert_eq!(
            ArticleError::not_found("999").to_string(),
            "article not found: 999"
        );
        assert!(ArticleError::MissingId.to_string().contains("not provided"));
    }
}
