//! Share button fallback chain.
//!
//! Native share sheet first, then the clipboard, then a manual copy prompt.
//! Each tier is tried once.

use thiserror::Error;
use tracing::{debug, warn};

use crate::format::DisplayArticle;

/// Characters of body text sent along with a native share.
const SHARE_TEXT_CHARS: usize = 100;

/// What gets shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    /// Payload for an article, with its permalink resolved against `base_url`.
    pub fn for_article(article: &DisplayArticle, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let link = article.link.trim_start_matches('/');
        Self {
            title: article.title.clone(),
            text: article.content.chars().take(SHARE_TEXT_CHARS).collect(),
            url: format!("{base}/{link}"),
        }
    }
}

/// Why a share tier did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The platform lacks this capability.
    #[error("not supported on this platform")]
    Unsupported,

    /// The user dismissed the share sheet.
    #[error("cancelled by the user")]
    Cancelled,

    /// The platform reported a failure.
    #[error("platform error: {0}")]
    Failed(String),
}

/// Host capabilities used by the share button.
pub trait SharePlatform {
    /// Open the native share sheet.
    fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError>;

    /// Put `text` on the clipboard.
    fn write_clipboard(&self, text: &str) -> Result<(), ShareError>;

    /// Ask the user to copy `text` by hand. Cannot fail.
    fn prompt_copy(&self, text: &str);
}

/// Which tier handled the share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// The user dismissed the native sheet; nothing else was tried.
    Cancelled,
    Copied,
    Prompted,
}

/// Share `payload`, degrading from native share to clipboard to a prompt.
pub fn share_article<P>(platform: &P, payload: &SharePayload) -> ShareOutcome
where
    P: SharePlatform + ?Sized,
{
    match platform.native_share(payload) {
        Ok(()) => return ShareOutcome::Shared,
        Err(ShareError::Cancelled) => {
            debug!("native share cancelled");
            return ShareOutcome::Cancelled;
        }
        Err(err) => debug!(error = %err, "native share unavailable, trying clipboard"),
    }

    match platform.write_clipboard(&payload.url) {
        Ok(()) => ShareOutcome::Copied,
        Err(err) => {
            warn!(error = %err, "clipboard write failed, prompting");
            platform.prompt_copy(&payload.url);
            ShareOutcome::Prompted
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::format::ArticleFormatter;

    struct FakePlatform {
        native: Result<(), ShareError>,
        clipboard: Result<(), ShareError>,
        calls: RefCell<Vec<String>>,
    }

    impl FakePlatform {
        fn new(native: Result<(), ShareError>, clipboard: Result<(), ShareError>) -> Self {
            Self {
                native,
                clipboard,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl SharePlatform for FakePlatform {
        fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError> {
            self.calls.borrow_mut().push(format!("native:{}", payload.title));
            self.native.clone()
        }

        fn write_clipboard(&self, text: &str) -> Result<(), ShareError> {
            self.calls.borrow_mut().push(format!("clipboard:{text}"));
            self.clipboard.clone()
        }

        fn prompt_copy(&self, text: &str) {
            self.calls.borrow_mut().push(format!("prompt:{text}"));
        }
    }

    fn payload() -> SharePayload {
        SharePayload {
            title: "Tajweed".to_string(),
            text: "Rules".to_string(),
            url: "https://alnoor.example/pages/article.html?id=1".to_string(),
        }
    }

    #[test]
    fn test_native_share_wins() {
        let platform = FakePlatform::new(Ok(()), Ok(()));
        assert_eq!(share_article(&platform, &payload()), ShareOutcome::Shared);
        assert_eq!(platform.calls.borrow().len(), 1);
    }

    #[test]
    fn test_cancel_stops_the_chain() {
        let platform = FakePlatform::new(Err(ShareError::Cancelled), Ok(()));
        assert_eq!(share_article(&platform, &payload()), ShareOutcome::Cancelled);
        assert_eq!(platform.calls.borrow().len(), 1);
    }

    #[test]
    fn test_falls_back_to_clipboard() {
        let platform = FakePlatform::new(Err(ShareError::Unsupported), Ok(()));
        assert_eq!(share_article(&platform, &payload()), ShareOutcome::Copied);
        assert_eq!(
            platform.calls.borrow().last().map(String::as_str),
            Some("clipboard:https://alnoor.example/pages/article.html?id=1")
        );
    }

    #[test]
    fn test_falls_back_to_prompt() {
        let platform = FakePlatform::new(
            Err(ShareError::Failed("no sheet".to_string())),
            Err(ShareError::Unsupported),
        );
        assert_eq!(share_article(&platform, &payload()), ShareOutcome::Prompted);
        let calls = platform.calls.borrow();
        assert_eq!(calls.len(), 3);
        assert!(calls[2].starts_with("prompt:"));
    }

    #[test]
    fn test_payload_for_article() {
        let mut article = ArticleFormatter::default().format(
            7,
            &alnoor_core::RawArticle {
                title: "Long Read".to_string(),
                excerpt: "x".to_string(),
                category: "Hifz".to_string(),
                author: "Qari Bilal".to_string(),
                date: "Jan 1, 2024".to_string(),
                image: None,
                content: None,
                tags: None,
            },
        );
        article.content = "ق".repeat(150);

        let payload = SharePayload::for_article(&article, "https://alnoor.example/");
        assert_eq!(payload.url, "https://alnoor.example/pages/article.html?id=7");
        assert_eq!(payload.text.chars().count(), 100);
        assert_eq!(payload.title, "Long Read");
    }
}
