//! Freeform article text to structured blocks.
//!
//! The input is split on blank lines. Each chunk becomes exactly one block:
//!
//! - a **heading** when it starts with `#` (level is the run length, capped at 6),
//! - a **list** when its first line starts with `-` or `*` followed by whitespace,
//! - a **paragraph** otherwise, kept verbatim.
//!
//! Heading detection wins over list detection.

use std::{iter::FusedIterator, str::Lines};

/// Deepest heading level.
const MAX_HEADING_LEVEL: usize = 6;

/// A classified chunk of article text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `# Title` style heading.
    Heading { level: u8, text: String },
    /// Bulleted list; markers are stripped from the items.
    List(Vec<String>),
    /// Anything else, verbatim.
    Paragraph(String),
}

impl Block {
    /// Write the block back as source text that parses to the same block.
    pub fn to_source(&self) -> String {
        match self {
            Self::Heading { level, text } => {
                let marks = "#".repeat(usize::from(*level));
                if text.is_empty() {
                    marks
                } else {
                    format!("{marks} {text}")
                }
            }
            Self::List(items) => items
                .iter()
                .map(|item| format!("- {item}"))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Paragraph(text) => text.clone(),
        }
    }

    /// Classify one blank-line-delimited chunk. `chunk` must be trimmed.
    fn classify(chunk: &str) -> Self {
        if chunk.starts_with('#') {
            let run = chunk.bytes().take_while(|&b| b == b'#').count();
            let level = run.min(MAX_HEADING_LEVEL) as u8;
            return Self::Heading {
                level,
                text: chunk[run..].trim_start().to_string(),
            };
        }

        let first_line = chunk.lines().next().unwrap_or_default();
        if strip_bullet(first_line).is_some() {
            let items = chunk
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| strip_bullet(line).unwrap_or(line).to_string())
                .collect();
            return Self::List(items);
        }

        Self::Paragraph(chunk.to_string())
    }
}

/// Strip a `-`/`*` marker and the whitespace after it.
fn strip_bullet(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(['-', '*'])?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Lazy block iterator over article text.
///
/// Single pass: once exhausted it stays exhausted.
#[derive(Debug)]
pub struct ContentBlocks<'a> {
    lines: Lines<'a>,
}

impl<'a> ContentBlocks<'a> {
    /// Start iterating the blocks of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
        }
    }
}

impl Iterator for ContentBlocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let mut chunk: Vec<&str> = Vec::new();

        for line in self.lines.by_ref() {
            if line.trim().is_empty() {
                if chunk.is_empty() {
                    continue;
                }
                break;
            }
            chunk.push(line);
        }

        if chunk.is_empty() {
            return None;
        }

        Some(Block::classify(chunk.join("\n").trim()))
    }
}

impl FusedIterator for ContentBlocks<'_> {}

/// Split `text` into blocks.
pub fn render_content_blocks(text: &str) -> ContentBlocks<'_> {
    ContentBlocks::new(text)
}
