//! Recognizing `Target:` lines and turning them into identifiers.

use crate::constants;
use crate::models::config::ExtractMode;
use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone)]
pub struct TargetFilter {
    pattern: Regex,
    mode: ExtractMode,
}

impl TargetFilter {
    /// Compile `pattern` as an unanchored regular expression.
    pub fn new(pattern: &str, ignore_case: bool, mode: ExtractMode) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(ignore_case)
            .build()
            .with_context(|| format!("invalid target pattern '{}'", pattern))?;
        Ok(Self { pattern, mode })
    }

    pub fn mode(&self) -> ExtractMode {
        self.mode
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// True for a `Target:` line whose label contains the pattern.
    ///
    /// The pattern sees the target with surrounding whitespace removed, so
    /// `^` and `$` anchor to the target itself.
    pub fn matches(&self, line: &str) -> bool {
        target_text(line).is_some_and(|text| self.pattern.is_match(text.trim()))
    }

    /// The text after `Target:` with leading whitespace removed, and in
    /// trimmed mode trailing whitespace too. `None` if the line has no label.
    pub fn extract_identifier(&self, line: &str) -> Option<String> {
        let text = target_text(line)?.trim_start();
        let id = match self.mode {
            ExtractMode::Raw => text,
            ExtractMode::Trimmed => text.trim_end(),
        };
        Some(id.to_string())
    }

    pub fn should_delete(&self, identifier: &str) -> bool {
        match self.mode {
            ExtractMode::Raw => true,
            ExtractMode::Trimmed => !identifier.is_empty(),
        }
    }

    /// Console line printed before each deletion attempt.
    pub fn announcement(&self, identifier: &str) -> String {
        match self.mode {
            ExtractMode::Raw => format!("Deleting credential: {}", identifier),
            ExtractMode::Trimmed => format!("Deleting credential: '{}'", identifier),
        }
    }
}

fn target_text(line: &str) -> Option<&str> {
    line.trim_start().strip_prefix(constants::TARGET_LABEL)
}
