//! Extraction of numbered choices (`1. foo`) from generated text.
//!
//! Generated messages often end with an instruction block introduced by a
//! directive line (`> 指令：...`). Everything from the first directive line on
//! is never scanned, so numbered steps inside the instructions are not offered
//! as choices.

use std::sync::LazyLock;

use pickfill_protocol::ChoiceOption;
use regex::Regex;

/// Line prefix that starts the instruction block of a generated message.
pub const DEFAULT_DIRECTIVE_MARKER: &str = "> 指令：";

// `\s` is Unicode-aware (full-width space, NBSP). `R` makes `\r`, `\n` and
// `\r\n` all end a line. Digits stay ASCII.
static OPTION_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"(?mR)^\s*([0-9]+)\.\s+(.+)$"));

/// Extracts choices using [`DEFAULT_DIRECTIVE_MARKER`].
pub fn extract_options(text: &str) -> Vec<ChoiceOption> {
    OptionParser::default().extract(text)
}

/// First option whose label is exactly `index`.
pub fn find_option<'a>(options: &'a [ChoiceOption], index: &str) -> Option<&'a ChoiceOption> {
    options.iter().find(|option| option.index == index)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionParser {
    directive_marker: String,
}

impl OptionParser {
    pub fn new(directive_marker: impl Into<String>) -> Self {
        Self {
            directive_marker: directive_marker.into(),
        }
    }

    /// Returns the option-bearing part of `text`: every line before the first
    /// directive line, or all of `text` when there is none. `\n` and `\r` both
    /// end a line.
    pub fn strip_directive<'a>(&self, text: &'a str) -> &'a str {
        let mut offset: usize = 0;
        for line in text.split(['\n', '\r']) {
            if line.trim().starts_with(self.directive_marker.as_str()) {
                // The line break that ends the last kept line is not part of the region.
                return &text[..offset.saturating_sub(1)];
            }
            offset += line.len() + 1;
        }
        text
    }

    /// Numbered choices in the order they appear. Labels are kept verbatim
    /// and duplicates are not collapsed.
    pub fn extract(&self, text: &str) -> Vec<ChoiceOption> {
        if text.is_empty() {
            return Vec::new();
        }
        let region = self.strip_directive(text);
        let options: Vec<ChoiceOption> = OPTION_LINE_REGEX
            .captures_iter(region)
            .filter_map(|captures| {
                let index = captures.get(1)?.as_str();
                let text = captures.get(2)?.as_str().trim();
                Some(ChoiceOption::new(index, text))
            })
            .collect();
        tracing::debug!(
            scanned_bytes = region.len(),
            total_bytes = text.len(),
            found = options.len(),
            "extracted numbered options"
        );
        options
    }
}

impl Default for OptionParser {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTIVE_MARKER)
    }
}

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("invalid regex pattern `{pattern}`: {err}"),
    }
}
