//! Placeholder recognition for a single field.
//!
//! A [`FieldMatcher`] is compiled once per field per fill pass and reused for
//! every paragraph and cell, instead of rebuilding the patterns at each
//! location. Field names are escaped so they always match themselves
//! literally, and matched case-insensitively; values are inserted verbatim.

use regex::{Captures, NoExpand, Regex};

use crate::fields;

struct Pattern {
    re: Regex,
    /// Keep the matched label (capture group 1) in front of the value.
    keep_label: bool,
}

pub struct FieldMatcher {
    name_lower: String,
    value: String,
    patterns: Vec<Pattern>,
}

impl FieldMatcher {
    /// Compile the placeholder patterns for one field. Returns `None` when
    /// the value is absent (empty or the `"N/A"` sentinel) or when the field
    /// name cannot be turned into a usable pattern; such fields are skipped
    /// without failing the pass.
    pub fn compile(name: &str, value: &str) -> Option<FieldMatcher> {
        if !fields::has_value(value) {
            return None;
        }
        let escaped = regex::escape(name);
        // Tried in order; the first syntax that matches a span wins for it.
        let sources = [
            // "Label: ____" or "Label:" at end of span; label and colon kept
            (format!(r"(?i)({escaped}\s*:\s*)(_+|\s*$)"), true),
            // "Label ____" without a colon; label kept
            (format!(r"(?i)({escaped}\s*)_+"), true),
            // [Label], {{Label}}, <Label>; token consumed entirely
            (format!(r"(?i)\[{escaped}\]"), false),
            (format!(r"(?i)\{{\{{{escaped}\}}\}}"), false),
            (format!(r"(?i)<{escaped}>"), false),
        ];
        let mut patterns = Vec::with_capacity(sources.len());
        for (src, keep_label) in sources {
            match Regex::new(&src) {
                Ok(re) => patterns.push(Pattern { re, keep_label }),
                Err(e) => {
                    log::warn!("skipping unmatchable field {name:?}: {e}");
                    return None;
                }
            }
        }
        Some(FieldMatcher {
            name_lower: name.to_lowercase(),
            value: value.to_string(),
            patterns,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Case-insensitive substring test for the field name, used by the
    /// table label/adjacent-value strategy.
    pub fn label_occurs_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.name_lower)
    }

    /// Apply the first matching placeholder syntax to `text`, replacing
    /// every occurrence of that syntax. `None` means no placeholder for
    /// this field is present in the span.
    pub fn apply(&self, text: &str) -> Option<String> {
        let pattern = self.patterns.iter().find(|p| p.re.is_match(text))?;
        let rewritten = if pattern.keep_label {
            // Closure replacer: "$" in an extracted value must stay literal,
            // never expand as a group reference.
            pattern
                .re
                .replace_all(text, |caps: &Captures| format!("{}{}", &caps[1], self.value))
        } else {
            pattern.re.replace_all(text, NoExpand(&self.value))
        };
        Some(rewritten.into_owned())
    }
}
