//! Read-only template analysis: flattened text, placeholder discovery, and a
//! structural outline. Useful for previewing a template before deciding
//! which fields to extract; none of this mutates the tree.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Document;

static PLACEHOLDER_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"\{\{([^}]+)\}\}").expect("valid brace regex"),
        Regex::new(r"\[([A-Z_\s]+)\]").expect("valid bracket regex"),
        Regex::new(r"<([^>]+)>").expect("valid angle regex"),
        Regex::new(r"___+").expect("valid underscore regex"),
    ]
});

/// All text content of the document. Table rows are rendered as their
/// non-empty cell texts joined by " | "; empty paragraphs are dropped.
pub fn document_text(doc: &Document) -> String {
    let mut parts: Vec<String> = Vec::new();
    for paragraph in &doc.paragraphs {
        let text = paragraph.text();
        if !text.trim().is_empty() {
            parts.push(text);
        }
    }
    for table in &doc.tables {
        for row in &table.rows {
            let row_text: Vec<String> = row
                .cells
                .iter()
                .map(|c| c.text().trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
            if !row_text.is_empty() {
                parts.push(row_text.join(" | "));
            }
        }
    }
    parts.join("\n")
}

/// Placeholder tokens found anywhere in the document, in first-seen order:
/// the inner text of `{{..}}`, `[UPPERCASE]` and `<..>` markers, plus bare
/// runs of underscores standing in for blank lines.
pub fn scan_placeholders(doc: &Document) -> Vec<String> {
    let text = document_text(doc);
    let mut found: Vec<String> = Vec::new();
    for re in PLACEHOLDER_PATTERNS.iter() {
        for caps in re.captures_iter(&text) {
            let whole = caps.get(0).map(|m| m.as_str()).unwrap_or("");
            let token = caps.get(1).map_or(whole, |m| m.as_str());
            if !found.iter().any(|t| t == token) {
                found.push(token.to_string());
            }
        }
    }
    found
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentOutline {
    pub paragraphs: usize,
    pub tables: usize,
    pub sections: usize,
    pub has_header_text: bool,
    /// (rows, columns) per table, in document order.
    pub table_dims: Vec<(usize, usize)>,
}

/// Summarize the document's shape without reading any field semantics.
pub fn outline(doc: &Document) -> DocumentOutline {
    let has_header_text = doc.sections.iter().any(|s| {
        s.header
            .as_ref()
            .is_some_and(|h| h.paragraphs.iter().any(|p| !p.text().trim().is_empty()))
    });
    let table_dims = doc
        .tables
        .iter()
        .map(|t| {
            let cols = t.rows.first().map(|r| r.cells.len()).unwrap_or(0);
            (t.rows.len(), cols)
        })
        .collect();
    DocumentOutline {
        paragraphs: doc.paragraphs.len(),
        tables: doc.tables.len(),
        sections: doc.sections.len(),
        has_header_text,
        table_dims,
    }
}
