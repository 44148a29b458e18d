//! The fill pass: walks the document tree in document order and applies the
//! placeholder matchers to every text-bearing location.
//!
//! The pass is a synchronous in-memory mutation with no rollback: a fatal
//! structural error leaves whatever traversal-order prefix was already
//! filled in place.

use crate::error::Error;
use crate::fields::FieldMap;
use crate::matcher::FieldMatcher;
use crate::model::{Document, Paragraph, Table};

/// Mutations made by a fill pass: body/header/footer paragraphs that
/// changed, and table-cell mutation events (a cell touched by two fields or
/// by both table strategies counts once per touch).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FillStats {
    pub paragraphs: usize,
    pub cells: usize,
}

/// Fill every placeholder in `doc` from `fields`, in document order:
/// top-level paragraphs, then tables, then section headers and footers.
/// Fields with an absent value (empty or `"N/A"`) and fields whose name
/// cannot be compiled into patterns are skipped.
///
/// Not idempotent for the table label/adjacent-value strategy when an
/// extracted value is itself empty-looking or a run of underscores: a second
/// pass will see the filled cell as a blank slot again and refill it.
pub fn fill_document(doc: &mut Document, fields: &FieldMap) -> Result<FillStats, Error> {
    // Compiled once per pass, reused across every location.
    let matchers: Vec<FieldMatcher> = fields
        .iter()
        .filter_map(|(name, value)| FieldMatcher::compile(name, value))
        .collect();

    let mut stats = FillStats::default();

    for paragraph in &mut doc.paragraphs {
        if fill_paragraph(paragraph, &matchers) {
            stats.paragraphs += 1;
        }
    }
    for (index, table) in doc.tables.iter_mut().enumerate() {
        stats.cells += fill_table(table, index, &matchers)?;
    }
    for section in &mut doc.sections {
        for part in [&mut section.header, &mut section.footer] {
            if let Some(part) = part {
                for paragraph in &mut part.paragraphs {
                    if fill_paragraph(paragraph, &matchers) {
                        stats.paragraphs += 1;
                    }
                }
            }
        }
    }

    Ok(stats)
}

/// Apply every matcher to one paragraph, sequentially: each field rewrites
/// the output of the previous one, in field-map order. Returns whether the
/// paragraph changed. Unchanged text is a strict no-op on the run list.
fn fill_paragraph(paragraph: &mut Paragraph, matchers: &[FieldMatcher]) -> bool {
    let original = paragraph.text();
    let mut text = original.clone();
    for matcher in matchers {
        if let Some(rewritten) = matcher.apply(&text) {
            text = rewritten;
        }
    }
    if text == original {
        return false;
    }
    log::debug!("paragraph rewrite: {original:?} -> {text:?}");
    paragraph.set_text(text);
    true
}

/// Trimmed cell content counting as an unfilled value slot: empty, or
/// nothing but underscores.
fn is_blank_slot(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || text.chars().all(|c| c == '_')
}

/// Fill one table: rows top to bottom, cells left to right. Two strategies
/// run per cell per field, label/adjacent first, then within-cell, so a
/// label and its blank can live in adjacent cells or share one cell.
fn fill_table(table: &mut Table, index: usize, matchers: &[FieldMatcher]) -> Result<usize, Error> {
    let width = table.rows.first().map(|r| r.cells.len()).unwrap_or(0);
    let mut changed = 0;

    for (row_index, row) in table.rows.iter_mut().enumerate() {
        if row.cells.len() != width {
            return Err(Error::InconsistentTable(format!(
                "table {index} row {row_index} has {} cells, expected {width}",
                row.cells.len(),
            )));
        }
        for i in 0..row.cells.len() {
            // Snapshot at cell entry; later fills of this cell do not
            // retrigger the label check.
            let cell_text = row.cells[i].text();
            for matcher in matchers {
                // Label cell followed by an empty/underscore value cell.
                if matcher.label_occurs_in(&cell_text)
                    && i + 1 < row.cells.len()
                    && is_blank_slot(&row.cells[i + 1].text())
                {
                    row.cells[i + 1].set_text(matcher.value());
                    changed += 1;
                    log::debug!(
                        "table {index} row {row_index}: filled cell {} next to {cell_text:?}",
                        i + 1,
                    );
                }
                // The same field may also have an inline placeholder here,
                // e.g. a cell holding "Name: ____".
                let mut cell_changed = false;
                for paragraph in &mut row.cells[i].paragraphs {
                    cell_changed |= fill_paragraph(paragraph, std::slice::from_ref(matcher));
                }
                if cell_changed {
                    changed += 1;
                }
            }
        }
    }

    Ok(changed)
}
