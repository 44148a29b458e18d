mod error;
pub mod fields;
mod fill;
pub mod inspect;
mod matcher;
pub mod model;

pub use error::Error;
pub use fields::FieldMap;
pub use fill::{FillStats, fill_document};
pub use matcher::FieldMatcher;
pub use model::{Document, HeaderFooter, Paragraph, Run, Section, Table, TableCell, TableRow};

use std::time::Instant;

/// Run one fill pass over `doc`, mutating it in place. The tree keeps its
/// identity; only run texts change. See [`fill_document`] for the traversal
/// and matching contract.
pub fn fill(doc: &mut Document, fields: &FieldMap) -> Result<FillStats, Error> {
    let t0 = Instant::now();

    let stats = fill_document(doc, fields)?;

    log::info!(
        "Fill pass: {} fields, {} paragraphs and {} table cells updated in {:.1}ms",
        fields.len(),
        stats.paragraphs,
        stats.cells,
        t0.elapsed().as_secs_f64() * 1000.0,
    );

    Ok(stats)
}
