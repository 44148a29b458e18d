#![allow(dead_code)] // each test binary uses its own subset of helpers

use docfill::FieldMap;
use docfill::model::{Document, HeaderFooter, Paragraph, Run, Section, Table, TableCell, TableRow};

pub fn para(text: &str) -> Paragraph {
    Paragraph::from_runs(vec![Run::with_text(text)])
}

pub fn cell(text: &str) -> TableCell {
    TableCell {
        paragraphs: vec![para(text)],
    }
}

pub fn row(texts: &[&str]) -> TableRow {
    TableRow {
        cells: texts.iter().map(|t| cell(t)).collect(),
    }
}

pub fn table(rows: &[&[&str]]) -> Table {
    Table {
        rows: rows.iter().map(|r| row(r)).collect(),
    }
}

pub fn doc_with_paragraphs(texts: &[&str]) -> Document {
    Document {
        paragraphs: texts.iter().map(|t| para(t)).collect(),
        ..Document::default()
    }
}

pub fn doc_with_table(t: Table) -> Document {
    Document {
        tables: vec![t],
        ..Document::default()
    }
}

pub fn section_with_header_footer(header: &str, footer: &str) -> Section {
    Section {
        header: Some(HeaderFooter {
            paragraphs: vec![para(header)],
        }),
        footer: Some(HeaderFooter {
            paragraphs: vec![para(footer)],
        }),
    }
}

pub fn fields(pairs: &[(&str, &str)]) -> FieldMap {
    pairs.iter().map(|&(k, v)| (k, v)).collect()
}

pub fn paragraph_texts(doc: &Document) -> Vec<String> {
    doc.paragraphs.iter().map(|p| p.text()).collect()
}
