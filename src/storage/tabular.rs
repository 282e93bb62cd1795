use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

use crate::error::{Error, Result};
use crate::models::{MergedRecord, SimplifiedIssue, MERGED_HEADER};

pub const ISSUES_CSV_HEADER: [&str; 3] = ["Titulo", "Descripcion", "Etiquetas"];

/// Rows of a delimited file. The first non-blank line becomes `headers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_tsv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = reader.records();
        let headers = match records.next() {
            Some(record) => record?.iter().map(String::from).collect(),
            None => return Ok(Self::default()),
        };

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in records {
            rows.push(record?.iter().map(String::from).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Missing trailing cells read as empty.
    pub fn cell(row: &[String], index: usize) -> &str {
        row.get(index).map(String::as_str).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

pub fn read_tsv(path: &Path) -> Result<Table> {
    let file = File::open(path)?;
    let table = Table::from_tsv_reader(file)?;
    if table.is_empty() {
        return Err(Error::EmptyBacklog(path.to_path_buf()));
    }
    tracing::info!(
        "Read {} backlog rows from {}",
        table.rows.len(),
        path.display()
    );
    Ok(table)
}

fn quoted_writer<W: Write>(writer: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .has_headers(false)
        .flexible(true)
        .from_writer(writer)
}

/// Re-emits a table as comma-separated text with every field quoted.
pub fn write_csv_all_quoted<W: Write>(writer: W, table: &Table) -> Result<()> {
    let mut writer = quoted_writer(writer);
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_issues_csv<W: Write>(writer: W, issues: &[SimplifiedIssue]) -> Result<()> {
    let mut writer = quoted_writer(writer);
    writer.write_record(ISSUES_CSV_HEADER)?;
    for issue in issues {
        writer.write_record([&issue.title, &issue.body, &issue.labels])?;
    }
    writer.flush()?;
    Ok(())
}

/// The header is written even when there are no records.
pub fn write_merged_csv<W: Write>(writer: W, records: &[MergedRecord]) -> Result<()> {
    let mut writer = quoted_writer(writer);
    writer.write_record(MERGED_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_merged_file(path: &Path, records: &[MergedRecord]) -> Result<()> {
    write_merged_csv(File::create(path)?, records)?;
    tracing::info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
