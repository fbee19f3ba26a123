//! The optional Markdown report.
//!
//! Rows are only ever appended; the table is rendered and written once, at the end
//! of a run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use massres_common::resolution::Resolution;
use thiserror::Error;
use tracing::info;

pub const REPORT_TITLE: &str = "Mass Resolve Report";
pub const HEADER: [&str; 2] = ["Hostname", "IP"];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    pub hostname: String,
    pub ip: String,
}

#[derive(Clone, Debug, Default)]
pub struct ResultTable {
    rows: Vec<Row>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, resolution: &Resolution) {
        self.rows.push(Row {
            hostname: resolution.hostname.clone(),
            ip: resolution.joined_addresses(),
        });
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut md = format!("# {REPORT_TITLE}\n\n");
        md.push_str(&format!("| {} | {} |\n", HEADER[0], HEADER[1]));
        md.push_str("| --- | --- |\n");
        for row in &self.rows {
            md.push_str(&format!(
                "| {} | {} |\n",
                escape_cell(&row.hostname),
                escape_cell(&row.ip)
            ));
        }
        md
    }

    /// Writes the rendered table to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        fs::write(path, self.render()).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Saved {} rows to {}", self.len(), path.display());
        Ok(())
    }
}

// Validation is a search, so a line may legitimately carry a '|'.
fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}
