//! Loading page content from disk or stdin.
//!
//! A failure here means the page could not be acquired at all, which callers
//! must keep apart from a page that merely scores badly.

use crate::extractor::PageDocument;
use crate::models::AnalysisInput;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reads from stdin when given as the source.
pub const STDIN_SOURCE: &str = "-";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Document is empty: {0}")]
    Empty(String),

    #[error("Invalid analysis input in {path}: {source}")]
    InvalidInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads an [`AnalysisInput`] from `source`.
///
/// `-` reads HTML from stdin, `*.json` is deserialized as a pre-extracted
/// input, and anything else is parsed as HTML. A non-empty `url` overrides
/// the URL recorded in the input.
pub fn load_input(source: &str, url: Option<&str>) -> Result<AnalysisInput, SourceError> {
    let mut input = if source == STDIN_SOURCE {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .map_err(SourceError::Stdin)?;
        tracing::debug!(bytes = html.len(), "Read document from stdin");
        input_from_html(&html, "stdin")?
    } else {
        let path = Path::new(source);
        let contents = std::fs::read_to_string(path).map_err(|e| SourceError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "Read document");

        if is_json(path) {
            input_from_json(&contents, path)?
        } else {
            input_from_html(&contents, source)?
        }
    };

    if let Some(url) = url.filter(|u| !u.is_empty()) {
        input.url = url.to_string();
    }

    Ok(input)
}

/// Parses `html` and extracts the analysis fields from it.
pub fn input_from_html(html: &str, origin: &str) -> Result<AnalysisInput, SourceError> {
    if html.trim().is_empty() {
        return Err(SourceError::Empty(origin.to_string()));
    }

    Ok(PageDocument::parse(html).to_input(""))
}

fn input_from_json(contents: &str, path: &Path) -> Result<AnalysisInput, SourceError> {
    if contents.trim().is_empty() {
        return Err(SourceError::Empty(path.display().to_string()));
    }

    serde_json::from_str(contents).map_err(|e| SourceError::InvalidInput {
        path: path.to_path_buf(),
        source: e,
    })
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
