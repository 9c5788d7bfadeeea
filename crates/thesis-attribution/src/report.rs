//! Wiki-markup rendering of attribution results
//!
//! One list item per attributed thesis:
//!
//! ```text
//! * Jane Smith: [http://hdl.handle.net/10062/1 On actuators] (2019)
//! ```

use std::fmt::Write;

use dspace_client::Document;

use crate::resolver::SubjectAttribution;

/// Render every matched thesis as a wiki list item, subjects in input order.
///
/// Subjects without an attributed thesis are left out.
pub fn render_report(results: &[SubjectAttribution]) -> String {
    let mut out = String::new();
    for result in results {
        for document in result.attribution.documents() {
            let _ = writeln!(out, "* {}: {}", result.subject.full_name, render_thesis(document));
        }
    }
    out
}

/// `[uri title] (year)`, dropping whatever the item does not carry
pub fn render_thesis(document: &Document) -> String {
    let title = document.title().unwrap_or("Untitled");
    let mut line = match document.uri() {
        Some(uri) => format!("[{} {}]", uri, title),
        None => title.to_string(),
    };
    if let Some(year) = document.year() {
        let _ = write!(line, " ({})", year);
    }
    line
}
