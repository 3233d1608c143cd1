//! Job Search Response Parser: tokenizes the search reply line by line.
//!
//! The search call cannot be schema-constrained, so the reply is only
//! line-shaped by convention:
//!
//! ```text
//! [TITLE] @ [COMPANY] | [PLATFORM] | [URL]
//! ```
//!
//! Each line is accepted or discarded on its own; a bad line never fails the
//! whole reply. Accepted fields are trimmed but otherwise unchecked (no URL or
//! platform validation).

use tracing::debug;

use crate::models::job::JobSuggestion;

/// Why a candidate line was dropped. Only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRejection {
    /// Lacks a `|` or an `@`: prose, headers, blank lines.
    NotAJobLine,
    /// Pipe-separated segment count is not 3.
    SegmentCount(usize),
    /// `title @ company` did not split into exactly 2 parts.
    TitleCompanyCount(usize),
}

/// Parses one line into a suggestion or the reason it was rejected.
pub fn parse_job_line(line: &str) -> Result<JobSuggestion, LineRejection> {
    if !(line.contains('|') && line.contains('@')) {
        return Err(LineRejection::NotAJobLine);
    }

    let segments: Vec<&str> = line.split('|').map(str::trim).collect();
    let &[title_and_company, platform, url] = segments.as_slice() else {
        return Err(LineRejection::SegmentCount(segments.len()));
    };

    let names: Vec<&str> = title_and_company.split('@').map(str::trim).collect();
    let &[title, company] = names.as_slice() else {
        return Err(LineRejection::TitleCompanyCount(names.len()));
    };

    Ok(JobSuggestion {
        title: title.to_string(),
        company: company.to_string(),
        platform: platform.to_string(),
        url: url.to_string(),
    })
}

/// Parses a whole reply, keeping valid lines in input order.
/// `None` or empty input yields an empty list.
pub fn parse_job_suggestions(reply: Option<&str>) -> Vec<JobSuggestion> {
    let Some(text) = reply else {
        return Vec::new();
    };

    text.trim()
        .lines()
        .filter_map(|line| match parse_job_line(line) {
            Ok(job) => Some(job),
            Err(LineRejection::NotAJobLine) => None,
            Err(reason) => {
                debug!("Discarding job suggestion line {line:?}: {reason:?}");
                None
            }
        })
        .collect()
}
