use crate::facet::Facet;
use miette::Diagnostic;
use starbase_styles::{Style, Stylize};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SnapshotError {
    #[diagnostic(code(snapshot::capture_degraded))]
    #[error("Unable to capture the {} facet: {reason}", .facet.as_str().style(Style::Property))]
    CaptureDegraded { facet: Facet, reason: String },

    #[diagnostic(
        code(snapshot::clock_unavailable),
        help("A readable wall clock is required to timestamp a snapshot.")
    )]
    #[error("The system clock is unavailable: {reason}")]
    SystemClockUnavailable { reason: String },
}

impl SnapshotError {
    pub fn degraded(facet: Facet, reason: impl ToString) -> Self {
        Self::CaptureDegraded {
            facet,
            reason: reason.to_string(),
        }
    }
}
