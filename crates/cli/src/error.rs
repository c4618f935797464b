use miette::Diagnostic;
use starbase_styles::{Style, Stylize};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SnapshotCliError {
    #[diagnostic(
        code(sysnap::unknown_variable),
        help("Run sysnap without --var to list all captured variables.")
    )]
    #[error(
        "Environment variable {} was not present when the snapshot was captured.",
        .name.style(Style::Property)
    )]
    UnknownVariable { name: String },
}
