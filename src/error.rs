use miette::Diagnostic;
use thiserror::Error;

// My ideas are...
// modelboard::load -> fetching/reading the csv resources.
// modelboard::load::source -> the bytes never arrived.
// modelboard::load::header -> the bytes arrived but the header is short.
// modelboard::parse -> cli argument conversions (future).

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Could not load '{source_name}': {detail}")]
    #[diagnostic(
        code(modelboard::load::source),
        help(
            "A source is either a local csv path or an http(s) url.\n\
There is no retry; run the command again once the source is reachable.\n\
Pass --prices or --labs to point somewhere else."
        )
    )]
    SourceUnreadable { source_name: String, detail: String },

    #[error("The prices csv at '{source_name}' has no '{column}' column.")]
    #[diagnostic(
        code(modelboard::load::header),
        help(
            "The header row must carry at least: Name, Input, Output, Lab.\n\
Column names are matched verbatim, spaces included."
        )
    )]
    MissingColumn { source_name: String, column: String },
}
