//! Error types for container access and template validation

use std::fmt;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

/// Misuse of an [`Optional`](crate::Optional) or [`Outcome`](crate::Outcome)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Read from an empty `Optional`
    #[error("called `{accessor}` on an empty Optional")]
    InvalidAccess { accessor: &'static str },

    #[error("called `unwrap` on an `Err` value")]
    UnwrapOnError,

    #[error("called `err` on an `Ok` value")]
    ErrOnSuccess,

    /// `escalate` hit an `Err`; carries the error's display form
    #[error("{message}")]
    PropagatedError { message: String },
}

/// Which way a brace expression is out of balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BraceFault {
    /// A `}` with no open `{` before it
    ExtraClosing,
    /// A `{` never closed before the end of the text
    Unclosed,
}

impl BraceFault {
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::ExtraClosing => "unbalance format expression, too many closing brackets",
            Self::Unclosed => "unclosed brackets in format expression",
        }
    }
}

impl fmt::Display for BraceFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Template validation failure
///
/// `Copy` and built only from integers so the validator can produce it
/// during constant evaluation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateError {
    #[error("{fault} (byte {position})")]
    UnbalancedBraces { position: usize, fault: BraceFault },

    #[error("{} ({placeholders} placeholders, {arguments} arguments)", arity_text(.placeholders, .arguments))]
    ArityMismatch {
        placeholders: usize,
        arguments: usize,
    },

    #[error("index out of range: {index} >= {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

fn arity_text(placeholders: &usize, arguments: &usize) -> &'static str {
    arity_message(*placeholders, *arguments)
}

const fn arity_message(placeholders: usize, arguments: usize) -> &'static str {
    if placeholders < arguments {
        "not enough placeholders for provided parameters"
    } else {
        "too many placeholders for provided parameters"
    }
}

impl TemplateError {
    /// Static diagnostic, usable in a `const` panic
    pub const fn message(&self) -> &'static str {
        match self {
            Self::UnbalancedBraces { fault, .. } => fault.describe(),
            Self::ArityMismatch {
                placeholders,
                arguments,
            } => arity_message(*placeholders, *arguments),
            Self::IndexOutOfRange { .. } => "index out of range",
        }
    }

    /// Byte range of `source` the error points at
    ///
    /// An out-of-range access points at the last character, since the
    /// index itself lies past the end of the text.
    pub fn span(&self, source: &str) -> Span {
        match self {
            Self::UnbalancedBraces { position, .. } => *position..*position + 1,
            Self::ArityMismatch { .. } => 0..source.len(),
            Self::IndexOutOfRange { .. } => source
                .char_indices()
                .last()
                .map_or(0..0, |(start, c)| start..start + c.len_utf8()),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let span = char_span(source, self.span(source));

        let mut report = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.message())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.to_string())
                    .with_color(Color::Red),
            );

        // Point at the placeholders that have no argument to fill them
        if let Self::ArityMismatch {
            placeholders,
            arguments,
        } = *self
        {
            if placeholders > arguments {
                for excess in crate::template::lexer::brace_spans(source).skip(arguments) {
                    report = report.with_label(
                        Label::new((filename, char_span(source, excess)))
                            .with_message("no argument for this placeholder")
                            .with_color(Color::Yellow),
                    );
                }
            } else {
                report = report.with_note(format!(
                    "{} argument(s) have no placeholder",
                    arguments - placeholders
                ));
            }
        }

        report
            .finish()
            .write((filename, Source::from(source)), &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }
}

/// Convert a byte range to the char range ariadne labels expect
fn char_span(source: &str, span: Span) -> Span {
    let to_char = |byte: usize| source.char_indices().take_while(|(i, _)| *i < byte).count();
    to_char(span.start)..to_char(span.end)
}
