//! Placeholder template validation
//!
//! A template is literal text with `{}` placeholders. It is well-formed when
//! its braces balance and it has exactly one `{` per argument. The scan is a
//! `const fn`, so the [`template!`](crate::template!) macro rejects a bad
//! literal while the crate is being compiled:
//!
//! ```rust
//! let greeting = tagbox::template!("{} and {}", name, other);
//! assert_eq!(greeting.placeholders(), 2);
//! ```
//!
//! ```compile_fail
//! // unclosed brace: fails the build
//! let broken = tagbox::template!("{ {}", name);
//! ```
//!
//! ```compile_fail
//! // two placeholders, three arguments
//! let short = tagbox::template!("{} and {}", a, b, c);
//! ```
//!
//! Text that is only known at runtime goes through [`Template::new`], which
//! runs the same scan and returns the failure instead.

pub mod lexer;

use crate::error::{BraceFault, Span, TemplateError};

/// Byte at `index`, bounds-checked
pub const fn byte_at(text: &str, index: usize) -> Result<u8, TemplateError> {
    let bytes = text.as_bytes();
    if index < bytes.len() {
        Ok(bytes[index])
    } else {
        Err(TemplateError::IndexOutOfRange {
            index,
            len: bytes.len(),
        })
    }
}

/// Check brace balance and return the number of `{` placeholders
pub const fn balance(text: &str) -> Result<usize, TemplateError> {
    let mut depth = 0usize;
    let mut opens = 0usize;
    // Start of the outermost group still open
    let mut outermost = 0usize;
    let mut i = 0;

    while i < text.len() {
        let byte = match byte_at(text, i) {
            Ok(byte) => byte,
            Err(e) => return Err(e),
        };
        if byte == b'{' {
            if depth == 0 {
                outermost = i;
            }
            depth += 1;
            opens += 1;
        } else if byte == b'}' {
            if depth == 0 {
                return Err(TemplateError::UnbalancedBraces {
                    position: i,
                    fault: BraceFault::ExtraClosing,
                });
            }
            depth -= 1;
        }
        i += 1;
    }

    if depth != 0 {
        return Err(TemplateError::UnbalancedBraces {
            position: outermost,
            fault: BraceFault::Unclosed,
        });
    }
    Ok(opens)
}

/// Validate `text` against `arguments` substitution arguments
///
/// Returns the placeholder count, which equals `arguments` on success.
pub const fn validate(text: &str, arguments: usize) -> Result<usize, TemplateError> {
    let placeholders = match balance(text) {
        Ok(n) => n,
        Err(e) => return Err(e),
    };
    if placeholders != arguments {
        return Err(TemplateError::ArityMismatch {
            placeholders,
            arguments,
        });
    }
    Ok(placeholders)
}

/// A template whose brace structure matches its argument count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template<'a> {
    text: &'a str,
    arity: usize,
}

impl<'a> Template<'a> {
    /// Validate during constant evaluation, panicking on a malformed template
    ///
    /// Intended for `const` items (see [`template!`](crate::template!)), where
    /// the panic becomes a compile error.
    pub const fn checked(text: &'a str, arity: usize) -> Self {
        match validate(text, arity) {
            Ok(_) => Self { text, arity },
            Err(e) => panic!("{}", e.message()),
        }
    }

    /// Validate text that is only known at runtime
    pub fn new(text: &'a str, arity: usize) -> Result<Self, TemplateError> {
        match validate(text, arity) {
            Ok(_) => {
                tracing::debug!(template = text, arity, "template validated");
                Ok(Self { text, arity })
            }
            Err(e) => {
                tracing::debug!(template = text, arity, error = %e, "template rejected");
                Err(e)
            }
        }
    }

    pub const fn text(&self) -> &'a str {
        self.text
    }

    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Number of `{` placeholders; always equal to the arity
    pub const fn placeholders(&self) -> usize {
        self.arity
    }

    pub const fn len(&self) -> usize {
        self.text.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte at `index`
    pub const fn get(&self, index: usize) -> Result<u8, TemplateError> {
        byte_at(self.text, index)
    }

    /// Byte spans of the placeholders' opening braces
    pub fn placeholder_spans(&self) -> Vec<Span> {
        lexer::brace_spans(self.text).collect()
    }
}

/// Build a [`Template`] from a literal, validated at compile time
///
/// The arity is the number of arguments listed after the literal. They are
/// counted, never evaluated. Where no argument list exists, `; N` declares
/// the count as a constant expression instead.
///
/// ```rust
/// let pair = tagbox::template!("{} and {}", left, right);
/// let banner = tagbox::template!("=== ready ===");
/// let row = tagbox::template!("{} | {} | {}"; 3);
/// assert_eq!((pair.arity(), banner.arity(), row.arity()), (2, 0, 3));
/// ```
#[macro_export]
macro_rules! template {
    ($text:literal $(,)?) => {
        $crate::template!($text; 0)
    };
    ($text:literal; $arity:expr $(,)?) => {{
        const TEMPLATE: $crate::Template<'static> = $crate::Template::checked($text, $arity);
        TEMPLATE
    }};
    ($text:literal, $($arg:expr),+ $(,)?) => {
        $crate::template!($text; 0usize $(+ { let _ = stringify!($arg); 1usize })+)
    };
}
