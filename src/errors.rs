//! Chibagen error handling - unified encapsulated API
//!
//! Every failure mode of the generator is represented by [`ChibaGenError`]:
//! what went wrong ([`ErrorKind`]), where it happened ([`SourceInfo`]), and
//! how to help ([`DiagnosticInfo`]). Errors are rendered through miette so
//! that interactive input mistakes get a labeled span over the offending
//! text rather than a bare message.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use thiserror::Error;

use crate::generator::{MAX_FIELD_COUNT, MIN_FIELD_COUNT};

// ============================================================================
// SOURCE CONTEXT - Error reporting infrastructure
// ============================================================================

/// Source context for error reporting. For this tool the "source" is
/// usually the single line the user typed at the count prompt, or a short
/// synthetic description when no user text is involved.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Create a source context from the raw count input (stdin line or
    /// `--count` argument). Preferred for all input-validation errors.
    pub fn from_input(content: impl Into<String>) -> Self {
        Self {
            name: "field count".to_string(),
            content: content.into(),
        }
    }

    /// Create a fallback when no user-supplied text exists (e.g. I/O
    /// failures on the output path).
    pub fn fallback(context: &str) -> Self {
        Self {
            name: "fallback".to_string(),
            content: format!("// {}", context),
        }
    }

    /// Convert to NamedSource for use with miette error reporting.
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }

    /// Span covering the whole context content.
    pub fn full_span(&self) -> SourceSpan {
        SourceSpan::from(0..self.content.len())
    }
}

impl Default for SourceContext {
    fn default() -> Self {
        Self::fallback("no input context")
    }
}

/// The single error type - no wrapper hierarchy, just essential data.
#[derive(Debug)]
pub struct ChibaGenError {
    /// What went wrong (type-specific data)
    pub kind: ErrorKind,
    /// Where it happened (input text and span, when there is one)
    pub source_info: SourceInfo,
    /// How to help (auto-populated based on the kind)
    pub diagnostic_info: DiagnosticInfo,
}

/// All generator failure modes.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The requested maximum field count falls outside the supported range.
    #[error(
        "field count out of range: {value} (expected {}..={})",
        MIN_FIELD_COUNT,
        MAX_FIELD_COUNT
    )]
    CountOutOfRange { value: i64 },

    /// The interactive input could not be parsed as an integer at all.
    #[error("invalid field count '{input}': not an integer")]
    InvalidCount { input: String },

    /// Reading the count from stdin failed.
    #[error("failed to read field count from stdin")]
    Prompt {
        #[source]
        source: std::io::Error,
    },

    /// The assembled header could not be written to disk.
    #[error("failed to write header to '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Context-specific source information.
#[derive(Debug)]
pub struct SourceInfo {
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
}

/// Diagnostic enhancement data.
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

impl ErrorKind {
    /// Get the error category for test assertions and exit reporting.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CountOutOfRange { .. } | Self::InvalidCount { .. } => ErrorCategory::Input,
            Self::Prompt { .. } | Self::Io { .. } => ErrorCategory::Io,
        }
    }

    /// Get error code suffix for diagnostic codes.
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::CountOutOfRange { .. } => "count_out_of_range",
            Self::InvalidCount { .. } => "invalid_count",
            Self::Prompt { .. } => "prompt",
            Self::Io { .. } => "io",
        }
    }

    fn default_help(&self) -> Option<String> {
        match self {
            Self::CountOutOfRange { .. } | Self::InvalidCount { .. } => Some(format!(
                "enter a whole number between {} and {}",
                MIN_FIELD_COUNT, MAX_FIELD_COUNT
            )),
            Self::Io { path, .. } => path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| {
                    format!(
                        "check that the directory '{}' exists and is writable",
                        p.display()
                    )
                }),
            Self::Prompt { .. } => None,
        }
    }

    fn primary_label(&self) -> &'static str {
        match self {
            Self::CountOutOfRange { .. } => "out of range",
            Self::InvalidCount { .. } => "not an integer",
            Self::Prompt { .. } => "while prompting",
            Self::Io { .. } => "while writing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Io,
}

impl std::error::Error for ChibaGenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl fmt::Display for ChibaGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl Diagnostic for ChibaGenError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = vec![LabeledSpan::new_with_span(
            Some(self.kind.primary_label().to_string()),
            self.source_info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source_info.source)
    }
}

// ============================================================================
// ERROR CONSTRUCTION - context-aware creation
// ============================================================================

/// Context-aware error creation: the holder of the input text knows how to
/// attach it to any kind of error.
pub trait ErrorReporting {
    /// Create an error with context-appropriate source attachment.
    fn report(&self, kind: ErrorKind, span: SourceSpan) -> ChibaGenError;

    fn count_out_of_range(&self, value: i64, span: SourceSpan) -> ChibaGenError {
        self.report(ErrorKind::CountOutOfRange { value }, span)
    }

    fn invalid_count(&self, input: &str, span: SourceSpan) -> ChibaGenError {
        self.report(
            ErrorKind::InvalidCount {
                input: input.into(),
            },
            span,
        )
    }
}

/// Error creation context for count validation: wraps the text the count
/// was parsed from so diagnostics can point into it.
pub struct InputContext {
    pub source: SourceContext,
}

impl InputContext {
    pub fn new(source: SourceContext) -> Self {
        Self { source }
    }
}

impl ErrorReporting for InputContext {
    fn report(&self, kind: ErrorKind, span: SourceSpan) -> ChibaGenError {
        let error_code = format!("chibagen::input::{}", kind.code_suffix());
        let help = kind.default_help();

        ChibaGenError {
            kind,
            source_info: SourceInfo {
                source: self.source.to_named_source(),
                primary_span: span,
            },
            diagnostic_info: DiagnosticInfo { help, error_code },
        }
    }
}

/// Standalone constructor for failures with no user-typed source: output
/// writes and prompt reads. Keeps `ChibaGenError` structs out of the rest
/// of the codebase.
pub fn io_error(kind: ErrorKind) -> ChibaGenError {
    debug_assert!(matches!(
        kind,
        ErrorKind::Io { .. } | ErrorKind::Prompt { .. }
    ));
    let error_code = format!("chibagen::io::{}", kind.code_suffix());
    let help = kind.default_help();
    let source = SourceContext::fallback("i/o operation");

    ChibaGenError {
        kind,
        source_info: SourceInfo {
            source: source.to_named_source(),
            primary_span: unspanned(),
        },
        diagnostic_info: DiagnosticInfo { help, error_code },
    }
}

/// Placeholder span for errors not tied to any input location. Makes the
/// intent of an empty span explicit and searchable.
pub fn unspanned() -> SourceSpan {
    SourceSpan::from(0..0)
}

/// Prints a ChibaGenError with full miette diagnostics.
///
/// Use this for user-facing error display in the CLI.
pub fn print_error(error: ChibaGenError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
