//! Diagnostic rendering for parse errors
//!
//! Turns [`ParseError`]s into codespan diagnostics with source context and
//! writes them to a terminal stream.

use codespan_reporting::diagnostic::{Diagnostic as CsDiagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

use crate::parser::{ParseError, ParseErrorKind};

/// A parse diagnostic with source context.
pub struct Diagnostic {
    inner: CsDiagnostic<usize>,
}

impl Diagnostic {
    /// Build a diagnostic from a parse error.
    pub fn from_parse_error(error: &ParseError, file_id: usize) -> Self {
        let label_message = match &error.kind {
            ParseErrorKind::UnexpectedToken { .. } => "unexpected token here",
            ParseErrorKind::UnexpectedEof { .. } => "input ends here",
            ParseErrorKind::InvalidSyntax { .. } => "invalid syntax",
            ParseErrorKind::UnclosedDelimiter { .. } => "opened here, never closed",
            ParseErrorKind::MissingBindingValue => "binding has no value",
            ParseErrorKind::Lex { .. } => "could not tokenize",
        };

        let label = Label::primary(file_id, error.span.start..error.span.end)
            .with_message(label_message);
        let mut inner = CsDiagnostic::error()
            .with_message(error.message.clone())
            .with_labels(vec![label]);

        if let Some(suggestion) = &error.suggestion {
            inner.notes.push(format!("help: {}", suggestion));
        }

        Self { inner }
    }
}

/// Render `errors` against `source` to stderr.
pub fn emit(file_name: &str, source: &str, errors: &[ParseError]) {
    let mut files = SimpleFiles::new();
    let file_id = files.add(file_name, source);

    let writer = StandardStream::stderr(ColorChoice::Auto);
    let config = term::Config::default();

    for error in errors {
        let diagnostic = Diagnostic::from_parse_error(error, file_id);
        // Rendering failures only lose output, never abort parsing
        let _ = term::emit(&mut writer.lock(), &config, &files, &diagnostic.inner);
    }
}
