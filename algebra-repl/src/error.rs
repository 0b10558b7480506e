use algebra_attrs::ErrorKind;
use algebra_core::fraction::RationalError;
use algebra_error::{ErrorKind, EXPR};
use ariadne::{Fmt, Source};

/// Utility enum to package errors that can occur while running a line of input.
#[derive(Debug)]
pub enum Error {
    /// Errors in the input line, each pointing at the part of the line it came from.
    Input(Vec<algebra_error::Error>),

    /// A computation that produced an infinite or invalid number.
    Rational(RationalError),
}

impl Error {
    /// Report the errors in this [`Error`] to stderr.
    ///
    /// The `ariadne` crate's [`Report`](ariadne::Report) type actually does not have a `Display`
    /// implementation, so we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Input(errs) => errs.iter().for_each(|err| {
                let report = err.build_report("input");
                if let Err(io) = report.eprint(("input", Source::from(input))) {
                    eprintln!("{}", io);
                }
            }),
            Self::Rational(err) => eprintln!("Error: {}", err),
        }
    }
}

impl From<Vec<algebra_error::Error>> for Error {
    fn from(errs: Vec<algebra_error::Error>) -> Self {
        Self::Input(errs)
    }
}

impl From<algebra_error::Error> for Error {
    fn from(err: algebra_error::Error) -> Self {
        Self::Input(vec![err])
    }
}

impl From<RationalError> for Error {
    fn from(err: RationalError) -> Self {
        Self::Rational(err)
    }
}

/// The command does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `{}`", name),
    labels = ["this command"],
    help = if similar.is_empty() {
        format!("type {} to list the commands", ":help".fg(EXPR))
    } else {
        format!(
            "did you mean {}?",
            similar.iter()
                .map(|name| format!(":{}", name).fg(EXPR).to_string())
                .collect::<Vec<_>>()
                .join(" or "),
        )
    },
)]
pub struct UnknownCommand {
    /// The name that was typed.
    pub name: String,

    /// Known commands with a similar name.
    pub similar: Vec<&'static str>,
}

/// The command needs an argument that was not given.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing argument",
    labels = ["this command needs more arguments"],
    help = format!("usage: {}", usage.fg(EXPR)),
)]
pub struct MissingArgument {
    pub usage: &'static str,
}

/// A variable binding of `:eval` is not of the form `letter=value`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid binding `{}`", binding),
    labels = ["expected a letter, `=` and a number"],
    help = format!("for example: {}", "x=1/2".fg(EXPR)),
)]
pub struct InvalidBinding {
    pub binding: String,
}

/// A command argument that should be a non-negative integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid degree", text),
    labels = ["expected a non-negative integer"],
)]
pub struct InvalidDegree {
    pub text: String,
}
