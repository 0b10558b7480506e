//! The commands understood by the shell.
//!
//! A line starting with `:` runs a command, such as `:factor x^2-1`. Any other line is read as a
//! polynomial and printed back in reduced form. Commands taking two arguments separate them with
//! `;`.

use algebra_core::fraction::Fraction;
use algebra_core::monom::Bindings;
use algebra_core::polynom::{DisplayOptionsBuilder, Polynom, RandomOptionsBuilder, Zero};
use levenshtein::levenshtein;
use rand::Rng;
use std::ops::Range;
use tracing::debug;
use crate::error::{Error, InvalidBinding, InvalidDegree, MissingArgument, UnknownCommand};

/// Every command, with its usage.
pub const COMMANDS: [(&str, &str); 9] = [
    ("factor", ":factor <polynomial>"),
    ("zeroes", ":zeroes <polynomial>"),
    ("derive", ":derive <polynomial> [; <letter>]"),
    ("div", ":div <polynomial> ; <polynomial>"),
    ("eval", ":eval <polynomial> ; <letter>=<value>, ..."),
    ("tex", ":tex <polynomial>"),
    ("minify", ":minify <polynomial>"),
    ("random", ":random [<degree>] [factorable]"),
    ("help", ":help"),
];

/// A part of the input line and its position in the line.
#[derive(Debug, Clone)]
struct Arg<'a> {
    text: &'a str,
    span: Range<usize>,
}

impl<'a> Arg<'a> {
    /// Takes `line[range]` without its surrounding whitespace.
    fn new(line: &'a str, range: Range<usize>) -> Self {
        let raw = &line[range.clone()];
        let start = range.start + (raw.len() - raw.trim_start().len());
        let text = raw.trim();
        Self { text, span: start..start + text.len() }
    }

    /// Splits the argument at the first `sep`.
    fn split_once(&self, line: &'a str, sep: char) -> (Self, Option<Self>) {
        match self.text.find(sep) {
            Some(at) => {
                let at = self.span.start + at;
                (Self::new(line, self.span.start..at), Some(Self::new(line, at + 1..self.span.end)))
            },
            None => (self.clone(), None),
        }
    }

    /// Splits the argument at every `sep`.
    fn split(&self, line: &'a str, sep: char) -> Vec<Self> {
        let mut out = Vec::new();
        let mut start = self.span.start;
        for (at, _) in self.text.match_indices(sep) {
            let at = self.span.start + at;
            out.push(Self::new(line, start..at));
            start = at + 1;
        }
        out.push(Self::new(line, start..self.span.end));
        out
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Parses a polynomial from an argument, moving error spans to their place in the line.
fn polynom(arg: &Arg) -> Result<Polynom, Error> {
    Polynom::parse(arg.text).map_err(|mut errs| {
        for err in &mut errs {
            for span in &mut err.spans {
                *span = span.start + arg.span.start..span.end + arg.span.start;
            }
        }
        Error::from(errs)
    })
}

/// Returns the argument, or a [`MissingArgument`] error pointing at the command.
fn require<'a>(arg: Option<Arg<'a>>, command: &Range<usize>, usage: &'static str) -> Result<Arg<'a>, Error> {
    match arg {
        Some(arg) if !arg.is_empty() => Ok(arg),
        _ => Err(algebra_error::Error::new(vec![command.clone()], MissingArgument { usage }).into()),
    }
}

/// Parses a `letter=value` binding.
fn binding(arg: &Arg) -> Result<(char, Fraction), Error> {
    let invalid = || algebra_error::Error::new(vec![arg.span.clone()], InvalidBinding {
        binding: arg.text.to_string(),
    });

    let (letter, value) = arg.text.split_once('=').ok_or_else(invalid)?;
    let mut letters = letter.trim().chars();
    let letter = match (letters.next(), letters.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => letter,
        _ => return Err(invalid().into()),
    };
    let value = value.trim().parse::<Fraction>().map_err(|_| invalid())?;
    Ok((letter, value))
}

fn format_factors(p: &Polynom) -> String {
    let wrapped = DisplayOptionsBuilder::new().wrap_parentheses(true).build();
    p.factors().iter().map(|factor| factor.fmt(wrapped).to_string()).collect()
}

fn format_zeroes(zeroes: &[Zero]) -> String {
    if zeroes.is_empty() {
        return "no rational zero found".to_string();
    }
    zeroes
        .iter()
        .map(|zero| match zero {
            Zero::Everywhere => "every value is a zero".to_string(),
            Zero::Nowhere => "no zero".to_string(),
            Zero::At(value) => format!("x = {}", value),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Runs one line of input and returns the text to print.
pub fn run<R: Rng>(line: &str, rng: &mut R) -> Result<String, Error> {
    if !line.starts_with(':') {
        return Ok(polynom(&Arg::new(line, 0..line.len()))?.display());
    }

    let name_end = line.find(char::is_whitespace).unwrap_or(line.len());
    let name = &line[1..name_end];
    let command = 0..name_end;
    let args = Arg::new(line, name_end..line.len());
    debug!(command = name, args = args.text, "running command");
    let usage = COMMANDS.iter().find(|(n, _)| *n == name).map_or("", |(_, usage)| *usage);

    match name {
        "factor" => {
            let mut p = polynom(&require(Some(args), &command, usage)?)?;
            p.factorize();
            Ok(format_factors(&p))
        },
        "zeroes" => {
            let mut p = polynom(&require(Some(args), &command, usage)?)?;
            Ok(format_zeroes(&p.get_zeroes()))
        },
        "derive" => {
            let (p, letter) = args.split_once(line, ';');
            let p = polynom(&require(Some(p), &command, usage)?)?;
            let letter = letter.and_then(|letter| letter.text.chars().next());
            Ok(p.derivative(letter).display())
        },
        "div" => {
            let (p, d) = args.split_once(line, ';');
            let p = polynom(&require(Some(p), &command, usage)?)?;
            let d = polynom(&require(d, &command, usage)?)?;
            let division = p.euclidian(&d);
            Ok(format!("quotient: {}, remainder: {}", division.quotient, division.remainder))
        },
        "eval" => {
            let (p, bindings) = args.split_once(line, ';');
            let p = polynom(&require(Some(p), &command, usage)?)?;
            let bindings = require(bindings, &command, usage)?
                .split(line, ',')
                .iter()
                .map(binding)
                .collect::<Result<Bindings, _>>()?;
            Ok(p.evaluate(&bindings).classify()?.to_string())
        },
        "tex" => Ok(polynom(&require(Some(args), &command, usage)?)?.tex()),
        "minify" => {
            let mut p = polynom(&require(Some(args), &command, usage)?)?;
            Ok(p.minify().display())
        },
        "random" => {
            let mut options = RandomOptionsBuilder::new();
            for word in args.split(line, ' ').iter().filter(|word| !word.is_empty()) {
                if word.text == "factorable" {
                    options = options.factorable(true);
                } else {
                    let degree = word.text.parse::<u32>().map_err(|_| {
                        algebra_error::Error::new(vec![word.span.clone()], InvalidDegree {
                            text: word.text.to_string(),
                        })
                    })?;
                    options = options.degree(degree);
                }
            }

            let options = options.build();
            let p = Polynom::randomize(rng, &options);
            if options.factorable {
                Ok(format!("{} = {}", p, format_factors(&p)))
            } else {
                Ok(p.display())
            }
        },
        "help" => Ok(COMMANDS.iter().map(|(_, usage)| *usage).collect::<Vec<_>>().join("\n")),
        _ => {
            let similar = COMMANDS
                .iter()
                .map(|(n, _)| *n)
                .filter(|n| levenshtein(n, name) < 2)
                .collect();
            Err(algebra_error::Error::new(vec![command], UnknownCommand {
                name: name.to_string(),
                similar,
            }).into())
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use super::*;

    fn run(line: &str) -> Result<String, Error> {
        super::run(line, &mut StdRng::seed_from_u64(0))
    }

    fn spans(line: &str) -> Vec<Vec<Range<usize>>> {
        match run(line) {
            Err(Error::Input(errs)) => errs.into_iter().map(|err| err.spans).collect(),
            other => panic!("expected an input error, got {:?}", other),
        }
    }

    #[test]
    fn reduce_expression() {
        assert_eq!(run("x^2-1+1").unwrap(), "x^2");
        assert_eq!(run("(x+1)^2").unwrap(), "x^2+2x+1");
    }

    #[test]
    fn factor_and_zeroes() {
        assert_eq!(run(":factor x^2-5x+6").unwrap(), "(x-3)(x-2)");
        assert_eq!(run(":zeroes x^2-4").unwrap(), "x = 2, x = -2");
        assert_eq!(run(":zeroes 3").unwrap(), "no zero");
        assert_eq!(run(":zeroes x^2+1").unwrap(), "no rational zero found");
    }

    #[test]
    fn two_arguments() {
        assert_eq!(run(":div x^2-1 ; x-1").unwrap(), "quotient: x+1, remainder: 0");
        assert_eq!(run(":eval x^2+y ; x=1/2, y=3").unwrap(), "13/4");
        assert_eq!(run(":derive x^2y+y^2 ; y").unwrap(), "x^2+2y");
    }

    #[test]
    fn other_commands() {
        assert_eq!(run(":tex 1/2x^2").unwrap(), "\\frac{ 1 }{ 2 }x^{2}");
        assert_eq!(run(":minify 1/2x^2+x").unwrap(), "x^2+2x");
        assert_eq!(run(":minify 1/4000000007x+1/4000000009").unwrap(), "1/4000000007x+1/4000000009");
        assert_eq!(run(":help").unwrap().lines().count(), COMMANDS.len());
    }

    #[test]
    fn random_degree() {
        let out = run(":random 3").unwrap();
        let p: Polynom = out.parse().unwrap();
        assert_eq!(p.degree(None), 3);
    }

    #[test]
    fn errors_point_into_the_line() {
        assert_eq!(spans(":factr x"), [[0..6]]);
        assert_eq!(spans(":tex x/(x+1)"), [[6..7, 8..11]]);
        assert_eq!(spans(":eval x ; x"), [[10..11]]);
        assert_eq!(spans(":div x+1"), [[0..4]]);
        assert_eq!(spans(":random two"), [[8..11]]);
    }

    #[test]
    fn unbound_variable() {
        assert!(matches!(run(":eval x ; y=2"), Err(Error::Rational(_))));
    }
}
