//! Reads algebraic expressions such as `2x^2 - 3(x + 1)` and reduces them to a postfix (Reverse
//! Polish) token stream.
//!
//! The work is split in two passes:
//!
//! - [`tokenizer`] splits the source into [`Token`](tokenizer::Token)s with [`logos`].
//! - [`reducer`] runs the shunting-yard algorithm over the tokens, inserting the implicit
//!   multiplications of algebraic notation (`2x`, `xy`, `3(x+1)`), folding integer exponents
//!   into single power tokens (`^2`), and rewriting unary minus as a multiplication by `-1`.
//!
//! ```
//! use algebra_parser::reducer::parse;
//!
//! let rpn = parse("2x^2-5").unwrap();
//! assert_eq!(rpn.lexemes(), ["2", "x", "^2", "*", "5", "-"]);
//! ```

pub mod error;
pub mod reducer;
pub mod tokenizer;

pub use reducer::{parse, Rpn, RpnKind, RpnToken};
