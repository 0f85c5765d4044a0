//! YAML/JSON tokenizing and terminal colorizing.
//!
//! JSON is handled as the YAML subset it is; the same tokenizer and colorizer
//! serve both.
//!
//! # Example
//!
//! ```
//! use utl::color::{strip_ansi, Palette};
//! use utl::yaml::Colorizer;
//!
//! let yaml = b"# settings\nport: 8080\nhosts: [a, b]\n";
//! let colored = Colorizer::new(Palette::default()).colorize(yaml);
//!
//! // Only escape codes are added
//! assert_eq!(strip_ansi(&colored).as_bytes(), yaml);
//! ```
//!
//! # Architecture
//!
//! 1. **Tokenizer** ([`tokenize`]): cuts the text into classified tokens whose
//!    origins partition the input.
//! 2. **Colorizer** ([`Colorizer`]): picks a [`Role`](crate::color::Role) per
//!    token from its kind and neighbors, paints it through the palette and
//!    reassembles the painted fragments into lines.

mod colorize;
mod lexer;
mod token;

pub use colorize::{colorize, role_of, Colorizer};
pub use lexer::tokenize;
pub use token::{Token, TokenKind, TokenRef, Tokens};
