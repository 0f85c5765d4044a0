//! # utl
//!
//! Terminal helpers for YAML and JSON documents.
//!
//! The centerpiece is a lossless colorizer: it tokenizes YAML (and JSON, as a
//! YAML subset) and repaints every token with ANSI foreground colors, leaving
//! the text and line breaks exactly as they were. Around it sit the pieces
//! needed to get a document onto the screen: loading and strict checking,
//! serialization with a chosen indent, saving, and a decoded [`Value`] type.
//!
//! ## Quick Start
//!
//! ```
//! use utl::color::{strip_ansi, Palette};
//! use utl::yaml::Colorizer;
//!
//! let source = b"service: &svc web # primary\nport: 8080\nalias: *svc\n";
//! let colored = Colorizer::new(Palette::default()).colorize(source);
//!
//! // Same text, same lines; only escape codes were added
//! assert_eq!(strip_ansi(&colored).as_bytes(), source);
//! assert_eq!(colored.lines().count(), 3);
//! ```
//!
//! ## Modules
//!
//! - [`yaml`]: tokenizer and colorizer
//! - [`color`]: color aliases, roles and palettes
//! - [`document`]: load, check, encode, save and print documents
//! - [`value`]: decoded documents with search and merge helpers

pub mod color;
pub mod document;
pub mod value;
pub mod yaml;

pub use color::{Color, Palette, Role};
pub use document::DocumentError;
pub use value::Value;
pub use yaml::{colorize, Colorizer};
