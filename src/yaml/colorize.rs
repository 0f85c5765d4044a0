//! ANSI colorizer for YAML and JSON text.
//!
//! Each token is painted according to its kind and, for string scalars, the
//! kinds of its neighbors:
//!
//! - explicit keys, and strings followed by `:` → [`Role::Key`]
//! - strings following an anchor (`&`) or alias (`*`) marker → [`Role::Anchor`]
//! - other strings → [`Role::Value`]
//! - integers, floats, booleans → [`Role::Number`]
//! - anchor and alias markers → [`Role::Anchor`]
//! - comments → [`Role::Comment`]
//! - everything else → [`Role::Default`]
//!
//! Tokens whose origin spans several lines are painted one line at a time, so
//! every output line carries its own escape codes.

use std::borrow::Cow;

use crate::color::{Palette, Role};

use super::lexer::tokenize;
use super::token::{TokenKind, TokenRef};

/// Paints YAML/JSON buffers with a [`Palette`].
#[derive(Debug, Clone, Default)]
pub struct Colorizer {
    palette: Palette,
}

impl Colorizer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Colorize a YAML or JSON byte buffer.
    ///
    /// Invalid UTF-8 is replaced lossily. Empty input gives an empty string.
    pub fn colorize(&self, input: &[u8]) -> String {
        let text = String::from_utf8_lossy(input);
        if let Cow::Owned(_) = text {
            log::debug!("colorize: input is not valid UTF-8, decoded lossily");
        }
        self.colorize_str(&text)
    }

    /// Colorize YAML or JSON text.
    pub fn colorize_str(&self, input: &str) -> String {
        let tokens = tokenize(input);
        if tokens.is_empty() {
            return String::new();
        }
        log::debug!("colorize: {} tokens from {} bytes", tokens.len(), input.len());

        let mut lines: Vec<String> = Vec::new();
        for token in tokens.iter() {
            let role = role_of(&token);
            let mut fragments = token.origin().split('\n');
            if let Some(first) = fragments.next() {
                let painted = self.palette.paint(role, first);
                match lines.last_mut() {
                    Some(line) => line.push_str(&painted),
                    None => lines.push(painted),
                }
            }
            for fragment in fragments {
                lines.push(self.palette.paint(role, fragment));
            }
        }
        lines.join("\n")
    }
}

/// Colorize `input` with the default palette.
///
/// # Example
///
/// ```
/// use utl::color::strip_ansi;
/// use utl::yaml::colorize;
///
/// let out = colorize(b"name: value");
/// assert_eq!(out, "\x1b[94mname\x1b[0m\x1b[37m:\x1b[0m\x1b[32m value\x1b[0m");
/// assert_eq!(strip_ansi(&out), "name: value");
/// ```
pub fn colorize(input: &[u8]) -> String {
    Colorizer::default().colorize(input)
}

/// The role a token is painted with.
///
/// For strings, a following `:` wins over a preceding anchor or alias marker.
pub fn role_of(token: &TokenRef<'_, '_>) -> Role {
    match token.kind() {
        TokenKind::MappingKey => Role::Key,
        kind if kind.is_string() => {
            if token.next_kind() == Some(TokenKind::MappingValue) {
                Role::Key
            } else if matches!(
                token.previous_kind(),
                Some(TokenKind::Anchor | TokenKind::Alias)
            ) {
                Role::Anchor
            } else {
                Role::Value
            }
        }
        kind if kind.is_number_like() => Role::Number,
        TokenKind::Anchor | TokenKind::Alias => Role::Anchor,
        TokenKind::Comment => Role::Comment,
        _ => Role::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{strip_ansi, Color};

    fn blue(s: &str) -> String {
        Color::LightBlue.paint(s)
    }
    fn green(s: &str) -> String {
        Color::Green.paint(s)
    }
    fn yellow(s: &str) -> String {
        Color::Yellow.paint(s)
    }
    fn magenta(s: &str) -> String {
        Color::LightMagenta.paint(s)
    }
    fn white(s: &str) -> String {
        Color::White.paint(s)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(colorize(b""), "");
    }

    #[test]
    fn test_key_and_value() {
        let out = colorize(b"name: value");
        assert_eq!(out, format!("{}{}{}", blue("name"), white(":"), green(" value")));
    }

    #[test]
    fn test_numbers_and_booleans() {
        let out = colorize(b"a: 1\nb: 2.5\nc: true\nd: null");
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], format!("{}{}{}", blue("a"), white(":"), magenta(" 1")));
        assert!(lines[1].ends_with(&magenta(" 2.5")));
        assert!(lines[2].ends_with(&magenta(" true")));
        // null is not a number
        assert!(lines[3].ends_with(&white(" null")));
    }

    #[test]
    fn test_anchor_and_alias() {
        let out = colorize(b"base: &anchor1 value\nref: *anchor1");
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(
            lines[0],
            format!(
                "{}{}{}{}{}",
                blue("base"),
                white(":"),
                yellow(" &"),
                yellow("anchor1"),
                green(" value")
            )
        );
        // The newline starts the next line with an empty fragment
        assert_eq!(
            lines[1],
            format!("{}{}{}{}", blue("ref"), white(":"), yellow(" *"), yellow("anchor1"))
        );
    }

    #[test]
    fn test_separator_check_wins_over_anchor() {
        // An alias used as a key: followed by `:` and preceded by `*`
        let out = colorize(b"*ref : x");
        assert!(out.contains(&blue("ref")));
    }

    #[test]
    fn test_explicit_mapping_key() {
        let out = colorize(b"? key\n: value");
        assert!(out.starts_with(&blue("?")));
    }

    #[test]
    fn test_comment_color() {
        let out = colorize(b"# top\na: b # side");
        assert!(out.starts_with(&white("# top")));
        assert!(out.ends_with(&white(" # side")));
    }

    #[test]
    fn test_json_keys() {
        let out = colorize(br#"{"id": 7, "tags": ["x"]}"#);
        assert!(out.contains(&blue("\"id\"")));
        assert!(out.contains(&magenta(" 7")));
        assert!(out.contains(&green("\"x\"")));
    }

    #[test]
    fn test_block_scalar_lines() {
        let yaml = "text: |\n  one\n  two\n  three";
        let out = colorize(yaml.as_bytes());
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], green("  one"));
        assert_eq!(lines[2], green("  two"));
        assert_eq!(lines[3], green("  three"));
        assert_eq!(strip_ansi(&out), yaml);
    }

    #[test]
    fn test_multi_line_quoted_scalar() {
        let out = colorize(b"a: \"one\n  two\"");
        assert_eq!(
            out,
            format!(
                "{}{}{}\n{}",
                blue("a"),
                white(":"),
                green(" \"one"),
                green("  two\"")
            )
        );
    }

    #[test]
    fn test_multi_line_other_span() {
        // An unterminated quote runs to the end of input as one span
        let out = colorize(b"a: 'one\n  two\n");
        assert_eq!(
            out,
            format!(
                "{}{}{}\n{}\n",
                blue("a"),
                white(":"),
                white(" 'one"),
                white("  two")
            )
        );
    }

    #[test]
    fn test_line_count_preserved() {
        let yaml = "a:\n  - 1\n  - two\n\n# done\n";
        let out = colorize(yaml.as_bytes());
        assert_eq!(out.matches('\n').count(), yaml.matches('\n').count());
        assert_eq!(strip_ansi(&out), yaml);
    }

    #[test]
    fn test_monochrome_is_identity() {
        let yaml = "k: &a [1, 'two', {x: *a}] # c\n";
        let out = Colorizer::new(Palette::monochrome()).colorize(yaml.as_bytes());
        assert_eq!(out, yaml);
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let out = colorize(b"a: \xff");
        assert_eq!(strip_ansi(&out), "a: \u{fffd}");
    }
}
