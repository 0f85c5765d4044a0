//! Lossless YAML/JSON tokenizer.
//!
//! The tokenizer does not build a document tree. It walks the input once and
//! cuts it into classified spans, attaching the whitespace before each token to
//! that token's `origin`, so the origins of all tokens concatenate back to the
//! input byte for byte. This is what lets the colorizer repaint a document
//! without reformatting it.
//!
//! Anything the scanner cannot classify becomes a string or [`TokenKind::Other`]
//! token; tokenizing never fails.

use super::token::{Token, TokenKind, Tokens};

/// Tokenize YAML (or JSON) text.
///
/// # Example
///
/// ```
/// use utl::yaml::{tokenize, TokenKind};
///
/// let tokens = tokenize("name: value");
/// assert_eq!(
///     tokens.kinds(),
///     vec![TokenKind::String, TokenKind::MappingValue, TokenKind::String]
/// );
/// assert_eq!(tokens.values(), vec!["name", ":", "value"]);
/// ```
pub fn tokenize(input: &str) -> Tokens<'_> {
    Lexer::new(input).run()
}

#[inline]
fn is_blank(b: Option<u8>) -> bool {
    matches!(b, None | Some(b' ' | b'\t' | b'\r' | b'\n'))
}

#[inline]
fn is_flow_indicator(b: u8) -> bool {
    matches!(b, b',' | b'[' | b']' | b'{' | b'}')
}

/// Scanner state.
struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    /// End of the last emitted token's origin
    last_end: usize,
    /// Nesting depth of `[` / `{` collections
    flow_depth: usize,
    /// First byte after a leading BOM; column 0 of the first line
    text_start: usize,
    tokens: Vec<Token<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            last_end: 0,
            flow_depth: 0,
            text_start: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Tokens<'a> {
        if self.input.starts_with('\u{feff}') {
            self.pos = '\u{feff}'.len_utf8();
            self.text_start = self.pos;
        }
        loop {
            self.skip_whitespace();
            if self.pos >= self.bytes.len() {
                break;
            }
            self.scan_token();
        }
        self.finish()
    }

    /// Hand trailing whitespace to the last token.
    fn finish(mut self) -> Tokens<'a> {
        let input = self.input;
        if self.last_end < input.len() {
            match self.tokens.last_mut() {
                Some(last) => last.origin = &input[last.offset..],
                None => self.push(TokenKind::Other, input.len()),
            }
        }
        Tokens::new(self.tokens)
    }

    #[inline]
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    /// Emit a token ending at the current position.
    ///
    /// The origin starts where the previous token ended; `value_start` marks
    /// where the token text proper begins.
    fn push(&mut self, kind: TokenKind, value_start: usize) {
        self.tokens.push(Token {
            kind,
            origin: &self.input[self.last_end..self.pos],
            value: &self.input[value_start..self.pos],
            offset: self.last_end,
        });
        self.last_end = self.pos;
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.bytes.get(self.pos) {
            self.pos += 1;
        }
    }

    fn at_column_zero(&self) -> bool {
        self.pos == self.text_start || self.bytes[self.pos - 1] == b'\n'
    }

    /// `---` or `...` followed by a blank.
    fn at_document_marker(&self, marker: &[u8]) -> bool {
        self.bytes[self.pos..].starts_with(marker) && is_blank(self.peek_at(marker.len()))
    }

    /// Whether the `:` at `at` separates a key from its value.
    fn is_value_indicator(&self, at: usize) -> bool {
        let next = self.bytes.get(at + 1).copied();
        if is_blank(next) {
            return true;
        }
        self.flow_depth > 0 && next.is_some_and(is_flow_indicator)
    }

    /// JSON allows `"key":value` with no space after the colon.
    fn follows_quoted_scalar(&self) -> bool {
        matches!(
            self.tokens.last().map(|t| t.kind),
            Some(TokenKind::DoubleQuote | TokenKind::SingleQuote)
        )
    }

    fn scan_token(&mut self) {
        let b = self.bytes[self.pos];
        let next = self.peek_at(1);
        match b {
            b'#' => self.scan_to_eol(TokenKind::Comment),
            b'-' if self.at_column_zero() && self.at_document_marker(b"---") => {
                self.scan_fixed(TokenKind::DocumentHeader, 3)
            }
            b'.' if self.at_column_zero() && self.at_document_marker(b"...") => {
                self.scan_fixed(TokenKind::DocumentEnd, 3)
            }
            b'%' if self.at_column_zero() => self.scan_to_eol(TokenKind::Directive),
            b'-' if self.flow_depth == 0 && is_blank(next) => {
                self.scan_fixed(TokenKind::SequenceEntry, 1)
            }
            b'?' if is_blank(next) => self.scan_fixed(TokenKind::MappingKey, 1),
            b':' if self.is_value_indicator(self.pos) || self.follows_quoted_scalar() => {
                self.scan_fixed(TokenKind::MappingValue, 1)
            }
            b'[' => {
                self.flow_depth += 1;
                self.scan_fixed(TokenKind::SequenceStart, 1)
            }
            b'{' => {
                self.flow_depth += 1;
                self.scan_fixed(TokenKind::MappingStart, 1)
            }
            b']' => {
                self.flow_depth = self.flow_depth.saturating_sub(1);
                self.scan_fixed(TokenKind::SequenceEnd, 1)
            }
            b'}' => {
                self.flow_depth = self.flow_depth.saturating_sub(1);
                self.scan_fixed(TokenKind::MappingEnd, 1)
            }
            b',' if self.flow_depth > 0 => self.scan_fixed(TokenKind::CollectEntry, 1),
            b'&' => self.scan_node_property(TokenKind::Anchor),
            b'*' => self.scan_node_property(TokenKind::Alias),
            b'!' => self.scan_tag(),
            b'|' | b'>' if self.flow_depth == 0 => match self.block_header_len() {
                Some(len) => self.scan_block_scalar(len),
                None => self.scan_plain(),
            },
            b'"' => self.scan_double_quoted(),
            b'\'' => self.scan_single_quoted(),
            _ => self.scan_plain(),
        }
    }

    fn scan_fixed(&mut self, kind: TokenKind, len: usize) {
        let start = self.pos;
        self.pos += len;
        self.push(kind, start);
    }

    fn scan_to_eol(&mut self, kind: TokenKind) {
        let start = self.pos;
        self.pos = self.find_newline(start).unwrap_or(self.bytes.len());
        self.push(kind, start);
    }

    fn find_newline(&self, from: usize) -> Option<usize> {
        self.bytes[from..]
            .iter()
            .position(|&b| b == b'\n')
            .map(|p| from + p)
    }

    /// `&name` / `*name`: the indicator, then the name as a string token.
    fn scan_node_property(&mut self, kind: TokenKind) {
        self.scan_fixed(kind, 1);
        let name_start = self.pos;
        while let Some(b) = self.bytes.get(self.pos).copied() {
            if is_blank(Some(b)) || (self.flow_depth > 0 && is_flow_indicator(b)) {
                break;
            }
            self.pos += 1;
        }
        if self.pos > name_start {
            self.push(TokenKind::String, name_start);
        }
    }

    fn scan_tag(&mut self) {
        let start = self.pos;
        self.pos += 1;
        while let Some(b) = self.bytes.get(self.pos).copied() {
            if is_blank(Some(b)) || (self.flow_depth > 0 && is_flow_indicator(b)) {
                break;
            }
            self.pos += 1;
        }
        self.push(TokenKind::Tag, start);
    }

    fn scan_double_quoted(&mut self) {
        let start = self.pos;
        let mut i = start + 1;
        while i < self.bytes.len() {
            match self.bytes[i] {
                b'\\' => i += 2,
                b'"' => {
                    self.pos = i + 1;
                    self.push(TokenKind::DoubleQuote, start);
                    return;
                }
                _ => i += 1,
            }
        }
        // Unterminated: the rest of the input is one unclassified span
        self.pos = self.bytes.len();
        self.push(TokenKind::Other, start);
    }

    fn scan_single_quoted(&mut self) {
        let start = self.pos;
        let mut i = start + 1;
        while i < self.bytes.len() {
            if self.bytes[i] == b'\'' {
                if self.bytes.get(i + 1) == Some(&b'\'') {
                    i += 2;
                    continue;
                }
                self.pos = i + 1;
                self.push(TokenKind::SingleQuote, start);
                return;
            }
            i += 1;
        }
        self.pos = self.bytes.len();
        self.push(TokenKind::Other, start);
    }

    fn scan_plain(&mut self) {
        let start = self.pos;
        let mut i = start;
        let mut end = start;
        while i < self.bytes.len() {
            let b = self.bytes[i];
            match b {
                b'\n' | b'\r' => break,
                b':' if self.is_value_indicator(i) => break,
                b'#' if i > start && matches!(self.bytes[i - 1], b' ' | b'\t') => break,
                b if self.flow_depth > 0 && is_flow_indicator(b) => break,
                _ => {}
            }
            i += 1;
            if !matches!(b, b' ' | b'\t') {
                end = i;
            }
        }

        if end == start {
            // Nothing scannable; consume one character so the scan advances
            let len = self.input[start..].chars().next().map_or(1, char::len_utf8);
            self.pos = start + len;
            self.push(TokenKind::Other, start);
            return;
        }

        // Trailing blanks stay with the next token
        self.pos = end;
        let kind = classify_plain(&self.input[start..end]);
        self.push(kind, start);
    }

    /// Length of a `|` / `>` header with its chomping and indentation
    /// indicators, if the header is followed by a blank.
    fn block_header_len(&self) -> Option<usize> {
        let mut len = 1;
        while len < 3 {
            match self.peek_at(len) {
                Some(b'-' | b'+' | b'1'..=b'9') => len += 1,
                _ => break,
            }
        }
        is_blank(self.peek_at(len)).then_some(len)
    }

    /// Indentation a block scalar body must exceed.
    ///
    /// This is the column of the node owning the scalar: the key on the header
    /// line, or the innermost `-` entry when the header follows dashes
    /// directly. `-1` for a document-level scalar.
    fn block_base_indent(&self, at: usize) -> isize {
        let line_start = self.bytes[..at]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(self.text_start, |p| p + 1);
        let line = &self.bytes[line_start..at];
        let mut col = line.iter().take_while(|&&b| b == b' ').count();
        if line[col..].starts_with(b"---") {
            return -1;
        }
        let mut entry = None;
        while line.get(col) == Some(&b'-') && matches!(line.get(col + 1), Some(b' ' | b'\t')) {
            entry = Some(col);
            col += 1;
            while matches!(line.get(col), Some(b' ' | b'\t')) {
                col += 1;
            }
        }
        if col < line.len() {
            col as isize
        } else {
            entry.map_or(-1, |c| c as isize)
        }
    }

    fn scan_block_scalar(&mut self, header_len: usize) {
        let start = self.pos;
        let base_indent = self.block_base_indent(start);
        let kind = if self.bytes[start] == b'|' {
            TokenKind::Literal
        } else {
            TokenKind::Folded
        };
        self.pos += header_len;
        self.push(kind, start);

        // Optional comment after the header
        let mut i = self.pos;
        while matches!(self.bytes.get(i), Some(b' ' | b'\t')) {
            i += 1;
        }
        match self.bytes.get(i) {
            Some(b'#') => {
                self.pos = i;
                self.scan_to_eol(TokenKind::Comment);
            }
            Some(b'\r' | b'\n') | None => {}
            Some(_) => return,
        }

        let Some(mut line_end) = self.find_newline(self.pos) else {
            return;
        };
        let mut body_end = None;
        loop {
            let line_start = line_end + 1;
            let next_end = self.find_newline(line_start).unwrap_or(self.bytes.len());
            let line = &self.bytes[line_start..next_end];
            let indent = line.iter().take_while(|&&b| b == b' ').count();
            let blank = line[indent..]
                .iter()
                .all(|&b| matches!(b, b' ' | b'\t' | b'\r'));
            if !blank {
                let marker = indent == 0
                    && (line.starts_with(b"---") || line.starts_with(b"..."))
                    && is_blank(line.get(3).copied());
                if marker || indent as isize <= base_indent {
                    break;
                }
                body_end = Some(next_end);
            }
            if next_end >= self.bytes.len() {
                break;
            }
            line_end = next_end;
        }

        if let Some(end) = body_end {
            let value_start = self.bytes[self.pos..end]
                .iter()
                .position(|b| !matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
                .map_or(self.pos, |p| self.pos + p);
            self.pos = end;
            self.push(TokenKind::String, value_start);
        }
    }
}

/// Resolve a plain scalar to its YAML 1.2 core-schema kind.
fn classify_plain(text: &str) -> TokenKind {
    match text {
        "true" | "True" | "TRUE" | "false" | "False" | "FALSE" => TokenKind::Bool,
        "null" | "Null" | "NULL" | "~" => TokenKind::Null,
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" | "-.inf" | "-.Inf" | "-.INF"
        | ".nan" | ".NaN" | ".NAN" => TokenKind::Float,
        _ if is_integer(text) => TokenKind::Integer,
        _ if is_float(text) => TokenKind::Float,
        _ => TokenKind::String,
    }
}

fn strip_sign(text: &str) -> &str {
    text.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(text)
}

/// `_` may only separate digits.
fn has_edge_underscore(digits: &str) -> bool {
    digits.starts_with('_') || digits.ends_with('_')
}

fn is_integer(text: &str) -> bool {
    let unsigned = strip_sign(text);
    let (radix, digits) = if let Some(rest) = text.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = text.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = text.strip_prefix("0b") {
        (2, rest)
    } else {
        (10, unsigned)
    };
    !digits.is_empty()
        && !has_edge_underscore(digits)
        && digits.chars().all(|c| c == '_' || c.is_digit(radix))
}

fn is_float(text: &str) -> bool {
    let unsigned = strip_sign(text);
    if has_edge_underscore(unsigned) || !unsigned.bytes().any(|b| b.is_ascii_digit()) {
        return false;
    }
    if !unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-' | b'_'))
    {
        return false;
    }
    text.replace('_', "").parse::<f64>().is_ok()
}
