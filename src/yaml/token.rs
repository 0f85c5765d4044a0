//! Lexical tokens produced by the YAML tokenizer.

/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Explicit mapping key indicator `?`
    MappingKey,
    /// Mapping value separator `:`
    MappingValue,
    /// Block sequence entry `-`
    SequenceEntry,
    /// Plain (unquoted) string scalar
    String,
    /// Single-quoted scalar
    SingleQuote,
    /// Double-quoted scalar
    DoubleQuote,
    Integer,
    Float,
    Bool,
    Null,
    /// Anchor indicator `&` (the name follows as a string token)
    Anchor,
    /// Alias indicator `*` (the name follows as a string token)
    Alias,
    /// Node tag such as `!!str` or `!custom`
    Tag,
    Comment,
    /// Literal block scalar header `|`, with indicators
    Literal,
    /// Folded block scalar header `>`, with indicators
    Folded,
    /// Flow sequence start `[`
    SequenceStart,
    /// Flow sequence end `]`
    SequenceEnd,
    /// Flow mapping start `{`
    MappingStart,
    /// Flow mapping end `}`
    MappingEnd,
    /// Flow collection separator `,`
    CollectEntry,
    /// Document start marker `---`
    DocumentHeader,
    /// Document end marker `...`
    DocumentEnd,
    /// Directive line such as `%YAML 1.2`
    Directive,
    /// Unclassified span (bare whitespace, unterminated quotes)
    Other,
}

impl TokenKind {
    /// True for plain and quoted string scalars.
    pub fn is_string(self) -> bool {
        matches!(
            self,
            TokenKind::String | TokenKind::SingleQuote | TokenKind::DoubleQuote
        )
    }

    /// True for integers, floats and booleans.
    pub fn is_number_like(self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::Float | TokenKind::Bool)
    }
}

/// A classified span of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token kind
    pub kind: TokenKind,
    /// Exact source text covered, including preceding whitespace
    pub origin: &'a str,
    /// Token text without the preceding whitespace
    pub value: &'a str,
    /// Byte offset of `origin` in the input
    pub offset: usize,
}

/// Tokens of one input, in source order.
///
/// Concatenating the `origin` of every token reproduces the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(tokens: Vec<Token<'a>>) -> Self {
        Self { tokens }
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if the input produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token at `index`.
    pub fn get(&self, index: usize) -> Option<&Token<'a>> {
        self.tokens.get(index)
    }

    /// Iterate tokens with access to their neighbors.
    pub fn iter(&self) -> impl Iterator<Item = TokenRef<'_, 'a>> + '_ {
        (0..self.tokens.len()).map(move |index| TokenRef {
            tokens: &self.tokens,
            index,
        })
    }

    /// Token kinds in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Token values (without leading whitespace) in order.
    pub fn values(&self) -> Vec<&'a str> {
        self.tokens.iter().map(|t| t.value).collect()
    }
}

/// A token in its stream, able to look at the tokens around it.
#[derive(Debug, Clone, Copy)]
pub struct TokenRef<'t, 'a> {
    tokens: &'t [Token<'a>],
    index: usize,
}

impl<'t, 'a> TokenRef<'t, 'a> {
    /// The underlying token.
    pub fn token(&self) -> &'t Token<'a> {
        &self.tokens[self.index]
    }

    pub fn kind(&self) -> TokenKind {
        self.token().kind
    }

    pub fn origin(&self) -> &'a str {
        self.token().origin
    }

    pub fn value(&self) -> &'a str {
        self.token().value
    }

    /// Kind of the token immediately before this one.
    pub fn previous_kind(&self) -> Option<TokenKind> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.kind)
    }

    /// Kind of the token immediately after this one.
    pub fn next_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.index + 1).map(|t| t.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(kind: TokenKind, text: &'static str) -> Token<'static> {
        Token {
            kind,
            origin: text,
            value: text.trim_start(),
            offset: 0,
        }
    }

    #[test]
    fn test_neighbors() {
        let tokens = Tokens::new(vec![
            tok(TokenKind::String, "a"),
            tok(TokenKind::MappingValue, ":"),
            tok(TokenKind::Integer, " 1"),
        ]);
        let refs: Vec<_> = tokens.iter().collect();
        assert_eq!(refs[0].previous_kind(), None);
        assert_eq!(refs[0].next_kind(), Some(TokenKind::MappingValue));
        assert_eq!(refs[2].previous_kind(), Some(TokenKind::MappingValue));
        assert_eq!(refs[2].next_kind(), None);
        assert_eq!(refs[2].value(), "1");
    }

    #[test]
    fn test_kind_groups() {
        assert!(TokenKind::DoubleQuote.is_string());
        assert!(!TokenKind::Null.is_string());
        assert!(TokenKind::Bool.is_number_like());
        assert!(!TokenKind::Null.is_number_like());
    }
}
