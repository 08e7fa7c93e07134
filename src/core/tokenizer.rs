//! Tokenizer for the translation string mini-language.
//!
//! A translation string is literal text interleaved with two kinds of clauses:
//!
//! - `{name}`: a substitution. `{count}` is the reserved integer substitution,
//!   every other name is a string substitution. `{}` is an anonymous
//!   substitution.
//! - `{{s}}` / `{{y|ies}}`: a plural clause, selected at runtime by `count`.
//!
//! The scanner is a small state machine over bytes. All delimiters are ASCII,
//! so every boundary it produces is also a `char` boundary.
//!
//! Clauses do not nest. A `{` seen while a clause is open is literal content
//! of that clause, so `{name{nested}}` yields `Substitution("name{nested")`
//! followed by `Text("}")`. Catalogs in the wild rely on this, so it is kept
//! as is rather than reported.

use std::fmt;

/// Kind of a token, and the scanner state that produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    Substitution,
    Plural,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Text => write!(f, "Text"),
            TokenKind::Substitution => write!(f, "Substitution"),
            TokenKind::Plural => write!(f, "Plural"),
        }
    }
}

/// A segment of a translation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Content with the delimiting braces removed.
    pub value: &'a str,
    /// Byte offset into the source, inclusive.
    pub start: usize,
    /// Byte offset into the source, exclusive.
    pub end: usize,
    /// Set when the clause is not terminated before the end of input.
    pub error: Option<&'static str>,
}

impl<'a> Token<'a> {
    fn new(kind: TokenKind, value: &'a str, start: usize, end: usize) -> Self {
        Self {
            kind,
            value,
            start,
            end,
            error: None,
        }
    }
}

/// The two forms carried by a plural clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralForms<'a> {
    /// Text used when `count == 1`. Empty when the clause has no `|`.
    pub singular: &'a str,
    /// Text used for every other count, with any further `|` removed.
    pub plural: String,
}

/// Split the value of a plural clause on `|`.
///
/// `"s"` means "append `s` in the plural". `"y|ies"` carries both forms. Extra
/// separators are dropped: `"a|b|c"` has singular `"a"` and plural `"bc"`.
pub fn split_plural(value: &str) -> PluralForms<'_> {
    match value.split_once('|') {
        None => PluralForms {
            singular: "",
            plural: value.to_string(),
        },
        Some((singular, rest)) => PluralForms {
            singular,
            plural: rest.split('|').collect(),
        },
    }
}

struct Scanner<'a> {
    input: &'a str,
    tokens: Vec<Token<'a>>,
    state: TokenKind,
    token_start: usize,
}

impl<'a> Scanner<'a> {
    /// Length of the opening delimiter for the current state.
    fn open_len(&self) -> usize {
        match self.state {
            TokenKind::Text => 0,
            TokenKind::Substitution => 1,
            TokenKind::Plural => 2,
        }
    }

    /// Close the token in progress at `end` (exclusive).
    fn finish(&mut self, end: usize, terminated: bool) {
        if self.token_start == end {
            return;
        }
        let start = self.token_start;
        let value_start = start + self.open_len();
        let mut token = match (self.state, terminated) {
            (TokenKind::Text, _) => {
                Token::new(TokenKind::Text, &self.input[start..end], start, end)
            }
            (kind, true) => {
                let value_end = end - self.open_len();
                Token::new(kind, &self.input[value_start..value_end], start, end)
            }
            (kind, false) => Token::new(kind, &self.input[value_start..end], start, end),
        };
        if !terminated {
            token.error = match self.state {
                TokenKind::Text => None,
                TokenKind::Substitution => Some("missing end '}'"),
                TokenKind::Plural => Some("missing end '}}'"),
            };
        }
        self.tokens.push(token);
        self.token_start = end;
    }

    fn run(mut self) -> Vec<Token<'a>> {
        let input = self.input;
        let bytes = input.as_bytes();
        let peek = |i: usize| bytes.get(i + 1).copied();
        let mut i = 0;

        while i < bytes.len() {
            match (bytes[i], self.state) {
                (b'{', TokenKind::Text) => {
                    self.finish(i, true);
                    if peek(i) == Some(b'{') {
                        self.state = TokenKind::Plural;
                        i += 1;
                    } else {
                        self.state = TokenKind::Substitution;
                    }
                }
                (b'}', TokenKind::Substitution) => {
                    self.finish(i + 1, true);
                    self.state = TokenKind::Text;
                }
                (b'}', TokenKind::Plural) if peek(i) == Some(b'}') => {
                    self.finish(i + 2, true);
                    self.state = TokenKind::Text;
                    i += 1;
                }
                _ => {}
            }
            i += 1;
        }

        // Text runs to the end of input; an open clause does not.
        let terminated = self.state == TokenKind::Text;
        self.finish(bytes.len(), terminated);
        self.tokens
    }
}

/// Split a translation string into tokens.
///
/// The tokens partition the input: their `start..end` ranges are contiguous,
/// non-empty and cover every byte.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Scanner {
        input,
        tokens: Vec::new(),
        state: TokenKind::Text,
        token_start: 0,
    }
    .run()
}
