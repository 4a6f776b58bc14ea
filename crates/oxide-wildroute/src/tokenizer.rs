//! Route template tokenizer.
//!
//! Template grammar:
//!
//! - `:` starts a wildcard, `::` is a literal colon. A run of `n` colons
//!   yields `n / 2` literal colons, followed by a wildcard start if `n` is odd.
//! - A wildcard is `:` followed by an optional name (`[A-Za-z0-9_]+`) and an
//!   optional pattern delimited by `#...#`. An empty pattern (`##`) is the
//!   same as no pattern.
//! - Everything else is literal text.
//!
//! Names are scanned greedily, so an alphanumeric tail right after a
//! pattern-less wildcard becomes part of its name: `head:nametail` has a
//! wildcard named `nametail`.

use crate::token::{Token, Wildcard};

/// A tokenizer over a route template.
///
/// The output always alternates `Literal, Wildcard, Literal, ...`, starting
/// and ending with a (possibly empty) literal.
pub struct Tokenizer<'a> {
    /// The template being tokenized.
    input: &'a str,
    /// The current byte position.
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given template.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes a run of colons and returns its length.
    fn scan_colons(&mut self) -> usize {
        let mut run = 0;
        while self.peek() == Some(':') {
            self.advance();
            run += 1;
        }
        run
    }

    /// Scans the optional name of a wildcard.
    fn scan_name(&mut self) -> &'a str {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }
        &self.input[start..self.pos]
    }

    /// Scans the optional `#...#` pattern of a wildcard.
    ///
    /// An unterminated `#` is left in place as literal text.
    fn scan_pattern(&mut self) -> Option<&'a str> {
        let rest = self.input[self.pos..].strip_prefix('#')?;
        let end = rest.find('#')?;
        self.pos += end + 2;
        Some(&rest[..end])
    }

    /// Scans a wildcard after its opening colon.
    fn scan_wildcard(&mut self) -> Wildcard {
        let name = self.scan_name();
        let pattern = self.scan_pattern();
        Wildcard::new(Some(name), pattern)
    }

    /// Tokenizes the whole template.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut literal = String::new();

        while let Some(c) = self.peek() {
            if c == ':' {
                let run = self.scan_colons();
                literal.extend(std::iter::repeat(':').take(run / 2));
                if run % 2 == 1 {
                    let wildcard = self.scan_wildcard();
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    tokens.push(Token::Wildcard(wildcard));
                }
            } else {
                literal.push(c);
                self.advance();
            }
        }

        tokens.push(Token::Literal(literal));
        tokens
    }
}

/// Tokenizes a route template.
///
/// # Example
///
/// ```
/// use oxide_wildroute::{tokenize, Token};
///
/// let tokens = tokenize("/users/:id#[0-9]+#");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::literal("/users/"),
///         Token::wildcard(Some("id"), Some("[0-9]+")),
///         Token::literal(""),
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize(template: &str) -> Vec<Token> {
    Tokenizer::new(template).tokenize()
}

/// Renders tokens back into a template that tokenizes to the same sequence.
///
/// A pattern-less wildcard followed by a name character or `#` gets an
/// empty `##` pattern so the following text is not read as part of it.
#[must_use]
pub fn to_template(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut open_wildcard = false;

    for token in tokens {
        match token {
            Token::Literal(text) => {
                let ambiguous = text
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '#');
                if open_wildcard && ambiguous {
                    out.push_str("##");
                }
                open_wildcard = false;
            }
            Token::Wildcard(w) => open_wildcard = w.pattern.is_none(),
        }
        out.push_str(&token.to_string());
    }

    out
}
