//! Tokenization of raw query text.
//!
//! The tokenizer splits a query into whitespace-separated tokens while
//! keeping single-quoted string literals intact, so a clause keyword
//! inside a literal is never mistaken for a clause boundary. Joining
//! tokens back with single spaces gives the whitespace-collapsed clause
//! text the rest of the pipeline works with.

/// Clause keywords of the accepted grammar subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Select,
    From,
    Where,
    Join,
    On,
}

impl Keyword {
    /// Matches a whole token against the keyword set, case-insensitively.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        const KEYWORDS: [(&str, Keyword); 5] = [
            ("SELECT", Keyword::Select),
            ("FROM", Keyword::From),
            ("WHERE", Keyword::Where),
            ("JOIN", Keyword::Join),
            ("ON", Keyword::On),
        ];
        KEYWORDS
            .iter()
            .find(|(text, _)| word.eq_ignore_ascii_case(text))
            .map(|(_, keyword)| *keyword)
    }
}

/// A single token: its source text and, when the whole token matches one,
/// the clause keyword it denotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub keyword: Option<Keyword>,
}

impl Token {
    fn new(text: String) -> Self {
        let keyword = Keyword::from_word(&text);
        Self { text, keyword }
    }

    /// Returns true if this token denotes the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.keyword == Some(keyword)
    }
}

/// Strips a trailing query terminator.
///
/// The semicolon is only a terminator when it is outside every string
/// literal; an odd number of quotes before it means it is literal content.
#[must_use]
pub fn strip_terminator(query: &str) -> &str {
    let trimmed = query.trim_end();
    if let Some(stripped) = trimmed.strip_suffix(';') {
        if stripped.matches('\'').count() % 2 == 0 {
            return stripped;
        }
    }
    trimmed
}

/// Tokenizes a query string.
///
/// Runs of whitespace outside literals separate tokens; the terminator,
/// if any, is stripped first.
#[must_use]
pub fn tokenize(query: &str) -> Vec<Token> {
    let query = strip_terminator(query);

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_literal = false;

    for ch in query.chars() {
        match ch {
            '\'' => {
                in_literal = !in_literal;
                current.push(ch);
            }
            c if c.is_whitespace() && !in_literal => {
                if !current.is_empty() {
                    tokens.push(Token::new(std::mem::take(&mut current)));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(Token::new(current));
    }

    tokens
}

/// Joins token texts with single spaces.
#[must_use]
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join(" ")
}
