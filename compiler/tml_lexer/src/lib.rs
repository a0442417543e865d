//! Lexer for TML workout logs.
//!
//! The lexer is eager: [`Lexer::new`] scans the whole input before the first
//! token is requested. The resulting [`TokenList`] always ends with exactly
//! one `Eof` token, and reading past it keeps returning that token.
//!
//! ```text
//! # Squat            Hash Ident Delimiter
//! 150kg x 5 @ 7      Number Label Cross Number At Number Delimiter
//! ```

mod cursor;
mod scanner;

pub use scanner::{ScanMode, Scanner};

use tml_ir::{Token, TokenKind, TokenList};

/// Tokenize `source` in full.
pub fn lex(source: &str) -> TokenList {
    let mut scanner = Scanner::new(source);
    // Rows average a little under one token per three bytes.
    let mut tokens = TokenList::with_capacity(source.len() / 3 + 1);

    loop {
        let token = scanner.next_token();
        let is_eof = token.is(TokenKind::Eof);
        tokens.push(token);
        if is_eof {
            break;
        }
    }

    tracing::debug!(tokens = tokens.len(), bytes = source.len(), "lexed source");
    tokens
}

/// Token cursor over a fully scanned source.
///
/// Owns its tokens; consumers get clones from [`next_token`](Self::next_token)
/// so they can hold a token while peeking at the following one.
#[derive(Clone, Debug)]
pub struct Lexer {
    tokens: TokenList,
    position: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            tokens: lex(source),
            position: 0,
        }
    }

    /// Consume and return the current token. Returns `Eof` forever once the
    /// end is reached.
    pub fn next_token(&mut self) -> Token {
        let token = self.tokens.get_clamped(self.position).clone();
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    /// The token the next call to [`next_token`](Self::next_token) returns.
    pub fn peek_token(&self) -> &Token {
        self.tokens.get_clamped(self.position)
    }

    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// Index of the next token to be returned.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl From<TokenList> for Lexer {
    /// Drive a hand-built token stream. The list should end in `Eof`.
    fn from(tokens: TokenList) -> Self {
        Lexer {
            tokens,
            position: 0,
        }
    }
}
