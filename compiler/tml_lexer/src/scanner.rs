//! Hand-written scanner producing one [`Token`] at a time.
//!
//! Structural characters (`#`, `@`, `x`, newline) always win. Everything
//! else is classified by [`ScanMode`], which remembers what the previous
//! token was:
//!
//! | mode          | scans                                   |
//! |---------------|-----------------------------------------|
//! | `AfterHash`   | identifier, up to the end of the line   |
//! | `AfterNumber` | label, up to the next space             |
//! | `Other`       | number if on a digit, otherwise text    |

use tml_ir::{Span, Token, TokenKind};

use crate::cursor::Cursor;

/// What the previously produced token allows next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Previous token was `#`: the rest of the line is an exercise name.
    AfterHash,
    /// Previous token was a number: a glued word is its unit.
    AfterNumber,
    #[default]
    Other,
}

impl ScanMode {
    /// Mode entered after producing a token of `kind`.
    pub fn after(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Hash => ScanMode::AfterHash,
            TokenKind::Number => ScanMode::AfterNumber,
            _ => ScanMode::Other,
        }
    }
}

/// Scanner over a source string.
///
/// Once the input is exhausted every call yields an `Eof` token with an
/// empty span at the end of the source.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    mode: ScanMode,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            mode: ScanMode::Other,
        }
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        self.cursor.eat_while(|c| c == ' ' || c == '\t');

        let start = self.cursor.pos();
        let kind = match self.cursor.current() {
            None => TokenKind::Eof,
            Some('#') => self.single(TokenKind::Hash),
            Some('@') => self.single(TokenKind::At),
            Some('x') => self.single(TokenKind::Cross),
            Some('\n') => self.single(TokenKind::Delimiter),
            Some(c) => self.scan_default(c),
        };

        let token = Token::new(
            kind,
            self.cursor.slice_from(start),
            Span::from_offsets(start, self.cursor.pos()),
        );
        self.mode = ScanMode::after(kind);
        token
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    fn scan_default(&mut self, first: char) -> TokenKind {
        match self.mode {
            ScanMode::AfterHash => {
                self.cursor.eat_while(|c| c != '\n');
                TokenKind::Ident
            }
            ScanMode::AfterNumber => {
                self.cursor.eat_while(|c| c != ' ');
                TokenKind::Label
            }
            ScanMode::Other if first.is_ascii_digit() => {
                self.cursor.eat_while(|c| c.is_ascii_digit() || c == '.');
                TokenKind::Number
            }
            ScanMode::Other => {
                self.scan_text();
                TokenKind::Text
            }
        }
    }

    /// Text runs until a newline followed by a blank line or a `#`. That
    /// newline belongs to the text.
    fn scan_text(&mut self) {
        while let Some(c) = self.cursor.current() {
            let ends_block = c == '\n' && matches!(self.cursor.peek(), Some('\n' | '#'));
            self.cursor.advance();
            if ends_block {
                break;
            }
        }
    }
}
