//! Zero-copy JSON tokenizer.
//!
//! Bytes are never copied out of the input buffer; every [`Token`] is a
//! borrow. Whitespace and the structural separators `,`/`:` are skipped
//! silently between tokens (see the crate-level "strictness" note) — the
//! decoder navigates purely off the `{`/`}`/`[`/`]`/`"` structural tokens.

use crate::{
    error::DecodeError,
    token::{Token, TokenKind},
};

type LexFn = fn(&[u8]) -> Result<(usize, TokenKind), DecodeError>;

const fn skippable(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | b',' | b':')
}

const fn number_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E')
}

const fn build_jump_table() -> [Option<LexFn>; 256] {
    let mut table: [Option<LexFn>; 256] = [None; 256];
    table[b'{' as usize] = Some(lex_object_start);
    table[b'}' as usize] = Some(lex_object_end);
    table[b'[' as usize] = Some(lex_array_start);
    table[b']' as usize] = Some(lex_array_end);
    table[b'n' as usize] = Some(lex_null);
    table[b't' as usize] = Some(lex_true);
    table[b'f' as usize] = Some(lex_false);
    table[b'"' as usize] = Some(lex_string);

    let mut d = b'0';
    while d <= b'9' {
        table[d as usize] = Some(lex_number);
        d += 1;
    }
    table[b'-' as usize] = Some(lex_number);
    table[b'+' as usize] = Some(lex_number);

    table
}

static JUMP_TABLE: [Option<LexFn>; 256] = build_jump_table();

fn lex_object_start(_buf: &[u8]) -> Result<(usize, TokenKind), DecodeError> {
    Ok((1, TokenKind::ObjectStart))
}

fn lex_object_end(_buf: &[u8]) -> Result<(usize, TokenKind), DecodeError> {
    Ok((1, TokenKind::ObjectEnd))
}

fn lex_array_start(_buf: &[u8]) -> Result<(usize, TokenKind), DecodeError> {
    Ok((1, TokenKind::ArrayStart))
}

fn lex_array_end(_buf: &[u8]) -> Result<(usize, TokenKind), DecodeError> {
    Ok((1, TokenKind::ArrayEnd))
}

fn lex_null(buf: &[u8]) -> Result<(usize, TokenKind), DecodeError> {
    if buf.len() >= 4 && &buf[..4] == b"null" {
        Ok((4, TokenKind::Null))
    } else {
        Err(invalid_token("null", buf))
    }
}

fn lex_true(buf: &[u8]) -> Result<(usize, TokenKind), DecodeError> {
    if buf.len() >= 4 && &buf[..4] == b"true" {
        Ok((4, TokenKind::True))
    } else {
        Err(invalid_token("true", buf))
    }
}

fn lex_false(buf: &[u8]) -> Result<(usize, TokenKind), DecodeError> {
    if buf.len() >= 5 && &buf[..5] == b"false" {
        Ok((5, TokenKind::False))
    } else {
        Err(invalid_token("false", buf))
    }
}

fn lex_string(buf: &[u8]) -> Result<(usize, TokenKind), DecodeError> {
    Ok((string_literal_len(buf), TokenKind::QuotedLiteral))
}

fn lex_number(buf: &[u8]) -> Result<(usize, TokenKind), DecodeError> {
    let mut i = 0;
    while i < buf.len() && number_byte(buf[i]) {
        i += 1;
    }
    Ok((i, TokenKind::Literal))
}

fn invalid_token(expected: &'static str, buf: &[u8]) -> DecodeError {
    let head_len = buf.len().min(20);
    DecodeError::InvalidToken {
        expected,
        head: String::from_utf8_lossy(&buf[..head_len]).into_owned(),
    }
}

/// Length of the quoted-string token starting at `src[0] == b'"'`, quotes
/// included. Lenient: if no terminating quote is found, the token spans the
/// remaining buffer.
fn string_literal_len(src: &[u8]) -> usize {
    if src.is_empty() {
        return 0;
    }
    let mut i = 1;
    while i < src.len() {
        if src[i] == b'"' && !odd_backslashes(src, i) {
            return i + 1;
        }
        i += 1;
    }
    src.len()
}

/// `true` if the byte at `src[i]` is escaped by an odd run of backslashes
/// immediately preceding it.
fn odd_backslashes(src: &[u8], i: usize) -> bool {
    let mut odd = false;
    let mut j = i;
    while j > 0 && src[j - 1] == b'\\' {
        odd = !odd;
        j -= 1;
    }
    odd
}

fn skip_bytes(buf: &[u8]) -> &[u8] {
    let mut i = 0;
    while i < buf.len() && skippable(buf[i]) {
        i += 1;
    }
    &buf[i..]
}

/// Streams JSON lexemes out of a byte buffer without copying.
///
/// `peek`/`next` share one token of look-ahead; `all` drains the remainder
/// to `Eof`.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a [u8],
    peeked: Option<Token<'a>>,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            peeked: None,
        }
    }

    /// Advance past and return the next token.
    pub fn next(&mut self) -> Result<Token<'a>, DecodeError> {
        if let Some(tok) = self.peeked.take() {
            return Ok(tok);
        }
        self.lex()
    }

    /// Return the next token without consuming it. A following call to
    /// [`Tokenizer::next`] returns the same token and consumes it.
    pub fn peek(&mut self) -> Result<Token<'a>, DecodeError> {
        if let Some(tok) = self.peeked {
            return Ok(tok);
        }
        let tok = self.lex()?;
        self.peeked = Some(tok);
        Ok(tok)
    }

    /// Drain the tokenizer to `Eof`, returning every token seen.
    pub fn all(mut self) -> Result<Vec<Token<'a>>, DecodeError> {
        let mut tokens = Vec::with_capacity(self.input.len() / 16);
        loop {
            let tok = self.next()?;
            if tok.kind == TokenKind::Eof {
                return Ok(tokens);
            }
            tokens.push(tok);
        }
    }

    fn lex(&mut self) -> Result<Token<'a>, DecodeError> {
        self.input = skip_bytes(self.input);
        let Some(&first) = self.input.first() else {
            return Ok(Token::simple(TokenKind::Eof));
        };

        let Some(lex_fn) = JUMP_TABLE[first as usize] else {
            return Err(invalid_token("value", self.input));
        };

        let (len, kind) = lex_fn(self.input)?;
        let literal = &self.input[..len];
        self.input = &self.input[len..];
        Ok(Token::new(kind, literal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_whitespace_and_separators() {
        let mut t = Tokenizer::new(b"  {\t\"a\" : 1 , \"b\":2\n}  ");
        let tokens = t
            .all()
            .unwrap()
            .into_iter()
            .map(|tok| tok.kind)
            .collect::<Vec<_>>();
        assert_eq!(
            tokens,
            vec![
                TokenKind::ObjectStart,
                TokenKind::QuotedLiteral,
                TokenKind::Literal,
                TokenKind::QuotedLiteral,
                TokenKind::Literal,
                TokenKind::ObjectEnd,
            ]
        );
    }

    #[test]
    fn peek_then_next_return_same_token() {
        let mut t = Tokenizer::new(b"true");
        let peeked = t.peek().unwrap();
        let next = t.next().unwrap();
        assert_eq!(peeked, next);
        assert_eq!(t.next().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn escaped_quote_inside_string() {
        let mut t = Tokenizer::new(br#""a\"b""#);
        let tok = t.next().unwrap();
        assert_eq!(tok.kind, TokenKind::QuotedLiteral);
        assert_eq!(tok.unquote(), br#"a\"b"#);
    }

    #[test]
    fn lenient_on_unterminated_string() {
        let mut t = Tokenizer::new(br#""abc"#);
        let tok = t.next().unwrap();
        assert_eq!(tok.kind, TokenKind::QuotedLiteral);
        assert_eq!(tok.literal, br#""abc"#);
    }

    #[test]
    fn number_accepts_sign_and_exponent_bytes() {
        let mut t = Tokenizer::new(b"-1.5e+10");
        let tok = t.next().unwrap();
        assert_eq!(tok.kind, TokenKind::Literal);
        assert_eq!(tok.literal, b"-1.5e+10");
    }

    #[test]
    fn malformed_keyword_is_invalid_token() {
        let mut t = Tokenizer::new(b"nul");
        assert!(t.next().is_err());
    }

    #[test]
    fn commas_and_colons_are_not_surfaced() {
        let mut t = Tokenizer::new(b"[1 2 3]");
        let tokens = t.all().unwrap();
        assert_eq!(tokens.len(), 5); // [, 1, 2, 3, ]
    }
}
