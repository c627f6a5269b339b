use std::iter::Peekable;
use std::str::CharIndices;

use tracing::debug;

use crate::error::{CompileError, CompileResult};
use crate::token::{Span, SyntaxKind, Token};

/// Turns the whole source into tokens, ending with a single `End` marker.
///
/// The first invalid character aborts the pass; no partial token
/// sequence is ever returned.
pub fn lex(source: &str) -> CompileResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        match ch {
            // `is_ascii_whitespace` leaves out vertical tab
            c if c.is_ascii_whitespace() || c == '\x0B' => {
                chars.next();
            }
            c if c.is_ascii_alphabetic() => {
                let word = take_while(source, &mut chars, |c| c.is_ascii_alphanumeric());
                let kind = SyntaxKind::keyword(word).unwrap_or(SyntaxKind::Ident);
                tokens.push(Token::new(kind, word, Span::new(start, word.len())));
            }
            c if c.is_ascii_digit() => {
                let number = take_while(source, &mut chars, |c| c.is_ascii_digit());
                tokens.push(Token::new(
                    SyntaxKind::Number,
                    number,
                    Span::new(start, number.len()),
                ));
            }
            '=' => {
                chars.next();
                if next_is(&mut chars, '=') {
                    tokens.push(Token::new(SyntaxKind::EqEq, "==", Span::new(start, 2)));
                } else {
                    tokens.push(Token::new(SyntaxKind::Assign, "=", Span::new(start, 1)));
                }
            }
            '!' => {
                chars.next();
                if !next_is(&mut chars, '=') {
                    return Err(CompileError::LoneBang {
                        span: Span::new(start, 1).into(),
                    });
                }
                tokens.push(Token::new(SyntaxKind::NotEq, "!=", Span::new(start, 2)));
            }
            c => {
                let Some(kind) = SyntaxKind::punct(c) else {
                    return Err(CompileError::UnknownCharacter {
                        ch: c,
                        span: Span::new(start, c.len_utf8()).into(),
                    });
                };
                chars.next();
                tokens.push(Token::new(kind, c.to_string(), Span::new(start, 1)));
            }
        }
    }

    tokens.push(Token::new(SyntaxKind::End, "", Span::new(source.len(), 0)));
    debug!(count = tokens.len(), "lexed source");
    Ok(tokens)
}

/// Consumes the maximal run of characters matching `pred` and returns it
/// as a slice of the source.
fn take_while<'s>(
    source: &'s str,
    chars: &mut Peekable<CharIndices<'s>>,
    pred: impl Fn(char) -> bool,
) -> &'s str {
    let start = chars.peek().map_or(source.len(), |&(i, _)| i);
    let mut end = start;
    while let Some(&(i, c)) = chars.peek() {
        if !pred(c) {
            break;
        }
        end = i + c.len_utf8();
        chars.next();
    }
    &source[start..end]
}

fn next_is(chars: &mut Peekable<CharIndices<'_>>, expected: char) -> bool {
    chars.next_if(|&(_, c)| c == expected).is_some()
}
