//! Tokenizer for the sentence syntax

use crate::error::ParseError;

/// Token kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A bare word: pronoun, adjective, verb or keyword
    Word(String),
    /// `@name` or `"name"`
    Name(String),
    /// `#type`
    Type(String),
    /// `(`
    Open,
    /// `)`
    Close,
    /// `,`
    Comma,
    /// `&`
    Amp,
}

/// A token with the column it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What was read
    pub kind: TokenKind,
    /// 1-based column
    pub column: usize,
}

impl Token {
    /// Source-like text of the token, for error messages.
    pub fn text(&self) -> String {
        match &self.kind {
            TokenKind::Word(w) => w.clone(),
            TokenKind::Name(n) => format!("\"{}\"", n),
            TokenKind::Type(t) => format!("#{}", t),
            TokenKind::Open => "(".into(),
            TokenKind::Close => ")".into(),
            TokenKind::Comma => ",".into(),
            TokenKind::Amp => "&".into(),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Split input into tokens.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        let column = pos + 1;

        let kind = match c {
            c if c.is_whitespace() => {
                pos += 1;
                continue;
            }
            '(' => {
                pos += 1;
                TokenKind::Open
            }
            ')' => {
                pos += 1;
                TokenKind::Close
            }
            ',' => {
                pos += 1;
                TokenKind::Comma
            }
            '&' => {
                pos += 1;
                TokenKind::Amp
            }
            '"' => {
                let (text, next) = read_quoted(&chars, pos)?;
                pos = next;
                TokenKind::Name(text)
            }
            '@' | '#' => {
                let text = match chars.get(pos + 1) {
                    Some('"') => {
                        let (text, next) = read_quoted(&chars, pos + 1)?;
                        pos = next;
                        text
                    }
                    Some(&n) if n.is_ascii_alphabetic() => {
                        let (text, next) = read_word(&chars, pos + 1);
                        pos = next;
                        text
                    }
                    Some(&n) => return Err(ParseError::InvalidChar { ch: n, column: column + 1 }),
                    None => {
                        return Err(ParseError::UnexpectedEnd {
                            expected: "a name".into(),
                        })
                    }
                };
                if c == '@' {
                    TokenKind::Name(text)
                } else {
                    TokenKind::Type(text)
                }
            }
            c if c.is_ascii_alphabetic() => {
                let (text, next) = read_word(&chars, pos);
                pos = next;
                TokenKind::Word(text)
            }
            other => return Err(ParseError::InvalidChar { ch: other, column }),
        };

        tokens.push(Token { kind, column });
    }

    Ok(tokens)
}

fn read_word(chars: &[char], start: usize) -> (String, usize) {
    let end = chars[start..]
        .iter()
        .position(|&c| !is_word_char(c))
        .map_or(chars.len(), |n| start + n);
    (chars[start..end].iter().collect(), end)
}

/// Reads a quoted name; `start` is the index of the opening quote.
///
/// Inside the quotes `\"` stands for `"` and `\\` for `\`.
fn read_quoted(chars: &[char], start: usize) -> Result<(String, usize), ParseError> {
    let mut text = String::new();
    let mut pos = start + 1;
    while let Some(&c) = chars.get(pos) {
        match c {
            '"' => return Ok((text, pos + 1)),
            '\\' => match chars.get(pos + 1) {
                Some(&e @ ('"' | '\\')) => {
                    text.push(e);
                    pos += 2;
                }
                Some(&e) => return Err(ParseError::InvalidChar { ch: e, column: pos + 2 }),
                None => break,
            },
            _ => {
                text.push(c);
                pos += 1;
            }
        }
    }
    Err(ParseError::UnterminatedName { column: start + 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_words_and_punctuation() {
        assert_eq!(
            kinds("has-not(key-to(#door)) & I"),
            vec![
                TokenKind::Word("has-not".into()),
                TokenKind::Open,
                TokenKind::Word("key-to".into()),
                TokenKind::Open,
                TokenKind::Type("door".into()),
                TokenKind::Close,
                TokenKind::Close,
                TokenKind::Amp,
                TokenKind::Word("I".into()),
            ]
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(
            kinds("@Peter \"Peter Pan\" #\"front door\" @\"Mary Jane\""),
            vec![
                TokenKind::Name("Peter".into()),
                TokenKind::Name("Peter Pan".into()),
                TokenKind::Type("front door".into()),
                TokenKind::Name("Mary Jane".into()),
            ]
        );
    }

    #[test]
    fn test_columns() {
        let tokens = tokenize("I  opens #door").unwrap();
        let columns: Vec<usize> = tokens.iter().map(|t| t.column).collect();
        assert_eq!(columns, vec![1, 4, 10]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            tokenize("I opens \"door"),
            Err(ParseError::UnterminatedName { column: 9 })
        );
        assert_eq!(
            tokenize("I ! it"),
            Err(ParseError::InvalidChar { ch: '!', column: 3 })
        );
        assert!(matches!(tokenize("@"), Err(ParseError::UnexpectedEnd { .. })));
    }

    #[test]
    fn test_quoted_escapes() {
        assert_eq!(
            kinds(r#""say \"hi\"" #"a\\b""#),
            vec![
                TokenKind::Name("say \"hi\"".into()),
                TokenKind::Type("a\\b".into()),
            ]
        );
        assert_eq!(
            tokenize(r#""a\nb""#),
            Err(ParseError::InvalidChar { ch: 'n', column: 4 })
        );
        assert_eq!(
            tokenize(r#""trailing\"#),
            Err(ParseError::UnterminatedName { column: 1 })
        );
    }
}
