//! Recursive-descent parser for terms and sentences

use super::lexer::{tokenize, Token, TokenKind};
use super::{Deed, Sentence};
use crate::error::ParseError;
use crate::object::{Adjective, Object, Placement, Role, Verb};
use std::sync::Arc;

/// Deepest nesting of parentheses accepted in a term.
const MAX_DEPTH: usize = 128;

pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub(crate) fn new(input: &str) -> Result<Self, ParseError> {
        Ok(Self {
            tokens: tokenize(input)?,
            pos: 0,
            depth: 0,
        })
    }

    // ═══════════════════════════════════════════════════════════════════
    // Token stream
    // ═══════════════════════════════════════════════════════════════════

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self, expected: &str) -> Result<Token, ParseError> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or_else(|| ParseError::UnexpectedEnd {
                expected: expected.to_string(),
            })?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<(), ParseError> {
        let token = self.next(expected)?;
        if token.kind == kind {
            Ok(())
        } else {
            Err(unexpected(&token, expected))
        }
    }

    fn next_word(&mut self, expected: &str) -> Result<(String, usize), ParseError> {
        let token = self.next(expected)?;
        match token.kind {
            TokenKind::Word(word) => Ok((word, token.column)),
            _ => Err(unexpected(&token, expected)),
        }
    }

    fn keyword(&mut self, word: &str) -> Result<(), ParseError> {
        let expected = format!("`{}`", word);
        let (found, column) = self.next_word(&expected)?;
        if found.eq_ignore_ascii_case(word) {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                found,
                expected,
                column,
            })
        }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Fail unless every token was consumed.
    pub(crate) fn finish(&self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(unexpected(token, "end of input")),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Terms
    // ═══════════════════════════════════════════════════════════════════

    /// term := atom ('&' atom)*
    pub(crate) fn term(&mut self) -> Result<Object, ParseError> {
        let first = self.atom()?;
        let mut rest = vec![];
        while matches!(self.peek(), Some(Token { kind: TokenKind::Amp, .. })) {
            self.pos += 1;
            rest.push(self.atom()?);
        }
        if rest.is_empty() {
            return Ok(first);
        }
        rest.insert(0, first);
        Ok(Object::And(rest))
    }

    fn atom(&mut self) -> Result<Object, ParseError> {
        if self.depth == MAX_DEPTH {
            let column = self.peek().map_or(0, |t| t.column);
            return Err(ParseError::TooDeep { column });
        }
        self.depth += 1;
        let atom = self.nested_atom();
        self.depth -= 1;
        atom
    }

    fn nested_atom(&mut self) -> Result<Object, ParseError> {
        let token = self.next("an object")?;
        match token.kind {
            TokenKind::Name(name) => Ok(Object::Called(Arc::from(name))),
            TokenKind::Type(name) => Ok(Object::OfType(Arc::from(name))),
            TokenKind::Open => {
                let inner = self.term()?;
                self.expect(TokenKind::Close, "`)`")?;
                Ok(inner)
            }
            TokenKind::Word(word) => self.word_atom(&word, token.column),
            _ => Err(unexpected(&token, "an object")),
        }
    }

    fn word_atom(&mut self, word: &str, column: usize) -> Result<Object, ParseError> {
        let lower = word.to_ascii_lowercase();
        let obj: Object = match lower.as_str() {
            "i" => Object::I,
            "you" => Object::You,
            "he" => Object::He,
            "she" => Object::She,
            "it" => Object::It,
            "that" => Object::That,

            "has" => Object::Has(Box::new(self.argument()?)),
            "has-not" => Object::HasNot(Box::new(self.argument()?)),
            "key-to" => Object::KeyTo(Box::new(self.argument()?)),
            "killed" => Object::DidTo(Verb::Kill, Box::new(self.argument()?)),
            "killed-by" => Object::WasBy(Verb::Kill, Box::new(self.argument()?)),
            "on" => Placement::On(self.argument()?).into(),
            "in" => Placement::In(self.argument()?).into(),
            "out-of" => Placement::OutOf(self.argument()?).into(),
            "lean-toward" => Placement::LeanToward(self.argument()?).into(),
            "opponent-of" => Role::OpponentOf(self.argument()?).into(),

            "and" => Object::And(self.conjuncts()?),

            "did" | "was" => {
                self.expect(TokenKind::Open, "`(`")?;
                let (verb_word, verb_column) = self.next_word("a verb")?;
                let verb = Verb::from_word(&verb_word.to_ascii_lowercase()).ok_or(
                    ParseError::UnknownWord {
                        word: verb_word,
                        column: verb_column,
                    },
                )?;
                self.expect(TokenKind::Comma, "`,`")?;
                let inner = Box::new(self.term()?);
                self.expect(TokenKind::Close, "`)`")?;
                if lower == "did" {
                    Object::DidTo(verb, inner)
                } else {
                    Object::WasBy(verb, inner)
                }
            }

            other => match Adjective::from_word(other) {
                Some(adj) => adj.into(),
                None => {
                    return Err(ParseError::UnknownWord {
                        word: word.to_string(),
                        column,
                    })
                }
            },
        };
        Ok(obj)
    }

    /// '(' term ')'
    fn argument(&mut self) -> Result<Object, ParseError> {
        self.expect(TokenKind::Open, "`(`")?;
        let inner = self.term()?;
        self.expect(TokenKind::Close, "`)`")?;
        Ok(inner)
    }

    /// 'and' '(' [atom ('&' atom)*] ')'
    fn conjuncts(&mut self) -> Result<Vec<Object>, ParseError> {
        self.expect(TokenKind::Open, "`(`")?;
        let mut list = vec![];
        if matches!(self.peek(), Some(Token { kind: TokenKind::Close, .. })) {
            self.pos += 1;
            return Ok(list);
        }
        list.push(self.atom()?);
        while matches!(self.peek(), Some(Token { kind: TokenKind::Amp, .. })) {
            self.pos += 1;
            list.push(self.atom()?);
        }
        self.expect(TokenKind::Close, "`)`")?;
        Ok(list)
    }

    /// placement := ('on'|'in'|'out-of'|'lean-toward') term
    fn placement(&mut self) -> Result<Placement, ParseError> {
        let expected = "`on`, `in`, `out-of` or `lean-toward`";
        let (word, column) = self.next_word(expected)?;
        let make: fn(Object) -> Placement = match word.to_ascii_lowercase().as_str() {
            "on" => Placement::On,
            "in" => Placement::In,
            "out-of" => Placement::OutOf,
            "lean-toward" => Placement::LeanToward,
            _ => {
                return Err(ParseError::UnexpectedToken {
                    found: word,
                    expected: expected.to_string(),
                    column,
                })
            }
        };
        Ok(make(self.term()?))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Sentences
    // ═══════════════════════════════════════════════════════════════════

    pub(crate) fn sentence(&mut self) -> Result<Sentence, ParseError> {
        let subject = self.term()?;
        let (word, column) = self.next_word("a verb")?;
        let lower = word.to_ascii_lowercase();

        let sentence = match lower.as_str() {
            "moves" => {
                let object = self.term()?;
                let place = self.placement()?;
                Sentence::Moves {
                    subject,
                    object,
                    place,
                }
            }
            "gives" => {
                let item = self.term()?;
                self.keyword("to")?;
                let to = self.term()?;
                Sentence::Gives { subject, item, to }
            }
            "climbs" => {
                let object = self.term()?;
                self.keyword("to")?;
                let place = self.placement()?;
                Sentence::Climbs {
                    subject,
                    object,
                    place,
                }
            }
            "plays" => {
                let game = self.term()?;
                self.keyword("against")?;
                let opponent = self.term()?;
                Sentence::Plays {
                    subject,
                    game,
                    opponent,
                }
            }
            other => match Deed::from_word(other) {
                Some(deed) => Sentence::Does {
                    subject,
                    deed,
                    object: self.term()?,
                },
                None => return Err(ParseError::UnknownWord { word, column }),
            },
        };
        Ok(sentence)
    }
}

fn unexpected(token: &Token, expected: &str) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.text(),
        expected: expected.to_string(),
        column: token.column,
    }
}
