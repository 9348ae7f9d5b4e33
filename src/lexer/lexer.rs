use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, KEYWORD_LOOKUP};

/// Byte-at-a-time tokenizer over a single source buffer.
///
/// `position` always points at the byte held in `ch`, and `read_position`
/// at the next byte to examine; both only move forward. Once the input is
/// exhausted `ch` is the 0 sentinel and `next_token` returns EOF forever.
pub struct Lexer {
    input: Vec<u8>,
    position: usize,
    read_position: usize,
    ch: u8,
}

impl Lexer {
    pub fn new(input: String) -> Lexer {
        let mut lexer = Lexer {
            input: input.into_bytes(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Loads the next byte into `ch` and advances the cursor.
    fn read_char(&mut self) {
        if self.read_position >= self.input.len() {
            self.ch = 0;
        } else {
            self.ch = self.input[self.read_position];
        }
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Returns the next byte without advancing.
    fn peek_char(&self) -> u8 {
        if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Produces the next token in the stream, consuming it.
    ///
    /// Total over all byte inputs: unrecognized bytes come back as
    /// `Illegal` tokens, never as errors.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    MK_TOKEN!(TokenKind::Equals, String::from("=="))
                } else {
                    MK_TOKEN!(TokenKind::Assignment, String::from("="))
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    MK_TOKEN!(TokenKind::NotEquals, String::from("!="))
                } else {
                    MK_TOKEN!(TokenKind::Not, String::from("!"))
                }
            }
            b';' => MK_TOKEN!(TokenKind::Semicolon, String::from(";")),
            b'(' => MK_TOKEN!(TokenKind::OpenParen, String::from("(")),
            b')' => MK_TOKEN!(TokenKind::CloseParen, String::from(")")),
            b',' => MK_TOKEN!(TokenKind::Comma, String::from(",")),
            b'+' => MK_TOKEN!(TokenKind::Plus, String::from("+")),
            b'-' => MK_TOKEN!(TokenKind::Dash, String::from("-")),
            b'/' => MK_TOKEN!(TokenKind::Slash, String::from("/")),
            b'*' => MK_TOKEN!(TokenKind::Star, String::from("*")),
            b'{' => MK_TOKEN!(TokenKind::OpenCurly, String::from("{")),
            b'}' => MK_TOKEN!(TokenKind::CloseCurly, String::from("}")),
            b'<' => MK_TOKEN!(TokenKind::Less, String::from("<")),
            b'>' => MK_TOKEN!(TokenKind::Greater, String::from(">")),
            0 => MK_TOKEN!(TokenKind::EOF, String::new()),
            _ => {
                if is_letter(self.ch) {
                    // read_identifier already advanced past the run
                    let value = self.read_identifier();
                    let kind = KEYWORD_LOOKUP
                        .get(value.as_str())
                        .copied()
                        .unwrap_or(TokenKind::Identifier);
                    return MK_TOKEN!(kind, value);
                } else if is_digit(self.ch) {
                    return MK_TOKEN!(TokenKind::Int, self.read_number());
                }

                MK_TOKEN!(TokenKind::Illegal, (self.ch as char).to_string())
            }
        };

        self.read_char();
        token
    }

    /// Reads a maximal letter/underscore run starting at `position`.
    fn read_identifier(&mut self) -> String {
        let position = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[position..self.position]).into_owned()
    }

    /// Reads a maximal digit run starting at `position`.
    fn read_number(&mut self) -> String {
        let position = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[position..self.position]).into_owned()
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_uppercase() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}
