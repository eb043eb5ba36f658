use crate::error::LexError;

/// Surface forms the scanner can emit.
///
/// The two variables and the trig keywords get their own kinds so the
/// parser and evaluator never do name lookup; the whole input language is
/// closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `y`
    DependentVar,
    /// Bare `t` (when not starting `tan`) or the alternate spelling `x`.
    IndependentVar,
    /// `e`
    EulerConstant,
    /// `[0-9]+(\.[0-9]+)?`
    Number,
    Add,
    Subtract,
    Multiply,
    Divide,
    /// `^`
    Power,
    /// The `$` prefix or the `sqrt` keyword.
    Sqrt,
    OpenParen,
    CloseParen,
    Sin,
    Cos,
    Tan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
}

impl Token {
    fn new(lexeme: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            lexeme: lexeme.into(),
            kind,
        }
    }
}

/// Scanner states. `SawT` doubles as both a half-read `tan` and a complete
/// independent-variable token; which one it was is only known from the next
/// character (or end of input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    IntegerDigits,
    FractionDigits,
    SawT,
    SawTa,
    SawS,
    SawSi,
    SawC,
    SawCo,
    SawSq,
    SawSqr,
}

/// Scans one input line into tokens.
///
/// Fails at the first character no state can classify. Multi-character
/// tokens (numbers, bare `t`) close on the first non-member character,
/// which is then re-examined from `Start` without advancing past it; the
/// loop runs one index past the end of input so a trailing number or `t`
/// still gets flushed.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut active = String::new();
    let mut state = State::Start;

    let mut i = 0;
    while i <= chars.len() {
        let c = chars.get(i).copied();
        match state {
            State::Start => match c {
                Some('y') => tokens.push(Token::new("y", TokenKind::DependentVar)),
                Some('t') => {
                    active.push('t');
                    state = State::SawT;
                }
                Some('x') => tokens.push(Token::new("x", TokenKind::IndependentVar)),
                Some('e') => tokens.push(Token::new("e", TokenKind::EulerConstant)),
                Some('s') => {
                    active.push('s');
                    state = State::SawS;
                }
                Some('c') => {
                    active.push('c');
                    state = State::SawC;
                }
                Some(d @ '0'..='9') => {
                    active.push(d);
                    state = State::IntegerDigits;
                }
                Some('+') => tokens.push(Token::new("+", TokenKind::Add)),
                Some('-') => tokens.push(Token::new("-", TokenKind::Subtract)),
                Some('*') => tokens.push(Token::new("*", TokenKind::Multiply)),
                Some('/') => tokens.push(Token::new("/", TokenKind::Divide)),
                Some('^') => tokens.push(Token::new("^", TokenKind::Power)),
                Some('$') => tokens.push(Token::new("$", TokenKind::Sqrt)),
                Some('(') => tokens.push(Token::new("(", TokenKind::OpenParen)),
                Some(')') => tokens.push(Token::new(")", TokenKind::CloseParen)),
                Some(w) if w.is_ascii_whitespace() => {}
                Some(other) => return Err(LexError::UnknownChar { ch: other, pos: i }),
                None => {}
            },
            State::IntegerDigits => match c {
                Some(d @ '0'..='9') => active.push(d),
                Some('.') => {
                    active.push('.');
                    state = State::FractionDigits;
                }
                _ => {
                    tokens.push(Token::new(std::mem::take(&mut active), TokenKind::Number));
                    state = State::Start;
                    continue; // pushback: re-examine this character
                }
            },
            State::FractionDigits => match c {
                Some(d @ '0'..='9') => active.push(d),
                _ => {
                    tokens.push(Token::new(std::mem::take(&mut active), TokenKind::Number));
                    state = State::Start;
                    continue;
                }
            },
            State::SawT => match c {
                Some('a') => {
                    active.push('a');
                    state = State::SawTa;
                }
                _ => {
                    // A `t` not followed by `a` was the independent variable.
                    tokens.push(Token::new(
                        std::mem::take(&mut active),
                        TokenKind::IndependentVar,
                    ));
                    state = State::Start;
                    continue;
                }
            },
            State::SawTa => match c {
                Some('n') => {
                    active.clear();
                    tokens.push(Token::new("tan", TokenKind::Tan));
                    state = State::Start;
                }
                Some(other) => return Err(LexError::UnknownChar { ch: other, pos: i }),
                None => return Err(LexError::UnexpectedEof { pos: i }),
            },
            State::SawS => match c {
                Some('i') => {
                    active.push('i');
                    state = State::SawSi;
                }
                Some('q') => {
                    active.push('q');
                    state = State::SawSq;
                }
                Some(other) => return Err(LexError::UnknownChar { ch: other, pos: i }),
                None => return Err(LexError::UnexpectedEof { pos: i }),
            },
            State::SawSi => match c {
                Some('n') => {
                    active.clear();
                    tokens.push(Token::new("sin", TokenKind::Sin));
                    state = State::Start;
                }
                Some(other) => return Err(LexError::UnknownChar { ch: other, pos: i }),
                None => return Err(LexError::UnexpectedEof { pos: i }),
            },
            State::SawC => match c {
                Some('o') => {
                    active.push('o');
                    state = State::SawCo;
                }
                Some(other) => return Err(LexError::UnknownChar { ch: other, pos: i }),
                None => return Err(LexError::UnexpectedEof { pos: i }),
            },
            State::SawCo => match c {
                Some('s') => {
                    active.clear();
                    tokens.push(Token::new("cos", TokenKind::Cos));
                    state = State::Start;
                }
                Some(other) => return Err(LexError::UnknownChar { ch: other, pos: i }),
                None => return Err(LexError::UnexpectedEof { pos: i }),
            },
            State::SawSq => match c {
                Some('r') => {
                    active.push('r');
                    state = State::SawSqr;
                }
                Some(other) => return Err(LexError::UnknownChar { ch: other, pos: i }),
                None => return Err(LexError::UnexpectedEof { pos: i }),
            },
            State::SawSqr => match c {
                Some('t') => {
                    active.clear();
                    tokens.push(Token::new("sqrt", TokenKind::Sqrt));
                    state = State::Start;
                }
                Some(other) => return Err(LexError::UnknownChar { ch: other, pos: i }),
                None => return Err(LexError::UnexpectedEof { pos: i }),
            },
        }
        i += 1;
    }

    Ok(tokens)
}
