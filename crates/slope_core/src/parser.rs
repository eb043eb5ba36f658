use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};

// Grammar, precedence low to high:
//
//   Sum            := Product (('+'|'-') Product)*
//   Product        := Power (('*'|'/') Power)* (ImplicitFactor)*
//   Power          := Unary ('^' Unary)*
//   Unary          := ('$'|'-'|"sin"|"cos"|"tan") Atom  |  Atom
//   ImplicitFactor := UnaryNoNegate ('^' UnaryNoNegate)*
//   UnaryNoNegate  := ('$'|"sin"|"cos"|"tan") Atom  |  Atom
//   Atom           := Y | T | E | Number | '(' Sum ')'
//
// ImplicitFactor gives adjacency-as-multiplication (3t = 3 * t). It must
// not admit a leading minus, or `y - 5` would parse as `y * (-5)`; that is
// the only reason the two unary rules exist.

/// Recursive-descent parser over the token vector. Single-token lookahead,
/// and no backtracking over consumed tokens: each rule commits to the first
/// alternative whose leading token matches.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Runs the top rule and requires every token to be consumed.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let expr = self.sum()?;
        if self.pos != self.tokens.len() {
            return Err(ParseError::new());
        }
        Ok(expr)
    }

    fn peek(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    fn accept(&mut self, kind: TokenKind) -> bool {
        if self.peek() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn sum(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.product()?;
        loop {
            let op = match self.peek() {
                Some(TokenKind::Add) => BinaryOp::Add,
                Some(TokenKind::Subtract) => BinaryOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let right = self.product()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn product(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.power()?;
        loop {
            let op = match self.peek() {
                Some(TokenKind::Multiply) => BinaryOp::Mul,
                Some(TokenKind::Divide) => BinaryOp::Div,
                _ => break,
            };
            self.pos += 1;
            let right = self.power()?;
            left = Expr::binary(op, left, right);
        }
        while self.starts_implicit_factor() {
            let right = self.implicit_factor()?;
            left = Expr::binary(BinaryOp::Mul, left, right);
        }
        Ok(left)
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.unary()?;
        while self.accept(TokenKind::Power) {
            let right = self.unary()?;
            left = Expr::binary(BinaryOp::Pow, left, right);
        }
        Ok(left)
    }

    fn implicit_factor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.unary_no_negate()?;
        while self.accept(TokenKind::Power) {
            let right = self.unary_no_negate()?;
            left = Expr::binary(BinaryOp::Pow, left, right);
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.peek() {
            Some(TokenKind::Subtract) => Some(UnaryOp::Neg),
            Some(TokenKind::Sqrt) => Some(UnaryOp::Sqrt),
            Some(TokenKind::Sin) => Some(UnaryOp::Sin),
            Some(TokenKind::Cos) => Some(UnaryOp::Cos),
            Some(TokenKind::Tan) => Some(UnaryOp::Tan),
            _ => None,
        };
        match op {
            Some(op) => {
                self.pos += 1;
                Ok(Expr::unary(op, self.atom()?))
            }
            None => self.atom(),
        }
    }

    // Same as `unary` minus the leading-minus alternative.
    fn unary_no_negate(&mut self) -> Result<Expr, ParseError> {
        let op = match self.peek() {
            Some(TokenKind::Sqrt) => Some(UnaryOp::Sqrt),
            Some(TokenKind::Sin) => Some(UnaryOp::Sin),
            Some(TokenKind::Cos) => Some(UnaryOp::Cos),
            Some(TokenKind::Tan) => Some(UnaryOp::Tan),
            _ => None,
        };
        match op {
            Some(op) => {
                self.pos += 1;
                Ok(Expr::unary(op, self.atom()?))
            }
            None => self.atom(),
        }
    }

    fn starts_implicit_factor(&self) -> bool {
        matches!(
            self.peek(),
            Some(
                TokenKind::Sqrt
                    | TokenKind::Sin
                    | TokenKind::Cos
                    | TokenKind::Tan
                    | TokenKind::DependentVar
                    | TokenKind::IndependentVar
                    | TokenKind::EulerConstant
                    | TokenKind::Number
                    | TokenKind::OpenParen
            )
        )
    }

    fn atom(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            Some(TokenKind::DependentVar) => {
                self.pos += 1;
                Ok(Expr::Y)
            }
            Some(TokenKind::IndependentVar) => {
                self.pos += 1;
                Ok(Expr::T)
            }
            Some(TokenKind::EulerConstant) => {
                self.pos += 1;
                Ok(Expr::E)
            }
            Some(TokenKind::Number) => {
                let lexeme = self.tokens[self.pos].lexeme.clone();
                self.pos += 1;
                Ok(Expr::Number(lexeme))
            }
            Some(TokenKind::OpenParen) => {
                self.pos += 1;
                let inner = self.sum()?;
                if !self.accept(TokenKind::CloseParen) {
                    return Err(ParseError::new());
                }
                Ok(inner)
            }
            _ => Err(ParseError::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Parser;
    use crate::ast::{BinaryOp, Expr, UnaryOp};
    use crate::error::ParseError;
    use crate::lexer::tokenize;

    fn parse(input: &str) -> Result<Expr, ParseError> {
        Parser::new(tokenize(input).expect("expected input to lex")).parse()
    }

    fn num(text: &str) -> Expr {
        Expr::Number(text.to_string())
    }

    #[test]
    fn additive_operators_fold_left() {
        assert_eq!(
            parse("y-t+1").unwrap(),
            Expr::binary(
                BinaryOp::Add,
                Expr::binary(BinaryOp::Sub, Expr::Y, Expr::T),
                num("1"),
            )
        );
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(
            parse("t+2*y").unwrap(),
            Expr::binary(
                BinaryOp::Add,
                Expr::T,
                Expr::binary(BinaryOp::Mul, num("2"), Expr::Y),
            )
        );
    }

    #[test]
    fn power_binds_tighter_than_multiplication() {
        assert_eq!(
            parse("2*y^3").unwrap(),
            Expr::binary(
                BinaryOp::Mul,
                num("2"),
                Expr::binary(BinaryOp::Pow, Expr::Y, num("3")),
            )
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(
            parse("(t+2)*y").unwrap(),
            Expr::binary(
                BinaryOp::Mul,
                Expr::binary(BinaryOp::Add, Expr::T, num("2")),
                Expr::Y,
            )
        );
    }

    #[test]
    fn implicit_multiplication_by_adjacency() {
        assert_eq!(parse("3y").unwrap(), parse("3*y").unwrap());
        assert_eq!(parse("3t").unwrap(), parse("3*t").unwrap());
        assert_eq!(parse("2(t+1)").unwrap(), parse("2*(t+1)").unwrap());
        assert_eq!(parse("t y").unwrap(), parse("t*y").unwrap());
    }

    #[test]
    fn implicit_factor_carries_its_own_power_level() {
        // 3y^2 = 3 * (y^2), not (3*y)^2.
        assert_eq!(
            parse("3y^2").unwrap(),
            Expr::binary(
                BinaryOp::Mul,
                num("3"),
                Expr::binary(BinaryOp::Pow, Expr::Y, num("2")),
            )
        );
    }

    #[test]
    fn leading_minus_is_not_captured_as_implicit_factor() {
        // y-5 stays subtraction, never y * (-5).
        assert_eq!(
            parse("y-5").unwrap(),
            Expr::binary(BinaryOp::Sub, Expr::Y, num("5"))
        );
    }

    #[test]
    fn unary_prefixes_apply_to_one_atom() {
        assert_eq!(
            parse("-y").unwrap(),
            Expr::unary(UnaryOp::Neg, Expr::Y)
        );
        assert_eq!(
            parse("$y").unwrap(),
            Expr::unary(UnaryOp::Sqrt, Expr::Y)
        );
        assert_eq!(
            parse("sin(t+y)").unwrap(),
            Expr::unary(
                UnaryOp::Sin,
                Expr::binary(BinaryOp::Add, Expr::T, Expr::Y)
            )
        );
        assert_eq!(parse("sqrt(y)").unwrap(), parse("$(y)").unwrap());
    }

    #[test]
    fn negation_binds_below_power() {
        // The unary rule wraps the atom before '^' folds, so -y^2 = (-y)^2.
        assert_eq!(
            parse("-y^2").unwrap(),
            Expr::binary(
                BinaryOp::Pow,
                Expr::unary(UnaryOp::Neg, Expr::Y),
                num("2"),
            )
        );
    }

    #[test]
    fn dangling_operator_is_a_parse_error() {
        assert!(parse("y+").is_err());
        assert!(parse("*y").is_err());
        assert!(parse("y^").is_err());
    }

    #[test]
    fn unclosed_parenthesis_is_a_parse_error() {
        assert!(parse("(y+t").is_err());
        assert!(parse("sin(y").is_err());
    }

    #[test]
    fn trailing_tokens_are_a_parse_error() {
        assert!(parse("y)").is_err());
        assert!(parse("3t*y").is_err());
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        assert!(parse("").is_err());
    }

    #[test]
    fn double_negation_is_rejected() {
        // Unary applies to an atom, not to another unary.
        assert!(parse("--y").is_err());
    }
}
