/// The `slope_core` crate turns an operator-typed line of text into the
/// derivative function f(t, y) of a first-order ODE and numerically
/// approximates the solution.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `Derivative` (the
///   y' = f(t, y) seam between evaluation and integration).
/// - **Lexer**: a finite-state scanner producing the token sequence.
/// - **Parser**: recursive descent over a small grammar with precedence and
///   implicit multiplication, building the expression tree.
/// - **Ast**: the tagged-variant tree and its pure tree-walking evaluator.
/// - **Solvers**: fixed-step integrators (Euler, Improved Euler, RK4).
/// - **Presets**: hardcoded verification equations.
pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod presets;
pub mod solvers;
pub mod traits;

pub use ast::Expr;
pub use error::{ExprError, LexError, ParseError};

/// The build pass: tokenizes and parses one input line. Any failure is
/// reported here, before evaluation; a returned tree is fully formed and
/// can be evaluated any number of times.
pub fn parse_line(line: &str) -> Result<Expr, ExprError> {
    let tokens = lexer::tokenize(line)?;
    let expr = parser::Parser::new(tokens).parse()?;
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::parse_line;
    use crate::error::{ExprError, PARSE_DIAGNOSTIC};

    #[test]
    fn build_then_evaluate() {
        let expr = parse_line("t-1.5*y").unwrap();
        assert_eq!(expr.eval(0.1, 3.0), 0.1 - 1.5 * 3.0);
    }

    #[test]
    fn sqrt_prefix_scenario() {
        let expr = parse_line("$y").unwrap();
        assert_eq!(expr.eval(0.0, 4.0), 2.0);
    }

    #[test]
    fn lex_failures_surface_with_position() {
        match parse_line("y#3") {
            Err(ExprError::Lex(err)) => {
                assert_eq!(format!("{err}"), "Unknown input '#' at position 1");
            }
            other => panic!("expected a lex error, got {other:?}"),
        }
    }

    #[test]
    fn parse_failures_surface_the_fixed_diagnostic() {
        match parse_line("y+") {
            Err(ExprError::Parse(err)) => assert_eq!(err.message, PARSE_DIAGNOSTIC),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn implicit_and_explicit_multiplication_evaluate_identically() {
        let implicit = parse_line("3y").unwrap();
        let explicit = parse_line("3*y").unwrap();
        for y in [-2.0, 0.0, 0.5, 10.0] {
            assert_eq!(implicit.eval(0.0, y), explicit.eval(0.0, y));
        }
    }

    #[test]
    fn subtraction_is_never_read_as_implicit_negation() {
        let expr = parse_line("y-5").unwrap();
        for y in [-3.0_f64, 0.0, 2.5, 100.0] {
            assert_eq!(expr.eval(0.0, y), y - 5.0);
        }
    }

    #[test]
    fn infix_precedence_matches_standard_arithmetic() {
        let expr = parse_line("t+2*y^2-6/3").unwrap();
        for (t, y) in [(0.0_f64, 0.0), (1.0, 2.0), (-3.0, 0.5)] {
            assert_eq!(expr.eval(t, y), t + 2.0 * y.powf(2.0) - 6.0 / 3.0);
        }
    }
}
