use crate::traits::{Derivative, Scalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Sqrt,
    Sin,
    Cos,
    Tan,
}

/// A parsed expression. Strictly a tree: every binary/unary node owns its
/// children, and a successfully returned tree is fully formed, so
/// evaluation never meets a partial node.
///
/// Number literals keep their lexeme text; the decimal value is produced at
/// evaluation time for whatever scalar type the caller runs with.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// The dependent variable `y`.
    Y,
    /// The independent variable `t` (or its alternate spelling `x`).
    T,
    /// Euler's constant `e`.
    E,
    Number(String),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Evaluates the tree with the given bindings for `t` and `y`.
    ///
    /// Pure recursive walk, left operand before right. Arithmetic follows
    /// IEEE semantics (division by zero gives an infinity or NaN, never an
    /// error); trig operands are radians. No state is kept between calls,
    /// so identical bindings give bit-identical results.
    pub fn eval<T: Scalar>(&self, t: T, y: T) -> T {
        match self {
            Expr::Y => y,
            Expr::T => t,
            Expr::E => T::from_f64(std::f64::consts::E).unwrap(),
            Expr::Number(lexeme) => {
                T::from_f64(lexeme.parse().unwrap_or(0.0)).unwrap()
            }
            Expr::Binary { op, left, right } => {
                let a = left.eval(t, y);
                let b = right.eval(t, y);
                match op {
                    BinaryOp::Add => a + b,
                    BinaryOp::Sub => a - b,
                    BinaryOp::Mul => a * b,
                    BinaryOp::Div => a / b,
                    BinaryOp::Pow => a.powf(b),
                }
            }
            Expr::Unary { op, operand } => {
                let a = operand.eval(t, y);
                match op {
                    UnaryOp::Neg => -a,
                    UnaryOp::Sqrt => a.sqrt(),
                    UnaryOp::Sin => a.sin(),
                    UnaryOp::Cos => a.cos(),
                    UnaryOp::Tan => a.tan(),
                }
            }
        }
    }
}

impl<T: Scalar> Derivative<T> for Expr {
    fn slope(&self, t: T, y: T) -> T {
        self.eval(t, y)
    }
}
