use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars by the evaluator and the
/// integrators. Must support floating-point arithmetic, debug printing, and
/// conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// The right-hand side of a first-order ODE, y' = f(t, y).
///
/// This is the seam between the expression evaluator and the integrators:
/// a parsed expression implements it, and plain functions can be adapted
/// with [`SlopeFn`], which is how the hardcoded verification equations are
/// fed to the same solvers.
pub trait Derivative<T: Scalar> {
    /// Evaluates f(t, y). Must be free of side effects; the solvers call it
    /// several times per step (four times for Runge-Kutta).
    fn slope(&self, t: T, y: T) -> T;
}

/// Adapter turning a plain function or closure into a [`Derivative`].
pub struct SlopeFn<F>(pub F);

impl<T: Scalar, F: Fn(T, T) -> T> Derivative<T> for SlopeFn<F> {
    fn slope(&self, t: T, y: T) -> T {
        (self.0)(t, y)
    }
}
