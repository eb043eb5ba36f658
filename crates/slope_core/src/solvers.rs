use crate::traits::{Derivative, Scalar};

// All three integrators walk the same fixed grid: the step count is the
// rounded span over h, and t advances by h after each update.
fn step_count<T: Scalar>(t0: T, t_end: T, h: T) -> usize {
    ((t_end - t0) / h).round().to_usize().unwrap_or(0)
}

/// Euler's method: y <- y + h * f(t, y).
pub fn euler<T: Scalar>(f: &impl Derivative<T>, t0: T, y0: T, t_end: T, h: T) -> T {
    let mut t = t0;
    let mut y = y0;
    for _ in 0..step_count(t0, t_end, h) {
        y = y + h * f.slope(t, y);
        t = t + h;
    }
    y
}

/// Improved Euler (Heun): averages the slope at the step start with the
/// slope at the Euler-predicted endpoint.
pub fn improved_euler<T: Scalar>(f: &impl Derivative<T>, t0: T, y0: T, t_end: T, h: T) -> T {
    let half = T::from_f64(0.5).unwrap();
    let mut t = t0;
    let mut y = y0;
    for _ in 0..step_count(t0, t_end, h) {
        let left = f.slope(t, y);
        let right = f.slope(t + h, y + h * left);
        y = y + (left + right) * half * h;
        t = t + h;
    }
    y
}

/// Classic 4th-order Runge-Kutta: four slope samples per step, half-step
/// midpoints for k2 and k3, combined with weights 1:2:2:1 over 6.
pub fn rk4<T: Scalar>(f: &impl Derivative<T>, t0: T, y0: T, t_end: T, h: T) -> T {
    let half = T::from_f64(0.5).unwrap();
    let sixth = T::from_f64(1.0 / 6.0).unwrap();
    let two = T::from_f64(2.0).unwrap();

    let mut t = t0;
    let mut y = y0;
    for _ in 0..step_count(t0, t_end, h) {
        let k1 = f.slope(t, y);
        let k2 = f.slope(t + h * half, y + h * half * k1);
        let k3 = f.slope(t + h * half, y + h * half * k2);
        let k4 = f.slope(t + h, y + h * k3);

        y = y + h * sixth * (k1 + two * k2 + two * k3 + k4);
        t = t + h;
    }
    y
}
