use crate::traits::Derivative;

/// A named verification equation with its initial data. These are the
/// hardcoded problems the expression front end is checked against; each is
/// a plain pure function, so the solvers treat it exactly like a parsed
/// expression.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    /// The formula as the operator would type it.
    pub formula: &'static str,
    pub f: fn(f64, f64) -> f64,
    pub t0: f64,
    pub y0: f64,
    pub t_end: f64,
}

impl Derivative<f64> for Preset {
    fn slope(&self, t: f64, y: f64) -> f64 {
        (self.f)(t, y)
    }
}

fn hw6p5(t: f64, y: f64) -> f64 {
    1.0 - 5.0 * t - 2.0 * y
}

fn hw6p6(t: f64, y: f64) -> f64 {
    t - 1.5 * y
}

fn sum_of_squares(t: f64, y: f64) -> f64 {
    t * t + y * y
}

fn root_of_sum(t: f64, y: f64) -> f64 {
    (t + y).sqrt()
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "hw6p5",
        formula: "1-5t-2y",
        f: hw6p5,
        t0: 1.0,
        y0: -5.0,
        t_end: 2.0,
    },
    Preset {
        name: "hw6p6",
        formula: "t-1.5y",
        f: hw6p6,
        t0: 0.1,
        y0: 3.0,
        t_end: 1.1,
    },
    Preset {
        name: "squares",
        formula: "t^2+y^2",
        f: sum_of_squares,
        t0: 0.0,
        y0: 1.0,
        t_end: 1.0,
    },
    Preset {
        name: "root",
        formula: "$(t+y)",
        f: root_of_sum,
        t0: 1.0,
        y0: 3.0,
        t_end: 2.0,
    },
];

/// Looks a preset up by name.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}
