//! Built-in catalogue of scalar test functions.
//!
//! Each entry is a closed-form `f(x)` with an exact upper bound on any
//! finite interval, which the integrate and generate commands use as the
//! default box height.

use clap::ValueEnum;
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Named scalar function
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FunctionKind {
    /// f(x) = x
    Linear,
    /// f(x) = x²
    Quadratic,
    /// f(x) = (x - 2)²
    ShiftedParabola,
    /// f(x) = sin x
    Sine,
    /// f(x) = exp(-x² / 2)
    Gaussian,
    /// f(x) = exp(-x)
    ExpDecay,
    /// f(x) = x³ - 2x - 5
    Cubic,
}

/// Local maximum of the cubic at x = -sqrt(2/3)
const CUBIC_LOCAL_MAX: f64 = -0.816_496_580_927_726;

impl FunctionKind {
    pub fn eval(self, x: f64) -> f64 {
        match self {
            FunctionKind::Linear => x,
            FunctionKind::Quadratic => x * x,
            FunctionKind::ShiftedParabola => (x - 2.0).powi(2),
            FunctionKind::Sine => x.sin(),
            FunctionKind::Gaussian => (-0.5 * x * x).exp(),
            FunctionKind::ExpDecay => (-x).exp(),
            FunctionKind::Cubic => x * x * x - 2.0 * x - 5.0,
        }
    }

    pub fn expression(self) -> &'static str {
        match self {
            FunctionKind::Linear => "x",
            FunctionKind::Quadratic => "x^2",
            FunctionKind::ShiftedParabola => "(x - 2)^2",
            FunctionKind::Sine => "sin(x)",
            FunctionKind::Gaussian => "exp(-x^2 / 2)",
            FunctionKind::ExpDecay => "exp(-x)",
            FunctionKind::Cubic => "x^3 - 2x - 5",
        }
    }

    /// Maximum of `f` on `[x_min, x_max]`.
    ///
    /// The maximum of every catalogue function lies at an endpoint or at one
    /// of its interior local maxima.
    pub fn upper_bound(self, x_min: f64, x_max: f64) -> f64 {
        let (lo, hi) = if x_min <= x_max { (x_min, x_max) } else { (x_max, x_min) };
        let endpoints = self.eval(lo).max(self.eval(hi));
        let contains = |x: f64| lo <= x && x <= hi;

        match self {
            FunctionKind::Sine => {
                // first peak π/2 + 2kπ at or after lo
                let k = ((lo - FRAC_PI_2) / TAU).ceil();
                if contains(FRAC_PI_2 + k * TAU) {
                    1.0
                } else {
                    endpoints
                }
            }
            FunctionKind::Gaussian if contains(0.0) => 1.0,
            FunctionKind::Cubic if contains(CUBIC_LOCAL_MAX) => {
                endpoints.max(self.eval(CUBIC_LOCAL_MAX))
            }
            _ => endpoints,
        }
    }
}

impl std::fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression())
    }
}
