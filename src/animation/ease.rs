use crate::foundation::error::{ReelError, ReelResult};

/// Easing curves mapping normalized progress `t` in `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InSine,
    OutSine,
    InOutSine,
    /// CSS-style cubic Bezier through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`.
    Bezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Ease {
    /// Check curve parameters. Only [`Ease::Bezier`] can be invalid.
    pub fn validate(self) -> ReelResult<()> {
        if let Self::Bezier { x1, y1, x2, y2 } = self {
            if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
                return Err(ReelError::animation("bezier control points must be finite"));
            }
            if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                return Err(ReelError::animation(
                    "bezier x control points must lie in [0, 1]",
                ));
            }
        }
        Ok(())
    }

    /// Apply this curve to `t`; input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InSine => 1.0 - (t * std::f64::consts::FRAC_PI_2).cos(),
            Self::OutSine => (t * std::f64::consts::FRAC_PI_2).sin(),
            Self::InOutSine => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
            Self::Bezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }

    pub fn is_linear(self) -> bool {
        matches!(self, Self::Linear)
    }
}

fn bezier_axis(p1: f64, p2: f64, u: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
}

fn bezier_axis_slope(p1: f64, p2: f64, u: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * p1 + 6.0 * inv * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 || x >= 1.0 {
        return x;
    }

    // Newton first, bisection when the slope flattens out.
    let mut u = x;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, u) - x;
        if err.abs() < 1e-7 {
            return bezier_axis(y1, y2, u);
        }
        let slope = bezier_axis_slope(x1, x2, u);
        if slope.abs() < 1e-6 {
            break;
        }
        u = (u - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    u = x;
    for _ in 0..64 {
        let v = bezier_axis(x1, x2, u);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) / 2.0;
    }
    bezier_axis(y1, y2, u)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
