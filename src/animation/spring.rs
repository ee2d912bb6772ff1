//! Closed-form damped harmonic oscillator.
//!
//! A spring starts at rest at `from` and settles at `to`. Every sample is computed directly from
//! the elapsed time, so frames can be evaluated in any order without integrating history.

use crate::{
    foundation::core::Fps,
    foundation::error::{ReelError, ReelResult},
};

/// Frames scanned by [`SpringConfig::settle_frames`] before giving up.
const MAX_SETTLE_FRAMES: u64 = 100_000;

/// Physical spring parameters.
///
/// Missing fields in JSON fall back to damping 10, stiffness 100, mass 1, so a damping-only
/// config like `{ "damping": 15 }` is complete.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
    /// Never pass the end value.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Default stiffness and mass with the given damping.
    pub fn damped(damping: f64) -> Self {
        Self {
            damping,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ReelResult<()> {
        if ![self.damping, self.stiffness, self.mass]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ReelError::animation("spring parameters must be finite"));
        }
        if self.mass <= 0.0 {
            return Err(ReelError::animation("spring mass must be > 0"));
        }
        if self.stiffness <= 0.0 {
            return Err(ReelError::animation("spring stiffness must be > 0"));
        }
        if self.damping < 0.0 {
            return Err(ReelError::animation("spring damping must be >= 0"));
        }
        Ok(())
    }

    /// Undamped angular frequency `sqrt(k / m)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// `c / (2 * sqrt(k * m))`; `>= 1` means no oscillation.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Remaining displacement at `t` seconds, normalized so it starts at 1 and settles at 0.
    fn displacement(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-9 {
            (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            (-zeta * w0 * t).exp() * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else {
            let s = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - s);
            let r2 = -w0 * (zeta + s);
            let c2 = -r1 / (r2 - r1);
            let c1 = 1.0 - c2;
            c1 * (r1 * t).exp() + c2 * (r2 * t).exp()
        }
    }

    /// Upper bound of `|displacement|` from `t` onward.
    fn envelope(&self, t: f64) -> f64 {
        let zeta = self.damping_ratio();
        if zeta >= 1.0 {
            return self.displacement(t).abs();
        }
        let w0 = self.natural_frequency();
        (-zeta * w0 * t).exp() / (1.0 - zeta * zeta).sqrt()
    }

    /// Frames until the spring stays within `threshold` of its end value (progress units).
    ///
    /// Fails when the spring does not settle within a bounded horizon (e.g. zero damping).
    pub fn settle_frames(&self, fps: Fps, threshold: f64) -> ReelResult<u64> {
        self.validate()?;
        if !(threshold > 0.0 && threshold.is_finite()) {
            return Err(ReelError::animation("settle threshold must be > 0"));
        }

        let mut last_outside = None;
        for f in 0..=MAX_SETTLE_FRAMES {
            let t = fps.frames_to_secs(f);
            if self.displacement(t).abs() >= threshold {
                last_outside = Some(f);
            }
            if self.envelope(t) < threshold {
                return Ok(last_outside.map_or(0, |f| f + 1));
            }
        }
        Err(ReelError::animation(format!(
            "spring {self:?} does not settle within {MAX_SETTLE_FRAMES} frames"
        )))
    }
}

/// A validated spring moving from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    from: f64,
    to: f64,
}

impl Spring {
    /// Progress spring from 0 to 1.
    pub fn new(config: SpringConfig) -> ReelResult<Self> {
        Self::from_to(config, 0.0, 1.0)
    }

    pub fn from_to(config: SpringConfig, from: f64, to: f64) -> ReelResult<Self> {
        config.validate()?;
        if !(from.is_finite() && to.is_finite()) {
            return Err(ReelError::animation("spring endpoints must be finite"));
        }
        Ok(Self { config, from, to })
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Normalized progress at a signed frame offset. Offsets `<= 0` return exactly 0.
    pub fn progress(&self, frame: f64, fps: Fps) -> f64 {
        if frame.is_nan() || frame <= 0.0 {
            return 0.0;
        }
        let p = 1.0 - self.config.displacement(fps.signed_frames_to_secs(frame));
        if self.config.overshoot_clamping {
            p.min(1.0)
        } else {
            p
        }
    }

    /// Value at a signed frame offset; offsets `<= 0` return exactly `from`.
    pub fn sample(&self, frame: f64, fps: Fps) -> f64 {
        let p = self.progress(frame, fps);
        if p == 0.0 {
            return self.from;
        }
        self.from + (self.to - self.from) * p
    }

    /// Convenience for integer frame offsets such as `local_frame - delay`.
    pub fn sample_at(&self, frame: i64, fps: Fps) -> f64 {
        self.sample(frame as f64, fps)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
