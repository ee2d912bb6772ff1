use crate::{
    animation::ease::Ease,
    foundation::core::{Rgba8, Transform2D, Vec2},
    foundation::error::{ReelError, ReelResult},
};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with factor `t`. `t` may leave `[0, 1]` when extrapolating.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Transform2D {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            scale: <Vec2 as Lerp>::lerp(&a.scale, &b.scale, t),
            origin: <Vec2 as Lerp>::lerp(&a.origin, &b.origin, t),
        }
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// Behaviour for inputs outside the breakpoint range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the slope of the nearest segment.
    #[default]
    Extend,
    /// Hold the nearest edge value.
    Clamp,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    #[serde(default)]
    pub left: Extrapolate,
    #[serde(default)]
    pub right: Extrapolate,
    /// Shapes the interior of every segment. Extrapolated regions stay linear.
    #[serde(default)]
    pub ease: Ease,
}

impl InterpolateOpts {
    /// Clamp on both sides.
    pub fn clamp() -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
            ease: Ease::Linear,
        }
    }

    pub fn clamp_left(mut self) -> Self {
        self.left = Extrapolate::Clamp;
        self
    }

    pub fn clamp_right(mut self) -> Self {
        self.right = Extrapolate::Clamp;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Validated piecewise-linear mapping from an input scalar to `T`.
///
/// Breakpoints are checked once in [`Interpolator::new`]; [`Interpolator::sample`] is total.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolator<T> {
    input: Vec<f64>,
    output: Vec<T>,
    opts: InterpolateOpts,
}

impl<T> Interpolator<T>
where
    T: Lerp + Clone,
{
    pub fn new(input: &[f64], output: &[T], opts: InterpolateOpts) -> ReelResult<Self> {
        if input.len() < 2 {
            return Err(ReelError::animation(
                "interpolation needs at least two breakpoints",
            ));
        }
        if input.len() != output.len() {
            return Err(ReelError::animation(format!(
                "interpolation input has {} breakpoints but output has {} values",
                input.len(),
                output.len()
            )));
        }
        if !input.iter().all(|v| v.is_finite()) {
            return Err(ReelError::animation(
                "interpolation breakpoints must be finite",
            ));
        }
        if !input.windows(2).all(|w| w[0] < w[1]) {
            return Err(ReelError::animation(format!(
                "interpolation breakpoints must be strictly increasing, got {input:?}"
            )));
        }
        opts.ease.validate()?;

        Ok(Self {
            input: input.to_vec(),
            output: output.to_vec(),
            opts,
        })
    }

    /// Sample at `x`. NaN is treated as the first breakpoint.
    pub fn sample(&self, x: f64) -> T {
        let n = self.input.len();
        let first = self.input[0];
        let last = self.input[n - 1];
        let x = if x.is_nan() { first } else { x };

        if x < first {
            return match self.opts.left {
                Extrapolate::Clamp => self.output[0].clone(),
                Extrapolate::Extend => self.segment(0, x, false),
            };
        }
        if x > last {
            return match self.opts.right {
                Extrapolate::Clamp => self.output[n - 1].clone(),
                Extrapolate::Extend => self.segment(n - 2, x, false),
            };
        }

        let idx = self.input.partition_point(|b| *b <= x);
        let seg = idx.saturating_sub(1).min(n - 2);
        self.segment(seg, x, true)
    }

    /// `(first, last)` input breakpoints.
    pub fn input_range(&self) -> (f64, f64) {
        (self.input[0], self.input[self.input.len() - 1])
    }

    fn segment(&self, seg: usize, x: f64, eased: bool) -> T {
        let a = self.input[seg];
        let b = self.input[seg + 1];
        let t = (x - a) / (b - a);
        let t = if eased { self.opts.ease.apply(t) } else { t };
        T::lerp(&self.output[seg], &self.output[seg + 1], t)
    }
}

/// One-shot scalar interpolation; validates the breakpoints on every call.
pub fn interpolate(
    x: f64,
    input: &[f64],
    output: &[f64],
    opts: InterpolateOpts,
) -> ReelResult<f64> {
    Ok(Interpolator::new(input, output, opts)?.sample(x))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
