use crate::foundation::error::{ReelError, ReelResult};

pub use kurbo::{Affine, Vec2};

/// 0-based frame index, either in composition timeline space or scene-local space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> ReelResult<Self> {
        if start.0 > end.0 {
            return Err(ReelError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Range of `len` frames beginning at `start`.
    pub fn with_len(start: FrameIndex, len: u64) -> Self {
        Self {
            start,
            end: FrameIndex(start.0.saturating_add(len)),
        }
    }

    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Return `true` when `f` is inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Clamp a frame index into this range. Empty ranges clamp to `start`.
    pub fn clamp(self, f: FrameIndex) -> FrameIndex {
        if self.is_empty() {
            return self.start;
        }
        let max_inclusive = self.end.0.saturating_sub(1);
        FrameIndex(f.0.clamp(self.start.0, max_inclusive))
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> ReelResult<Self> {
        let fps = Self { num, den };
        fps.validate()?;
        Ok(fps)
    }

    /// Integer frame rate, e.g. `Fps::whole(30)`.
    pub fn whole(num: u32) -> ReelResult<Self> {
        Self::new(num, 1)
    }

    pub fn validate(self) -> ReelResult<()> {
        if self.den == 0 {
            return Err(ReelError::validation("Fps den must be > 0"));
        }
        if self.num == 0 {
            return Err(ReelError::validation("Fps num must be > 0"));
        }
        Ok(())
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Signed frame offsets map to signed seconds; used by springs sampled before their start.
    pub fn signed_frames_to_secs(self, frames: f64) -> f64 {
        frames * self.frame_duration_secs()
    }

    /// Convert seconds to frame count using floor semantics.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> ReelResult<Self> {
        if width == 0 || height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Canvas extents as a vector, used by slide presentations.
    pub fn size(self) -> Vec2 {
        Vec2::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Straight-alpha RGBA8 colour. Serialized as `#RRGGBB` or `#RRGGBBAA`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(s: &str) -> ReelResult<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ReelError::validation(format!(
                "invalid colour '{s}' (expected #RRGGBB or #RRGGBBAA)"
            )));
        }
        let channel = |i: usize| -> ReelResult<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| ReelError::validation(format!("invalid colour '{s}': {e}")))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// `#RRGGBB` for opaque colours, `#RRGGBBAA` otherwise.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Replace alpha with `opacity` in `[0, 1]` (clamped).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.with_alpha(a)
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = ReelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_hex()
    }
}

/// Element-local 2D transform: scale about `origin`, then translate.
///
/// `origin` is a fraction of the element's own box, so `(0.5, 0.5)` pivots on its centre whatever
/// size layout gives it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform2D {
    pub translate: Vec2,
    pub scale: Vec2,
    pub origin: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: Vec2::new(1.0, 1.0),
            origin: Vec2::new(0.5, 0.5),
        }
    }
}

impl Transform2D {
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            translate: Vec2::new(x, y),
            ..Self::default()
        }
    }

    /// Uniform scale about the box centre.
    pub fn uniform_scale(s: f64) -> Self {
        Self {
            scale: Vec2::new(s, s),
            ..Self::default()
        }
    }

    pub fn with_translate(mut self, x: f64, y: f64) -> Self {
        self.translate = Vec2::new(x, y);
        self
    }

    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin = Vec2::new(x, y);
        self
    }

    pub fn is_identity(&self) -> bool {
        self.translate == Vec2::ZERO && self.scale == Vec2::new(1.0, 1.0)
    }

    /// Resolve against a laid-out box of `size`, in the box's local coordinates.
    pub fn to_affine(self, size: Vec2) -> Affine {
        let pivot = Vec2::new(self.origin.x * size.x, self.origin.y * size.y);
        Affine::translate(self.translate + pivot)
            * Affine::scale_non_uniform(self.scale.x, self.scale.y)
            * Affine::translate(-pivot)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
