//! Scene-to-scene transitions: how long they last, how progress advances, and what each side looks
//! like at a given progress.

use crate::{
    animation::{
        ease::Ease,
        spring::{Spring, SpringConfig},
    },
    foundation::core::{Canvas, Fps, Vec2},
    foundation::error::{ReelError, ReelResult},
    render::frame::ClipInset,
};

/// Progress distance from 1 at which a spring transition counts as finished.
const SPRING_SETTLE_THRESHOLD: f64 = 0.005;

/// Edge of the canvas the entering scene comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FromEdge {
    FromLeft,
    FromRight,
    FromTop,
    FromBottom,
}

impl FromEdge {
    /// Unit vector pointing from the canvas centre toward this edge.
    fn outward(self) -> Vec2 {
        match self {
            Self::FromLeft => Vec2::new(-1.0, 0.0),
            Self::FromRight => Vec2::new(1.0, 0.0),
            Self::FromTop => Vec2::new(0.0, -1.0),
            Self::FromBottom => Vec2::new(0.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Presentation {
    /// Entering scene pushes the exiting one off the opposite edge.
    Slide { direction: FromEdge },
    /// Complementary opacities: exiting `1 - p`, entering `p`.
    Fade,
    /// Entering scene is revealed starting at `direction`; the exiting scene stays put beneath it.
    Wipe { direction: FromEdge },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransitionTiming {
    Linear {
        duration_frames: u64,
        #[serde(default)]
        ease: Ease,
    },
    /// Spring-driven progress. Without an explicit duration the transition lasts until the spring
    /// settles; with one, the spring is time-stretched to fit.
    Spring {
        #[serde(default)]
        config: SpringConfig,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration_frames: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    pub presentation: Presentation,
    pub timing: TransitionTiming,
}

/// Which neighbour a presentation style is computed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Exiting,
    Entering,
}

/// Layer styling produced by a presentation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationStyle {
    pub opacity: f64,
    pub translate: Vec2,
    pub clip: Option<ClipInset>,
}

impl Default for PresentationStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate: Vec2::ZERO,
            clip: None,
        }
    }
}

impl Transition {
    pub fn linear(presentation: Presentation, duration_frames: u64) -> Self {
        Self {
            presentation,
            timing: TransitionTiming::Linear {
                duration_frames,
                ease: Ease::Linear,
            },
        }
    }

    pub fn slide(direction: FromEdge, duration_frames: u64) -> Self {
        Self::linear(Presentation::Slide { direction }, duration_frames)
    }

    pub fn fade(duration_frames: u64) -> Self {
        Self::linear(Presentation::Fade, duration_frames)
    }

    pub fn wipe(direction: FromEdge, duration_frames: u64) -> Self {
        Self::linear(Presentation::Wipe { direction }, duration_frames)
    }

    /// Validate and fix the duration for `fps`.
    pub fn resolve(&self, fps: Fps) -> ReelResult<ResolvedTransition> {
        let (duration, curve) = match self.timing {
            TransitionTiming::Linear {
                duration_frames,
                ease,
            } => {
                ease.validate()?;
                (duration_frames, Curve::Eased(ease))
            }
            TransitionTiming::Spring {
                config,
                duration_frames,
            } => {
                let spring = Spring::new(config)?;
                let natural = config.settle_frames(fps, SPRING_SETTLE_THRESHOLD)?;
                let duration = duration_frames.unwrap_or(natural);
                let stretch = if duration == 0 {
                    1.0
                } else {
                    natural as f64 / duration as f64
                };
                (duration, Curve::Spring { spring, fps, stretch })
            }
        };
        if duration == 0 {
            return Err(ReelError::validation("transition duration must be > 0"));
        }
        Ok(ResolvedTransition {
            presentation: self.presentation,
            duration,
            curve,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Curve {
    Eased(Ease),
    Spring { spring: Spring, fps: Fps, stretch: f64 },
}

/// A transition with its duration fixed for one frame rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedTransition {
    presentation: Presentation,
    duration: u64,
    curve: Curve,
}

impl ResolvedTransition {
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Progress in `[0, 1]` at frame `k` of the overlap window (`0 <= k < duration`).
    pub fn progress(&self, k: u64) -> f64 {
        let p = match self.curve {
            Curve::Eased(ease) => ease.apply(k as f64 / self.duration as f64),
            Curve::Spring {
                spring,
                fps,
                stretch,
            } => spring.progress(k as f64 * stretch, fps),
        };
        p.clamp(0.0, 1.0)
    }
}

impl Presentation {
    /// Styling for `side` at `progress`.
    pub fn apply(self, progress: f64, canvas: Canvas, side: Side) -> PresentationStyle {
        let p = progress.clamp(0.0, 1.0);
        match (self, side) {
            (Self::Fade, Side::Exiting) => PresentationStyle {
                opacity: 1.0 - p,
                ..PresentationStyle::default()
            },
            (Self::Fade, Side::Entering) => PresentationStyle {
                opacity: p,
                ..PresentationStyle::default()
            },
            (Self::Slide { direction }, side) => {
                let extent = canvas.size();
                let out = direction.outward();
                let unit = Vec2::new(out.x * extent.x, out.y * extent.y);
                let translate = match side {
                    Side::Entering => unit * (1.0 - p),
                    Side::Exiting => unit * -p,
                };
                PresentationStyle {
                    translate,
                    ..PresentationStyle::default()
                }
            }
            (Self::Wipe { .. }, Side::Exiting) => PresentationStyle::default(),
            (Self::Wipe { direction }, Side::Entering) => {
                let hidden = 1.0 - p;
                let clip = match direction {
                    FromEdge::FromLeft => ClipInset {
                        right: hidden,
                        ..ClipInset::default()
                    },
                    FromEdge::FromRight => ClipInset {
                        left: hidden,
                        ..ClipInset::default()
                    },
                    FromEdge::FromTop => ClipInset {
                        bottom: hidden,
                        ..ClipInset::default()
                    },
                    FromEdge::FromBottom => ClipInset {
                        top: hidden,
                        ..ClipInset::default()
                    },
                };
                PresentationStyle {
                    clip: (!clip.is_empty()).then_some(clip),
                    ..PresentationStyle::default()
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/transition.rs"]
mod tests;
