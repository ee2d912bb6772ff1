use std::sync::Arc;

use crate::{
    animation::interpolate::{InterpolateOpts, Interpolator},
    foundation::core::{Rgba8, Transform2D},
    foundation::error::{ReelError, ReelResult},
    render::tree::{Direction, Edges, Font, Node, Paint, Shadow},
    scene::{Scene, SceneCtx, backdrop, parse_params},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutroParams {
    pub headline: String,
    pub button: String,
    /// Length of one button pulse in frames.
    pub pulse_period: u64,
}

impl Default for OutroParams {
    fn default() -> Self {
        Self {
            headline: "Start Reading Today".to_string(),
            button: "SUBSCRIBE".to_string(),
            pulse_period: 40,
        }
    }
}

/// Closing call to action with a breathing, glowing button.
#[derive(Debug)]
pub struct Outro {
    params: OutroParams,
    scale: Interpolator<f64>,
    glow: Interpolator<f64>,
}

impl Outro {
    pub const NAME: &'static str = "outro";

    pub fn new(params: OutroParams) -> ReelResult<Self> {
        if params.pulse_period < 2 {
            return Err(ReelError::validation("outro pulse_period must be >= 2"));
        }
        let period = params.pulse_period as f64;
        let pulse = [0.0, period / 2.0, period];
        Ok(Self {
            scale: Interpolator::new(&pulse, &[1.0, 1.05, 1.0], InterpolateOpts::default())?,
            glow: Interpolator::new(&pulse, &[0.0, 20.0, 0.0], InterpolateOpts::default())?,
            params,
        })
    }

    pub fn factory(params: &serde_json::Value) -> ReelResult<Arc<dyn Scene>> {
        Ok(Arc::new(Self::new(parse_params(Self::NAME, params)?)?))
    }

    /// `(scale, glow)` of the button at local `frame`.
    pub fn pulse(&self, frame: u64) -> (f64, f64) {
        let phase = (frame % self.params.pulse_period) as f64;
        (self.scale.sample(phase), self.glow.sample(phase))
    }
}

/// Shadow alpha for a glow level. The rounded `glow + 20` is written as two hex digits, so the
/// alpha runs 0x20 at rest to 0x40 at the peak.
pub(crate) fn glow_alpha(glow: f64) -> u8 {
    let level = (glow + 20.0).round().clamp(0.0, 99.0) as u8;
    (level / 10) * 16 + level % 10
}

impl Scene for Outro {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render(&self, ctx: &SceneCtx<'_>) -> Node {
        let colors = &ctx.theme.colors;
        let (scale, glow) = self.pulse(ctx.frame.0);
        let shadow_color = colors.primary.with_alpha(glow_alpha(glow));

        let headline = Node::block()
            .key("headline")
            .color(colors.text.main)
            .font(Font::new(ctx.theme.fonts.main.as_str(), 60.0, 300))
            .margin(Edges::bottom(60.0))
            .child(Node::text(self.params.headline.as_str()));

        let button = Node::block()
            .key("button")
            .background(Paint::linear(135.0, colors.primary, colors.secondary))
            .color(Rgba8::WHITE)
            .padding(Edges::symmetric(25.0, 80.0))
            .font(Font::new(ctx.theme.fonts.main.as_str(), 50.0, 700))
            .corner_radius(100.0)
            .transform(Transform2D::uniform_scale(scale))
            .shadow(Shadow::new(0.0, 10.0, 40.0, shadow_color))
            .child(Node::text(self.params.button.as_str()));

        backdrop(colors.surface, Direction::Column)
            .child(headline)
            .child(button)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/outro.rs"]
mod tests;
