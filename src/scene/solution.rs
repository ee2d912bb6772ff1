use std::sync::Arc;

use crate::{
    animation::{
        interpolate::{InterpolateOpts, Interpolator},
        spring::{Spring, SpringConfig},
    },
    foundation::core::{Rgba8, Transform2D},
    foundation::error::ReelResult,
    render::tree::{Direction, Edges, Font, Node, Paint, Shadow, TextAlign},
    scene::{Scene, SceneCtx, backdrop, parse_params},
};

const SIGNAL_GRADIENT_END: Rgba8 = Rgba8::rgb(0x4A, 0xDE, 0x80);

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolutionParams {
    pub lines: [String; 3],
    /// Vertical distance the text floats up from, in pixels.
    pub rise_px: f64,
    pub spring: SpringConfig,
}

impl Default for SolutionParams {
    fn default() -> Self {
        Self {
            lines: [
                "WE CURATE".to_string(),
                "THE SIGNAL".to_string(),
                "FOR YOU".to_string(),
            ],
            rise_px: 50.0,
            spring: SpringConfig::damped(12.0),
        }
    }
}

/// Three-line answer floating up on a spring over a soft green glow.
#[derive(Debug)]
pub struct Solution {
    params: SolutionParams,
    opacity: Interpolator<f64>,
    rise: Spring,
}

impl Solution {
    pub const NAME: &'static str = "solution";

    pub fn new(params: SolutionParams) -> ReelResult<Self> {
        Ok(Self {
            opacity: Interpolator::new(&[0.0, 10.0], &[0.0, 1.0], InterpolateOpts::clamp())?,
            rise: Spring::from_to(params.spring, params.rise_px, 0.0)?,
            params,
        })
    }

    pub fn factory(params: &serde_json::Value) -> ReelResult<Arc<dyn Scene>> {
        Ok(Arc::new(Self::new(parse_params(Self::NAME, params)?)?))
    }
}

impl Scene for Solution {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render(&self, ctx: &SceneCtx<'_>) -> Node {
        let colors = &ctx.theme.colors;
        let t = ctx.t();
        let [first, signal, last] = &self.params.lines;

        let glow = Node::block()
            .key("glow")
            .absolute()
            .z(0)
            .size(600.0, 600.0)
            .corner_radius(300.0)
            .background(Paint::radial_fade(colors.success.with_alpha(0x20), 0.7))
            .blur(40.0);

        let text = Node::block()
            .key("message")
            .z(1)
            .color(colors.text.main)
            .font(Font::new(ctx.theme.fonts.main.as_str(), 70.0, 800))
            .text_align(TextAlign::Center)
            .padding(Edges::all(40.0))
            .text_shadow(Shadow::new(0.0, 4.0, 20.0, Rgba8::BLACK.with_opacity(0.5)))
            .opacity(self.opacity.sample(t))
            .transform(Transform2D::translate(0.0, self.rise.sample(t, ctx.fps)))
            .child(Node::text(first.as_str()))
            .child(Node::line_break())
            .child(
                Node::text(signal.as_str())
                    .key("signal")
                    .color(colors.success)
                    .text_fill(Paint::linear(45.0, colors.success, SIGNAL_GRADIENT_END)),
            )
            .child(Node::line_break())
            .child(Node::text(last.as_str()));

        backdrop(colors.background, Direction::Column)
            .child(glow)
            .child(text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/solution.rs"]
mod tests;
