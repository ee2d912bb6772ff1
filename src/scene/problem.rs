use std::sync::Arc;

use crate::{
    animation::{
        interpolate::{InterpolateOpts, Interpolator},
        random::random,
    },
    foundation::core::{Transform2D, Vec2},
    foundation::error::ReelResult,
    render::tree::{Direction, Font, Node, Paint, TextAlign},
    scene::{Scene, SceneCtx, backdrop, parse_params},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProblemParams {
    pub lead: String,
    pub highlight: String,
    pub tail: String,
    /// Peak jitter distance in pixels; offsets fall in `[-shake/2, shake/2)`.
    pub shake: f64,
}

impl Default for ProblemParams {
    fn default() -> Self {
        Self {
            lead: "TOO MUCH ".to_string(),
            highlight: "NOISE".to_string(),
            tail: "IN AI NEWS?".to_string(),
            shake: 20.0,
        }
    }
}

/// Alarmed headline: zooms in, jitters every frame, over a pulsing alert wash.
#[derive(Debug)]
pub struct Problem {
    params: ProblemParams,
    scale: Interpolator<f64>,
    opacity: Interpolator<f64>,
    flash: Interpolator<f64>,
}

impl Problem {
    pub const NAME: &'static str = "problem";

    pub fn new(params: ProblemParams) -> ReelResult<Self> {
        Ok(Self {
            params,
            scale: Interpolator::new(
                &[0.0, 10.0],
                &[0.8, 1.1],
                InterpolateOpts::default().clamp_right(),
            )?,
            opacity: Interpolator::new(&[0.0, 5.0], &[0.0, 1.0], InterpolateOpts::clamp())?,
            flash: Interpolator::new(
                &[0.0, 5.0, 10.0],
                &[0.05, 0.15, 0.05],
                InterpolateOpts::default(),
            )?,
        })
    }

    pub fn factory(params: &serde_json::Value) -> ReelResult<Arc<dyn Scene>> {
        Ok(Arc::new(Self::new(parse_params(Self::NAME, params)?)?))
    }

    /// Per-frame jitter; both axes are reproducible from the frame number alone.
    pub fn shake_at(&self, frame: u64) -> Vec2 {
        Vec2::new(
            (random(frame) - 0.5) * self.params.shake,
            (random(frame + 1) - 0.5) * self.params.shake,
        )
    }
}

impl Scene for Problem {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render(&self, ctx: &SceneCtx<'_>) -> Node {
        let colors = &ctx.theme.colors;
        let f = ctx.frame.0;
        let t = ctx.t();

        let scale = self.scale.sample(t);
        let shake = self.shake_at(f);
        // The jitter is applied inside the zoom, so it grows with it.
        let transform =
            Transform2D::uniform_scale(scale).with_translate(shake.x * scale, shake.y * scale);

        let flash = Node::fill()
            .key("flash")
            .absolute()
            .background(Paint::solid(colors.alert))
            .opacity(self.flash.sample((f % 10) as f64));

        let headline = Node::block()
            .key("headline")
            .color(colors.text.main)
            .font(Font::new(ctx.theme.fonts.main.as_str(), 80.0, 900))
            .text_align(TextAlign::Center)
            .line_height(1.2)
            .transform(transform)
            .opacity(self.opacity.sample(t))
            .child(Node::text(self.params.lead.as_str()))
            .child(
                Node::text(self.params.highlight.as_str())
                    .key("highlight")
                    .color(colors.alert),
            )
            .child(Node::line_break())
            .child(Node::text(self.params.tail.as_str()));

        backdrop(colors.background, Direction::Column)
            .child(flash)
            .child(headline)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/problem.rs"]
mod tests;
