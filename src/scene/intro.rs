use std::sync::Arc;

use crate::{
    animation::interpolate::{InterpolateOpts, Interpolator},
    foundation::core::Transform2D,
    foundation::error::{ReelError, ReelResult},
    render::tree::{Direction, Edges, Font, Node, Shadow},
    scene::{Scene, SceneCtx, backdrop, parse_params},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntroParams {
    pub title: String,
    pub subtitle: String,
    /// Frames spent on each typed character.
    pub char_frames: u64,
    /// Cursor blink period in frames.
    pub blink_period: u64,
    pub subtitle_start: f64,
    pub subtitle_end: f64,
}

impl Default for IntroParams {
    fn default() -> Self {
        Self {
            title: "Daily AI News Agent".to_string(),
            subtitle: "Intelligence, Curated Daily.".to_string(),
            char_frames: 2,
            blink_period: 15,
            subtitle_start: 40.0,
            subtitle_end: 60.0,
        }
    }
}

/// Typewriter title with a blinking cursor, then a subtitle rising into place.
#[derive(Debug)]
pub struct Intro {
    params: IntroParams,
    cursor: Interpolator<f64>,
    subtitle_opacity: Interpolator<f64>,
    subtitle_y: Interpolator<f64>,
}

impl Intro {
    pub const NAME: &'static str = "intro";

    pub fn new(params: IntroParams) -> ReelResult<Self> {
        if params.char_frames == 0 {
            return Err(ReelError::validation("intro char_frames must be > 0"));
        }
        if params.blink_period < 2 {
            return Err(ReelError::validation("intro blink_period must be >= 2"));
        }
        let period = params.blink_period as f64;
        let half = ((params.blink_period + 1) / 2) as f64;
        let window = [params.subtitle_start, params.subtitle_end];
        Ok(Self {
            cursor: Interpolator::new(
                &[0.0, half, period],
                &[1.0, 0.0, 1.0],
                InterpolateOpts::default(),
            )?,
            subtitle_opacity: Interpolator::new(&window, &[0.0, 1.0], InterpolateOpts::clamp())?,
            subtitle_y: Interpolator::new(&window, &[20.0, 0.0], InterpolateOpts::clamp())?,
            params,
        })
    }

    pub fn factory(params: &serde_json::Value) -> ReelResult<Arc<dyn Scene>> {
        Ok(Arc::new(Self::new(parse_params(Self::NAME, params)?)?))
    }

    /// Number of title characters visible at `frame`.
    pub fn typed_chars(&self, frame: u64) -> usize {
        let typed = frame / self.params.char_frames;
        usize::try_from(typed).unwrap_or(usize::MAX)
    }
}

impl Scene for Intro {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render(&self, ctx: &SceneCtx<'_>) -> Node {
        let colors = &ctx.theme.colors;
        let f = ctx.frame.0;
        let shown: String = self.params.title.chars().take(self.typed_chars(f)).collect();
        let cursor = self.cursor.sample((f % self.params.blink_period) as f64);

        let title = Node::block()
            .key("title")
            .color(colors.primary)
            .font(Font::new(ctx.theme.fonts.main.as_str(), 90.0, 800).letter_spacing(-2.0))
            .margin(Edges::bottom(20.0))
            .text_shadow(Shadow::new(0.0, 0.0, 40.0, colors.primary.with_alpha(0x40)))
            .child(Node::text(shown).key("typed"))
            .child(
                Node::text("_")
                    .key("cursor")
                    .color(colors.secondary)
                    .opacity(cursor),
            );

        let t = ctx.t();
        let subtitle = Node::block()
            .key("subtitle")
            .color(colors.text.muted)
            .font(Font::new(ctx.theme.fonts.main.as_str(), 40.0, 500))
            .opacity(self.subtitle_opacity.sample(t))
            .transform(Transform2D::translate(0.0, self.subtitle_y.sample(t)))
            .child(Node::text(self.params.subtitle.as_str()));

        backdrop(colors.background, Direction::Column)
            .child(title)
            .child(subtitle)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/intro.rs"]
mod tests;
