use std::sync::Arc;

use crate::{
    animation::{
        interpolate::{InterpolateOpts, Interpolator},
        spring::{Spring, SpringConfig},
    },
    foundation::core::{Rgba8, Transform2D},
    foundation::error::{ReelError, ReelResult},
    render::tree::{Align, Direction, Edges, FlexLayout, Font, Node, Paint, Shadow},
    scene::{Scene, SceneCtx, backdrop, parse_params},
    theme::ColorRole,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureItem {
    pub text: String,
    pub icon: String,
    pub color: ColorRole,
    /// Frames to wait before this card starts entering.
    #[serde(default)]
    pub delay: u64,
}

impl FeatureItem {
    fn new(text: &str, icon: &str, color: ColorRole, delay: u64) -> Self {
        Self {
            text: text.to_string(),
            icon: icon.to_string(),
            color,
            delay,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeaturesParams {
    pub items: Vec<FeatureItem>,
    /// Horizontal offset each card slides in from, in pixels.
    pub offset_px: f64,
    pub spring: SpringConfig,
}

impl Default for FeaturesParams {
    fn default() -> Self {
        Self {
            items: vec![
                FeatureItem::new("Deep Research", "🔍", ColorRole::Primary, 0),
                FeatureItem::new("Smart Summary", "📝", ColorRole::Secondary, 10),
                FeatureItem::new("Fully Automated", "🤖", ColorRole::Accent, 20),
            ],
            offset_px: -100.0,
            spring: SpringConfig::damped(15.0),
        }
    }
}

/// Stack of feature cards, each springing in from the left after its own delay.
#[derive(Debug)]
pub struct Features {
    params: FeaturesParams,
    entrance: Spring,
    slide: Interpolator<f64>,
}

impl Features {
    pub const NAME: &'static str = "features";

    pub fn new(params: FeaturesParams) -> ReelResult<Self> {
        if params.items.is_empty() {
            return Err(ReelError::validation("features needs at least one item"));
        }
        Ok(Self {
            entrance: Spring::new(params.spring)?,
            slide: Interpolator::new(
                &[0.0, 1.0],
                &[params.offset_px, 0.0],
                InterpolateOpts::default(),
            )?,
            params,
        })
    }

    pub fn factory(params: &serde_json::Value) -> ReelResult<Arc<dyn Scene>> {
        Ok(Arc::new(Self::new(parse_params(Self::NAME, params)?)?))
    }

    /// Entrance progress of card `index` at local `frame`; 0 before its delay.
    pub fn progress(&self, index: usize, ctx: &SceneCtx<'_>) -> f64 {
        let delay = self.params.items.get(index).map_or(0, |item| item.delay);
        let elapsed = ctx.t() - delay as f64;
        self.entrance.progress(elapsed, ctx.fps)
    }

    fn card(&self, index: usize, item: &FeatureItem, ctx: &SceneCtx<'_>) -> Node {
        let colors = &ctx.theme.colors;
        let progress = self.progress(index, ctx);
        let accent = colors.get(item.color);
        // The spring may overshoot; x keeps the overshoot, opacity is clamped by the node.
        let x = self.slide.sample(progress);

        Node::block()
            .key(format!("feature-{index}"))
            .opacity(progress)
            .transform(Transform2D::translate(x, 0.0))
            .layout(FlexLayout {
                direction: Direction::Row,
                justify: Align::Start,
                align: Align::Center,
            })
            .color(colors.text.main)
            .font(Font::new(ctx.theme.fonts.main.as_str(), 50.0, 600))
            .margin(Edges::symmetric(15.0, 0.0))
            .background(Paint::solid(colors.surface))
            .padding(Edges::symmetric(20.0, 40.0))
            .corner_radius(16.0)
            .shadow(Shadow::new(0.0, 10.0, 30.0, Rgba8::BLACK.with_opacity(0.3)))
            .width(600.0)
            .border(1.0, colors.text.muted.with_alpha(0x20))
            .child(
                Node::text(item.icon.as_str())
                    .key(format!("feature-{index}-icon"))
                    .font(Font::new(ctx.theme.fonts.main.as_str(), 60.0, 600))
                    .margin(Edges::right(30.0)),
            )
            .child(
                Node::text(item.text.as_str())
                    .key(format!("feature-{index}-label"))
                    .font(Font::new(ctx.theme.fonts.main.as_str(), 50.0, 800))
                    .text_fill(Paint::linear(90.0, accent, accent.with_alpha(0x80))),
            )
    }
}

impl Scene for Features {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render(&self, ctx: &SceneCtx<'_>) -> Node {
        let cards = self
            .params
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| self.card(i, item, ctx));
        backdrop(ctx.theme.colors.background, Direction::Column).children(cards)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/features.rs"]
mod tests;
