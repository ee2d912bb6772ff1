//! Styled visual tree emitted by scenes for one frame.
//!
//! The tree is the hand-off point to an external renderer. It carries resolved, frame-specific
//! style values only; nothing in it depends on time.

use crate::foundation::core::{Rgba8, Transform2D, Vec2};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Node {
    /// Stable identifier for lookups (`find`) and renderer diffing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub kind: NodeKind,
    pub style: Style,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum NodeKind {
    /// Covers the whole parent (absolute fill).
    Fill,
    Block,
    Text(String),
    LineBreak,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[default]
    Flow,
    Absolute,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Row,
    Column,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FlexLayout {
    pub direction: Direction,
    pub justify: Align,
    pub align: Align,
}

impl FlexLayout {
    /// Children centred on both axes.
    pub fn centered(direction: Direction) -> Self {
        Self {
            direction,
            justify: Align::Center,
            align: Align::Center,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    pub fn all(v: f64) -> Self {
        Self::symmetric(v, v)
    }

    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn bottom(v: f64) -> Self {
        Self {
            bottom: v,
            ..Self::default()
        }
    }

    pub fn right(v: f64) -> Self {
        Self {
            right: v,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Font {
    pub family: String,
    pub size_px: f64,
    pub weight: u16,
    #[serde(skip_serializing_if = "is_zero")]
    pub letter_spacing_px: f64,
}

impl Font {
    pub fn new(family: impl Into<String>, size_px: f64, weight: u16) -> Self {
        Self {
            family: family.into(),
            size_px,
            weight,
            letter_spacing_px: 0.0,
        }
    }

    pub fn letter_spacing(mut self, px: f64) -> Self {
        self.letter_spacing_px = px;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    pub color: Rgba8,
    pub offset: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    Solid { color: Rgba8 },
    LinearGradient { angle_deg: f64, stops: Vec<GradientStop> },
    RadialGradient { stops: Vec<GradientStop> },
}

impl Paint {
    pub fn solid(color: Rgba8) -> Self {
        Self::Solid { color }
    }

    /// Two-stop linear gradient from `a` at 0 to `b` at 1.
    pub fn linear(angle_deg: f64, a: Rgba8, b: Rgba8) -> Self {
        Self::LinearGradient {
            angle_deg,
            stops: vec![
                GradientStop {
                    color: a,
                    offset: 0.0,
                },
                GradientStop {
                    color: b,
                    offset: 1.0,
                },
            ],
        }
    }

    /// Radial falloff from `center` to transparent at `extent`.
    pub fn radial_fade(center: Rgba8, extent: f64) -> Self {
        Self::RadialGradient {
            stops: vec![
                GradientStop {
                    color: center,
                    offset: 0.0,
                },
                GradientStop {
                    color: Rgba8::TRANSPARENT,
                    offset: extent,
                },
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Shadow {
    pub offset: Vec2,
    pub blur_px: f64,
    pub color: Rgba8,
}

impl Shadow {
    pub fn new(dx: f64, dy: f64, blur_px: f64, color: Rgba8) -> Self {
        Self {
            offset: Vec2::new(dx, dy),
            blur_px,
            color,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Border {
    pub width_px: f64,
    pub color: Rgba8,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Style {
    pub opacity: f64, // always in [0, 1]
    #[serde(skip_serializing_if = "Transform2D::is_identity")]
    pub transform: Transform2D,
    #[serde(skip_serializing_if = "is_flow")]
    pub position: Position,
    #[serde(skip_serializing_if = "is_zero_i32")]
    pub z_index: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba8>,
    /// Fills glyphs with a paint instead of `color` (gradient text).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_fill: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<FlexLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Edges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Edges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_shadow: Option<Shadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_px: Option<f64>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            transform: Transform2D::default(),
            position: Position::Flow,
            z_index: 0,
            color: None,
            text_fill: None,
            background: None,
            font: None,
            text_align: None,
            line_height: None,
            layout: None,
            width: None,
            height: None,
            padding: None,
            margin: None,
            corner_radius: None,
            border: None,
            shadow: None,
            text_shadow: None,
            blur_px: None,
        }
    }
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

fn is_zero_i32(v: &i32) -> bool {
    *v == 0
}

fn is_flow(p: &Position) -> bool {
    *p == Position::Flow
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            key: None,
            kind,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    pub fn fill() -> Self {
        Self::new(NodeKind::Fill)
    }

    pub fn block() -> Self {
        Self::new(NodeKind::Block)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(text.into()))
    }

    pub fn line_break() -> Self {
        Self::new(NodeKind::LineBreak)
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set opacity, clamped to `[0, 1]`. NaN becomes fully transparent.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        self
    }

    pub fn transform(mut self, transform: Transform2D) -> Self {
        self.style.transform = transform;
        self
    }

    pub fn absolute(mut self) -> Self {
        self.style.position = Position::Absolute;
        self
    }

    pub fn z(mut self, z_index: i32) -> Self {
        self.style.z_index = z_index;
        self
    }

    pub fn color(mut self, color: Rgba8) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn text_fill(mut self, paint: Paint) -> Self {
        self.style.text_fill = Some(paint);
        self
    }

    pub fn background(mut self, paint: Paint) -> Self {
        self.style.background = Some(paint);
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.style.font = Some(font);
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.style.text_align = Some(align);
        self
    }

    pub fn line_height(mut self, line_height: f64) -> Self {
        self.style.line_height = Some(line_height);
        self
    }

    pub fn layout(mut self, layout: FlexLayout) -> Self {
        self.style.layout = Some(layout);
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.style.width = Some(width);
        self.style.height = Some(height);
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.style.width = Some(width);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.style.padding = Some(padding);
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.style.margin = Some(margin);
        self
    }

    pub fn corner_radius(mut self, radius: f64) -> Self {
        self.style.corner_radius = Some(radius);
        self
    }

    pub fn border(mut self, width_px: f64, color: Rgba8) -> Self {
        self.style.border = Some(Border { width_px, color });
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.style.shadow = Some(shadow);
        self
    }

    pub fn text_shadow(mut self, shadow: Shadow) -> Self {
        self.style.text_shadow = Some(shadow);
        self
    }

    pub fn blur(mut self, px: f64) -> Self {
        self.style.blur_px = Some(px);
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first pre-order walk.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// First node (pre-order) carrying `key`.
    pub fn find(&self, key: &str) -> Option<&Node> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(key))
    }

    /// Concatenated text of this subtree; line breaks become `\n`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |n| match &n.kind {
            NodeKind::Text(s) => out.push_str(s),
            NodeKind::LineBreak => out.push('\n'),
            NodeKind::Fill | NodeKind::Block => {}
        });
        out
    }

    pub fn node_count(&self) -> usize {
        let mut n = 0;
        self.walk(&mut |_| n += 1);
        n
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/tree.rs"]
mod tests;
