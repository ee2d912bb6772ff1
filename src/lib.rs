//! Frame-driven promo video compositions.
//!
//! A [`Composition`] is a [`Timeline`] of [`Scene`]s joined by [`Transition`]s. Every output is a
//! pure function of the frame number: [`Composition::render_frame`] resolves which scenes are
//! visible, renders each one into a styled [`Node`] tree, and attaches the transition styling.
//! The resulting [`RenderedFrame`] is handed to an external renderer.
//!
//! ```no_run
//! let comp = promoreel::promo()?;
//! let frame = comp.render_frame(promoreel::FrameIndex(55));
//! assert_eq!(frame.layers.len(), 2);
//! # Ok::<(), promoreel::ReelError>(())
//! ```

#![forbid(unsafe_code)]

mod animation;
mod composition;
mod config;
mod foundation;
mod render;
mod root;
mod scene;
mod theme;
mod timeline;

pub use animation::{
    ease::Ease,
    interpolate::{Extrapolate, InterpolateOpts, Interpolator, Lerp, interpolate},
    random::{Rng64, Seed, random},
    spring::{Spring, SpringConfig},
};
pub use composition::Composition;
pub use config::{CompositionConfig, SceneItem, TimelineItem};
pub use foundation::core::{Affine, Canvas, Fps, FrameIndex, FrameRange, Rgba8, Transform2D, Vec2};
pub use foundation::error::{ReelError, ReelResult};
pub use render::{
    frame::{ClipInset, Layer, RenderedFrame},
    pipeline::{RenderThreading, render_frames},
    tree::{
        Align, Border, Direction, Edges, FlexLayout, Font, GradientStop, Node, NodeKind, Paint,
        Position, Shadow, Style, TextAlign,
    },
};
pub use root::{PROMO_ALIAS, PROMO_ID, Root, promo, promo_config};
pub use scene::{
    Scene, SceneCtx, SceneFactory, SceneRegistry,
    features::{FeatureItem, Features, FeaturesParams},
    intro::{Intro, IntroParams},
    outro::{Outro, OutroParams},
    problem::{Problem, ProblemParams},
    solution::{Solution, SolutionParams},
};
pub use theme::{ColorRole, Fonts, Palette, TextColors, Theme};
pub use timeline::{
    sequence::{
        ActiveScene, FrameState, Presence, SceneEntry, Timeline, TimelineBuilder, TransitionWindow,
    },
    transition::{
        FromEdge, Presentation, PresentationStyle, ResolvedTransition, Side, Transition,
        TransitionTiming,
    },
};
