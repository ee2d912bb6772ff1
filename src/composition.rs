use crate::{
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    render::frame::{Layer, RenderedFrame},
    render::pipeline::{self, RenderThreading},
    scene::SceneCtx,
    theme::Theme,
    timeline::sequence::{Presence, Timeline},
    timeline::transition::Side,
};

/// A registered video: identity, output format, and the timeline that fills it.
#[derive(Clone, Debug)]
pub struct Composition {
    id: String,
    fps: Fps,
    canvas: Canvas,
    duration: u64,
    theme: Theme,
    timeline: Timeline,
}

impl Composition {
    /// Validate and assemble. `duration` must equal the timeline's laid-out length.
    #[tracing::instrument(skip(theme, timeline), fields(total = timeline.total_frames()))]
    pub fn new(
        id: impl Into<String> + std::fmt::Debug,
        fps: Fps,
        canvas: Canvas,
        duration: u64,
        theme: Theme,
        timeline: Timeline,
    ) -> ReelResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ReelError::validation("composition id must be non-empty"));
        }
        fps.validate()?;
        Canvas::new(canvas.width, canvas.height)?;
        if duration == 0 {
            return Err(ReelError::validation("composition duration must be > 0"));
        }
        if duration != timeline.total_frames() {
            return Err(ReelError::validation(format!(
                "composition '{id}' declares {duration} frames but its timeline lays out {}",
                timeline.total_frames()
            )));
        }
        tracing::debug!(%id, duration, scenes = timeline.scenes().len(), "composition ready");
        Ok(Self {
            id,
            fps,
            canvas,
            duration,
            theme,
            timeline,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Whole composition as a frame range.
    pub fn range(&self) -> FrameRange {
        FrameRange::with_len(FrameIndex(0), self.duration)
    }

    /// Evaluate one global frame. Frames past the end clamp to the last frame.
    pub fn render_frame(&self, frame: FrameIndex) -> RenderedFrame {
        let state = self.timeline.resolve(frame);
        let scenes = self.timeline.scenes();

        let layers = state
            .active
            .iter()
            .map(|active| {
                let entry = &scenes[active.index];
                let ctx = SceneCtx {
                    frame: active.local_frame,
                    fps: self.fps,
                    canvas: self.canvas,
                    duration: entry.duration(),
                    theme: &self.theme,
                };
                let style = match active.presence {
                    Presence::Solo => None,
                    Presence::Exiting { join, progress } => Some((join, progress, Side::Exiting)),
                    Presence::Entering { join, progress } => {
                        Some((join, progress, Side::Entering))
                    }
                }
                .and_then(|(join, progress, side)| {
                    let t = self.timeline.transition_after(join)?;
                    Some(t.presentation().apply(progress, self.canvas, side))
                })
                .unwrap_or_default();

                Layer {
                    scene: entry.scene.name().to_string(),
                    scene_index: active.index,
                    local_frame: active.local_frame,
                    opacity: style.opacity,
                    translate: style.translate,
                    clip: style.clip,
                    tree: entry.scene.render(&ctx),
                }
            })
            .collect();

        RenderedFrame {
            frame: state.frame,
            requested: state.requested,
            layers,
        }
    }

    /// Evaluate a range of frames, sequentially or on a rayon pool; output is in frame order.
    pub fn render_frames(
        &self,
        range: FrameRange,
        threading: &RenderThreading,
    ) -> ReelResult<Vec<RenderedFrame>> {
        pipeline::render_frames(self, range, threading)
    }
}

#[cfg(test)]
#[path = "../tests/unit/composition.rs"]
mod tests;
