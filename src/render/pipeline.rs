use rayon::prelude::*;

use crate::{
    composition::Composition,
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    render::frame::RenderedFrame,
};

/// How [`render_frames`] spreads work.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    pub parallel: bool,
    /// Frames handed to the pool per batch.
    pub chunk_size: usize,
    /// Worker count; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Evaluate every frame in `range`, returned in frame order.
///
/// Frame evaluation is pure, so the parallel path yields exactly what the sequential one does.
#[tracing::instrument(skip(comp, threading), fields(comp = comp.id(), parallel = threading.parallel))]
pub fn render_frames(
    comp: &Composition,
    range: FrameRange,
    threading: &RenderThreading,
) -> ReelResult<Vec<RenderedFrame>> {
    if range.is_empty() {
        return Err(ReelError::validation("render range must be non-empty"));
    }
    if range.end.0 > comp.duration() {
        return Err(ReelError::evaluation(format!(
            "render range {}..{} exceeds composition length {}",
            range.start.0,
            range.end.0,
            comp.duration()
        )));
    }

    if !threading.parallel {
        return Ok((range.start.0..range.end.0)
            .map(|f| comp.render_frame(FrameIndex(f)))
            .collect());
    }

    let pool = build_thread_pool(threading.threads)?;
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);

    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let mut frames = pool.install(|| {
            (chunk_start..chunk_end)
                .into_par_iter()
                .map(|f| comp.render_frame(FrameIndex(f)))
                .collect::<Vec<_>>()
        });
        out.append(&mut frames);
        chunk_start = chunk_end;
    }
    tracing::debug!(frames = out.len(), "range rendered");

    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}
