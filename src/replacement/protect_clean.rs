use crate::{
    common::ids::FrameId,
    fault::errors::FaultResult,
    replacement::{VictimContext, random::draw_frame},
};

/// Redraws allowed while the candidate is dirty.
pub const PROTECT_CLEAN_RETRIES: usize = 100;

/// Random eviction biased towards clean pages.
///
/// A dirty candidate is redrawn up to `max_retries` times; the last draw is
/// taken as is, dirty or not. This is a bounded search, so a clean page is
/// likely but not guaranteed, and a table of only dirty pages still yields
/// a victim.
#[derive(Debug, Clone, Copy)]
pub struct ProtectClean {
    max_retries: usize,
}

impl ProtectClean {
    pub fn new(max_retries: usize) -> Self {
        Self { max_retries }
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    pub fn select_victim(&self, ctx: &mut VictimContext<'_>) -> FaultResult<FrameId> {
        let nframes = ctx.frames.len();
        let mut candidate = draw_frame(ctx.rng, nframes)?;

        for _ in 0..self.max_retries {
            if !is_dirty(ctx, candidate)? {
                break;
            }
            candidate = draw_frame(ctx.rng, nframes)?;
        }

        Ok(candidate)
    }
}

impl Default for ProtectClean {
    fn default() -> Self {
        Self::new(PROTECT_CLEAN_RETRIES)
    }
}

fn is_dirty(ctx: &VictimContext<'_>, frame: FrameId) -> FaultResult<bool> {
    let page = ctx.frames.lookup(frame)?;
    Ok(ctx.space.get_entry(page)?.is_dirty())
}
