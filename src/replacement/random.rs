use rand::{Rng, rngs::StdRng};

use crate::{
    common::ids::FrameId,
    fault::errors::{FaultError, FaultResult},
    replacement::VictimContext,
};

/// Uniform draw from `[0, nframes)`.
pub fn draw_frame(rng: &mut StdRng, nframes: usize) -> FaultResult<FrameId> {
    if nframes == 0 {
        return Err(FaultError::invariant("victim requested from an empty frame table"));
    }
    Ok(FrameId(rng.random_range(0..nframes)))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomVictim;

impl RandomVictim {
    pub fn select_victim(&self, ctx: &mut VictimContext<'_>) -> FaultResult<FrameId> {
        draw_frame(ctx.rng, ctx.frames.len())
    }
}
