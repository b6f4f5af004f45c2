//! Redraw scheduler trait

use crate::render::Region;

/// Trait for the host's redraw-invalidation primitive
///
/// The host draws invalidated regions lazily before its next frame. Drawing
/// itself happens outside this crate.
pub trait RedrawScheduler {
    /// Mark a region as needing a redraw
    fn invalidate(&mut self, region: Region);
}
