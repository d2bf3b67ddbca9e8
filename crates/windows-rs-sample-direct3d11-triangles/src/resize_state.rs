use tracing::debug;

use crate::windy_error::MyResult;

/// Whether the swap chain still matches the window.
///
/// Size notifications only mark the state; the rebuild happens on the next idle tick so
/// no GPU work runs inside the window procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeState {
    #[default]
    Stable,
    ResizePending,
}

impl ResizeState {
    /// Any size notification, including one that leaves the size unchanged.
    pub fn on_size_changed(&mut self) {
        *self = Self::ResizePending;
    }

    pub fn is_pending(self) -> bool {
        self == Self::ResizePending
    }
}

/// The swap-chain operations a resize needs, in the order they must run.
pub trait SwapChainTarget {
    fn unbind_render_targets(&mut self);
    /// Must drop the last reference to the back buffer before `resize_back_buffers`.
    fn release_render_target_view(&mut self);
    fn resize_back_buffers(&mut self) -> MyResult<()>;
    fn rebuild_render_target_view(&mut self) -> MyResult<()>;
}

/// Runs the deferred rebuild if one is pending. Returns whether it ran.
pub fn apply_pending_resize<T: SwapChainTarget>(
    state: &mut ResizeState,
    target: &mut T,
) -> MyResult<bool> {
    if !state.is_pending() {
        return Ok(false);
    }
    target.unbind_render_targets();
    target.release_render_target_view();
    target.resize_back_buffers()?;
    target.rebuild_render_target_view()?;
    *state = ResizeState::Stable;
    debug!("Swap chain resized");
    Ok(true)
}
