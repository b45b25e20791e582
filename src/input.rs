//! Per-frame input snapshot
//!
//! The host captures key events asynchronously into whatever structure it
//! likes and distills them into one [`FrameInput`] per tick. Passing a
//! snapshot keeps the simulation free of hidden mid-frame mutation: the
//! whole tick sees one consistent view of the keyboard.

/// Input state for a single simulation tick
///
/// Held flags reflect "is the key currently down"; `*_tap` flags are
/// edge-triggered (key went down since the last tick) and must be cleared
/// by the host after the tick consumes them.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Steer left held (A / ArrowLeft)
    pub left: bool,
    /// Steer right held (D / ArrowRight)
    pub right: bool,
    /// Climb held (W / ArrowUp)
    pub up: bool,
    /// Dive held (S / ArrowDown)
    pub down: bool,
    /// Boost key held (Shift)
    pub boost: bool,
    /// Left was pressed this tick (lane switch)
    pub left_tap: bool,
    /// Right was pressed this tick (lane switch)
    pub right_tap: bool,
    /// Boost was pressed this tick (activation edge)
    pub boost_tap: bool,
}

impl FrameInput {
    /// Clear the edge-triggered flags once a tick has consumed them.
    pub fn clear_taps(&mut self) {
        self.left_tap = false;
        self.right_tap = false;
        self.boost_tap = false;
    }
}
