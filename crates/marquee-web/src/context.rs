//! The state-and-delegate bundle handed to controls
//!
//! Built-in controls receive a [`PlayerContext`] as a typed prop. Custom
//! control trees get the same bundle through a Yew `ContextProvider`, which
//! replaces prop rewriting with an explicit capability: a component that
//! wants live player state opts in by consuming the context, and its own
//! props are never touched.

use std::rc::Rc;

use marquee_core::{Labels, PlayerState};
use yew::{hook, use_context};

use crate::delegate::ControlDelegate;

/// Read-only bundle of derived state, playback operations and UI copy.
///
/// Rebuilt by the root player on every render pass; the clones are cheap
/// (the delegate and labels are reference-counted) and the delegate's
/// callback identities are stable.
#[derive(Clone, PartialEq)]
pub struct PlayerContext {
    /// Derived player state, a cache of the native element's properties
    pub state: PlayerState,
    /// Playback operations routed through the root player
    pub delegate: ControlDelegate,
    /// Resolved UI copy
    pub labels: Rc<Labels>,
}

/// Hook for custom controls rendered inside a [`crate::Video`].
///
/// Returns `None` when called outside a player tree.
#[hook]
pub fn use_player() -> Option<PlayerContext> {
    use_context::<PlayerContext>()
}
