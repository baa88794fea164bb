use dioxus::prelude::*;

use crate::context::AppContext;

use super::actions::{TrackerDispatcher, use_tracker_dispatcher};
use super::state::{TrackerState, use_tracker_state};

/// Create the tracker state and dispatcher once and expose both to every
/// descendant through context.
pub fn use_tracker_provider(ctx: &AppContext) -> (TrackerState, TrackerDispatcher) {
    let state = use_tracker_state(ctx.initial_state());
    let dispatcher = use_tracker_dispatcher(state, ctx);
    use_context_provider(|| state);
    use_context_provider(|| dispatcher);
    (state, dispatcher)
}
