//! Event channel
//!
//! Every source funnels into one engine. Each submitted event is folded
//! into the accumulated state, the new state is dispatched to the view,
//! and any follow-up events the rules raise are drained in arrival order
//! before the next external event is accepted. The drain always settles:
//! ride events stand the water rules down for their own fold, terminal
//! phases freeze rule evaluation, and finish events reset the field.

use std::collections::VecDeque;

use crate::sim::dispatch;
use crate::sim::event::GameEvent;
use crate::sim::reducer::reduce;
use crate::sim::state::GameState;
use crate::view::GameView;

/// Owns the accumulated state, the view, and the follow-up queue.
pub struct GameEngine<V> {
    state: GameState,
    view: V,
    pending: VecDeque<GameEvent>,
}

impl<V: GameView> GameEngine<V> {
    /// Engine holding the initial state. Nothing is rendered until the
    /// first event arrives.
    pub fn new(view: V) -> Self {
        Self { state: GameState::initial(), view, pending: VecDeque::new() }
    }

    /// Latest settled state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Fold one external event, then drain every follow-up the rules raise,
    /// oldest first, before handing back the settled state.
    pub fn submit(&mut self, event: GameEvent) -> &GameState {
        self.apply(event);
        while let Some(follow_up) = self.pending.pop_front() {
            self.apply(follow_up);
        }
        &self.state
    }

    fn apply(&mut self, event: GameEvent) {
        self.state = reduce(&self.state, &event);
        let raised = dispatch::render(&self.state, &mut self.view);
        if !raised.is_empty() {
            log::debug!("{} follow-up event(s) queued", raised.len());
        }
        self.pending.extend(raised);
    }
}
