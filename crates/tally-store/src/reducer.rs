use std::sync::Arc;

use crate::action::Action;
use crate::state::{AppState, Counter, CounterId};

/// Reducer - pure function that produces new state from current state + action
///
/// A missing state is replaced by [`AppState::default`]. Every handled action
/// allocates a new top-level state, even when no counter matched; counters it
/// does not touch are carried over by `Arc`. Unhandled actions return the
/// input state as-is.
pub fn reduce(state: Option<Arc<AppState>>, action: &Action) -> Arc<AppState> {
    let state = state.unwrap_or_default();

    match action {
        Action::Increment { id } => {
            log::trace!("Incrementing counter {}", id);
            with_counter_updated(&state, id, |count| count.wrapping_add(1))
        }
        Action::Decrement { id } => {
            log::trace!("Decrementing counter {}", id);
            with_counter_updated(&state, id, |count| count.wrapping_sub(1))
        }
        Action::AddCounter => {
            let mut id = CounterId::generate();
            while state.contains(&id) {
                id = CounterId::generate();
            }
            log::trace!("Adding counter {}", id);

            let mut counters = state.counters.clone();
            counters.push(Arc::new(Counter::new(id)));
            Arc::new(AppState { counters })
        }
        Action::DelCounter { id } => {
            log::trace!("Deleting counter {}", id);
            let counters = state
                .counters
                .iter()
                .filter(|counter| &counter.id != id)
                .cloned()
                .collect();
            Arc::new(AppState { counters })
        }
        _ => {
            // Unhandled actions - no state change
            state
        }
    }
}

/// New state where only the counter with `id` gets a recomputed count
fn with_counter_updated(
    state: &AppState,
    id: &CounterId,
    update: impl Fn(i64) -> i64,
) -> Arc<AppState> {
    let counters = state
        .counters
        .iter()
        .map(|counter| {
            if &counter.id == id {
                Arc::new(counter.with_count(update(counter.count)))
            } else {
                Arc::clone(counter)
            }
        })
        .collect();
    Arc::new(AppState { counters })
}
