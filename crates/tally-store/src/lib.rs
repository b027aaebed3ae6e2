//! Tally store
//!
//! A minimal unidirectional state container:
//! - [`Action`] - tagged descriptor of an intended state change
//! - [`reduce`] - pure `(state, action) -> state` function over counter state
//! - [`Store`] - holds the current state, runs the reducer on every dispatch
//!   and notifies subscribers afterwards
//!
//! # Example
//!
//! ```
//! use tally_store::{reduce, Action, Store};
//!
//! let store = Store::new(reduce, None);
//! let _unsubscribe = store.subscribe(|| log::info!("state changed"));
//!
//! store.dispatch(Action::add_counter())?;
//! let id = store.get_state().counters[1].id.clone();
//! store.dispatch(Action::increment(id))?;
//!
//! assert_eq!(store.get_state().counters[1].count, 1);
//! # Ok::<(), tally_store::StoreError>(())
//! ```

pub mod action;
pub mod error;
pub mod reducer;
pub mod state;
pub mod store;

pub use action::{Action, InitAction};
pub use error::StoreError;
pub use reducer::reduce;
pub use state::{AppState, Counter, CounterId};
pub use store::{Store, StoreBuilder, Unsubscribe, WeakStore};
