use std::cell::{Cell, RefCell};
use std::fmt::Debug;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use crate::action::InitAction;
use crate::error::StoreError;

type Reducer<S, A> = Box<dyn Fn(Option<Arc<S>>, &A) -> Arc<S>>;
type Subscriber = Rc<dyn Fn()>;

/// Store - holds application state and runs the reduce/notify loop
///
/// `Store` is a cheap handle: clones share the same state and subscriber
/// list. A subscriber that calls back into [`Store::get_state`] or
/// [`Store::dispatch`] should capture a [`WeakStore`] from
/// [`Store::downgrade`]; a strong clone held by a subscriber keeps the store
/// alive until that subscriber is removed.
///
/// The store is single-threaded. Dispatch is synchronous: the reducer and
/// every notification have finished by the time `dispatch` returns.
pub struct Store<S, A> {
    shared: Rc<Shared<S, A>>,
    subscribers: Rc<RefCell<Subscribers>>,
}

struct Shared<S, A> {
    reducer: Reducer<S, A>,
    state: RefCell<Arc<S>>,
    reducing: Cell<bool>,
}

#[derive(Default)]
struct Subscribers {
    entries: Vec<(u64, Subscriber)>,
    next_id: u64,
}

impl Subscribers {
    fn add(&mut self, callback: Subscriber) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    fn remove(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    fn snapshot(&self) -> Vec<Subscriber> {
        self.entries
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect()
    }
}

/// Clears the reducing flag even if the reducer panics
struct ReducingGuard<'a>(&'a Cell<bool>);

impl<'a> ReducingGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for ReducingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<S, A> Store<S, A>
where
    S: 'static,
    A: InitAction + Debug + 'static,
{
    /// Create a store around `reducer`
    ///
    /// The reducer is invoked once with [`InitAction::init`] so its defaulting
    /// logic runs when no initial state is given.
    pub fn new<F>(reducer: F, initial_state: Option<Arc<S>>) -> Self
    where
        F: Fn(Option<Arc<S>>, &A) -> Arc<S> + 'static,
    {
        Self::from_boxed(Box::new(reducer), initial_state)
    }

    pub fn builder() -> StoreBuilder<S, A> {
        StoreBuilder::default()
    }

    fn from_boxed(reducer: Reducer<S, A>, initial_state: Option<Arc<S>>) -> Self {
        let state = reducer(initial_state, &A::init());
        log::debug!("Store initialized");

        Self {
            shared: Rc::new(Shared {
                reducer,
                state: RefCell::new(state),
                reducing: Cell::new(false),
            }),
            subscribers: Rc::new(RefCell::new(Subscribers::default())),
        }
    }

    /// Get the current state
    pub fn get_state(&self) -> Arc<S> {
        self.shared.state.borrow().clone()
    }

    /// Reduce `action` into a new state, then notify subscribers
    ///
    /// The new state replaces the old one unconditionally. Subscribers are
    /// called in registration order; the list is fixed when notification
    /// starts, so (un)subscribing from a callback only affects later
    /// dispatches. A dispatch issued from a subscriber runs to completion,
    /// including its own notifications, before the outer loop continues.
    pub fn dispatch(&self, action: A) -> Result<(), StoreError> {
        if self.shared.reducing.get() {
            log::error!("Rejected dispatch from inside reducer: {:?}", action);
            return Err(StoreError::DispatchInReducer);
        }

        log::debug!("Action: {:?}", action);

        let current = self.get_state();
        let next = {
            let _guard = ReducingGuard::enter(&self.shared.reducing);
            (self.shared.reducer)(Some(current), &action)
        };
        *self.shared.state.borrow_mut() = next;

        let subscribers = self.subscribers.borrow().snapshot();
        for subscriber in subscribers {
            subscriber();
        }

        Ok(())
    }
}

impl<S, A> Store<S, A> {
    /// Register a callback to run after every dispatch
    ///
    /// The same callback may be registered more than once; each registration
    /// is invoked once per dispatch and removed by its own [`Unsubscribe`].
    pub fn subscribe<F>(&self, callback: F) -> Unsubscribe
    where
        F: Fn() + 'static,
    {
        let id = self.subscribers.borrow_mut().add(Rc::new(callback));
        log::trace!("Subscriber {} registered", id);

        Unsubscribe {
            subscribers: Rc::downgrade(&self.subscribers),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().entries.len()
    }

    /// Non-owning handle to this store
    pub fn downgrade(&self) -> WeakStore<S, A> {
        WeakStore {
            shared: Rc::downgrade(&self.shared),
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

/// Non-owning store handle, see [`Store::downgrade`]
pub struct WeakStore<S, A> {
    shared: Weak<Shared<S, A>>,
    subscribers: Weak<RefCell<Subscribers>>,
}

impl<S, A> WeakStore<S, A> {
    /// The store, if any strong handle to it is still alive
    pub fn upgrade(&self) -> Option<Store<S, A>> {
        Some(Store {
            shared: self.shared.upgrade()?,
            subscribers: self.subscribers.upgrade()?,
        })
    }
}

impl<S, A> Clone for WeakStore<S, A> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
            subscribers: Weak::clone(&self.subscribers),
        }
    }
}

/// Handle returned by [`Store::subscribe`] that removes the registration
///
/// Dropping the handle keeps the subscriber registered.
#[derive(Debug, Clone)]
pub struct Unsubscribe {
    subscribers: Weak<RefCell<Subscribers>>,
    id: u64,
}

impl Unsubscribe {
    /// Remove the registration; further calls have no effect
    pub fn unsubscribe(&self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.borrow_mut().remove(self.id);
            log::trace!("Subscriber {} removed", self.id);
        }
    }
}

/// Builder for [`Store`] that rejects a missing reducer at build time
pub struct StoreBuilder<S, A> {
    reducer: Option<Reducer<S, A>>,
    initial_state: Option<Arc<S>>,
}

impl<S, A> Default for StoreBuilder<S, A> {
    fn default() -> Self {
        Self {
            reducer: None,
            initial_state: None,
        }
    }
}

impl<S, A> StoreBuilder<S, A>
where
    S: 'static,
    A: InitAction + Debug + 'static,
{
    pub fn reducer<F>(mut self, reducer: F) -> Self
    where
        F: Fn(Option<Arc<S>>, &A) -> Arc<S> + 'static,
    {
        self.reducer = Some(Box::new(reducer));
        self
    }

    pub fn initial_state(mut self, state: impl Into<Arc<S>>) -> Self {
        self.initial_state = Some(state.into());
        self
    }

    pub fn build(self) -> Result<Store<S, A>, StoreError> {
        let reducer = self.reducer.ok_or(StoreError::MissingReducer)?;
        Ok(Store::from_boxed(reducer, self.initial_state))
    }
}
