use thiserror::Error;

/// Faults raised by the store
///
/// Unknown action types and actions aimed at a counter that does not exist
/// are not faults; the reducer absorbs them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Store cannot be built without a reducer")]
    MissingReducer,

    #[error("Reducers may not dispatch actions")]
    DispatchInReducer,
}
