use thiserror::Error;


/// Errors reported by connections and functions.
///
/// Failures raised *inside* a slot are not represented here: they reach the
/// caller of [`Signal::emit`](crate::signal::Signal::emit) unchanged (as a
/// panic), or as the slot's own error from
/// [`Signal::try_emit`](crate::signal::Signal::try_emit).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SignalError {
    /// An unassigned [`Function`](crate::Function) was called.
    #[error("call to an unassigned function")]
    InvalidCall,

    /// The connection was already disconnected, or its signal no longer exists.
    #[error("connection is no longer attached to a signal")]
    StaleConnection,
}
