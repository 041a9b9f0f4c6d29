use std::fmt;
use std::any::Any;
use std::ops::Deref;
use std::cell::Cell;
use std::rc::{Rc, Weak};
use discard::{Discard, DiscardOnDrop};

use crate::error::SignalError;


/// The slot list of a signal, seen from a connection.
///
/// This is what lets a `Connection` stay non-generic: it only needs to be able
/// to remove its own registration.
pub(crate) trait Registry {
    /// Returns `true` if the registration was still in the list.
    fn remove(&self, id: usize) -> bool;
}


/// Shared state of a single registration.
///
/// Owned by the signal's slot list (and by in-progress dispatches), and weakly
/// referenced by every `Connection` for that registration.
pub(crate) struct ConnectionBody {
    pub(crate) id: usize,
    connected: Cell<bool>,
    blocked: Cell<bool>,
    registry: Weak<dyn Registry>,
    tracked: Vec<Weak<dyn Any>>,
}

impl ConnectionBody {
    pub(crate) fn new(id: usize, registry: Weak<dyn Registry>, tracked: Vec<Weak<dyn Any>>) -> Self {
        Self {
            id,
            connected: Cell::new(true),
            blocked: Cell::new(false),
            registry,
            tracked,
        }
    }

    /// A tracked receiver was dropped, so the slot can never run again.
    #[inline]
    pub(crate) fn is_expired(&self) -> bool {
        self.tracked.iter().any(|weak| weak.strong_count() == 0)
    }

    #[inline]
    pub(crate) fn is_connected(&self) -> bool {
        self.connected.get() && !self.is_expired()
    }

    #[inline]
    pub(crate) fn is_blocked(&self) -> bool {
        self.blocked.get()
    }

    #[inline]
    pub(crate) fn mark_disconnected(&self) {
        self.connected.set(false);
    }
}


/// The state of a [`Connection`].
///
/// `Disconnected` is terminal: nothing can bring a registration back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConnectionState {
    Connected,
    Blocked,
    Disconnected,
}


/// A handle to one slot registration, returned by every `connect` method.
///
/// The handle does not keep the signal alive. Once the signal is dropped, or the
/// registration is removed in any way, every operation returns
/// [`SignalError::StaleConnection`].
///
/// Dropping a `Connection` does *not* disconnect the slot. Use
/// [`scoped`](Connection::scoped) for that.
#[derive(Clone)]
pub struct Connection {
    body: Weak<ConnectionBody>,
}

impl Connection {
    #[inline]
    pub(crate) fn new(body: &Rc<ConnectionBody>) -> Self {
        Self {
            body: Rc::downgrade(body),
        }
    }

    fn live_body(&self) -> Result<Rc<ConnectionBody>, SignalError> {
        match self.body.upgrade() {
            Some(body) if body.is_connected() => Ok(body),
            _ => Err(SignalError::StaleConnection),
        }
    }

    /// Removes the slot from its signal.
    ///
    /// Disconnecting twice is harmless: the second call changes nothing and
    /// returns [`SignalError::StaleConnection`].
    pub fn disconnect(&self) -> Result<(), SignalError> {
        let body = self.live_body()?;

        body.mark_disconnected();

        match body.registry.upgrade() {
            Some(registry) => {
                registry.remove(body.id);
                log::trace!("disconnected slot {}", body.id);
                Ok(())
            },
            None => Err(SignalError::StaleConnection),
        }
    }

    /// Suppresses the slot until [`unblock`](Connection::unblock) is called.
    ///
    /// A blocked slot still counts towards [`Signal::num_slots`](super::Signal::num_slots).
    pub fn block(&self) -> Result<(), SignalError> {
        self.live_body()?.blocked.set(true);
        Ok(())
    }

    pub fn unblock(&self) -> Result<(), SignalError> {
        self.live_body()?.blocked.set(false);
        Ok(())
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.live_body().is_ok()
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.state() == ConnectionState::Blocked
    }

    pub fn state(&self) -> ConnectionState {
        match self.live_body() {
            Ok(body) => if body.is_blocked() {
                ConnectionState::Blocked

            } else {
                ConnectionState::Connected
            },
            Err(_) => ConnectionState::Disconnected,
        }
    }

    /// Converts into a [`ScopedConnection`], which disconnects when dropped.
    #[inline]
    pub fn scoped(self) -> ScopedConnection {
        ScopedConnection::new(self)
    }
}

impl Discard for Connection {
    #[inline]
    fn discard(self) {
        // Already being disconnected is fine here
        let _ = self.disconnect();
    }
}

impl PartialEq for Connection {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.body, &other.body)
    }
}

impl Eq for Connection {}

impl fmt::Debug for Connection {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Connection")
            .field("state", &self.state())
            .finish()
    }
}


/// A [`Connection`] which disconnects its slot when it goes out of scope.
///
/// This happens on every exit path, including early returns and panics.
///
/// ```rust
/// use slot_signals::signal::Signal;
///
/// let signal: Signal<()> = Signal::new();
///
/// {
///     let _connection = signal.connect(|_| panic!("never called")).scoped();
///     assert_eq!(signal.num_slots(), 1);
/// }
///
/// assert_eq!(signal.num_slots(), 0);
/// signal.emit(&());
/// ```
#[must_use = "The slot is disconnected as soon as the ScopedConnection is dropped"]
pub struct ScopedConnection(DiscardOnDrop<Connection>);

impl ScopedConnection {
    #[inline]
    pub fn new(connection: Connection) -> Self {
        ScopedConnection(DiscardOnDrop::new(connection))
    }

    /// Gives back the plain [`Connection`] without disconnecting the slot.
    #[inline]
    pub fn release(self) -> Connection {
        DiscardOnDrop::leak(self.0)
    }
}

impl Deref for ScopedConnection {
    type Target = Connection;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Connection> for ScopedConnection {
    #[inline]
    fn from(connection: Connection) -> Self {
        ScopedConnection::new(connection)
    }
}

impl fmt::Debug for ScopedConnection {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_tuple("ScopedConnection")
            .field(&**self)
            .finish()
    }
}
