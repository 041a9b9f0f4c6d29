use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::rc::{Rc, Weak};


/// Identity of a slot, used by [`Signal::disconnect`](super::Signal::disconnect).
///
/// Two slots are equal only if their keys are equal. Closures connected with
/// [`Signal::connect`](super::Signal::connect) have no key, so they can only be
/// removed through their [`Connection`](super::Connection).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotKey {
    /// Address of a function pointer, or of the shared callable of a [`Function`](crate::Function).
    #[cfg_attr(feature = "serde", serde(skip))]
    Function(usize),
    /// An explicit, caller-chosen name.
    Named(Cow<'static, str>),
}

impl SlotKey {
    /// The key of a plain function.
    ///
    /// The same function always produces the same key, so a function connected
    /// several times is removed everywhere by a single disconnect.
    #[inline]
    pub fn of_fn<A, R>(f: fn(&A) -> R) -> Self {
        SlotKey::Function(f as usize)
    }

    #[inline]
    pub fn named<N>(name: N) -> Self where N: Into<Cow<'static, str>> {
        SlotKey::Named(name.into())
    }
}

impl From<&'static str> for SlotKey {
    #[inline]
    fn from(name: &'static str) -> Self {
        SlotKey::named(name)
    }
}

impl From<String> for SlotKey {
    #[inline]
    fn from(name: String) -> Self {
        SlotKey::named(name)
    }
}


pub(crate) type Callback<A, R> = Rc<dyn Fn(&A) -> R>;


/// A handler that can be connected to a [`Signal`](super::Signal).
///
/// Most of the time you don't need this: [`Signal::connect`](super::Signal::connect)
/// accepts a closure directly. A `Slot` is useful when the handler needs an identity,
/// or when it should stop being called once some receiver is gone.
///
/// ```rust
/// use std::rc::Rc;
/// use std::cell::Cell;
/// use slot_signals::signal::{Signal, Slot};
///
/// struct Counter {
///     hits: Cell<u32>,
/// }
///
/// let signal: Signal<()> = Signal::new();
/// let counter = Rc::new(Counter { hits: Cell::new(0) });
///
/// let weak = Rc::downgrade(&counter);
///
/// signal.connect_slot(Slot::new(move |_: &()| {
///     if let Some(counter) = weak.upgrade() {
///         counter.hits.set(counter.hits.get() + 1);
///     }
/// }).track(&counter));
///
/// signal.emit(&());
/// assert_eq!(counter.hits.get(), 1);
///
/// drop(counter);
///
/// // The slot is skipped and disconnected, because `counter` no longer exists
/// signal.emit(&());
/// assert_eq!(signal.num_slots(), 0);
/// ```
pub struct Slot<A, R> {
    pub(crate) callback: Callback<A, R>,
    pub(crate) key: Option<SlotKey>,
    tracked: Vec<Weak<dyn Any>>,
    alive: Option<Box<dyn Fn() -> bool>>,
}

impl<A, R> Slot<A, R> {
    pub fn new<F>(callback: F) -> Self where F: Fn(&A) -> R + 'static {
        Self::from_callback(Rc::new(callback), None)
    }

    /// A slot for a plain function, identified by that function.
    pub fn from_fn(f: fn(&A) -> R) -> Self where A: 'static, R: 'static {
        Self::from_callback(Rc::new(f), Some(SlotKey::of_fn(f)))
    }

    pub(crate) fn from_callback(callback: Callback<A, R>, key: Option<SlotKey>) -> Self {
        Self {
            callback,
            key,
            tracked: vec![],
            alive: None,
        }
    }

    /// Gives the slot an explicit identity, replacing any previous one.
    #[inline]
    pub fn named<N>(mut self, name: N) -> Self where N: Into<Cow<'static, str>> {
        self.key = Some(SlotKey::named(name));
        self
    }

    /// The slot stays connected only while `receiver` is alive.
    ///
    /// Only a weak reference is kept, so the slot never extends the receiver's lifetime.
    /// Can be called multiple times, the slot expires as soon as any tracked receiver is dropped.
    /// An expired slot reports itself as disconnected right away, and is removed from
    /// the signal by the next dispatch.
    #[inline]
    pub fn track<T>(mut self, receiver: &Rc<T>) -> Self where T: 'static {
        self.tracked.push(Rc::downgrade(receiver) as Weak<dyn Any>);
        self
    }

    /// The slot is skipped by every dispatch where `alive` returns `false`.
    ///
    /// Unlike [`track`](Slot::track) this does not disconnect the slot: it is called
    /// again by later dispatches once `alive` returns `true`.
    #[inline]
    pub fn alive_while<F>(mut self, alive: F) -> Self where F: Fn() -> bool + 'static {
        self.alive = Some(Box::new(alive));
        self
    }

    #[inline]
    pub fn key(&self) -> Option<&SlotKey> {
        self.key.as_ref()
    }

    // Connecting moves the receivers into the connection
    #[inline]
    pub(crate) fn take_tracked(&mut self) -> Vec<Weak<dyn Any>> {
        std::mem::replace(&mut self.tracked, vec![])
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.alive.as_ref().map_or(true, |alive| alive())
    }

    #[inline]
    pub(crate) fn call(&self, args: &A) -> R {
        (self.callback)(args)
    }
}

impl<A, R> fmt::Debug for Slot<A, R> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Slot")
            .field("key", &self.key)
            .field("tracked", &self.tracked.len())
            .field("alive_while", &self.alive.is_some())
            .finish()
    }
}
