use std::fmt;
use std::rc::{Rc, Weak};
use std::cell::RefCell;

use crate::combiner::{Combiner, LastValue};
use super::connection::{Connection, ConnectionBody, Registry};
use super::slot::{Slot, SlotKey};


// Prioritized slots come before `Back`, in ascending priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Position {
    Priority(i32),
    Back,
}


struct Entry<A, R> {
    body: Rc<ConnectionBody>,
    position: Position,
    slot: Slot<A, R>,
}


struct SlotList<A, R> {
    next_id: usize,
    entries: Vec<Rc<Entry<A, R>>>,
}

impl<A, R> SlotList<A, R> {
    fn new() -> Self {
        Self {
            next_id: 0,
            entries: vec![],
        }
    }

    fn insert(&mut self, entry: Entry<A, R>) {
        // Stable: goes after every entry with the same position
        let index = self.entries.partition_point(|other| other.position <= entry.position);
        self.entries.insert(index, Rc::new(entry));
    }

    fn take(&mut self, id: usize) -> Option<Rc<Entry<A, R>>> {
        let index = self.entries.iter().position(|entry| entry.body.id == id)?;
        let entry = self.entries.remove(index);
        entry.body.mark_disconnected();
        Some(entry)
    }

    fn take_matching<F>(&mut self, mut f: F) -> Vec<Rc<Entry<A, R>>> where F: FnMut(&Entry<A, R>) -> bool {
        let mut removed = vec![];

        self.entries.retain(|entry| {
            if f(&**entry) {
                entry.body.mark_disconnected();
                removed.push(entry.clone());
                false

            } else {
                true
            }
        });

        removed
    }
}

impl<A, R> Drop for SlotList<A, R> {
    fn drop(&mut self) {
        for entry in self.entries.iter() {
            entry.body.mark_disconnected();
        }
    }
}

impl<A, R> Registry for RefCell<SlotList<A, R>> {
    fn remove(&self, id: usize) -> bool {
        // The entry must outlive the borrow: dropping a slot can run a
        // ScopedConnection which disconnects from this same list.
        let removed = self.borrow_mut().take(id);
        removed.is_some()
    }
}


/// An ordered multicast dispatcher.
///
/// A `Signal<A, R, C>` has any number of slots connected to it. Each slot is a
/// `Fn(&A) -> R`. [`emit`](Signal::emit) calls every connected slot with the same
/// arguments, then reduces the results with the combiner `C`.
///
/// * Slots are called in the order they were connected, unless a priority was given:
///   slots with a priority run first, in ascending priority, and equal priorities
///   keep their connection order.
///
/// * Each dispatch works on a snapshot of the slots that were connected and not
///   blocked when it started. Slots can safely connect, disconnect, block, or emit
///   while a dispatch is running; those changes apply to the next dispatch.
///
/// * A panic inside a slot is not caught: it propagates out of `emit`, and the
///   remaining slots of that dispatch are not called.
///
/// Signatures with several arguments use a tuple for `A`, and signatures without
/// arguments use `()`.
///
/// ```rust
/// use std::rc::Rc;
/// use std::cell::RefCell;
/// use slot_signals::signal::Signal;
///
/// let output = Rc::new(RefCell::new(vec![]));
/// let signal: Signal<(&'static str, u32)> = Signal::new();
///
/// let first_output = output.clone();
/// let first = signal.connect(move |(name, age)| {
///     first_output.borrow_mut().push(format!("{} is {}", name, age));
/// });
///
/// let second_output = output.clone();
/// signal.connect(move |(name, _)| {
///     second_output.borrow_mut().push(format!("goodbye {}", name));
/// });
///
/// signal.emit(&("Alice", 30));
///
/// first.disconnect().unwrap();
///
/// signal.emit(&("Bob", 25));
///
/// assert_eq!(*output.borrow(), vec![
///     "Alice is 30".to_string(),
///     "goodbye Alice".to_string(),
///     "goodbye Bob".to_string(),
/// ]);
/// ```
pub struct Signal<A, R = (), C = LastValue> {
    slots: Rc<RefCell<SlotList<A, R>>>,
    combiner: C,
}

impl<A, R, C> Signal<A, R, C> where C: Default {
    #[inline]
    pub fn new() -> Self {
        Self::with_combiner(C::default())
    }
}

impl<A, R, C> Signal<A, R, C> {
    pub fn with_combiner(combiner: C) -> Self {
        Self {
            slots: Rc::new(RefCell::new(SlotList::new())),
            combiner,
        }
    }

    #[inline]
    pub fn combiner(&self) -> &C {
        &self.combiner
    }

    /// Replaces the combiner used by future dispatches.
    #[inline]
    pub fn set_combiner(&mut self, combiner: C) {
        self.combiner = combiner;
    }

    /// The number of connected slots, including blocked ones.
    ///
    /// Slots whose tracked receivers are gone are not counted, even before a
    /// dispatch removes them.
    pub fn num_slots(&self) -> usize {
        self.slots.borrow().entries.iter()
            .filter(|entry| !entry.body.is_expired())
            .count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_slots() == 0
    }

    /// Disconnects every slot whose identity is `key`, returning how many were removed.
    pub fn disconnect(&self, key: &SlotKey) -> usize {
        let removed = self.slots.borrow_mut().take_matching(|entry| entry.slot.key() == Some(key));

        log::trace!("disconnected {} slots matching {:?}", removed.len(), key);

        removed.len()
    }

    pub fn disconnect_all_slots(&self) {
        let removed = self.slots.borrow_mut().take_matching(|_| true);

        log::trace!("disconnected all {} slots", removed.len());
    }

    fn snapshot(&self) -> Vec<Rc<Entry<A, R>>> {
        self.slots.borrow().entries.iter()
            .filter(|entry| !entry.body.is_blocked())
            .cloned()
            .collect()
    }

    // Calls the live slots of a snapshot in order, until `f` returns `false`.
    fn dispatch<F>(&self, args: &A, mut f: F) where F: FnMut(R) -> bool {
        let snapshot = self.snapshot();
        let mut expired = vec![];

        log::trace!("dispatching to {} slots", snapshot.len());

        for entry in snapshot.iter() {
            if entry.body.is_expired() {
                expired.push(entry.body.id);
                continue;
            }

            if !entry.slot.is_enabled() {
                continue;
            }

            if !f(entry.slot.call(args)) {
                break;
            }
        }

        for id in expired {
            let removed = self.slots.borrow_mut().take(id);

            if removed.is_some() {
                log::debug!("slot {} outlived its tracked receivers and was disconnected", id);
            }
        }
    }
}

impl<A, R, C> Signal<A, R, C> where A: 'static, R: 'static {
    fn insert(&self, position: Position, mut slot: Slot<A, R>) -> Connection {
        let registry = Rc::downgrade(&self.slots) as Weak<dyn Registry>;
        let tracked = slot.take_tracked();

        let mut slots = self.slots.borrow_mut();

        let id = slots.next_id;
        slots.next_id += 1;

        let body = Rc::new(ConnectionBody::new(id, registry, tracked));
        let connection = Connection::new(&body);

        slots.insert(Entry { body, position, slot });

        log::trace!("connected slot {} at {:?}", id, position);

        connection
    }

    /// Connects `f` after every slot that is already connected without a priority.
    ///
    /// The same callable can be connected more than once, it will then be called once per connection.
    #[inline]
    pub fn connect<F>(&self, f: F) -> Connection where F: Fn(&A) -> R + 'static {
        self.connect_slot(Slot::new(f))
    }

    /// Connects `f` so that it runs in ascending `priority` order.
    ///
    /// Slots with a priority always run before slots without one. Slots with the
    /// same priority run in the order they were connected.
    #[inline]
    pub fn connect_with_priority<F>(&self, priority: i32, f: F) -> Connection where F: Fn(&A) -> R + 'static {
        self.connect_slot_with_priority(priority, Slot::new(f))
    }

    /// Connects a plain function, which can later be removed with [`disconnect_fn`](Signal::disconnect_fn).
    #[inline]
    pub fn connect_fn(&self, f: fn(&A) -> R) -> Connection {
        self.connect_slot(Slot::from_fn(f))
    }

    #[inline]
    pub fn connect_slot(&self, slot: Slot<A, R>) -> Connection {
        self.insert(Position::Back, slot)
    }

    #[inline]
    pub fn connect_slot_with_priority(&self, priority: i32, slot: Slot<A, R>) -> Connection {
        self.insert(Position::Priority(priority), slot)
    }

    /// Disconnects every connection of `f`, returning how many were removed.
    ///
    /// Only slots connected with [`connect_fn`](Signal::connect_fn) or
    /// [`Slot::from_fn`] are identified by their function.
    #[inline]
    pub fn disconnect_fn(&self, f: fn(&A) -> R) -> usize {
        self.disconnect(&SlotKey::of_fn(f))
    }
}

impl<A, R, C> Signal<A, R, C> where C: Combiner<R> {
    /// Calls every connected, non-blocked slot with `args`, and returns the combined result.
    ///
    /// With the default [`LastValue`] combiner this is the result of the last slot,
    /// or `None` if no slot was called.
    pub fn emit(&self, args: &A) -> C::Output {
        let mut results = vec![];

        self.dispatch(args, |result| {
            results.push(result);
            true
        });

        self.combiner.combine(results.into_iter())
    }
}

impl<A, T, E, C> Signal<A, Result<T, E>, C> where C: Combiner<T> {
    /// Like [`emit`](Signal::emit), but for slots which can fail.
    ///
    /// The first `Err` stops the dispatch: the remaining slots are not called and
    /// the error is returned. Otherwise the combiner reduces the `Ok` values.
    pub fn try_emit(&self, args: &A) -> Result<C::Output, E> {
        let mut results = vec![];
        let mut error = None;

        self.dispatch(args, |result| {
            match result {
                Ok(value) => {
                    results.push(value);
                    true
                },
                Err(e) => {
                    error = Some(e);
                    false
                },
            }
        });

        match error {
            Some(e) => Err(e),
            None => Ok(self.combiner.combine(results.into_iter())),
        }
    }
}

impl<A, R, C> Default for Signal<A, R, C> where C: Default {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R, C> fmt::Debug for Signal<A, R, C> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Signal")
            .field("num_slots", &self.num_slots())
            .field("combiner", &std::any::type_name::<C>())
            .finish()
    }
}
