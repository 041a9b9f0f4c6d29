use std::fmt;
use std::rc::Rc;

use crate::error::SignalError;
use crate::signal::{Slot, SlotKey};


/// A re-assignable holder for at most one callable.
///
/// Unlike a [`Signal`](crate::signal::Signal), which calls any number of slots, a
/// `Function` calls a single callable, and it can be empty. Calling an empty
/// `Function` fails with [`SignalError::InvalidCall`], so check
/// [`is_assigned`](Function::is_assigned) first if that is not expected.
///
/// ```rust
/// use slot_signals::{Function, SignalError};
///
/// let mut parse: Function<&'static str, usize> = Function::empty();
/// assert_eq!(parse.call(&"1609"), Err(SignalError::InvalidCall));
///
/// parse.assign(|input| input.parse().unwrap_or(0));
/// assert_eq!(parse.call(&"1609"), Ok(1609));
///
/// parse.assign(|input| input.len());
/// assert_eq!(parse.call(&"1609"), Ok(4));
/// ```
pub struct Function<A, R> {
    callback: Option<Rc<dyn Fn(&A) -> R>>,
}

impl<A, R> Function<A, R> {
    #[inline]
    pub fn new<F>(f: F) -> Self where F: Fn(&A) -> R + 'static {
        Self {
            callback: Some(Rc::new(f)),
        }
    }

    #[inline]
    pub fn empty() -> Self {
        Self {
            callback: None,
        }
    }

    /// Replaces the current callable, if any.
    #[inline]
    pub fn assign<F>(&mut self, f: F) where F: Fn(&A) -> R + 'static {
        self.callback = Some(Rc::new(f));
    }

    #[inline]
    pub fn clear(&mut self) {
        self.callback = None;
    }

    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.callback.is_some()
    }

    pub fn call(&self, args: &A) -> Result<R, SignalError> {
        match self.callback {
            Some(ref callback) => Ok(callback(args)),
            None => Err(SignalError::InvalidCall),
        }
    }

    /// The identity of the assigned callable, shared by every clone of this `Function`.
    ///
    /// Empty functions have no identity.
    pub fn key(&self) -> Option<SlotKey> {
        self.callback.as_ref().map(|callback| {
            SlotKey::Function(Rc::as_ptr(callback) as *const () as usize)
        })
    }
}

impl<A, R> Function<A, R> where A: 'static, R: 'static {
    /// Turns the function into a slot whose result reports whether the call was possible.
    ///
    /// An empty function can be connected; the [`SignalError::InvalidCall`] only shows
    /// up when the signal is emitted.
    pub fn into_slot(self) -> Slot<A, Result<R, SignalError>> {
        let key = self.key();

        Slot::from_callback(Rc::new(move |args: &A| self.call(args)), key)
    }
}

impl<A, R> Clone for Function<A, R> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            callback: self.callback.clone(),
        }
    }
}

impl<A, R> Default for Function<A, R> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<A, R> fmt::Debug for Function<A, R> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Function")
            .field("assigned", &self.is_assigned())
            .finish()
    }
}

impl<A, R, F> From<F> for Function<A, R> where F: Fn(&A) -> R + 'static {
    #[inline]
    fn from(f: F) -> Self {
        Self::new(f)
    }
}
