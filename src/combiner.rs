//! Policies for reducing the return values of one dispatch into a single value.
//!
//! A dispatch invokes every slot and collects their results in order, then hands
//! those results to the signal's [`Combiner`]. Whatever the combiner returns is
//! what [`Signal::emit`](crate::signal::Signal::emit) returns.
//!
//! ```rust
//! use slot_signals::signal::Signal;
//! use slot_signals::combiner::Minimum;
//!
//! let signal: Signal<(), i32, Minimum> = Signal::new();
//! signal.connect(|_| 1);
//! signal.connect(|_| 2);
//!
//! assert_eq!(signal.emit(&()), Some(1));
//! ```
use std::fmt;
use std::iter::{FromIterator, Sum as IterSum};
use std::marker::PhantomData;


/// Reduces the per-slot results of a dispatch.
///
/// The combiner is chosen when the signal is declared, not when it is emitted.
/// `results` yields the return value of every slot that ran, in dispatch order.
pub trait Combiner<R> {
    type Output;

    fn combine<I>(&self, results: I) -> Self::Output
        where I: Iterator<Item = R>;
}


/// Returns the value of the last slot that ran, or `None` if no slot ran.
///
/// This is the default combiner of every signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LastValue;

impl<R> Combiner<R> for LastValue {
    type Output = Option<R>;

    #[inline]
    fn combine<I>(&self, results: I) -> Self::Output where I: Iterator<Item = R> {
        results.last()
    }
}


/// Returns the smallest result, or `None` if no slot ran.
///
/// When several results are equally small, the first one wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimum;

impl<R: Ord> Combiner<R> for Minimum {
    type Output = Option<R>;

    #[inline]
    fn combine<I>(&self, results: I) -> Self::Output where I: Iterator<Item = R> {
        // `Iterator::min` keeps the first of equal elements
        results.min()
    }
}


/// Returns the largest result, or `None` if no slot ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Maximum;

impl<R: Ord> Combiner<R> for Maximum {
    type Output = Option<R>;

    #[inline]
    fn combine<I>(&self, results: I) -> Self::Output where I: Iterator<Item = R> {
        results.max()
    }
}


/// Adds all of the results together. A dispatch where no slot ran yields zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sum;

impl<R: IterSum<R>> Combiner<R> for Sum {
    type Output = R;

    #[inline]
    fn combine<I>(&self, results: I) -> Self::Output where I: Iterator<Item = R> {
        results.sum()
    }
}


/// Collects every result into any [`FromIterator`] container, e.g. `Vec<R>`.
///
/// ```rust
/// use slot_signals::signal::Signal;
/// use slot_signals::combiner::Collect;
///
/// let signal: Signal<i32, i32, Collect<Vec<i32>>> = Signal::new();
/// signal.connect(|x| x + 1);
/// signal.connect(|x| x * 10);
///
/// assert_eq!(signal.emit(&3), vec![4, 30]);
/// ```
pub struct Collect<B> {
    container: PhantomData<fn() -> B>,
}

impl<B> Collect<B> {
    #[inline]
    pub fn new() -> Self {
        Self { container: PhantomData }
    }
}

impl<B> Default for Collect<B> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Clone for Collect<B> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<B> Copy for Collect<B> {}

impl<B> fmt::Debug for Collect<B> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Collect")
            .field("container", &std::any::type_name::<B>())
            .finish()
    }
}

impl<R, B: FromIterator<R>> Combiner<R> for Collect<B> {
    type Output = B;

    #[inline]
    fn combine<I>(&self, results: I) -> Self::Output where I: Iterator<Item = R> {
        results.collect()
    }
}
