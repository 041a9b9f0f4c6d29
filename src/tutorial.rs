//! # Tutorial
//!
//! This tutorial walks through everything you need to know in order to use signals.
//!
//! A [`Signal`](crate::signal::Signal) is an event. Code that wants to know about the
//! event *connects* a slot to it, and code that raises the event *emits* it:
//!
//! ```rust
//! use slot_signals::signal::Signal;
//!
//! let clicked: Signal<()> = Signal::new();
//!
//! clicked.connect(|_| println!("Hello world!"));
//!
//! // Prints "Hello world!"
//! clicked.emit(&());
//! ```
//!
//! The first type parameter is the argument of the signal. Every slot receives a
//! reference to the same value. If you need several arguments, use a tuple:
//!
//! ```rust
//! use slot_signals::signal::Signal;
//!
//! let resized: Signal<(u32, u32)> = Signal::new();
//!
//! resized.connect(|(width, height)| println!("{}x{}", width, height));
//!
//! resized.emit(&(800, 600));
//! ```
//!
//! # Many slots
//!
//! The difference between a signal and a plain callback field is that a signal
//! can have any number of slots. They run in the order they were connected:
//!
//! ```rust
//! # use slot_signals::signal::Signal;
//! use std::rc::Rc;
//! use std::cell::RefCell;
//!
//! let output = Rc::new(RefCell::new(String::new()));
//! let signal: Signal<()> = Signal::new();
//!
//! let hello = output.clone();
//! signal.connect(move |_| hello.borrow_mut().push_str("Hello"));
//!
//! let world = output.clone();
//! signal.connect(move |_| world.borrow_mut().push_str(", world!"));
//!
//! assert_eq!(signal.num_slots(), 2);
//!
//! if !signal.is_empty() {
//!     signal.emit(&());
//! }
//!
//! assert_eq!(*output.borrow(), "Hello, world!");
//! ```
//!
//! If the order should not depend on when the slots were connected, give them a
//! priority. Lower priorities run first, and slots with a priority run before
//! slots without one:
//!
//! ```rust
//! # use slot_signals::signal::Signal;
//! # use std::rc::Rc;
//! # use std::cell::RefCell;
//! let output = Rc::new(RefCell::new(String::new()));
//! let signal: Signal<()> = Signal::new();
//!
//! let world = output.clone();
//! signal.connect_with_priority(1, move |_| world.borrow_mut().push_str(", world!"));
//!
//! let hello = output.clone();
//! signal.connect_with_priority(0, move |_| hello.borrow_mut().push_str("Hello"));
//!
//! signal.emit(&());
//!
//! assert_eq!(*output.borrow(), "Hello, world!");
//! ```
//!
//! # Return values
//!
//! Slots can return values. Because every slot returns its own value, the signal
//! needs a policy to turn all of them into the single value returned by `emit`.
//! That policy is the [`Combiner`](crate::combiner::Combiner), chosen with the third
//! type parameter.
//!
//! By default a signal uses [`LastValue`](crate::combiner::LastValue), which returns
//! the value of the last slot:
//!
//! ```rust
//! # use slot_signals::signal::Signal;
//! let signal: Signal<(), i32> = Signal::new();
//!
//! signal.connect(|_| 1);
//! signal.connect(|_| 2);
//!
//! assert_eq!(signal.emit(&()), Some(2));
//! ```
//!
//! Other combiners are provided, and you can write your own by implementing the
//! `Combiner` trait:
//!
//! ```rust
//! use slot_signals::signal::Signal;
//! use slot_signals::combiner::{Combiner, Minimum, Collect};
//!
//! let minimum: Signal<(), i32, Minimum> = Signal::new();
//! minimum.connect(|_| 1);
//! minimum.connect(|_| 2);
//! assert_eq!(minimum.emit(&()), Some(1));
//!
//! let all: Signal<(), i32, Collect<Vec<i32>>> = Signal::new();
//! all.connect(|_| 1);
//! all.connect(|_| 2);
//! assert_eq!(all.emit(&()), vec![1, 2]);
//!
//! struct Count;
//!
//! impl<R> Combiner<R> for Count {
//!     type Output = usize;
//!
//!     fn combine<I>(&self, results: I) -> usize where I: Iterator<Item = R> {
//!         results.count()
//!     }
//! }
//!
//! let count: Signal<(), i32, Count> = Signal::with_combiner(Count);
//! count.connect(|_| 1);
//! count.connect(|_| 2);
//! assert_eq!(count.emit(&()), 2);
//! ```
//!
//! # Connections
//!
//! Every `connect` method returns a [`Connection`](crate::signal::Connection). It can
//! temporarily block the slot, or disconnect it for good:
//!
//! ```rust
//! # use slot_signals::signal::Signal;
//! use slot_signals::signal::ConnectionState;
//!
//! let signal: Signal<(), i32> = Signal::new();
//! let connection = signal.connect(|_| 5);
//!
//! connection.block().unwrap();
//! assert_eq!(signal.emit(&()), None);
//! assert_eq!(signal.num_slots(), 1);
//!
//! connection.unblock().unwrap();
//! assert_eq!(signal.emit(&()), Some(5));
//!
//! connection.disconnect().unwrap();
//! assert_eq!(connection.state(), ConnectionState::Disconnected);
//! assert_eq!(signal.num_slots(), 0);
//! ```
//!
//! A [`ScopedConnection`](crate::signal::ScopedConnection) disconnects automatically
//! when it is dropped:
//!
//! ```rust
//! # use slot_signals::signal::Signal;
//! let signal: Signal<()> = Signal::new();
//!
//! {
//!     let _connection = signal.connect(|_| println!("never printed")).scoped();
//! }
//!
//! assert!(signal.is_empty());
//! ```
//!
//! Plain functions can be connected with `connect_fn`, and later disconnected by
//! naming the same function:
//!
//! ```rust
//! # use slot_signals::signal::Signal;
//! fn hello(_: &()) { print!("Hello") }
//! fn world(_: &()) { println!(", world!") }
//!
//! let signal: Signal<()> = Signal::new();
//! signal.connect_fn(hello);
//! signal.connect_fn(world);
//!
//! assert_eq!(signal.disconnect_fn(world), 1);
//! assert_eq!(signal.num_slots(), 1);
//! ```
//!
//! # Receivers
//!
//! Slots often call methods on some other object. If that object might be
//! destroyed before the signal, track it: the slot is then skipped and
//! disconnected as soon as the object is gone, instead of being called on a
//! dead receiver.
//!
//! ```rust
//! use std::rc::Rc;
//! use slot_signals::signal::{Signal, Slot};
//!
//! struct World;
//!
//! impl World {
//!     fn hello(&self) -> &'static str {
//!         "Hello World!"
//!     }
//! }
//!
//! let signal: Signal<(), &'static str> = Signal::new();
//!
//! {
//!     let world = Rc::new(World);
//!     let receiver = Rc::downgrade(&world);
//!
//!     signal.connect_slot(Slot::new(move |_: &()| {
//!         receiver.upgrade().map_or("", |world| world.hello())
//!     }).track(&world));
//!
//!     assert_eq!(signal.emit(&()), Some("Hello World!"));
//! }
//!
//! assert_eq!(signal.emit(&()), None);
//! assert_eq!(signal.num_slots(), 0);
//! ```
//!
//! # Functions
//!
//! When there is only ever one handler, use a [`Function`](crate::Function) instead.
//! It can be empty, so calling it returns a `Result`:
//!
//! ```rust
//! use slot_signals::{Function, SignalError};
//!
//! let f: Function<(), i32> = Function::empty();
//! assert!(!f.is_assigned());
//! assert_eq!(f.call(&()), Err(SignalError::InvalidCall));
//! ```
