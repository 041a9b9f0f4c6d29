use std::rc::Rc;
use std::io::Write;
use slot_signals::Function;
use slot_signals::signal::{Signal, Slot};
use slot_signals::combiner::{Minimum, Collect};


fn hello_world(_: &()) {
    println!("Hello world!");
}

fn hello(_: &()) {
    print!("Hello");
    let _ = std::io::stdout().flush();
}

fn world(_: &()) {
    println!(", world!");
}

fn one(_: &()) -> i32 {
    1
}

fn two(_: &()) -> i32 {
    2
}


fn single_slot() {
    println!("single slot");

    print!("signal: ");
    let signal: Signal<()> = Signal::new();
    signal.connect_fn(hello_world);
    signal.emit(&());

    print!("function: ");
    let function: Function<(), ()> = Function::new(hello_world);

    if let Err(error) = function.call(&()) {
        println!("{}", error);
    }
}


fn ordered_slots() {
    println!("ordered slots");

    let signal: Signal<()> = Signal::new();
    signal.connect_fn(hello);
    signal.connect_fn(world);

    println!("{}", signal.num_slots());

    if !signal.is_empty() {
        signal.emit(&());
    }

    signal.disconnect_fn(world);
    signal.emit(&());
    println!();

    let signal: Signal<()> = Signal::new();
    signal.connect_with_priority(1, world);
    signal.connect_with_priority(0, hello);
    signal.emit(&());
}


fn combined_results() {
    println!("combined results");

    let signal: Signal<(), i32, Minimum> = Signal::new();
    signal.connect_fn(one);
    signal.connect_fn(two);

    if let Some(minimum) = signal.emit(&()) {
        println!("{}", minimum);
    }

    signal.disconnect_all_slots();

    let signal: Signal<(), i32, Collect<Vec<i32>>> = Signal::new();
    signal.connect_fn(one);
    signal.connect_fn(two);

    let results = signal.emit(&());

    if let Some(maximum) = results.iter().max() {
        println!("{}", maximum);
    }
}


fn connections() {
    println!("connections");

    let signal: Signal<()> = Signal::new();
    let connection = signal.connect_fn(hello_world);

    let _ = connection.block();
    signal.emit(&());
    let _ = connection.unblock();
    signal.emit(&());

    let _ = connection.disconnect();
    println!("{}", signal.num_slots());

    {
        let _scoped = signal.connect_fn(hello_world).scoped();
    }

    // The scoped connection is gone, so nothing is printed
    signal.emit(&());
}


struct Receiver;

impl Receiver {
    fn hello(&self) {
        println!("Hello World!");
    }
}

fn tracked_receiver() {
    println!("tracked receiver");

    let signal: Signal<()> = Signal::new();

    {
        let receiver = Rc::new(Receiver);
        let weak = Rc::downgrade(&receiver);

        signal.connect_slot(Slot::new(move |_: &()| {
            if let Some(receiver) = weak.upgrade() {
                receiver.hello();
            }
        }).track(&receiver));
    }

    println!("{}", signal.num_slots());
    signal.emit(&());
    println!("{}", signal.num_slots());
}


fn main() {
    single_slot();
    ordered_slots();
    combined_results();
    connections();
    tracked_receiver();
}
