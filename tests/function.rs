use slot_signals::{Function, SignalError};
use slot_signals::signal::Signal;
use slot_signals::combiner::Collect;


fn atoi(input: &&'static str) -> i32 {
    input.parse().unwrap_or(0)
}

fn strlen(input: &&'static str) -> i32 {
    input.len() as i32
}


#[test]
fn test_reassign() {
    let mut f: Function<&'static str, i32> = Function::new(atoi);
    assert_eq!(f.call(&"1609"), Ok(1609));

    f.assign(strlen);
    assert_eq!(f.call(&"1609"), Ok(4));

    f.clear();
    assert!(!f.is_assigned());
    assert_eq!(f.call(&"1609"), Err(SignalError::InvalidCall));
}

#[test]
fn test_empty() {
    let f: Function<&'static str, i32> = Function::default();

    assert!(!f.is_assigned());
    assert_eq!(f.call(&""), Err(SignalError::InvalidCall));
    assert_eq!(SignalError::InvalidCall.to_string(), "call to an unassigned function");
}

#[test]
fn test_from_closure() {
    let offset = 10;
    let f: Function<i32, i32> = (move |x: &i32| x + offset).into();

    assert_eq!(f.call(&5), Ok(15));
}

#[test]
fn test_empty_slot_fails_at_dispatch() {
    let signal: Signal<i32, Result<i32, SignalError>, Collect<Vec<i32>>> = Signal::new();

    signal.connect_slot(Function::new(|x: &i32| x * 2).into_slot());

    // Connecting an empty function succeeds
    let empty = signal.connect_slot(Function::empty().into_slot());
    assert_eq!(signal.num_slots(), 2);

    assert_eq!(signal.try_emit(&3), Err(SignalError::InvalidCall));

    empty.disconnect().unwrap();
    assert_eq!(signal.try_emit(&3), Ok(vec![6]));
}

#[test]
fn test_emit_reports_every_result() {
    let signal: Signal<i32, Result<i32, SignalError>, Collect<Vec<Result<i32, SignalError>>>> = Signal::new();

    signal.connect_slot(Function::empty().into_slot());
    signal.connect_slot(Function::new(|x: &i32| x + 1).into_slot());

    assert_eq!(signal.emit(&1), vec![Err(SignalError::InvalidCall), Ok(2)]);
}

#[test]
fn test_disconnect_by_function() {
    let signal: Signal<i32, Result<i32, SignalError>, Collect<Vec<i32>>> = Signal::new();

    let double = Function::new(|x: &i32| x * 2);
    let triple = Function::new(|x: &i32| x * 3);

    signal.connect_slot(double.clone().into_slot());
    signal.connect_slot(triple.clone().into_slot());
    signal.connect_slot(double.clone().into_slot());

    assert_eq!(signal.try_emit(&1), Ok(vec![2, 3, 2]));

    let key = double.key().unwrap();
    assert_eq!(signal.disconnect(&key), 2);

    assert_eq!(signal.try_emit(&1), Ok(vec![3]));
}
