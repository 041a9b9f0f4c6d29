use std::rc::Rc;
use std::sync::Mutex;
use once_cell::sync::Lazy;
use slot_signals::signal::{Signal, Slot, SlotKey};

mod util;

#[test]
fn test_debug_logging() {
    struct VecLogger {
        messages: Mutex<Vec<String>>,
    }

    impl VecLogger {
        fn new() -> Self {
            Self {
                messages: Mutex::new(vec![]),
            }
        }

        fn take(&self) -> Vec<String> {
            std::mem::replace(&mut *self.messages.lock().unwrap(), vec![])
        }
    }

    impl log::Log for VecLogger {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.target().starts_with("slot_signals")
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                self.messages.lock().unwrap().push(format!("[{}] {}", record.level(), record.args()));
            }
        }

        fn flush(&self) {}
    }


    static LOGGER: Lazy<VecLogger> = Lazy::new(|| VecLogger::new());

    log::set_logger(&*LOGGER).unwrap();
    log::set_max_level(log::LevelFilter::Trace);

    let calls = util::Calls::new();
    let signal: Signal<()> = Signal::new();

    let a = signal.connect(calls.slot("A"));
    signal.connect_with_priority(2, calls.slot("B"));

    assert_eq!(LOGGER.take(), vec![
        "[TRACE] connected slot 0 at Back".to_string(),
        "[TRACE] connected slot 1 at Priority(2)".to_string(),
    ]);

    signal.emit(&());
    assert_eq!(calls.take(), vec!["B", "A"]);

    assert_eq!(LOGGER.take(), vec![
        "[TRACE] dispatching to 2 slots".to_string(),
    ]);

    a.disconnect().unwrap();

    assert_eq!(LOGGER.take(), vec![
        "[TRACE] disconnected slot 0".to_string(),
    ]);

    {
        let receiver = Rc::new(());
        signal.connect_slot(Slot::new(calls.slot("C")).track(&receiver));
    }

    signal.emit(&());
    assert_eq!(calls.take(), vec!["B"]);

    assert_eq!(LOGGER.take(), vec![
        "[TRACE] connected slot 2 at Back".to_string(),
        "[TRACE] dispatching to 2 slots".to_string(),
        "[DEBUG] slot 2 outlived its tracked receivers and was disconnected".to_string(),
    ]);

    signal.connect_slot(Slot::new(calls.slot("D")).named("audit"));
    signal.disconnect(&SlotKey::named("audit"));
    signal.disconnect_all_slots();

    assert_eq!(LOGGER.take(), vec![
        "[TRACE] connected slot 3 at Back".to_string(),
        "[TRACE] disconnected 1 slots matching Named(\"audit\")".to_string(),
        "[TRACE] disconnected all 1 slots".to_string(),
    ]);
}
