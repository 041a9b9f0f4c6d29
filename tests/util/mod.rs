use std::rc::Rc;
use std::cell::RefCell;


/// Records the order in which slots are called.
#[derive(Debug, Clone, Default)]
pub struct Calls {
    calls: Rc<RefCell<Vec<&'static str>>>,
}

#[allow(dead_code)]
impl Calls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, name: &'static str) {
        self.calls.borrow_mut().push(name);
    }

    /// A slot which records `name` every time it is called.
    pub fn slot(&self, name: &'static str) -> impl Fn(&()) + 'static {
        let calls = self.clone();
        move |_: &()| calls.push(name)
    }

    /// Returns the recorded calls and forgets them.
    pub fn take(&self) -> Vec<&'static str> {
        std::mem::replace(&mut *self.calls.borrow_mut(), vec![])
    }
}
