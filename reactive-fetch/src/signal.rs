//! A minimal reactive reference: a shared mutable cell whose writes
//! synchronously notify subscribers within the same update cycle.

use std::cell::RefCell;
use std::rc::Rc;

type Subscriber = Rc<dyn Fn()>;

struct Inner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Subscriber>>,
}

pub struct Signal<T> {
    inner: Rc<Inner<T>>,
}

// Manual impl: cloning shares the cell, so T itself need not be Clone.
impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Read the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Register a callback to run after every change.
    pub fn subscribe(&self, f: impl Fn() + 'static) {
        self.inner.subscribers.borrow_mut().push(Rc::new(f));
    }

    /// Run the callback now, and again after every change.
    pub fn watch(&self, f: impl Fn() + 'static) {
        f();
        self.subscribe(f);
    }

    fn notify(&self) {
        // Snapshot so a subscriber may register further subscribers.
        let subscribers: Vec<_> =
            self.inner.subscribers.borrow().iter().cloned().collect();
        for subscriber in subscribers {
            subscriber();
        }
    }
}

impl<T: Clone> Signal<T> {
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }
}

impl<T: PartialEq> Signal<T> {
    /// Replace the value, notifying subscribers synchronously.
    ///
    /// Writing a value equal to the current one is a no-op, so feeding a
    /// signal from re-rendered props does not re-trigger its watchers.
    pub fn set(&self, value: T) {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return;
            }
            *current = value;
        }
        self.notify();
    }
}

/// A value that is either plain or reactive, so callers can pass either
/// without the consumer caring which.
pub enum MaybeSignal<T> {
    Value(T),
    Signal(Signal<T>),
}

impl<T: Clone> MaybeSignal<T> {
    /// Resolve the current value, dereferencing if reactive.
    pub fn get(&self) -> T {
        match self {
            MaybeSignal::Value(value) => value.clone(),
            MaybeSignal::Signal(signal) => signal.get(),
        }
    }
}

impl<T> From<T> for MaybeSignal<T> {
    fn from(value: T) -> Self {
        MaybeSignal::Value(value)
    }
}

impl<T> From<Signal<T>> for MaybeSignal<T> {
    fn from(signal: Signal<T>) -> Self {
        MaybeSignal::Signal(signal)
    }
}
