//! Property cells with change detection.
//!
//! A [`Property<T>`] wraps a value and reports whether a write actually
//! changed it. Widgets pair properties with signals so that notifications and
//! state-dependent work only happen on real transitions.
//!
//! # Example
//!
//! ```
//! use clearedit_core::{Property, Signal};
//!
//! struct Toggle {
//!     on: Property<bool>,
//!     toggled: Signal<bool>,
//! }
//!
//! impl Toggle {
//!     fn set_on(&self, on: bool) {
//!         if self.on.set(on) {
//!             self.toggled.emit(on);
//!         }
//!     }
//! }
//!
//! let toggle = Toggle { on: Property::new(false), toggled: Signal::new() };
//! toggle.set_on(true);
//! assert!(toggle.on.get());
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A property that tracks changes.
///
/// `set()` compares the new value with the current one and returns whether
/// the value actually changed.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without reporting a change.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
