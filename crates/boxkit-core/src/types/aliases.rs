//! Type aliases for shared ownership of editor state.
//!
//! An editor session is single-owner by construction. Hosts that deliver
//! pointer events from more than one thread serialize every transition through
//! one of the thread-safe wrappers below; single-threaded hosts (UI toolkits
//! with one event loop) use the `Rc<RefCell<_>>` form.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boxkit_core::types::*;
//!
//! let editor: ThreadSafe<MyEditor> = thread_safe(MyEditor::default());
//! editor.lock().handle_event(event)?;
//! ```

use parking_lot::Mutex;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex` for better performance than `std::sync::Mutex`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Create a new `ThreadSafe<T>` from a value.
#[inline]
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
