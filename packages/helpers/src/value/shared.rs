//! Reference-identity handle for mutable values

use std::cell::RefCell;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared, interiorly mutable handle
///
/// `Clone` copies the handle, not the contents: both copies observe the same
/// value and compare equal under [`Shared::ptr_eq`].
pub struct Shared<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Shared<T> {
    /// Wrap a value in a new handle
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Borrow the value for reading
    ///
    /// A poisoned lock is recovered; the helpers never leave a value half
    /// written.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Borrow the value for writing
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether both handles point at the same value
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone> Shared<T> {
    /// Copy the current contents out of the handle
    #[must_use]
    pub fn snapshot(&self) -> T {
        self.read().clone()
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for Shared<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

thread_local! {
    // handles whose contents are being formatted on this thread
    static FORMATTING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

struct FormatGuard(usize);

impl FormatGuard {
    fn enter(addr: usize) -> Option<Self> {
        FORMATTING.with(|active| {
            let mut active = active.borrow_mut();
            if active.contains(&addr) {
                return None;
            }
            active.push(addr);
            Some(Self(addr))
        })
    }
}

impl Drop for FormatGuard {
    fn drop(&mut self) {
        FORMATTING.with(|active| active.borrow_mut().retain(|addr| *addr != self.0));
    }
}

/// Formats the contents; a handle reached again while its own contents are
/// being formatted prints as `[Circular]`
impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let addr = Arc::as_ptr(&self.inner).cast::<()>() as usize;
        let Some(_guard) = FormatGuard::enter(addr) else {
            return f.write_str("[Circular]");
        };
        fmt::Debug::fmt(&*self.read(), f)
    }
}
