//! `Handle<T>` — a shared, optionally-null reference to a value.
//!
//! Cloning a handle shares the allocation; [`Handle::deep_copy`] produces a
//! handle to a fresh allocation with equal contents.  This makes `Handle`
//! a convenient producer output when exercising identity checks:
//!
//! | Operation | Same instance as the original? |
//! |-----------|--------------------------------|
//! | `handle.clone()` | yes |
//! | `handle.deep_copy()` | no (equal by value only) |
//! | `Handle::null()` | never, not even to another null handle |

use std::sync::Arc;

/// A shared, optionally-null reference to a value of type `T`.
///
/// The handle is *read-only*: all clones observe the same value.
pub struct Handle<T> {
    inner: Option<Arc<T>>,
}

impl<T> Handle<T> {
    /// Create a non-null handle wrapping `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Some(Arc::new(value)),
        }
    }

    /// Create a handle from an existing `Arc`.
    pub fn from_arc(arc: Arc<T>) -> Self {
        Self { inner: Some(arc) }
    }

    /// Create a null (empty) handle.
    pub fn null() -> Self {
        Self { inner: None }
    }

    /// Return `true` if the handle is null (contains no value).
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Return a reference to the inner `Arc<T>`, or `None` if this handle is
    /// null.
    pub fn as_arc(&self) -> Option<&Arc<T>> {
        self.inner.as_ref()
    }

    /// Attempt to borrow the contained value.
    ///
    /// Returns `None` if the handle is null.
    pub fn get(&self) -> Option<&T> {
        self.inner.as_deref()
    }

    /// Copy the contained value into a new allocation.
    ///
    /// The result compares equal by value but is never the same instance.
    /// A null handle copies to another null handle.
    ///
    /// ```
    /// use cp_core::Handle;
    /// use cp_core::patterns::identity::SameInstance;
    ///
    /// let h = Handle::new(vec![1, 2, 3]);
    /// let copy = h.deep_copy();
    /// assert_eq!(h.get(), copy.get());
    /// assert!(!h.same_instance(&copy));
    /// assert!(h.same_instance(&h.clone()));
    /// ```
    pub fn deep_copy(&self) -> Self
    where
        T: Clone,
    {
        Self {
            inner: self.inner.as_deref().map(|v| Arc::new(v.clone())),
        }
    }
}

// Manual impl: cloning a handle never requires `T: Clone`.
impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for Handle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> From<Arc<T>> for Handle<T> {
    fn from(arc: Arc<T>) -> Self {
        Self::from_arc(arc)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Some(v) => write!(f, "Handle({:?})", v),
            None => write!(f, "Handle(null)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handle() {
        let h: Handle<i32> = Handle::default();
        assert!(h.is_empty());
        assert!(h.get().is_none());
        assert!(h.as_arc().is_none());
        assert!(h.deep_copy().is_empty());
        assert_eq!(format!("{h:?}"), "Handle(null)");
    }

    #[test]
    fn clone_shares_allocation() {
        let h = Handle::new(String::from("shared"));
        let c = h.clone();
        let (a, b) = (h.as_arc().unwrap(), c.as_arc().unwrap());
        assert!(Arc::ptr_eq(a, b));
        assert_eq!(Arc::strong_count(a), 2);
    }

    #[test]
    fn deep_copy_allocates() {
        let h = Handle::new(vec![1, 2, 3]);
        let d = h.deep_copy();
        assert_eq!(d.get(), Some(&vec![1, 2, 3]));
        assert!(!Arc::ptr_eq(h.as_arc().unwrap(), d.as_arc().unwrap()));
        assert_eq!(Arc::strong_count(h.as_arc().unwrap()), 1);
    }

    #[test]
    fn from_arc_keeps_pointer() {
        let arc = Arc::new(7_u8);
        let h = Handle::from(Arc::clone(&arc));
        assert!(Arc::ptr_eq(h.as_arc().unwrap(), &arc));
        assert_eq!(format!("{h:?}"), "Handle(7)");
    }
}
