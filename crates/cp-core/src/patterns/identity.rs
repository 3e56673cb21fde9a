//! Identity checks for the Singleton pattern.
//!
//! A factory implements the Singleton pattern when every call hands back the
//! *same instance*, not merely an equal one.  Rust owned values have no
//! identity of their own, so the checks here work on reference-like values
//! (`&T`, `Rc<T>`, `Arc<T>`, [`Handle<T>`]) and compare where they point,
//! never what they point at.  [`SameInstance`] is the seam: implement it for
//! any other pointer type that should be checkable.
//!
//! ```
//! use std::rc::Rc;
//! use cp_core::patterns::identity::is_singleton;
//!
//! let obj = vec![1, 2, 3];
//! assert!(is_singleton(|| &obj));
//! assert!(!is_singleton(|| Rc::new(obj.clone())));
//! ```
//!
//! Every producer result stays alive until it has been compared, so a
//! fresh allocation can never reuse the address of the value it is compared
//! against.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::ensure;
use crate::errors::Result;
use crate::handle::Handle;
use crate::settings::Settings;

/// Reference-identity comparison.
///
/// Two values are the same instance when they refer to the same storage.
/// Equal contents in different allocations are *not* the same instance.
pub trait SameInstance {
    /// Return `true` if `self` and `other` refer to the same storage.
    fn same_instance(&self, other: &Self) -> bool;

    /// Address of the referenced storage, or `None` if nothing is referenced.
    ///
    /// Used for diagnostics only; identity is decided by
    /// [`same_instance`](SameInstance::same_instance).
    fn address(&self) -> Option<usize>;
}

// Fat pointers compare their metadata too: `&v[..1]` and `&v[..]` are
// different instances even though they start at the same address.
impl<T: ?Sized> SameInstance for &T {
    fn same_instance(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }

    fn address(&self) -> Option<usize> {
        Some((*self as *const T).cast::<()>() as usize)
    }
}

impl<T: ?Sized> SameInstance for Rc<T> {
    fn same_instance(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }

    fn address(&self) -> Option<usize> {
        Some(Rc::as_ptr(self).cast::<()>() as usize)
    }
}

impl<T: ?Sized> SameInstance for Arc<T> {
    fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }

    fn address(&self) -> Option<usize> {
        Some(Arc::as_ptr(self).cast::<()>() as usize)
    }
}

/// Null handles reference nothing and are never the same instance.
impl<T> SameInstance for Handle<T> {
    fn same_instance(&self, other: &Self) -> bool {
        match (self.as_arc(), other.as_arc()) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn address(&self) -> Option<usize> {
        self.as_arc().and_then(SameInstance::address)
    }
}

/// `None` is absence, not an instance: it never matches anything.
impl<V: SameInstance> SameInstance for Option<V> {
    fn same_instance(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same_instance(b),
            _ => false,
        }
    }

    fn address(&self) -> Option<usize> {
        self.as_ref().and_then(SameInstance::address)
    }
}

/// Outcome of [`check_identity`]: the two observed addresses and the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityReport {
    /// Address of the first producer result.
    pub first: Option<usize>,
    /// Address of the second producer result.
    pub second: Option<usize>,
    /// Whether both results were the same instance.
    pub identical: bool,
}

impl IdentityReport {
    /// Shorthand for [`identical`](Self::identical).
    pub fn is_singleton(&self) -> bool {
        self.identical
    }
}

struct Addr(Option<usize>);

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(a) => write!(f, "{a:#x}"),
            None => f.write_str("null"),
        }
    }
}

impl fmt::Display for IdentityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.identical {
            write!(f, "same instance at {}", Addr(self.first))
        } else {
            write!(
                f,
                "distinct instances at {} and {}",
                Addr(self.first),
                Addr(self.second)
            )
        }
    }
}

/// Invoke `producer` twice and report whether both calls returned the same
/// instance.
///
/// A panic inside `producer` propagates unchanged.
pub fn is_singleton<V, F>(producer: F) -> bool
where
    V: SameInstance,
    F: FnMut() -> V,
{
    check_identity(producer).identical
}

/// Like [`is_singleton`], but returns the observed addresses as well.
///
/// ```
/// use cp_core::Handle;
/// use cp_core::patterns::identity::check_identity;
///
/// let h = Handle::new([1, 2, 3]);
/// let report = check_identity(|| h.deep_copy());
/// assert!(!report.identical);
/// assert_ne!(report.first, report.second);
/// assert!(report.to_string().starts_with("distinct instances at 0x"));
/// ```
pub fn check_identity<V, F>(mut producer: F) -> IdentityReport
where
    V: SameInstance,
    F: FnMut() -> V,
{
    let x = producer();
    let y = producer();
    let report = IdentityReport {
        first: x.address(),
        second: y.address(),
        identical: x.same_instance(&y),
    };
    debug!(first = ?report.first, second = ?report.second, identical = report.identical, "identity check");
    report
}

/// Fallible-producer form of [`is_singleton`].
///
/// The first error returned by `producer` is passed through unchanged and the
/// producer is not called again.
pub fn try_is_singleton<V, E, F>(mut producer: F) -> Result<bool, E>
where
    V: SameInstance,
    F: FnMut() -> Result<V, E>,
{
    let x = producer()?;
    let y = producer()?;
    let identical = x.same_instance(&y);
    debug!(first = ?x.address(), second = ?y.address(), identical, "identity check");
    Ok(identical)
}

/// Invoke `producer` `samples` times and report whether every result is the
/// same instance as the first.
///
/// Stops at the first divergent result.  Fewer than two samples is a
/// precondition error.
///
/// ```
/// use cp_core::patterns::identity::is_singleton_n;
///
/// let obj = [1, 2, 3];
/// assert_eq!(is_singleton_n(|| &obj, 10), Ok(true));
/// assert!(is_singleton_n(|| &obj, 1).is_err());
/// ```
pub fn is_singleton_n<V, F>(producer: F, samples: usize) -> Result<bool>
where
    V: SameInstance,
    F: FnMut() -> V,
{
    ensure!(samples >= 2, "at least 2 samples required, got {samples}");
    Ok(sample_identity(producer, samples))
}

/// [`is_singleton_n`] with the sample count taken from
/// [`Settings::samples`].
pub fn is_singleton_default<V, F>(producer: F) -> bool
where
    V: SameInstance,
    F: FnMut() -> V,
{
    sample_identity(producer, Settings::instance().samples())
}

fn sample_identity<V, F>(mut producer: F, samples: usize) -> bool
where
    V: SameInstance,
    F: FnMut() -> V,
{
    let first = producer();
    for sample in 1..samples {
        let next = producer();
        trace!(sample, address = ?next.address(), "sampled producer");
        if !first.same_instance(&next) {
            debug!(sample, first = ?first.address(), diverged = ?next.address(), "producer returned a new instance");
            return false;
        }
    }
    debug!(samples, address = ?first.address(), "producer returned one instance");
    true
}
