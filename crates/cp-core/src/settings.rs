//! Global library settings.
//!
//! [`Settings`] holds the default **sample count** used by
//! [`is_singleton_default`][crate::patterns::identity::is_singleton_default]:
//! how many times a producer is invoked before its results are declared the
//! same instance.  It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.
//!
//! Thread safety: the sample count is stored behind a `Mutex` so that it can
//! be changed from any thread.  Tests that change it should restore it with
//! [`Settings::reset`] when done.

use std::sync::{Mutex, OnceLock};

use crate::ensure;
use crate::errors::Result;

/// Sample count used until [`Settings::set_samples`] is called.
pub const DEFAULT_SAMPLES: usize = 2;

/// Process-wide settings used by the creational-patterns library.
#[derive(Debug)]
pub struct Settings {
    samples: Mutex<usize>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            samples: Mutex::new(DEFAULT_SAMPLES),
        })
    }

    /// Number of producer invocations compared by default.  Always `>= 2`.
    pub fn samples(&self) -> usize {
        *self.samples.lock().expect("Settings mutex poisoned")
    }

    /// Set the default sample count.
    ///
    /// Fewer than two samples cannot say anything about identity and are
    /// rejected with [`Error::Precondition`][crate::errors::Error::Precondition].
    pub fn set_samples(&self, samples: usize) -> Result<()> {
        ensure!(samples >= 2, "at least 2 samples required, got {samples}");
        *self.samples.lock().expect("Settings mutex poisoned") = samples;
        Ok(())
    }

    /// Restore the sample count to [`DEFAULT_SAMPLES`].
    pub fn reset(&self) {
        *self.samples.lock().expect("Settings mutex poisoned") = DEFAULT_SAMPLES;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn instance_is_shared() {
        assert!(std::ptr::eq(Settings::instance(), Settings::instance()));
    }

    #[test]
    fn rejects_too_few_samples() {
        let settings = Settings::instance();
        for n in [0, 1] {
            assert!(matches!(
                settings.set_samples(n),
                Err(Error::Precondition(_))
            ));
        }
        assert!(settings.samples() >= 2);
    }

    #[test]
    fn set_and_reset() {
        let settings = Settings::instance();
        settings.set_samples(5).unwrap();
        assert_eq!(settings.samples(), 5);
        settings.reset();
        assert_eq!(settings.samples(), DEFAULT_SAMPLES);
    }
}
