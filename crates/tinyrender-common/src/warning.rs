//! Diagnostics for input the pipeline accepts but does not fully support.
//!
//! Rendering never stops on an unsupported `display` keyword or on inline
//! content; it falls back and reports the fallback here. Each distinct
//! message reaches stderr once until [`clear_warnings`] starts a new render.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Messages already reported, keyed as `component: message`.
static REPORTED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

/// Lock the reported set. A panic on another thread cannot leave the set
/// half-updated, so a poisoned lock is still safe to use.
fn reported() -> MutexGuard<'static, BTreeSet<String>> {
    REPORTED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Report a fallback taken by `component`, unless the same report was
/// already made during this render.
///
/// ```
/// use tinyrender_common::warning::{clear_warnings, warn_once, warning_count};
///
/// clear_warnings();
/// warn_once("Layout", "inline layout is not implemented");
/// warn_once("Layout", "inline layout is not implemented");
/// assert_eq!(warning_count(), 1);
/// ```
pub fn warn_once(component: &str, message: &str) {
    if reported().insert(format!("{component}: {message}")) {
        eprintln!("{} {message}", format!("warning[{component}]:").yellow().bold());
    }
}

/// Forget every report so the next render starts fresh.
pub fn clear_warnings() {
    reported().clear();
}

/// Number of distinct reports since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    reported().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test owns the global set so parallel tests cannot interleave.
    #[test]
    fn test_reports_are_deduplicated_and_survive_poisoning() {
        clear_warnings();
        warn_once("CSS", "unsupported display value 'flex'");
        warn_once("CSS", "unsupported display value 'flex'");
        warn_once("Layout", "unsupported display value 'flex'");
        assert_eq!(warning_count(), 2);

        let poisoned = std::thread::spawn(|| {
            let _guard = REPORTED.lock();
            panic!("poison the lock");
        })
        .join();
        assert!(poisoned.is_err());
        assert!(REPORTED.is_poisoned());

        warn_once("CSS", "another fallback");
        assert_eq!(warning_count(), 3);

        clear_warnings();
        assert_eq!(warning_count(), 0);
    }
}
