//! Per-instance memoization of zero-argument computations.
//!
//! A [`Memoized`] field starts out unset. The first read runs the supplied
//! computation and stores its result in the field; every later read returns
//! the stored value without running anything.

use once_cell::unsync::OnceCell;
use std::fmt;

/// A set-once cache cell owned by a single instance.
///
/// Each `Memoized` field caches independently, so a struct holding two of
/// them memoizes two computations separately. There is no invalidation.
///
/// The cell is not synchronized: it is `!Sync`, and racing first reads from
/// several threads is not supported.
pub struct Memoized<T> {
    cell: OnceCell<T>,
}

impl<T> Memoized<T> {
    /// Create an unset cell.
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the cached value, computing it with `init` on first access.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(init)
    }

    /// Return the cached value, computing it with a fallible `init` on first
    /// access.
    ///
    /// An error is handed back to the caller and nothing is stored, so the
    /// next access runs `init` again.
    pub fn get_or_try_init<F, E>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.cell.get_or_try_init(init)
    }

    /// Peek at the cached value without computing it.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Whether the value has been computed.
    pub fn is_set(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for Memoized<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Memoized<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("Memoized").field(value).finish(),
            None => f.write_str("Memoized(<unset>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct TestClass {
        calls: Cell<usize>,
        a_property: Memoized<u32>,
    }

    impl TestClass {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
                a_property: Memoized::new(),
            }
        }

        fn a_method(&self) -> u32 {
            self.calls.set(self.calls.get() + 1);
            42
        }

        fn a_property(&self) -> u32 {
            *self.a_property.get_or_init(|| self.a_method())
        }
    }

    #[test]
    fn test_memoize() {
        let tst = TestClass::new();

        assert_eq!(tst.a_property(), 42);
        assert_eq!(tst.a_property(), 42);
        assert_eq!(tst.calls.get(), 1);
    }

    #[test]
    fn test_memoize_is_per_instance() {
        let first = TestClass::new();
        let second = TestClass::new();

        first.a_property();
        assert!(first.a_property.is_set());
        assert!(!second.a_property.is_set());

        second.a_property();
        assert_eq!(first.calls.get(), 1);
        assert_eq!(second.calls.get(), 1);
    }

    #[test]
    fn test_fields_cache_independently() {
        let left: Memoized<&str> = Memoized::new();
        let right: Memoized<&str> = Memoized::new();

        assert_eq!(*left.get_or_init(|| "left"), "left");
        assert!(right.get().is_none());
        assert_eq!(*right.get_or_init(|| "right"), "right");
        assert_eq!(*left.get_or_init(|| "ignored"), "left");
    }

    #[test]
    fn test_failed_init_is_not_cached() {
        let cell: Memoized<u8> = Memoized::new();

        let err: Result<&u8, &str> = cell.get_or_try_init(|| Err("boom"));
        assert_eq!(err, Err("boom"));
        assert!(!cell.is_set());

        let ok: Result<&u8, &str> = cell.get_or_try_init(|| Ok(7));
        assert_eq!(ok, Ok(&7));
        assert_eq!(cell.get(), Some(&7));
    }

    #[test]
    fn test_debug_format() {
        let cell: Memoized<u8> = Memoized::new();
        assert_eq!(format!("{:?}", cell), "Memoized(<unset>)");
        cell.get_or_init(|| 3);
        assert_eq!(format!("{:?}", cell), "Memoized(3)");
    }
}
