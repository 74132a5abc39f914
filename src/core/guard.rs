//! Guard predicates for gating transitions.
//!
//! Guards are pure boolean functions that decide whether an operation may
//! run against a value. They keep pre-conditions declarative and free of
//! side effects.

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use calculon::core::Guard;
///
/// let non_empty = Guard::new(|expression: &str| !expression.is_empty());
///
/// assert!(non_empty.check("2+2"));
/// assert!(!non_empty.check(""));
/// ```
pub struct Guard<T: ?Sized> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the guard against a value.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    /// Combine two guards; both must pass.
    pub fn and(self, other: Guard<T>) -> Self
    where
        T: 'static,
    {
        Self::new(move |value: &T| self.check(value) && other.check(value))
    }
}

impl<T: ?Sized> std::fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
