//! Dirty-flag change tracking for expensive derived state.
//!
//! A [`DirtyProperty`] pairs a value with a flag that is raised whenever the
//! value is replaced and lowered by the single consumer that processes the
//! change. This gates work that is costly relative to how often its inputs
//! change, such as regenerating a mesh inside a per-frame update loop.
//!
//! When one piece of derived state depends on several properties at once,
//! [`clean_pair`] runs the effect if *any* of them changed, always handing it
//! a consistent snapshot of every tracked value.

/// A value paired with a dirty flag.
///
/// Newly constructed properties start dirty so the first clean pass observes
/// the initial value.
///
/// # Example
///
/// ```
/// use icosa::dirty::DirtyProperty;
///
/// let mut count = DirtyProperty::new(0);
/// assert_eq!(count.clean(|&n| n), Some(0));
/// assert_eq!(count.clean(|&n| n), None); // already clean
///
/// count.set(1);
/// assert_eq!(count.clean(|&n| n), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct DirtyProperty<T> {
    value: T,
    dirty: bool,
}

impl<T> DirtyProperty<T> {
    /// Creates a property holding `value`, with the dirty flag raised.
    pub fn new(value: T) -> Self {
        Self { value, dirty: true }
    }

    /// Shared reference to the stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable reference to the stored value.
    ///
    /// Mutating through this reference does not raise the dirty flag; the
    /// caller must pair it with [`mark_dirty`](Self::mark_dirty) when the
    /// value actually changed. Prefer [`set`](Self::set) where possible.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the value and raises the dirty flag.
    ///
    /// The flag is raised unconditionally, even when the new value equals
    /// the old one; this is plain value-replacement semantics with no
    /// equality check.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.dirty = true;
    }

    /// Whether the value changed since the last clean.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Raises the dirty flag without touching the value.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Runs `effect` with the current value if the property is dirty, then
    /// lowers the flag. Returns the effect's result, or `None` if the
    /// property was already clean.
    pub fn clean<R>(&mut self, effect: impl FnOnce(&T) -> R) -> Option<R> {
        if !self.dirty {
            return None;
        }
        let result = effect(&self.value);
        self.dirty = false;
        Some(result)
    }
}

impl<T: Default> Default for DirtyProperty<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Runs `effect` if at least one of the two properties is dirty, passing the
/// current values of both, then lowers both flags.
///
/// Both flags are cleared regardless of which property was actually dirty:
/// the effect saw a consistent snapshot of the pair, so neither value counts
/// as pending afterwards. Mutations the effect makes through the handed-out
/// references do not re-raise the flags.
pub fn clean_pair<A, B, R>(
    a: &mut DirtyProperty<A>,
    b: &mut DirtyProperty<B>,
    effect: impl FnOnce(&mut A, &mut B) -> R,
) -> Option<R> {
    if !(a.dirty || b.dirty) {
        return None;
    }
    let result = effect(&mut a.value, &mut b.value);
    a.dirty = false;
    b.dirty = false;
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_dirty() {
        let property = DirtyProperty::new(7);
        assert!(property.is_dirty());
        assert_eq!(*property.value(), 7);
    }

    #[test]
    fn test_clean_runs_once() {
        let mut property = DirtyProperty::new(7);

        assert_eq!(property.clean(|&n| n * 2), Some(14));
        assert!(!property.is_dirty());
        assert_eq!(property.clean(|&n| n * 2), None);
    }

    #[test]
    fn test_set_marks_dirty_even_for_equal_value() {
        let mut property = DirtyProperty::new(7);
        property.clean(|_| ());

        property.set(7);
        assert!(property.is_dirty());
    }

    #[test]
    fn test_value_mut_requires_explicit_mark_dirty() {
        let mut property = DirtyProperty::new(7);
        property.clean(|_| ());

        *property.value_mut() = 8;
        assert!(!property.is_dirty());

        property.mark_dirty();
        assert_eq!(property.clean(|&n| n), Some(8));
    }

    #[test]
    fn test_clean_pair_skips_when_both_clean() {
        let mut a = DirtyProperty::new(1);
        let mut b = DirtyProperty::new(2);
        a.clean(|_| ());
        b.clean(|_| ());

        assert_eq!(clean_pair(&mut a, &mut b, |_, _| ()), None);
    }

    #[test]
    fn test_clean_pair_runs_when_either_is_dirty() {
        let mut a = DirtyProperty::new(1);
        let mut b = DirtyProperty::new(2);
        a.clean(|_| ());
        b.clean(|_| ());

        a.set(10);
        let seen = clean_pair(&mut a, &mut b, |a, b| (*a, *b));
        assert_eq!(seen, Some((10, 2)));
    }

    #[test]
    fn test_clean_pair_clears_both_flags() {
        let mut a = DirtyProperty::new(1);
        let mut b = DirtyProperty::new(2);

        // Only `a` was touched since construction cleaning, but both flags drop.
        clean_pair(&mut a, &mut b, |_, _| ());
        assert!(!a.is_dirty());
        assert!(!b.is_dirty());
    }
}
