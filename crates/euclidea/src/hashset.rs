//! A hash set keyed by each element's canonical fingerprint.
//!
//! Purpose
//! - Every primitive in `geom` carries an integer fingerprint that is equal,
//!   up to tolerance, for any two constructions of "the same" geometric
//!   object. `FingerprintSet` is the de-duplicating container built on top
//!   of that contract: fingerprint equality *is* element equality here.
//!
//! Why a generic wrapper instead of one set per primitive kind
//! - The five primitive kinds (`Point`, `Line`, `HalfLine`, `Segment`,
//!   `Circle`) never need to live in the same set, so a closed, typed
//!   `FingerprintSet<T>` per kind is both simpler and safer than a
//!   dynamically-typed map keyed by an open `dyn Fingerprinted`.

use std::collections::HashMap;

/// Types with a canonical, tolerance-stable 64-bit fingerprint.
///
/// The fingerprint may wrap on overflow; it is used only as a map key; it
/// does not order elements.
pub trait Fingerprinted {
    fn fingerprint(&self) -> i64;
}

/// A de-duplicating set of `T`, keyed by `T::fingerprint()`.
#[derive(Clone, Debug)]
pub struct FingerprintSet<T> {
    by_fingerprint: HashMap<i64, T>,
}

impl<T> Default for FingerprintSet<T> {
    fn default() -> Self {
        Self {
            by_fingerprint: HashMap::new(),
        }
    }
}

impl<T: Fingerprinted + Clone> FingerprintSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value`, replacing any prior element with the same fingerprint.
    pub fn add(&mut self, value: T) {
        self.by_fingerprint.insert(value.fingerprint(), value);
    }

    /// Removes the element with the same fingerprint as `value`, if present.
    pub fn remove(&mut self, value: &T) {
        self.by_fingerprint.remove(&value.fingerprint());
    }

    pub fn contains(&self, value: &T) -> bool {
        self.by_fingerprint.contains_key(&value.fingerprint())
    }

    pub fn len(&self) -> usize {
        self.by_fingerprint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_fingerprint.is_empty()
    }

    /// Iterates the live map directly. Callers that mutate the owning board
    /// while iterating must use `snapshot()` instead — see `solver::dfs`.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.by_fingerprint.values()
    }

    /// Copies all elements into a `Vec`, safe to iterate while the set it was
    /// taken from is mutated.
    pub fn snapshot(&self) -> Vec<T> {
        self.by_fingerprint.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tagged(i64);
    impl Fingerprinted for Tagged {
        fn fingerprint(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn add_dedups_by_fingerprint() {
        let mut set = FingerprintSet::new();
        set.add(Tagged(1));
        set.add(Tagged(1));
        set.add(Tagged(2));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Tagged(1)));
        assert!(!set.contains(&Tagged(3)));
    }

    #[test]
    fn remove_drops_the_matching_fingerprint() {
        let mut set = FingerprintSet::new();
        set.add(Tagged(7));
        set.remove(&Tagged(7));
        assert!(set.is_empty());
    }

    #[test]
    fn snapshot_is_independent_of_later_mutation() {
        let mut set = FingerprintSet::new();
        set.add(Tagged(1));
        let snap = set.snapshot();
        set.add(Tagged(2));
        assert_eq!(snap.len(), 1);
        assert_eq!(set.len(), 2);
    }
}
