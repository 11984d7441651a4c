//! # Collection Utility
//!
//! A minimal ordered container with positional keys, used by [`Cart`] to
//! store its line items.
//!
//! ## Key Compaction Is Load-Bearing
//! After `remove(k)`, every element that sat above `k` shifts down so keys
//! stay a contiguous 0-based sequence. The cart's positional access
//! (`Cart::get_item`) relies on this: removing line 0 makes the former
//! line 1 the new line 0. Do not swap this for a stable-key map.
//!
//! [`Cart`]: crate::cart::Cart

// =============================================================================
// Collection
// =============================================================================

/// An ordered, positionally keyed container.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    elements: Vec<T>,
}

impl<T> Collection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Collection {
            elements: Vec::new(),
        }
    }

    /// Number of elements in the collection.
    #[inline]
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    /// Checks whether the collection holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends an element, assigning it the next positional key.
    pub fn add(&mut self, element: T) -> &mut Self {
        self.elements.push(element);
        self
    }

    /// Upserts an element at a key: replaces when the key exists,
    /// appends otherwise.
    pub fn set(&mut self, key: usize, element: T) -> &mut Self {
        if key < self.elements.len() {
            self.elements[key] = element;
        } else {
            self.elements.push(element);
        }
        self
    }

    /// Returns the element at a key, or `None` when the key is absent.
    ///
    /// The `Option` keeps "absent" distinguishable from any valid element.
    #[inline]
    pub fn get(&self, key: usize) -> Option<&T> {
        self.elements.get(key)
    }

    /// Mutable access to the element at a key.
    #[inline]
    pub fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        self.elements.get_mut(key)
    }

    /// Removes and returns the element at a key, compacting the remaining
    /// keys to a contiguous 0-based sequence. Absent keys are a no-op.
    pub fn remove(&mut self, key: usize) -> Option<T> {
        if key < self.elements.len() {
            Some(self.elements.remove(key))
        } else {
            None
        }
    }

    /// Returns all elements matching the predicate, together with their
    /// original keys so the caller can recover which key matched.
    ///
    /// The predicate receives each element plus one auxiliary argument,
    /// which saves the call sites from capturing state in a closure.
    pub fn filter<'a, A, F>(&'a self, predicate: F, arg: &A) -> Vec<(usize, &'a T)>
    where
        F: Fn(&T, &A) -> bool,
    {
        self.elements
            .iter()
            .enumerate()
            .filter(|&(_, element)| predicate(element, arg))
            .collect()
    }

    /// Removes all elements.
    pub fn clear(&mut self) -> &mut Self {
        self.elements.clear();
        self
    }

    /// Borrows the elements as a key-ordered slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Snapshots the elements into a plain key-ordered sequence.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection::new()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_sequential_keys() {
        let mut collection = Collection::new();
        collection.add("a").add("b").add("c");

        assert_eq!(collection.count(), 3);
        assert_eq!(collection.get(0), Some(&"a"));
        assert_eq!(collection.get(2), Some(&"c"));
        assert_eq!(collection.get(3), None);
    }

    #[test]
    fn test_set_replaces_or_appends() {
        let mut collection = Collection::new();
        collection.add(1).add(2);

        collection.set(1, 20);
        assert_eq!(collection.get(1), Some(&20));

        // Absent key appends instead of creating a gap
        collection.set(7, 30);
        assert_eq!(collection.count(), 3);
        assert_eq!(collection.get(2), Some(&30));
    }

    #[test]
    fn test_remove_compacts_keys() {
        let mut collection = Collection::new();
        collection.add("a").add("b").add("c");

        assert_eq!(collection.remove(1), Some("b"));

        // Former key 2 shifted down to key 1
        assert_eq!(collection.count(), 2);
        assert_eq!(collection.get(0), Some(&"a"));
        assert_eq!(collection.get(1), Some(&"c"));
        assert_eq!(collection.get(2), None);
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let mut collection = Collection::new();
        collection.add("a");

        assert_eq!(collection.remove(5), None);
        assert_eq!(collection.count(), 1);
    }

    #[test]
    fn test_filter_preserves_original_keys() {
        let mut collection = Collection::new();
        collection.add(10).add(25).add(30).add(45);

        let threshold = 20;
        let matched = collection.filter(|n, min| n > min, &threshold);

        let keys: Vec<usize> = matched.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec![1, 2, 3]);
        assert_eq!(*matched[0].1, 25);
    }

    #[test]
    fn test_clear_and_snapshot() {
        let mut collection = Collection::new();
        collection.add(1).add(2);

        assert_eq!(collection.to_vec(), vec![1, 2]);
        assert_eq!(collection.as_slice(), &[1, 2]);

        collection.clear();
        assert!(collection.is_empty());
        assert!(collection.to_vec().is_empty());
    }

    #[test]
    fn test_iteration_follows_key_order() {
        let mut collection = Collection::new();
        collection.add("x").add("y");

        let seen: Vec<&&str> = (&collection).into_iter().collect();
        assert_eq!(seen, vec![&"x", &"y"]);
    }
}
