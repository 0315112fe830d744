//! Immutable array with memoized key lookup.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::sync::{Arc, OnceLock};

/// An immutable sequence of `T` paired with a key extraction function.
///
/// [`find`](KeyedArray::find) builds a key-to-position index on first use and
/// memoizes it inside the shared backing storage, so later lookups are O(1)
/// and clones share the index. The array never changes after construction,
/// which keeps the memoized index valid for its whole lifetime.
///
/// Key uniqueness is not enforced. When several elements share a key, `find`
/// returns the first one in array order.
pub struct KeyedArray<T, K: Eq + Hash> {
    inner: Arc<Inner<T, K>>,
}

struct Inner<T, K: Eq + Hash> {
    items: Vec<T>,
    key_of: fn(&T) -> K,
    index: OnceLock<HashMap<K, usize>>,
}

impl<T, K: Eq + Hash> KeyedArray<T, K> {
    /// Wraps `items` with the given key extraction function.
    pub fn new(items: Vec<T>, key_of: fn(&T) -> K) -> KeyedArray<T, K> {
        KeyedArray {
            inner: Arc::new(Inner {
                items,
                key_of,
                index: OnceLock::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.items.is_empty()
    }

    /// The elements in array order.
    pub fn items(&self) -> &[T] {
        &self.inner.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.items.iter()
    }

    /// Returns the first element whose key equals `key`.
    ///
    /// The first call builds the index; concurrent first calls may race to
    /// build it but agree on the result.
    pub fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let index = self.inner.index.get_or_init(|| {
            let mut map = HashMap::with_capacity(self.inner.items.len());
            for (position, item) in self.inner.items.iter().enumerate() {
                map.entry((self.inner.key_of)(item)).or_insert(position);
            }
            map
        });
        index.get(key).map(|&position| &self.inner.items[position])
    }

    /// Consumes the array and returns its elements, cloning only when the
    /// backing storage is shared.
    pub fn into_items(self) -> Vec<T>
    where
        T: Clone,
    {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => inner.items,
            Err(shared) => shared.items.clone(),
        }
    }
}

impl<T, K: Eq + Hash> Clone for KeyedArray<T, K> {
    fn clone(&self) -> KeyedArray<T, K> {
        KeyedArray {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug, K: Eq + Hash> fmt::Debug for KeyedArray<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items()).finish()
    }
}

/// Equality looks at the elements only; the memoized index and the key
/// function do not participate.
impl<T: PartialEq, K: Eq + Hash> PartialEq for KeyedArray<T, K> {
    fn eq(&self, other: &KeyedArray<T, K>) -> bool {
        self.items() == other.items()
    }
}

impl<T: Eq, K: Eq + Hash> Eq for KeyedArray<T, K> {}

impl<T: Hash, K: Eq + Hash> Hash for KeyedArray<T, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items().hash(state);
    }
}

impl<T, K: Eq + Hash> Index<usize> for KeyedArray<T, K> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.inner.items[index]
    }
}

impl<'a, T, K: Eq + Hash> IntoIterator for &'a KeyedArray<T, K> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
