use crate::{StoreError, Vec};
use bytemuck::Pod;

/// Growable in-memory array of fixed-width words.
///
/// `WordStore<T>` is the backing storage for packed bit structures. `T` must
/// implement [`bytemuck::Pod`] so that new words can be zero-filled.
///
/// Words are only ever appended: [`WordStore::grow_to`] extends the store
/// with zeroed words and never shrinks it.
///
/// # Examples
///
/// ```
/// use word_store::WordStore;
///
/// let mut store = WordStore::<u64>::new();
/// store.push(1);
/// store.push(2);
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.get(1).unwrap(), &2);
///
/// store[0] = 99;
/// assert_eq!(store.as_slice(), &[99, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStore<T: Pod> {
    words: Vec<T>,
}

impl<T: Pod> WordStore<T> {
    /// Creates an empty store.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_store::WordStore;
    ///
    /// let store = WordStore::<u32>::new();
    /// assert!(store.is_empty());
    /// ```
    pub fn new() -> Self {
        WordStore { words: Vec::new() }
    }

    /// Creates an empty store with room for `capacity` words.
    ///
    /// Only the allocation is reserved; `len()` stays zero.
    ///
    /// ```
    /// use word_store::WordStore;
    ///
    /// let store = WordStore::<u64>::with_capacity(16);
    /// assert_eq!(store.len(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        WordStore {
            words: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of words in the store.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns a reference to the word at `index`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::OutOfBounds` if `index >= len()`.
    ///
    /// ```
    /// use word_store::{StoreError, WordStore};
    ///
    /// let mut store = WordStore::<u64>::new();
    /// store.push(10);
    /// assert_eq!(store.get(0).unwrap(), &10);
    /// assert_eq!(store.get(1), Err(StoreError::OutOfBounds { index: 1, len: 1 }));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, StoreError> {
        self.words.get(index).ok_or(StoreError::OutOfBounds {
            index,
            len: self.words.len(),
        })
    }

    /// Appends a word to the back of the store.
    pub fn push(&mut self, value: T) {
        self.words.push(value);
    }

    /// Appends zeroed words until the store holds `len` words.
    ///
    /// Does nothing if the store already holds at least `len` words.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::GrowFailed` if the allocation cannot be made.
    /// The store is left unchanged in that case.
    ///
    /// ```
    /// use word_store::WordStore;
    ///
    /// let mut store = WordStore::<u64>::new();
    /// store.push(7);
    /// store.grow_to(3).unwrap();
    /// assert_eq!(store.as_slice(), &[7, 0, 0]);
    ///
    /// store.grow_to(1).unwrap();
    /// assert_eq!(store.len(), 3);
    /// ```
    pub fn grow_to(&mut self, len: usize) -> Result<(), StoreError> {
        let current = self.words.len();
        if len <= current {
            return Ok(());
        }
        self.words
            .try_reserve(len - current)
            .map_err(|_| StoreError::GrowFailed { requested: len })?;
        log::trace!("word store growing from {} to {} words", current, len);
        self.words.resize(len, bytemuck::Zeroable::zeroed());
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        self.words.as_slice()
    }
}

impl<T: Pod> core::ops::Index<usize> for WordStore<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.words[index]
    }
}

impl<T: Pod> core::ops::IndexMut<usize> for WordStore<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.words[index]
    }
}

impl<T: Pod> Default for WordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
