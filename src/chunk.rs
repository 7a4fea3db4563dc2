use crate::Error;

/// A fixed-capacity, ordered run of elements: the storage unit of a [`ChunkList`](crate::ChunkList).
///
/// A chunk never holds more than [`capacity`](Chunk::capacity) elements. Elements keep the order in
/// which they were placed, and that order is the order in which the list yields them.
///
/// Chunks are handed out by [`ChunkList::chunks`](crate::ChunkList::chunks) and
/// [`ChunkList::chunks_mut`](crate::ChunkList::chunks_mut). Through a mutable chunk the occupied
/// slots can be overwritten or removed, but new slots can only be filled by the owning list.
#[derive(PartialEq, Eq, Hash)]
pub struct Chunk<T> {
    values: Vec<T>,
    capacity: usize,
}

impl<T> Chunk<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn with_value(capacity: usize, value: T) -> Self {
        let mut chunk = Self::new(capacity);
        chunk.push_back(value);
        chunk
    }

    #[inline]
    pub(crate) fn push_front(&mut self, value: T) {
        debug_assert!(!self.is_full(), "Chunk is full: cannot insert more elements");
        self.values.insert(0, value);
    }

    #[inline]
    pub(crate) fn push_back(&mut self, value: T) {
        debug_assert!(!self.is_full(), "Chunk is full: cannot insert more elements");
        self.values.push(value);
    }

    pub(crate) fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Returns the maximum number of elements this chunk can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of elements stored in this chunk.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if this chunk stores no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if every slot of this chunk is occupied.
    ///
    /// A full chunk never receives another element: pushes that reach it allocate a new chunk
    /// instead.
    ///
    /// # Example
    /// ```rust
    /// use chunk_list::ChunkList;
    ///
    /// let mut list = ChunkList::with_chunk_capacity(2).unwrap();
    /// list.push_tail(1);
    /// assert!(!list.head().is_full());
    ///
    /// list.push_tail(2);
    /// assert!(list.head().is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    /// Returns the stored elements, in order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns the stored elements, in order, for in-place modification.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Returns the element at `index` within this chunk, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Returns the element at `index` within this chunk for modification, if any.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.values.get_mut(index)
    }

    /// Overwrites the element at the local `index`, returning the previous one.
    ///
    /// # Panics
    /// Panics if `index` is not below [`len`](Chunk::len).
    ///
    /// # Example
    /// ```rust
    /// use chunk_list::ChunkList;
    ///
    /// let mut list = ChunkList::with_chunk_capacity(2).unwrap();
    /// list.extend_tail(["a", "b", "c"]);
    ///
    /// let second = list.chunks_mut().nth(1).unwrap();
    /// assert_eq!(second.set_local(0, "z"), "c");
    ///
    /// assert_eq!(list, ["a", "b", "z"]);
    /// ```
    pub fn set_local(&mut self, index: usize, value: T) -> T {
        match self.try_set_local(index, value) {
            Ok(previous) => previous,
            Err(err) => panic!("{err}"),
        }
    }

    /// Overwrites the element at the local `index`, returning the previous one, or fails with
    /// [`Error::IndexOutOfBounds`].
    pub fn try_set_local(&mut self, index: usize, value: T) -> Result<T, Error> {
        let len = self.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;

        Ok(std::mem::replace(slot, value))
    }

    /// Removes and returns the element at the local `index`, shifting the following elements of
    /// this chunk down by one.
    ///
    /// The chunk shrinks by one element and frees a slot that later pushes may reuse. Chunks are
    /// never merged or unlinked, even when they become empty.
    ///
    /// # Panics
    /// Panics if `index` is not below [`len`](Chunk::len).
    ///
    /// # Example
    /// ```rust
    /// use chunk_list::ChunkList;
    ///
    /// let mut list = ChunkList::with_chunk_capacity(3).unwrap();
    /// list.extend_tail([10, 20, 30]);
    ///
    /// let head = list.chunks_mut().next().unwrap();
    /// assert_eq!(head.delete_local(1), 20);
    /// assert_eq!(head.as_slice(), &[10, 30]);
    /// assert!(!head.is_full());
    /// ```
    pub fn delete_local(&mut self, index: usize) -> T {
        match self.try_delete_local(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Removes and returns the element at the local `index`, or fails with
    /// [`Error::IndexOutOfBounds`].
    pub fn try_delete_local(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }

        Ok(self.values.remove(index))
    }
}

impl<T: Clone> Clone for Chunk<T> {
    fn clone(&self) -> Self {
        let mut values = Vec::with_capacity(self.capacity);
        values.extend_from_slice(&self.values);
        Self {
            values,
            capacity: self.capacity,
        }
    }
}

impl<T> std::fmt::Debug for Chunk<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;
    use crate::chunk::Chunk;

    #[test]
    fn chunk_push_puts_elements_in_the_correct_positions() {
        let mut sut: Chunk<i64> = Chunk::new(4);
        assert_eq!(sut.len(), 0);
        assert!(sut.is_empty());
        assert!(!sut.is_full());

        sut.push_back(10);
        assert_eq!(sut.as_slice(), &[10]);

        sut.push_front(5);
        assert_eq!(sut.as_slice(), &[5, 10]);

        sut.push_back(15);
        assert_eq!(sut.as_slice(), &[5, 10, 15]);

        sut.push_front(0);
        assert_eq!(sut.as_slice(), &[0, 5, 10, 15]);
        assert_eq!(sut.len(), 4);
        assert!(sut.is_full());
    }

    #[test]
    fn chunk_is_full_exactly_at_capacity() {
        let mut sut: Chunk<i64> = Chunk::new(2);
        assert_eq!(sut.capacity(), 2);
        assert!(!sut.is_full());

        sut.push_back(1);
        assert!(!sut.is_full());

        sut.push_back(2);
        assert!(sut.is_full());

        sut.delete_local(0);
        assert!(!sut.is_full());
    }

    #[test]
    fn chunk_with_value_holds_only_that_value() {
        let sut = Chunk::with_value(3, "only");
        assert_eq!(sut.as_slice(), &["only"]);
        assert_eq!(sut.capacity(), 3);
    }

    #[test]
    fn chunk_set_local_overwrites_in_place() {
        let mut sut: Chunk<i64> = Chunk::new(3);
        sut.push_back(1);
        sut.push_back(2);
        sut.push_back(3);

        assert_eq!(sut.set_local(1, 20), 2);
        assert_eq!(sut.as_slice(), &[1, 20, 3]);
        assert_eq!(sut.len(), 3);

        assert_eq!(sut.try_set_local(2, 30), Ok(3));
        assert_eq!(sut.as_slice(), &[1, 20, 30]);
    }

    #[test]
    fn chunk_delete_local_shrinks_the_buffer() {
        let mut sut: Chunk<i64> = Chunk::new(6);
        for value in 0..6 {
            sut.push_back(value);
        }

        assert_eq!(sut.delete_local(2), 2);
        assert_eq!(sut.len(), 5);
        assert_eq!(sut.as_slice(), &[0, 1, 3, 4, 5]);

        assert_eq!(sut.delete_local(4), 5);
        assert_eq!(sut.len(), 4);
        assert_eq!(sut.as_slice(), &[0, 1, 3, 4]);

        assert_eq!(sut.delete_local(0), 0);
        assert_eq!(sut.len(), 3);
        assert_eq!(sut.as_slice(), &[1, 3, 4]);

        assert_eq!(sut.try_delete_local(1), Ok(3));
        assert_eq!(sut.try_delete_local(1), Ok(4));
        assert_eq!(sut.try_delete_local(0), Ok(1));
        assert!(sut.is_empty());
    }

    #[test]
    fn chunk_local_operations_report_index_out_of_bounds() {
        let mut sut: Chunk<i64> = Chunk::new(3);
        sut.push_back(1);

        assert_eq!(
            sut.try_set_local(1, 7),
            Err(Error::IndexOutOfBounds { index: 1, len: 1 })
        );
        assert_eq!(
            sut.try_delete_local(usize::MAX),
            Err(Error::IndexOutOfBounds {
                index: usize::MAX,
                len: 1
            })
        );
        assert_eq!(sut.as_slice(), &[1]);
    }

    #[test]
    fn chunk_set_local_panics_on_index_out_of_bounds() {
        let mut sut: Chunk<i64> = Chunk::new(3);
        sut.push_back(1);

        let result = std::panic::catch_unwind(move || sut.set_local(1, 100));
        assert!(result.is_err());
    }

    #[test]
    #[should_panic(expected = "Index out of bounds")]
    fn chunk_delete_local_panics_on_empty_chunk() {
        let mut sut: Chunk<i64> = Chunk::new(3);
        sut.delete_local(0);
    }

    #[test]
    fn chunk_get_with_empty_chunk_returns_none() {
        let mut sut: Chunk<i64> = Chunk::new(3);
        assert_eq!(sut.get(0), None);
        assert_eq!(sut.get_mut(0), None);
    }

    #[test]
    fn chunk_debug_lists_only_values() {
        let mut sut: Chunk<i64> = Chunk::new(3);
        sut.push_back(1);
        sut.push_back(2);
        assert_eq!(format!("{sut:?}"), "[1, 2]");
    }
}
