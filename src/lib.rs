//! # chunk_list
//!
//! `chunk_list` implements an **unrolled linked list**: a forward-only chain of fixed-capacity
//! chunks, each one a small contiguous buffer of elements.
//!
//! ## Features
//! - Chunked storage, so a full traversal touches one allocation per chunk instead of one per
//!   element.
//! - Amortised constant-time insertion at both ends of the sequence.
//! - Opportunistic reuse of free slots anywhere in the first chunks via
//!   [`push_unordered`](ChunkList::push_unordered), with a caller-chosen bound on the search.
//! - Two lazy, restartable views: elements with their global index, and the raw chunks.
//!
//! ## Use Cases
//! `chunk_list` fits sequences that are iterated far more often than they are edited:
//! - You mostly walk the whole sequence from front to back.
//! - You append or prepend, and sometimes drop elements in place.
//! - You don't need indexing faster than a linear scan, nor backwards traversal.
//!
//! ## Note
//! Chunks are never merged or rebalanced. Deleting elements leaves free slots behind that only
//! [`push_head`](ChunkList::push_head) (for the head chunk) and
//! [`push_unordered`](ChunkList::push_unordered) ever fill again.
//!
//! ## Example
//! ```rust
//! use chunk_list::ChunkList;
//!
//! let mut list = ChunkList::with_chunk_capacity(3).unwrap();
//! list.extend_tail(["hello", "world", "hello2", "DOESN'T FIT"]);
//!
//! let mut chunks = list.chunks();
//! assert_eq!(chunks.next().unwrap().as_slice(), &["hello", "world", "hello2"]);
//! assert_eq!(chunks.next().unwrap().as_slice(), &["DOESN'T FIT"]);
//! assert!(chunks.next().is_none());
//!
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some((0, &"hello")));
//! assert_eq!(iter.nth(2), Some((3, &"DOESN'T FIT")));
//! ```

mod chunk;
mod chunks;
mod error;
mod into_iter;
mod iter;
mod node;

pub use chunk::Chunk;
pub use chunks::{Chunks, ChunksMut};
pub use error::Error;
pub use into_iter::IntoIter;
pub use iter::{Iter, IterMut};

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use tracing::trace;

use crate::node::Node;

/// Chunk capacity used by [`ChunkList::new`] and by every constructor that doesn't take one.
pub const DEFAULT_CHUNK_CAPACITY: NonZeroUsize = match NonZeroUsize::new(128) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// An unrolled linked list: a chain of chunks, each holding up to `capacity` elements.
///
/// The chunk capacity is picked once, when the list is created, and every chunk the list
/// allocates afterwards gets the same one. The list always owns at least one chunk, possibly
/// empty. Each chunk exclusively owns the chunk after it; there are no back links.
///
/// The length is not cached: [`len`](ChunkList::len) walks the chain and sums the chunk lengths.
///
/// # Example
/// ```rust
/// use chunk_list::ChunkList;
///
/// let mut list = ChunkList::with_chunk_capacity(3).unwrap();
/// list.push_tail(2);
/// list.push_head(1);
/// list.push_tail(3);
///
/// assert!(!list.is_empty());
/// assert_eq!(list.len(), 3);
/// assert_eq!(list, [1, 2, 3]);
/// ```
pub struct ChunkList<T> {
    head: Box<Node<T>>,
    capacity: NonZeroUsize,
}

impl<T, const M: usize> From<[T; M]> for ChunkList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for ChunkList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for ChunkList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_tail(iter);
    }
}

impl<'a, T> Extend<&'a T> for ChunkList<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend_tail(iter.into_iter().cloned());
    }
}

impl<T> Default for ChunkList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ChunkList<T> {
    /// Creates an empty `ChunkList` whose chunks hold [`DEFAULT_CHUNK_CAPACITY`] elements.
    ///
    /// # Example
    /// ```rust
    /// use chunk_list::{ChunkList, DEFAULT_CHUNK_CAPACITY};
    ///
    /// let list: ChunkList<i64> = ChunkList::new();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), DEFAULT_CHUNK_CAPACITY.get());
    /// ```
    pub fn new() -> Self {
        Self::with_nonzero_capacity(DEFAULT_CHUNK_CAPACITY)
    }

    /// Creates an empty `ChunkList` whose chunks hold `capacity` elements each.
    ///
    /// # Errors
    /// Fails with [`Error::InvalidCapacity`] if `capacity` is zero.
    ///
    /// # Example
    /// ```rust
    /// use chunk_list::{ChunkList, Error};
    ///
    /// let list = ChunkList::<u8>::with_chunk_capacity(3).unwrap();
    /// assert_eq!(list.capacity(), 3);
    ///
    /// assert_eq!(
    ///     ChunkList::<u8>::with_chunk_capacity(0).err(),
    ///     Some(Error::InvalidCapacity { capacity: 0 })
    /// );
    /// ```
    pub fn with_chunk_capacity(capacity: usize) -> Result<Self, Error> {
        NonZeroUsize::new(capacity)
            .map(Self::with_nonzero_capacity)
            .ok_or(Error::InvalidCapacity { capacity })
    }

    /// Creates an empty `ChunkList` whose chunks hold `capacity` elements each.
    pub fn with_nonzero_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            head: Box::new(Node::new(Chunk::new(capacity.get()))),
            capacity,
        }
    }

    /// Returns the number of elements each chunk of this list can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns the number of elements in the list.
    ///
    /// This walks every chunk, so it costs time proportional to the number of chunks.
    ///
    /// # Example
    /// ```rust
    /// use chunk_list::ChunkList;
    ///
    /// let mut list = ChunkList::with_chunk_capacity(2).unwrap();
    /// assert_eq!(list.len(), 0);
    ///
    /// list.extend_tail([1, 2, 3]);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn len(&self) -> usize {
        self.head.len_tail()
    }

    /// Returns `true` if no chunk of the list holds an element.
    pub fn is_empty(&self) -> bool {
        self.chunks().all(Chunk::is_empty)
    }

    /// Returns the first chunk of the list.
    #[inline]
    pub fn head(&self) -> &Chunk<T> {
        &self.head.chunk
    }

    /// Appends an element after the last element of the list.
    ///
    /// The element goes into the tail chunk, or into a new tail chunk if the current one is full.
    /// Free slots in earlier chunks are never used.
    ///
    /// # Example
    /// ```rust
    /// use chunk_list::ChunkList;
    ///
    /// let mut list = ChunkList::with_chunk_capacity(2).unwrap();
    /// list.push_tail(10);
    /// list.push_tail(20);
    /// list.push_tail(30);
    ///
    /// assert_eq!(list, [10, 20, 30]);
    /// assert_eq!(list.chunks().count(), 2);
    /// ```
    pub fn push_tail(&mut self, value: T) {
        self.head.push_tail(value);
    }

    /// Appends every element of `values`, in order, as if by repeated
    /// [`push_tail`](ChunkList::push_tail). One call may allocate several chunks.
    pub fn extend_tail<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.head.extend_tail(values);
    }

    /// Inserts an element before the first element of the list.
    ///
    /// If the head chunk has room, the element is inserted at its front and no chunk is
    /// allocated. Otherwise a new head chunk holding only this element is linked in front of
    /// the old head.
    ///
    /// # Example
    /// ```rust
    /// use chunk_list::ChunkList;
    ///
    /// let mut list = ChunkList::with_chunk_capacity(3).unwrap();
    /// list.extend_head(["last", "third", "second", "FIRST"]);
    ///
    /// let mut chunks = list.chunks();
    /// assert_eq!(chunks.next().unwrap().as_slice(), &["FIRST"]);
    /// assert_eq!(chunks.next().unwrap().as_slice(), &["second", "third", "last"]);
    /// ```
    pub fn push_head(&mut self, value: T) {
        if !self.head.chunk.is_full() {
            self.head.chunk.push_front(value);
            return;
        }

        let capacity = self.capacity.get();
        trace!(capacity, "allocating head chunk");
        let head = Box::new(Node::new(Chunk::with_value(capacity, value)));
        let previous = std::mem::replace(&mut self.head, head);
        self.head.next = Some(previous);
    }

    /// Inserts every element of `values`, in order, as if by repeated
    /// [`push_head`](ChunkList::push_head). The last element ends up first.
    pub fn extend_head<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.push_head(value);
        }
    }

    /// Stores an element in the first free slot found among the first `probe_limit` chunks.
    ///
    /// The element is appended to the first chunk, in head to tail order, that is not full.
    /// Where that lands relative to the other elements is unspecified. If none of the first
    /// `probe_limit` chunks has room, the element is pushed with
    /// [`push_head`](ChunkList::push_head) instead, so the search never looks past
    /// `probe_limit` chunks.
    ///
    /// # Example
    /// ```rust
    /// use chunk_list::ChunkList;
    ///
    /// let mut list = ChunkList::with_chunk_capacity(2).unwrap();
    /// list.extend_tail([1, 2, 3, 4, 5]);
    /// list.chunks_mut().nth(1).unwrap().delete_local(0);
    ///
    /// // The second chunk has a hole now.
    /// list.push_unordered(2, 6);
    /// assert_eq!(list, [1, 2, 4, 6, 5]);
    ///
    /// // Nothing free within the first two chunks: falls back to the head.
    /// list.push_unordered(2, 7);
    /// assert_eq!(list, [7, 1, 2, 4, 6, 5]);
    /// ```
    pub fn push_unordered(&mut self, probe_limit: usize, value: T) {
        let free = self
            .chunks_mut()
            .take(probe_limit)
            .find(|chunk| !chunk.is_full());

        if let Some(chunk) = free {
            chunk.push_back(value);
            return;
        }

        trace!(probe_limit, "no free slot within probe limit, pushing to head");
        self.push_head(value);
    }

    /// Returns a reference to the element at the global `index`, or `None` if it is out of
    /// bounds. Lookups scan the chunks from the head.
    ///
    /// # Example
    /// ```rust
    /// use chunk_list::ChunkList;
    ///
    /// let list = ChunkList::<_>::from([0, 1, 2]);
    /// assert_eq!(list.get(1), Some(&1));
    /// assert_eq!(list.get(3), None);
    /// ```
    pub fn get(&self, mut index: usize) -> Option<&T> {
        for chunk in self.chunks() {
            if index < chunk.len() {
                return chunk.get(index);
            }
            index -= chunk.len();
        }
        None
    }

    /// Returns a mutable reference to the element at the global `index`, or `None` if it is
    /// out of bounds.
    pub fn get_mut(&mut self, mut index: usize) -> Option<&mut T> {
        for chunk in self.chunks_mut() {
            if index < chunk.len() {
                return chunk.get_mut(index);
            }
            index -= chunk.len();
        }
        None
    }

    /// Removes every element and chunk, leaving a single empty chunk of the same capacity.
    ///
    /// # Example
    /// ```rust
    /// use chunk_list::ChunkList;
    ///
    /// let mut list = ChunkList::with_chunk_capacity(2).unwrap();
    /// list.extend_tail([1, 2, 3]);
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.chunks().count(), 1);
    /// assert_eq!(list.capacity(), 2);
    /// ```
    pub fn clear(&mut self) {
        *self = Self::with_nonzero_capacity(self.capacity);
    }

    /// Provides an iterator over list's elements paired with their global index.
    ///
    /// Every call starts over from the head. The iterator borrows the list, so it can be
    /// dropped at any point without touching the chunks it hasn't reached.
    ///
    /// # Example
    /// ```rust
    /// use chunk_list::ChunkList;
    ///
    /// let mut list = ChunkList::with_chunk_capacity(2).unwrap();
    /// list.extend_tail(['a', 'b', 'c']);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some((0, &'a')));
    /// assert_eq!(iter.next(), Some((1, &'b')));
    /// assert_eq!(iter.next(), Some((2, &'c')));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_list(self)
    }

    /// Provides a mutable iterator over list's elements paired with their global index.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::from_list(self)
    }

    /// Provides an iterator over the chunks of the list, from head to tail.
    #[inline]
    pub fn chunks(&self) -> Chunks<'_, T> {
        Chunks::from_list(self)
    }

    /// Provides a mutable iterator over the chunks of the list, from head to tail.
    ///
    /// Chunks can be edited locally with [`Chunk::set_local`] and [`Chunk::delete_local`].
    #[inline]
    pub fn chunks_mut(&mut self) -> ChunksMut<'_, T> {
        ChunksMut::from_list(self)
    }

    /// Detaches the whole chain, leaving an empty head in its place.
    pub(crate) fn take_head(&mut self) -> Box<Node<T>> {
        let empty = Box::new(Node::new(Chunk::new(self.capacity.get())));
        std::mem::replace(&mut self.head, empty)
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(_, value)| value)
    }
}

impl<T> Drop for ChunkList<T> {
    fn drop(&mut self) {
        let mut pending = self.head.next.take();
        while let Some(mut node) = pending {
            pending = node.next.take();
        }
    }
}

impl<T: Clone> Clone for ChunkList<T> {
    fn clone(&self) -> Self {
        let mut head = Box::new(Node::new(self.head.chunk.clone()));

        let mut tail = &mut *head;
        for chunk in self.chunks().skip(1) {
            tail = &mut **tail.next.insert(Box::new(Node::new(chunk.clone())));
        }

        Self {
            head,
            capacity: self.capacity,
        }
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for ChunkList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.values().eq(other)
    }
}

impl<T> PartialEq<&[T]> for ChunkList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.values().eq(other.iter())
    }
}

impl<T> PartialEq<[T]> for ChunkList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.values().eq(other)
    }
}

impl<T> PartialEq for ChunkList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.values().eq(other.values())
    }
}

impl<T> Eq for ChunkList<T> where T: Eq {}

impl<T> PartialOrd for ChunkList<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.values().partial_cmp(other.values())
    }
}

impl<T> Ord for ChunkList<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.values().cmp(other.values())
    }
}

impl<T> Hash for ChunkList<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.values().for_each(|v| v.hash(state));
    }
}

impl<T> std::fmt::Debug for ChunkList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.chunks()).finish()
    }
}

impl<T> IntoIterator for ChunkList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a ChunkList<T> {
    type Item = (usize, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a mut ChunkList<T> {
    type Item = (usize, &'a mut T);
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::from_list(self)
    }
}
