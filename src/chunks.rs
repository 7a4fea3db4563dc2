use core::iter::FusedIterator;

use crate::ChunkList;
use crate::chunk::Chunk;
use crate::node::Node;

/// An iterator over the chunks of a ChunkList, from head to tail.
///
/// This struct is created by ChunkList::chunks().
pub struct Chunks<'a, T> {
    pending: Option<&'a Node<T>>,
}

impl<'a, T> Chunks<'a, T> {
    pub(crate) fn from_list(list: &'a ChunkList<T>) -> Self {
        Self {
            pending: Some(&*list.head),
        }
    }
}

impl<T> Clone for Chunks<'_, T> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending,
        }
    }
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = &'a Chunk<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.take()?;
        self.pending = node.next.as_deref();
        Some(&node.chunk)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.pending {
            Some(_) => (1, None),
            None => (0, Some(0)),
        }
    }
}

impl<T> FusedIterator for Chunks<'_, T> {}

impl<T> core::fmt::Debug for Chunks<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// A mutable iterator over the chunks of a ChunkList, from head to tail.
///
/// Each chunk can be edited in place, but the links between chunks stay out of reach.
///
/// This struct is created by ChunkList::chunks_mut().
pub struct ChunksMut<'a, T> {
    pending: Option<&'a mut Node<T>>,
}

impl<'a, T> ChunksMut<'a, T> {
    pub(crate) fn from_list(list: &'a mut ChunkList<T>) -> Self {
        Self {
            pending: Some(&mut *list.head),
        }
    }
}

impl<'a, T> Iterator for ChunksMut<'a, T> {
    type Item = &'a mut Chunk<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let Node { chunk, next } = self.pending.take()?;
        self.pending = next.as_deref_mut();
        Some(chunk)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.pending {
            Some(_) => (1, None),
            None => (0, Some(0)),
        }
    }
}

impl<T> FusedIterator for ChunksMut<'_, T> {}

impl<T> core::fmt::Debug for ChunksMut<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChunksMut")
            .field("exhausted", &self.pending.is_none())
            .finish()
    }
}
