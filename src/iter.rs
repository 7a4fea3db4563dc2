use core::iter::FusedIterator;
use core::slice;

use crate::ChunkList;
use crate::node::Node;

/// An iterator over the elements of a ChunkList, paired with their global index.
///
/// This struct is created by ChunkList::iter().
pub struct Iter<'a, T> {
    pending: Option<&'a Node<T>>,
    values: slice::Iter<'a, T>,
    index: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_list(list: &'a ChunkList<T>) -> Self {
        Self {
            pending: Some(&*list.head),
            values: Default::default(),
            index: 0,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending,
            values: self.values.clone(),
            index: self.index,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.values.next() {
                let index = self.index;
                self.index += 1;
                return Some((index, value));
            }

            let node = self.pending.take()?;
            self.values = node.chunk.as_slice().iter();
            self.pending = node.next.as_deref();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.pending {
            Some(_) => (self.values.len(), None),
            None => (self.values.len(), Some(self.values.len())),
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> core::fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter").field(&self.index).finish()
    }
}

/// A mutable iterator over the elements of a ChunkList, paired with their global index.
///
/// This struct is created by ChunkList::iter_mut().
pub struct IterMut<'a, T> {
    pending: Option<&'a mut Node<T>>,
    values: slice::IterMut<'a, T>,
    index: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn from_list(list: &'a mut ChunkList<T>) -> Self {
        Self {
            pending: Some(&mut *list.head),
            values: Default::default(),
            index: 0,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = (usize, &'a mut T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.values.next() {
                let index = self.index;
                self.index += 1;
                return Some((index, value));
            }

            let Node { chunk, next } = self.pending.take()?;
            self.values = chunk.as_mut_slice().iter_mut();
            self.pending = next.as_deref_mut();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.pending {
            Some(_) => (self.values.len(), None),
            None => (self.values.len(), Some(self.values.len())),
        }
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> core::fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IterMut").field(&self.index).finish()
    }
}
