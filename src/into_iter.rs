use core::iter::FusedIterator;
use std::vec;

use crate::ChunkList;
use crate::node::Node;

/// An owning iterator over the elements of a ChunkList.
///
/// This struct is created by ChunkList::into_iter().
pub struct IntoIter<T> {
    pending: Option<Box<Node<T>>>,
    values: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list(mut list: ChunkList<T>) -> Self {
        Self {
            pending: Some(list.take_head()),
            values: Vec::new().into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.values.next() {
                return Some(value);
            }

            let Node { chunk, next } = *self.pending.take()?;
            self.values = chunk.into_values().into_iter();
            self.pending = next;
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

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let mut pending = self.pending.take();
        while let Some(mut node) = pending {
            pending = node.next.take();
        }
    }
}

impl<T> core::fmt::Debug for IntoIter<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter")
            .field(&self.values.as_slice())
            .finish_non_exhaustive()
    }
}
