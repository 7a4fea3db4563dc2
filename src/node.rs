use tracing::trace;

use crate::chunk::Chunk;

/// One link of the chain: a chunk plus exclusive ownership of the rest of the chain.
pub(crate) struct Node<T> {
    pub(crate) chunk: Chunk<T>,
    pub(crate) next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn new(chunk: Chunk<T>) -> Self {
        Self { chunk, next: None }
    }

    /// The last node reachable from this one.
    pub fn tail_mut(&mut self) -> &mut Node<T> {
        let mut node = self;
        while let Some(ref mut next) = node.next {
            node = &mut **next;
        }
        node
    }

    /// Appends `value` after the last element of the chain, allocating a new tail when the
    /// current one is full. Returns the node that received the value.
    pub fn push_tail(&mut self, value: T) -> &mut Node<T> {
        self.tail_mut().push_local(value)
    }

    /// Appends `value` to this node if it is the tail and has room, or to a freshly linked tail
    /// of the same capacity otherwise.
    fn push_local(&mut self, value: T) -> &mut Node<T> {
        debug_assert!(self.next.is_none());

        if !self.chunk.is_full() {
            self.chunk.push_back(value);
            return self;
        }

        let capacity = self.chunk.capacity();
        trace!(capacity, "allocating tail chunk");
        self.next
            .insert(Box::new(Node::new(Chunk::with_value(capacity, value))))
    }

    /// Appends every value in order, walking to the tail only once.
    pub fn extend_tail<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut tail = self.tail_mut();
        for value in values {
            tail = tail.push_local(value);
        }
    }

    /// Number of elements held by this node and every node after it.
    pub fn len_tail(&self) -> usize {
        let mut len = 0;
        let mut node = Some(self);
        while let Some(current) = node {
            len += current.chunk.len();
            node = current.next.as_deref();
        }
        len
    }
}
