/// Errors raised by [`ChunkList`](crate::ChunkList) and [`Chunk`](crate::Chunk) operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A list was configured with a chunk capacity that cannot hold any element.
    #[error("invalid chunk capacity {capacity}: a chunk must hold at least one element")]
    InvalidCapacity { capacity: usize },

    /// A local index fell outside the chunk's occupied slots.
    #[error("Index out of bounds: index {index} is not below chunk length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
