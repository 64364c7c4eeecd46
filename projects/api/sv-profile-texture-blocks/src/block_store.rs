//! The save block store as seen by the avatar codec.

use crate::error::BlockError;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

/// Key-addressed access to a save file's data blocks.
///
/// Keys are the save's `u32` block identifiers. Implementations decide how blocks are
/// stored; the avatar operations only need these four accessors.
pub trait BlockStore {
    /// Returns the raw bytes of the buffer block `key`.
    ///
    /// The buffer may be shorter than its metadata claims. Callers detect that when decoding.
    fn buffer(&self, key: u32) -> Result<&[u8], BlockError>;

    /// Returns the `u32` scalar stored in block `key`.
    fn scalar_u32(&self, key: u32) -> Result<u32, BlockError>;

    /// Overwrites the `u32` scalar stored in block `key`.
    fn set_scalar_u32(&mut self, key: u32, value: u32) -> Result<(), BlockError>;

    /// Replaces the contents of buffer block `key`.
    fn replace_buffer(&mut self, key: u32, data: Vec<u8>) -> Result<(), BlockError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    Buffer(Vec<u8>),
    Scalar(u32),
}

/// A [`BlockStore`] held entirely in memory.
///
/// Writes only succeed for blocks that already exist with the same type, as in a real save.
///
/// # Examples
///
/// ```
/// use sv_profile_texture_blocks::{BlockStore, MemoryBlockStore};
///
/// let mut store = MemoryBlockStore::new();
/// store.insert_scalar(0x10, 224);
/// store.set_scalar_u32(0x10, 56).unwrap();
/// assert_eq!(store.scalar_u32(0x10), Ok(56));
/// assert!(store.is_edited());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBlockStore {
    blocks: BTreeMap<u32, Block>,
    edited: bool,
}

impl MemoryBlockStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a buffer block without marking the store as edited.
    pub fn insert_buffer(&mut self, key: u32, data: Vec<u8>) {
        self.blocks.insert(key, Block::Buffer(data));
    }

    /// Adds or replaces a scalar block without marking the store as edited.
    pub fn insert_scalar(&mut self, key: u32, value: u32) {
        self.blocks.insert(key, Block::Scalar(value));
    }

    /// Whether any block was written through [`BlockStore`] since creation.
    pub fn is_edited(&self) -> bool {
        self.edited
    }

    fn block_mut(&mut self, key: u32) -> Result<&mut Block, BlockError> {
        self.blocks.get_mut(&key).ok_or(BlockError::MissingBlock(key))
    }
}

impl BlockStore for MemoryBlockStore {
    fn buffer(&self, key: u32) -> Result<&[u8], BlockError> {
        match self.blocks.get(&key) {
            Some(Block::Buffer(data)) => Ok(data.as_slice()),
            Some(Block::Scalar(_)) => Err(BlockError::WrongBlockType {
                key,
                expected: "buffer",
            }),
            None => Err(BlockError::MissingBlock(key)),
        }
    }

    fn scalar_u32(&self, key: u32) -> Result<u32, BlockError> {
        match self.blocks.get(&key) {
            Some(Block::Scalar(value)) => Ok(*value),
            Some(Block::Buffer(_)) => Err(BlockError::WrongBlockType {
                key,
                expected: "scalar",
            }),
            None => Err(BlockError::MissingBlock(key)),
        }
    }

    fn set_scalar_u32(&mut self, key: u32, value: u32) -> Result<(), BlockError> {
        match self.block_mut(key)? {
            Block::Scalar(current) => *current = value,
            Block::Buffer(_) => {
                return Err(BlockError::WrongBlockType {
                    key,
                    expected: "scalar",
                })
            }
        }
        self.edited = true;
        Ok(())
    }

    fn replace_buffer(&mut self, key: u32, data: Vec<u8>) -> Result<(), BlockError> {
        match self.block_mut(key)? {
            Block::Buffer(current) => *current = data,
            Block::Scalar(_) => {
                return Err(BlockError::WrongBlockType {
                    key,
                    expected: "buffer",
                })
            }
        }
        self.edited = true;
        Ok(())
    }
}
