#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod api;
pub mod block_store;
pub mod error;
pub mod slot;

pub use api::*;
pub use block_store::{BlockStore, MemoryBlockStore};
pub use error::BlockError;
pub use slot::{AvatarSlot, ImportTarget, SlotKeys};

// Re-export the codec so callers need a single dependency.
pub use sv_profile_texture;
