//! Reading and importing avatar slots through a [`BlockStore`].

use crate::block_store::BlockStore;
use crate::error::BlockError;
use crate::slot::{AvatarSlot, ImportTarget, SlotKeys};
use sv_profile_texture::{blend, encode_image, BlendStrategy, RgbaImage, TextureDimensions};

/// Reads the declared dimensions of a slot.
pub fn slot_dimensions<S: BlockStore + ?Sized>(
    store: &S,
    keys: &SlotKeys,
) -> Result<TextureDimensions, BlockError> {
    let height = store.scalar_u32(keys.height)?;
    let width = store.scalar_u32(keys.width)?;
    Ok(TextureDimensions::new(width as usize, height as usize))
}

/// Reads a slot's texture and renders it with `strategy`.
///
/// # Errors
///
/// - [`BlockError::MissingBlock`] / [`BlockError::WrongBlockType`] if a block is absent.
/// - [`BlockError::Texture`] if the texture is shorter than its declared dimensions.
pub fn read_slot_image<S: BlockStore + ?Sized>(
    store: &S,
    keys: &SlotKeys,
    strategy: BlendStrategy,
) -> Result<RgbaImage, BlockError> {
    let dims = slot_dimensions(store, keys)?;
    let buffer = store.buffer(keys.image)?;
    Ok(blend(buffer, dims, strategy)?)
}

/// Replaces a slot's texture with `image`.
///
/// The image must already have [`ImportTarget::image_size`] pixels. It is encoded into a
/// zeroed block of [`ImportTarget::block_len`] bytes, then the width, height and size
/// blocks are rewritten before the texture block is replaced.
///
/// Encoding and block lookups happen before the first write, so a failure leaves the store
/// unchanged.
///
/// # Errors
///
/// - [`BlockError::DimensionMismatch`] if `image` is not the target's size.
/// - [`BlockError::MissingBlock`] / [`BlockError::WrongBlockType`] if a block is absent.
pub fn import_slot_image<S: BlockStore + ?Sized>(
    store: &mut S,
    keys: &SlotKeys,
    target: ImportTarget,
    image: &RgbaImage,
) -> Result<(), BlockError> {
    let expected = target.image_size();
    let actual = (image.width(), image.height());
    if actual != expected {
        return Err(BlockError::DimensionMismatch { expected, actual });
    }

    let data = encode_image(image, target.block_len())?;

    // All four blocks must exist before any of them is touched.
    store.scalar_u32(keys.width)?;
    store.scalar_u32(keys.height)?;
    store.scalar_u32(keys.size)?;
    store.buffer(keys.image)?;

    let declared = target.declared_dimensions();
    store.set_scalar_u32(keys.width, declared.width as u32)?;
    store.set_scalar_u32(keys.height, declared.height as u32)?;
    store.set_scalar_u32(keys.size, target.declared_size())?;
    store.replace_buffer(keys.image, data)?;
    Ok(())
}

/// Replaces the texture of `slot` with `image`, using the slot's [`ImportTarget`].
///
/// # Errors
///
/// [`BlockError::NotImportable`] for the initial slots, otherwise as [`import_slot_image`].
pub fn import_avatar_slot<S: BlockStore + ?Sized>(
    store: &mut S,
    keys: &SlotKeys,
    slot: AvatarSlot,
    image: &RgbaImage,
) -> Result<ImportTarget, BlockError> {
    let target = slot
        .import_target()
        .ok_or(BlockError::NotImportable(slot.name()))?;
    import_slot_image(store, keys, target, image)?;
    Ok(target)
}
