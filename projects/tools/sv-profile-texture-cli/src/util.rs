use crate::error::CliError;
use image::{DynamicImage, ImageFormat};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::{Path, PathBuf};
use sv_profile_texture::RgbaImage;

/// Reads a raw block dump into memory.
pub fn read_dump(path: &Path) -> Result<Vec<u8>, CliError> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;
    if size == 0 {
        return Ok(Vec::new());
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    Ok(mapping.as_slice().to_vec())
}

/// Writes `data` as a raw block dump, replacing any existing file.
pub fn write_dump(path: &Path, data: &[u8]) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let handle = ReadWriteFileHandle::create_preallocated(path, data.len() as i64)?;
    if data.is_empty() {
        return Ok(());
    }

    let mut mapping = ReadWriteMmap::new(&handle, 0, data.len())?;
    mapping.as_mut_slice().copy_from_slice(data);
    Ok(())
}

/// Picks the picture format from the file extension, falling back to PNG.
pub fn output_format(path: &Path) -> ImageFormat {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => ImageFormat::Jpeg,
        Some("bmp") => ImageFormat::Bmp,
        _ => ImageFormat::Png,
    }
}

/// Saves a rendered texture, encoding it by the extension of `path`.
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<(), CliError> {
    let buffer =
        image::RgbaImage::from_raw(image.width() as u32, image.height() as u32, image.to_rgba8_bytes())
            .ok_or(CliError::InvalidRaster(image.width(), image.height()))?;

    let format = output_format(path);
    match format {
        // JPEG has no alpha channel.
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(buffer)
            .to_rgb8()
            .save_with_format(path, format)?,
        _ => buffer.save_with_format(path, format)?,
    }
    Ok(())
}

/// Loads a picture and stretches it to `width` × `height`.
pub fn load_image(path: &Path, width: usize, height: usize) -> Result<RgbaImage, CliError> {
    let source = image::open(path)?;
    log::debug!(
        "Loaded {}x{} picture from {}",
        source.width(),
        source.height(),
        path.display()
    );

    let rgba = if (source.width(), source.height()) == (width as u32, height as u32) {
        source.to_rgba8()
    } else {
        source
            .resize_exact(
                width as u32,
                height as u32,
                image::imageops::FilterType::Triangle,
            )
            .to_rgba8()
    };
    Ok(RgbaImage::from_rgba8_bytes(width, height, rgba.as_raw())?)
}

/// Path for one strategy when exporting all of them, e.g. `icon.dual-mask-alpha-blend.png`.
pub fn strategy_output_path(output: &Path, strategy_name: &str) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = output
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_owned());

    output.with_file_name(format!("{stem}.{strategy_name}.{extension}"))
}
