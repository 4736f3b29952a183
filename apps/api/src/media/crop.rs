use std::io::Cursor;

use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::errors::AppError;

/// Width of every published crop, in pixels.
pub const TARGET_WIDTH: u32 = 350;
/// Height of every published crop, in pixels.
pub const TARGET_HEIGHT: u32 = 250;

/// A crop rectangle in source pixel coordinates. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    /// The `target_width` x `target_height` rectangle centered in a `width` x `height` image.
    ///
    /// Odd slack is split with the extra pixel on the right/bottom. Returns `None` when the
    /// image is smaller than the target in either dimension.
    pub fn centered(width: u32, height: u32, target_width: u32, target_height: u32) -> Option<Self> {
        let left = width.checked_sub(target_width)? / 2;
        let top = height.checked_sub(target_height)? / 2;
        Some(CropRect {
            left,
            top,
            right: left + target_width,
            bottom: top + target_height,
        })
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

pub fn decode(bytes: &[u8]) -> Result<DynamicImage, AppError> {
    Ok(image::load_from_memory(bytes)?)
}

/// Cuts the centered `TARGET_WIDTH` x `TARGET_HEIGHT` region out of `img`.
pub fn center_crop(img: &DynamicImage) -> Result<DynamicImage, AppError> {
    let (width, height) = img.dimensions();
    let rect = CropRect::centered(width, height, TARGET_WIDTH, TARGET_HEIGHT).ok_or_else(|| {
        AppError::UnprocessableEntity(format!(
            "Image is {width}x{height}; at least {TARGET_WIDTH}x{TARGET_HEIGHT} is required"
        ))
    })?;
    Ok(img.crop_imm(rect.left, rect.top, rect.width(), rect.height()))
}

/// Encoding happens after the upload decoded fine, so failures here are server-side.
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, AppError> {
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .map_err(|e| anyhow::Error::new(e).context("failed to encode cropped image as PNG"))?;
    Ok(out)
}

/// Decode, center-crop and re-encode as PNG in one step.
pub fn crop_to_png(bytes: &[u8]) -> Result<Vec<u8>, AppError> {
    let source = decode(bytes)?;
    let cropped = center_crop(&source)?;
    encode_png(&cropped)
}
