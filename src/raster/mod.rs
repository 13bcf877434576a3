//! # Raster Payloads
//!
//! [`Printer::raster`](crate::Printer::raster) consumes anything implementing
//! [`ToRaster`]: a producer of `(width, height, bitmap)` that goes on the
//! wire after the `GS v 0 m` header.
//!
//! ```text
//! 1D 76 30 m | xL xH | yL yH | d1 ... dk
//!   header     width   height  bitmap
//! ```
//!
//! [`ImageRaster`] converts images from the `image` crate. It reports the
//! width in bytes per row (`ceil(pixels / 8)`), which is what `GS v 0`
//! firmware expects in `xL xH`.

pub mod dither;

use image::{DynamicImage, GrayImage};

use crate::buffer::checked_u16;
use crate::error::EscposError;

pub use dither::Dithering;

/// Raster data ready to be written after the raster header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterPayload {
    pub width: u16,
    pub height: u16,
    pub bitmap: Vec<u8>,
}

impl RasterPayload {
    /// Build a payload from wider integer dimensions.
    ///
    /// ## Errors
    ///
    /// [`EscposError::ValueOutOfRange`] if either dimension exceeds 65535.
    pub fn new(width: u32, height: u32, bitmap: Vec<u8>) -> Result<Self, EscposError> {
        Ok(Self {
            width: checked_u16("raster width", width)?,
            height: checked_u16("raster height", height)?,
            bitmap,
        })
    }
}

/// Image collaborator consumed by `Printer::raster`
pub trait ToRaster {
    /// Produce the raster payload, or [`EscposError::RasterConversion`].
    fn to_raster(&self) -> Result<RasterPayload, EscposError>;
}

impl ToRaster for RasterPayload {
    fn to_raster(&self) -> Result<RasterPayload, EscposError> {
        Ok(self.clone())
    }
}

/// An image prepared for raster printing
///
/// ## Example
///
/// ```
/// use escpos_buffer::raster::{ImageRaster, ToRaster};
/// use image::{GrayImage, Luma};
///
/// let img = GrayImage::from_pixel(16, 2, Luma([0]));
/// let payload = ImageRaster::new(img.into()).to_raster()?;
///
/// assert_eq!((payload.width, payload.height), (2, 2));
/// assert_eq!(payload.bitmap, vec![0xFF; 4]);
/// # Ok::<(), escpos_buffer::EscposError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ImageRaster {
    image: DynamicImage,
    dithering: Dithering,
    max_width: Option<u32>,
}

impl ImageRaster {
    pub fn new(image: DynamicImage) -> Self {
        Self {
            image,
            dithering: Dithering::default(),
            max_width: None,
        }
    }

    /// Load an image file.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, EscposError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|e| {
            EscposError::RasterConversion(format!("Failed to load {}: {}", path.display(), e))
        })?;
        Ok(Self::new(image))
    }

    pub fn dithering(mut self, dithering: Dithering) -> Self {
        self.dithering = dithering;
        self
    }

    /// Downscale images wider than `dots`, keeping the aspect ratio.
    pub fn max_width(mut self, dots: u32) -> Self {
        self.max_width = Some(dots);
        self
    }

    fn grayscale(&self) -> GrayImage {
        match self.max_width {
            Some(max) if self.image.width() > max => self
                .image
                .resize(max, u32::MAX, image::imageops::FilterType::Triangle)
                .to_luma8(),
            _ => self.image.to_luma8(),
        }
    }
}

impl ToRaster for ImageRaster {
    fn to_raster(&self) -> Result<RasterPayload, EscposError> {
        let gray = self.grayscale();
        let (width, height) = gray.dimensions();
        if width == 0 || height == 0 {
            return Err(EscposError::RasterConversion(format!(
                "Image has no pixels ({}x{})",
                width, height
            )));
        }

        let width_bytes = width.div_ceil(8);
        let mut bitmap = Vec::with_capacity(width_bytes as usize * height as usize);
        let mut row = Vec::with_capacity(width as usize);

        for (y, pixels) in gray.rows().enumerate() {
            row.clear();
            row.extend(pixels.enumerate().map(|(x, luma)| {
                let darkness = 1.0 - luma.0[0] as f32 / 255.0;
                self.dithering.should_print(x, y, darkness)
            }));
            dither::pack_row(&row, &mut bitmap);
        }

        RasterPayload::new(width_bytes, height, bitmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_payload_range_check() {
        assert!(RasterPayload::new(65_535, 1, Vec::new()).is_ok());
        let err = RasterPayload::new(1, 65_536, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            EscposError::ValueOutOfRange { field: "raster height", .. }
        ));
    }

    #[test]
    fn test_white_image_is_blank() {
        let img = GrayImage::from_pixel(8, 3, Luma([255]));
        let payload = ImageRaster::new(img.into()).to_raster().unwrap();
        assert_eq!(payload.bitmap, vec![0; 3]);
    }

    #[test]
    fn test_width_is_rounded_up_to_bytes() {
        let img = GrayImage::from_pixel(10, 4, Luma([0]));
        let payload = ImageRaster::new(img.into()).to_raster().unwrap();
        assert_eq!(payload.width, 2);
        assert_eq!(payload.height, 4);
        assert_eq!(payload.bitmap, [0xFF, 0xC0].repeat(4));
    }

    #[test]
    fn test_threshold_dithering() {
        let mut img = GrayImage::new(8, 1);
        for x in 0..8 {
            img.put_pixel(x, 0, Luma([if x < 4 { 10 } else { 240 }]));
        }
        let payload = ImageRaster::new(img.into())
            .dithering(Dithering::Threshold(0.5))
            .to_raster()
            .unwrap();
        assert_eq!(payload.bitmap, vec![0xF0]);
    }

    #[test]
    fn test_max_width_downscales() {
        let img = GrayImage::from_pixel(64, 32, Luma([0]));
        let payload = ImageRaster::new(img.into())
            .max_width(32)
            .to_raster()
            .unwrap();
        assert_eq!(payload.width, 4);
        assert_eq!(payload.height, 16);
    }

    #[test]
    fn test_empty_image_fails() {
        let img = GrayImage::new(0, 0);
        let err = ImageRaster::new(img.into()).to_raster().unwrap_err();
        assert!(matches!(err, EscposError::RasterConversion(_)));
    }
}
