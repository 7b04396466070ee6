use crate::error::{Result, ViewerError};
use image::RgbImage;

const BYTES_PER_PIXEL: usize = 3;

/// Raw RGB pixel buffer handed back by a [`PdfEngine`](super::engine::PdfEngine).
///
/// Rows are `stride` bytes apart; anything past `width * 3` in a row is padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    stride: usize,
    samples: Vec<u8>,
}

impl Pixmap {
    pub fn new(width: u32, height: u32, stride: usize, samples: Vec<u8>) -> Result<Self> {
        let row_bytes = width as usize * BYTES_PER_PIXEL;
        if stride < row_bytes {
            return Err(ViewerError::InvalidPixmap(format!(
                "stride {stride} is shorter than a {width} pixel row"
            )));
        }

        let expected = stride * height as usize;
        if samples.len() < expected {
            return Err(ViewerError::InvalidPixmap(format!(
                "expected {expected} bytes for {width}x{height} with stride {stride}, got {}",
                samples.len()
            )));
        }

        Ok(Self {
            width,
            height,
            stride,
            samples,
        })
    }

    /// Builds a pixmap whose rows carry no padding.
    pub fn packed(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        Self::new(width, height, width as usize * BYTES_PER_PIXEL, samples)
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }

    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.stride;
        self.samples
            .get(start..start + self.width as usize * BYTES_PER_PIXEL)
    }

    fn to_rgb_image(&self) -> Result<RgbImage> {
        let mut packed = Vec::with_capacity(self.width as usize * self.height as usize * 3);
        for y in 0..self.height {
            let row = self
                .row(y)
                .ok_or_else(|| ViewerError::InvalidPixmap(format!("missing row {y}")))?;
            packed.extend_from_slice(row);
        }

        RgbImage::from_raw(self.width, self.height, packed).ok_or_else(|| {
            ViewerError::InvalidPixmap(format!(
                "buffer does not fit a {}x{} image",
                self.width, self.height
            ))
        })
    }

    /// Converts to the form the display uploads as a texture.
    pub fn to_color_image(&self) -> Result<egui::ColorImage> {
        let image = self.to_rgb_image()?;
        Ok(egui::ColorImage::from_rgb(self.size(), image.as_raw()))
    }
}
