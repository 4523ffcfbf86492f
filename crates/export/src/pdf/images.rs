//! PDF Image Handling
//!
//! The captured page embedded as an image XObject. The writer compresses
//! the samples, so the data here stays raw.

use super::objects::{PdfDictionary, PdfObject, PdfStream};
use super::writer::{PdfError, Result};

/// Bytes per pixel; captures are always 8-bit DeviceRGB
const COMPONENTS: usize = 3;

/// Image samples for embedding in PDF
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl ImageData {
    /// Raw 8-bit RGB samples, row-major, top row first
    pub fn from_raw_rgb(data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let image = Self { width, height, data };
        image.validate()?;
        Ok(image)
    }

    /// Drop alpha from RGBA samples.
    ///
    /// The pixels must already be composited onto an opaque background;
    /// the color channels are taken as they are.
    pub fn from_opaque_rgba(rgba: &[u8], width: u32, height: u32) -> Result<Self> {
        let rgb = rgba
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        Self::from_raw_rgb(rgb, width, height)
    }

    fn row_len(&self) -> usize {
        self.width as usize * COMPONENTS
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PdfError::InvalidDocument(format!(
                "image has zero extent ({}x{})",
                self.width, self.height
            )));
        }
        let expected = self.row_len() * self.height as usize;
        if self.data.len() != expected {
            return Err(PdfError::InvalidDocument(format!(
                "image data is {} bytes, expected {}",
                self.data.len(),
                expected
            )));
        }
        Ok(())
    }

    /// Keep only the first `rows` rows
    pub fn crop_rows(mut self, rows: u32) -> Self {
        if rows > 0 && rows < self.height {
            self.data.truncate(self.row_len() * rows as usize);
            self.height = rows;
        }
        self
    }

    /// Convert to an image XObject stream
    pub fn to_xobject(&self) -> PdfStream {
        let mut dict = PdfDictionary::typed("XObject");
        dict.insert("Subtype", PdfObject::name("Image"));
        dict.insert("Width", PdfObject::Integer(self.width as i64));
        dict.insert("Height", PdfObject::Integer(self.height as i64));
        dict.insert("BitsPerComponent", PdfObject::Integer(8));
        dict.insert("ColorSpace", PdfObject::name("DeviceRGB"));

        PdfStream {
            dict,
            data: self.data.clone(),
            compressed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_to_rgb() {
        let rgba = [255, 0, 0, 255, 0, 255, 0, 255];
        let image = ImageData::from_opaque_rgba(&rgba, 2, 1).unwrap();
        assert_eq!(image.data, vec![255, 0, 0, 0, 255, 0]);
    }

    #[test]
    fn test_size_mismatch_is_rejected() {
        assert!(ImageData::from_raw_rgb(vec![0; 5], 1, 2).is_err());
        assert!(ImageData::from_raw_rgb(Vec::new(), 0, 0).is_err());
    }

    #[test]
    fn test_crop_rows() {
        let image = ImageData::from_raw_rgb(vec![1; 3 * 2 * 4], 2, 4).unwrap().crop_rows(3);
        assert_eq!(image.height, 3);
        assert_eq!(image.data.len(), 3 * 2 * 3);

        let uncropped = ImageData::from_raw_rgb(vec![1; 6], 2, 1).unwrap().crop_rows(5);
        assert_eq!(uncropped.height, 1);
    }

    #[test]
    fn test_xobject_dictionary() {
        let image = ImageData::from_raw_rgb(vec![0; 12], 2, 2).unwrap();
        let stream = image.to_xobject();
        assert!(matches!(stream.dict.get("Subtype"), Some(PdfObject::Name(n)) if n == "Image"));
        assert!(matches!(stream.dict.get("Width"), Some(PdfObject::Integer(2))));
        assert!(matches!(stream.dict.get("ColorSpace"), Some(PdfObject::Name(n)) if n == "DeviceRGB"));
        assert!(!stream.compressed);
    }
}
