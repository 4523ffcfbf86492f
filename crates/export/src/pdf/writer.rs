//! PDF Writer
//!
//! Object numbering, the cross-reference table and the file structure
//! (header, body, xref, trailer). Streams are flate-compressed unless told
//! otherwise.

use super::document::PdfVersion;
use super::objects::{PdfDictionary, PdfObject, PdfStream};
use std::io::{self, Write};
use thiserror::Error;

/// Error type for PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    #[error("Compression error: {0}")]
    Compression(String),
}

pub type Result<T> = std::result::Result<T, PdfError>;

/// Writes a PDF file front to back, recording where each object starts
pub struct PdfWriter<W: Write> {
    out: W,
    /// Bytes written so far
    position: u64,
    /// Offset of each object, indexed by object number - 1
    offsets: Vec<Option<u64>>,
    version: PdfVersion,
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(out: W, version: PdfVersion) -> Self {
        Self {
            out,
            position: 0,
            offsets: Vec::new(),
            version,
            compress: true,
        }
    }

    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.out.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_bytes(s.as_bytes())
    }

    /// Reserve the next object number
    pub fn allocate_object(&mut self) -> u32 {
        self.offsets.push(None);
        self.offsets.len() as u32
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.write_str(&format!("%PDF-{}\n", self.version.as_str()))?;
        // binary marker
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])
    }

    /// Write an indirect object under a number from [`Self::allocate_object`]
    pub fn write_object(&mut self, obj_num: u32, object: PdfObject) -> Result<()> {
        let slot = (obj_num as usize)
            .checked_sub(1)
            .filter(|i| *i < self.offsets.len())
            .ok_or_else(|| PdfError::InvalidDocument(format!("object {obj_num} was never allocated")))?;
        if self.offsets[slot].is_some() {
            return Err(PdfError::InvalidDocument(format!("object {obj_num} written twice")));
        }
        self.offsets[slot] = Some(self.position);

        let mut body = format!("{obj_num} 0 obj\n").into_bytes();
        object.write_to(&mut body);
        body.extend_from_slice(b"\nendobj\n");
        self.write_bytes(&body)
    }

    /// Write a stream object, compressing it first when enabled
    pub fn write_stream_object(&mut self, obj_num: u32, mut stream: PdfStream) -> Result<()> {
        if self.compress && !stream.compressed {
            stream = compress_stream(stream)?;
        }
        stream
            .dict
            .insert("Length", PdfObject::Integer(stream.data.len() as i64));
        self.write_object(obj_num, PdfObject::Stream(stream))
    }

    /// Write the cross-reference table and trailer.
    ///
    /// Objects allocated but never written are listed as free.
    pub fn write_xref_and_trailer(&mut self, catalog_ref: u32, info_ref: Option<u32>) -> Result<()> {
        let xref_offset = self.position;
        let size = self.offsets.len() + 1;

        let mut table = format!("xref\n0 {size}\n0000000000 65535 f \n");
        for offset in &self.offsets {
            match offset {
                Some(offset) => table.push_str(&format!("{offset:010} 00000 n \n")),
                None => table.push_str("0000000000 65535 f \n"),
            }
        }
        table.push_str("trailer\n");
        self.write_str(&table)?;

        let mut trailer = PdfDictionary::new();
        trailer.insert("Size", PdfObject::Integer(size as i64));
        trailer.insert("Root", PdfObject::Reference(catalog_ref));
        if let Some(info) = info_ref {
            trailer.insert("Info", PdfObject::Reference(info));
        }
        let mut body = Vec::new();
        PdfObject::Dictionary(trailer).write_to(&mut body);
        self.write_bytes(&body)?;

        self.write_str(&format!("\nstartxref\n{xref_offset}\n%%EOF\n"))
    }

    /// Flush and return the inner writer
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Flate-compress a stream's data and mark its filter
fn compress_stream(mut stream: PdfStream) -> Result<PdfStream> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&stream.data)
        .map_err(|e| PdfError::Compression(e.to_string()))?;
    stream.data = encoder
        .finish()
        .map_err(|e| PdfError::Compression(e.to_string()))?;
    stream.compressed = true;
    stream
        .dict
        .insert("Filter", PdfObject::name("FlateDecode"));
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        let mut buffer = Vec::new();
        let mut writer = PdfWriter::new(&mut buffer, PdfVersion::V1_4);
        writer.write_header().unwrap();
        assert!(String::from_utf8_lossy(&buffer).starts_with("%PDF-1.4"));
    }

    #[test]
    fn test_write_object() {
        let mut buffer = Vec::new();
        let mut writer = PdfWriter::new(&mut buffer, PdfVersion::V1_4);
        let obj_num = writer.allocate_object();
        writer.write_object(obj_num, PdfObject::Integer(42)).unwrap();

        let output = String::from_utf8_lossy(&buffer);
        assert!(output.contains("1 0 obj\n42\nendobj"));
    }

    #[test]
    fn test_stream_is_compressed_with_length() {
        let mut buffer = Vec::new();
        let mut writer = PdfWriter::new(&mut buffer, PdfVersion::V1_4);
        let obj_num = writer.allocate_object();
        writer
            .write_stream_object(obj_num, PdfStream::new(vec![b'a'; 4096]))
            .unwrap();

        let output = String::from_utf8_lossy(&buffer);
        assert!(output.contains("/Filter /FlateDecode"));
        assert!(output.contains("/Length "));
        assert!(buffer.len() < 4096);
    }

    #[test]
    fn test_uncompressed_stream_is_verbatim() {
        let mut buffer = Vec::new();
        let mut writer = PdfWriter::new(&mut buffer, PdfVersion::V1_4);
        writer.set_compression(false);
        let obj_num = writer.allocate_object();
        writer
            .write_stream_object(obj_num, PdfStream::new(b"q Q".to_vec()))
            .unwrap();
        let output = String::from_utf8_lossy(&buffer);
        assert!(output.contains("stream\nq Q\nendstream"));
        assert!(!output.contains("FlateDecode"));
    }

    #[test]
    fn test_unallocated_object_is_rejected() {
        let mut writer = PdfWriter::new(Vec::new(), PdfVersion::V1_4);
        assert!(matches!(
            writer.write_object(3, PdfObject::Integer(1)),
            Err(PdfError::InvalidDocument(_))
        ));
        let n = writer.allocate_object();
        writer.write_object(n, PdfObject::Integer(1)).unwrap();
        assert!(writer.write_object(n, PdfObject::Integer(1)).is_err());
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let mut buffer = Vec::new();
        let mut writer = PdfWriter::new(&mut buffer, PdfVersion::V1_4);
        writer.write_header().unwrap();
        let a = writer.allocate_object();
        let b = writer.allocate_object();
        writer.write_object(b, PdfObject::Integer(2)).unwrap();
        writer.write_object(a, PdfObject::Integer(1)).unwrap();
        writer.write_xref_and_trailer(a, None).unwrap();
        writer.finish().unwrap();

        // offsets are byte positions; the binary marker is not UTF-8
        let output = String::from_utf8_lossy(&buffer).to_string();
        let xref = output.find("xref\n").unwrap();
        let rows: Vec<&str> = output[xref..].lines().skip(2).take(3).collect();
        let offset_of = |row: &str| row[..10].parse::<usize>().unwrap();
        assert!(buffer[offset_of(rows[1])..].starts_with(b"1 0 obj"));
        assert!(buffer[offset_of(rows[2])..].starts_with(b"2 0 obj"));
        assert!(output.contains("/Size 3"));
        assert!(output.ends_with("%%EOF\n"));
    }
}
