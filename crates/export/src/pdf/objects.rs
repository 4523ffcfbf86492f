//! PDF Object Model
//!
//! The handful of PDF object types a single-image page needs, plus their
//! serialization.

use std::collections::BTreeMap;
use std::io::Write as _;

/// PDF object types
#[derive(Debug, Clone)]
pub enum PdfObject {
    Integer(i64),
    Real(f64),
    String(PdfString),
    /// Name object, written with a leading `/`
    Name(String),
    Array(Vec<PdfObject>),
    Dictionary(PdfDictionary),
    Stream(PdfStream),
    /// Indirect reference to an object of generation 0
    Reference(u32),
}

/// PDF string encoding
#[derive(Debug, Clone)]
pub enum PdfString {
    /// `(...)` with delimiters escaped
    Literal(Vec<u8>),
    /// `<...>` hex digits
    Hex(Vec<u8>),
}

impl PdfString {
    /// A text string for the info dictionary.
    ///
    /// ASCII stays literal; anything else is written as UTF-16BE with a byte
    /// order mark so viewers show Vietnamese diacritics correctly.
    pub fn text(s: &str) -> Self {
        if s.is_ascii() {
            return PdfString::Literal(s.as_bytes().to_vec());
        }
        let mut bytes = vec![0xFE, 0xFF];
        bytes.extend(s.encode_utf16().flat_map(u16::to_be_bytes));
        PdfString::Hex(bytes)
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        match self {
            PdfString::Literal(data) => {
                out.push(b'(');
                for &byte in data {
                    match byte {
                        b'(' | b')' | b'\\' => out.extend_from_slice(&[b'\\', byte]),
                        b'\n' => out.extend_from_slice(b"\\n"),
                        b'\r' => out.extend_from_slice(b"\\r"),
                        b'\t' => out.extend_from_slice(b"\\t"),
                        0x20..=0x7E => out.push(byte),
                        _ => {
                            let _ = write!(out, "\\{:03o}", byte);
                        }
                    }
                }
                out.push(b')');
            }
            PdfString::Hex(data) => {
                out.push(b'<');
                for byte in data {
                    let _ = write!(out, "{:02X}", byte);
                }
                out.push(b'>');
            }
        }
    }
}

/// PDF dictionary; keys are written in sorted order
#[derive(Debug, Clone, Default)]
pub struct PdfDictionary {
    entries: BTreeMap<String, PdfObject>,
}

impl PdfDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dictionary with its `/Type` already set
    pub fn typed(type_name: &str) -> Self {
        let mut dict = Self::new();
        dict.insert("Type", PdfObject::name(type_name));
        dict
    }

    pub fn insert(&mut self, key: impl Into<String>, value: PdfObject) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"<<");
        for (key, value) in &self.entries {
            out.push(b' ');
            write_name(key, out);
            out.push(b' ');
            value.write_to(out);
        }
        out.extend_from_slice(b" >>");
    }
}

/// A dictionary followed by raw bytes
#[derive(Debug, Clone)]
pub struct PdfStream {
    pub dict: PdfDictionary,
    pub data: Vec<u8>,
    /// Set once `data` carries a filter
    pub compressed: bool,
}

impl PdfStream {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            dict: PdfDictionary::new(),
            data,
            compressed: false,
        }
    }
}

impl PdfObject {
    pub fn name(s: impl Into<String>) -> Self {
        PdfObject::Name(s.into())
    }

    pub fn text(s: &str) -> Self {
        PdfObject::String(PdfString::text(s))
    }

    /// `[a b c d]` of reals
    pub fn rect(values: [f64; 4]) -> Self {
        PdfObject::Array(values.into_iter().map(PdfObject::Real).collect())
    }

    /// Append the serialized object to `out`
    pub fn write_to(&self, out: &mut Vec<u8>) {
        match self {
            PdfObject::Integer(n) => {
                let _ = write!(out, "{}", n);
            }
            PdfObject::Real(n) => out.extend_from_slice(format_real(*n).as_bytes()),
            PdfObject::String(s) => s.write_to(out),
            PdfObject::Name(name) => write_name(name, out),
            PdfObject::Array(items) => {
                out.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(b' ');
                    }
                    item.write_to(out);
                }
                out.push(b']');
            }
            PdfObject::Dictionary(dict) => dict.write_to(out),
            PdfObject::Stream(stream) => {
                stream.dict.write_to(out);
                out.extend_from_slice(b"\nstream\n");
                out.extend_from_slice(&stream.data);
                out.extend_from_slice(b"\nendstream");
            }
            PdfObject::Reference(num) => {
                let _ = write!(out, "{} 0 R", num);
            }
        }
    }
}

/// Names escape delimiters and anything outside printable ASCII as `#XX`
fn write_name(name: &str, out: &mut Vec<u8>) {
    out.push(b'/');
    for byte in name.bytes() {
        match byte {
            b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' => {
                let _ = write!(out, "#{:02X}", byte);
            }
            0x21..=0x7E => out.push(byte),
            _ => {
                let _ = write!(out, "#{:02X}", byte);
            }
        }
    }
}

/// Shortest decimal form with at most 4 fractional digits
pub fn format_real(n: f64) -> String {
    if n.fract() == 0.0 {
        return format!("{:.1}", n);
    }
    let s = format!("{:.4}", n);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

impl From<i64> for PdfObject {
    fn from(n: i64) -> Self {
        PdfObject::Integer(n)
    }
}

impl From<f64> for PdfObject {
    fn from(n: f64) -> Self {
        PdfObject::Real(n)
    }
}

impl From<PdfDictionary> for PdfObject {
    fn from(dict: PdfDictionary) -> Self {
        PdfObject::Dictionary(dict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize(obj: &PdfObject) -> String {
        let mut buf = Vec::new();
        obj.write_to(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_serialize_numbers_and_references() {
        assert_eq!(serialize(&42i64.into()), "42");
        assert_eq!(serialize(&595.28.into()), "595.28");
        assert_eq!(serialize(&PdfObject::Real(2.0)), "2.0");
        assert_eq!(serialize(&PdfObject::Real(0.123_456)), "0.1235");
        assert_eq!(serialize(&PdfObject::Reference(7)), "7 0 R");
    }

    #[test]
    fn test_serialize_literal_escapes() {
        let s = PdfObject::String(PdfString::Literal(b"a(b)\\c\n".to_vec()));
        assert_eq!(serialize(&s), "(a\\(b\\)\\\\c\\n)");
    }

    #[test]
    fn test_ascii_text_stays_literal() {
        assert_eq!(serialize(&PdfObject::text("Report")), "(Report)");
    }

    #[test]
    fn test_vietnamese_text_is_utf16_hex() {
        // "Đ" is U+0110
        assert_eq!(serialize(&PdfObject::text("Đ")), "<FEFF0110>");
    }

    #[test]
    fn test_serialize_name_escapes_delimiters() {
        assert_eq!(serialize(&PdfObject::name("Im0")), "/Im0");
        assert_eq!(serialize(&PdfObject::name("A/B")), "/A#2FB");
    }

    #[test]
    fn test_serialize_dictionary_and_array() {
        let mut dict = PdfDictionary::typed("Page");
        dict.insert("MediaBox", PdfObject::rect([0.0, 0.0, 595.28, 841.89]));
        assert_eq!(
            serialize(&dict.into()),
            "<< /MediaBox [0.0 0.0 595.28 841.89] /Type /Page >>"
        );
    }

    #[test]
    fn test_serialize_stream() {
        let mut stream = PdfStream::new(b"q Q".to_vec());
        stream.dict.insert("Length", PdfObject::Integer(3));
        assert_eq!(
            serialize(&PdfObject::Stream(stream)),
            "<< /Length 3 >>\nstream\nq Q\nendstream"
        );
    }
}
