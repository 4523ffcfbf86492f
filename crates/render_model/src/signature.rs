//! Signature block, handwritten signature and company seal

use crate::{
    ArcPath, Color, Overlay, PlainColumn, SealGraphic, SignatureBlock, SignatureGlyph,
    SignatureLayout, SignerColumn,
};
use doc_model::{DocumentRecord, DocumentType};

/// Fixed stamp geometry, in the seal's own 170×170 coordinate space
pub mod seal {
    use crate::ArcPath;

    pub const SIZE: f64 = 170.0;
    pub const CENTER: f64 = 85.0;
    /// (radius, stroke width), outermost first
    pub const RINGS: [(f64, f64); 3] = [(80.0, 5.0), (70.0, 1.0), (46.0, 1.0)];
    pub const STARS: [(f64, f64); 2] = [(27.0, 85.0), (143.0, 85.0)];
    pub const STAR: &str = "★";
    pub const STAR_SIZE: f64 = 14.0;

    pub const TOP_ARC: ArcPath = ArcPath {
        start: (27.0, 85.0),
        end: (143.0, 85.0),
        radius: 58.0,
        large_arc: true,
        sweep: true,
    };
    pub const BOTTOM_ARC: ArcPath = ArcPath {
        start: (27.0, 85.0),
        end: (143.0, 85.0),
        radius: 58.0,
        large_arc: false,
        sweep: false,
    };
    pub const ARC_FONT_SIZE: f64 = 13.0;
    pub const ARC_LETTER_SPACING: f64 = 0.5;
    pub const ARC_FONT: &str = "Arial, sans-serif";

    /// Box the company name is centered in: x, y, width, height
    pub const NAME_BOX: (f64, f64, f64, f64) = (40.0, 40.0, 90.0, 90.0);
    pub const NAME_FONT_SIZE: f64 = 11.0;
    pub const NAME_LINE_HEIGHT: f64 = 1.25;
    pub const NAME_FONT: &str = "\"Times New Roman\", serif";

    pub const ROTATION_DEG: f64 = -15.0;
    pub const OPACITY: f64 = 0.9;
    /// Offset of the seal box from the top of the overlay area
    pub const OFFSET_TOP: f64 = -16.0;
    /// Offset of the seal box's left edge from the signer column's center
    pub const OFFSET_FROM_CENTER: f64 = -110.0;
}

pub const SIGNATURE_ROTATION_DEG: f64 = -5.0;
pub const SIGNATURE_FONT_SIZE: f64 = 36.0;
pub const SIGNATURE_BOTTOM_OFFSET: f64 = 48.0;
pub const SIGNATURE_FONT: &str = "\"Dancing Script\", \"Brush Script MT\", cursive";

/// Height reserved between the signer title and name for seal and signature
pub const OVERLAY_AREA_HEIGHT: f64 = 192.0;

/// Build the signature block for a record
pub fn signature_for(record: &DocumentRecord) -> SignatureBlock {
    let signer = signer_column(record);
    let layout = match record.doc_type {
        DocumentType::TravelOrder => SignatureLayout::ThreeColumn {
            traveler: PlainColumn {
                heading: "Người đi đường",
                body: record.full_name.clone(),
            },
            department: PlainColumn {
                heading: "Phụ trách bộ phận",
                body: "(Ký, họ tên)".to_string(),
            },
            signer,
        },
        _ => SignatureLayout::TwoColumn { signer },
    };
    SignatureBlock { layout }
}

fn signer_column(record: &DocumentRecord) -> SignerColumn {
    let mut overlays = Vec::with_capacity(2);
    // the seal goes down first so the signature ink stays on top of it
    if record.show_seal {
        overlays.push(Overlay::Seal(seal_for(record)));
    }
    if record.show_signature {
        overlays.push(Overlay::Signature(SignatureGlyph {
            text: record.signature_token().to_string(),
            rotation_deg: SIGNATURE_ROTATION_DEG,
            color: Color::INK_BLUE,
            font_size_px: SIGNATURE_FONT_SIZE,
            font_family: SIGNATURE_FONT,
            bottom_offset_px: SIGNATURE_BOTTOM_OFFSET,
        }));
    }

    SignerColumn {
        title: record.signer_title.to_uppercase(),
        name: record.signer_name.to_uppercase(),
        overlays,
    }
}

/// The stamp always carries the company name; `seal_text` is not consulted.
fn seal_for(record: &DocumentRecord) -> SealGraphic {
    SealGraphic {
        top_text: format!("M.S.D.N: {}", record.tax_code),
        bottom_text: format!("T. {}", record.location.to_uppercase()),
        center_text: record.company_name.to_uppercase(),
    }
}

impl ArcPath {
    /// SVG path data for this arc
    pub fn to_path_data(&self) -> String {
        format!(
            "M {},{} A {},{} 0 {},{} {},{}",
            self.start.0,
            self.start.1,
            self.radius,
            self.radius,
            self.large_arc as u8,
            self.sweep as u8,
            self.end.0,
            self.end.1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(show_seal: bool, show_signature: bool) -> DocumentRecord {
        let mut record = DocumentRecord::default().with_type(DocumentType::LeaveRequest);
        record.show_seal = show_seal;
        record.show_signature = show_signature;
        record
    }

    #[test]
    fn test_three_columns_only_for_travel_order() {
        for doc_type in DocumentType::ALL {
            let block = signature_for(&DocumentRecord::default().with_type(doc_type));
            let expected = if doc_type == DocumentType::TravelOrder { 3 } else { 2 };
            assert_eq!(block.column_count(), expected, "{doc_type}");
        }
    }

    #[test]
    fn test_traveler_column_carries_full_name() {
        let block = signature_for(&DocumentRecord::default());
        match block.layout {
            SignatureLayout::ThreeColumn { traveler, department, .. } => {
                assert_eq!(traveler.heading, "Người đi đường");
                assert_eq!(traveler.body, "Nguyễn Văn A");
                assert_eq!(department.body, "(Ký, họ tên)");
            }
            other => panic!("unexpected layout {other:?}"),
        }
    }

    #[test]
    fn test_overlay_toggles_are_independent() {
        let cases = [
            (false, true, vec!["signature"]),
            (true, false, vec!["seal"]),
            (false, false, vec![]),
            (true, true, vec!["seal", "signature"]),
        ];
        for (show_seal, show_signature, expected) in cases {
            let block = signature_for(&record(show_seal, show_signature));
            let kinds: Vec<_> = block
                .signer()
                .overlays
                .iter()
                .map(|o| match o {
                    Overlay::Seal(_) => "seal",
                    Overlay::Signature(_) => "signature",
                })
                .collect();
            assert_eq!(kinds, expected, "seal={show_seal} signature={show_signature}");
        }
    }

    #[test]
    fn test_seal_texts() {
        let block = signature_for(&record(true, false));
        let seal = block.signer().seal().unwrap();
        assert_eq!(seal.top_text, "M.S.D.N: 0101234567");
        assert_eq!(seal.bottom_text, "T. HÀ NỘI");
        assert_eq!(seal.center_text, "CÔNG TY TNHH MTV GIẢI PHÁP CÔNG NGHỆ SỐ");
    }

    #[test]
    fn test_seal_ignores_seal_text() {
        let mut r = record(true, false);
        r.seal_text = Some("SOMETHING ELSE".to_string());
        let block = signature_for(&r);
        assert_eq!(
            block.signer().seal().unwrap().center_text,
            "CÔNG TY TNHH MTV GIẢI PHÁP CÔNG NGHỆ SỐ"
        );
    }

    #[test]
    fn test_signature_glyph_is_rotated_last_token() {
        let block = signature_for(&record(false, true));
        let glyph = block.signer().signature().unwrap();
        assert_eq!(glyph.text, "B");
        assert_eq!(glyph.rotation_deg, -5.0);
        assert_eq!(glyph.color, Color::INK_BLUE);
    }

    #[test]
    fn test_arc_path_data() {
        assert_eq!(seal::TOP_ARC.to_path_data(), "M 27,85 A 58,58 0 1,1 143,85");
        assert_eq!(seal::BOTTOM_ARC.to_path_data(), "M 27,85 A 58,58 0 0,0 143,85");
    }
}
