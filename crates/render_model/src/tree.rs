//! Visual tree types
//!
//! The renderer's output: a structural description of one printed page,
//! independent of pixel positions. Layout turns it into a [`crate::PageRender`].

use crate::Color;
use doc_model::DocumentType;
use formats::StyleDescriptor;
use serde::Serialize;

/// A fully rendered document, in fixed block order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualTree {
    pub doc_type: DocumentType,
    pub style: StyleDescriptor,
    pub header: HeaderBlock,
    pub title: TitleBlock,
    pub content: ContentBlock,
    pub signature: SignatureBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderBlock {
    pub company: CompanyBlock,
    pub motto: MottoBlock,
}

/// Issuing organization identity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyBlock {
    pub name: String,
    pub department: String,
    /// "Số: ..."
    pub number_line: String,
}

/// National motto with the place and date of issue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MottoBlock {
    pub country: &'static str,
    pub motto: &'static str,
    pub place_and_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleBlock {
    pub text: &'static str,
    /// "Kính gửi: ......" when the salutation toggle is on
    pub salutation: Option<&'static str>,
}

/// How a row value is emphasized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueEmphasis {
    Plain,
    Bold,
    /// Bold and uppercased, used for person names
    BoldUpper,
    Italic,
}

/// One labeled field with its value drawn over a dotted rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub label: &'static str,
    pub value: String,
    pub emphasis: ValueEmphasis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ContentNode {
    /// Indented lead sentence ending in a bold uppercase name
    Paragraph { lead: &'static str, emphasized: String },
    Row(Row),
    SectionHeading { text: &'static str },
    /// Free text inside a bordered box
    BoxedText { text: String },
    /// Italic remark
    Note { text: String },
}

/// The type-specific body of the document.
///
/// One variant per [`DocumentType`]; the variant always matches the record
/// the tree was rendered from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", content = "nodes")]
pub enum ContentBlock {
    TravelOrder(Vec<ContentNode>),
    IntroductionLetter(Vec<ContentNode>),
    WorkConfirmation(Vec<ContentNode>),
    LeaveRequest(Vec<ContentNode>),
    AdvancePaymentRequest(Vec<ContentNode>),
    PaymentRequest(Vec<ContentNode>),
    HandoverReport(Vec<ContentNode>),
    BusinessTripAssignment(Vec<ContentNode>),
    DutyRosterRequest(Vec<ContentNode>),
}

impl ContentBlock {
    /// The document type this block lays out
    pub fn doc_type(&self) -> DocumentType {
        match self {
            ContentBlock::TravelOrder(_) => DocumentType::TravelOrder,
            ContentBlock::IntroductionLetter(_) => DocumentType::IntroductionLetter,
            ContentBlock::WorkConfirmation(_) => DocumentType::WorkConfirmation,
            ContentBlock::LeaveRequest(_) => DocumentType::LeaveRequest,
            ContentBlock::AdvancePaymentRequest(_) => DocumentType::AdvancePaymentRequest,
            ContentBlock::PaymentRequest(_) => DocumentType::PaymentRequest,
            ContentBlock::HandoverReport(_) => DocumentType::HandoverReport,
            ContentBlock::BusinessTripAssignment(_) => DocumentType::BusinessTripAssignment,
            ContentBlock::DutyRosterRequest(_) => DocumentType::DutyRosterRequest,
        }
    }

    pub fn nodes(&self) -> &[ContentNode] {
        match self {
            ContentBlock::TravelOrder(nodes)
            | ContentBlock::IntroductionLetter(nodes)
            | ContentBlock::WorkConfirmation(nodes)
            | ContentBlock::LeaveRequest(nodes)
            | ContentBlock::AdvancePaymentRequest(nodes)
            | ContentBlock::PaymentRequest(nodes)
            | ContentBlock::HandoverReport(nodes)
            | ContentBlock::BusinessTripAssignment(nodes)
            | ContentBlock::DutyRosterRequest(nodes) => nodes,
        }
    }

    /// All labeled rows, in order
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.nodes().iter().filter_map(|node| match node {
            ContentNode::Row(row) => Some(row),
            _ => None,
        })
    }

    /// Value of the first row with the given label
    pub fn row_value(&self, label: &str) -> Option<&str> {
        self.rows().find(|r| r.label == label).map(|r| r.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignatureBlock {
    pub layout: SignatureLayout,
}

impl SignatureBlock {
    /// The approving signer's column, present in both layouts
    pub fn signer(&self) -> &SignerColumn {
        match &self.layout {
            SignatureLayout::ThreeColumn { signer, .. } | SignatureLayout::TwoColumn { signer } => {
                signer
            }
        }
    }

    pub fn column_count(&self) -> usize {
        match self.layout {
            SignatureLayout::ThreeColumn { .. } => 3,
            SignatureLayout::TwoColumn { .. } => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum SignatureLayout {
    /// Traveler, department in charge, approving signer
    ThreeColumn {
        traveler: PlainColumn,
        department: PlainColumn,
        signer: SignerColumn,
    },
    /// Blank half, approving signer
    TwoColumn { signer: SignerColumn },
}

/// A column with a heading and a single line underneath
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlainColumn {
    pub heading: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignerColumn {
    pub title: String,
    pub name: String,
    /// Overlays in paint order: earlier entries sit beneath later ones
    pub overlays: Vec<Overlay>,
}

impl SignerColumn {
    pub fn seal(&self) -> Option<&SealGraphic> {
        self.overlays.iter().find_map(|o| match o {
            Overlay::Seal(seal) => Some(seal),
            _ => None,
        })
    }

    pub fn signature(&self) -> Option<&SignatureGlyph> {
        self.overlays.iter().find_map(|o| match o {
            Overlay::Signature(glyph) => Some(glyph),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Overlay {
    Seal(SealGraphic),
    Signature(SignatureGlyph),
}

/// Handwritten-style rendering of the signer's given name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignatureGlyph {
    pub text: String,
    pub rotation_deg: f64,
    pub color: Color,
    pub font_size_px: f64,
    pub font_family: &'static str,
    /// Distance from the bottom of the overlay area to the glyph's line box
    pub bottom_offset_px: f64,
}

/// Official company stamp
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SealGraphic {
    /// Curved along the top arc: "M.S.D.N: {tax code}"
    pub top_text: String,
    /// Curved along the bottom arc: "T. {LOCATION}"
    pub bottom_text: String,
    /// Printed uppercase in the middle
    pub center_text: String,
}
