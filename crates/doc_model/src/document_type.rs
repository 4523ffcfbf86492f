//! Document type catalogue
//!
//! Every printable document belongs to exactly one of nine fixed kinds. The
//! serde representation uses the same kebab-case tags the editing form sends.

use crate::DocModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of administrative document being produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DocumentType {
    /// Giấy đi đường
    #[default]
    #[serde(rename = "giay-cong-tac")]
    TravelOrder,
    /// Giấy giới thiệu
    #[serde(rename = "giay-gioi-thieu")]
    IntroductionLetter,
    /// Giấy xác nhận công tác
    #[serde(rename = "giay-xac-nhan")]
    WorkConfirmation,
    /// Đơn xin nghỉ phép
    #[serde(rename = "giay-nghi-phep")]
    LeaveRequest,
    /// Giấy đề nghị tạm ứng
    #[serde(rename = "giay-de-nghi-tam-ung")]
    AdvancePaymentRequest,
    /// Giấy đề nghị thanh toán
    #[serde(rename = "giay-de-nghi-thanh-toan")]
    PaymentRequest,
    /// Biên bản bàn giao
    #[serde(rename = "bien-ban-ban-giao")]
    HandoverReport,
    /// Quyết định cử đi công tác
    #[serde(rename = "giay-cu-di-cong-tac")]
    BusinessTripAssignment,
    /// Giấy yêu cầu trực
    #[serde(rename = "giay-yeu-cau-truc")]
    DutyRosterRequest,
}

impl DocumentType {
    /// All document types, in the order the form lists them
    pub const ALL: [DocumentType; 9] = [
        DocumentType::TravelOrder,
        DocumentType::IntroductionLetter,
        DocumentType::WorkConfirmation,
        DocumentType::LeaveRequest,
        DocumentType::AdvancePaymentRequest,
        DocumentType::PaymentRequest,
        DocumentType::HandoverReport,
        DocumentType::BusinessTripAssignment,
        DocumentType::DutyRosterRequest,
    ];

    /// The wire tag, also used as the export file-name prefix
    pub fn as_tag(&self) -> &'static str {
        match self {
            DocumentType::TravelOrder => "giay-cong-tac",
            DocumentType::IntroductionLetter => "giay-gioi-thieu",
            DocumentType::WorkConfirmation => "giay-xac-nhan",
            DocumentType::LeaveRequest => "giay-nghi-phep",
            DocumentType::AdvancePaymentRequest => "giay-de-nghi-tam-ung",
            DocumentType::PaymentRequest => "giay-de-nghi-thanh-toan",
            DocumentType::HandoverReport => "bien-ban-ban-giao",
            DocumentType::BusinessTripAssignment => "giay-cu-di-cong-tac",
            DocumentType::DutyRosterRequest => "giay-yeu-cau-truc",
        }
    }

    /// Whether the money fields belong on this document
    pub fn is_payment(&self) -> bool {
        matches!(
            self,
            DocumentType::AdvancePaymentRequest | DocumentType::PaymentRequest
        )
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for DocumentType {
    type Err = DocModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .iter()
            .copied()
            .find(|t| t.as_tag() == s)
            .ok_or_else(|| DocModelError::UnknownDocumentType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_from_str() {
        for doc_type in DocumentType::ALL {
            let parsed: DocumentType = doc_type.as_tag().parse().unwrap();
            assert_eq!(parsed, doc_type);
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = "giay-khong-ton-tai".parse::<DocumentType>().unwrap_err();
        assert!(matches!(err, DocModelError::UnknownDocumentType(ref t) if t == "giay-khong-ton-tai"));
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        let json = serde_json::to_string(&DocumentType::HandoverReport).unwrap();
        assert_eq!(json, "\"bien-ban-ban-giao\"");

        let parsed: DocumentType = serde_json::from_str("\"giay-yeu-cau-truc\"").unwrap();
        assert_eq!(parsed, DocumentType::DutyRosterRequest);
    }

    #[test]
    fn test_only_two_payment_types() {
        let payment: Vec<_> = DocumentType::ALL
            .iter()
            .filter(|t| t.is_payment())
            .collect();
        assert_eq!(
            payment,
            vec![
                &DocumentType::AdvancePaymentRequest,
                &DocumentType::PaymentRequest
            ]
        );
    }

    #[test]
    fn test_display_matches_tag() {
        assert_eq!(DocumentType::TravelOrder.to_string(), "giay-cong-tac");
    }
}
