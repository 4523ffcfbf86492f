//! Record to visual tree

use crate::content::content_for;
use crate::signature::signature_for;
use crate::{CompanyBlock, HeaderBlock, MottoBlock, TitleBlock, VisualTree};
use doc_model::{DocumentRecord, DocumentType};
use formats::StyleDescriptor;

pub const COUNTRY_LINE: &str = "CỘNG HÒA XÃ HỘI CHỦ NGHĨA VIỆT NAM";
pub const MOTTO_LINE: &str = "Độc lập - Tự do - Hạnh phúc";
pub const SALUTATION_LINE: &str =
    "Kính gửi: ........................................................................";

/// Printed title for each document type
pub fn title_for(doc_type: DocumentType) -> &'static str {
    match doc_type {
        DocumentType::TravelOrder => "GIẤY ĐI ĐƯỜNG",
        DocumentType::IntroductionLetter => "GIẤY GIỚI THIỆU",
        DocumentType::WorkConfirmation => "GIẤY XÁC NHẬN CÔNG TÁC",
        DocumentType::LeaveRequest => "ĐƠN XIN NGHỈ PHÉP",
        DocumentType::AdvancePaymentRequest => "GIẤY ĐỀ NGHỊ TẠM ỨNG",
        DocumentType::PaymentRequest => "GIẤY ĐỀ NGHỊ THANH TOÁN",
        DocumentType::HandoverReport => "BIÊN BẢN BÀN GIAO",
        DocumentType::BusinessTripAssignment => "QUYẾT ĐỊNH CỬ ĐI CÔNG TÁC",
        DocumentType::DutyRosterRequest => "GIẤY YÊU CẦU TRỰC",
    }
}

/// Render a record with an already-resolved style.
///
/// Reads the record on every call and never fails: absent optional fields
/// print as empty strings.
pub fn render(record: &DocumentRecord, style: &StyleDescriptor) -> VisualTree {
    VisualTree {
        doc_type: record.doc_type,
        style: *style,
        header: header_for(record),
        title: TitleBlock {
            text: title_for(record.doc_type),
            salutation: record.show_salutation.then_some(SALUTATION_LINE),
        },
        content: content_for(record),
        signature: signature_for(record),
    }
}

/// Resolve the record's format and render it
pub fn render_record(record: &DocumentRecord) -> VisualTree {
    render(record, &formats::resolve(record.format_id))
}

fn header_for(record: &DocumentRecord) -> HeaderBlock {
    HeaderBlock {
        company: CompanyBlock {
            name: record.company_name.to_uppercase(),
            department: record.department.to_uppercase(),
            number_line: format!("Số: {}", record.document_number),
        },
        motto: MottoBlock {
            country: COUNTRY_LINE,
            motto: MOTTO_LINE,
            place_and_date: record.place_and_date(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ContentBlock, SignatureLayout};
    use chrono::NaiveDate;

    fn fixed_record() -> DocumentRecord {
        DocumentRecord::default().with_date(NaiveDate::from_ymd_opt(2023, 10, 18).unwrap())
    }

    #[test]
    fn test_titles_for_every_type() {
        let expected = [
            (DocumentType::TravelOrder, "GIẤY ĐI ĐƯỜNG"),
            (DocumentType::IntroductionLetter, "GIẤY GIỚI THIỆU"),
            (DocumentType::WorkConfirmation, "GIẤY XÁC NHẬN CÔNG TÁC"),
            (DocumentType::LeaveRequest, "ĐƠN XIN NGHỈ PHÉP"),
            (DocumentType::AdvancePaymentRequest, "GIẤY ĐỀ NGHỊ TẠM ỨNG"),
            (DocumentType::PaymentRequest, "GIẤY ĐỀ NGHỊ THANH TOÁN"),
            (DocumentType::HandoverReport, "BIÊN BẢN BÀN GIAO"),
            (DocumentType::BusinessTripAssignment, "QUYẾT ĐỊNH CỬ ĐI CÔNG TÁC"),
            (DocumentType::DutyRosterRequest, "GIẤY YÊU CẦU TRỰC"),
        ];
        for (doc_type, title) in expected {
            let tree = render_record(&fixed_record().with_type(doc_type));
            assert_eq!(tree.title.text, title);
            assert_eq!(tree.content.doc_type(), doc_type);
        }
    }

    #[test]
    fn test_header_lines() {
        let tree = render_record(&fixed_record());
        assert_eq!(tree.header.company.number_line, "Số: 123/GCT-CNS");
        assert_eq!(tree.header.company.department, "PHÒNG KỸ THUẬT");
        assert_eq!(tree.header.motto.place_and_date, "Hà Nội, ngày 18 tháng 10 năm 2023");
    }

    #[test]
    fn test_salutation_follows_toggle() {
        let mut record = fixed_record();
        assert_eq!(render_record(&record).title.salutation, Some(SALUTATION_LINE));
        record.show_salutation = false;
        assert_eq!(render_record(&record).title.salutation, None);
    }

    #[test]
    fn test_render_is_idempotent() {
        let record = fixed_record().with_type(DocumentType::PaymentRequest).with_format(12);
        let style = formats::resolve(record.format_id);
        assert_eq!(render(&record, &style), render(&record, &style));
    }

    #[test]
    fn test_every_field_write_shows_up_on_next_render() {
        let mut record = fixed_record();
        let before = render_record(&record);
        record.destination = "Đà Nẵng".to_string();
        let after = render_record(&record);
        assert_ne!(before, after);
        assert_eq!(after.content.row_value("Được cử đi công tác tại:"), Some("Đà Nẵng"));
    }

    #[test]
    fn test_unknown_format_still_renders() {
        let tree = render_record(&fixed_record().with_format(999));
        assert_eq!(tree.style, formats::BASE);
    }

    #[test]
    fn test_travel_order_end_to_end() {
        let record = fixed_record();
        let tree = render_record(&record);

        assert_eq!(tree.title.text, "GIẤY ĐI ĐƯỜNG");
        assert!(matches!(tree.content, ContentBlock::TravelOrder(_)));
        assert!(matches!(tree.signature.layout, SignatureLayout::ThreeColumn { .. }));

        let signer = tree.signature.signer();
        assert_eq!(signer.signature().unwrap().text, "B");
        assert_eq!(signer.seal().unwrap().top_text, "M.S.D.N: 0101234567");
    }
}
