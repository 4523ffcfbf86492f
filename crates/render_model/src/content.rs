//! Type-specific content blocks
//!
//! One builder per document type. Each one lists its rows in print order and
//! pulls only the fields it needs from the shared record.

use crate::{ContentBlock, ContentNode, Row, ValueEmphasis};
use doc_model::{DocumentRecord, DocumentType};

/// Placeholder printed where the form has no field to fill
const DOTTED_FILL: &str = "..........................................................";
const DOTTED_FILL_LONG: &str = "........................................................................";

/// Build the content block for the record's document type
pub fn content_for(record: &DocumentRecord) -> ContentBlock {
    match record.doc_type {
        DocumentType::TravelOrder => ContentBlock::TravelOrder(travel_order(record)),
        DocumentType::IntroductionLetter => ContentBlock::IntroductionLetter(introduction_letter(record)),
        DocumentType::WorkConfirmation => ContentBlock::WorkConfirmation(work_confirmation(record)),
        DocumentType::LeaveRequest => ContentBlock::LeaveRequest(leave_request(record)),
        DocumentType::AdvancePaymentRequest => {
            ContentBlock::AdvancePaymentRequest(advance_payment_request(record))
        }
        DocumentType::PaymentRequest => ContentBlock::PaymentRequest(payment_request(record)),
        DocumentType::HandoverReport => ContentBlock::HandoverReport(handover_report(record)),
        DocumentType::BusinessTripAssignment => {
            ContentBlock::BusinessTripAssignment(business_trip_assignment(record))
        }
        DocumentType::DutyRosterRequest => ContentBlock::DutyRosterRequest(duty_roster_request(record)),
    }
}

fn row(label: &'static str, value: impl Into<String>) -> ContentNode {
    ContentNode::Row(Row {
        label,
        value: value.into(),
        emphasis: ValueEmphasis::Plain,
    })
}

fn emphasized_row(label: &'static str, value: impl Into<String>, emphasis: ValueEmphasis) -> ContentNode {
    ContentNode::Row(Row {
        label,
        value: value.into(),
        emphasis,
    })
}

fn lead(text: &'static str, record: &DocumentRecord) -> ContentNode {
    ContentNode::Paragraph {
        lead: text,
        emphasized: record.full_name.clone(),
    }
}

/// Position, birth date and citizen id: shared by almost every layout
fn identity_rows(record: &DocumentRecord, id_label: &'static str) -> [ContentNode; 3] {
    [
        row("Chức vụ:", &record.position),
        row("Ngày sinh:", record.birth_date_text()),
        row(id_label, record.id_card_text()),
    ]
}

fn date_range(record: &DocumentRecord) -> String {
    format!("Từ ngày {} đến ngày {}", record.duration_from, record.duration_to)
}

fn travel_order(record: &DocumentRecord) -> Vec<ContentNode> {
    let mut nodes = vec![emphasized_row(
        "1. Cấp cho ông/bà:",
        &record.full_name,
        ValueEmphasis::BoldUpper,
    )];
    nodes.extend(identity_rows(record, "Căn cước công dân:"));
    nodes.extend([
        row("Được cử đi công tác tại:", &record.destination),
        row("Về việc:", &record.reason),
        row("Thời gian:", date_range(record)),
        row("Phương tiện:", "Tự túc / Xe công ty"),
    ]);
    nodes
}

fn introduction_letter(record: &DocumentRecord) -> Vec<ContentNode> {
    let mut nodes = vec![lead("Trân trọng giới thiệu ông/bà:", record)];
    nodes.extend(identity_rows(record, "Căn cước công dân số:"));
    nodes.extend([
        row(
            "Cấp ngày:",
            format!("{} tại {}", record.id_date_text(), record.id_place_text()),
        ),
        row("Được cử đến:", &record.destination),
        row("Về việc:", &record.reason),
        ContentNode::Note {
            text: format!("Giấy giới thiệu có giá trị đến hết ngày: {}", record.duration_to),
        },
    ]);
    nodes
}

fn work_confirmation(record: &DocumentRecord) -> Vec<ContentNode> {
    let mut nodes = vec![lead("Tôi tên là:", record)];
    nodes.extend(identity_rows(record, "Căn cước công dân:"));
    nodes.extend([
        row(
            "Đơn vị công tác:",
            format!("{} - {}", record.department, record.company_name),
        ),
        row(
            "Nay xác nhận:",
            format!("Ông/Bà {} đang công tác tại đơn vị.", record.full_name),
        ),
        row("Lý do xác nhận:", &record.reason),
        row("Nơi nhận:", &record.destination),
    ]);
    nodes
}

fn leave_request(record: &DocumentRecord) -> Vec<ContentNode> {
    let mut nodes = vec![lead("Tôi tên là:", record)];
    nodes.extend(identity_rows(record, "Căn cước công dân:"));
    nodes.extend([
        row("Bộ phận:", &record.department),
        row(
            "Xin nghỉ phép từ:",
            format!("{} đến {}", record.duration_from, record.duration_to),
        ),
        row("Lý do nghỉ:", &record.reason),
        row("Nơi nghỉ:", &record.destination),
    ]);
    nodes
}

/// Requester identity followed by the amount rows
fn money_request_head(record: &DocumentRecord, amount_label: &'static str) -> Vec<ContentNode> {
    let mut nodes = vec![lead("Tôi tên là:", record)];
    nodes.extend(identity_rows(record, "Căn cước công dân:"));
    nodes.push(row("Bộ phận:", &record.department));

    if let Some(money) = record.money() {
        nodes.push(emphasized_row(
            amount_label,
            format!("{} VNĐ", money.amount),
            ValueEmphasis::Bold,
        ));
        nodes.push(emphasized_row(
            "Bằng chữ:",
            money.amount_in_words,
            ValueEmphasis::Italic,
        ));
    }
    nodes
}

fn advance_payment_request(record: &DocumentRecord) -> Vec<ContentNode> {
    let mut nodes = money_request_head(record, "Đề nghị tạm ứng số tiền:");
    nodes.extend([
        row("Lý do tạm ứng:", &record.reason),
        row("Thời hạn thanh toán:", &record.duration_to),
    ]);
    nodes
}

fn payment_request(record: &DocumentRecord) -> Vec<ContentNode> {
    let mut nodes = money_request_head(record, "Đề nghị thanh toán số tiền:");
    nodes.extend([
        row("Nội dung thanh toán:", &record.reason),
        row("Kèm theo chứng từ gốc:", DOTTED_FILL),
    ]);
    nodes
}

fn handover_report(record: &DocumentRecord) -> Vec<ContentNode> {
    let mut nodes = vec![
        ContentNode::SectionHeading { text: "I. BÊN GIAO:" },
        emphasized_row("Ông/Bà:", &record.full_name, ValueEmphasis::BoldUpper),
    ];
    nodes.extend(identity_rows(record, "Căn cước công dân:"));
    nodes.extend([
        row("Bộ phận:", &record.department),
        ContentNode::SectionHeading { text: "II. BÊN NHẬN:" },
        emphasized_row("Ông/Bà:", &record.destination, ValueEmphasis::BoldUpper),
        row("Bộ phận:", DOTTED_FILL_LONG),
        ContentNode::SectionHeading { text: "III. NỘI DUNG BÀN GIAO:" },
        ContentNode::BoxedText {
            text: record.reason.clone(),
        },
    ]);
    nodes
}

fn business_trip_assignment(record: &DocumentRecord) -> Vec<ContentNode> {
    let mut nodes = vec![
        ContentNode::Paragraph {
            lead: "Căn cứ vào nhu cầu công tác, Giám đốc Công ty quyết định cử cán bộ đi công tác như sau:",
            emphasized: String::new(),
        },
        emphasized_row("1. Ông/Bà:", &record.full_name, ValueEmphasis::BoldUpper),
    ];
    nodes.extend(identity_rows(record, "Căn cước công dân:"));
    nodes.extend([
        row("Bộ phận:", &record.department),
        row("2. Nơi đến công tác:", &record.destination),
        row("3. Về việc:", &record.reason),
        row("4. Thời gian:", date_range(record)),
        row("5. Phương tiện:", "Theo quy định của công ty"),
        row("6. Kinh phí:", "Theo quy chế công tác phí hiện hành"),
    ]);
    nodes
}

fn duty_roster_request(record: &DocumentRecord) -> Vec<ContentNode> {
    let mut nodes = vec![
        ContentNode::Paragraph {
            lead: "Theo yêu cầu công việc, Phòng/Ban đề nghị bố trí nhân sự trực như sau:",
            emphasized: String::new(),
        },
        emphasized_row("Họ và tên:", &record.full_name, ValueEmphasis::BoldUpper),
    ];
    nodes.extend(identity_rows(record, "Căn cước công dân:"));
    nodes.extend([
        row("Bộ phận:", &record.department),
        row("Thời gian trực:", &record.duration_from),
        row("Ca trực:", &record.duration_to),
        row("Địa điểm:", &record.destination),
        row("Nội dung công việc:", &record.reason),
    ]);
    nodes
}
