//! The document record
//!
//! One record exists per editing session. The form mutates it field by field
//! and the renderer re-reads it on every pass; nothing here caches derived
//! values.

use crate::{format_issue_date, DocumentType, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Field data for a single document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentRecord {
    /// Which document is being produced
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// Visual format variant
    pub format_id: u32,

    // Issuing organization
    pub company_name: String,
    pub department: String,
    pub document_number: String,
    pub location: String,
    /// Issue date
    pub date: NaiveDate,
    pub tax_code: String,

    // Person the document is about
    pub full_name: String,
    pub position: String,
    pub birth_date: Option<String>,
    pub id_card: Option<String>,
    pub id_date: Option<String>,
    pub id_place: Option<String>,

    // Free-text content, all caller-formatted display strings
    pub reason: String,
    pub destination: String,
    pub duration_from: String,
    pub duration_to: String,

    /// Amount as displayed, e.g. `5.000.000`
    pub amount: Option<String>,
    pub amount_in_words: Option<String>,

    pub signer_name: String,
    pub signer_title: String,

    pub show_seal: bool,
    pub show_signature: bool,
    /// Print the "Kính gửi" salutation line under the title
    #[serde(rename = "showKinhGui")]
    pub show_salutation: bool,

    /// Kept for form compatibility; the seal always prints `company_name`
    pub seal_text: Option<String>,
}

/// Money fields, only available on payment documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyFields<'a> {
    pub amount: &'a str,
    pub amount_in_words: &'a str,
}

impl Default for DocumentRecord {
    fn default() -> Self {
        let company_name = "CÔNG TY TNHH MTV GIẢI PHÁP CÔNG NGHỆ SỐ".to_string();
        Self {
            doc_type: DocumentType::TravelOrder,
            format_id: 1,
            seal_text: Some(company_name.clone()),
            company_name,
            department: "PHÒNG KỸ THUẬT".to_string(),
            document_number: "123/GCT-CNS".to_string(),
            location: "Hà Nội".to_string(),
            date: Local::now().date_naive(),
            tax_code: "0101234567".to_string(),
            full_name: "Nguyễn Văn A".to_string(),
            position: "Nhân viên kỹ thuật".to_string(),
            birth_date: None,
            id_card: Some("0123456789".to_string()),
            id_date: Some("01/01/2020".to_string()),
            id_place: Some("Cục Cảnh sát QLHC về TTXH".to_string()),
            reason: "Tham gia triển khai dự án phần mềm quản lý kho".to_string(),
            destination: "Chi nhánh Hồ Chí Minh - Quận 1".to_string(),
            duration_from: "20/10/2023".to_string(),
            duration_to: "25/10/2023".to_string(),
            amount: Some("5.000.000".to_string()),
            amount_in_words: Some("Năm triệu đồng chẵn".to_string()),
            signer_name: "Trần Văn B".to_string(),
            signer_title: "GIÁM ĐỐC".to_string(),
            show_seal: true,
            show_signature: true,
            show_salutation: true,
        }
    }
}

impl DocumentRecord {
    /// Create a record with default field data
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a record sent by the form; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_type(mut self, doc_type: DocumentType) -> Self {
        self.doc_type = doc_type;
        self
    }

    pub fn with_format(mut self, format_id: u32) -> Self {
        self.format_id = format_id;
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Money fields, present only for the two payment document types.
    ///
    /// Other document types ignore whatever the form left in `amount`.
    pub fn money(&self) -> Option<MoneyFields<'_>> {
        if !self.doc_type.is_payment() {
            return None;
        }
        Some(MoneyFields {
            amount: self.amount.as_deref().unwrap_or_default(),
            amount_in_words: self.amount_in_words.as_deref().unwrap_or_default(),
        })
    }

    /// The token drawn as a handwritten signature: the signer's given name
    pub fn signature_token(&self) -> &str {
        self.signer_name.split_whitespace().last().unwrap_or_default()
    }

    /// "{location}, ngày .. tháng .. năm ...."
    pub fn place_and_date(&self) -> String {
        format!("{}, {}", self.location, format_issue_date(self.date))
    }

    pub fn birth_date_text(&self) -> &str {
        self.birth_date.as_deref().unwrap_or_default()
    }

    pub fn id_card_text(&self) -> &str {
        self.id_card.as_deref().unwrap_or_default()
    }

    pub fn id_date_text(&self) -> &str {
        self.id_date.as_deref().unwrap_or_default()
    }

    pub fn id_place_text(&self) -> &str {
        self.id_place.as_deref().unwrap_or_default()
    }
}
