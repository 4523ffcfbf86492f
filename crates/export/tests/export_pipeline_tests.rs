//! Integration tests for the export pipeline
//!
//! Each test renders a record onto a preview surface and exports it the way
//! the form's download buttons do. System fonts are not loaded so the tests
//! do not depend on what is installed on the machine.

use doc_model::{DocumentRecord, DocumentType};
use export::{CaptureOptions, ExportError, ExportOptions, ExportPipeline};
use render_model::PreviewSurface;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn pipeline_with_scale(scale: f32) -> ExportPipeline {
    init_tracing();
    let capture = CaptureOptions::default().with_system_fonts(false).with_scale(scale);
    ExportPipeline::new(ExportOptions::default().with_capture(capture))
}

fn pipeline() -> ExportPipeline {
    pipeline_with_scale(1.0)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    count(haystack, needle) > 0
}

fn count(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

/// `{tag}-{digits}.{ext}`
fn assert_file_name(name: &str, tag: &str, ext: &str) {
    let stamp = name
        .strip_prefix(tag)
        .and_then(|rest| rest.strip_prefix('-'))
        .and_then(|rest| rest.strip_suffix(ext))
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or_else(|| panic!("unexpected file name {name}"));
    assert!(!stamp.is_empty());
    assert!(stamp.chars().all(|c| c.is_ascii_digit()), "unexpected file name {name}");
}

fn travel_order() -> DocumentRecord {
    let mut record = DocumentRecord::new()
        .with_type(DocumentType::TravelOrder)
        .with_format(1);
    record.full_name = "Nguyễn Văn A".to_string();
    record.show_seal = true;
    record.show_signature = true;
    record
}

#[tokio::test]
async fn test_png_export_end_to_end() {
    let pipeline = pipeline_with_scale(2.0);
    let surface = PreviewSurface::from_record(&travel_order());

    let file = pipeline.export_image(&surface).await.unwrap();

    assert_file_name(&file.file_name, "giay-cong-tac", "png");
    assert_eq!(file.mime_type, "image/png");
    assert!(file.bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    // IHDR width and height are the A4 page at 2x
    assert_eq!(&file.bytes[16..20], &1588u32.to_be_bytes());
    assert_eq!(&file.bytes[20..24], &2246u32.to_be_bytes());
    assert!(!surface.is_export_mode());
    assert!(!pipeline.is_busy());
}

#[tokio::test]
async fn test_pdf_export_end_to_end() {
    let pipeline = pipeline();
    let surface = PreviewSurface::from_record(&travel_order());

    let file = pipeline.export_pdf(&surface).await.unwrap();

    assert_file_name(&file.file_name, "giay-cong-tac", "pdf");
    assert_eq!(file.mime_type, "application/pdf");
    assert!(file.bytes.starts_with(b"%PDF-"));
    assert!(file.bytes.ends_with(b"%%EOF\n"));
    assert_eq!(count(&file.bytes, b"/Type /Page "), 1);
    assert!(contains(&file.bytes, b"/MediaBox [0.0 0.0 595.28 841.89]"));
    assert!(contains(&file.bytes, b"/Filter /FlateDecode"));
    assert!(contains(&file.bytes, b"/ColorSpace /DeviceRGB"));
    assert!(!surface.is_export_mode());
}

#[tokio::test]
async fn test_pdf_title_is_document_title() {
    let pipeline = pipeline();
    let record = DocumentRecord::new().with_type(DocumentType::LeaveRequest);
    let surface = PreviewSurface::from_record(&record);

    let file = pipeline.export_pdf(&surface).await.unwrap();

    let mut title = String::from("<FEFF");
    for unit in "ĐƠN XIN NGHỈ PHÉP".encode_utf16() {
        title.push_str(&format!("{:04X}", unit));
    }
    title.push('>');
    assert!(contains(&file.bytes, format!("/Title {}", title).as_bytes()));
    assert_file_name(&file.file_name, "giay-nghi-phep", "pdf");
}

#[tokio::test]
async fn test_every_document_type_exports() {
    let pipeline = pipeline_with_scale(0.5);
    for doc_type in DocumentType::ALL {
        let surface = PreviewSurface::from_record(&DocumentRecord::new().with_type(doc_type));
        let file = pipeline.export_image(&surface).await.unwrap();
        assert_file_name(&file.file_name, doc_type.as_tag(), "png");
    }
}

#[tokio::test]
async fn test_concurrent_export_is_rejected() {
    let pipeline = pipeline();
    let surface = PreviewSurface::from_record(&travel_order());

    let (first, second) = tokio::join!(pipeline.export_image(&surface), pipeline.export_pdf(&surface));

    assert!(first.is_ok());
    assert!(matches!(second, Err(ExportError::Busy)));
    assert!(!pipeline.is_busy());
    assert!(!surface.is_export_mode());

    // the pipeline is free again afterwards
    assert!(pipeline.export_pdf(&surface).await.is_ok());
}

#[tokio::test]
async fn test_empty_surface_fails_capture() {
    let pipeline = pipeline();
    let surface = PreviewSurface::default();

    let result = pipeline.export_pdf(&surface).await;

    assert!(matches!(result, Err(ExportError::Capture(_))));
    assert!(!surface.is_export_mode());
    assert!(!pipeline.is_busy());
}

#[tokio::test]
async fn test_export_mode_reverted_after_failure() {
    let pipeline = pipeline_with_scale(f32::NAN);
    let surface = PreviewSurface::from_record(&travel_order());

    let result = pipeline.export_image(&surface).await;

    assert!(matches!(result, Err(ExportError::Capture(_))));
    assert!(!surface.is_export_mode());
    assert!(!pipeline.is_busy());
}

#[tokio::test]
async fn test_preview_unchanged_by_export() {
    let pipeline = pipeline();
    let mut surface = PreviewSurface::from_record(&travel_order());
    surface.set_display_scale(0.5);
    let before = surface.snapshot().unwrap();

    pipeline.export_image(&surface).await.unwrap();

    assert_eq!(surface.display_scale(), 0.5);
    assert_eq!(surface.snapshot().unwrap(), before);
}

#[tokio::test]
async fn test_options_from_json() {
    init_tracing();
    let options = ExportOptions::from_json(
        r#"{"capture": {"scale": 1.0, "loadSystemFonts": false}, "pdf": {"title": "Hồ sơ", "compress": false}}"#,
    )
    .unwrap();
    let pipeline = ExportPipeline::new(options);
    let surface = PreviewSurface::from_record(&travel_order());

    let file = pipeline.export_pdf(&surface).await.unwrap();

    assert!(!contains(&file.bytes, b"/Filter /FlateDecode"));
    assert!(contains(&file.bytes, b"/Title <FEFF0048"));
}
