//! End-to-end tests for the docs2md pipeline.
//!
//! These tests drive the public API exactly as a host would: build an
//! `UploadedFile`, run `convert` with a converter backend, inspect the
//! outcome and the download artifact. Converter backends are in-process
//! stand-ins (passthrough, failing, panicking, hanging) so the suite runs
//! offline and deterministically.

use docs2md::{
    convert, ConversionOutcome, ConversionProgress, ConvertError, ConverterError,
    DocumentConverter, PipelineConfig, UploadedFile,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ── Test converters ──────────────────────────────────────────────────────────

/// Passes the upload's bytes through as Markdown, like a plain-text backend.
struct PassthroughConverter;

impl DocumentConverter for PassthroughConverter {
    fn convert_document(&self, file: &UploadedFile) -> Result<String, ConverterError> {
        Ok(String::from_utf8_lossy(file.bytes()).into_owned())
    }
}

/// Always reports a backend error, like a parser hitting a corrupt file.
struct FailingConverter;

impl DocumentConverter for FailingConverter {
    fn convert_document(&self, _file: &UploadedFile) -> Result<String, ConverterError> {
        Err("startxref not found".into())
    }
}

/// Panics mid-parse, like a library bug in the backend.
struct PanickingConverter;

impl DocumentConverter for PanickingConverter {
    fn convert_document(&self, _file: &UploadedFile) -> Result<String, ConverterError> {
        panic!("attempt to subtract with overflow")
    }
}

/// Never returns within any reasonable bound.
struct HangingConverter;

impl DocumentConverter for HangingConverter {
    fn convert_document(&self, _file: &UploadedFile) -> Result<String, ConverterError> {
        std::thread::sleep(std::time::Duration::from_secs(30));
        Ok(String::new())
    }
}

fn passthrough() -> Arc<dyn DocumentConverter> {
    Arc::new(PassthroughConverter)
}

fn upload(name: &str, content: &[u8]) -> UploadedFile {
    UploadedFile::new(name, content.to_vec()).expect("non-empty upload")
}

// ── Scenario 1: plain text in, Markdown and artifact out ─────────────────────

#[tokio::test]
async fn plain_text_upload_converts_and_downloads() {
    let file = upload("notes.txt", b"hello world");
    let outcome = convert(&file, &passthrough(), &PipelineConfig::default()).await;

    assert_eq!(outcome.markdown(), Some("hello world"));

    let artifact = outcome.download_artifact(file.name()).unwrap();
    assert_eq!(artifact.filename(), "notes.md");
    assert_eq!(artifact.mime_type(), "text/markdown");
    // Round-trip: artifact content decoded as UTF-8 equals the text exactly.
    assert_eq!(std::str::from_utf8(artifact.content()).unwrap(), "hello world");
}

// ── Scenario 2: backend failure is a value, not a fault ──────────────────────

#[tokio::test]
async fn corrupt_document_resolves_to_failure_message() {
    let file = upload("corrupt.pdf", &[0x25, 0x50, 0x44]);
    let converter: Arc<dyn DocumentConverter> = Arc::new(FailingConverter);
    let outcome = convert(&file, &converter, &PipelineConfig::default()).await;

    assert!(!outcome.is_converted());
    let msg = outcome.failure_message().unwrap();
    assert!(
        msg.starts_with(
            "Error: Failed to convert the file. Please ensure the file type is supported. Details: "
        ),
        "got: {msg}"
    );
    assert!(msg.contains("startxref not found"));
    assert!(outcome.download_artifact(file.name()).is_none());
}

#[tokio::test]
async fn backend_panic_resolves_to_failure_message() {
    let file = upload("sheet.xlsx", b"PK\x03\x04");
    let converter: Arc<dyn DocumentConverter> = Arc::new(PanickingConverter);
    let outcome = convert(&file, &converter, &PipelineConfig::default()).await;

    match outcome.error() {
        Some(ConvertError::ConverterPanicked { detail }) => {
            assert!(detail.contains("overflow"), "got: {detail}");
        }
        other => panic!("expected ConverterPanicked, got {other:?}"),
    }
    assert!(outcome.download_artifact(file.name()).is_none());
}

// ── Scenario 3: no file selected ⇒ pipeline never invoked ────────────────────

#[test]
fn empty_upload_never_reaches_the_pipeline() {
    assert!(UploadedFile::new("notes.txt", Vec::new()).is_none());
}

// ── Timeout ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn hung_backend_is_bounded_by_the_timeout() {
    let file = upload("slides.pptx", b"PK\x03\x04");
    let converter: Arc<dyn DocumentConverter> = Arc::new(HangingConverter);
    let config = PipelineConfig::builder()
        .converter_timeout_secs(Some(1))
        .build()
        .unwrap();

    let started = std::time::Instant::now();
    let outcome = convert(&file, &converter, &config).await;

    assert!(matches!(outcome.error(), Some(ConvertError::Timeout { secs: 1 })));
    assert!(
        started.elapsed() < std::time::Duration::from_secs(5),
        "timeout did not unblock the request"
    );
}

// ── Idempotence ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn identical_input_yields_identical_outcome() {
    let file = upload("data.csv", b"a,b\n1,2\n");
    let converter = passthrough();
    let config = PipelineConfig::default();

    let first = convert(&file, &converter, &config).await;
    let second = convert(&file, &converter, &config).await;

    assert_eq!(first.markdown(), second.markdown());
    assert_eq!(
        first.download_artifact(file.name()).unwrap().content(),
        second.download_artifact(file.name()).unwrap().content()
    );
}

// ── Progress events ──────────────────────────────────────────────────────────

#[derive(Default)]
struct RecordingProgress {
    events: Mutex<Vec<String>>,
    starts: AtomicUsize,
}

impl ConversionProgress for RecordingProgress {
    fn on_conversion_start(&self, filename: &str) {
        self.starts.fetch_add(1, Ordering::SeqCst);
        self.events.lock().unwrap().push(format!("start:{filename}"));
    }

    fn on_conversion_complete(&self, filename: &str, markdown_len: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("complete:{filename}:{markdown_len}"));
    }

    fn on_conversion_failed(&self, filename: &str, message: &str) {
        assert!(message.starts_with("Error: Failed to convert the file."));
        self.events.lock().unwrap().push(format!("failed:{filename}"));
    }
}

#[tokio::test]
async fn progress_fires_start_then_one_terminal_event() {
    let progress = Arc::new(RecordingProgress::default());
    let config = PipelineConfig::builder()
        .progress_callback(Arc::clone(&progress) as Arc<dyn ConversionProgress>)
        .build()
        .unwrap();

    let ok = upload("notes.txt", b"hello");
    convert(&ok, &passthrough(), &config).await;

    let bad = upload("corrupt.pdf", &[0xFF]);
    let failing: Arc<dyn DocumentConverter> = Arc::new(FailingConverter);
    convert(&bad, &failing, &config).await;

    let events = progress.events.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            "start:notes.txt".to_string(),
            "complete:notes.txt:5".to_string(),
            "start:corrupt.pdf".to_string(),
            "failed:corrupt.pdf".to_string(),
        ]
    );
    assert_eq!(progress.starts.load(Ordering::SeqCst), 2);
}

// ── Artifact materialisation ─────────────────────────────────────────────────

#[tokio::test]
async fn artifact_writes_to_disk_under_derived_name() {
    let dir = tempfile::tempdir().unwrap();
    let file = upload("report.pdf", b"%PDF-1.7 stub");
    // A backend that extracts a heading, standing in for a real PDF reader.
    let converter: Arc<dyn DocumentConverter> = Arc::new(
        |_: &UploadedFile| -> Result<String, ConverterError> {
            Ok("# Quarterly Report\n\nRevenue grew.\n".into())
        },
    );

    let outcome = convert(&file, &converter, &PipelineConfig::default()).await;
    let artifact = outcome.download_artifact(file.name()).unwrap();
    let path = artifact.write_to_dir(dir.path()).await.unwrap();

    assert_eq!(path.file_name().unwrap(), "report.md");
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "# Quarterly Report\n\nRevenue grew.\n"
    );
}

// ── Wire shape ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn outcomes_serialize_for_host_transport() {
    let file = upload("notes.txt", b"hi");
    let outcome = convert(&file, &passthrough(), &PipelineConfig::default()).await;

    let json = serde_json::to_string(&outcome).unwrap();
    let back: ConversionOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back.markdown(), outcome.markdown());
}
