use std::sync::Arc;

use bytes::Bytes;

use notedown::application::ports::MarkdownRenderer;
use notedown::infrastructure::markdown::{
    ContentError, FilePayload, MarkdownContentProcessor, PulldownRenderer,
};
use notedown::presentation::config::ValidationSettings;

fn processor() -> MarkdownContentProcessor {
    let renderer: Arc<dyn MarkdownRenderer> = Arc::new(PulldownRenderer::new());
    MarkdownContentProcessor::new(&ValidationSettings::default(), renderer)
        .expect("default validation settings must compile")
}

fn md_file(filename: &str, data: &[u8]) -> FilePayload {
    FilePayload {
        filename: filename.to_string(),
        data: Bytes::copy_from_slice(data),
    }
}

#[test]
fn given_no_file_and_no_text_when_processing_then_missing_content() {
    let result = processor().process(None, None);
    assert!(matches!(result, Err(ContentError::MissingContent)));
}

#[test]
fn given_heading_text_when_processing_then_accepted_verbatim() {
    let text = "# Heading\nSome *text*".to_string();
    let content = processor().process(None, Some(text.clone())).unwrap();
    assert_eq!(content, text);
}

#[test]
fn given_plain_sentence_when_processing_then_rejected_as_not_markdown() {
    let result = processor().process(None, Some("plain sentence with no markup.".to_string()));
    assert!(matches!(result, Err(ContentError::NotMarkdown)));
}

#[test]
fn given_blank_text_when_processing_then_rejected_as_not_markdown() {
    let result = processor().process(None, Some("   \n  ".to_string()));
    assert!(matches!(result, Err(ContentError::NotMarkdown)));
}

#[test]
fn given_list_text_when_processing_then_accepted() {
    let result = processor().process(None, Some("- milk\n- eggs".to_string()));
    assert!(result.is_ok());
}

#[test]
fn given_valid_markdown_file_when_processing_then_content_is_decoded() {
    let file = md_file("notes.md", b"# Title\n\nBody text.");
    let content = processor().process(Some(file), None).unwrap();
    assert_eq!(content, "# Title\n\nBody text.");
}

#[test]
fn given_txt_extension_when_processing_then_unsupported_extension() {
    let file = md_file("notes.txt", b"# Title");
    let result = processor().process(Some(file), None);
    assert!(matches!(result, Err(ContentError::UnsupportedExtension(_))));
}

#[test]
fn given_uppercase_markdown_extension_when_processing_then_accepted() {
    let file = md_file("NOTES.MD", b"# Title");
    assert!(processor().process(Some(file), None).is_ok());
}

#[test]
fn given_png_bytes_with_markdown_extension_when_processing_then_unsupported_mime() {
    let mut data = b"\x89PNG\r\n\x1a\n".to_vec();
    data.extend_from_slice(&[0u8; 64]);
    let file = md_file("sneaky.md", &data);

    let result = processor().process(Some(file), None);
    assert!(matches!(result, Err(ContentError::UnsupportedMimeType(_))));
}

#[test]
fn given_oversized_file_when_processing_then_payload_too_large() {
    let data = vec![b'a'; 6 * 1024 * 1024];
    let file = md_file("big.md", &data);

    let result = processor().process(Some(file), None);
    assert!(matches!(result, Err(ContentError::FileTooLarge { .. })));
}

#[test]
fn given_non_utf8_file_when_processing_then_invalid_encoding() {
    // Latin-1 "café" sniffs as text but is not valid UTF-8.
    let file = md_file("latin1.md", b"# caf\xe9 latte\n\nmore text");

    let result = processor().process(Some(file), None);
    assert!(matches!(result, Err(ContentError::InvalidEncoding)));
}

#[test]
fn given_file_and_text_together_when_processing_then_file_wins() {
    let file = md_file("notes.md", b"# From file");
    let content = processor()
        .process(Some(file), Some("# From text".to_string()))
        .unwrap();
    assert_eq!(content, "# From file");
}
