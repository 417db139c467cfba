use std::sync::Arc;

use bytes::Bytes;
use regex::Regex;

use crate::application::ports::MarkdownRenderer;
use crate::presentation::config::ValidationSettings;

/// An uploaded markdown file as received by the HTTP layer.
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub filename: String,
    pub data: Bytes,
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Either markdown file or text must be provided")]
    MissingContent,
    #[error("Only markdown files are allowed")]
    UnsupportedExtension(String),
    #[error("Invalid file type. Must be a markdown file")]
    UnsupportedMimeType(String),
    #[error("File exceeds {limit} MiB limit", limit = .limit_bytes / (1024 * 1024))]
    FileTooLarge {
        size_bytes: usize,
        limit_bytes: usize,
    },
    #[error("File must be UTF-8 encoded")]
    InvalidEncoding,
    #[error("Invalid markdown content")]
    NotMarkdown,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid markdown pattern {pattern:?}: {source}")]
pub struct InvalidPattern {
    pattern: String,
    source: regex::Error,
}

/// Bytes inspected when sniffing the content type of an upload.
const SNIFF_LEN: usize = 2048;

/// Normalizes a file-or-text submission into a single UTF-8 markdown
/// string, enforcing the upload policy along the way.
///
/// The allow-lists and size cap come from [`ValidationSettings`]; the
/// checks run in a fixed order (extension, sniffed type, size, encoding)
/// so a given bad upload always fails the same way.
pub struct MarkdownContentProcessor {
    allowed_extensions: Vec<String>,
    allowed_mime_types: Vec<String>,
    max_file_size_bytes: usize,
    markdown_patterns: Vec<Regex>,
    renderer: Arc<dyn MarkdownRenderer>,
}

impl MarkdownContentProcessor {
    pub fn new(
        settings: &ValidationSettings,
        renderer: Arc<dyn MarkdownRenderer>,
    ) -> Result<Self, InvalidPattern> {
        let markdown_patterns = settings
            .markdown_patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|source| InvalidPattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            allowed_extensions: settings
                .allowed_extensions
                .iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
            allowed_mime_types: settings.allowed_mime_types.clone(),
            max_file_size_bytes: settings.max_file_size_mb * 1024 * 1024,
            markdown_patterns,
            renderer,
        })
    }

    /// A file submission wins when both are present, matching the upstream
    /// form contract.
    pub fn process(
        &self,
        file: Option<FilePayload>,
        text: Option<String>,
    ) -> Result<String, ContentError> {
        match (file, text) {
            (Some(file), _) => self.extract_file(file),
            (None, Some(text)) => self.validate_text(text),
            (None, None) => Err(ContentError::MissingContent),
        }
    }

    fn extract_file(&self, file: FilePayload) -> Result<String, ContentError> {
        let filename = file.filename.to_lowercase();
        if !self
            .allowed_extensions
            .iter()
            .any(|ext| filename.ends_with(ext))
        {
            tracing::debug!(filename = %file.filename, "Rejected upload extension");
            return Err(ContentError::UnsupportedExtension(file.filename));
        }

        let sniffed = sniff_mime(&file.data);
        if !self.allowed_mime_types.iter().any(|m| m == sniffed) {
            tracing::debug!(filename = %file.filename, mime = %sniffed, "Rejected sniffed content type");
            return Err(ContentError::UnsupportedMimeType(sniffed.to_string()));
        }

        if file.data.len() > self.max_file_size_bytes {
            return Err(ContentError::FileTooLarge {
                size_bytes: file.data.len(),
                limit_bytes: self.max_file_size_bytes,
            });
        }

        String::from_utf8(file.data.to_vec()).map_err(|_| ContentError::InvalidEncoding)
    }

    /// Markdown-likeness is deliberately permissive: any single marker
    /// suffices, so short legitimate notes are not rejected. The
    /// render-and-compare step then weeds out inputs that merely resemble
    /// markdown syntax without parsing into a document.
    fn validate_text(&self, text: String) -> Result<String, ContentError> {
        if text.trim().is_empty() {
            return Err(ContentError::NotMarkdown);
        }

        if !self.markdown_patterns.iter().any(|p| p.is_match(&text)) {
            return Err(ContentError::NotMarkdown);
        }

        let html = self.renderer.render(&text);
        if html.trim().is_empty() || html == text {
            return Err(ContentError::NotMarkdown);
        }

        Ok(text)
    }
}

/// Content-based type detection over the first 2048 bytes: known binary
/// signatures win, otherwise a text heuristic decides between plain text
/// and opaque bytes. Encoding is not judged here; a non-UTF-8 text file
/// still sniffs as text so the decode step reports it instead.
fn sniff_mime(data: &[u8]) -> &'static str {
    let head = &data[..data.len().min(SNIFF_LEN)];

    if let Some(kind) = infer::get(head) {
        return kind.mime_type();
    }

    if looks_like_text(head) {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}

fn looks_like_text(head: &[u8]) -> bool {
    if head.is_empty() {
        return true;
    }
    if head.contains(&0) {
        return false;
    }

    let control = head
        .iter()
        .copied()
        .filter(|&b| b.is_ascii_control() && !matches!(b, b'\t' | b'\n' | b'\r' | 0x0c))
        .count();

    // Tolerate stray control bytes, reject anything that is mostly binary.
    control * 10 < head.len()
}
