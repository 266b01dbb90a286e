//! BG-24 supporting documents: loading, MIME sniffing and base64 embedding.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::document::{DocumentReference, EmbeddedDocument};
use crate::core::{PdfAttachment, UblError};

/// ID of the fixed business-classification reference.
pub const CLASSIFICATION_REFERENCE_ID: &str = "UBL.BE";

/// Description of the fixed business-classification reference.
pub const CLASSIFICATION_REFERENCE_DESCRIPTION: &str = "CommercialInvoice";

/// MIME code used when the caller hands over raw bytes.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Source of attachment bytes when only a file name is given.
pub trait AttachmentLoader {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;

    /// MIME type of `bytes`, from content, never from the file name.
    fn detect_type(&self, bytes: &[u8]) -> String {
        detect_mime_type(bytes).to_string()
    }
}

/// Reads attachments from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl AttachmentLoader for FsLoader {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Sniff a MIME type from leading bytes.
pub fn detect_mime_type(bytes: &[u8]) -> &'static str {
    const SIGNATURES: &[(&[u8], &str)] = &[
        (b"%PDF-", "application/pdf"),
        (b"\x89PNG\r\n\x1a\n", "image/png"),
        (b"\xFF\xD8\xFF", "image/jpeg"),
        (b"GIF87a", "image/gif"),
        (b"GIF89a", "image/gif"),
        (b"PK\x03\x04", "application/zip"),
        (b"<?xml", "text/xml; charset=utf-8"),
    ];

    if let Some((_, mime)) = SIGNATURES.iter().find(|(magic, _)| bytes.starts_with(magic)) {
        return *mime;
    }

    let is_text = std::str::from_utf8(bytes).is_ok_and(|s| {
        s.chars()
            .all(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t' | '\x0C'))
    });
    if is_text && !bytes.is_empty() {
        "text/plain; charset=utf-8"
    } else {
        "application/octet-stream"
    }
}

/// Build the two document references for an attachment.
///
/// With `data`, the bytes are embedded as `application/pdf` under the
/// caller's description. Without it, `filename` is read through `loader`,
/// its type is sniffed and the description falls back to
/// `default_description`. Read failures abort with
/// [`UblError::Attachment`].
pub fn embed(
    document_id: &str,
    pdf: &PdfAttachment,
    default_description: &str,
    loader: &dyn AttachmentLoader,
) -> Result<Vec<DocumentReference>, UblError> {
    match &pdf.data {
        Some(data) => Ok(embed_bytes(
            document_id,
            data,
            PDF_MIME_TYPE,
            &pdf.filename,
            pdf.description.as_deref(),
        )),
        None => {
            let data = loader.read(Path::new(&pdf.filename))?;
            let mime = loader.detect_type(&data);
            tracing::debug!(
                path = %pdf.filename,
                mime = %mime,
                size = data.len(),
                "read attachment"
            );
            let description = pdf.description.as_deref().unwrap_or(default_description);
            Ok(embed_bytes(
                document_id,
                &data,
                &mime,
                &pdf.filename,
                Some(description),
            ))
        }
    }
}

/// Encode `data` and wrap it in the classification and payload references.
pub fn embed_bytes(
    document_id: &str,
    data: &[u8],
    mime: &str,
    filename: &str,
    description: Option<&str>,
) -> Vec<DocumentReference> {
    vec![
        DocumentReference {
            id: CLASSIFICATION_REFERENCE_ID.to_string(),
            description: Some(CLASSIFICATION_REFERENCE_DESCRIPTION.to_string()),
            attachment: None,
        },
        DocumentReference {
            id: document_id.to_string(),
            description: description.filter(|d| !d.is_empty()).map(str::to_string),
            attachment: Some(EmbeddedDocument {
                mime_code: mime.to_string(),
                filename: filename.to_string(),
                content: STANDARD.encode(data),
            }),
        },
    ]
}
