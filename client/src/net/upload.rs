//! Manual upload payloads and the local checks that gate them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every upload path (home drop zone, file picker, admin model form) runs
//! `check_manual` on file metadata before reading bytes or touching the
//! network. A rejected file never produces a request.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use thiserror::Error;

/// MIME type accepted for manuals.
pub const PDF_MIME: &str = "application/pdf";

/// Largest manual accepted by the client: 20MB.
pub const MAX_MANUAL_BYTES: u64 = 20 * 1024 * 1024;

/// Why a file was refused before upload.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("Only PDF files can be uploaded.")]
    NotPdf,
    #[error("PDF files must be 20MB or smaller.")]
    TooLarge { size: u64 },
}

/// Validate manual metadata. MIME is checked before size.
///
/// # Errors
///
/// Returns the first rule the file breaks.
pub fn check_manual(mime_type: &str, size: u64) -> Result<(), UploadRejection> {
    if mime_type != PDF_MIME {
        return Err(UploadRejection::NotPdf);
    }
    if size > MAX_MANUAL_BYTES {
        return Err(UploadRejection::TooLarge { size });
    }
    Ok(())
}

/// A manual read into memory, ready for a multipart body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManualFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ManualFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { file_name: file_name.into(), mime_type: mime_type.into(), bytes }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Run [`check_manual`] against this file.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason when the file is not an acceptable PDF.
    pub fn check(&self) -> Result<(), UploadRejection> {
        check_manual(&self.mime_type, self.size())
    }

    /// Model name derived from the file name, minus its last extension.
    pub fn model_name(&self) -> String {
        model_name_from_file_name(&self.file_name)
    }
}

/// Strip the final `.ext` from `file_name`.
///
/// A leading dot (`.pdf`) or a trailing dot is not treated as an extension.
pub fn model_name_from_file_name(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < file_name.len() => file_name[..idx].to_owned(),
        _ => file_name.to_owned(),
    }
}

/// Coarse upload progress: reported once before sending and once on completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadProgress {
    pub loaded: u64,
    pub total: u64,
}

impl UploadProgress {
    pub fn started(total: u64) -> Self {
        Self { loaded: 0, total }
    }

    pub fn finished(total: u64) -> Self {
        Self { loaded: total, total }
    }

    /// Whole-number percentage. An empty payload counts as complete.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        let pct = self.loaded.saturating_mul(100) / self.total;
        u8::try_from(pct.min(100)).unwrap_or(100)
    }
}
