//! Drop-zone and upload status for the home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the drop zone and the whole-window drag overlay feed a file into
//! [`gate_upload`]. Only `UploadGate::Proceed` leads to reading bytes and
//! calling the backend.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::upload::{UploadRejection, check_manual};

pub const LOGIN_REQUIRED_MESSAGE: &str = "Login is required to upload files.";
pub const UPLOAD_FAILED: &str = "Upload failed. Please try again.";

/// What to do with a file the user dropped or picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadGate {
    Proceed,
    Rejected(UploadRejection),
    /// Valid PDF, but nobody is logged in.
    LoginRequired,
}

/// Local checks first, then the login requirement.
pub fn gate_upload(mime_type: &str, size: u64, authenticated: bool) -> UploadGate {
    if let Err(rejection) = check_manual(mime_type, size) {
        return UploadGate::Rejected(rejection);
    }
    if !authenticated {
        return UploadGate::LoginRequired;
    }
    UploadGate::Proceed
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub dragging: bool,
    pub loading: bool,
    pub progress: Option<u8>,
    pub error: Option<String>,
}

impl UploadState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.progress = Some(0);
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.progress = None;
        self.error = Some(message.into());
    }

    pub fn finish(&mut self) {
        self.loading = false;
        self.progress = Some(100);
    }
}

/// A window `dragleave` only ends the overlay when the pointer left the
/// viewport; leaving a child element fires the same event.
pub fn should_end_drag(client_x: i32, client_y: i32, width: f64, height: f64) -> bool {
    let (x, y) = (f64::from(client_x), f64::from(client_y));
    x <= 0.0 || y <= 0.0 || x >= width || y >= height
}
