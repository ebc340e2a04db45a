//! Reading user-picked files into memory.
//!
//! SYSTEM CONTEXT
//! ==============
//! File metadata (type, size) is checked before any bytes are read, so a
//! rejected file costs nothing. The resulting `ManualFile` is what upload
//! endpoints take.

use thiserror::Error;

use crate::net::upload::UploadRejection;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FileError {
    #[error(transparent)]
    Rejected(#[from] UploadRejection),
    #[error("Could not read the selected file.")]
    Read(String),
}

#[cfg(feature = "hydrate")]
pub use browser::{first_file, read_manual};

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_file::futures::read_as_bytes;

    use super::FileError;
    use crate::net::upload::{ManualFile, check_manual};

    /// First file of an `<input type=file>` or drop payload.
    pub fn first_file(list: Option<web_sys::FileList>) -> Option<web_sys::File> {
        list?.get(0)
    }

    /// Validate `file` and read it as a manual.
    ///
    /// # Errors
    ///
    /// `Rejected` before reading when the metadata fails the PDF checks;
    /// `Read` when the browser cannot read the contents.
    pub async fn read_manual(file: gloo_file::File) -> Result<ManualFile, FileError> {
        let mime_type = file.raw_mime_type();
        check_manual(&mime_type, file.size())?;
        let bytes = read_as_bytes(&file)
            .await
            .map_err(|e| FileError::Read(e.to_string()))?;
        Ok(ManualFile::new(file.name(), mime_type, bytes))
    }
}
