//! Multipart image extractor.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
};

use crate::errors::AppError;

/// Form field carrying the image
const FILE_FIELD: &str = "file";

/// Image taken from the `file` field of a multipart form.
#[derive(Debug)]
pub struct ImageUpload {
    /// Original file name, falling back to the field name
    pub name: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
impl<S> FromRequest<S> for ImageUpload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?
        {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let name = field
                .file_name()
                .map(str::to_string)
                .unwrap_or_else(|| FILE_FIELD.to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::bad_request(e.body_text()))?;

            return Ok(ImageUpload {
                name,
                bytes: bytes.to_vec(),
            });
        }

        Err(AppError::bad_request("Missing multipart field 'file'"))
    }
}
