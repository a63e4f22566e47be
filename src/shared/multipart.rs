// src/shared/multipart.rs

use actix_multipart::Multipart;
use futures::TryStreamExt;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum MultipartReadError {
    #[error("Multipart field '{0}' is missing")]
    MissingField(String),

    #[error("Upload exceeds {0} bytes")]
    TooLarge(u64),

    #[error("Malformed multipart body: {0}")]
    Malformed(String),
}

/// Buffers the named file field, aborting once `max_bytes` is exceeded.
/// Other fields are drained and ignored.
pub async fn read_file_field(
    mut payload: Multipart,
    field_name: &str,
    max_bytes: u64,
) -> Result<UploadedFile, MultipartReadError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| MultipartReadError::Malformed(e.to_string()))?
    {
        let (name, file_name) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().map(str::to_string),
                cd.get_filename().map(str::to_string),
            ),
            None => (None, None),
        };

        if name.as_deref() != Some(field_name) {
            while field
                .try_next()
                .await
                .map_err(|e| MultipartReadError::Malformed(e.to_string()))?
                .is_some()
            {}
            continue;
        }

        let content_type = field.content_type().map(|m| m.to_string());
        let mut bytes = Vec::new();

        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| MultipartReadError::Malformed(e.to_string()))?
        {
            if (bytes.len() + chunk.len()) as u64 > max_bytes {
                return Err(MultipartReadError::TooLarge(max_bytes));
            }
            bytes.extend_from_slice(&chunk);
        }

        return Ok(UploadedFile {
            file_name: file_name.unwrap_or_default(),
            content_type,
            bytes,
        });
    }

    Err(MultipartReadError::MissingField(field_name.to_string()))
}
