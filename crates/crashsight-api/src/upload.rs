//! Upload intake
//!
//! Extracts the image field from the multipart body and validates it
//! against the MIME allow-list and the size ceiling before anything is
//! written to disk or sent upstream.

use axum::extract::Multipart;
use crashsight_core::AppError;

/// Form field name carrying the accident photo.
pub const IMAGE_FIELD: &str = "image";

/// Extract the image file from a multipart request.
/// Returns (file bytes, original filename, declared content type).
pub async fn extract_image_field(
    mut multipart: Multipart,
) -> Result<(Vec<u8>, String, String), AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == IMAGE_FIELD {
            if file_data.is_some() {
                return Err(AppError::InvalidInput(format!(
                    "Multiple image fields are not allowed; send exactly one field named '{}'",
                    IMAGE_FIELD
                )));
            }
            filename = field.file_name().map(|s: &str| s.to_string());
            content_type = field.content_type().map(|s: &str| s.to_string());

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

            file_data = Some(data.to_vec());
        }
    }

    let file_data = file_data
        .filter(|data| !data.is_empty())
        .ok_or_else(|| AppError::InvalidInput("Please upload an image file".to_string()))?;

    let original_filename = filename.unwrap_or_else(|| "unknown".to_string());
    let content_type = content_type.unwrap_or_else(|| "application/octet-stream".to_string());

    Ok((file_data, original_filename, content_type))
}

/// Normalize MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Validate the declared content type against the allow-list.
pub fn validate_content_type(content_type: &str, allowed_types: &[String]) -> Result<(), AppError> {
    let normalized = normalize_mime_type(content_type).to_lowercase();
    if !allowed_types.iter().any(|ct| normalized == ct.to_lowercase()) {
        return Err(AppError::InvalidInput(
            "Only image files (jpeg, jpg, png) are allowed".to_string(),
        ));
    }
    Ok(())
}

/// Validate file size against the ceiling.
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec![
            "image/jpeg".to_string(),
            "image/jpg".to_string(),
            "image/png".to_string(),
        ]
    }

    #[test]
    fn test_allowed_image_types_pass() {
        assert!(validate_content_type("image/jpeg", &allowed()).is_ok());
        assert!(validate_content_type("image/png", &allowed()).is_ok());
        assert!(validate_content_type("IMAGE/JPEG", &allowed()).is_ok());
    }

    #[test]
    fn test_mime_parameters_do_not_bypass_the_allow_list() {
        assert!(validate_content_type("image/jpeg; charset=utf-8", &allowed()).is_ok());
        assert!(validate_content_type("text/html; image/jpeg", &allowed()).is_err());
    }

    #[test]
    fn test_non_image_types_are_rejected() {
        for ct in ["image/gif", "image/webp", "application/pdf", "text/plain"] {
            let err = validate_content_type(ct, &allowed()).unwrap_err();
            assert!(err.to_string().contains("Only image files"));
        }
    }

    #[test]
    fn test_size_ceiling_is_inclusive() {
        let max = 10 * 1024 * 1024;
        assert!(validate_file_size(max, max).is_ok());
        assert!(validate_file_size(max + 1, max).is_err());
    }
}
