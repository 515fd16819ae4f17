use crate::domain::model::OutputFormat;
use crate::utils::error::{DebtError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DebtError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DebtError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_optional_path(field_name: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => validate_path(field_name, path),
        None => Ok(()),
    }
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[&str],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        if let Some(extension) = std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            if !allowed_set.contains(extension) {
                return Err(DebtError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.to_string(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
        } else {
            return Err(DebtError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.to_string(),
                reason: "File has no extension or invalid filename".to_string(),
            });
        }
    }

    Ok(())
}

/// A recognised report extension on `path` must agree with `format`.
pub fn validate_output_extension(field_name: &str, path: &str, format: OutputFormat) -> Result<()> {
    let known = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv];
    let extension = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str());

    if let Some(extension) = extension {
        let is_known = known.iter().any(|f| f.extension() == extension);
        if is_known && extension != format.extension() {
            return Err(DebtError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: path.to_string(),
                reason: format!(
                    "Extension .{} does not match output format {}",
                    extension, format
                ),
            });
        }
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DebtError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
