use crate::utils::error::{Result, UtilError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(UtilError::InvalidPathError {
            path: path.to_string(),
            reason: format!("{} cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(UtilError::InvalidPathError {
            path: path.to_string(),
            reason: format!("{} contains null bytes", field_name),
        });
    }

    Ok(())
}
