use crate::utils::error::{Result, UtilError};

/// Arithmetic mean over every element of `values`.
pub fn average(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(UtilError::DivisionByZero);
    }

    let total: f64 = values.iter().sum();
    Ok(total / values.len() as f64)
}
