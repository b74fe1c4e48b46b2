//! Status messages for operation feedback.

use std::fmt;

/// Single-line success or failure message.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let ok = OperationStatus::success("Imported 5 lists");
        assert_eq!(ok.to_string(), "Success: Imported 5 lists\n");

        let failed = OperationStatus::failure("Import incomplete");
        assert!(failed.to_string().starts_with("Error:"));
    }
}
