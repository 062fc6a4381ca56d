use std::fmt;

/// Central error types for the wedding site
#[derive(Debug)]
pub enum AppError {
    /// Embedded site configuration failed to parse
    Config(String),
    /// Browser storage read/write error
    Storage(String),
    /// Validation error (e.g. invalid form inputs)
    Validation(String),
    /// General error
    #[allow(dead_code)]
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// User-friendly error messages for the UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(_) => {
                "The site could not be loaded. Please try again later.".to_string()
            }
            AppError::Storage(_) => {
                "Your browser blocked saving data. Your entry is kept for this visit only."
                    .to_string()
            }
            AppError::Validation(msg) => msg.clone(),
            AppError::Other(msg) => msg.clone(),
        }
    }
}
