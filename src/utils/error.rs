use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestoError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RestoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RestoError::ApiError(_) | RestoError::HttpStatus { .. } => ErrorCategory::Network,
            RestoError::SerializationError(_) => ErrorCategory::Data,
            RestoError::ConfigError { .. }
            | RestoError::ConfigValidationError { .. }
            | RestoError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RestoError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // the backend may simply not be up yet; the user can refresh
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RestoError::ApiError(e) if e.is_timeout() => {
                "Permintaan ke backend API melebihi batas waktu".to_string()
            }
            RestoError::ApiError(_) => "Tidak dapat terhubung ke backend API".to_string(),
            RestoError::HttpStatus { status, .. } => {
                format!("Backend API mengembalikan status {}", status)
            }
            RestoError::SerializationError(_) => {
                "Respons backend API tidak dapat dibaca".to_string()
            }
            RestoError::ConfigError { message } => format!("Konfigurasi tidak valid: {}", message),
            RestoError::ConfigValidationError { field, message } => {
                format!("Konfigurasi '{}' tidak valid: {}", field, message)
            }
            RestoError::InvalidConfigValueError { field, value, reason } => {
                format!("Nilai '{}' untuk '{}' tidak valid: {}", value, field, reason)
            }
            RestoError::IoError(e) => format!("Kesalahan sistem berkas: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Pastikan backend API berjalan dan alamat --api-base-url benar".to_string()
            }
            ErrorCategory::Data => {
                "Periksa apakah versi backend API sesuai dengan klien ini".to_string()
            }
            ErrorCategory::Configuration => {
                "Periksa argumen command line dan berkas konfigurasi TOML".to_string()
            }
            ErrorCategory::System => "Periksa izin akses berkas dan coba lagi".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RestoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_is_network_medium() {
        let err = RestoError::HttpStatus {
            status: 500,
            url: "http://localhost:8001/menu/".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("500"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = RestoError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = RestoError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
