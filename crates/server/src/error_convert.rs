use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Carry an `AppError` across the server-function boundary as JSON so the
/// page can recover it with `AppError::from_server_error`.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        let status = self.status_code();
        if status >= 500 {
            tracing::error!(status, error = %self, "server function failed");
        } else {
            tracing::debug!(status, error = %self, "server function rejected request");
        }
        let json = serde_json::to_string(&self).unwrap_or_else(|_| self.message.clone());
        ServerFnError::new(json)
    }
}

/// Validate a request DTO, reporting failures as field errors.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AppErrorKind, SignUpRequest, UserRole};

    #[test]
    fn server_fn_error_carries_app_error() {
        let err = AppError::conflict("Email already registered").into_server_fn_error();
        let recovered = AppError::from_server_error(&err.to_string()).unwrap();
        assert_eq!(recovered.kind, AppErrorKind::Conflict);
    }

    #[test]
    fn validation_reports_each_bad_field() {
        let req = SignUpRequest {
            email: "not-an-email".into(),
            password: "123".into(),
            display_name: String::new(),
            role: UserRole::Employee,
        };
        let err = req.validate_request().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("email"));
        assert!(err.field_errors.contains_key("password"));
        assert!(err.field_errors.contains_key("display_name"));
    }
}
