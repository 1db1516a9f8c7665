use thiserror::Error;

#[derive(Debug, Error)]
pub enum BezError {
    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BezError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = BezError::Geometry("ray direction has zero length".into());
        assert_eq!(err.to_string(), "Geometry error: ray direction has zero length");

        let err = BezError::InvalidInput("expected 4 control points, got 3".into());
        assert_eq!(err.to_string(), "Invalid input: expected 4 control points, got 3");
    }

    #[test]
    fn test_config_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: BezError = json_err.into();
        assert!(matches!(err, BezError::Config(_)));
        assert!(err.to_string().starts_with("Config error:"));
    }
}
