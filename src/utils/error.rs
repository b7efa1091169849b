use std::error::Error;
use std::fmt;

/// Raised when a price falls outside the domain of the natural logarithm
/// (zero, negative, NaN or infinite).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainError(pub f64);

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Domain error: price must be positive and finite, got {}",
            self.0
        )
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_price() {
        let err = DomainError(-5.0);
        assert_eq!(
            err.to_string(),
            "Domain error: price must be positive and finite, got -5"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let err: anyhow::Error = DomainError(0.0).into();
        assert!(err.to_string().contains("got 0"));
    }
}
