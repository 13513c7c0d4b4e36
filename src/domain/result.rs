//! Result type alias for medrec

use super::errors::RecordError;

/// Result type alias for medrec operations
///
/// # Examples
///
/// ```
/// use medrec::domain::result::Result;
/// use medrec::domain::errors::RecordError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(RecordError::InvalidState("name missing".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, RecordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<u64> {
            Ok(1000)
        }

        let value = inner()?;
        assert_eq!(value, 1000);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<u64> = Err(RecordError::UnknownDepartment("x".to_string()));
        assert!(result.is_err());
    }
}
