use thiserror::Error;

// Unified error type for sysvec

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VecError {
    #[error("index {index} out of range for vector of size {size}")]
    OutOfRange { index: usize, size: usize },
    #[error("size mismatch: expected {expected} elements, found {found}")]
    SizeMismatch { expected: usize, found: usize },
    #[error("required output buffer was not provided")]
    NullTarget,
}

impl VecError {
    /// Returns `Ok(())` when `found == expected`, otherwise a logged `SizeMismatch`.
    pub(crate) fn check_size(context: &str, expected: usize, found: usize) -> Result<(), VecError> {
        if expected == found {
            Ok(())
        } else {
            log::debug!("{context}: expected {expected} elements, found {found}");
            Err(VecError::SizeMismatch { expected, found })
        }
    }

    pub(crate) fn check_index(index: usize, size: usize) -> Result<(), VecError> {
        if index < size {
            Ok(())
        } else {
            Err(VecError::OutOfRange { index, size })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_sizes() {
        let e = VecError::SizeMismatch { expected: 3, found: 2 };
        assert_eq!(e.to_string(), "size mismatch: expected 3 elements, found 2");
        let e = VecError::OutOfRange { index: 7, size: 4 };
        assert_eq!(e.to_string(), "index 7 out of range for vector of size 4");
    }

    #[test]
    fn checks_pass_only_on_valid_input() {
        assert!(VecError::check_size("test", 2, 2).is_ok());
        assert_eq!(
            VecError::check_size("test", 2, 5),
            Err(VecError::SizeMismatch { expected: 2, found: 5 })
        );
        assert!(VecError::check_index(0, 1).is_ok());
        assert_eq!(VecError::check_index(1, 1), Err(VecError::OutOfRange { index: 1, size: 1 }));
    }
}
