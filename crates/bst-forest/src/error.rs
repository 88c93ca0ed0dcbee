use thiserror::Error;

/// Rejected construction input.
///
/// A lookup miss is never an error; these only describe weights that cannot
/// produce a well-formed tree.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForestError {
    #[error("weight at index {index} is not finite: {weight}")]
    NonFiniteWeight { index: usize, weight: f64 },
    #[error("weight at index {index} is negative: {weight}")]
    NegativeWeight { index: usize, weight: f64 },
    #[error("{len} keys exceed the u32 arena index space")]
    TooManyKeys { len: usize },
}

/// Fails if the key universe `0..len` cannot be addressed by `u32` indices.
pub(crate) fn check_len(len: usize) -> Result<u32, ForestError> {
    u32::try_from(len).map_err(|_| ForestError::TooManyKeys { len })
}

/// Fails on the first NaN, infinite or negative weight.
pub(crate) fn check_weights(weights: &[f64]) -> Result<u32, ForestError> {
    let len = check_len(weights.len())?;
    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() {
            return Err(ForestError::NonFiniteWeight { index, weight });
        }
        if weight < 0.0 {
            return Err(ForestError::NegativeWeight { index, weight });
        }
    }
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive_weights() {
        assert_eq!(check_weights(&[]), Ok(0));
        assert_eq!(check_weights(&[0.0, 0.5, 100.0]), Ok(3));
    }

    #[test]
    fn reports_first_bad_weight() {
        assert_eq!(
            check_weights(&[0.1, -0.2, f64::NAN]),
            Err(ForestError::NegativeWeight {
                index: 1,
                weight: -0.2
            })
        );
        assert_eq!(
            check_weights(&[0.1, f64::INFINITY]),
            Err(ForestError::NonFiniteWeight {
                index: 1,
                weight: f64::INFINITY
            })
        );
    }

    #[test]
    fn error_messages_name_the_index() {
        let err = ForestError::NegativeWeight {
            index: 3,
            weight: -1.0,
        };
        assert_eq!(err.to_string(), "weight at index 3 is negative: -1");
    }
}
