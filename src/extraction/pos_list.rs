use crate::error::{ExtractionError, Result};
use crate::math::Point3;

/// Parses a whitespace-separated coordinate list into points.
///
/// `dimension` is the number of values per point: 3, or 2 for rings without
/// heights (z becomes `0.0`).
///
/// # Errors
///
/// Returns an error for an unsupported dimension, a token that is not a
/// number, or a value count that is not a multiple of `dimension`.
pub fn parse_pos_list(text: &str, dimension: usize) -> Result<Vec<Point3>> {
    if !(2..=3).contains(&dimension) {
        return Err(ExtractionError::UnsupportedDimension(dimension.to_string()).into());
    }

    let values = text
        .split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| ExtractionError::InvalidNumber {
                token: token.to_string(),
            })
        })
        .collect::<std::result::Result<Vec<f64>, _>>()?;

    if values.len() % dimension != 0 {
        return Err(ExtractionError::DimensionMismatch {
            count: values.len(),
            dimension,
        }
        .into());
    }

    Ok(values
        .chunks_exact(dimension)
        .map(|c| Point3::new(c[0], c[1], c.get(2).copied().unwrap_or(0.0)))
        .collect())
}
