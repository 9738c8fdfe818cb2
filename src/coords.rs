//! Coordinate transform over the varint codec.
//!
//! Coordinates are scaled by 1e5 and delta-encoded against the value
//! `dim` positions earlier (the same axis of the previous point), then
//! run through the signed varint codec. Precision is fixed at five
//! decimal places.

use crate::error::CodecError;
use crate::varint;

const SCALE: f64 = 1e5;

/// Encodes a flat coordinate sequence of dimension `dim` as a string.
///
/// The sequence is laid out as interleaved tuples, e.g.
/// `[lat1, lng1, lat2, lng2, ...]` for `dim = 2`. Scaling truncates
/// toward zero rather than rounding, so the encoded value is the
/// 1e-5-quantized coordinate nearest to zero.
///
/// `dim` must be at least 1. Sequences need not be a multiple of `dim`
/// long; the delta is purely positional.
pub fn encode(xs: &[f64], dim: usize) -> String {
    debug_assert!(dim >= 1, "dimension must be at least 1");
    let mut ys: Vec<i64> = xs.iter().map(|&x| (SCALE * x) as i64).collect();
    // Right-to-left so earlier subtractions don't corrupt later ones.
    for i in (dim..ys.len()).rev() {
        ys[i] -= ys[i - dim];
    }
    varint::encode_ints(&ys)
}

/// Decodes a string into a flat coordinate sequence of dimension `dim`.
///
/// Inverse of [`encode`]: each decoded integer is scaled back and, from
/// index `dim` onward, accumulated onto the already-reconstructed value
/// `dim` positions earlier.
///
/// `dim` must be at least 1.
pub fn decode(s: &str, dim: usize) -> Result<Vec<f64>, CodecError> {
    debug_assert!(dim >= 1, "dimension must be at least 1");
    let xs = varint::decode_ints(s)?;
    let mut ys: Vec<f64> = Vec::with_capacity(xs.len());
    for (j, &x) in xs.iter().enumerate() {
        let mut y = x as f64 / SCALE;
        if j >= dim {
            y += ys[j - dim];
        }
        ys.push(y);
    }
    Ok(ys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_vectors() {
        assert_eq!(encode(&[38.5, -120.2], 2), "_p~iF~ps|U");
        assert_eq!(
            encode(&[38.5, -120.2, 40.7, -120.95, 43.252, -126.453], 2),
            "_p~iF~ps|U_ulLnnqC_mqNvxq`@"
        );
    }

    #[test]
    fn test_decode_vectors() {
        assert_eq!(decode("_p~iF~ps|U", 2).unwrap(), vec![38.5, -120.2]);
        assert_eq!(
            decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@", 2).unwrap(),
            vec![38.5, -120.2, 40.7, -120.95, 43.252, -126.453]
        );
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(encode(&[], 2), "");
        assert_eq!(decode("", 2).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_shorter_than_dim_skips_delta() {
        // A single value at dim = 2 has no position with j >= dim.
        let s = encode(&[38.5], 2);
        assert_eq!(s, "_p~iF");
        assert_eq!(decode(&s, 2).unwrap(), vec![38.5]);
    }

    #[test]
    fn test_length_not_multiple_of_dim() {
        // The transform is positional, so a dangling value still
        // deltas against the value dim positions earlier.
        let xs = [38.5, -120.2, 40.7];
        let s = encode(&xs, 2);
        let ys = decode(&s, 2).unwrap();
        assert_eq!(ys.len(), 3);
        for (x, y) in xs.iter().zip(&ys) {
            assert!((x - y).abs() < 1e-9, "{} vs {}", x, y);
        }
    }

    #[test]
    fn test_dim_one() {
        let xs = [1.0, 1.00001, 1.00003, 0.99999];
        let s = encode(&xs, 1);
        let ys = decode(&s, 1).unwrap();
        for (x, y) in xs.iter().zip(&ys) {
            assert!((x - y).abs() < 1e-9, "{} vs {}", x, y);
        }
    }

    #[test]
    fn test_scale_truncates_toward_zero() {
        // 0.000005 * 1e5 = 0.5 truncates to 0, not 1; likewise -0.5
        // truncates to 0, not -1.
        assert_eq!(encode(&[0.000005], 1), encode(&[0.0], 1));
        assert_eq!(encode(&[-0.000005], 1), encode(&[0.0], 1));
        assert_eq!(decode(&encode(&[0.000005], 1), 1).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_quantized_values_round_trip_exactly() {
        let xs = [38.5, -120.2, 40.7, -120.95];
        assert_eq!(decode(&encode(&xs, 2), 2).unwrap(), xs);
    }
}
