// Zero checksum over a byte range, as carried by FRU/SDR record headers

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChecksumError {
    #[error("invalid start value ({start}): expected in [0..={}]", .len.saturating_sub(1))]
    StartOutOfRange { start: usize, len: usize },

    #[error("invalid count value ({count}): expected in [0..={max}]")]
    CountOutOfRange { count: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, ChecksumError>;

/// Compute the two's-complement zero checksum of `data[start..start + count]`.
/// Adding the returned byte to the 8-bit sum of the range gives 0 mod 256.
/// A zero-length range yields 0.
pub fn zero_checksum(data: &[u8], start: usize, count: usize) -> Result<u8> {
    if start >= data.len() {
        return Err(ChecksumError::StartOutOfRange {
            start,
            len: data.len(),
        });
    }

    let max = data.len() - start;
    if count > max {
        return Err(ChecksumError::CountOutOfRange { count, max });
    }

    let sum = data[start..start + count]
        .iter()
        .fold(0u8, |acc, &b| acc.wrapping_add(b));

    Ok(sum.wrapping_neg())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sum() {
        let data = [
            0xFF, 0xFF, 0x03, 0xFF, 0x03, 0x03, 0x04, 0x05, 0xFF, 0x07, 0x07, 0x08, 0x09, 0xFF,
            0x0B,
        ];
        // raw sum is 55 mod 256, so the checksum is 256 - 55
        assert_eq!(zero_checksum(&data, 0, data.len()).unwrap(), 201);
    }

    #[test]
    fn test_sum_plus_checksum_is_zero() {
        let data: Vec<u8> = (0u8..=255).collect();
        for (start, count) in [(0, 256), (10, 100), (255, 1), (37, 0)] {
            let ck = zero_checksum(&data, start, count).unwrap();
            let total = data[start..start + count]
                .iter()
                .fold(ck, |acc, &b| acc.wrapping_add(b));
            assert_eq!(total, 0, "range {start}+{count}");
        }
    }

    #[test]
    fn test_zero_count() {
        assert_eq!(zero_checksum(&[1, 2, 3], 1, 0).unwrap(), 0);
    }

    #[test]
    fn test_start_out_of_range() {
        let err = zero_checksum(&[1, 2, 3], 3, 0).unwrap_err();
        match err {
            ChecksumError::StartOutOfRange { start, len } => {
                assert_eq!(start, 3);
                assert_eq!(len, 3);
            }
            other => panic!("unexpected error: {other}"),
        }

        // an empty buffer has no valid start at all
        assert!(zero_checksum(&[], 0, 0).is_err());
    }

    #[test]
    fn test_count_out_of_range() {
        let err = zero_checksum(&[1, 2, 3], 1, 3).unwrap_err();
        match err {
            ChecksumError::CountOutOfRange { count, max } => {
                assert_eq!(count, 3);
                assert_eq!(max, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
