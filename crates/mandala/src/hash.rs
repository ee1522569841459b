//! Hash-remap of a raw integer into a bounded range.

/// Map `value` into `[min_value, max_value)`.
///
/// `((value & 0xFF) ^ 0xAA) mod (max − min) + min`. Returns `None` when the
/// range is empty (`max_value <= min_value`).
pub fn hash_remap(value: i32, min_value: i32, max_value: i32) -> Option<i32> {
    let span = i64::from(max_value) - i64::from(min_value);
    if span <= 0 {
        return None;
    }
    // Always in [0, 255] after masking, so the remainder is non-negative.
    let mixed = i64::from((value & 0xFF) ^ 0xAA);
    let remapped = mixed % span + i64::from(min_value);
    i32::try_from(remapped).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::{NUM_POINTS_MAX_VALUE as MAX, NUM_POINTS_MIN_VALUE as MIN};

    #[test]
    fn known_value() {
        // (37 & 0xFF) ^ 0xAA = 143; 143 % 40 + 20 = 43
        assert_eq!(hash_remap(37, 20, 60), Some(43));
        // 0 ^ 0xAA = 170; 170 % 40 + 20 = 30
        assert_eq!(hash_remap(0, 20, 60), Some(30));
    }

    #[test]
    fn only_low_byte_matters() {
        assert_eq!(hash_remap(37, MIN, MAX), hash_remap(37 + 256, MIN, MAX));
        assert_eq!(hash_remap(-1, MIN, MAX), hash_remap(255, MIN, MAX));
    }

    #[test]
    fn results_stay_in_range() {
        for v in -300..300 {
            let h = hash_remap(v, MIN, MAX).unwrap();
            assert!((MIN..MAX).contains(&h), "value {v} -> {h}");
        }
    }

    #[test]
    fn empty_range_is_none() {
        assert_eq!(hash_remap(10, 20, 20), None);
        assert_eq!(hash_remap(10, 60, 20), None);
    }

    #[test]
    fn wide_range_does_not_overflow() {
        // span exceeds i32::MAX; result is min + mixed
        let h = hash_remap(0, i32::MIN, i32::MAX).unwrap();
        assert_eq!(h, i32::MIN + 0xAA);
    }
}
