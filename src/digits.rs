//! Positional base conversion between u64 values and digit buffers.
//!
//! Buffers are most-significant digit first, one byte per position, always
//! at least one digit long. Digit counts are computed with integer division
//! rather than logarithms so power-of-base boundaries are exact.

/// Number of base-N digits needed for `value`, padded up to `min_length`.
pub fn digit_count(value: u64, min_length: usize, base: usize) -> usize {
    let base = base as u64;
    let mut digits = 0;
    let mut v = value;
    loop {
        digits += 1;
        v /= base;
        if v == 0 {
            break;
        }
    }
    digits.max(min_length)
}

/// Converts `value` into a buffer of exactly `length` digits. Positions the
/// value does not reach stay zero, which is the implicit leading-zero pad.
pub fn to_digits(value: u64, length: usize, base: usize) -> Vec<u8> {
    let base = base as u64;
    let mut buf = vec![0u8; length];
    let mut v = value;
    let mut i = length;
    loop {
        i -= 1;
        buf[i] = (v % base) as u8;
        v /= base;
        if v == 0 {
            break;
        }
    }
    buf
}

/// Horner evaluation of a digit buffer back to a value.
///
/// Deliberately unchecked: a buffer longer than 64 bits' worth of digits
/// wraps silently, matching the decode contract that mismatched keys or
/// lengths yield a wrong value rather than an error.
pub fn to_value(buf: &[u8], base: usize) -> u64 {
    let base = base as u64;
    buf.iter().fold(0u64, |value, &digit| {
        value.wrapping_mul(base).wrapping_add(digit as u64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_of_zero_is_min_length() {
        assert_eq!(digit_count(0, 1, 10), 1);
        assert_eq!(digit_count(0, 5, 10), 5);
    }

    #[test]
    fn digit_count_exact_at_power_boundaries() {
        for base in [2usize, 4, 10, 58, 256] {
            let mut power = 1u64;
            for k in 1..=10 {
                let Some(next) = power.checked_mul(base as u64) else {
                    break;
                };
                power = next;
                // base^k - 1 needs k digits, base^k needs k + 1
                assert_eq!(digit_count(power - 1, 1, base), k, "base {} k {}", base, k);
                assert_eq!(digit_count(power, 1, base), k + 1, "base {} k {}", base, k);
            }
        }
    }

    #[test]
    fn digit_count_of_max_value() {
        assert_eq!(digit_count(u64::MAX, 1, 2), 64);
        assert_eq!(digit_count(u64::MAX, 1, 256), 8);
    }

    #[test]
    fn to_digits_pads_leading_zeros() {
        assert_eq!(to_digits(5, 4, 10), vec![0, 0, 0, 5]);
        assert_eq!(to_digits(0, 3, 10), vec![0, 0, 0]);
    }

    #[test]
    fn to_digits_most_significant_first() {
        assert_eq!(to_digits(1234, 4, 10), vec![1, 2, 3, 4]);
        assert_eq!(to_digits(255, 2, 16), vec![15, 15]);
    }

    #[test]
    fn to_value_inverts_to_digits() {
        for value in [0u64, 1, 9, 10, 57, 58, 12345, u64::MAX] {
            for base in [2usize, 58, 256] {
                let len = digit_count(value, 3, base);
                let buf = to_digits(value, len, base);
                assert_eq!(to_value(&buf, base), value, "value {} base {}", value, base);
            }
        }
    }

    #[test]
    fn to_value_wraps_instead_of_panicking() {
        // 65 binary digits of all ones overflows u64; must wrap, not panic
        let buf = vec![1u8; 65];
        let _ = to_value(&buf, 2);
    }
}
