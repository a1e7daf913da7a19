//! Integer helpers with floor semantics.
//!
//! Rust's `/` and `%` truncate toward zero; the calendar formulas assume
//! rounding toward negative infinity, so every division that can see a
//! negative operand goes through here.

/// Largest `q` such that `q * b <= a`.
///
/// # Panics
/// Panics if `b == 0`.
#[inline]
pub const fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) { q - 1 } else { q }
}

/// `a - b * floor_div(a, b)`; the result has the sign of `b`.
///
/// # Panics
/// Panics if `b == 0`.
#[inline]
pub const fn floor_mod(a: i64, b: i64) -> i64 {
    a - b * floor_div(a, b)
}

/// Smallest `q` such that `q * b >= a`.
///
/// # Panics
/// Panics if `b == 0`.
#[inline]
pub const fn ceil_div(a: i64, b: i64) -> i64 {
    -floor_div(-a, b)
}

/// Narrows converter output to the public `(year, month, day)` shape.
///
/// Months and days are always small; the year fits in `i32` for every SDN
/// in `MIN_SDN..=MAX_SDN`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn ymd(year: i64, month: i64, day: i64) -> (i32, u8, u8) {
    debug_assert!(month >= 1 && month <= 13 && day >= 1 && day <= 31);
    (year as i32, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_div_cases() {
        struct TestCase {
            a: i64,
            b: i64,
            expected: i64,
        }

        let cases = [
            TestCase { a: 7, b: 2, expected: 3 },
            TestCase { a: -7, b: 2, expected: -4 },
            TestCase { a: 7, b: -2, expected: -4 },
            TestCase { a: -7, b: -2, expected: 3 },
            TestCase { a: -8, b: 2, expected: -4 },
            TestCase { a: 0, b: 5, expected: 0 },
            TestCase { a: -1, b: 1461, expected: -1 },
        ];

        for case in &cases {
            assert_eq!(
                floor_div(case.a, case.b),
                case.expected,
                "floor_div({}, {})",
                case.a,
                case.b
            );
        }
    }

    #[test]
    fn test_floor_div_is_largest_quotient() {
        for a in -50..=50 {
            for b in [-7, -3, -1, 1, 2, 5, 19] {
                let q = floor_div(a, b);
                if b > 0 {
                    assert!(q * b <= a && (q + 1) * b > a, "a={a} b={b} q={q}");
                } else {
                    assert!(q * b >= a && (q + 1) * b < a, "a={a} b={b} q={q}");
                }
            }
        }
    }

    #[test]
    fn test_floor_mod_sign_follows_divisor() {
        assert_eq!(floor_mod(-1, 7), 6);
        assert_eq!(floor_mod(13, 7), 6);
        assert_eq!(floor_mod(1, -7), -6);
        assert_eq!(floor_mod(-14, 7), 0);
        for a in -40..=40 {
            let r = floor_mod(a, 19);
            assert!((0..19).contains(&r));
            assert_eq!(floor_div(a, 19) * 19 + r, a);
        }
    }

    #[test]
    fn test_ceil_div() {
        assert_eq!(ceil_div(7, 2), 4);
        assert_eq!(ceil_div(6, 2), 3);
        assert_eq!(ceil_div(-7, 2), -3);
        assert_eq!(ceil_div(0, 31), 0);
        assert_eq!(ceil_div(186, 31), 6);
    }

    #[test]
    #[should_panic]
    fn test_floor_div_by_zero_panics() {
        let zero = std::hint::black_box(0);
        let _ = floor_div(1, zero);
    }
}
