//! DType promotion rules.
//!
//! When two tensors with different dtypes are combined in a binary op, the
//! result dtype is determined by these promotion rules.

use tensr_core::DType;

/// Promote two dtypes to a common result dtype.
///
/// Rules:
/// - Same dtype → same dtype
/// - Float + Float → wider float
/// - Int + Float → the float type
/// - Int + Int → wider int (signed outranks unsigned at equal width)
pub fn promote(a: DType, b: DType) -> DType {
    if a == b {
        return a;
    }
    if priority(a) >= priority(b) { a } else { b }
}

/// Numeric priority for dtype promotion (higher = wider).
pub fn priority(dt: DType) -> u8 {
    match dt {
        DType::U8 => 1,
        DType::I8 => 2,
        DType::U16 => 3,
        DType::I16 => 4,
        DType::I32 => 5,
        DType::F32 => 6,
        DType::F64 => 7,
    }
}

/// Check whether a dtype is a floating-point type.
pub fn is_float(dt: DType) -> bool {
    matches!(dt, DType::F32 | DType::F64)
}

/// Check whether a dtype is an integer type.
pub fn is_integer(dt: DType) -> bool {
    !is_float(dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [DType; 7] = [
        DType::F32,
        DType::F64,
        DType::I8,
        DType::I16,
        DType::I32,
        DType::U8,
        DType::U16,
    ];

    #[test]
    fn test_same_dtype() {
        for &dt in &ALL {
            assert_eq!(promote(dt, dt), dt);
        }
    }

    #[test]
    fn test_float_promotion() {
        assert_eq!(promote(DType::F32, DType::F64), DType::F64);
    }

    #[test]
    fn test_int_float_promotion() {
        assert_eq!(promote(DType::I32, DType::F32), DType::F32);
        assert_eq!(promote(DType::U8, DType::F64), DType::F64);
    }

    #[test]
    fn test_int_promotion() {
        assert_eq!(promote(DType::I8, DType::I32), DType::I32);
        assert_eq!(promote(DType::U8, DType::U16), DType::U16);
        assert_eq!(promote(DType::U16, DType::I16), DType::I16);
    }

    #[test]
    fn test_symmetry() {
        for &a in &ALL {
            for &b in &ALL {
                assert_eq!(
                    promote(a, b),
                    promote(b, a),
                    "promote({a:?}, {b:?}) not symmetric"
                );
            }
        }
    }

    #[test]
    fn test_is_float() {
        assert!(is_float(DType::F32));
        assert!(is_float(DType::F64));
        assert!(!is_float(DType::I32));
        assert!(is_integer(DType::U8));
        assert!(!is_integer(DType::F64));
    }
}
