//! Conversions between [`Vector3`] and other three-component representations.
//!
//! `[f64; 3]` matches the layout used by the C ABI, and
//! `nalgebra::Vector3<f64>` lets callers hand vectors to a full
//! linear-algebra stack when they need one.
//!
//! ```
//! use vector3_core::Vector3;
//!
//! let v = Vector3::from([1.0, 2.0, 3.0]);
//! let n: nalgebra::Vector3<f64> = v.into();
//! assert_eq!(n.x, 1.0);
//! assert_eq!(Vector3::from(n), v);
//! ```

use crate::vector3::Vector3;

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(v: Vector3) -> [f64; 3] {
        v.to_array()
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for (f64, f64, f64) {
    #[inline]
    fn from(v: Vector3) -> (f64, f64, f64) {
        (v.x, v.y, v.z)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    #[inline]
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    #[inline]
    fn from(v: Vector3) -> nalgebra::Vector3<f64> {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_conversion_keeps_component_order() {
        let v = Vector3::from([1.0, 2.0, 3.0]);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

        let arr: [f64; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_tuple_conversion() {
        let v: Vector3 = (4.0, -5.0, 6.0).into();
        assert_eq!(v, Vector3::new(4.0, -5.0, 6.0));

        let (x, y, z) = v.into();
        assert_eq!((x, y, z), (4.0, -5.0, 6.0));
    }

    #[test]
    fn test_nalgebra_conversion_preserves_special_values() {
        let v = Vector3::new(f64::INFINITY, -0.0, f64::MIN_POSITIVE);
        let n: nalgebra::Vector3<f64> = v.into();
        assert_eq!(n.x, f64::INFINITY);
        assert!(n.y.is_sign_negative());
        assert_eq!(n.z, f64::MIN_POSITIVE);
        assert_eq!(Vector3::from(n), v);
    }
}
