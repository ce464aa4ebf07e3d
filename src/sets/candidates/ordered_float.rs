use std::{cmp::Ordering, hash::Hash, hash::Hasher, ops::Add};

/// A wrapper around f64 that provides total ordering and proper equality semantics.
///
/// Standard f64 does not implement `Ord` or `Eq` due to NaN values and signed zeros.
/// This wrapper uses bit-level comparison so any two values compare under
/// [`f64::total_cmp`], which lets path costs be used as heap keys and map keys.
#[derive(Debug, Copy, Clone)]
#[repr(transparent)]
pub struct TotalF64(pub f64);

impl TotalF64 {
    pub const ZERO: TotalF64 = TotalF64(0.0);
    pub const INFINITY: TotalF64 = TotalF64(f64::INFINITY);

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl PartialEq for TotalF64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for TotalF64 {}

impl PartialOrd for TotalF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TotalF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for TotalF64 {
    fn from(x: f64) -> Self {
        TotalF64(x)
    }
}

impl From<TotalF64> for f64 {
    fn from(x: TotalF64) -> Self {
        x.0
    }
}

impl Add<f64> for TotalF64 {
    type Output = TotalF64;

    fn add(self, rhs: f64) -> TotalF64 {
        TotalF64(self.0 + rhs)
    }
}

impl Hash for TotalF64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    #[test]
    fn test_equality() {
        let a = TotalF64(1.0);
        let b = TotalF64(1.0);
        let c = TotalF64(2.0);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_nan_equality() {
        assert_eq!(TotalF64(f64::NAN), TotalF64(f64::NAN));
    }

    #[test]
    fn test_negative_zero_equality() {
        assert_ne!(TotalF64(0.0), TotalF64(-0.0));
    }

    #[test]
    fn test_ordering_with_infinity() {
        let finite = TotalF64(1e12);
        assert!(finite < TotalF64::INFINITY);
        assert!(TotalF64::ZERO < finite);
        assert!(TotalF64(f64::NAN) > TotalF64::INFINITY);
    }

    #[test]
    fn test_add_accumulates_cost() {
        let cost = TotalF64::ZERO + 2.5 + 4.0;
        assert_eq!(cost, TotalF64(6.5));
        assert_eq!(f64::from(cost), 6.5);
    }

    #[test]
    fn test_hash_consistency() {
        let mut hasher_a = DefaultHasher::new();
        let mut hasher_b = DefaultHasher::new();

        TotalF64(1.0).hash(&mut hasher_a);
        TotalF64(1.0).hash(&mut hasher_b);

        assert_eq!(hasher_a.finish(), hasher_b.finish());
    }

    #[test]
    fn test_sort() {
        let mut values = [
            TotalF64(3.0),
            TotalF64(1.0),
            TotalF64(f64::INFINITY),
            TotalF64(0.0),
            TotalF64(2.0),
        ];

        values.sort();

        assert_eq!(
            values.iter().map(|v| v.0).collect::<Vec<_>>(),
            vec![0.0, 1.0, 2.0, 3.0, f64::INFINITY]
        );
    }

    #[test]
    fn test_is_finite() {
        assert!(TotalF64(3.0).is_finite());
        assert!(!TotalF64::INFINITY.is_finite());
    }
}
