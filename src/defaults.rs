//! Fallback defaults and the falsy-aware resolution helpers
//!
//! A declared value only wins when it is truthy. `false`, `0` and `""` count as
//! unset, so an endpoint TTL of `0` falls back to the global TTL.

use descriptor::ClusterSize;

pub const DEFAULT_CACHE_CLUSTER_SIZE: &str = "0.5";
pub const DEFAULT_THROTTLING_BURST_LIMIT: u64 = 5000;
pub const DEFAULT_THROTTLING_RATE_LIMIT: u64 = 10000;
pub const DEFAULT_METRICS_ENABLED: bool = false;
pub const DEFAULT_DATA_ENCRYPTED: bool = false;
pub const DEFAULT_TTL: u64 = 3600;

/// Values with a falsy state
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_int {
    ($($ty:ty),*) => {
        $(impl Truthy for $ty {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

impl_truthy_for_int!(u32, u64, i32, i64);

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for &str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for ClusterSize {
    fn is_truthy(&self) -> bool {
        self.is_set()
    }
}

/// `local` when truthy, else the hardcoded `default`
pub fn or_default<T: Truthy>(local: Option<T>, default: T) -> T {
    local.filter(T::is_truthy).unwrap_or(default)
}

/// `local` when truthy, else `fallback`, which may itself be unset
pub fn or_fallback<T: Truthy>(local: Option<T>, fallback: Option<T>) -> Option<T> {
    local.filter(T::is_truthy).or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_default() {
        assert_eq!(or_default(Some(300u64), DEFAULT_TTL), 300);
        assert_eq!(or_default(None, DEFAULT_TTL), DEFAULT_TTL);
        assert_eq!(or_default(Some(0u64), DEFAULT_TTL), DEFAULT_TTL);

        assert!(or_default(Some(true), DEFAULT_METRICS_ENABLED));
        assert!(!or_default(Some(false), DEFAULT_METRICS_ENABLED));

        assert_eq!(or_default(Some(""), DEFAULT_CACHE_CLUSTER_SIZE), "0.5");
        assert_eq!(or_default(Some("1.6"), DEFAULT_CACHE_CLUSTER_SIZE), "1.6");
    }

    #[test]
    fn test_or_fallback() {
        assert_eq!(or_fallback(Some(60u64), Some(3600)), Some(60));
        assert_eq!(or_fallback(Some(0u64), Some(3600)), Some(3600));
        assert_eq!(or_fallback(None, Some(3600u64)), Some(3600));
        assert_eq!(or_fallback::<u64>(None, None), None);

        // A falsy local value yields the fallback even when that is unset
        assert_eq!(or_fallback(Some(false), None), None);
        assert_eq!(or_fallback(Some(false), Some(false)), Some(false));
        assert_eq!(or_fallback(Some(true), Some(false)), Some(true));

        assert_eq!(
            or_fallback(Some(String::new()), Some("dev".to_string())),
            Some("dev".to_string())
        );
    }
}
