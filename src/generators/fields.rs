use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;

const ADDRESS_BYTES: usize = 20;
const HASH_BYTES: usize = 32;

/// How far back a generated timestamp may fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    LastHour,
    LastDay,
    LastWeek,
}

impl Window {
    pub fn span(self) -> Duration {
        match self {
            Window::LastHour => Duration::hours(1),
            Window::LastDay => Duration::hours(24),
            Window::LastWeek => Duration::days(7),
        }
    }
}

/// `0x`-prefixed lowercase hex of `bytes` random bytes.
pub fn hex_string<R: Rng>(rng: &mut R, bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    rng.fill_bytes(&mut buf);
    format!("0x{}", hex::encode(buf))
}

/// 40 hex chars.
pub fn address<R: Rng>(rng: &mut R) -> String {
    hex_string(rng, ADDRESS_BYTES)
}

/// 64 hex chars.
pub fn tx_hash<R: Rng>(rng: &mut R) -> String {
    hex_string(rng, HASH_BYTES)
}

/// Uniform decimal in `[min_units, max_units)` expressed in units of `10^-scale`.
///
/// `decimal(rng, 0, 10_000_000, 6)` yields values in `[0, 10)` with six places.
pub fn decimal<R: Rng>(rng: &mut R, min_units: i64, max_units: i64, scale: u32) -> Decimal {
    Decimal::new(rng.gen_range(min_units..max_units), scale)
}

/// Uniform integer in `[min, max)` rendered as a string.
pub fn int_string<R: Rng>(rng: &mut R, min: u64, max: u64) -> String {
    rng.gen_range(min..max).to_string()
}

/// `now` minus a uniform offset within `window`, at millisecond precision.
pub fn recent_timestamp<R: Rng>(rng: &mut R, now: DateTime<Utc>, window: Window) -> DateTime<Utc> {
    let offset_ms = rng.gen_range(0..window.span().num_milliseconds());
    now - Duration::milliseconds(offset_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_address_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let addr = address(&mut rng);
        assert!(addr.starts_with("0x"));
        assert_eq!(addr.len(), 42);
        assert!(addr[2..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hash_length() {
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(tx_hash(&mut rng).len(), 66);
    }

    #[test]
    fn test_decimal_keeps_scale_and_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let d = decimal(&mut rng, 50_000_000, 150_000_000, 4);
            assert_eq!(d.scale(), 4);
            assert!(d >= Decimal::from(5000) && d < Decimal::from(15000));
        }
    }

    #[test]
    fn test_recent_timestamp_within_window() {
        let mut rng = StdRng::seed_from_u64(4);
        let now = Utc::now();
        for window in [Window::LastHour, Window::LastDay, Window::LastWeek] {
            for _ in 0..100 {
                let ts = recent_timestamp(&mut rng, now, window);
                assert!(ts <= now);
                assert!(now - ts < window.span());
            }
        }
    }
}
