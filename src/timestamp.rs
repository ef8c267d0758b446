use chrono::{DateTime, Utc};

/// Microseconds between 1601-01-01T00:00:00Z and the Unix epoch.
pub const WEBKIT_UNIX_OFFSET_MICROS: i64 = 11_644_473_600_000_000;

/// Reference zero-instant and unit a browser uses to encode timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpochScheme {
    /// Microseconds since 1601-01-01T00:00:00Z (Chromium family).
    Webkit,
    /// Microseconds since 1970-01-01T00:00:00Z (Gecko family).
    UnixMicros,
}

/// Decode a raw store timestamp into UTC.
///
/// Total over all `i64` inputs: values outside chrono's representable range
/// saturate to `MIN_UTC`/`MAX_UTC` instead of failing. Raw 0 under the
/// Webkit scheme yields 1601-01-01 exactly; whether that sentinel means
/// "never visited" is the caller's call.
pub fn decode(raw: i64, scheme: EpochScheme) -> DateTime<Utc> {
    let micros = match scheme {
        EpochScheme::Webkit => raw.saturating_sub(WEBKIT_UNIX_OFFSET_MICROS),
        EpochScheme::UnixMicros => raw,
    };
    DateTime::<Utc>::from_timestamp_micros(micros).unwrap_or(if micros < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Decode a nullable store column, coercing NULL to raw 0 first.
///
/// Gecko's `last_visit_date` column is nullable; a missing value decodes the
/// same as an explicit 0.
pub fn decode_opt(raw: Option<i64>, scheme: EpochScheme) -> DateTime<Utc> {
    decode(raw.unwrap_or(0), scheme)
}
