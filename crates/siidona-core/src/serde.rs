// Module name shadows the `serde` crate, so the external crate is `::serde`.
use ::serde::Serializer;
use chrono::{DateTime, SecondsFormat, Utc};

use siidona_domain::money::MinorUnits;

/// Serialize `DateTime<Utc>` as RFC 3339 with 3-digit fractional seconds.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Serialize a minor-unit amount as a two-decimal major-unit string (`"25.50"`).
pub fn to_major_units<S>(amount: &MinorUnits, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.collect_str(amount)
}
