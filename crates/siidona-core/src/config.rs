//! Helpers for reading service configuration from environment variables.
//!
//! Each helper has a `*_in` twin taking a lookup function so parsing rules can
//! be exercised without touching the process environment.

use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Context as _, anyhow};

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Read a required variable. Empty values count as missing.
pub fn required(key: &str) -> anyhow::Result<String> {
    required_in(process_env, key)
}

/// Read an optional variable. Empty values count as missing.
pub fn optional(key: &str) -> Option<String> {
    optional_in(process_env, key)
}

/// Read and parse a variable, falling back to `default` when unset.
pub fn parsed_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    parsed_or_in(process_env, key, default)
}

/// Read a boolean flag (`true/false`, `1/0`, `yes/no`, `on/off`).
pub fn flag_or(key: &str, default: bool) -> anyhow::Result<bool> {
    flag_or_in(process_env, key, default)
}

pub fn required_in(lookup: impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<String> {
    optional_in(lookup, key).with_context(|| format!("{key} must be set"))
}

pub fn optional_in(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.trim().is_empty())
}

pub fn parsed_or_in<T>(
    lookup: impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match optional_in(lookup, key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{key}={raw:?} is invalid: {e}")),
        None => Ok(default),
    }
}

pub fn flag_or_in(
    lookup: impl Fn(&str) -> Option<String>,
    key: &str,
    default: bool,
) -> anyhow::Result<bool> {
    let Some(raw) = optional_in(lookup, key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow!("{key}={raw:?} is not a boolean")),
    }
}
