pub mod account;
pub mod ad;
pub mod category;
pub mod gate;
pub mod moderation;
pub mod seed;
pub mod session;
pub mod user_admin;
pub mod wallet;

use crate::error::MarketServiceError;

/// Trimmed value of a required text field, or `MissingField` when blank.
pub(crate) fn required(value: &str, field: &'static str) -> Result<String, MarketServiceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(MarketServiceError::MissingField(field));
    }
    Ok(value.to_owned())
}

/// Blank optional text is stored as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
