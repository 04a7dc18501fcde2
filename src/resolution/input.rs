//! Validated user input handed to the resolution flows.

use log::*;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

const ZIP_PATTERN: &str = r"^[0-9]{5}$";

/// Errors raised while validating form input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Address field left blank
    #[error("Address must not be empty")]
    EmptyAddress,

    /// ZIP field does not hold exactly five digits
    #[error("Invalid ZIP Code '{0}'")]
    InvalidZip(String),
}

/// Address and unit as typed into the address form.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressInput {
    raw: String,
    unit: String,
}

impl AddressInput {
    /// Accept the input when the address holds anything besides whitespace.
    /// The raw text is kept verbatim for user-facing messages.
    pub fn new(address: &str, unit: &str) -> Result<AddressInput, InputError> {
        if address.trim().is_empty() {
            return Err(InputError::EmptyAddress);
        }
        Ok(AddressInput {
            raw: address.to_owned(),
            unit: unit.trim().to_owned(),
        })
    }

    /// The address exactly as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The address with surrounding whitespace removed.
    pub fn address(&self) -> &str {
        self.raw.trim()
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

/// A five digit ZIP code.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Validate the ZIP field. Blank input yields `Ok(None)` so callers can
    /// treat it as a no-op; anything else must be exactly five digits,
    /// surrounding whitespace included.
    pub fn parse(raw: &str) -> Result<Option<ZipCode>, InputError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        match zip_pattern() {
            Some(re) if re.is_match(raw) => Ok(Some(ZipCode(raw.to_owned()))),
            _ => Err(InputError::InvalidZip(raw.to_owned())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn zip_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    match PATTERN.get_or_init(|| Regex::new(ZIP_PATTERN)) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Failed to compile ZIP pattern '{}': {}", ZIP_PATTERN, e);
            None
        }
    }
}
