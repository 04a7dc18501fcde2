//! The currently resolved locale.

use crate::locale::{Locale, LocaleId};

/// Holds the locale of the last successful resolution. Readable anywhere,
/// writable only from the resolution module.
///
#[derive(Clone, Debug, Default)]
pub struct AddressState {
    locale: Option<Locale>,
}

impl AddressState {
    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    pub(super) fn replace(&mut self, locale: Locale) {
        self.locale = Some(locale);
    }

    /// Swap in a copy of the held locale carrying the identifier. Does
    /// nothing when the held locale is no longer the address of `resolved`.
    /// Coordinates are not compared. Returns the promoted locale.
    pub(super) fn promote(&mut self, resolved: &Locale, id: LocaleId) -> Option<Locale> {
        let promoted = match &self.locale {
            Some(current) if current.same_address(resolved) => current.with_id(id),
            _ => return None,
        };
        self.locale = Some(promoted.clone());
        Some(promoted)
    }

    pub(super) fn clear(&mut self) {
        self.locale = None;
    }
}
