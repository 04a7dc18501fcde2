//! Form input state types.
//!
//! This module contains the text fields of the ZIP banner and the address
//! form, and which field receives key input.

use crate::resolution::{AddressInput, InputError};

/// Address pre-filled into the form on first launch.
///
pub const DEFAULT_ADDRESS: &str = "301 N Olive Ave, West Palm Beach, FL 33401";

/// Specifying the fields of the address form.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    Address,
    Unit,
}

/// Text typed into the address form.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressForm {
    pub address: String,
    pub unit: String,
    pub focus: FormField,
}

impl Default for AddressForm {
    fn default() -> Self {
        AddressForm::with_address(DEFAULT_ADDRESS)
    }
}

impl AddressForm {
    pub fn with_address(address: &str) -> Self {
        AddressForm {
            address: address.to_owned(),
            unit: String::new(),
            focus: FormField::Address,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_mut().pop();
    }

    pub fn clear_field(&mut self) {
        self.focused_mut().clear();
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            FormField::Address => FormField::Unit,
            FormField::Unit => FormField::Address,
        };
    }

    /// Validate the fields into flow input.
    pub fn to_input(&self) -> Result<AddressInput, InputError> {
        AddressInput::new(&self.address, &self.unit)
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Address => &mut self.address,
            FormField::Unit => &mut self.unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form() {
        let form = AddressForm::default();
        assert_eq!(form.address, DEFAULT_ADDRESS);
        assert!(form.unit.is_empty());
        assert_eq!(form.focus, FormField::Address);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = AddressForm::with_address("");
        form.push_char('1');
        form.next_field();
        form.push_char('A');
        form.push_char('B');
        form.pop_char();
        assert_eq!(form.address, "1");
        assert_eq!(form.unit, "A");
        form.next_field();
        assert_eq!(form.focus, FormField::Address);
    }

    #[test]
    fn test_to_input() {
        let mut form = AddressForm::with_address("");
        assert_eq!(form.to_input(), Err(InputError::EmptyAddress));
        form.address = "1 Main St".to_string();
        form.unit = "3".to_string();
        let input = form.to_input().unwrap();
        assert_eq!(input.address(), "1 Main St");
        assert_eq!(input.unit(), "3");
    }
}
