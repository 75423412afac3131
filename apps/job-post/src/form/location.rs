use crate::errors::FormError;
use crate::models::job::LOCATIONS;

/// Single-select dropdown over [`LOCATIONS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationPicker {
    open: bool,
}

impl LocationPicker {
    pub fn options(&self) -> &'static [&'static str] {
        LOCATIONS
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Writes `location` into `slot` and closes the dropdown.
    /// Anything outside the fixed list is rejected and leaves both untouched.
    pub fn select(&mut self, slot: &mut Option<String>, location: &str) -> Result<(), FormError> {
        let known = LOCATIONS
            .iter()
            .find(|&&l| l == location)
            .ok_or_else(|| FormError::UnknownLocation(location.to_string()))?;
        *slot = Some(known.to_string());
        self.open = false;
        Ok(())
    }
}
