//! Blur/input validation styling for required form fields.

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Error,
    Valid,
}

impl FieldStatus {
    /// Leaving the field judges it: empty is an error, anything else is valid.
    pub fn on_blur(value: &str) -> Self {
        if value.is_empty() {
            FieldStatus::Error
        } else {
            FieldStatus::Valid
        }
    }

    /// Typing only clears an error; it never raises one.
    pub fn on_input(self, value: &str) -> Self {
        match self {
            FieldStatus::Error if !value.is_empty() => FieldStatus::Valid,
            other => other,
        }
    }

    pub fn is_error(self) -> bool {
        self == FieldStatus::Error
    }

    pub fn is_valid(self) -> bool {
        self == FieldStatus::Valid
    }
}
