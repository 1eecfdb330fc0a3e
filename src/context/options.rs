/// Options of a DOM context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContextOptions {
    scripting_enabled: bool,
    validate_names: bool,
}

impl ContextOptions {
    /// Creates context options.
    pub const fn new(scripting_enabled: bool, validate_names: bool) -> Self {
        Self {
            scripting_enabled,
            validate_names,
        }
    }

    /// Returns whether scripting is enabled on parsing and serialization.
    pub const fn scripting_enabled(&self) -> bool {
        self.scripting_enabled
    }

    /// Returns whether tag and attribute names are validated.
    pub const fn validate_names(&self) -> bool {
        self.validate_names
    }

    /// Sets whether scripting is enabled.
    pub const fn set_scripting_enabled(mut self, enabled: bool) -> Self {
        self.scripting_enabled = enabled;
        self
    }

    /// Sets whether tag and attribute names are validated.
    pub const fn set_validate_names(mut self, validate: bool) -> Self {
        self.validate_names = validate;
        self
    }
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self::new(false, true)
    }
}
