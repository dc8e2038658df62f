#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// The success/error message pair shown under one form.
///
/// At most one side is non-empty at any time: setting either side
/// always clears the other. Fields are private so callers cannot end
/// up displaying both banners at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusMessages {
    success: String,
    error: String,
}

impl StatusMessages {
    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = message.into();
        self.error.clear();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
        self.success.clear();
    }

    /// Clear the success side only. Pages schedule this after the
    /// fixed display delay; an error set in the meantime stays put.
    pub fn clear_success(&mut self) {
        self.success.clear();
    }

    pub fn success(&self) -> &str {
        &self.success
    }

    pub fn error(&self) -> &str {
        &self.error
    }
}
