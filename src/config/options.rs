//! Options for rendering vectors in diagnostics.
//!
//! `FormatOptions` controls the `"[e0, e1, ...]"` rendering used in logs and
//! assertion messages. The default reproduces the plain rendering exactly.

/// Diagnostic rendering parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Digits after the decimal point, passed to each element's `Display`.
    pub precision: Option<usize>,

    /// Render at most this many leading elements, then `...`.
    pub max_elements: Option<usize>,
}

impl FormatOptions {
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = Some(max_elements);
        self
    }
}
