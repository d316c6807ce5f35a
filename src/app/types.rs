//! Type definitions for the application state.
//!
//! - [`Focus`] - which UI component receives key input

/// Represents which UI component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Query,
    City,
    Month,
    Year,
    /// The tile grid
    Results,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Query,
        Focus::City,
        Focus::Month,
        Focus::Year,
        Focus::Results,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next component in Tab order, wrapping around.
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous component in Tab order, wrapping around.
    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether the component is a free-text field.
    pub fn is_text_field(self) -> bool {
        matches!(self, Focus::Query | Focus::City | Focus::Year)
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Query => "Search",
            Focus::City => "City",
            Focus::Month => "Month",
            Focus::Year => "Year",
            Focus::Results => "Results",
        }
    }
}
