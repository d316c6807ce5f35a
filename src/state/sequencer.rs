//! Generation tokens for discarding superseded responses.
//!
//! Each request class (clusters, search, cluster pages) owns a
//! [`RequestSequencer`]. Issuing a request takes a fresh [`Generation`];
//! a completion is applied only while its generation is still the latest.

use std::fmt;

/// Identifies one issued request within its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic generation counter for one request class.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the generation for a new request, superseding all earlier ones.
    pub fn issue(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }

    /// Supersede every outstanding request without issuing a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.latest
    }
}

/// Whether a completion changed visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// The response was superseded and dropped untouched
    Stale,
}
