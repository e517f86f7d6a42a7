use serde::{Deserialize, Serialize};

/// Configuration for the probe
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Check that the boolean predicate agrees with the manifest generator (or with itself in reverse order)
    pub verify_consistency: bool,
    /// Apply the push of the first shape and check that the pair no longer collides
    pub verify_separation: bool,
    /// Penetration still tolerated after applying a push, absorbs rounding along non axis-aligned directions
    pub separation_tolerance: f32,
    /// Pretty-print the JSON report
    pub pretty: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            verify_consistency: true,
            verify_separation: true,
            separation_tolerance: 1e-3,
            pretty: true,
        }
    }
}
