/// Handling of raw opcode values outside the 3-bit domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum OpcodePolicy {
    /// Report the value as a caller contract violation.
    #[default]
    Reject,
    /// Keep only the low three bits, as a physical 3-bit bus would.
    Mask,
}

/// Configuration for a vector-check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CheckConfig {
    /// Out-of-domain opcode handling.
    pub opcode_policy: OpcodePolicy,
    /// Stop at the first vector that does not pass.
    pub fail_fast: bool,
}

impl CheckConfig {
    /// Returns a copy with the given opcode policy.
    #[must_use]
    pub const fn with_opcode_policy(mut self, policy: OpcodePolicy) -> Self {
        self.opcode_policy = policy;
        self
    }

    /// Returns a copy with fail-fast set as given.
    #[must_use]
    pub const fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{CheckConfig, OpcodePolicy};

    #[test]
    fn default_rejects_and_runs_every_vector() {
        let config = CheckConfig::default();
        assert_eq!(config.opcode_policy, OpcodePolicy::Reject);
        assert!(!config.fail_fast);
    }

    #[test]
    fn builders_override_single_fields() {
        let config = CheckConfig::default()
            .with_opcode_policy(OpcodePolicy::Mask)
            .with_fail_fast(true);
        assert_eq!(config.opcode_policy, OpcodePolicy::Mask);
        assert!(config.fail_fast);
    }
}
