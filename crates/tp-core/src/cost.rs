//! Path cost policy shared by the distance oracle and its callers.

/// How travel cost is measured when asking the oracle for a duration.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostPolicy {
    /// Full terrain move costs.
    #[default]
    Strict,
    /// Every tile costs one move; used for looser "is it roughly near" checks.
    Relaxed,
}

impl CostPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            CostPolicy::Strict  => "strict",
            CostPolicy::Relaxed => "relaxed",
        }
    }
}

impl std::fmt::Display for CostPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
