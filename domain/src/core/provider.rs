//! Provider roles

use serde::{Deserialize, Serialize};

/// Position of an analysis provider in the fan-out.
///
/// Providers are invoked, and credited in `analysis_sources`, in role order:
/// `Primary` before `Secondary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderRole {
    Primary,
    Secondary,
}

impl ProviderRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderRole::Primary => "primary",
            ProviderRole::Secondary => "secondary",
        }
    }
}

impl std::fmt::Display for ProviderRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_sorts_first() {
        let mut roles = vec![ProviderRole::Secondary, ProviderRole::Primary];
        roles.sort();
        assert_eq!(roles, vec![ProviderRole::Primary, ProviderRole::Secondary]);
    }
}
