//! Source repository descriptors.

use serde::Deserialize;

/// A repository scanned for issues carrying the tracked label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceRepository {
    /// Organization or user owning the repository.
    pub org: String,

    /// Repository name.
    pub repo: String,

    /// Project display name used in mirrored issue titles.
    pub name: String,
}

impl SourceRepository {
    /// Returns the repository in "org/repo" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.org, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_org_and_repo() {
        let source = SourceRepository {
            org: "uw-ssec".to_string(),
            repo: "tutorials".to_string(),
            name: "Tutorials".to_string(),
        };

        assert_eq!(source.full_name(), "uw-ssec/tutorials");
    }
}
