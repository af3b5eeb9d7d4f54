//! Kubernetes release table and version string derivations

use serde::{Deserialize, Serialize};

/// Raw file location for a tagged Kubernetes OpenAPI document
const SOURCE_URI_PREFIX: &str = "https://raw.githubusercontent.com/kubernetes/kubernetes";
const SOURCE_URI_SUFFIX: &str = "api/openapi-spec/swagger.json";

/// A minor release line and the latest patch published for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRange {
    pub major: u32,
    pub minor: u32,
    /// Inclusive upper bound of the patch numbers
    pub latest_patch: u32,
}

impl VersionRange {
    pub const fn new(major: u32, minor: u32, latest_patch: u32) -> Self {
        Self {
            major,
            minor,
            latest_patch,
        }
    }

    /// Every patch release from `.0` through `latest_patch`
    pub fn versions(&self) -> impl Iterator<Item = Version> + '_ {
        (0..=self.latest_patch).map(|patch| Version {
            major: self.major,
            minor: self.minor,
            patch,
        })
    }

    /// Number of versions this range expands to
    pub fn count(&self) -> usize {
        self.latest_patch as usize + 1
    }
}

/// One concrete Kubernetes release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Git tag of the release, e.g. `v1.26.3`
    pub fn tag(&self) -> String {
        format!("v{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Zero-padded name that sorts lexically, e.g. `v1.26.03`
    pub fn sortable_name(&self) -> String {
        format!("v{}.{:02}.{:02}", self.major, self.minor, self.patch)
    }

    /// Upstream raw URL of the Swagger document for this release
    pub fn source_uri(&self) -> String {
        format!("{}/{}/{}", SOURCE_URI_PREFIX, self.tag(), SOURCE_URI_SUFFIX)
    }
}

// major, minor, latest patch
const BUILTIN_TABLE: &[VersionRange] = &[
    VersionRange::new(1, 5, 8),
    VersionRange::new(1, 6, 13),
    VersionRange::new(1, 7, 16),
    VersionRange::new(1, 8, 15),
    VersionRange::new(1, 9, 11),
    VersionRange::new(1, 10, 13),
    VersionRange::new(1, 11, 10),
    VersionRange::new(1, 12, 10),
    VersionRange::new(1, 13, 12),
    VersionRange::new(1, 14, 10),
    VersionRange::new(1, 15, 12),
    VersionRange::new(1, 16, 15),
    VersionRange::new(1, 17, 17),
    VersionRange::new(1, 18, 20),
    VersionRange::new(1, 19, 16),
    VersionRange::new(1, 20, 15),
    VersionRange::new(1, 21, 14),
    VersionRange::new(1, 22, 17),
    VersionRange::new(1, 23, 17),
    VersionRange::new(1, 24, 12),
    VersionRange::new(1, 25, 8),
    VersionRange::new(1, 26, 3),
];

/// The release table compiled into the binary
pub fn builtin_table() -> Vec<VersionRange> {
    BUILTIN_TABLE.to_vec()
}

/// Total number of versions a table expands to
pub fn total_versions(table: &[VersionRange]) -> usize {
    table.iter().map(VersionRange::count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_inclusive() {
        let range = VersionRange::new(1, 26, 3);
        let patches: Vec<u32> = range.versions().map(|v| v.patch).collect();

        assert_eq!(patches, vec![0, 1, 2, 3]);
        assert_eq!(range.count(), 4);
    }

    #[test]
    fn test_zero_latest_patch_yields_one_version() {
        let range = VersionRange::new(1, 27, 0);
        assert_eq!(range.versions().count(), 1);
    }

    #[test]
    fn test_tag_is_unpadded() {
        let v = Version {
            major: 1,
            minor: 5,
            patch: 3,
        };
        assert_eq!(v.tag(), "v1.5.3");
    }

    #[test]
    fn test_sortable_name_is_padded() {
        let v = Version {
            major: 1,
            minor: 5,
            patch: 3,
        };
        assert_eq!(v.sortable_name(), "v1.05.03");

        let v = Version {
            major: 1,
            minor: 18,
            patch: 20,
        };
        assert_eq!(v.sortable_name(), "v1.18.20");
    }

    #[test]
    fn test_source_uri_uses_tag() {
        let v = Version {
            major: 1,
            minor: 9,
            patch: 0,
        };
        assert_eq!(
            v.source_uri(),
            "https://raw.githubusercontent.com/kubernetes/kubernetes/v1.9.0/api/openapi-spec/swagger.json"
        );
    }

    #[test]
    fn test_sortable_names_sort_in_release_order() {
        let table = builtin_table();
        let names: Vec<String> = table
            .iter()
            .flat_map(|r| r.versions().map(|v| v.sortable_name()).collect::<Vec<_>>())
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_builtin_table_total() {
        assert_eq!(total_versions(&builtin_table()), 306);
    }

    #[test]
    fn test_builtin_table_bounds() {
        let table = builtin_table();
        assert_eq!(table.first(), Some(&VersionRange::new(1, 5, 8)));
        assert_eq!(table.last(), Some(&VersionRange::new(1, 26, 3)));
        assert_eq!(table.len(), 22);
    }
}
