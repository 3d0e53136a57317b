use std::path::PathBuf;

use directories::ProjectDirs;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, generic_error};

/// Expands a leading `~` in a user supplied path
pub(crate) fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(tilde(path).into_owned())
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_leaves_plain_paths() {
        assert_eq!(expand_path("data/in.nt"), PathBuf::from("data/in.nt"));
    }

    #[test]
    fn test_expand_path_expands_tilde() {
        let expanded = expand_path("~/in.nt");
        assert!(!expanded.starts_with("~"));
        assert!(expanded.ends_with("in.nt"));
    }
}
