//! Location of the engine's runtime data files (currently only `rules.toml`).
use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable that overrides data directory detection.
pub const DATA_DIR_ENV: &str = "HERO_QUEST_DATA";

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Path of the rules file.
pub fn rules_path() -> PathBuf {
    data_path("rules.toml")
}

fn detect_data_root() -> PathBuf {
    if let Some(dir) = env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    let mut candidates = vec![PathBuf::from("quest_engine/data"), PathBuf::from("data")];
    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.extend(candidate_dirs(dir));
        if let Some(parent) = dir.parent() {
            candidates.extend(candidate_dirs(parent));
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("quest_engine/data"))
}

fn candidate_dirs(base: &Path) -> [PathBuf; 2] {
    [base.join("quest_engine/data"), base.join("data")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_cover_workspace_and_flat_layouts() {
        let [nested, flat] = candidate_dirs(Path::new("/opt/quest"));
        assert_eq!(nested, PathBuf::from("/opt/quest/quest_engine/data"));
        assert_eq!(flat, PathBuf::from("/opt/quest/data"));
    }

    #[test]
    fn rules_file_name() {
        assert!(rules_path().ends_with("rules.toml"));
    }
}
