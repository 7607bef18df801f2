// src/config.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a keyword from a CSV file is matched against resume text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Case-insensitive substring test
    #[default]
    Substring,
    /// Case-insensitive match bounded by non-word characters
    WholeWord,
}

#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub data_dir: PathBuf,
    pub skills_file: PathBuf,
    pub majors_file: PathBuf,
    pub positions_file: PathBuf,
    pub keyword_match: MatchMode,
    pub root_dir: PathBuf,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorConfig {
    pub fn new() -> Self {
        // Capture the current directory at creation time
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            data_dir: PathBuf::from("data"),
            skills_file: PathBuf::from("skills.csv"),
            majors_file: PathBuf::from("majors.csv"),
            positions_file: PathBuf::from("positions.csv"),
            keyword_match: MatchMode::default(),
            root_dir: current_dir,
        }
    }

    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = dir;
        self
    }

    pub fn with_skills_file(mut self, file: PathBuf) -> Self {
        self.skills_file = file;
        self
    }

    pub fn with_majors_file(mut self, file: PathBuf) -> Self {
        self.majors_file = file;
        self
    }

    pub fn with_positions_file(mut self, file: PathBuf) -> Self {
        self.positions_file = file;
        self
    }

    pub fn with_keyword_match(mut self, mode: MatchMode) -> Self {
        self.keyword_match = mode;
        self
    }

    pub fn with_root_dir(mut self, dir: PathBuf) -> Self {
        self.root_dir = dir;
        self
    }

    fn absolute_path(&self, relative_path: &PathBuf) -> PathBuf {
        if relative_path.is_absolute() {
            relative_path.clone()
        } else {
            self.root_dir.join(relative_path)
        }
    }

    pub fn data_dir_absolute(&self) -> PathBuf {
        self.absolute_path(&self.data_dir)
    }

    /// Keyword files are looked up under the data directory unless given as absolute paths.
    fn data_file(&self, file: &PathBuf) -> PathBuf {
        if file.is_absolute() {
            file.clone()
        } else {
            self.data_dir_absolute().join(file)
        }
    }

    pub fn skills_path(&self) -> PathBuf {
        self.data_file(&self.skills_file)
    }

    pub fn majors_path(&self) -> PathBuf {
        self.data_file(&self.majors_file)
    }

    pub fn positions_path(&self) -> PathBuf {
        self.data_file(&self.positions_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_paths_resolve_under_data_dir() {
        let config = ExtractorConfig::new()
            .with_root_dir(PathBuf::from("/srv/cv"))
            .with_data_dir(PathBuf::from("keywords"));

        assert_eq!(config.data_dir_absolute(), PathBuf::from("/srv/cv/keywords"));
        assert_eq!(config.skills_path(), PathBuf::from("/srv/cv/keywords/skills.csv"));
        assert_eq!(
            config.positions_path(),
            PathBuf::from("/srv/cv/keywords/positions.csv")
        );
    }

    #[test]
    fn test_absolute_files_are_kept() {
        let config = ExtractorConfig::new()
            .with_root_dir(PathBuf::from("/srv/cv"))
            .with_majors_file(PathBuf::from("/opt/majors.csv"));

        assert_eq!(config.majors_path(), PathBuf::from("/opt/majors.csv"));
    }

    #[test]
    fn test_match_mode_parses_snake_case() {
        let mode: MatchMode = serde_yaml::from_str("whole_word").unwrap();
        assert_eq!(mode, MatchMode::WholeWord);
        assert_eq!(MatchMode::default(), MatchMode::Substring);
    }
}
