use serde::{Deserialize, Serialize};

/// Difficulty badge of a problem.
///
/// Labels outside the three buckets are kept verbatim rather than rejected;
/// they still pick the test file (see [`Difficulty::test_file`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unrecognized(String),
}

impl Difficulty {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Easy" => Difficulty::Easy,
            "Medium" => Difficulty::Medium,
            "Hard" => Difficulty::Hard,
            other => Difficulty::Unrecognized(other.to_string()),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Unrecognized(label) => label,
        }
    }

    /// First character of the label, used as the solution filename prefix.
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default()
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Difficulty::Unrecognized(_))
    }

    /// Shared test file the assertions for this bucket are appended to.
    /// Anything unrecognized lands in the Hard file.
    pub fn test_file(&self) -> &'static str {
        match self {
            Difficulty::Easy => "test_easy.py",
            Difficulty::Medium => "test_medium.py",
            Difficulty::Hard | Difficulty::Unrecognized(_) => "test_hard.py",
        }
    }
}

pub const TEST_FILES: [&str; 3] = ["test_easy.py", "test_medium.py", "test_hard.py"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_labels() {
        assert_eq!(Difficulty::from_label("Easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("Medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("Hard"), Difficulty::Hard);
        assert_eq!(
            Difficulty::from_label("easy"),
            Difficulty::Unrecognized("easy".to_string())
        );
    }

    #[test]
    fn test_initials() {
        assert_eq!(Difficulty::Easy.initial(), "E");
        assert_eq!(Difficulty::Medium.initial(), "M");
        assert_eq!(Difficulty::Hard.initial(), "H");
        assert_eq!(Difficulty::from_label("Brutal").initial(), "B");
    }

    #[test]
    fn test_unrecognized_routes_to_hard_file() {
        assert_eq!(Difficulty::Easy.test_file(), "test_easy.py");
        assert_eq!(Difficulty::Medium.test_file(), "test_medium.py");
        assert_eq!(Difficulty::Hard.test_file(), "test_hard.py");
        assert_eq!(Difficulty::from_label("Brutal").test_file(), "test_hard.py");
        assert_eq!(Difficulty::from_label("easy").test_file(), "test_hard.py");
        assert!(!Difficulty::from_label("Brutal").is_recognized());
    }
}
