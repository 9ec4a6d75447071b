use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::signature::FunctionSignature;

pub const MARKER_SCAN_PLACEHOLDER: &str = " No Explaination";
pub const POSITIONAL_PLACEHOLDER: &str = " No Explanation given";

/// How the lines of an example block are mapped to input, output and explanation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExampleMode {
    /// Look for `Input:` / `Output:` / `Explaination:` anywhere in a line.
    #[default]
    MarkerScan,
    /// Line 0 is the input, line 1 the output, line 2 the explanation.
    Positional,
}

impl ExampleMode {
    pub fn placeholder(&self) -> &'static str {
        match self {
            ExampleMode::MarkerScan => MARKER_SCAN_PLACEHOLDER,
            ExampleMode::Positional => POSITIONAL_PLACEHOLDER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub input: String,
    pub output: String,
    pub explanation: String,
}

impl Example {
    pub fn new(input: String, output: String, explanation: String) -> Self {
        Self {
            input,
            output: normalize_bool(&output),
            explanation,
        }
    }
}

/// `true`/`false` become `True`/`False`; everything else is returned as is.
pub fn normalize_bool(value: &str) -> String {
    match value {
        "true" => "True".to_string(),
        "false" => "False".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProblemRecord {
    pub title: String,
    pub number: u32,
    pub difficulty: Difficulty,
    pub description: Vec<String>,
    pub examples: Vec<Example>,
    pub starter_lines: Vec<String>,
    pub signature: FunctionSignature,
}

impl ProblemRecord {
    /// Paragraphs joined by newlines with surrounding whitespace trimmed.
    pub fn description_text(&self) -> String {
        self.description.join("\n").trim().to_string()
    }
}

pub const BOUNDARY_MARKER: &str = "class Solution";

pub fn boundary_index(lines: &[String]) -> Option<usize> {
    lines.iter().position(|line| line.contains(BOUNDARY_MARKER))
}
