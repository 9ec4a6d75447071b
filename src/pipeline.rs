use crate::codegen::{solution_filename, solution_source};
use crate::error::GrabError;
use crate::extract::{extract_sections, Document, Sections};
use crate::models::{derive_signature, ExampleMode, ProblemRecord};
use crate::testgen::assertion_block;

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub linked_list: bool,
    pub example_mode: ExampleMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    SectionsValidated,
    RecordBuilt,
    ArtifactsGenerated,
    Done,
    Failed,
}

/// Everything a writer needs to persist one problem.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub solution_filename: String,
    pub solution_source: String,
    pub test_target: &'static str,
    pub test_block: String,
}

pub fn build_record(sections: Sections) -> Result<ProblemRecord, GrabError> {
    let signature = derive_signature(&sections.starter_lines)?;
    tracing::debug!(signature = %signature.expression, "Derived signature");

    Ok(ProblemRecord {
        title: sections.title,
        number: sections.number,
        difficulty: sections.difficulty,
        description: sections.description,
        examples: sections.examples,
        starter_lines: sections.starter_lines,
        signature,
    })
}

pub fn generate(record: &ProblemRecord, options: &Options) -> Artifacts {
    Artifacts {
        solution_filename: solution_filename(record),
        solution_source: solution_source(record, options.linked_list),
        test_target: record.difficulty.test_file(),
        test_block: assertion_block(record, options.linked_list),
    }
}

pub fn parse_record(html: &str, options: &Options) -> Result<ProblemRecord, GrabError> {
    let doc = Document::parse(html);
    let sections = extract_sections(&doc, options.example_mode);
    let sections = advance(Stage::Start, Stage::SectionsValidated, sections)?;
    advance(Stage::SectionsValidated, Stage::RecordBuilt, build_record(sections))
}

/// HTML in, artifacts out. No I/O happens here.
pub fn run(html: &str, options: &Options) -> Result<(ProblemRecord, Artifacts), GrabError> {
    tracing::info!("Parsing source code");
    let record = parse_record(html, options)?;
    let artifacts = generate(&record, options);
    transition(Stage::RecordBuilt, Stage::ArtifactsGenerated);
    transition(Stage::ArtifactsGenerated, Stage::Done);
    Ok((record, artifacts))
}

fn advance<T>(from: Stage, to: Stage, result: Result<T, GrabError>) -> Result<T, GrabError> {
    match result {
        Ok(value) => {
            transition(from, to);
            Ok(value)
        }
        Err(e) => {
            tracing::debug!(?from, to = ?Stage::Failed, error = %e, "Pipeline failed");
            Err(e)
        }
    }
}

fn transition(from: Stage, to: Stage) {
    tracing::debug!(?from, ?to, "Pipeline stage");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Section;
    use crate::fixtures::{middle_of_list, page, FIND_THE_DIFFERENCE};

    #[test]
    fn test_find_the_difference() {
        let (record, artifacts) = run(FIND_THE_DIFFERENCE, &Options::default()).unwrap();
        assert_eq!(record.number, 389);
        assert_eq!(record.signature.name, "findTheDifference");
        assert_eq!(artifacts.solution_filename, "E_389_Find_the_Difference.py");
        assert_eq!(artifacts.test_target, "test_easy.py");
        assert!(artifacts
            .solution_source
            .starts_with("#You are given two strings s and t.\n\n#String t is generated"));
        assert!(artifacts
            .test_block
            .contains("assert sol.findTheDifference(s = \"abcd\", t = \"abcde\") == \"e\""));
        assert_eq!(artifacts.test_block.matches("# No Explaination").count(), 2);
        assert!(!artifacts.test_block.contains("'e' is the letter"));
    }

    #[test]
    fn test_linked_list_page() {
        let options = Options {
            linked_list: true,
            example_mode: ExampleMode::MarkerScan,
        };
        let (record, artifacts) = run(&middle_of_list(), &options).unwrap();
        assert_eq!(record.starter_lines[0], "# Definition for singly-linked list.");
        assert!(artifacts.solution_source.contains(
            "#     def __init__(self, val=0, next=None):\nclass Solution:\n    def middleNode("
        ));
        assert!(artifacts.solution_source.contains("def l_2_ll(li):"));
        assert!(artifacts
            .test_block
            .contains("assert sol.middleNode(l_2_ll(head = [1,2,3,4,5])) == l_2_ll([3,4,5])"));
        assert!(artifacts
            .test_block
            .contains("#Explaination: The middle node of the list is node 3."));
        assert!(artifacts
            .test_block
            .contains("assert sol.middleNode(l_2_ll(head = [1])) == 1"));
    }

    #[test]
    fn test_positional_mode() {
        let options = Options {
            linked_list: false,
            example_mode: ExampleMode::Positional,
        };
        let (record, _) = run(FIND_THE_DIFFERENCE, &options).unwrap();
        assert_eq!(record.examples[0].input, "s = \"abcd\", t = \"abcde\"");
        assert_eq!(record.examples[0].explanation, "'e' is the letter that was added.");
        assert_eq!(record.examples[1].explanation, " No Explanation given");
    }

    #[test]
    fn test_unrecognized_difficulty_routes_to_hard() {
        let html = page(
            "42. Trapping Rain Water",
            "Extreme",
            "<p>d</p>",
            "<pre>Input: height = [4,2,0,3,2,5]\nOutput: 9</pre>",
            &["class Solution:", "def trap(self, height: List[int]) -&gt; int:"],
        );
        let (_, artifacts) = run(&html, &Options::default()).unwrap();
        assert_eq!(artifacts.test_target, "test_hard.py");
        assert_eq!(artifacts.solution_filename, "E_42_Trapping_Rain_Water.py");
    }

    #[test]
    fn test_missing_boundary_fails() {
        let html = page("1. Two Sum", "Easy", "<p>d</p>", "", &["def twoSum(self):"]);
        assert!(matches!(
            run(&html, &Options::default()),
            Err(GrabError::MissingBoundary)
        ));
    }

    #[test]
    fn test_missing_section_fails() {
        assert!(matches!(
            run("<html><body></body></html>", &Options::default()),
            Err(GrabError::MissingSection(Section::Title))
        ));
    }
}
