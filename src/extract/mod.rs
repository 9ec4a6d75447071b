mod examples;
mod node;

pub use examples::parse_example;
pub use node::{Document, Node};

use crate::error::{GrabError, Section};
use crate::models::{Difficulty, Example, ExampleMode};

const TITLE_SELECTOR: &str = r#"div[data-cy="question-title"]"#;
const DIFFICULTY_SELECTOR: &str = "div.css-10o4wqw";
const CONTENT_SELECTOR: &str = "div.content__u3I1.question-content__JfgR";
const EDITOR_SELECTOR: &str = "div.CodeMirror-lines";
const EDITOR_CODE_SELECTOR: &str = "div.CodeMirror-code";

const EXAMPLES_SENTINEL: &str = "Example 1:";

/// Raw material for a problem record, straight off the page.
#[derive(Debug, Clone)]
pub struct Sections {
    pub number: u32,
    pub title: String,
    pub difficulty: Difficulty,
    pub description: Vec<String>,
    pub examples: Vec<Example>,
    pub starter_lines: Vec<String>,
}

pub fn extract_sections(doc: &Document, mode: ExampleMode) -> Result<Sections, GrabError> {
    let root = doc.root();

    tracing::info!("Collecting title");
    let title_node = require(root.find(TITLE_SELECTOR)?, Section::Title)?;
    let (number, title) = split_title(&title_node.text())?;

    tracing::info!("Collecting difficulty");
    let badge = require(root.find(DIFFICULTY_SELECTOR)?, Section::Difficulty)?;
    let difficulty = difficulty(badge)?;

    let content = require(root.find(CONTENT_SELECTOR)?, Section::Description)?;
    tracing::info!("Collecting description");
    let description = description(content)?;
    tracing::info!("Collecting examples");
    let examples = content
        .find_all("pre")?
        .iter()
        .map(|pre| parse_example(&pre.text(), mode))
        .collect::<Vec<_>>();
    tracing::debug!(count = examples.len(), ?mode, "Parsed examples");

    tracing::info!("Collecting starter code");
    let editor = require(root.find(EDITOR_SELECTOR)?, Section::StarterCode)?;
    let starter_lines = starter_lines(editor)?;

    Ok(Sections {
        number,
        title,
        difficulty,
        description,
        examples,
        starter_lines,
    })
}

fn require<'a>(node: Option<Node<'a>>, section: Section) -> Result<Node<'a>, GrabError> {
    node.ok_or_else(|| {
        tracing::error!(%section, "Section not found");
        GrabError::MissingSection(section)
    })
}

/// Split `"389. Find the Difference"` into `(389, "Find the Difference")`.
pub fn split_title(text: &str) -> Result<(u32, String), GrabError> {
    let malformed = || GrabError::MalformedTitle(text.trim().to_string());

    let (number, title) = text.split_once('.').ok_or_else(malformed)?;
    let number: u32 = number.trim().parse().map_err(|_| malformed())?;
    let title = title.trim();
    if number == 0 || title.is_empty() {
        return Err(malformed());
    }

    Ok((number, title.to_string()))
}

fn difficulty(badge: Node<'_>) -> Result<Difficulty, GrabError> {
    let label = require(badge.find("div")?, Section::Difficulty)?.text();
    if label.trim().is_empty() {
        return Err(GrabError::MissingSection(Section::Difficulty));
    }

    // The badge text must match a bucket exactly, surrounding whitespace included.
    let difficulty = Difficulty::from_label(&label);
    if !difficulty.is_recognized() {
        tracing::warn!(label = %label, "Unrecognized difficulty, tests will go to the Hard file");
    }
    Ok(difficulty)
}

// Paragraphs of the first inner div, up to but excluding the "Example 1:" one.
fn description(content: Node<'_>) -> Result<Vec<String>, GrabError> {
    let inner = require(content.find("div")?, Section::Description)?;
    let paragraphs = inner
        .find_all("p")?
        .iter()
        .map(Node::text)
        .take_while(|text| text != EXAMPLES_SENTINEL)
        .collect();
    Ok(paragraphs)
}

fn starter_lines(editor: Node<'_>) -> Result<Vec<String>, GrabError> {
    let code = require(editor.find(EDITOR_CODE_SELECTOR)?, Section::StarterCode)?;
    let lines = code
        .find_all("pre")?
        .iter()
        .map(|line| line.text().trim().to_string())
        .collect();
    Ok(lines)
}
