use crate::models::problem::boundary_index;
use crate::models::ProblemRecord;

/// Indentation placed between the starter lines from `class Solution` onward.
pub const INDENT: &str = "    ";

pub const EXTENSION: &str = "py";

pub const LIST_NODE_CLASS: &str = r#"
class ListNode:
    def __init__(self, val=0, next=None):
        self.val = val
        self.next = next


"#;

pub const LIST_TO_LINKED_LIST: &str = r#"
def l_2_ll(li):
    head = ListNode(li.pop(0),None)
    curr = head
    for item in li:
        curr.next = ListNode(item)
        curr = curr.next
    return head


"#;

/// Module name of the solution file, e.g. `E_389_Find_the_Difference`.
pub fn solution_stem(record: &ProblemRecord) -> String {
    format!(
        "{}_{}_{}",
        record.difficulty.initial(),
        record.number,
        record.title.replace(' ', "_")
    )
}

pub fn solution_filename(record: &ProblemRecord) -> String {
    format!("{}.{}", solution_stem(record), EXTENSION)
}

/// Each description line as a `#` comment, lines separated by a blank line.
pub fn comment_description(description: &str) -> String {
    let lines: Vec<&str> = description.lines().collect();
    format!("#{}", lines.join("\n\n#"))
}

/// Preamble lines joined verbatim, then the solution class and everything
/// after it joined with [`INDENT`]. Without a boundary line all lines are preamble.
pub fn render_starter_code(lines: &[String]) -> String {
    let boundary = boundary_index(lines).unwrap_or(lines.len());
    let preamble = lines[..boundary].join("\n");
    let separator = format!("\n{}", INDENT);
    let body = lines[boundary..].join(separator.as_str());
    format!("{}\n{}", preamble, body)
}

pub fn linked_list_helpers() -> String {
    format!("{}{}", LIST_NODE_CLASS, LIST_TO_LINKED_LIST)
}

pub fn solution_source(record: &ProblemRecord, linked_list: bool) -> String {
    let helpers = if linked_list {
        linked_list_helpers()
    } else {
        String::new()
    };

    format!(
        "{}\n\nfrom typing import *\n\n{}{}",
        comment_description(&record.description_text()),
        helpers,
        render_starter_code(&record.starter_lines)
    )
}
