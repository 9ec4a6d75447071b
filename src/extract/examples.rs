use crate::models::{Example, ExampleMode};

const INPUT_MARKER: &str = "Input:";
const OUTPUT_MARKER: &str = "Output:";
const EXPLANATION_MARKER: &str = "Explaination:";
const EXPLANATION_MARKERS: [&str; 2] = [EXPLANATION_MARKER, "Explanation:"];

/// Parse the text of one `<pre>` example block.
pub fn parse_example(block: &str, mode: ExampleMode) -> Example {
    match mode {
        ExampleMode::MarkerScan => marker_scan(block),
        ExampleMode::Positional => positional(block),
    }
}

fn marker_scan(block: &str) -> Example {
    let mut input = None;
    let mut output = None;
    let mut explanation = None;

    for line in block.lines() {
        if input.is_none() {
            input = after_marker(line, INPUT_MARKER);
        }
        if output.is_none() {
            output = after_marker(line, OUTPUT_MARKER);
        }
        if explanation.is_none() {
            explanation = line
                .contains(EXPLANATION_MARKER)
                .then(|| line.trim().to_string());
        }
    }

    Example::new(
        input.unwrap_or_default(),
        output.unwrap_or_default(),
        explanation.unwrap_or_else(|| ExampleMode::MarkerScan.placeholder().to_string()),
    )
}

fn positional(block: &str) -> Example {
    let mut lines = block.lines().filter(|line| !line.trim().is_empty());

    let input = lines
        .next()
        .map(|l| strip_marker(l, &[INPUT_MARKER]))
        .unwrap_or_default();
    let output = lines
        .next()
        .map(|l| strip_marker(l, &[OUTPUT_MARKER]))
        .unwrap_or_default();
    let explanation = lines
        .next()
        .map(|l| strip_marker(l, &EXPLANATION_MARKERS))
        .unwrap_or_else(|| ExampleMode::Positional.placeholder().to_string());

    Example::new(input, output, explanation)
}

// Remainder of the line after the first occurrence of `marker`, trimmed.
fn after_marker(line: &str, marker: &str) -> Option<String> {
    line.find(marker)
        .map(|i| line[i + marker.len()..].trim().to_string())
}

fn strip_marker(line: &str, markers: &[&str]) -> String {
    let line = line.trim();
    markers
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .unwrap_or(line)
        .trim()
        .to_string()
}
