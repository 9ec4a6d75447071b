use crate::codegen::{linked_list_helpers, solution_stem, INDENT};
use crate::models::ProblemRecord;

pub const SHEBANG: &str = "#!/usr/bin/env python3\n";
const CONVERTER: &str = "l_2_ll";

/// Initial content of a shared test file.
pub fn test_file_header(helpers: bool) -> String {
    if helpers {
        format!("{}{}", SHEBANG, linked_list_helpers())
    } else {
        SHEBANG.to_string()
    }
}

/// One test function holding an assertion per example, ready to append to
/// [`crate::models::Difficulty::test_file`]. In linked-list mode scalar
/// outputs (no `[`) stay unwrapped.
pub fn assertion_block(record: &ProblemRecord, linked_list: bool) -> String {
    let sig = &record.signature;
    let call = sig.call_prefix();

    let mut lines = vec![
        format!("\n\ndef {}():", sig.test_name()),
        format!("from {} import Solution", solution_stem(record)),
        "sol = Solution()".to_string(),
    ];

    for example in &record.examples {
        let input = wrap(&example.input, linked_list);
        let output = wrap_output(&example.output, linked_list);
        lines.push(format!("assert sol.{}{}) == {}", call, input, output));
        lines.push(format!("#{}", example.explanation));
    }

    let separator = format!("\n{}", INDENT);
    lines.join(separator.as_str())
}

fn wrap(expr: &str, linked_list: bool) -> String {
    if linked_list {
        format!("{}({})", CONVERTER, expr)
    } else {
        expr.to_string()
    }
}

// Scalar results (e.g. a length) stay unwrapped even in linked-list mode.
fn wrap_output(expr: &str, linked_list: bool) -> String {
    wrap(expr, linked_list && expr.contains('['))
}
