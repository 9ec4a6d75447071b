use serde::Serialize;

use crate::error::GrabError;

use super::problem::boundary_index;

/// A solution method with its receiver removed, e.g.
/// `findTheDifference(s: str, t: str) -> str:`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    pub name: String,
    pub params: Vec<String>,
    /// Full normalized text of the declaration after `def`.
    pub expression: String,
}

impl FunctionSignature {
    /// `sol.<name>(`, the opening of every generated call.
    pub fn call_prefix(&self) -> String {
        format!("{}(", self.name)
    }

    pub fn test_name(&self) -> String {
        format!("test_{}", self.name)
    }
}

/// Derive the signature from the line right after the `class Solution` line.
pub fn derive_signature(starter_lines: &[String]) -> Result<FunctionSignature, GrabError> {
    let boundary = boundary_index(starter_lines).ok_or(GrabError::MissingBoundary)?;
    let decl = starter_lines
        .get(boundary + 1)
        .ok_or_else(|| GrabError::MalformedSignature(String::new()))?;
    parse_method(decl)
}

pub fn parse_method(decl: &str) -> Result<FunctionSignature, GrabError> {
    let malformed = || GrabError::MalformedSignature(decl.to_string());

    let rest = decl
        .trim()
        .strip_prefix("def")
        .filter(|r| r.starts_with(char::is_whitespace))
        .ok_or_else(malformed)?
        .trim();

    let paren_open = rest.find('(').ok_or_else(malformed)?;
    let name = rest[..paren_open].trim().to_string();
    if name.is_empty() {
        return Err(malformed());
    }

    let paren_close = find_matching_paren(rest, paren_open).ok_or_else(malformed)?;

    let mut params: Vec<String> = split_top_level(&rest[paren_open + 1..paren_close])
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();
    if params.first().map(|p| p == "self").unwrap_or(false) {
        params.remove(0);
    }

    let tail = &rest[paren_close + 1..];
    let expression = format!("{}({}){}", name, params.join(", "), tail);

    Ok(FunctionSignature {
        name,
        params,
        expression,
    })
}

fn find_matching_paren(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0;
    for (i, c) in s[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

// Splits on commas outside of `[...]` and `(...)`, so `Dict[str, int]` stays whole.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&s[start..]);
    parts
}
