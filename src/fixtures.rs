//! Problem pages shared by the unit tests.

pub const FIND_THE_DIFFERENCE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Find the Difference - LeetCode</title></head>
<body>
<div id="app">
  <div data-cy="question-title" class="css-v3d350">389. Find the Difference</div>
  <div class="css-10o4wqw"><div diff="easy" class="css-14oi08n">Easy</div><button>1234</button></div>
  <div class="content__u3I1 question-content__JfgR"><div>
    <p>You are given two strings <code>s</code> and <code>t</code>.</p>
    <p>String <code>t</code> is generated by random shuffling string <code>s</code> and then add one more letter at a random position.</p>
    <p>Return the letter that was added to <code>t</code>.</p>
    <p>&nbsp;</p>
    <p><strong class="example">Example 1:</strong></p>
    <pre><strong>Input:</strong> s = "abcd", t = "abcde"
<strong>Output:</strong> "e"
<strong>Explanation:</strong> 'e' is the letter that was added.
</pre>
    <p><strong class="example">Example 2:</strong></p>
    <pre><strong>Input:</strong> s = "", t = "y"
<strong>Output:</strong> "y"
</pre>
    <p><strong>Constraints:</strong></p>
  </div></div>
  <div class="CodeMirror-lines"><div><div class="CodeMirror-code">
    <div><pre class=" CodeMirror-line "><span>class Solution:</span></pre></div>
    <div><pre class=" CodeMirror-line "><span>    def findTheDifference(self, s: str, t: str) -&gt; str:</span></pre></div>
    <div><pre class=" CodeMirror-line "><span>        </span></pre></div>
  </div></div></div>
</div>
</body>
</html>
"#;

/// Build a minimal page from its parts. `starter` lines are inserted as HTML.
pub fn page(title: &str, difficulty: &str, description: &str, examples: &str, starter: &[&str]) -> String {
    let code: String = starter
        .iter()
        .map(|line| format!(r#"<div><pre class=" CodeMirror-line "><span>{}</span></pre></div>"#, line))
        .collect();

    format!(
        r#"<html><body>
<div data-cy="question-title">{title}</div>
<div class="css-10o4wqw"><div>{difficulty}</div></div>
<div class="content__u3I1 question-content__JfgR"><div>{description}{examples}</div></div>
<div class="CodeMirror-lines"><div class="CodeMirror-code">{code}</div></div>
</body></html>"#
    )
}

/// Linked-list problem with a commented preamble above the solution class.
pub fn middle_of_list() -> String {
    page(
        "876. Middle of the Linked List",
        "Easy",
        "<p>Given the <code>head</code> of a singly linked list, return the middle node.</p>\
         <p>If there are two middle nodes, return the second middle node.</p>\
         <p><strong>Example 1:</strong></p>",
        "<pre><strong>Input:</strong> head = [1,2,3,4,5]\n<strong>Output:</strong> [3,4,5]\n\
         <strong>Explaination:</strong> The middle node of the list is node 3.</pre>\
         <pre><strong>Input:</strong> head = [1]\n<strong>Output:</strong> 1</pre>",
        &[
            "# Definition for singly-linked list.",
            "# class ListNode:",
            "#     def __init__(self, val=0, next=None):",
            "class Solution:",
            "    def middleNode(self, head: Optional[ListNode]) -&gt; Optional[ListNode]:",
            "        ",
        ],
    )
}
