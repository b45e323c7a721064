//! Bracket matching over `()`, `[]` and `{}`.

use crate::Stack;

/// Returns the opener that `closer` must match, if it is a closing bracket.
#[inline]
fn opener_for(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// Returns `true` if every bracket in `input` is closed in order.
///
/// A closer that matches the top of the stack pops it; every other character,
/// including a mismatched closer, is pushed. The input balances when the stack
/// ends empty, so any non-bracket character makes it unbalanced.
///
/// # Example
///
/// ```
/// use indexed_collections::brackets::is_balanced;
///
/// assert!(is_balanced("[{}]"));
/// assert!(is_balanced("[]{}({})"));
/// assert!(!is_balanced("{]"));
/// assert!(!is_balanced("[()]))()"));
/// ```
pub fn is_balanced(input: &str) -> bool {
    let mut stack = Stack::new();
    for c in input.chars() {
        match opener_for(c) {
            Some(open) if stack.peek() == Some(&open) => {
                // Top is the matching opener
                let _ = stack.pop();
            }
            _ => stack.push(c),
        }
    }
    let balanced = stack.is_empty();
    log::trace!("is_balanced({:?}) = {} ({} left open)", input, balanced, stack.len());
    balanced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_cases() {
        let cases = ["[{}]", "(()())", "{]", "[()]))()", "[]{}({})"];
        let expected = [true, true, false, false, true];
        for (case, want) in cases.iter().zip(expected) {
            assert_eq!(is_balanced(case), want, "case {}", case);
        }
    }

    #[test]
    fn empty_is_balanced() {
        assert!(is_balanced(""));
    }

    #[test]
    fn unclosed_opener() {
        assert!(!is_balanced("(("));
        assert!(!is_balanced("([)"));
    }

    #[test]
    fn closer_first() {
        assert!(!is_balanced(")("));
    }
}
