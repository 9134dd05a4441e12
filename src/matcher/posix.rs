//! Translation of grep's POSIX pattern syntaxes into `regex` syntax.
//!
//! Only used to place highlights on lines grep already reported, so a pattern
//! that cannot be expressed (backreferences, collating elements) yields `None`
//! and the caller falls back to highlighting the whole line.

/// grep's pattern flavours that need rewriting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// `-G`, grep's default: `\(` `\)` `\{` `\}` `\|` `\+` `\?` are operators
    Basic,
    /// `-E`: the unescaped characters are operators
    Extended,
}

/// Rewrite `pattern` so that `regex` matches what grep would match.
pub fn translate(pattern: &str, flavor: Flavor) -> Option<String> {
    let basic = flavor == Flavor::Basic;
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    // Start of the whole pattern, of a group or of an alternative
    let mut at_branch_start = true;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let starts_branch = at_branch_start;
        at_branch_start = false;

        match c {
            '\\' => {
                // A trailing backslash is an error to grep as well
                let next = *chars.get(i + 1)?;
                i += 2;
                match next {
                    '1'..='9' => return None,
                    '<' => out.push_str(r"\b{start}"),
                    '>' => out.push_str(r"\b{end}"),
                    '`' => out.push_str(r"\A"),
                    '\'' => out.push_str(r"\z"),
                    'b' | 'B' | 'w' | 'W' | 's' | 'S' => {
                        out.push('\\');
                        out.push(next);
                    }
                    '(' | ')' | '{' | '}' | '|' | '+' | '?' if basic => {
                        out.push(next);
                        at_branch_start = next == '(' || next == '|';
                    }
                    other => push_literal(&mut out, other),
                }
                continue;
            }
            '[' => {
                i = push_bracket(&chars, i, &mut out)?;
                continue;
            }
            '*' if starts_branch => out.push_str(r"\*"),
            '*' | '.' => out.push(c),
            '^' if !basic || starts_branch => {
                out.push('^');
                at_branch_start = true;
            }
            '$' if !basic || ends_branch(&chars, i + 1) => out.push('$'),
            '(' | '|' if !basic => {
                out.push(c);
                at_branch_start = true;
            }
            ')' | '{' | '}' | '+' | '?' if !basic => out.push(c),
            other => push_literal(&mut out, other),
        }
        i += 1;
    }

    Some(out)
}

/// In a basic pattern `$` anchors only at the end of an alternative
fn ends_branch(chars: &[char], next: usize) -> bool {
    match chars.get(next) {
        None => true,
        Some('\\') => matches!(chars.get(next + 1), Some(')') | Some('|')),
        Some(_) => false,
    }
}

fn push_literal(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

/// Copy a bracket expression starting at `start`, return the index after it.
/// Backslash is literal inside POSIX brackets but an escape for `regex`.
fn push_bracket(chars: &[char], start: usize, out: &mut String) -> Option<usize> {
    let mut i = start + 1;
    out.push('[');
    if chars.get(i) == Some(&'^') {
        out.push('^');
        i += 1;
    }
    if chars.get(i) == Some(&']') {
        out.push_str(r"\]");
        i += 1;
    }

    loop {
        let c = *chars.get(i)?;
        match c {
            ']' => {
                out.push(']');
                return Some(i + 1);
            }
            '[' => match chars.get(i + 1) {
                Some(':') => {
                    let close = (i + 2..chars.len().saturating_sub(1))
                        .find(|&j| chars[j] == ':' && chars[j + 1] == ']')?;
                    out.push_str("[:");
                    out.extend(&chars[i + 2..close]);
                    out.push_str(":]");
                    i = close + 2;
                    continue;
                }
                Some('.') | Some('=') => return None,
                _ => out.push_str(r"\["),
            },
            '\\' | '&' | '~' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn basic(pattern: &str) -> Option<String> {
        translate(pattern, Flavor::Basic)
    }

    fn extended(pattern: &str) -> Option<String> {
        translate(pattern, Flavor::Extended)
    }

    #[test]
    fn test_basic_operators_are_literal_unless_escaped() {
        assert_eq!(basic("a+").as_deref(), Some(r"a\+"));
        assert_eq!(basic("a\\+").as_deref(), Some("a+"));
        assert_eq!(basic("a?|b").as_deref(), Some(r"a\?\|b"));
        assert_eq!(basic("a\\|b").as_deref(), Some("a|b"));
        assert_eq!(basic("\\(x\\)").as_deref(), Some("(x)"));
        assert_eq!(basic("(x)").as_deref(), Some(r"\(x\)"));
        assert_eq!(basic("a\\{2,3\\}").as_deref(), Some("a{2,3}"));
        assert_eq!(basic("a{2}").as_deref(), Some(r"a\{2\}"));
    }

    #[test]
    fn test_basic_anchors_and_star_by_position() {
        assert_eq!(basic("^a$").as_deref(), Some("^a$"));
        assert_eq!(basic("a^b$c").as_deref(), Some(r"a\^b\$c"));
        assert_eq!(basic("*a").as_deref(), Some(r"\*a"));
        assert_eq!(basic("^*a").as_deref(), Some(r"^\*a"));
        assert_eq!(basic("\\(*a\\)").as_deref(), Some(r"(\*a)"));
        assert_eq!(basic("a\\|^b").as_deref(), Some("a|^b"));
        assert_eq!(basic("a$\\|b").as_deref(), Some("a$|b"));
        assert_eq!(basic("ab*").as_deref(), Some("ab*"));
    }

    #[test]
    fn test_extended_keeps_operators() {
        assert_eq!(extended("a+|(b)?").as_deref(), Some("a+|(b)?"));
        assert_eq!(extended("a\\+").as_deref(), Some(r"a\+"));
        assert_eq!(extended("x{2}").as_deref(), Some("x{2}"));
    }

    #[test]
    fn test_brackets() {
        assert_eq!(basic("[]a]").as_deref(), Some(r"[\]a]"));
        assert_eq!(basic("[^]a]").as_deref(), Some(r"[^\]a]"));
        assert_eq!(basic("[a\\]").as_deref(), Some(r"[a\\]"));
        assert_eq!(basic("[[:digit:]x]").as_deref(), Some("[[:digit:]x]"));
        assert_eq!(basic("[a[b]").as_deref(), Some(r"[a\[b]"));
        assert!(basic("[[.a.]]").is_none());
        assert!(basic("[abc").is_none());
    }

    #[test]
    fn test_untranslatable() {
        assert!(basic("\\(a\\)\\1").is_none());
        assert!(extended("(a)\\1").is_none());
        assert!(basic("a\\").is_none());
    }

    #[test]
    fn test_word_boundaries() {
        let re = Regex::new(&basic("\\<an\\>").unwrap()).unwrap();
        assert!(re.is_match("an apple"));
        assert!(!re.is_match("banana"));
    }

    #[test]
    fn test_translations_compile_and_match_like_grep() {
        let cases = [
            ("a+", "xa+y", Some(1..3)),
            ("a\\+", "baaa", Some(1..4)),
            ("[[:digit:]]\\{2\\}", "v10", Some(1..3)),
            ("a.c", "xabc", Some(1..4)),
            ("[a\\]x", "\\x", Some(0..2)),
        ];
        for (pattern, line, expected) in cases {
            let re = Regex::new(&basic(pattern).unwrap()).unwrap();
            assert_eq!(re.find(line).map(|m| m.range()), expected, "{:?}", pattern);
        }
    }
}
