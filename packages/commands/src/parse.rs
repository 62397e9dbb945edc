//! Shell-like line tokenizer.
//!
//! Splits a command line on spaces, keeping double-quoted spans together:
//!
//! ```text
//! arg0 arg1 arg2        -> "arg0", "arg1", "arg2"
//! arg0 arg1 "arg2 arg3" -> "arg0", "arg1", "arg2 arg3"
//! ```

use std::ops::Deref;

/// Split `line` into arguments.
///
/// A token ends at a space outside of quotes, or at the end of the line.
/// Each double quote toggles the in-quote state. Non-empty tokens are
/// trimmed of surrounding spaces and double quotes before being kept, so
/// quotes inside a token survive (`a"b c"d` stays one token, verbatim).
///
/// Never fails. An unterminated quote swallows the rest of the line into
/// the last token, which is still emitted.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut quote = false;
    let mut start = 0;

    for (i, c) in line.char_indices() {
        if c == ' ' && !quote {
            push_token(&mut args, &line[start..i]);
            start = i + 1;
            continue;
        }

        if c == '"' {
            quote = !quote;
        }
    }
    push_token(&mut args, &line[start..]);

    args
}

fn push_token(args: &mut Vec<String>, pending: &str) {
    if !pending.is_empty() {
        args.push(pending.trim_matches([' ', '"']).to_string());
    }
}

/// Parsed command arguments (excluding the command name).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Args {
    args: Vec<String>,
}

impl Args {
    /// Wrap already-tokenized arguments.
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// Get argument at index (0 is first argument after command name).
    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// True if the command was given no arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Arguments in order, as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.args.iter().map(String::as_str)
    }

    /// Arguments from `from` onwards, joined by single spaces.
    pub fn joined(&self, from: usize) -> String {
        self.args.get(from..).map(|rest| rest.join(" ")).unwrap_or_default()
    }

    /// Unwrap into the owned argument list.
    pub fn into_vec(self) -> Vec<String> {
        self.args
    }
}

impl Deref for Args {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.args
    }
}

impl From<Vec<String>> for Args {
    fn from(args: Vec<String>) -> Self {
        Self::new(args)
    }
}

impl IntoIterator for Args {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_spaces() {
        assert_eq!(parse_line("arg0 arg1 arg2"), vec!["arg0", "arg1", "arg2"]);
    }

    #[test]
    fn keeps_quoted_span_together() {
        assert_eq!(
            parse_line("arg0 arg1 \"arg2 arg3\""),
            vec!["arg0", "arg1", "arg2 arg3"]
        );
    }

    #[test]
    fn empty_and_blank_lines() {
        assert!(parse_line("").is_empty());
        assert!(parse_line("   ").is_empty());
    }

    #[test]
    fn space_runs_make_no_empty_tokens() {
        assert_eq!(parse_line("  a   b  "), vec!["a", "b"]);
    }

    #[test]
    fn quoted_span_keeps_inner_spacing() {
        assert_eq!(
            parse_line("say \"hello   there\" now"),
            vec!["say", "hello   there", "now"]
        );
    }

    #[test]
    fn unterminated_quote_flushes_rest() {
        assert_eq!(
            parse_line("tell bob \"meet me at"),
            vec!["tell", "bob", "meet me at"]
        );
    }

    #[test]
    fn inner_quotes_survive_trim() {
        assert_eq!(parse_line("a\"b c\"d e"), vec!["a\"b c\"d", "e"]);
    }

    #[test]
    fn explicit_empty_quotes_give_empty_argument() {
        assert_eq!(parse_line("set title \"\""), vec!["set", "title", ""]);
    }

    #[test]
    fn tabs_are_not_delimiters() {
        assert_eq!(parse_line("a\tb c"), vec!["a\tb", "c"]);
    }

    #[test]
    fn multibyte_text() {
        assert_eq!(
            parse_line("say \"héllo wörld\" ✓"),
            vec!["say", "héllo wörld", "✓"]
        );
    }

    #[test]
    fn args_accessors() {
        let args = Args::from(parse_line("give sword of \"many edges\""));
        assert_eq!(args.len(), 4);
        assert_eq!(args.get(0), Some("give"));
        assert_eq!(args.get(9), None);
        assert_eq!(args.joined(1), "sword of many edges");
        assert_eq!(args.joined(10), "");
        assert_eq!(args.iter().last(), Some("many edges"));
    }
}
