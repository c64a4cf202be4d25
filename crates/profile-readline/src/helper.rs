use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use profile_core::profile::ProfileField;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use strum::IntoEnumIterator;

use crate::command::COMMANDS;

/// Completes command names and, after `set`/`clear`/`focus`, field names.
#[derive(Clone)]
pub struct FormHelper {
    commands: Vec<String>,
    fields: Vec<String>,
}

impl FormHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
            fields: ProfileField::iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Returns the start offset of the word being completed and its candidates.
    fn candidates(&self, line: &str) -> (usize, Vec<String>) {
        match line.split_once(' ') {
            None => (0, matching(&self.commands, line)),
            Some((verb, rest)) if matches!(verb, "set" | "clear" | "focus") && !rest.contains(' ') => {
                (verb.len() + 1, matching(&self.fields, rest))
            }
            Some(_) => (line.len(), Vec::new()),
        }
    }
}

impl Default for FormHelper {
    fn default() -> Self {
        Self::new()
    }
}

fn matching(words: &[String], prefix: &str) -> Vec<String> {
    words
        .iter()
        .filter(|word| word.starts_with(prefix))
        .cloned()
        .collect()
}

impl Helper for FormHelper {}

impl Completer for FormHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.candidates(&line[..pos]);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for FormHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let rest = line.trim_start();
        let start = line.len() - rest.len();
        let verb = rest.split_whitespace().next().unwrap_or("");
        if COMMANDS.contains(&verb) {
            Owned(format!(
                "{}{}{}",
                &line[..start],
                verb.bright_cyan(),
                &rest[verb.len()..]
            ))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for FormHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let (start, words) = self.candidates(line);
        let typed = &line[start..];
        if typed.is_empty() {
            return None;
        }
        words
            .into_iter()
            .find(|word| word.len() > typed.len())
            .map(|word| word[typed.len()..].to_string())
    }
}

impl Validator for FormHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_commands() {
        let helper = FormHelper::new();
        let (start, words) = helper.candidates("su");
        assert_eq!(start, 0);
        assert_eq!(words, vec!["submit".to_string()]);
    }

    #[test]
    fn test_completes_field_names_after_set() {
        let helper = FormHelper::new();
        let (start, words) = helper.candidates("set ph");
        assert_eq!(start, 4);
        assert_eq!(words, vec!["phone".to_string()]);
    }

    #[test]
    fn test_no_completion_inside_values() {
        let helper = FormHelper::new();
        let (_, words) = helper.candidates("set first_name Ja");
        assert!(words.is_empty());
    }

    #[test]
    fn test_highlight_keeps_leading_whitespace() {
        colored::control::set_override(false);
        let helper = FormHelper::new();
        assert_eq!(helper.highlight(" submit", 0), " submit");
        assert_eq!(helper.highlight("\tset phone 555", 0), "\tset phone 555");
        assert_eq!(helper.highlight("\u{a0}\u{a0}set", 0), "\u{a0}\u{a0}set");
        assert_eq!(helper.highlight("  nope", 0), "  nope");
    }
}
