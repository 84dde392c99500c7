//! The line being typed at the prompt.
//!
//! Cursor positions count chars, not bytes, so multi-byte input edits
//! cleanly. History lives only for the session.

use crate::commands::known_names;
use crate::projects::PROJECTS;

/// Maximum number of history entries to retain.
const MAX_HISTORY: usize = 100;

#[derive(Debug, Clone)]
struct Completion {
    head: String,
    candidates: Vec<&'static str>,
    index: usize,
    applied: String,
}

#[derive(Debug, Default)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
    history: Vec<String>,
    history_index: Option<usize>,
    completion: Option<Completion>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Text before and after the cursor, for drawing the caret.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.byte_at(self.cursor))
    }

    /// Insert typed text at the cursor, skipping control characters.
    pub fn insert_str(&mut self, s: &str) {
        for ch in s.chars().filter(|c| !c.is_control()) {
            let at = self.byte_at(self.cursor);
            self.text.insert(at, ch);
            self.cursor += 1;
        }
        self.completion = None;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_at(self.cursor);
            self.text.remove(at);
        }
        self.completion = None;
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_at(self.cursor);
            self.text.remove(at);
        }
        self.completion = None;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.set_text(String::new());
        self.history_index = None;
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
        self.cursor = self.char_len();
        self.completion = None;
    }

    /// Hand over the current line and reset the buffer.
    pub fn take(&mut self) -> String {
        let line = std::mem::take(&mut self.text);
        self.clear();
        line
    }

    // -- History --

    /// Remember a submitted line. Consecutive duplicates are collapsed.
    pub fn push_history(&mut self, line: &str) {
        if self.history.last().map_or(true, |last| last != line) {
            self.history.push(line.to_string());
            if self.history.len() > MAX_HISTORY {
                self.history.remove(0);
            }
        }
        self.history_index = None;
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Step back to an older line (Up arrow).
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_index = Some(idx);
        self.set_text(self.history[idx].clone());
    }

    /// Step forward to a newer line (Down arrow); past the newest clears.
    pub fn history_next(&mut self) {
        let Some(i) = self.history_index else {
            return;
        };
        if i + 1 >= self.history.len() {
            self.history_index = None;
            self.set_text(String::new());
        } else {
            self.history_index = Some(i + 1);
            self.set_text(self.history[i + 1].clone());
        }
    }

    // -- Completion --

    /// Complete the word being typed. Repeated calls cycle through the
    /// candidates. Returns `false` when nothing matches.
    pub fn complete(&mut self) -> bool {
        if let Some(c) = self.completion.as_mut() {
            if c.applied == self.text && c.candidates.len() > 1 {
                c.index = (c.index + 1) % c.candidates.len();
                let text = format!("{}{} ", c.head, c.candidates[c.index]);
                c.applied = text.clone();
                let state = self.completion.take();
                self.set_text(text);
                self.completion = state;
                return true;
            }
        }

        let (head, word) = match self.text.rfind(' ') {
            Some(i) => (&self.text[..=i], &self.text[i + 1..]),
            None => ("", self.text.as_str()),
        };
        let words: Vec<&str> = head.split_whitespace().collect();
        let pool: Vec<&'static str> = match words.as_slice() {
            [] => known_names(),
            [cmd] if cmd.eq_ignore_ascii_case("open") => PROJECTS.iter().map(|p| p.key).collect(),
            _ => Vec::new(),
        };
        let needle = word.to_lowercase();
        let candidates: Vec<&'static str> = pool
            .into_iter()
            .filter(|c| c.starts_with(&needle) && *c != needle)
            .collect();
        if candidates.is_empty() {
            return false;
        }

        let head = head.to_string();
        let text = format!("{head}{} ", candidates[0]);
        self.set_text(text.clone());
        self.completion = Some(Completion {
            head,
            candidates,
            index: 0,
            applied: text,
        });
        true
    }
}
