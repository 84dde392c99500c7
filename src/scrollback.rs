//! Append-only history of everything printed to the terminal.

/// Stable identity of a scrollback entry. Never reused, even after `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

/// What produced an entry; only used to pick a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// The prompt plus the line the user submitted.
    Echo,
    /// Regular command output.
    Output,
    /// Unknown command or a link that failed to open.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub kind: EntryKind,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct Scrollback {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Scrollback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry and return its id.
    pub fn push(&mut self, kind: EntryKind, text: impl Into<String>) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    /// Append a multi-line block, one entry per line, in order.
    pub fn push_block<I, S>(&mut self, kind: EntryKind, block: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in block {
            self.push(kind, line);
        }
    }

    /// Drop every entry. Ids keep counting up.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: EntryId) -> bool {
        // Ids are pushed in increasing order.
        self.entries.binary_search_by_key(&id, |e| e.id).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_order() {
        let mut sb = Scrollback::new();
        sb.push(EntryKind::Echo, "a");
        sb.push_block(EntryKind::Output, ["b", "c"]);
        let texts: Vec<&str> = sb.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
        assert_eq!(sb.entries()[1].kind, EntryKind::Output);
    }

    #[test]
    fn ids_survive_clear() {
        let mut sb = Scrollback::new();
        let first = sb.push(EntryKind::Output, "x");
        sb.clear();
        assert!(sb.is_empty());
        assert!(!sb.contains(first));
        let second = sb.push(EntryKind::Output, "y");
        assert!(second > first);
        assert!(sb.contains(second));
        assert_eq!(sb.len(), 1);
    }
}
