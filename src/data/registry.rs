//! Signal registry: the editable (name, sequence) rows and their snapshot.

/// One editable form row. Both fields hold raw text exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalRow {
    pub name: String,
    pub sequence: String,
}

impl SignalRow {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }

    /// A row takes part in a snapshot only when both fields are non-empty.
    /// Whitespace is not trimmed.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.sequence.is_empty()
    }
}

/// A named bit sequence captured by [`SignalRegistry::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalEntry {
    pub name: String,
    pub sequence: String,
}

impl SignalEntry {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }
}

impl From<&SignalRow> for SignalEntry {
    fn from(row: &SignalRow) -> Self {
        Self {
            name: row.name.clone(),
            sequence: row.sequence.clone(),
        }
    }
}

/// Ordered list of editable rows. Row index is the lane index in the diagram.
///
/// Rows can only be appended; there is no delete or reorder.
#[derive(Debug, Clone, Default)]
pub struct SignalRegistry {
    rows: Vec<SignalRow>,
}

impl SignalRegistry {
    /// An empty registry with no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-seeded with `count` empty rows.
    pub fn with_rows(count: usize) -> Self {
        let mut registry = Self::new();
        for _ in 0..count {
            registry.add_row();
        }
        registry
    }

    /// Append one empty row at the end.
    pub fn add_row(&mut self) {
        self.rows.push(SignalRow::default());
        log::debug!("Added signal row, {} rows total", self.rows.len());
    }

    pub fn rows(&self) -> &[SignalRow] {
        &self.rows
    }

    /// Mutable access for the form widgets. The slice cannot grow or shrink.
    pub fn rows_mut(&mut self) -> &mut [SignalRow] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Copy out every complete row, in input order. Incomplete rows are
    /// silently skipped.
    pub fn snapshot(&self) -> Vec<SignalEntry> {
        self.rows
            .iter()
            .filter(|row| row.is_complete())
            .map(SignalEntry::from)
            .collect()
    }
}
