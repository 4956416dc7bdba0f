use super::action::Action;

/// Append-only record of everything that happened in a match.
///
/// Entries are never edited or removed. The last entry decides what the
/// Room solicits next.
#[derive(Debug, Clone, Default)]
pub struct History(Vec<Action>);

impl History {
    pub fn push(&mut self, action: Action) {
        self.0.push(action);
    }
    pub fn last(&self) -> Option<&Action> {
        self.0.last()
    }
    /// The standing claim: the last entry, if it is a discard.
    pub fn challengeable(&self) -> Option<&Action> {
        self.last().filter(|a| a.is_discard())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.0.iter()
    }
    /// Human-readable log lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.0.iter().map(Action::to_string).collect()
    }
}
