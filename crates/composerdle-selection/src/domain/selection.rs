//! The two-entry selection and its transition function.
//!
//! Entry 0 is the composer, entry 1 the work. [`apply_selection_change`] is
//! pure: it computes the next selection without touching options, requests
//! or placeholders, which the engine derives from the returned
//! [`Transition`].

use serde::Serialize;

use super::options::ChoiceOption;

/// Maximum number of entries: one composer and one work.
pub const MAX_SELECTION_LEN: usize = 2;

/// An ordered selection of at most two options, fixed entries first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection(Vec<ChoiceOption>);

impl Selection {
    /// The empty selection.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The selected entries, composer first.
    #[must_use]
    pub fn entries(&self) -> &[ChoiceOption] {
        &self.0
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a composer and a work are both selected.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.len() == MAX_SELECTION_LEN
    }

    /// The composer entry.
    #[must_use]
    pub fn composer(&self) -> Option<&ChoiceOption> {
        self.0.first()
    }

    /// The work entry.
    #[must_use]
    pub fn work(&self) -> Option<&ChoiceOption> {
        self.0.get(1)
    }

    /// Number of locked entries.
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.0.iter().filter(|entry| entry.is_fixed).count()
    }

    /// Collapses to the composer entry alone, locked.
    ///
    /// Returns `None` for an empty selection.
    #[must_use]
    pub fn lock_composer(&self) -> Option<Self> {
        self.composer()
            .map(|composer| Self(vec![composer.clone().fixed()]))
    }
}

/// A user edit to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// Append an option.
    Add(ChoiceOption),
    /// Remove the entry at `position`.
    Remove {
        /// Zero-based position in the selection.
        position: usize,
    },
    /// Remove the last entry.
    Pop,
}

/// Result of applying a [`SelectionChange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The change was refused; the selection is unchanged.
    Rejected,
    /// Nothing is selected any more.
    Emptied,
    /// Exactly one entry, the composer, remains.
    ComposerChosen(Selection),
    /// A composer and a work are selected.
    PairChosen(Selection),
}

/// Applies `change` to `selection`.
///
/// Removing a fixed entry, or a position that does not exist, is rejected.
/// Removing the composer clears the selection. Adding a third entry
/// replaces the work and keeps the composer.
#[must_use]
pub fn apply_selection_change(selection: &Selection, change: SelectionChange) -> Transition {
    let mut entries = selection.0.clone();

    match change {
        SelectionChange::Add(option) => {
            entries.push(option);
            if entries.len() > MAX_SELECTION_LEN {
                let added = entries.remove(MAX_SELECTION_LEN);
                entries[MAX_SELECTION_LEN - 1] = added;
            }
        }
        SelectionChange::Remove { position } => match entries.get(position) {
            // A work without its composer is meaningless, so dropping the
            // composer drops everything.
            Some(entry) if !entry.is_fixed && position == 0 => entries.clear(),
            Some(entry) if !entry.is_fixed => {
                entries.remove(position);
            }
            _ => return Transition::Rejected,
        },
        SelectionChange::Pop => match entries.last() {
            Some(entry) if entry.is_fixed => return Transition::Rejected,
            Some(_) => {
                entries.pop();
            }
            None => {}
        },
    }

    if entries.is_empty() {
        return Transition::Emptied;
    }

    let ordered = fixed_first(entries);
    if ordered.len() == 1 {
        Transition::ComposerChosen(ordered)
    } else {
        Transition::PairChosen(ordered)
    }
}

/// Stable partition: fixed entries keep their relative order ahead of the rest.
fn fixed_first(entries: Vec<ChoiceOption>) -> Selection {
    let (mut fixed, rest): (Vec<_>, Vec<_>) = entries.into_iter().partition(|e| e.is_fixed);
    fixed.extend(rest);
    Selection(fixed)
}
