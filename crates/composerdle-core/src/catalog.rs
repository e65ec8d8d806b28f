//! Catalog records, guesses and the daily puzzle answer.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable composer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComposerId(pub i64);

impl fmt::Display for ComposerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Work identifier, unique within its owning composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkId(pub i64);

impl fmt::Display for WorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A composer as supplied by the candidate provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composer {
    /// Composer identifier.
    pub id: ComposerId,
    /// Display name, e.g. "Johann Sebastian Bach".
    pub full_name: String,
}

/// A work as supplied by the candidate provider, scoped by composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    /// Work identifier.
    pub id: WorkId,
    /// Owning composer.
    pub composer_id: ComposerId,
    /// Opus or catalog number without its prefix, e.g. "1007".
    pub opus: String,
    /// Number within the opus; negative values are treated as absent.
    #[serde(default)]
    pub opus_number: Option<i64>,
    /// Title of the work.
    pub title: String,
}

/// A fully resolved two-part guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    /// The guessed composer.
    pub composer: Composer,
    /// The guessed work by that composer.
    pub work: Work,
}

/// The correct answer for the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleAnswer {
    /// Composer of the answer.
    pub composer_id: ComposerId,
    /// The answer work.
    pub work: Work,
}

impl PuzzleAnswer {
    /// Whether `composer_id` is the answer's composer.
    #[must_use]
    pub fn is_composer(&self, composer_id: ComposerId) -> bool {
        self.composer_id == composer_id
    }

    /// Whether `guess` names exactly this answer.
    ///
    /// Two pairs are equal when both the composer identifier and the work
    /// identifier match; labels and titles are not compared.
    #[must_use]
    pub fn matches(&self, guess: &Guess) -> bool {
        self.is_composer(guess.composer.id) && self.work.id == guess.work.id
    }
}

/// How a submitted guess compares with the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessVerdict {
    /// Composer and work both match.
    Solved,
    /// The composer matches, the work does not.
    ComposerCorrect,
    /// The composer does not match.
    Missed,
}

impl GuessVerdict {
    /// Judges `guess` against `answer`. A missing answer (still loading or
    /// failed) judges every guess as [`GuessVerdict::Missed`].
    #[must_use]
    pub fn judge(answer: Option<&PuzzleAnswer>, guess: &Guess) -> Self {
        match answer {
            Some(answer) if answer.matches(guess) => Self::Solved,
            Some(answer) if answer.is_composer(guess.composer.id) => Self::ComposerCorrect,
            _ => Self::Missed,
        }
    }

    /// Whether the composer half of the guess was right.
    #[must_use]
    pub fn composer_correct(self) -> bool {
        matches!(self, Self::Solved | Self::ComposerCorrect)
    }
}

/// Prefix used for works whose composer has no catalog override.
pub const DEFAULT_CATALOG_PREFIX: &str = "Op. ";

/// Static lookup of composer-specific catalog prefixes ("BWV ", "K. ", ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogPrefixes(BTreeMap<ComposerId, String>);

impl CatalogPrefixes {
    /// Creates a lookup from `(composer, prefix)` pairs.
    pub fn new(entries: impl IntoIterator<Item = (ComposerId, String)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Returns the override for `composer_id`, or [`DEFAULT_CATALOG_PREFIX`].
    #[must_use]
    pub fn prefix_for(&self, composer_id: ComposerId) -> &str {
        self.0
            .get(&composer_id)
            .map_or(DEFAULT_CATALOG_PREFIX, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bach() -> Composer {
        Composer {
            id: ComposerId(1),
            full_name: "Johann Sebastian Bach".to_owned(),
        }
    }

    fn work(id: i64) -> Work {
        Work {
            id: WorkId(id),
            composer_id: ComposerId(1),
            opus: "1007".to_owned(),
            opus_number: None,
            title: "Cello Suite No. 1".to_owned(),
        }
    }

    fn answer() -> PuzzleAnswer {
        PuzzleAnswer {
            composer_id: ComposerId(1),
            work: work(10),
        }
    }

    #[test]
    fn test_matches_compares_identifiers_not_titles() {
        let mut renamed = work(10);
        renamed.title = "Suite for Cello".to_owned();
        let guess = Guess {
            composer: bach(),
            work: renamed,
        };

        assert!(answer().matches(&guess));
    }

    #[test]
    fn test_judge_distinguishes_three_verdicts() {
        let solved = Guess {
            composer: bach(),
            work: work(10),
        };
        let wrong_work = Guess {
            composer: bach(),
            work: work(11),
        };
        let wrong_composer = Guess {
            composer: Composer {
                id: ComposerId(2),
                full_name: "Wolfgang Amadeus Mozart".to_owned(),
            },
            work: work(10),
        };

        assert_eq!(GuessVerdict::judge(Some(&answer()), &solved), GuessVerdict::Solved);
        assert_eq!(
            GuessVerdict::judge(Some(&answer()), &wrong_work),
            GuessVerdict::ComposerCorrect
        );
        assert_eq!(
            GuessVerdict::judge(Some(&answer()), &wrong_composer),
            GuessVerdict::Missed
        );
    }

    #[test]
    fn test_judge_without_answer_is_missed() {
        let guess = Guess {
            composer: bach(),
            work: work(10),
        };

        let verdict = GuessVerdict::judge(None, &guess);

        assert_eq!(verdict, GuessVerdict::Missed);
        assert!(!verdict.composer_correct());
    }

    #[test]
    fn test_prefix_for_falls_back_to_opus() {
        let prefixes = CatalogPrefixes::new([(ComposerId(1), "BWV ".to_owned())]);

        assert_eq!(prefixes.prefix_for(ComposerId(1)), "BWV ");
        assert_eq!(prefixes.prefix_for(ComposerId(2)), "Op. ");
    }

    #[test]
    fn test_catalog_prefixes_deserialize_from_string_keys() {
        let prefixes: CatalogPrefixes =
            serde_json::from_str(r#"{ "1": "BWV ", "7": "K. " }"#).unwrap();

        assert_eq!(prefixes.prefix_for(ComposerId(7)), "K. ");
    }
}
