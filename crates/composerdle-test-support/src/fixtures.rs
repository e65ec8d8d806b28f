//! The small Bach/Mozart catalog most tests play against.
//!
//! Composer 1 (Bach) owns works 10 and 11, composer 2 (Mozart) owns work 20.
//! The answer is Bach's work 10.

use composerdle_core::catalog::{
    CatalogPrefixes, Composer, ComposerId, Guess, PuzzleAnswer, Work, WorkId,
};

/// Bach's identifier.
pub const BACH: ComposerId = ComposerId(1);
/// Mozart's identifier.
pub const MOZART: ComposerId = ComposerId(2);
/// The answer work.
pub const CELLO_SUITE: WorkId = WorkId(10);
/// A second Bach work that is not the answer.
pub const GOLDBERG: WorkId = WorkId(11);
/// A Mozart work.
pub const REQUIEM: WorkId = WorkId(20);

/// Composers in deliberately non-alphabetical provider order.
#[must_use]
pub fn composers() -> Vec<Composer> {
    vec![
        Composer {
            id: MOZART,
            full_name: "Mozart".to_owned(),
        },
        Composer {
            id: BACH,
            full_name: "Bach".to_owned(),
        },
    ]
}

/// Works of `composer_id`; empty for unknown composers.
#[must_use]
pub fn works(composer_id: ComposerId) -> Vec<Work> {
    match composer_id {
        BACH => vec![cello_suite(), goldberg()],
        MOZART => vec![Work {
            id: REQUIEM,
            composer_id: MOZART,
            opus: "626".to_owned(),
            opus_number: None,
            title: "Requiem".to_owned(),
        }],
        _ => Vec::new(),
    }
}

/// Bach's cello suite, the answer work.
#[must_use]
pub fn cello_suite() -> Work {
    Work {
        id: CELLO_SUITE,
        composer_id: BACH,
        opus: "1007".to_owned(),
        opus_number: Some(1),
        title: "Cello Suite".to_owned(),
    }
}

/// Bach's Goldberg variations.
#[must_use]
pub fn goldberg() -> Work {
    Work {
        id: GOLDBERG,
        composer_id: BACH,
        opus: "988".to_owned(),
        opus_number: None,
        title: "Goldberg Variations".to_owned(),
    }
}

/// The round's answer: Bach, cello suite.
#[must_use]
pub fn answer() -> PuzzleAnswer {
    PuzzleAnswer {
        composer_id: BACH,
        work: cello_suite(),
    }
}

/// The guess that solves the round.
#[must_use]
pub fn winning_guess() -> Guess {
    Guess {
        composer: Composer {
            id: BACH,
            full_name: "Bach".to_owned(),
        },
        work: cello_suite(),
    }
}

/// Bach uses BWV numbers; Mozart falls back to the default prefix.
#[must_use]
pub fn prefixes() -> CatalogPrefixes {
    CatalogPrefixes::new([(BACH, "BWV ".to_owned())])
}
