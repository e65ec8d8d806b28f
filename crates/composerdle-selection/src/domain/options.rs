//! Option-list derivation for the composer and work stages.
//!
//! Option lists are never patched in place: every stage change recomputes
//! the whole list from the provider data through [`derive_options`].

use std::cmp::Ordering;

use composerdle_core::catalog::{CatalogPrefixes, Composer, ComposerId, Work};
use composerdle_core::provider::RequestStatus;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// A composer or work projected for display in the selection input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Identifier of the composer or work.
    pub value: i64,
    /// Display label.
    pub label: String,
    /// Confirmed correct for its stage; cannot be removed by the user.
    #[serde(default)]
    pub is_fixed: bool,
}

impl ChoiceOption {
    /// Creates a removable option.
    pub fn new(value: i64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            is_fixed: false,
        }
    }

    /// Returns this option locked in place.
    #[must_use]
    pub fn fixed(self) -> Self {
        Self {
            is_fixed: true,
            ..self
        }
    }
}

/// Which list the input is currently offering, with the data it needs.
#[derive(Debug, Clone, Copy)]
pub enum OptionStage<'a> {
    /// No composer committed yet.
    Composer {
        /// State of the composer-list request.
        composers: &'a RequestStatus<Vec<Composer>>,
    },
    /// A composer is committed; offer its works.
    Work {
        /// The committed composer.
        composer_id: ComposerId,
        /// State of that composer's work-list request, if one was made.
        works: Option<&'a RequestStatus<Vec<Work>>>,
    },
}

/// Derives the selectable options for `stage`.
///
/// Pending or failed requests yield an empty list.
#[must_use]
pub fn derive_options(stage: OptionStage<'_>, prefixes: &CatalogPrefixes) -> Vec<ChoiceOption> {
    match stage {
        OptionStage::Composer { composers } => composers
            .ready()
            .map(|composers| composer_options(composers))
            .unwrap_or_default(),
        OptionStage::Work { composer_id, works } => works
            .and_then(RequestStatus::ready)
            .map(|works| work_options(composer_id, works, prefixes))
            .unwrap_or_default(),
    }
}

/// Maps composers to options sorted alphabetically by display name.
#[must_use]
pub fn composer_options(composers: &[Composer]) -> Vec<ChoiceOption> {
    let mut options: Vec<ChoiceOption> = composers
        .iter()
        .map(|composer| ChoiceOption::new(composer.id.0, composer.full_name.clone()))
        .collect();
    options.sort_by(|a, b| compare_labels(&a.label, &b.label));
    options
}

/// Maps works to options in provider order.
#[must_use]
pub fn work_options(
    composer_id: ComposerId,
    works: &[Work],
    prefixes: &CatalogPrefixes,
) -> Vec<ChoiceOption> {
    let prefix = prefixes.prefix_for(composer_id);
    works
        .iter()
        .map(|work| ChoiceOption::new(work.id.0, work_label(prefix, work)))
        .collect()
}

/// Renders `(<prefix><opus>[ #<number>]) <title>`.
///
/// Any non-negative number is shown, `#0` included; only negative numbers
/// are omitted.
#[must_use]
pub fn work_label(prefix: &str, work: &Work) -> String {
    match work.opus_number.filter(|number| *number >= 0) {
        Some(number) => format!("({prefix}{} #{number}) {}", work.opus, work.title),
        None => format!("({prefix}{}) {}", work.opus, work.title),
    }
}

/// Orders labels the way a reader expects a name index to be ordered.
///
/// Labels are compared on their canonical decomposition, so precomposed and
/// decomposed spellings of a name sort alike. Base letters decide first,
/// then accents (unaccented first), then case (lowercase first). The raw
/// text breaks any remaining tie.
#[must_use]
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    CollationKey::new(a)
        .cmp(&CollationKey::new(b))
        .then_with(|| a.cmp(b))
}

/// Three-level sort key. Field order is comparison order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    base: String,
    accents: String,
    uppercase: Vec<bool>,
}

impl CollationKey {
    fn new(label: &str) -> Self {
        let mut key = Self {
            base: String::with_capacity(label.len()),
            accents: String::with_capacity(label.len()),
            uppercase: Vec::with_capacity(label.len()),
        };
        for c in label.nfd() {
            if is_combining_mark(c) {
                key.accents.push(c);
                continue;
            }
            key.uppercase.push(c.is_uppercase());
            for lower in c.to_lowercase() {
                key.accents.push(lower);
                match base_letter(lower) {
                    Some(base) => key.base.push_str(base),
                    None => key.base.push(lower),
                }
            }
        }
        key
    }
}

/// Letters with a built-in stroke or ligature have no canonical
/// decomposition.
fn base_letter(c: char) -> Option<&'static str> {
    match c {
        'ø' => Some("o"),
        'ł' => Some("l"),
        'đ' => Some("d"),
        'ħ' => Some("h"),
        'ß' => Some("ss"),
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        _ => None,
    }
}
