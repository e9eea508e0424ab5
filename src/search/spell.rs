//! Dictionary-backed spelling correction for free-text queries.
//!
//! A delete-neighborhood (SymSpell-style) index over a domain-bounded word
//! list: every dictionary word pre-computes its delete variants up to the
//! maximum edit distance, so lookup per token needs no scan of the full list.
//! Tokens that look like codes rather than words (acronyms, short uppercase
//! runs, vowel-free strings) are never corrected.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use tracing::debug;

/// Correction language. German has no word list wired up yet; tokens pass
/// through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    De,
}

/// How many suggestions replace a misspelled token.
const MAX_SUGGESTIONS: usize = 2;

const MAX_EDIT_DISTANCE: usize = 2;
const PREFIX_LENGTH: usize = 7;

static ACRONYM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]{2,}$").expect("acronym pattern"));

/// True when a token should be treated as a code, not an English word:
/// an uppercase/digit acronym, a short fully-uppercase token, or a token
/// without any vowel.
pub fn looks_like_code(token: &str) -> bool {
    ACRONYM.is_match(token)
        || (token.chars().count() <= 4 && token == token.to_uppercase())
        || !token
            .chars()
            .any(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
}

/// A word-list spellchecker with pre-computed delete neighborhoods.
/// Build once, read-only afterwards; safe to share across threads.
pub struct SpellChecker {
    words: HashMap<String, u32>,
    deletes: HashMap<String, Vec<String>>,
    max_edit_distance: usize,
    prefix_length: usize,
}

impl SpellChecker {
    /// Build a checker from `(word, frequency)` pairs. Higher frequency wins
    /// ties between equally-distant suggestions.
    pub fn new(entries: &[(&str, u32)], max_edit_distance: usize, prefix_length: usize) -> Self {
        let mut words = HashMap::new();
        let mut deletes: HashMap<String, Vec<String>> = HashMap::new();

        for &(word, freq) in entries {
            let w = word.to_lowercase();
            for variant in generate_deletes(&w, max_edit_distance, prefix_length) {
                deletes.entry(variant).or_default().push(w.clone());
            }
            words.insert(w, freq);
        }

        SpellChecker {
            words,
            deletes,
            max_edit_distance,
            prefix_length,
        }
    }

    /// Build a checker over the bundled engineering vocabulary.
    pub fn with_default_vocabulary() -> Self {
        SpellChecker::new(DEFAULT_VOCABULARY, MAX_EDIT_DISTANCE, PREFIX_LENGTH)
    }

    /// Whether the word is spelled correctly (present in the word list).
    pub fn is_correct(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Ranked correction candidates for a word: closest edit distance first,
    /// then higher frequency, then alphabetical. Empty when nothing is within
    /// the maximum edit distance.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        let w = word.to_lowercase();

        let mut variants = generate_deletes(&w, self.max_edit_distance, self.prefix_length);
        let prefix: String = w.chars().take(self.prefix_length).collect();
        variants.push(prefix);

        let mut candidates: HashSet<&str> = HashSet::new();
        for variant in &variants {
            if self.words.contains_key(variant) {
                candidates.insert(variant);
            }
            if let Some(originals) = self.deletes.get(variant) {
                candidates.extend(originals.iter().map(String::as_str));
            }
        }

        let mut ranked: Vec<(usize, u32, &str)> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let distance = strsim::damerau_levenshtein(&w, candidate);
                (distance <= self.max_edit_distance).then(|| {
                    let freq = self.words.get(candidate).copied().unwrap_or(0);
                    (distance, freq, candidate)
                })
            })
            .collect();
        ranked.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)).then(a.2.cmp(b.2)));
        ranked.into_iter().map(|(_, _, c)| c.to_string()).collect()
    }

    /// Expand a token list through spelling correction: code-like tokens and
    /// correctly spelled words pass through; a misspelled word is replaced by
    /// its top suggestions (the misspelled original is dropped, so free-text
    /// typos are never matched literally).
    pub fn correct_words(&self, tokens: &[String]) -> Vec<String> {
        let mut expanded = Vec::with_capacity(tokens.len());
        for token in tokens {
            if looks_like_code(token) || self.is_correct(token) {
                expanded.push(token.clone());
                continue;
            }
            let suggestions: Vec<String> =
                self.suggest(token).into_iter().take(MAX_SUGGESTIONS).collect();
            debug!(token = %token, ?suggestions, "spell suggestions");
            expanded.extend(suggestions);
        }
        expanded
    }
}

/// Process-wide checker over the bundled vocabulary, built on first use and
/// immutable afterwards.
pub fn default_checker() -> &'static SpellChecker {
    static CHECKER: OnceLock<SpellChecker> = OnceLock::new();
    CHECKER.get_or_init(SpellChecker::with_default_vocabulary)
}

/// Spell-correct a token list in the given language. English uses the
/// process-wide checker; German is not wired up and returns its input
/// unchanged.
pub fn correct_words(tokens: &[String], lang: Lang) -> Vec<String> {
    match lang {
        Lang::En => default_checker().correct_words(tokens),
        Lang::De => tokens.to_vec(),
    }
}

/// All delete variants of a word within `max_distance`, considering only the
/// first `prefix_length` characters.
fn generate_deletes(word: &str, max_distance: usize, prefix_length: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let effective_len = chars.len().min(prefix_length);
    if effective_len == 0 {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut seen = HashSet::new();
    let mut queue: Vec<String> = vec![chars[..effective_len].iter().collect()];

    for _ in 0..max_distance {
        let mut next_queue = Vec::new();
        for current in &queue {
            let current_chars: Vec<char> = current.chars().collect();
            for i in 0..current_chars.len() {
                let deleted: String = current_chars
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, c)| *c)
                    .collect();
                if !deleted.is_empty() && seen.insert(deleted.clone()) {
                    result.push(deleted.clone());
                    next_queue.push(deleted);
                }
            }
        }
        queue = next_queue;
    }

    result
}

/// Bundled word list: measurement and controls vocabulary plus enough common
/// English to keep everyday words from being "corrected" into domain terms.
#[rustfmt::skip]
static DEFAULT_VOCABULARY: &[(&str, u32)] = &[
    // Physical quantities and units
    ("temperature", 100), ("pressure", 100), ("voltage", 100), ("current", 100),
    ("torque", 90), ("speed", 100), ("velocity", 70), ("acceleration", 70),
    ("angle", 80), ("position", 90), ("distance", 70), ("frequency", 80),
    ("ratio", 80), ("gradient", 70), ("offset", 80), ("factor", 80),
    ("time", 100), ("duration", 70), ("delay", 70), ("level", 90),
    ("mass", 60), ("flow", 80), ("volume", 70), ("density", 60),
    ("energy", 70), ("power", 80), ("resistance", 60), ("capacity", 60),
    ("percent", 60), ("quantity", 60), ("temp", 80),
    // Bounds and statistics
    ("maximum", 100), ("minimum", 100), ("limit", 100), ("limits", 60),
    ("threshold", 90), ("range", 80), ("mean", 60), ("average", 60),
    ("nominal", 70), ("default", 70), ("actual", 80), ("desired", 70),
    ("target", 80), ("raw", 70), ("filtered", 60), ("sample", 60),
    ("upper", 60), ("lower", 60), ("absolute", 60), ("relative", 60),
    // Components and actuators
    ("sensor", 100), ("actuator", 80), ("engine", 90), ("motor", 90),
    ("valve", 90), ("pump", 80), ("filter", 90), ("battery", 80),
    ("brake", 80), ("clutch", 70), ("gear", 80), ("wheel", 80),
    ("pedal", 70), ("throttle", 80), ("turbine", 60), ("cylinder", 70),
    ("camshaft", 60), ("crankshaft", 60), ("manifold", 60), ("injector", 60),
    ("catalyst", 60), ("lambda", 60), ("heater", 60), ("cooler", 50),
    ("fan", 50), ("relay", 50), ("switch", 70), ("display", 60),
    // Media and environment
    ("air", 80), ("fuel", 90), ("oil", 80), ("water", 80),
    ("coolant", 70), ("exhaust", 70), ("intake", 70), ("ambient", 70),
    ("boost", 60), ("charge", 70), ("vehicle", 80), ("environment", 50),
    // States and operations
    ("state", 90), ("status", 90), ("mode", 80), ("signal", 100),
    ("value", 100), ("control", 100), ("request", 80), ("demand", 70),
    ("command", 70), ("response", 60), ("error", 90), ("fault", 80),
    ("warning", 70), ("diagnosis", 70), ("calibration", 70), ("adaptation", 60),
    ("correction", 60), ("compensation", 50), ("regulation", 60), ("monitoring", 60),
    ("measurement", 70), ("counter", 70), ("timer", 60), ("flag", 70),
    ("enable", 70), ("disable", 60), ("active", 70), ("inactive", 50),
    ("idle", 60), ("start", 70), ("stop", 70), ("reset", 70),
    ("ignition", 70), ("injection", 70), ("emergency", 50), ("reserve", 50),
    ("check", 70), ("test", 70), ("release", 60), ("version", 60),
    ("number", 70), ("index", 60), ("identifier", 60), ("label", 80),
    ("keyword", 80), ("abbreviation", 70), ("extension", 70), ("physical", 70),
    ("logical", 70), ("domain", 60), ("valid", 70), ("obsolete", 60),
    // Common English guard words: without these, everyday words would be
    // pulled toward nearby domain terms.
    ("the", 100), ("that", 100), ("this", 100), ("then", 80), ("than", 80),
    ("there", 80), ("these", 80), ("those", 80), ("them", 80), ("they", 80),
    ("what", 80), ("when", 80), ("where", 80), ("which", 80), ("while", 60),
    ("with", 80), ("without", 60), ("from", 80), ("for", 80), ("and", 100),
    ("not", 80), ("all", 80), ("any", 60), ("some", 60), ("same", 60),
    ("other", 60), ("more", 60), ("most", 60), ("over", 60), ("under", 60),
    ("about", 60), ("after", 60), ("before", 60), ("between", 60),
    ("into", 60), ("only", 60), ("also", 60), ("just", 60), ("very", 60),
    ("have", 80), ("has", 60), ("had", 60), ("was", 60), ("were", 60),
    ("will", 60), ("would", 60), ("could", 60), ("should", 60),
    ("find", 80), ("show", 70), ("give", 60), ("take", 60), ("make", 60),
    ("used", 60), ("use", 70), ("new", 60), ("old", 50), ("high", 70),
    ("low", 70), ("open", 60), ("closed", 60), ("left", 60), ("right", 60),
    ("front", 60), ("rear", 60), ("inner", 50), ("outer", 50),
];
