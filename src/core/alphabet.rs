//! Turkish alphabet tables
//!
//! Point values and tile scarcity limits for the 29-letter Turkish alphabet.
//! Both tables are built once and shared read-only for the process lifetime.

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Wildcard marker accepted in letter input (a blank tile)
pub const WILDCARD: char = '*';

/// (letter, points, scarcity limit) in alphabet order
const TURKISH_TABLE: [(char, u32, u32); 29] = [
    ('a', 1, 12),
    ('b', 3, 2),
    ('c', 4, 2),
    ('ç', 4, 2),
    ('d', 3, 2),
    ('e', 1, 8),
    ('f', 7, 1),
    ('g', 5, 1),
    ('ğ', 8, 1),
    ('h', 5, 1),
    ('ı', 2, 4),
    ('i', 1, 7),
    ('j', 10, 1),
    ('k', 1, 7),
    ('l', 1, 7),
    ('m', 2, 4),
    ('n', 1, 5),
    ('o', 2, 3),
    ('ö', 7, 1),
    ('p', 5, 1),
    ('r', 1, 6),
    ('s', 2, 3),
    ('ş', 4, 2),
    ('t', 1, 5),
    ('u', 2, 3),
    ('ü', 3, 2),
    ('v', 7, 1),
    ('y', 3, 2),
    ('z', 4, 2),
];

static TURKISH: LazyLock<Alphabet> = LazyLock::new(|| Alphabet::from_table(&TURKISH_TABLE));

/// Letter point values and scarcity limits
///
/// Letters missing from the tables are worth 0 points and may appear 0 times.
#[derive(Debug, Clone)]
pub struct Alphabet {
    order: Vec<char>,
    points: FxHashMap<char, u32>,
    limits: FxHashMap<char, u32>,
}

impl Alphabet {
    fn from_table(table: &[(char, u32, u32)]) -> Self {
        let mut points = FxHashMap::default();
        let mut limits = FxHashMap::default();
        let mut order = Vec::with_capacity(table.len());

        for &(letter, value, limit) in table {
            order.push(letter);
            points.insert(letter, value);
            limits.insert(letter, limit);
        }

        Self {
            order,
            points,
            limits,
        }
    }

    /// The process-wide Turkish alphabet
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::Alphabet;
    ///
    /// let alphabet = Alphabet::turkish();
    /// assert_eq!(alphabet.points('j'), 10);
    /// assert_eq!(alphabet.limit('a'), 12);
    /// assert_eq!(alphabet.points('q'), 0);
    /// ```
    #[must_use]
    pub fn turkish() -> &'static Self {
        &TURKISH
    }

    /// Point value of a letter (0 if unknown)
    #[inline]
    #[must_use]
    pub fn points(&self, letter: char) -> u32 {
        self.points.get(&letter).copied().unwrap_or(0)
    }

    /// Maximum occurrences of a letter in one word (0 if unknown)
    #[inline]
    #[must_use]
    pub fn limit(&self, letter: char) -> u32 {
        self.limits.get(&letter).copied().unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.points.contains_key(&letter)
    }

    /// Letters in alphabet order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.order.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Lowercase text with Turkish casing rules
///
/// Dotless `I` maps to `ı` and dotted `İ` maps to `i`; every other character
/// uses its Unicode lowercase mapping. Already-lowercase input is unchanged.
///
/// # Examples
/// ```
/// use word_finder::core::normalize;
///
/// assert_eq!(normalize("IŞIK"), "ışık");
/// assert_eq!(normalize("İSTANBUL"), "istanbul");
/// assert_eq!(normalize("ka*"), "ka*");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(ch.to_lowercase()),
        }
    }
    out
}
