//! Token expansion - turns one personal-input token into its surface variants.

use indexmap::IndexSet;

/// Maximum number of variants kept for a single token, case forms included.
pub const MAX_VARIANTS_PER_TOKEN: usize = 64;

/// Look-alike replacements, keyed by lowercase character.
///
/// Every replacement is a single character so variants keep the token's length.
pub const SUBSTITUTIONS: &[(char, &[char])] = &[
    ('a', &['@', '4']),
    ('b', &['8']),
    ('e', &['3']),
    ('g', &['9']),
    ('i', &['1', '!']),
    ('l', &['1']),
    ('o', &['0']),
    ('s', &['5', '$']),
    ('t', &['7']),
    ('z', &['2']),
];

fn substitutes(c: char) -> Option<&'static [char]> {
    SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Normalizes a trimmed token, returning `None` when it is unusable
/// (empty, or containing control characters).
pub fn normalize_token(raw: &str) -> Option<&str> {
    let token = raw.trim();
    if token.is_empty() || token.chars().any(char::is_control) {
        return None;
    }
    Some(token)
}

/// Expands a token into its ordered variant set.
///
/// Order: identity, lowercase, uppercase, capitalized, then substitution
/// forms of the lowercase token by ascending number of substituted
/// characters. Duplicates are dropped and the set is capped at
/// [`MAX_VARIANTS_PER_TOKEN`].
pub fn expand_token(token: &str, leet: bool) -> Vec<String> {
    let token = token.trim();
    if token.is_empty() {
        return Vec::new();
    }

    let lower = lowercase(token);
    let mut variants = IndexSet::new();
    for form in [token.to_string(), lower.clone(), uppercase(token), capitalize(token)] {
        variants.insert(form);
    }

    if leet {
        for variant in Substitutions::new(&lower) {
            if variants.len() >= MAX_VARIANTS_PER_TOKEN {
                break;
            }
            variants.insert(variant);
        }
    }

    variants.into_iter().take(MAX_VARIANTS_PER_TOKEN).collect()
}

/// Applies a case mapping only where it yields exactly one character,
/// so `ß` stays `ß` and `İ` stays `İ`.
fn map_char<I: Iterator<Item = char>>(c: char, mapped: I) -> char {
    let mut mapped = mapped;
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

fn lowercase(token: &str) -> String {
    token.chars().map(|c| map_char(c, c.to_lowercase())).collect()
}

fn uppercase(token: &str) -> String {
    token.chars().map(|c| map_char(c, c.to_uppercase())).collect()
}

/// First character uppercased, the rest lowercased.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => std::iter::once(map_char(first, first.to_uppercase()))
            .chain(chars.map(|c| map_char(c, c.to_lowercase())))
            .collect(),
        None => String::new(),
    }
}

/// Lazily enumerates substitution forms of a word.
///
/// Forms with `k` substitutions are produced before forms with `k + 1`.
/// Within one `k`, position sets are visited in lexicographic
/// (left-to-right) order and each position's substitutes in table order.
/// Nothing beyond the current combination is held in memory.
struct Substitutions {
    chars: Vec<char>,
    /// Indices into `chars` that have at least one substitute.
    positions: Vec<usize>,
    /// Current number of substituted characters.
    k: usize,
    /// Current combination, as indices into `positions`.
    combination: Vec<usize>,
    /// Substitute choice per entry of `combination`.
    choices: Vec<usize>,
    exhausted: bool,
}

impl Substitutions {
    fn new(word: &str) -> Self {
        let chars: Vec<char> = word.chars().collect();
        let positions: Vec<usize> = chars
            .iter()
            .enumerate()
            .filter(|(_, c)| substitutes(**c).is_some())
            .map(|(i, _)| i)
            .collect();
        let exhausted = positions.is_empty();
        Self {
            chars,
            positions,
            k: 1,
            combination: vec![0],
            choices: vec![0],
            exhausted,
        }
    }

    fn options(&self, slot: usize) -> &'static [char] {
        self.combination
            .get(slot)
            .and_then(|p| self.positions.get(*p))
            .and_then(|i| self.chars.get(*i))
            .and_then(|c| substitutes(*c))
            .unwrap_or(&[])
    }

    fn render(&self) -> String {
        let mut out = self.chars.clone();
        for (slot, position) in self.combination.iter().enumerate() {
            let options = self.options(slot);
            let choice = self.choices.get(slot).copied().unwrap_or(0);
            if let (Some(index), Some(replacement)) =
                (self.positions.get(*position), options.get(choice))
            {
                if let Some(c) = out.get_mut(*index) {
                    *c = *replacement;
                }
            }
        }
        out.into_iter().collect()
    }

    /// Advances the substitute choices like an odometer, rightmost first.
    fn next_choice(&mut self) -> bool {
        for slot in (0..self.choices.len()).rev() {
            let limit = self.options(slot).len();
            if let Some(choice) = self.choices.get_mut(slot) {
                if *choice + 1 < limit {
                    *choice += 1;
                    return true;
                }
                *choice = 0;
            }
        }
        false
    }

    /// Advances to the next k-combination of positions in lexicographic order.
    fn next_combination(&mut self) -> bool {
        let n = self.positions.len();
        let k = self.combination.len();
        for slot in (0..k).rev() {
            let max_for_slot = n - k + slot;
            if self.combination[slot] < max_for_slot {
                self.combination[slot] += 1;
                for later in slot + 1..k {
                    self.combination[later] = self.combination[later - 1] + 1;
                }
                return true;
            }
        }
        false
    }

    fn next_k(&mut self) -> bool {
        if self.k >= self.positions.len() {
            return false;
        }
        self.k += 1;
        self.combination = (0..self.k).collect();
        self.choices = vec![0; self.k];
        true
    }
}

impl Iterator for Substitutions {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }
        let current = self.render();

        if !self.next_choice() {
            self.choices.iter_mut().for_each(|c| *c = 0);
            if !self.next_combination() && !self.next_k() {
                self.exhausted = true;
            }
        }

        Some(current)
    }
}
