//! Candidate combination - lazily crosses variants, separators and years.
//!
//! Candidates come out in three stages, highest-value guesses first:
//!
//! 1. every variant alone, token by token;
//! 2. for every ordered pair of distinct tokens `(i, j)`, every
//!    `left + separator + right` join;
//! 3. every variant with every year, appended then prepended.
//!
//! Nothing is materialized: the iterator builds one string per `next()`
//! and stops as soon as the consumer stops pulling.

/// Borrowed view over the inputs of one generation run.
#[derive(Debug, Clone, Copy)]
pub struct Combiner<'a> {
    variants: &'a [Vec<String>],
    separators: &'a [String],
    years: &'a [String],
}

impl<'a> Combiner<'a> {
    /// `variants` holds one variant set per surviving token, in token order.
    pub fn new(variants: &'a [Vec<String>], separators: &'a [String], years: &'a [String]) -> Self {
        Self {
            variants,
            separators,
            years,
        }
    }

    /// Stage 1: each variant alone.
    pub fn singles(self) -> impl Iterator<Item = String> + 'a {
        self.variants.iter().flatten().cloned()
    }

    /// Stage 2: joins of variants from two distinct tokens.
    pub fn pairs(self) -> impl Iterator<Item = String> + 'a {
        let variants = self.variants;
        let separators = self.separators;
        variants.iter().enumerate().flat_map(move |(i, left_set)| {
            variants
                .iter()
                .enumerate()
                .filter(move |(j, _)| *j != i)
                .flat_map(move |(_, right_set)| {
                    left_set.iter().flat_map(move |left| {
                        right_set.iter().flat_map(move |right| {
                            separators.iter().map(move |sep| join(&[left, sep, right]))
                        })
                    })
                })
        })
    }

    /// Stage 3: each variant with each year, `variant + year` then `year + variant`.
    pub fn with_years(self) -> impl Iterator<Item = String> + 'a {
        let years = self.years;
        self.variants.iter().flatten().flat_map(move |variant| {
            years
                .iter()
                .flat_map(move |year| [join(&[variant, year]), join(&[year, variant])])
        })
    }

    /// All candidates in priority order.
    pub fn candidates(self) -> impl Iterator<Item = String> + 'a {
        self.singles().chain(self.pairs()).chain(self.with_years())
    }

    /// Upper bound on the number of candidates, before deduplication.
    pub fn upper_bound(self) -> u128 {
        let sizes: Vec<u128> = self.variants.iter().map(|v| v.len() as u128).collect();
        let total: u128 = sizes.iter().sum();
        let pairs: u128 = sizes.iter().map(|s| s * (total - s)).sum();
        total + pairs * self.separators.len() as u128 + 2 * total * self.years.len() as u128
    }
}

fn join(parts: &[&String]) -> String {
    let len = parts.iter().map(|p| p.len()).sum();
    let mut out = String::with_capacity(len);
    for part in parts {
        out.push_str(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_singles_in_token_then_variant_order() {
        let variants = vec![owned(&["a", "A"]), owned(&["b"])];
        let seps = owned(&[""]);
        let combiner = Combiner::new(&variants, &seps, &[]);
        assert_eq!(combiner.singles().collect::<Vec<_>>(), vec!["a", "A", "b"]);
    }

    #[test]
    fn test_pairs_skip_same_token_and_cover_both_directions() {
        let variants = vec![owned(&["a", "A"]), owned(&["b"])];
        let seps = owned(&["", "-"]);
        let combiner = Combiner::new(&variants, &seps, &[]);
        assert_eq!(
            combiner.pairs().collect::<Vec<_>>(),
            vec!["ab", "a-b", "Ab", "A-b", "ba", "b-a", "bA", "b-A"]
        );
    }

    #[test]
    fn test_years_appended_then_prepended() {
        let variants = vec![owned(&["x"])];
        let seps = owned(&[""]);
        let years = owned(&["2010", "2011"]);
        let combiner = Combiner::new(&variants, &seps, &years);
        assert_eq!(
            combiner.with_years().collect::<Vec<_>>(),
            vec!["x2010", "2010x", "x2011", "2011x"]
        );
    }

    #[test]
    fn test_candidates_stage_order() {
        let variants = vec![owned(&["john"]), owned(&["soccer"])];
        let seps = owned(&[""]);
        let years = owned(&["2010"]);
        let all: Vec<String> = Combiner::new(&variants, &seps, &years).candidates().collect();
        assert_eq!(
            all,
            vec![
                "john", "soccer", "johnsoccer", "soccerjohn",
                "john2010", "2010john", "soccer2010", "2010soccer",
            ]
        );
    }

    #[test]
    fn test_single_token_has_no_pairs() {
        let variants = vec![owned(&["solo", "SOLO"])];
        let seps = owned(&["", "_"]);
        let combiner = Combiner::new(&variants, &seps, &[]);
        assert_eq!(combiner.pairs().count(), 0);
    }

    #[test]
    fn test_lazy_take_on_huge_product() {
        let big: Vec<String> = (0..64).map(|i| format!("v{i}")).collect();
        let variants = vec![big.clone(); 200];
        let seps = owned(&["", "_", "-", "."]);
        let combiner = Combiner::new(&variants, &seps, &[]);
        assert!(combiner.upper_bound() > 100_000_000);
        let taken: Vec<String> = combiner.candidates().take(10).collect();
        assert_eq!(taken.len(), 10);
        assert_eq!(taken[0], "v0");
    }

    #[test]
    fn test_upper_bound_matches_count() {
        let variants = vec![owned(&["a", "A"]), owned(&["b"]), owned(&["c", "C", "ç"])];
        let seps = owned(&["", "."]);
        let years = owned(&["1999"]);
        let combiner = Combiner::new(&variants, &seps, &years);
        assert_eq!(combiner.upper_bound(), combiner.candidates().count() as u128);
    }
}
