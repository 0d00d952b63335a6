//! No-repeat-until-exhausted sampling over a [`Corpus`].
//!
//! # Algorithm
//!
//! 1. **Candidate pool**: quotes matching the active filter. If the filter
//!    matches nothing, the whole corpus is used instead.
//! 2. **Available pool**: candidates not in the shown-set.
//! 3. Non-empty available pool: pick one uniformly, record it, return it.
//! 4. Empty available pool (exhaustion): forget every candidate id, pick one
//!    uniformly from the candidates and return it *without* recording it.
//!    The returned quote may therefore come up again on the next draw.
//!
//! Only an empty corpus is an error.

use super::filter::CategoryFilter;
use super::random::RandomSource;
use super::shown_set::ShownSet;
use crate::core::error::DomainError;
use crate::corpus::Corpus;
use crate::quote::entities::Quote;

/// How a quote was obtained by [`Sampler::draw`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    /// Drawn from the unseen part of the pool and recorded as shown
    Fresh,
    /// The pool was exhausted; history was reset and the quote not recorded
    CycleReset,
}

/// Result of a single draw
#[derive(Debug, Clone, Copy)]
pub struct Draw<'a> {
    pub quote: &'a Quote,
    pub kind: DrawKind,
    /// Size of the candidate pool the quote was drawn from
    pub pool_size: usize,
    /// True when the active category matched nothing and the whole corpus
    /// was used as the candidate pool
    pub fell_back: bool,
}

/// Filter and shown-set state for one viewing session
#[derive(Debug, Clone, Default)]
pub struct Sampler {
    filter: CategoryFilter,
    shown: ShownSet,
}

impl Sampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or clear, with `None`) the active category.
    ///
    /// Always clears the shown-set, even when the value is unchanged.
    pub fn set_category(&mut self, category: Option<String>) {
        self.filter = CategoryFilter::from_label(category);
        self.shown.clear();
    }

    pub fn active_category(&self) -> Option<&str> {
        self.filter.label()
    }

    pub fn shown(&self) -> &ShownSet {
        &self.shown
    }

    /// Draw the next quote under the active filter.
    pub fn draw<'a>(
        &mut self,
        corpus: &'a Corpus,
        rng: &mut dyn RandomSource,
    ) -> Result<Draw<'a>, DomainError> {
        if corpus.is_empty() {
            return Err(DomainError::EmptyCorpus);
        }

        let mut candidates: Vec<&Quote> = corpus
            .quotes()
            .iter()
            .filter(|q| self.filter.matches(q))
            .collect();

        let fell_back = candidates.is_empty();
        if fell_back {
            candidates = corpus.quotes().iter().collect();
        }

        let available: Vec<&Quote> = candidates
            .iter()
            .copied()
            .filter(|q| !self.shown.contains(q.id.as_str()))
            .collect();

        if !available.is_empty() {
            let quote = available[pick_index(rng, available.len())];
            self.shown.record(quote.id.clone());
            return Ok(Draw {
                quote,
                kind: DrawKind::Fresh,
                pool_size: candidates.len(),
                fell_back,
            });
        }

        self.shown.forget(candidates.iter().map(|q| &q.id));
        let quote = candidates[pick_index(rng, candidates.len())];
        Ok(Draw {
            quote,
            kind: DrawKind::CycleReset,
            pool_size: candidates.len(),
            fell_back,
        })
    }
}

/// Clamp whatever the source returns into `0..len`
fn pick_index(rng: &mut dyn RandomSource, len: usize) -> usize {
    rng.pick(len).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::value_objects::QuoteId;
    use std::collections::{HashSet, VecDeque};

    // ==================== Test Helpers ====================

    /// Returns scripted indices, then falls back to the last element
    struct ScriptedRandom {
        picks: VecDeque<usize>,
    }

    impl ScriptedRandom {
        fn new(picks: &[usize]) -> Self {
            Self {
                picks: picks.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn pick(&mut self, len: usize) -> usize {
            self.picks.pop_front().unwrap_or(len - 1)
        }
    }

    /// Small deterministic LCG so property-style tests cover varied orders
    struct Lcg(u64);

    impl RandomSource for Lcg {
        fn pick(&mut self, len: usize) -> usize {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((self.0 >> 33) as usize) % len
        }
    }

    /// 5 quotes: 3 tagged "stoic", 2 untagged
    fn stoic_corpus() -> Corpus {
        Corpus::new(vec![
            Quote::new("s1", 1, "s1", "Seneca").with_category("stoic"),
            Quote::new("u1", 2, "u1", "Anon"),
            Quote::new("s2", 3, "s2", "Epictetus").with_category("stoic"),
            Quote::new("u2", 4, "u2", "Anon"),
            Quote::new("s3", 5, "s3", "Marcus Aurelius").with_category("stoic"),
        ])
    }

    fn numbered_corpus(n: usize) -> Corpus {
        Corpus::new(
            (0..n)
                .map(|i| Quote::new(format!("q-{}", i), i as i64, "c", "a"))
                .collect(),
        )
    }

    // ==================== Core Behavior ====================

    #[test]
    fn test_empty_corpus_is_error() {
        let mut sampler = Sampler::new();
        let corpus = Corpus::default();
        let result = sampler.draw(&corpus, &mut ScriptedRandom::new(&[]));
        assert_eq!(result.unwrap_err(), DomainError::EmptyCorpus);
    }

    #[test]
    fn test_fresh_draw_is_recorded() {
        let corpus = stoic_corpus();
        let mut sampler = Sampler::new();

        let draw = sampler.draw(&corpus, &mut ScriptedRandom::new(&[1])).unwrap();
        assert_eq!(draw.quote.id.as_str(), "u1");
        assert_eq!(draw.kind, DrawKind::Fresh);
        assert_eq!(draw.pool_size, 5);
        assert!(sampler.shown().contains("u1"));
    }

    #[test]
    fn test_no_repeat_until_exhausted() {
        for seed in 0..20 {
            let corpus = numbered_corpus(12);
            let mut sampler = Sampler::new();
            let mut rng = Lcg(seed);
            let mut seen = HashSet::new();

            for _ in 0..12 {
                let draw = sampler.draw(&corpus, &mut rng).unwrap();
                assert_eq!(draw.kind, DrawKind::Fresh);
                assert!(seen.insert(draw.quote.id.clone()), "seed {} repeated", seed);
            }
            assert_eq!(seen.len(), 12);
        }
    }

    #[test]
    fn test_exhaustion_resets_without_recording() {
        let corpus = numbered_corpus(3);
        let mut sampler = Sampler::new();
        let mut rng = ScriptedRandom::new(&[0, 0, 0, 2]);

        for _ in 0..3 {
            sampler.draw(&corpus, &mut rng).unwrap();
        }
        assert_eq!(sampler.shown().len(), 3);

        let draw = sampler.draw(&corpus, &mut rng).unwrap();
        assert_eq!(draw.kind, DrawKind::CycleReset);
        assert_eq!(draw.quote.id.as_str(), "q-2");
        assert!(sampler.shown().is_empty());
    }

    #[test]
    fn test_reset_quote_can_repeat_immediately() {
        let corpus = numbered_corpus(2);
        let mut sampler = Sampler::new();
        // q-0, q-1, then reset returning q-1, then fresh q-1 again
        let mut rng = ScriptedRandom::new(&[0, 0, 1, 1]);

        sampler.draw(&corpus, &mut rng).unwrap();
        sampler.draw(&corpus, &mut rng).unwrap();
        let reset = sampler.draw(&corpus, &mut rng).unwrap();
        let next = sampler.draw(&corpus, &mut rng).unwrap();

        assert_eq!(reset.kind, DrawKind::CycleReset);
        assert_eq!(next.kind, DrawKind::Fresh);
        assert_eq!(reset.quote.id, next.quote.id);
    }

    #[test]
    fn test_single_quote_corpus() {
        let corpus = numbered_corpus(1);
        let mut sampler = Sampler::new();
        let mut rng = Lcg(7);

        let first = sampler.draw(&corpus, &mut rng).unwrap();
        assert_eq!(first.quote.id.as_str(), "q-0");
        assert_eq!(first.kind, DrawKind::Fresh);

        for _ in 0..5 {
            let draw = sampler.draw(&corpus, &mut rng).unwrap();
            assert_eq!(draw.quote.id.as_str(), "q-0");
            assert_eq!(draw.kind, DrawKind::CycleReset);
            assert!(sampler.shown().is_empty());

            // The draw after a reset is fresh again and gets recorded
            let again = sampler.draw(&corpus, &mut rng).unwrap();
            assert_eq!(again.kind, DrawKind::Fresh);
            assert_eq!(sampler.shown().len(), 1);
        }
    }

    // ==================== Filtering ====================

    #[test]
    fn test_category_partition() {
        let corpus = stoic_corpus();
        let mut sampler = Sampler::new();
        sampler.set_category(Some("stoic".to_string()));
        let mut rng = Lcg(3);

        for _ in 0..10 {
            let draw = sampler.draw(&corpus, &mut rng).unwrap();
            assert!(draw.quote.has_category("stoic"));
            assert!(!draw.fell_back);
            assert_eq!(draw.pool_size, 3);
        }
    }

    #[test]
    fn test_stoic_cycle_then_reset() {
        let corpus = stoic_corpus();
        let mut sampler = Sampler::new();
        sampler.set_category(Some("stoic".to_string()));
        let mut rng = Lcg(11);

        let ids: HashSet<QuoteId> = (0..3)
            .map(|_| sampler.draw(&corpus, &mut rng).unwrap().quote.id.clone())
            .collect();
        let expected: HashSet<QuoteId> = ["s1", "s2", "s3"].into_iter().map(QuoteId::from).collect();
        assert_eq!(ids, expected);

        let fourth = sampler.draw(&corpus, &mut rng).unwrap();
        assert_eq!(fourth.kind, DrawKind::CycleReset);
        assert!(expected.contains(&fourth.quote.id));
    }

    #[test]
    fn test_unknown_category_falls_back_to_corpus() {
        let corpus = stoic_corpus();
        let mut sampler = Sampler::new();
        sampler.set_category(Some("nonexistent".to_string()));

        let draw = sampler.draw(&corpus, &mut ScriptedRandom::new(&[1])).unwrap();
        assert!(draw.fell_back);
        assert_eq!(draw.pool_size, 5);
        assert_eq!(draw.quote.id.as_str(), "u1");
    }

    #[test]
    fn test_set_category_clears_history_even_when_unchanged() {
        let corpus = stoic_corpus();
        let mut sampler = Sampler::new();
        let mut rng = Lcg(5);

        sampler.set_category(Some("stoic".to_string()));
        sampler.draw(&corpus, &mut rng).unwrap();
        sampler.draw(&corpus, &mut rng).unwrap();
        assert_eq!(sampler.shown().len(), 2);

        sampler.set_category(Some("stoic".to_string()));
        assert!(sampler.shown().is_empty());
        assert_eq!(sampler.active_category(), Some("stoic"));

        sampler.draw(&corpus, &mut rng).unwrap();
        sampler.set_category(None);
        assert!(sampler.shown().is_empty());
        assert_eq!(sampler.active_category(), None);
    }

    #[test]
    fn test_shown_set_stays_within_candidate_pool() {
        let corpus = stoic_corpus();
        let mut sampler = Sampler::new();
        sampler.set_category(Some("stoic".to_string()));
        let mut rng = Lcg(42);

        for _ in 0..20 {
            sampler.draw(&corpus, &mut rng).unwrap();
            for id in sampler.shown().iter() {
                assert!(corpus.get_by_id(id.as_str()).unwrap().has_category("stoic"));
            }
        }
    }

    #[test]
    fn test_out_of_range_pick_is_clamped() {
        let corpus = numbered_corpus(3);
        let mut sampler = Sampler::new();
        let draw = sampler.draw(&corpus, &mut ScriptedRandom::new(&[99])).unwrap();
        assert_eq!(draw.quote.id.as_str(), "q-2");
    }
}
