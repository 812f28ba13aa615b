//! Question selection.
//!
//! Draws a bounded random sample of questions for each technology token.
//! The random source is owned by the selector so a seeded selector gives
//! the same questions for the same input every time.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::bank::QuestionBank;

/// Default lower bound on questions per technology.
pub const MIN_QUESTIONS: usize = 4;

/// Default upper bound on questions per technology.
pub const MAX_QUESTIONS: usize = 5;

/// Key used when no technologies were supplied.
pub const NO_TECHNOLOGIES_KEY: &str = "general";

const NO_TECHNOLOGIES_MESSAGE: &str = "Please specify some technologies to generate questions for.";

/// What to do when a known bank holds fewer questions than the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndersizedBankPolicy {
    /// Repeat the bank until the minimum is reachable; duplicates may appear.
    #[default]
    Repeat,
    /// Return every available question once, even if fewer than the minimum.
    Truncate,
}

/// Bounds applied to each technology's sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionLimits {
    pub min: usize,
    pub max: usize,
    pub undersized: UndersizedBankPolicy,
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self {
            min: MIN_QUESTIONS,
            max: MAX_QUESTIONS,
            undersized: UndersizedBankPolicy::default(),
        }
    }
}

/// Questions selected for one technology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechQuestions {
    pub technology: String,
    pub questions: Vec<String>,
}

/// Questions per technology, in the order the technologies were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet {
    sections: Vec<TechQuestions>,
}

impl QuestionSet {
    /// Returns the questions for a technology.
    pub fn get(&self, technology: &str) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|section| section.technology == technology)
            .map(|section| section.questions.as_slice())
    }

    pub fn technologies(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.technology.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TechQuestions> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    // A repeated token keeps its first position and takes the latest sample.
    fn insert(&mut self, technology: String, questions: Vec<String>) {
        match self
            .sections
            .iter_mut()
            .find(|section| section.technology == technology)
        {
            Some(section) => section.questions = questions,
            None => self.sections.push(TechQuestions {
                technology,
                questions,
            }),
        }
    }
}

/// Samples questions from a [`QuestionBank`] with an owned random source.
#[derive(Debug, Clone)]
pub struct QuestionSelector<R = StdRng> {
    bank: Arc<QuestionBank>,
    limits: SelectionLimits,
    rng: R,
}

impl QuestionSelector<StdRng> {
    /// Creates a selector whose sampling is reproducible for a given seed.
    pub fn seeded(bank: Arc<QuestionBank>, limits: SelectionLimits, seed: u64) -> Self {
        Self::with_rng(bank, limits, StdRng::seed_from_u64(seed))
    }

    /// Creates a selector seeded from the operating system.
    pub fn from_entropy(bank: Arc<QuestionBank>, limits: SelectionLimits) -> Self {
        Self::with_rng(bank, limits, StdRng::from_entropy())
    }

    /// Resets the random source; subsequent selections repeat those made after
    /// any earlier reseed with the same value.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

impl<R: Rng> QuestionSelector<R> {
    pub fn with_rng(bank: Arc<QuestionBank>, limits: SelectionLimits, rng: R) -> Self {
        Self { bank, limits, rng }
    }

    pub fn limits(&self) -> SelectionLimits {
        self.limits
    }

    /// Selects questions for each technology token, in input order.
    ///
    /// An empty token list yields a single [`NO_TECHNOLOGIES_KEY`] entry.
    pub fn select(&mut self, technologies: &[String]) -> QuestionSet {
        let mut set = QuestionSet::default();

        let techs: Vec<String> = technologies
            .iter()
            .map(|tech| tech.trim().to_lowercase())
            .filter(|tech| !tech.is_empty())
            .collect();

        if techs.is_empty() {
            set.insert(
                NO_TECHNOLOGIES_KEY.to_string(),
                vec![NO_TECHNOLOGIES_MESSAGE.to_string()],
            );
            return set;
        }

        for tech in techs {
            let questions = self.questions_for(&tech);
            set.insert(tech, questions);
        }
        set
    }

    fn questions_for(&mut self, tech: &str) -> Vec<String> {
        let bank = Arc::clone(&self.bank);
        let sampled = match bank.lookup(tech) {
            Some(questions) if questions.len() >= self.limits.min => {
                let count = self.draw_count(questions.len());
                self.sample_distinct(questions, count)
            }
            Some(questions) => self.sample_undersized(questions),
            None => {
                let generic = generic_questions(tech);
                let count = self.draw_count(generic.len());
                self.sample_distinct(&generic, count)
            }
        };

        sampled
            .into_iter()
            .map(|question| format!("[{}] {}", tech, question))
            .collect()
    }

    // Uniform in [min, min(max, available)]; `available` is never below min here
    // except for the generic pool when min is configured above five.
    fn draw_count(&mut self, available: usize) -> usize {
        let upper = self.limits.max.min(available);
        let lower = self.limits.min.min(upper);
        self.rng.gen_range(lower..=upper)
    }

    fn sample_distinct(&mut self, pool: &[String], count: usize) -> Vec<String> {
        index::sample(&mut self.rng, pool.len(), count)
            .into_iter()
            .map(|i| pool[i].clone())
            .collect()
    }

    fn sample_undersized(&mut self, questions: &[String]) -> Vec<String> {
        match self.limits.undersized {
            UndersizedBankPolicy::Repeat => {
                let copies = self.limits.min / questions.len() + 1;
                let pool: Vec<String> = questions
                    .iter()
                    .cycle()
                    .take(questions.len() * copies)
                    .cloned()
                    .collect();
                self.sample_distinct(&pool, self.limits.min)
            }
            UndersizedBankPolicy::Truncate => self.sample_distinct(questions, questions.len()),
        }
    }
}

fn generic_questions(tech: &str) -> Vec<String> {
    vec![
        format!("Describe core concepts and common pitfalls when working with {}.", tech),
        format!("What are best practices when using {} in production?", tech),
        format!("How would you troubleshoot performance issues in {}?", tech),
        format!("How do you handle scaling and optimization in {}?", tech),
        format!("Explain debugging and monitoring techniques for {}.", tech),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn techs(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn selector(seed: u64) -> QuestionSelector {
        QuestionSelector::seeded(Arc::new(QuestionBank::builtin()), SelectionLimits::default(), seed)
    }

    mod known_technologies {
        use super::*;

        #[test]
        fn returns_four_or_five_distinct_prefixed_questions() {
            let mut selector = selector(42);
            let set = selector.select(&techs(&["python"]));
            let questions = set.get("python").unwrap();

            assert!((4..=5).contains(&questions.len()));
            let unique: HashSet<&String> = questions.iter().collect();
            assert_eq!(unique.len(), questions.len());
            assert!(questions.iter().all(|q| q.starts_with("[python] ")));
        }

        #[test]
        fn questions_come_from_the_bank() {
            let bank = QuestionBank::builtin();
            let mut selector = selector(7);
            let set = selector.select(&techs(&["docker"]));
            let known = bank.lookup("docker").unwrap();

            for question in set.get("docker").unwrap() {
                let text = question.trim_start_matches("[docker] ");
                assert!(known.iter().any(|k| k == text), "{}", question);
            }
        }
    }

    mod unknown_technologies {
        use super::*;

        #[test]
        fn synthesizes_generic_questions_naming_the_token() {
            let mut selector = selector(1);
            let set = selector.select(&techs(&["someobscuretech"]));
            let questions = set.get("someobscuretech").unwrap();

            assert!((4..=5).contains(&questions.len()));
            assert!(questions.iter().all(|q| q.contains("someobscuretech")));
            let unique: HashSet<&String> = questions.iter().collect();
            assert_eq!(unique.len(), questions.len());
        }
    }

    mod input_handling {
        use super::*;

        #[test]
        fn empty_input_returns_sentinel_entry() {
            let mut selector = selector(3);
            let set = selector.select(&[]);

            assert_eq!(set.len(), 1);
            assert_eq!(
                set.get(NO_TECHNOLOGIES_KEY).unwrap(),
                &[NO_TECHNOLOGIES_MESSAGE.to_string()]
            );
        }

        #[test]
        fn preserves_declaration_order() {
            let mut selector = selector(5);
            let set = selector.select(&techs(&["react", "elixir", "sql"]));
            let order: Vec<&str> = set.technologies().collect();
            assert_eq!(order, vec!["react", "elixir", "sql"]);
        }

        #[test]
        fn repeated_token_appears_once() {
            let mut selector = selector(5);
            let set = selector.select(&techs(&["aws", "aws"]));
            assert_eq!(set.len(), 1);
        }

        #[test]
        fn tokens_are_normalized_before_lookup() {
            let mut selector = selector(9);
            let set = selector.select(&techs(&["  Flask "]));
            assert!(set.get("flask").unwrap()[0].starts_with("[flask] "));
        }
    }

    mod undersized_banks {
        use super::*;

        fn small_bank() -> Arc<QuestionBank> {
            Arc::new(QuestionBank::empty().with_entry(
                "rust",
                vec!["What is ownership?".to_string(), "What is a lifetime?".to_string()],
            ))
        }

        #[test]
        fn repeat_policy_reaches_the_minimum_with_duplicates() {
            let mut selector =
                QuestionSelector::seeded(small_bank(), SelectionLimits::default(), 11);
            let set = selector.select(&techs(&["rust"]));
            let questions = set.get("rust").unwrap();

            assert_eq!(questions.len(), MIN_QUESTIONS);
            let unique: HashSet<&String> = questions.iter().collect();
            assert!(unique.len() <= 2);
        }

        #[test]
        fn truncate_policy_returns_each_question_once() {
            let limits = SelectionLimits {
                undersized: UndersizedBankPolicy::Truncate,
                ..Default::default()
            };
            let mut selector = QuestionSelector::seeded(small_bank(), limits, 11);
            let set = selector.select(&techs(&["rust"]));
            let questions = set.get("rust").unwrap();

            assert_eq!(questions.len(), 2);
            assert_ne!(questions[0], questions[1]);
        }
    }

    mod seeding {
        use super::*;

        #[test]
        fn same_seed_gives_identical_sets() {
            let list = techs(&["python", "django", "kotlin"]);
            let mut selector = selector(0);

            selector.reseed(42);
            let first = selector.select(&list);
            selector.reseed(42);
            let second = selector.select(&list);

            assert_eq!(first, second);
        }

        #[test]
        fn independent_selectors_with_same_seed_agree() {
            let list = techs(&["linux", "go"]);
            assert_eq!(selector(99).select(&list), selector(99).select(&list));
        }
    }

    proptest! {
        #[test]
        fn counts_stay_within_bounds(seed in any::<u64>(), tech in "[a-z]{1,12}") {
            let mut selector = selector(seed);
            let set = selector.select(&[tech.clone()]);
            let count = set.get(&tech).unwrap().len();
            prop_assert!((MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count));
        }
    }
}
