//! ATS (Applicant Tracking System) keyword overlap scoring
//!
//! A deliberately crude heuristic: the score measures how much of the job
//! description's vocabulary appears in the resume. No stemming, synonyms,
//! term weighting, or fuzzy matching.

use regex::Regex;
use std::collections::HashSet;

pub struct AtsScorer {
    word_regex: Regex,
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl AtsScorer {
    pub fn new() -> Self {
        let word_regex = Regex::new(r"\b\w+\b").expect("Invalid word regex");
        Self { word_regex }
    }

    /// Tokenize text into a case-folded set of word tokens. Set semantics:
    /// presence matters, frequency does not.
    pub fn tokenize(&self, text: &str) -> HashSet<String> {
        self.word_regex
            .find_iter(&text.to_lowercase())
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Compute the ATS score in [0, 100].
    ///
    /// Coverage ratio is |job ∩ resume| / |job tokens|; an empty job token
    /// set scores 0 rather than dividing by zero. The ratio is raised to the
    /// power 1.5 before scaling, which suppresses low-overlap scores more
    /// aggressively than linear matching.
    pub fn score(&self, resume_text: &str, job_text: &str) -> u8 {
        let job_tokens = self.tokenize(job_text);
        if job_tokens.is_empty() {
            return 0;
        }

        let resume_tokens = self.tokenize(resume_text);
        let matches = job_tokens.intersection(&resume_tokens).count();
        let ratio = matches as f64 / job_tokens.len() as f64;

        (ratio.powf(1.5) * 100.0).min(100.0).floor() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_job_description_scores_zero() {
        let scorer = AtsScorer::new();

        assert_eq!(scorer.score("experienced python developer", ""), 0);
        assert_eq!(scorer.score("experienced python developer", "   \n\t"), 0);
    }

    #[test]
    fn test_identical_texts_score_full() {
        let scorer = AtsScorer::new();
        let text = "senior rust engineer with five years of systems experience";

        assert_eq!(scorer.score(text, text), 100);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        let scorer = AtsScorer::new();

        assert_eq!(scorer.score("alpha beta gamma", "delta epsilon zeta"), 0);
    }

    #[test]
    fn test_partial_overlap_example() {
        let scorer = AtsScorer::new();

        // Job tokens {python, developer, needed}, resume tokens
        // {experienced, python, developer}: 2/3 coverage, (2/3)^1.5 * 100
        // floors to 54.
        let score = scorer.score("experienced python developer", "python developer needed");
        assert_eq!(score, 54);
    }

    #[test]
    fn test_score_is_bounded() {
        let scorer = AtsScorer::new();
        let cases = [
            ("", ""),
            ("rust", "rust rust rust rust"),
            ("a b c d e f g", "a"),
            ("the quick brown fox", "the quick brown fox jumps over"),
        ];

        for (resume, job) in cases {
            let score = scorer.score(resume, job);
            assert!(score <= 100, "score {} out of range for ({}, {})", score, resume, job);
        }
    }

    #[test]
    fn test_score_is_idempotent() {
        let scorer = AtsScorer::new();
        let resume = "data engineer building pipelines in rust and python";
        let job = "rust engineer needed for data pipelines";

        let first = scorer.score(resume, job);
        for _ in 0..5 {
            assert_eq!(scorer.score(resume, job), first);
        }
    }

    #[test]
    fn test_tokenize_case_folds_and_dedupes() {
        let scorer = AtsScorer::new();
        let tokens = scorer.tokenize("Rust rust RUST, python!");

        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("rust"));
        assert!(tokens.contains("python"));
    }

    #[test]
    fn test_duplicates_in_job_text_do_not_inflate() {
        let scorer = AtsScorer::new();

        // Repeated job keywords collapse to one token each.
        let repeated = scorer.score("python developer", "python python developer developer");
        let single = scorer.score("python developer", "python developer");
        assert_eq!(repeated, single);
        assert_eq!(single, 100);
    }
}
