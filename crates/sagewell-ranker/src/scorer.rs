//! Per-passage relevance score.
//!
//! score = title + content + Σ keyword + Σ semantic, clamped to `cap`.
//! All matching is case-insensitive substring comparison.

use crate::corpus::Passage;
use crate::semantic::SemanticTable;
use crate::weights::ScoreWeights;

/// Breakdown of the signals that fired for one passage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub title_hit: bool,
    pub content_hit: bool,
    pub keyword_hits: usize,
    /// Covered keyword count for each synonym group the query triggers, in
    /// table order.
    pub semantic_hits: Vec<usize>,
}

impl ScoreBreakdown {
    pub fn score(&self, weights: &ScoreWeights) -> f64 {
        let mut raw = 0.0;
        if self.title_hit {
            raw += weights.title;
        }
        if self.content_hit {
            raw += weights.content;
        }
        raw += self.keyword_hits as f64 * weights.keyword;
        for hits in &self.semantic_hits {
            raw += *hits as f64 * weights.semantic;
        }
        raw.clamp(0.0, weights.cap)
    }
}

/// Collect which signals match `query` against `passage`.
pub fn breakdown(query: &str, passage: &Passage, table: &SemanticTable) -> ScoreBreakdown {
    let q = query.to_lowercase();

    let title_hit = passage.title.to_lowercase().contains(&q);
    let content_hit = passage.content.to_lowercase().contains(&q);

    let keyword_hits = passage
        .keywords
        .iter()
        .map(|k| k.to_lowercase())
        .filter(|k| k.contains(&q) || q.contains(k.as_str()))
        .count();

    let semantic_hits = table
        .triggered_by(&q)
        .map(|entry| passage.keywords.iter().filter(|k| entry.covers(k)).count())
        .collect();

    ScoreBreakdown { title_hit, content_hit, keyword_hits, semantic_hits }
}

/// Relevance of `passage` for `query`, in `[0, weights.cap]`.
pub fn relevance(query: &str, passage: &Passage, table: &SemanticTable, weights: &ScoreWeights) -> f64 {
    breakdown(query, passage, table).score(weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    fn score(query: &str, id: &str) -> f64 {
        let corpus = Corpus::classics();
        let passage = corpus.get(id).unwrap();
        relevance(query, passage, &SemanticTable::standard(), &ScoreWeights::default())
    }

    #[test]
    fn test_keyword_and_semantic_on_learning() {
        // passage 1: keyword 学习 (+0.1); 学习 group covers 学习 and 修养 (+0.05 each)
        let s = score("学习", "1");
        assert!((s - 0.2).abs() < 1e-9, "got {s}");
    }

    #[test]
    fn test_title_match_adds_at_least_point_three() {
        let s = score("学而", "1");
        assert!(s >= 0.3);
    }

    #[test]
    fn test_content_and_title_and_keyword() {
        // "道" is in title of 2, in its content, and equals its keyword "道"
        let b = breakdown("道", Corpus::classics().get("2").unwrap(), &SemanticTable::standard());
        assert!(b.title_hit);
        assert!(b.content_hit);
        assert_eq!(b.keyword_hits, 1);
        assert!((b.score(&ScoreWeights::default()) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_query_containing_keyword_counts() {
        // query contains keyword 竞争 of passage 8
        let b = breakdown("商业竞争策略", Corpus::classics().get("8").unwrap(), &SemanticTable::standard());
        assert_eq!(b.keyword_hits, 1);
    }

    #[test]
    fn test_score_is_clamped() {
        let b = ScoreBreakdown { title_hit: true, content_hit: true, keyword_hits: 5, semantic_hits: vec![4] };
        assert_eq!(b.score(&ScoreWeights::default()), 1.0);
    }

    #[test]
    fn test_case_insensitive() {
        let corpus = Corpus::new(vec![Passage {
            id: "x".into(),
            title: "The Art of War".into(),
            content: "All warfare is based on deception.".into(),
            source: "sunzi".into(),
            source_name: "Sunzi".into(),
            category: "military".into(),
            category_name: "Military".into(),
            keywords: vec!["Strategy".into()],
            composed: -500,
        }])
        .unwrap();
        let p = corpus.get("x").unwrap();
        let b = breakdown("WAR", p, &SemanticTable::standard());
        assert!(b.title_hit);
        assert!(b.content_hit);
        assert_eq!(breakdown("strategy", p, &SemanticTable::standard()).keyword_hits, 1);
    }

    #[test]
    fn test_semantic_groups_accumulate_separately() {
        // 修养 triggers the 学习 and 品德 groups, 关系 triggers 朋友
        let b = breakdown("修养关系", Corpus::classics().get("1").unwrap(), &SemanticTable::standard());
        assert_eq!(b.keyword_hits, 1);
        assert_eq!(b.semantic_hits, vec![2, 1, 1]);
        assert_eq!(b.score(&ScoreWeights::default()), 0.1 + 0.1 + 0.05 + 0.05);
        assert_eq!(score("修养关系", "1"), 0.3);
    }

    #[test]
    fn test_no_match_scores_zero() {
        assert_eq!(score("量子计算", "3"), 0.0);
    }
}
