//! Fixed synonym expansion table.
//!
//! A query that mentions a canonical term, or any of its synonyms, earns
//! partial credit for passage keywords drawn from the same group even when the
//! keyword itself never appears in the query.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub term: &'static str,
    pub synonyms: &'static [&'static str],
}

impl Entry {
    /// True when the (lowercased) query mentions the term or a synonym.
    pub fn triggered_by(&self, query: &str) -> bool {
        query.contains(self.term) || self.synonyms.iter().any(|s| query.contains(s))
    }

    /// True when a passage keyword belongs to this group.
    pub fn covers(&self, keyword: &str) -> bool {
        keyword == self.term || self.synonyms.contains(&keyword)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SemanticTable {
    entries: &'static [Entry],
}

const STANDARD: &[Entry] = &[
    Entry { term: "困难", synonyms: &["挫折", "艰难", "问题", "障碍"] },
    Entry { term: "成功", synonyms: &["胜利", "成就", "达成", "实现"] },
    Entry { term: "领导", synonyms: &["管理", "治理", "统治", "指导"] },
    Entry { term: "学习", synonyms: &["教育", "知识", "智慧", "修养"] },
    Entry { term: "朋友", synonyms: &["友谊", "关系", "交往", "社交"] },
    Entry { term: "商业", synonyms: &["生意", "经商", "贸易", "经营"] },
    Entry { term: "品德", synonyms: &["道德", "品格", "修养", "德行"] },
];

impl SemanticTable {
    pub fn standard() -> Self {
        Self { entries: STANDARD }
    }

    /// Entries the query activates, in table order.
    pub fn triggered_by<'q>(&self, query: &'q str) -> impl Iterator<Item = &'static Entry> + 'q {
        let entries: &'static [Entry] = self.entries;
        entries.iter().filter(move |e| e.triggered_by(query))
    }
}

impl Default for SemanticTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_and_synonym_both_trigger() {
        let table = SemanticTable::standard();
        let by_term: Vec<_> = table.triggered_by("如何面对困难").map(|e| e.term).collect();
        assert_eq!(by_term, vec!["困难"]);

        let by_synonym: Vec<_> = table.triggered_by("遇到挫折").map(|e| e.term).collect();
        assert_eq!(by_synonym, vec!["困难"]);
    }

    #[test]
    fn test_shared_synonym_triggers_two_groups() {
        // 修养 sits in both the 学习 and 品德 groups
        let terms: Vec<_> = SemanticTable::standard().triggered_by("修养").map(|e| e.term).collect();
        assert_eq!(terms, vec!["学习", "品德"]);
    }

    #[test]
    fn test_covers() {
        let entry = STANDARD[0];
        assert!(entry.covers("困难"));
        assert!(entry.covers("问题"));
        assert!(!entry.covers("成功"));
    }

    #[test]
    fn test_unrelated_query_triggers_nothing() {
        assert_eq!(SemanticTable::standard().triggered_by("天气").count(), 0);
    }
}
