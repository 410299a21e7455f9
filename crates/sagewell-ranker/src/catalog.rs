//! Static search metadata: suggested queries plus category and source facets.

use serde::{Deserialize, Serialize};

use crate::corpus::Corpus;
use crate::filters::ALL;

pub const SUGGESTIONS: &[&str] = &[
    "如何面对困难",
    "领导力智慧",
    "人际关系处理",
    "商业经营之道",
    "修身养性方法",
    "学习的重要性",
    "诚信的价值",
    "战略思维",
];

const ALL_CATEGORIES: &str = "全部分类";
const ALL_SOURCES: &str = "全部典籍";

/// Display order of the category facets.
const CATEGORY_ORDER: &[&str] = &["philosophy", "politics", "military", "business", "cultivation", "relationships"];

/// Display order of the source facets.
const SOURCE_ORDER: &[&str] = &["analects", "tao", "sunzi", "daxue", "zhongyong", "mencius", "shiji"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub id: String,
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub suggestions: Vec<String>,
    pub categories: Vec<Facet>,
    pub sources: Vec<Facet>,
    pub total_items: usize,
}

impl Catalog {
    /// Derive the catalog once from the corpus. Facets are led by an `all` facet
    /// counting the whole corpus, then follow the fixed display order; codes
    /// outside that order come last, in first-appearance order.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let passages = corpus.passages();
        let categories = facets(
            ALL_CATEGORIES,
            CATEGORY_ORDER,
            passages.len(),
            passages.iter().map(|p| (p.category.as_str(), p.category_name.as_str())),
        );
        let sources = facets(
            ALL_SOURCES,
            SOURCE_ORDER,
            passages.len(),
            passages.iter().map(|p| (p.source.as_str(), p.source_name.as_str())),
        );

        Self {
            suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            categories,
            sources,
            total_items: corpus.len(),
        }
    }
}

fn facets<'a>(
    all_name: &str,
    order: &[&str],
    total: usize,
    codes: impl Iterator<Item = (&'a str, &'a str)>,
) -> Vec<Facet> {
    let mut found: Vec<Facet> = Vec::new();
    for (code, name) in codes {
        match found.iter_mut().find(|f| f.id == code) {
            Some(facet) => facet.count += 1,
            None => found.push(Facet { id: code.to_string(), name: name.to_string(), count: 1 }),
        }
    }
    // stable, so unlisted codes keep first-appearance order
    found.sort_by_key(|f| order.iter().position(|o| *o == f.id).unwrap_or(order.len()));

    let mut out = vec![Facet { id: ALL.to_string(), name: all_name.to_string(), count: total }];
    out.extend(found);
    out
}
