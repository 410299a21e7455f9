//! Static classical-text corpus.
//!
//! Passages are loaded once at process start and never mutated afterwards.
//! Callers share a [`Corpus`] behind an `Arc` and hand `&Corpus` to the ranker.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sagewell_common::{Result, SagewellError};

/// One excerpt from a classical work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub id: String,
    /// Work + chapter, e.g. "论语·学而篇"
    pub title: String,
    pub content: String,
    /// Short code of the originating work, e.g. "analects"
    pub source: String,
    pub source_name: String,
    /// Short code of the topical grouping, e.g. "philosophy"
    pub category: String,
    pub category_name: String,
    /// Ordered topical keywords.
    pub keywords: Vec<String>,
    /// Traditional composition year of the source work (negative = BCE).
    pub composed: i32,
}

/// Immutable, id-unique collection of passages.
#[derive(Debug, Clone)]
pub struct Corpus {
    passages: Vec<Passage>,
}

impl Corpus {
    /// Build a corpus, rejecting empty or duplicate ids.
    pub fn new(passages: Vec<Passage>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(passages.len());
        for p in &passages {
            if p.id.is_empty() {
                return Err(SagewellError::Corpus(format!("passage '{}' has an empty id", p.title)));
            }
            if !seen.insert(p.id.as_str()) {
                return Err(SagewellError::Corpus(format!("duplicate passage id '{}'", p.id)));
            }
        }
        Ok(Self { passages })
    }

    /// The built-in twelve-passage corpus.
    pub fn classics() -> Self {
        let passages = CLASSICS.iter().map(Seed::to_passage).collect();
        Self { passages }
    }

    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Passage> {
        self.passages.iter().find(|p| p.id == id)
    }

    pub fn has_category(&self, code: &str) -> bool {
        self.passages.iter().any(|p| p.category == code)
    }

    pub fn has_source(&self, code: &str) -> bool {
        self.passages.iter().any(|p| p.source == code)
    }
}

// ── Built-in data ────────────────────────────────────────────────────────────

struct Work {
    code: &'static str,
    name: &'static str,
    composed: i32,
}

const ANALECTS: Work = Work { code: "analects", name: "论语", composed: -479 };
const TAO: Work = Work { code: "tao", name: "道德经", composed: -400 };
const SUNZI: Work = Work { code: "sunzi", name: "孙子兵法", composed: -500 };
const MENCIUS: Work = Work { code: "mencius", name: "孟子", composed: -300 };
const DAXUE: Work = Work { code: "daxue", name: "大学", composed: -436 };
const ZHONGYONG: Work = Work { code: "zhongyong", name: "中庸", composed: -402 };
const SHIJI: Work = Work { code: "shiji", name: "史记", composed: -91 };

struct Topic {
    code: &'static str,
    name: &'static str,
}

const PHILOSOPHY: Topic = Topic { code: "philosophy", name: "人生哲学" };
const MILITARY: Topic = Topic { code: "military", name: "军事战略" };
const POLITICS: Topic = Topic { code: "politics", name: "治国理政" };
const CULTIVATION: Topic = Topic { code: "cultivation", name: "修身养性" };
const BUSINESS: Topic = Topic { code: "business", name: "商业智慧" };
const RELATIONSHIPS: Topic = Topic { code: "relationships", name: "人际关系" };

struct Seed {
    id: &'static str,
    title: &'static str,
    content: &'static str,
    work: Work,
    topic: Topic,
    keywords: &'static [&'static str],
}

impl Seed {
    fn to_passage(&self) -> Passage {
        Passage {
            id: self.id.to_string(),
            title: self.title.to_string(),
            content: self.content.to_string(),
            source: self.work.code.to_string(),
            source_name: self.work.name.to_string(),
            category: self.topic.code.to_string(),
            category_name: self.topic.name.to_string(),
            keywords: self.keywords.iter().map(|k| k.to_string()).collect(),
            composed: self.work.composed,
        }
    }
}

const CLASSICS: &[Seed] = &[
    Seed {
        id: "1",
        title: "论语·学而篇",
        content: "子曰：\"学而时习之，不亦说乎？有朋自远方来，不亦乐乎？人不知而不愠，不亦君子乎？\"",
        work: ANALECTS,
        topic: PHILOSOPHY,
        keywords: &["学习", "朋友", "君子", "修养", "快乐"],
    },
    Seed {
        id: "2",
        title: "道德经·第一章",
        content: "道可道，非常道；名可名，非常名。无名天地之始，有名万物之母。",
        work: TAO,
        topic: PHILOSOPHY,
        keywords: &["道", "自然", "哲学", "宇宙", "本源"],
    },
    Seed {
        id: "3",
        title: "孙子兵法·计篇",
        content: "兵者，国之大事，死生之地，存亡之道，不可不察也。",
        work: SUNZI,
        topic: MILITARY,
        keywords: &["战略", "决策", "重要性", "生死", "国家"],
    },
    Seed {
        id: "4",
        title: "论语·为政篇",
        content: "子曰：\"为政以德，譬如北辰，居其所而众星共之。\"",
        work: ANALECTS,
        topic: POLITICS,
        keywords: &["政治", "德治", "领导", "道德", "影响力"],
    },
    Seed {
        id: "5",
        title: "孟子·梁惠王篇",
        content: "民为贵，社稷次之，君为轻。",
        work: MENCIUS,
        topic: POLITICS,
        keywords: &["民本", "政治", "优先级", "人民", "统治者"],
    },
    Seed {
        id: "6",
        title: "道德经·第八章",
        content: "上善若水，水善利万物而不争，处众人之所恶，故几于道。",
        work: TAO,
        topic: CULTIVATION,
        keywords: &["品德", "谦逊", "利他", "不争", "智慧"],
    },
    Seed {
        id: "7",
        title: "论语·里仁篇",
        content: "子曰：\"君子喻于义，小人喻于利。\"",
        work: ANALECTS,
        topic: CULTIVATION,
        keywords: &["道德", "义利", "品格", "价值观", "选择"],
    },
    Seed {
        id: "8",
        title: "孙子兵法·谋攻篇",
        content: "知己知彼，百战不殆；不知彼而知己，一胜一负；不知彼不知己，每战必殆。",
        work: SUNZI,
        topic: BUSINESS,
        keywords: &["了解", "竞争", "信息", "成功", "失败"],
    },
    Seed {
        id: "9",
        title: "论语·学而篇",
        content: "子曰：\"信近于义，言可复也；恭近于礼，远耻辱也；因不失其亲，亦可宗也。\"",
        work: ANALECTS,
        topic: RELATIONSHIPS,
        keywords: &["诚信", "礼貌", "关系", "承诺", "尊重"],
    },
    Seed {
        id: "10",
        title: "大学·修身篇",
        content: "古之欲明明德于天下者，先治其国；欲治其国者，先齐其家；欲齐其家者，先修其身。",
        work: DAXUE,
        topic: CULTIVATION,
        keywords: &["修身", "齐家", "治国", "平天下", "循序渐进"],
    },
    Seed {
        id: "11",
        title: "中庸·诚篇",
        content: "诚者，天之道也；诚之者，人之道也。",
        work: ZHONGYONG,
        topic: CULTIVATION,
        keywords: &["诚信", "天道", "人道", "真诚", "品德"],
    },
    Seed {
        id: "12",
        title: "史记·项羽本纪",
        content: "力拔山兮气盖世，时不利兮骓不逝。",
        work: SHIJI,
        topic: PHILOSOPHY,
        keywords: &["英雄", "时运", "命运", "力量", "悲壮"],
    },
];
