//! Templated wisdom answers for natural-language questions.
//!
//! The question is matched against a handful of themes by keyword; the first
//! theme that fires picks the answer template. No model is involved, so the
//! same question always yields the same text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub description: String,
}

const BOOKS: &[(&str, &str, &str, &str, &str)] = &[
    ("1", "论语", "孔子", "人生哲学", "儒家经典，讲述做人做事的道理"),
    ("2", "道德经", "老子", "人生哲学", "道家经典，阐述自然之道"),
    ("3", "孙子兵法", "孙武", "军事战略", "兵家经典，战略智慧的集大成者"),
    ("4", "大学", "曾子", "修身养性", "四书之一，讲述修身治国之道"),
    ("5", "中庸", "子思", "修身养性", "儒家经典，阐述中庸之道"),
    ("6", "孟子", "孟子", "治国理政", "儒家经典，论述仁政思想"),
    ("7", "史记", "司马迁", "治国理政", "史学经典，记录历史兴衰"),
    ("8", "资治通鉴", "司马光", "治国理政", "编年体史书，治国理政的智慧宝库"),
];

pub const ASK_CATEGORIES: &[&str] = &[
    "全部", "人生哲学", "治国理政", "军事战略", "商业智慧", "修身养性", "人际关系", "学习方法", "其他",
];

/// The eight books a question may be scoped to.
pub fn books() -> Vec<Book> {
    BOOKS
        .iter()
        .map(|(id, title, author, category, description)| Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn book_title(id: &str) -> Option<&'static str> {
    BOOKS.iter().find(|b| b.0 == id).map(|b| b.1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Adversity,
    Leadership,
    Business,
    Relationships,
    General,
}

const THEME_TRIGGERS: &[(Theme, &[&str])] = &[
    (Theme::Adversity, &["困难", "挫折", "平静"]),
    (Theme::Leadership, &["领导", "管理", "治理"]),
    (Theme::Business, &["商业", "生意", "经商", "竞争"]),
    (Theme::Relationships, &["人际关系", "交友", "沟通", "冲突"]),
];

impl Theme {
    /// First theme whose trigger appears in the question; `General` otherwise.
    pub fn detect(question: &str) -> Self {
        THEME_TRIGGERS
            .iter()
            .find(|(_, triggers)| triggers.iter().any(|t| question.contains(t)))
            .map(|(theme, _)| *theme)
            .unwrap_or(Theme::General)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default, deserialize_with = "lenient_ids")]
    pub selected_books: Vec<String>,
    #[serde(default)]
    pub category: String,
}

/// Accept an array of string or numeric ids; anything else means "none".
fn lenient_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let ids = match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(ids)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    pub question: String,
    pub selected_books: Vec<String>,
    pub category: String,
    pub timestamp: DateTime<Utc>,
}

/// Answer generator. Stateless; expects a question already validated with
/// [`crate::query::validate_query`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Oracle;

impl Oracle {
    pub fn answer(&self, request: &AskRequest) -> Answer {
        self.answer_at(request, Utc::now())
    }

    pub fn answer_at(&self, request: &AskRequest, timestamp: DateTime<Utc>) -> Answer {
        let selected_books: Vec<String> = request
            .selected_books
            .iter()
            .filter(|id| book_title(id).is_some())
            .cloned()
            .collect();

        let theme = Theme::detect(&request.question);
        debug!(?theme, books = selected_books.len(), "answering question");

        let answer = render(theme, &request.question, &selected_books);
        Answer {
            answer,
            question: request.question.clone(),
            selected_books,
            category: request.category.clone(),
            timestamp,
        }
    }
}

fn render(theme: Theme, question: &str, selected_books: &[String]) -> String {
    match theme {
        Theme::Adversity => format!(
            r#"关于您提出的问题"{question}"，古代先贤们有着深刻的见解：

**道家智慧：**
老子在《道德经》中说："上善若水，水善利万物而不争。"面对困难时，我们应该像水一样，保持柔韧和包容的心态。困难如山石，水能绕过、能穿透，最终必能到达目的地。

**儒家观点：**
孔子曾说："君子坦荡荡，小人长戚戚。"内心的平静来自于品德的修养和对道德的坚持。当我们行得正、坐得端时，自然能够在困难面前保持内心的宁静。

**实践建议：**
1. **接受现实**：承认困难的存在，不逃避不抱怨
2. **保持初心**：记住自己的目标和价值观
3. **寻求智慧**：从古籍中汲取前人的经验
4. **修身养性**：通过学习和反思提升自己

正如《中庸》所言："天命之谓性，率性之谓道，修道之谓教。"通过不断的修养和学习，我们能够在任何困难面前都保持内心的平静与坚定。"#
        ),
        Theme::Leadership => format!(
            r#"关于"{question}"这个问题，古代治国理政的智慧为我们提供了宝贵的指导：

**孔子的仁政思想：**
"为政以德，譬如北辰，居其所而众星共之。"真正的领导者应该以德服人，用自己的品德和智慧来感化和引导他人。

**孟子的民本思想：**
"民为贵，社稷次之，君为轻。"好的领导者要时刻记住人民的利益是最重要的，要为人民服务，而不是让人民为自己服务。

**老子的无为而治：**
"太上，不知有之；其次，亲而誉之；其次，畏之；其次，侮之。"最高明的领导是让下属感觉不到管理的存在，通过营造良好的环境和制度让大家自觉地做好工作。

**实践要点：**
1. **以身作则**：领导者的行为是最好的教育
2. **知人善任**：了解每个人的特长并合理安排
3. **倾听民意**：经常了解下属和民众的想法
4. **公正无私**：处事公平，不偏不倚
5. **持续学习**：不断提升自己的能力和见识

《资治通鉴》中说："用人如器，各取所长。"好的领导者要善于发现和使用每个人的优点。"#
        ),
        Theme::Business => format!(
            r#"对于"{question}"，古代商业智慧和战略思想给我们很多启发：

**孙子兵法的战略思维：**
"知己知彼，百战不殆。"在商业竞争中，深入了解自己的优势劣势和竞争对手的情况是成功的关键。

"兵者，诡道也。"商业竞争需要灵活的策略，有时需要出其不意的创新思路。

**老子的柔性智慧：**
"天下莫柔弱于水，而攻坚强者莫之能胜。"在激烈的市场竞争中，有时柔性的策略比强硬的手段更有效。

**儒家的诚信理念：**
"人而无信，不知其可也。"诚信是商业的根本，短期的欺骗可能带来利益，但长期来看必然失败。

**商业策略建议：**
1. **市场调研**：深入了解市场需求和竞争环境
2. **差异化定位**：找到自己独特的价值主张
3. **诚信经营**：建立良好的商业信誉
4. **灵活应变**：根据市场变化及时调整策略
5. **长远规划**：不只看眼前利益，要有长远视野

正如《易经》所说："穷则变，变则通，通则久。"商业成功需要在变化中寻找机会。"#
        ),
        Theme::Relationships => format!(
            r#"关于"{question}"，古代先贤在人际交往方面留下了丰富的智慧：

**孔子的交友之道：**
"益者三友，损者三友。友直，友谅，友多闻，益矣。友便辟，友善柔，友便佞，损矣。"选择正直、诚信、博学的朋友，远离那些阿谀奉承、虚伪狡诈的人。

**处理冲突的智慧：**
"和而不同"是孔子提出的重要理念。在人际关系中，我们要保持和谐，但不必强求完全一致。尊重差异，求同存异。

**老子的处世哲学：**
"夫唯不争，故天下莫能与之争。"有时候不争反而能获得更多。在人际关系中，适当的退让和包容往往能化解矛盾。

**沟通的艺术：**
《论语》中说："巧言令色，鲜矣仁。"真诚的沟通比花言巧语更重要。

**实践指导：**
1. **真诚待人**：以诚相待，建立信任基础
2. **换位思考**：理解对方的立场和感受
3. **适度包容**：对他人的缺点要有一定的容忍度
4. **及时沟通**：有问题及时交流，不要积累矛盾
5. **保持边界**：既要友善，也要有自己的原则

《大学》中讲："修身、齐家、治国、平天下。"良好的人际关系从修养自己开始。"#
        ),
        Theme::General => {
            let names: Vec<&str> = selected_books.iter().filter_map(|id| book_title(id)).collect();
            let scoped = if names.is_empty() {
                String::new()
            } else {
                format!("根据您选择的典籍{}，", names.join("、"))
            };
            format!(
                r#"感谢您提出"{question}"这个深刻的问题。

古代典籍中蕴含着丰富的智慧，可以为我们现代人的生活提供指导。{scoped}让我为您分享一些相关的古代智慧：

**核心观点：**
古人认为，面对人生的各种问题，最重要的是保持正确的心态和价值观。正如《论语》所说："君子求诸己，小人求诸人。"遇到问题时，首先要从自身寻找原因和解决方案。

**实践建议：**
1. **深入思考**：不要急于求成，要深入思考问题的本质
2. **学习古训**：从古代典籍中寻找相似的情况和解决方案
3. **修身养性**：通过不断学习和反思来提升自己
4. **知行合一**：将学到的道理付诸实践

**古人名言：**
"学而时习之，不亦说乎？"学习古代智慧，并在生活中实践，这本身就是一种快乐。

希望这些古代智慧能够为您提供一些启发和帮助。如果您还有其他问题，欢迎继续探讨。"#
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ask(question: &str, books: &[&str]) -> Answer {
        let req = AskRequest {
            question: question.to_string(),
            selected_books: books.iter().map(|b| b.to_string()).collect(),
            category: "人生哲学".to_string(),
        };
        Oracle.answer_at(&req, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_theme_detection_order() {
        assert_eq!(Theme::detect("如何面对困难"), Theme::Adversity);
        assert_eq!(Theme::detect("团队管理"), Theme::Leadership);
        assert_eq!(Theme::detect("市场竞争"), Theme::Business);
        assert_eq!(Theme::detect("如何沟通"), Theme::Relationships);
        // adversity is checked before leadership
        assert_eq!(Theme::detect("管理中的挫折"), Theme::Adversity);
        assert_eq!(Theme::detect("人生的意义"), Theme::General);
    }

    #[test]
    fn test_unknown_books_are_dropped() {
        let answer = ask("人生的意义", &["1", "9", "abc", "3"]);
        assert_eq!(answer.selected_books, vec!["1", "3"]);
        assert!(answer.answer.contains("根据您选择的典籍论语、孙子兵法，"));
    }

    #[test]
    fn test_general_without_books_has_no_scope_line() {
        let answer = ask("人生的意义", &[]);
        assert!(!answer.answer.contains("根据您选择的典籍"));
        assert!(answer.answer.starts_with("感谢您提出\"人生的意义\""));
    }

    #[test]
    fn test_themed_answer_embeds_question() {
        let answer = ask("如何面对困难", &["2"]);
        assert!(answer.answer.contains("\"如何面对困难\""));
        assert!(answer.answer.contains("上善若水"));
        assert_eq!(answer.category, "人生哲学");
    }

    #[test]
    fn test_answers_are_deterministic() {
        assert_eq!(ask("领导力", &["1"]), ask("领导力", &["1"]));
    }

    #[test]
    fn test_lenient_book_ids() {
        let req: AskRequest =
            serde_json::from_str(r#"{"question":"q","selected_books":[1,"2",null]}"#).unwrap();
        assert_eq!(req.selected_books, vec!["1", "2"]);

        let req: AskRequest = serde_json::from_str(r#"{"question":"q","selected_books":"1"}"#).unwrap();
        assert!(req.selected_books.is_empty());

        let req: AskRequest = serde_json::from_str(r#"{"question":"q"}"#).unwrap();
        assert!(req.selected_books.is_empty());
        assert_eq!(req.category, "");
    }

    #[test]
    fn test_book_catalog() {
        let books = books();
        assert_eq!(books.len(), 8);
        assert_eq!(books[7].title, "资治通鉴");
        assert_eq!(ASK_CATEGORIES.len(), 9);
    }
}
