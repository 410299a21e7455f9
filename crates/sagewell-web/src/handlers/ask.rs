//! Ask endpoints — templated wisdom answers.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::info;

use sagewell_common::ApiError;
use sagewell_ranker::query::validate_query;
use sagewell_ranker::wisdom::{self, Answer, AskRequest, Book};

use super::{reject_input, InputMessages};
use crate::auth::Authenticated;
use crate::extract::ApiJson;
use crate::state::SharedState;

const QUESTION_INPUT: InputMessages = InputMessages {
    empty: "问题不能为空",
    too_long: question_too_long,
};

fn question_too_long(max: usize) -> String {
    format!("问题长度不能超过{max}个字符")
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub success: bool,
    #[serde(flatten)]
    pub answer: Answer,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BooksResponse {
    pub books: Vec<Book>,
    pub categories: Vec<String>,
}

/// POST /api/ask — answer a question from the classics
pub async fn ask(
    State(state): State<SharedState>,
    auth: Authenticated,
    ApiJson(mut req): ApiJson<AskRequest>,
) -> Result<ApiJson<AskResponse>, ApiError> {
    req.question = validate_query(&req.question, state.config.ask.max_question_chars)
        .map_err(|e| reject_input(e, &QUESTION_INPUT))?;

    let answer = state.oracle.answer(&req);
    info!(
        chars = answer.question.chars().count(),
        books = answer.selected_books.len(),
        key = auth.key_prefix.as_deref().unwrap_or("anonymous"),
        "answered question"
    );

    Ok(ApiJson(AskResponse { success: true, answer }))
}

/// GET /api/ask — books and categories a question can be scoped to
pub async fn ask_books() -> ApiJson<BooksResponse> {
    ApiJson(BooksResponse {
        books: wisdom::books(),
        categories: wisdom::ASK_CATEGORIES.iter().map(|c| c.to_string()).collect(),
    })
}
