//! Wire format of the trivia service.
//!
//! Two read-only endpoints are used: `GET /api/categories?count=N` answers with an array of category summaries and
//! `GET /api/category?id=ID` answers with one category and all of its clues. Responses are checked here, anything
//! that does not fit the schema becomes a [`ProtocolError`] instead of leaking half-filled values into the game.

pub use jeopardy_core::CategoryId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("invalid json: {0}")]
    InvalidJson(String),
    #[error("empty category list")]
    NoCategories,
}

impl From<serde_json::Error> for ProtocolError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err.to_string())
    }
}

pub type Result<T> = core::result::Result<T, ProtocolError>;

pub fn categories_url(api_base: &str, count: u16) -> String {
    format!("{}/api/categories?count={}", api_base.trim_end_matches('/'), count)
}

pub fn category_url(api_base: &str, id: CategoryId) -> String {
    format!("{}/api/category?id={}", api_base.trim_end_matches('/'), id)
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct CategorySummary {
    id: CategoryId,
}

/// Clue text as sent by the service; numeric answers come through as bare JSON numbers.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
enum WireText {
    Text(String),
    Number(serde_json::Number),
}

impl WireText {
    fn into_clean(self) -> String {
        match self {
            Self::Text(text) => clean_text(&text),
            Self::Number(number) => number.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct WireClue {
    question: WireText,
    answer: WireText,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct WireCategory {
    #[serde(default)]
    id: Option<CategoryId>,
    title: String,
    clues: Vec<WireClue>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CluePayload {
    pub question: String,
    pub answer: String,
}

impl CluePayload {
    /// A clue is usable when both sides still have text after cleanup.
    pub fn is_usable(&self) -> bool {
        !self.question.is_empty() && !self.answer.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub id: Option<CategoryId>,
    pub title: String,
    pub clues: Vec<CluePayload>,
}

impl CategoryPayload {
    /// Splits into the title and the clues that can be put on the board, in the order the service sent them.
    pub fn into_usable(self) -> (String, Vec<CluePayload>) {
        let clues = self.clues.into_iter().filter(CluePayload::is_usable).collect();
        (self.title, clues)
    }
}

/// Parses the body of the category list endpoint into its ids.
pub fn parse_category_ids(body: &str) -> Result<Vec<CategoryId>> {
    let summaries: Vec<CategorySummary> = serde_json::from_str(body)?;
    if summaries.is_empty() {
        return Err(ProtocolError::NoCategories);
    }
    Ok(summaries.into_iter().map(|summary| summary.id).collect())
}

/// Parses the body of the single category endpoint.
pub fn parse_category(body: &str) -> Result<CategoryPayload> {
    let WireCategory { id, title, clues } = serde_json::from_str(body)?;
    let clues = clues
        .into_iter()
        .map(|WireClue { question, answer }| CluePayload {
            question: question.into_clean(),
            answer: answer.into_clean(),
        })
        .collect();
    Ok(CategoryPayload {
        id,
        title: clean_text(&title),
        clues,
    })
}

/// Drops markup tags and escaping backslashes, trims surrounding whitespace.
///
/// Only complete tags are dropped: a `<` without a matching `>` is kept as text.
pub fn clean_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(c) = rest.chars().next() {
        let after = &rest[c.len_utf8()..];
        match c {
            '<' if starts_tag(after) => {
                if let Some(end) = tag_end(after) {
                    rest = &after[end + 1..];
                    continue;
                }
                out.push(c);
            }
            '\\' if after.starts_with(['\'', '"']) => {}
            _ => out.push(c),
        }
        rest = after;
    }
    out.trim().to_string()
}

fn starts_tag(after_open: &str) -> bool {
    after_open.starts_with(|c: char| c.is_ascii_alphabetic() || c == '/')
}

/// Offset of the `>` closing a tag, `None` if another `<` or the end of text comes first.
fn tag_end(after_open: &str) -> Option<usize> {
    after_open
        .find(['<', '>'])
        .filter(|&end| after_open[end..].starts_with('>'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ids_are_read_from_summaries() {
        let body = r#"[
            {"id": 11531, "title": "mixed bag", "clues_count": 5},
            {"id": 11532, "title": "let's \"ch\"at", "clues_count": 5}
        ]"#;

        let ids: Vec<jeopardy_core::CategoryId> = parse_category_ids(body).unwrap();

        assert_eq!(ids, vec![11531, 11532]);
    }

    #[test]
    fn category_list_without_ids_is_rejected() {
        assert!(matches!(
            parse_category_ids(r#"[{"title": "no id"}]"#),
            Err(ProtocolError::InvalidJson(_))
        ));
        assert!(matches!(
            parse_category_ids(r#"{"id": 1}"#),
            Err(ProtocolError::InvalidJson(_))
        ));
        assert_eq!(parse_category_ids("[]"), Err(ProtocolError::NoCategories));
    }

    #[test]
    fn numeric_answers_are_accepted() {
        let body = r#"{
            "id": 1, "title": "Math",
            "clues": [{"question": "2+2", "answer": 4}, {"question": "1.5*2", "answer": 3.0}]
        }"#;

        let category = parse_category(body).unwrap();

        assert_eq!(category.title, "Math");
        assert_eq!(category.clues[0].answer, "4");
        assert_eq!(category.clues[1].answer, "3.0");
    }

    #[test]
    fn missing_or_null_clue_fields_are_rejected() {
        let missing = r#"{"title": "t", "clues": [{"question": "q"}]}"#;
        let null = r#"{"title": "t", "clues": [{"question": null, "answer": "a"}]}"#;
        let no_title = r#"{"clues": []}"#;

        for body in [missing, null, no_title] {
            assert!(
                matches!(parse_category(body), Err(ProtocolError::InvalidJson(_))),
                "{body}"
            );
        }
    }

    #[test]
    fn markup_and_escapes_are_cleaned() {
        assert_eq!(clean_text("<i>Hamlet</i> author "), "Hamlet author");
        assert_eq!(clean_text(r#"Let\'s \"go\""#), r#"Let's "go""#);
        assert_eq!(clean_text("a < b"), "a < b");
    }

    #[test]
    fn unclosed_angle_brackets_are_kept() {
        let text = "If a<b and b<c then a is less than c";

        assert_eq!(clean_text(text), text);
        assert_eq!(clean_text("x<y <i>z</i>"), "x<y z");
        assert_eq!(clean_text("ends with <b"), "ends with <b");
    }

    #[test]
    fn blank_clues_are_not_usable() {
        let body = r#"{"title": "t", "clues": [
            {"question": "", "answer": "a"},
            {"question": "q", "answer": "<i></i>"},
            {"question": "q", "answer": "a"}
        ]}"#;

        let (title, usable) = parse_category(body).unwrap().into_usable();

        assert_eq!(title, "t");
        assert_eq!(
            usable,
            vec![CluePayload {
                question: "q".into(),
                answer: "a".into()
            }]
        );
    }

    #[test]
    fn urls_point_at_the_two_endpoints() {
        assert_eq!(
            categories_url("https://jservice.io/", 100),
            "https://jservice.io/api/categories?count=100"
        );
        assert_eq!(
            category_url("https://jservice.io", 11603),
            "https://jservice.io/api/category?id=11603"
        );
    }
}
