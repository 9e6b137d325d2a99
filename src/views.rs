//! HTML rendering for the quiz pages.
//!
//! Pages are built from the decoded upstream values only; whatever the
//! upstream sends is what gets rendered, in the same order.

use crate::error::Result;
use crate::models::quiz::{Quiz, QuizSummary};

pub fn render_index(summaries: &[QuizSummary]) -> String {
    let mut items = String::new();
    for summary in summaries {
        items.push_str(&format!(
            "            <li><a href=\"/quiz/{}\">{}</a></li>\n",
            escape(&summary.id),
            escape(&summary.title)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Quizzes</title>
</head>
<body>
    <h1>Available Quizzes</h1>
    <ul>
{items}    </ul>
</body>
</html>
"#
    )
}

pub fn render_quiz(quiz: &Quiz) -> Result<String> {
    let mut questions = String::new();
    for (index, question) in quiz.questions.iter().enumerate() {
        questions.push_str(&format!(
            "        <fieldset>\n            <legend>{}. {}</legend>\n",
            index + 1,
            escape(&question.text)
        ));
        if let Some(code) = &question.code {
            questions.push_str(&format!(
                "            <pre><code>{}</code></pre>\n",
                escape(code)
            ));
        }
        for option in &question.options {
            questions.push_str(&format!(
                "            <label><input type=\"checkbox\" name=\"{}\" value=\"{}\"> {}</label><br>\n",
                question.id,
                escape(option),
                escape(option)
            ));
        }
        questions.push_str("        </fieldset>\n");
    }

    let quiz_json = json_for_embedding(quiz)?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    <h1>{title}</h1>
    <form id="quizForm">
        <input type="hidden" name="quizId" value="{quiz_id}">
{questions}        <button type="button" id="submitQuiz">Submit</button>
    </form>
    <div id="results"></div>
    <script>const quizData = {quiz_json};</script>
    <script src="/static/js/quiz.js"></script>
</body>
</html>
"#,
        title = escape(&quiz.title),
        quiz_id = escape(&quiz.id),
    ))
}

/// Serializes a value for inline embedding in a `<script>` block. `<` is
/// emitted as a unicode escape so quiz content can never close the tag.
fn json_for_embedding<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
