//! Server-side view renderers.
//!
//! Pure functions from fully-resolved data to complete HTML documents.
//! Renderers never touch the database; each handler calls exactly one of
//! them. All dynamic values pass through [`escape_html`] before
//! interpolation.

use quizdeck_core::types::DbId;
use quizdeck_db::models::quiz::Quiz;

/// Inline CSS shared by every page.
const STYLE: &str = r#"<style>
    body { font-family: sans-serif; }
    .button { display: inline-block; text-decoration: none;
        padding: 2px 6px; margin: 2px;
        background: #4479BA; color: #FFF;
        border-radius: 4px; border: solid 1px #20538D; }
    .button:hover { background: #356094; }
    td, tr, th { padding: 10px; border: 0px; }
    tbody tr:nth-child(odd) { background: #eee; }
    table { border-collapse: collapse; }
</style>"#;

/// Escape a value for interpolation into HTML text or attribute content.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for embedding in a single-quoted JavaScript string
/// literal. The browser HTML-decodes attribute values before the JS engine
/// parses them, so values inside inline handlers need this step first and
/// [`escape_html`] second.
fn escape_js_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a value for a URL query string, byte by byte.
/// Everything outside the unreserved set is encoded so characters like
/// `&`, `+`, and `#` survive the round trip through the browser.
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Wrap a page body in the shared document skeleton.
fn page(heading: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head>\n    <meta charset=\"utf-8\">\n    \
         <title>Quiz</title>\n    {STYLE}\n</head>\n<body>\n    \
         <h1>{heading}</h1>\n{body}\n    <a href=\"/quizzes\" class=\"button\">Go back</a>\n\
         </body>\n</html>"
    )
}

/// The quiz list: one table row per quiz with play, edit, and delete
/// controls, plus a "New Quiz" button.
pub fn index(quizzes: &[Quiz]) -> String {
    let mut rows = String::new();
    for quiz in quizzes {
        let question = escape_html(&quiz.question);
        // Inside the inline confirm() the value sits in a JS string inside
        // an HTML attribute, so it needs both escaping passes.
        let confirm_question = escape_html(&escape_js_string(&quiz.question));
        let id = quiz.id;
        rows.push_str(&format!(
            "        <tr id=\"Q{id}\">\n            <td>{id}</td>\n            \
             <td><a href=\"/quizzes/{id}/play\">{question}</a></td>\n            \
             <td><a href=\"/quizzes/{id}/edit\" class=\"button\">Edit</a></td>\n            \
             <td><a href=\"/quizzes/{id}?_method=DELETE\"\n               \
             onClick=\"return confirm('Delete: {confirm_question}')\"\n               \
             class=\"button\">Delete ID: {id}</a></td>\n        </tr>\n"
        ));
    }

    let body = format!(
        "    <table class=\"default\">\n        <tr id=\"header\">\n            \
         <th>ID</th>\n            <th>Question</th>\n            <th></th>\n            \
         <th></th>\n        </tr>\n{rows}    </table>\n    \
         <a href=\"/quizzes/new\" class=\"button\">New Quiz</a>"
    );

    // The list page links back to itself, so skip the shared trailer.
    format!(
        "<!doctype html>\n<html>\n<head>\n    <meta charset=\"utf-8\">\n    \
         <title>Quiz</title>\n    {STYLE}\n</head>\n<body>\n    <h1>Quizzes</h1>\n\
         {body}\n</body>\n</html>"
    )
}

/// The play form for one quiz. `response` carries the previous attempt so
/// the input arrives prefilled after a failed check.
pub fn play(quiz: &Quiz, response: &str) -> String {
    let question = escape_html(&quiz.question);
    let response = escape_html(response);
    let id = quiz.id;
    let body = format!(
        "    <form method=\"get\" action=\"/quizzes/{id}/check\">\n        \
         <label for=\"response\">{question}: </label>\n        <br>\n        \
         <input type=\"text\" name=\"response\" value=\"{response}\" placeholder=\"Answer\">\n        \
         <input type=\"submit\" class=\"button\" value=\"Check\">\n    </form>\n    <br>"
    );
    page("Play Quiz", &body)
}

/// The verdict page after a check, with a "Try again" link that carries
/// the submitted response back into the play form.
pub fn result(id: DbId, msg: &str, response: &str) -> String {
    let msg = escape_html(msg);
    // Query values need percent-encoding, not entity escaping, or the
    // browser truncates the response at the first reserved character.
    let response = encode_query_value(response);
    let body = format!(
        "    <div id=\"msg\"><strong>{msg}</strong></div>\n    \
         <a href=\"/quizzes/{id}/play?response={response}\" class=\"button\">Try again</a>"
    );
    page("Result", &body)
}

/// The blank creation form.
pub fn new_quiz() -> String {
    let body = "    <form method=\"POST\" action=\"/quizzes\">\n        \
         <label for=\"question\">Question: </label>\n        \
         <input type=\"text\" name=\"question\" value=\"\" placeholder=\"Question\">\n        <br>\n        \
         <label for=\"answer\">Answer: </label>\n        \
         <input type=\"text\" name=\"answer\" value=\"\" placeholder=\"Answer\">\n        \
         <input type=\"submit\" class=\"button\" value=\"Create\">\n    </form>\n    <br>";
    page("Create New Quiz", body)
}

/// The edit form, prefilled with the quiz's current fields. Submits as a
/// POST with a `_method=PUT` override so plain browser forms work.
pub fn edit(quiz: &Quiz) -> String {
    let question = escape_html(&quiz.question);
    let answer = escape_html(&quiz.answer);
    let id = quiz.id;
    let body = format!(
        "    <form method=\"POST\" action=\"/quizzes/{id}/update?_method=PUT\">\n        \
         <label for=\"question\">Question: </label>\n        \
         <input type=\"text\" name=\"question\" value=\"{question}\" placeholder=\"Question\">\n        <br>\n        \
         <label for=\"answer\">Answer: </label>\n        \
         <input type=\"text\" name=\"answer\" value=\"{answer}\" placeholder=\"Answer\">\n        \
         <input type=\"submit\" class=\"button\" value=\"Update\">\n    </form>\n    <br>"
    );
    page("Edit Quiz", &body)
}
