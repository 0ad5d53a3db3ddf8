//! HTML pages.
//!
//! Templates are compiled into the binary. Placeholders are written
//! `{{name}}`; every value substituted from a request is HTML-escaped.

use crate::state::AppState;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;
use tracing::{debug, instrument};

const WELCOME: &str = include_str!("../templates/welcome.html");
const GAME: &str = include_str!("../templates/game.html");
const AGENT: &str = include_str!("../templates/agent.html");
const RESULT: &str = include_str!("../templates/result.html");

/// Escapes text for use inside HTML element content or a quoted attribute.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Fills `{{key}}` placeholders with escaped values in one pass.
///
/// `{{footer}}` takes `footer`; other keys are looked up in `values`.
/// Substituted text is never scanned again, so a value that itself looks
/// like a placeholder is rendered literally. Unknown keys are left as is.
pub fn render(template: &str, footer: &str, values: &[(&str, &str)]) -> String {
    let mut page = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        let Some(len) = rest[open + 2..].find("}}") else {
            break;
        };
        let close = open + 2 + len + 2;
        let key = &rest[open + 2..open + 2 + len];
        page.push_str(&rest[..open]);

        let value = if key == "footer" {
            Some(footer)
        } else {
            values.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
        };
        match value {
            Some(value) => page.push_str(&escape_html(value)),
            None => page.push_str(&rest[open..close]),
        }
        rest = &rest[close..];
    }
    page.push_str(rest);
    page
}

/// `GET /`
#[instrument(skip(state))]
pub async fn welcome(State(state): State<AppState>) -> Html<String> {
    Html(render(WELCOME, state.config().footer(), &[]))
}

/// `GET /game`: two humans on one board.
#[instrument(skip(state))]
pub async fn game(State(state): State<AppState>) -> Html<String> {
    Html(render(GAME, state.config().footer(), &[]))
}

/// `GET /agent`: a human against the computer.
#[instrument(skip(state))]
pub async fn agent(State(state): State<AppState>) -> Html<String> {
    let difficulty = state.config().default_difficulty().to_string();
    let mark = state.config().engine_mark().to_string();
    Html(render(
        AGENT,
        state.config().footer(),
        &[
            ("difficulty", difficulty.as_str()),
            ("engine_mark", mark.as_str()),
        ],
    ))
}

/// Query of `GET /result`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultQuery {
    /// `X`, `O`, or empty for a draw.
    pub winner: Option<String>,
    /// Name of the X player.
    pub player1: Option<String>,
    /// Name of the O player.
    pub player2: Option<String>,
}

/// `GET /result`: announces the outcome.
#[instrument(skip(state))]
pub async fn result(
    State(state): State<AppState>,
    Query(query): Query<ResultQuery>,
) -> Html<String> {
    let player1 = query.player1.as_deref().unwrap_or("Player 1");
    let player2 = query.player2.as_deref().unwrap_or("Player 2");
    let headline = match query.winner.as_deref() {
        Some("X") => format!("{player1} wins!"),
        Some("O") => format!("{player2} wins!"),
        Some(other) if !other.is_empty() => format!("{other} wins!"),
        _ => "It's a draw!".to_string(),
    };
    debug!(%headline, "Rendering result");
    Html(render(
        RESULT,
        state.config().footer(),
        &[
            ("headline", headline.as_str()),
            ("player1", player1),
            ("player2", player2),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_render_fills_placeholders_and_footer() {
        let page = render(
            "<h1>{{title}}</h1><footer>{{footer}}</footer>",
            "me",
            &[("title", "a<b")],
        );
        assert_eq!(page, "<h1>a&lt;b</h1><footer>me</footer>");
    }

    #[test]
    fn test_render_does_not_expand_substituted_text() {
        let page = render(
            "{{a}}|{{b}}|{{footer}}",
            "{{a}}",
            &[("a", "{{b}}"), ("b", "{{footer}}")],
        );
        assert_eq!(page, "{{b}}|{{footer}}|{{a}}");
    }

    #[test]
    fn test_render_keeps_unknown_and_unclosed_placeholders() {
        let template = "{{nope}} and {{open";
        assert_eq!(render(template, "f", &[]), template);
    }

    #[test]
    fn test_templates_carry_footer_slot() {
        for template in [WELCOME, GAME, AGENT, RESULT] {
            assert!(template.contains("{{footer}}"));
        }
    }
}
