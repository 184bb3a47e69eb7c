//! Root endpoint and the local diagnostics panel.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    Extension,
};
use serde::Deserialize;

use crate::api::middleware::SessionId;
use crate::api::AppState;
use crate::config::{ConfigSource, ConfigurationRecord, Settings};

const WELCOME: &str = "Welcome to Travel Booking";

const RUNTIME_VERSION: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Default, Deserialize)]
pub struct DebugQuery {
    pub debug: Option<String>,
}

/// Welcome text, or the diagnostics panel in local mode when `?debug` is set.
pub async fn root(
    State(state): State<AppState>,
    session: Option<Extension<SessionId>>,
    Query(query): Query<DebugQuery>,
) -> Response {
    let requested = query.debug.as_deref().is_some_and(|v| !v.is_empty());

    if requested && state.record.source == ConfigSource::Local {
        let session = session.as_ref().map(|Extension(SessionId(id))| id.as_str());
        Html(render_debug_panel(&state.record, &state.settings, session)).into_response()
    } else {
        WELCOME.into_response()
    }
}

/// Inline HTML listing the resolved configuration. Diagnostic only.
pub fn render_debug_panel(
    record: &ConfigurationRecord,
    settings: &Settings,
    session: Option<&str>,
) -> String {
    let rows = [
        ("Environment", record.app.environment.clone()),
        ("Config source", record.source.label().to_string()),
        ("DB host", record.database.host.clone()),
        ("Upload path", record.upload.upload_path.display().to_string()),
        ("SMTP host", record.email.smtp_host.clone()),
        ("Runtime", RUNTIME_VERSION.to_string()),
        ("Time", settings.now().format("%Y-%m-%d %H:%M:%S %:z").to_string()),
        ("Session", session.unwrap_or("none").to_string()),
    ];

    let mut html = String::from(
        "<div style=\"font-family:monospace;border:1px solid #ccc;padding:8px;margin:8px\">\
         <strong>Configuration debug</strong><table>",
    );
    for (label, value) in rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            label,
            escape_html(&value)
        ));
    }
    html.push_str("</table></div>");
    html
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
