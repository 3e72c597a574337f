//! Tera views for the home page and the htmx fragments.
//!
//! Templates are embedded at compile time and autoescaped, so every
//! upstream-provided string is safe to interpolate.

use axum::response::{Html, IntoResponse, Response};
use chrono::DateTime;
use serde::Serialize;
use tera::{Context, Tera};
use tracing::error;

use super::language::{syntax_class, LANGUAGES};
use crate::error::{AppError, Result};
use crate::upstream::PasteSummary;

const TPL_HOME: &str = include_str!("../../views/home.html");
const TPL_PASTE_LIST: &str = include_str!("../../views/paste_list.html");
const TPL_PASTE_VIEW: &str = include_str!("../../views/paste_view.html");
const TPL_ERROR: &str = include_str!("../../views/error.html");

// == View Models ==
#[derive(Debug, Serialize)]
struct LanguageOption {
    name: &'static str,
    label: &'static str,
}

/// One listing row with display defaults applied.
#[derive(Debug, Serialize)]
struct PasteRow<'a> {
    key: &'a str,
    title: &'a str,
    user: &'a str,
    created: String,
    syntax: &'a str,
    size: &'a str,
}

impl<'a> PasteRow<'a> {
    fn from_summary(paste: &'a PasteSummary) -> Self {
        Self {
            key: &paste.key,
            title: or_default(&paste.title, "Untitled"),
            user: or_default(&paste.user, "Anonymous"),
            created: format_date(&paste.date),
            syntax: &paste.syntax,
            size: &paste.size,
        }
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Formats upstream unix-seconds as `YYYY-MM-DD HH:MM` (UTC).
///
/// Unparsable dates render as the epoch.
fn format_date(date: &str) -> String {
    let seconds = date.trim().parse::<i64>().unwrap_or(0);
    DateTime::from_timestamp(seconds, 0)
        .unwrap_or_default()
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

// == Views ==
/// Compiled page and fragment templates.
#[derive(Debug)]
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Registers the embedded templates.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template("home.html", TPL_HOME)?;
        tera.add_raw_template("paste_list.html", TPL_PASTE_LIST)?;
        tera.add_raw_template("paste_view.html", TPL_PASTE_VIEW)?;
        tera.add_raw_template("error.html", TPL_ERROR)?;

        Ok(Self { tera })
    }

    /// Full home page with the language filter options.
    pub fn home(&self) -> Result<String> {
        let languages: Vec<LanguageOption> = LANGUAGES
            .iter()
            .map(|&(name, label)| LanguageOption { name, label })
            .collect();

        let mut context = Context::new();
        context.insert("languages", &languages);
        Ok(self.tera.render("home.html", &context)?)
    }

    /// Clickable paste list, or an empty-state block.
    pub fn paste_list(&self, pastes: &[PasteSummary]) -> Result<String> {
        let rows: Vec<PasteRow<'_>> = pastes.iter().map(PasteRow::from_summary).collect();

        let mut context = Context::new();
        context.insert("rows", &rows);
        Ok(self.tera.render("paste_list.html", &context)?)
    }

    /// Viewer pane for one paste body.
    pub fn paste_view(&self, content: &str, syntax: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("content", content);
        context.insert("class", syntax_class(syntax));
        Ok(self.tera.render("paste_view.html", &context)?)
    }

    // == Responses ==
    /// Error fragment carrying the error's status code.
    pub fn error_response(&self, err: &AppError) -> Response {
        let mut context = Context::new();
        context.insert("message", &err.to_string());

        match self.tera.render("error.html", &context) {
            Ok(html) => (err.status_code(), Html(html)).into_response(),
            Err(render_err) => {
                error!("Template error: {}", render_err);
                (err.status_code(), err.to_string()).into_response()
            }
        }
    }

    /// Turns a rendered fragment or a failure into a response.
    pub fn respond(&self, rendered: Result<String>) -> Response {
        match rendered {
            Ok(html) => Html(html).into_response(),
            Err(err) => self.error_response(&err),
        }
    }
}
