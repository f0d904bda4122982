use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static RE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("valid number regex"));
static RE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}").expect("valid date regex"));
static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));
static RE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid url regex"));
static RE_CAPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z\s]+$").expect("valid caps regex"));

/// Headers are short lines.
const HEADER_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    Text,
    Number,
    Date,
    Email,
    #[serde(rename = "URL")]
    Url,
    Header,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Text => write!(f, "Text"),
            ContentType::Number => write!(f, "Number"),
            ContentType::Date => write!(f, "Date"),
            ContentType::Email => write!(f, "Email"),
            ContentType::Url => write!(f, "URL"),
            ContentType::Header => write!(f, "Header"),
        }
    }
}

/// Tag a line of text by its shape. The first matching rule wins:
/// number, date, email, URL, header, then plain text.
pub fn classify(text: &str) -> ContentType {
    if is_number(text) {
        ContentType::Number
    } else if RE_DATE.is_match(text) {
        ContentType::Date
    } else if RE_EMAIL.is_match(text) {
        ContentType::Email
    } else if RE_URL.is_match(text) {
        ContentType::Url
    } else if is_header(text) {
        ContentType::Header
    } else {
        ContentType::Text
    }
}

fn is_number(text: &str) -> bool {
    RE_NUMBER.is_match(text.trim())
}

fn is_header(text: &str) -> bool {
    text.chars().count() < HEADER_MAX_CHARS
        && (text.to_uppercase() == text || RE_CAPS.is_match(text))
}
