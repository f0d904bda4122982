pub mod rtf;

use serde::Serialize;

pub const WORD_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const SPREADSHEET_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A finished document handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload {
    pub mime_type: &'static str,
    /// Suggested file extension matching the actual encoding.
    pub extension: &'static str,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl Payload {
    pub fn word(rtf: String) -> Self {
        Payload {
            mime_type: WORD_MIME_TYPE,
            extension: "rtf",
            bytes: rtf.into_bytes(),
        }
    }

    pub fn spreadsheet(csv: String) -> Self {
        Payload {
            mime_type: SPREADSHEET_MIME_TYPE,
            extension: "csv",
            bytes: csv.into_bytes(),
        }
    }

    /// The payload as text; both encodings are UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}
