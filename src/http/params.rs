//! Query parameter extraction and validation.
//!
//! # Responsibilities
//! - Parse the raw query string into the four expected parameters
//! - Missing keys become empty strings (indistinguishable from
//!   present-but-empty, and rejected the same way)
//! - Regex acceptance checks before any record is constructed
//!
//! # Design Decisions
//! - First occurrence of a duplicated key wins
//! - Patterns require at least one character, so empty values always fail
//! - Regexes compiled once, process-wide

use once_cell::sync::Lazy;
use regex::Regex;
use url::form_urlencoded;

use crate::error::IngestError;
use crate::storage::SmsRecord;

static TEXT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());
static RECEIVER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// The four raw parameters of an ingest request, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestParams {
    pub func: String,
    pub source: String,
    pub receiver: String,
    pub info: String,
}

impl IngestParams {
    /// Parse a raw query string. Keys other than the expected four are
    /// ignored; absent keys yield empty strings.
    pub fn from_query(query: &str) -> Self {
        let mut func = None;
        let mut source = None;
        let mut receiver = None;
        let mut info = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "func" => &mut func,
                "source" => &mut source,
                "receiver" => &mut receiver,
                "info" => &mut info,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        Self {
            func: func.unwrap_or_default(),
            source: source.unwrap_or_default(),
            receiver: receiver.unwrap_or_default(),
            info: info.unwrap_or_default(),
        }
    }

    /// Check the parameters against the ingest contract.
    ///
    /// `func` is checked first and reports its own error; the three field
    /// checks share a single error, matching the response table.
    pub fn validate(&self) -> Result<(), IngestError> {
        if self.func != "add" {
            return Err(IngestError::InvalidFunc);
        }
        if !TEXT_RE.is_match(&self.source)
            || !RECEIVER_RE.is_match(&self.receiver)
            || !TEXT_RE.is_match(&self.info)
        {
            return Err(IngestError::InvalidParams);
        }
        Ok(())
    }

    /// Consume validated parameters into the persisted record shape.
    pub fn into_record(self) -> SmsRecord {
        SmsRecord {
            func: self.func,
            source: self.source,
            receiver: self.receiver,
            info: self.info,
        }
    }
}
