//! The persisted document shape.

use serde::{Deserialize, Serialize};

/// One SMS-event notification, persisted per valid request.
///
/// All four fields are plain text; a record is only ever constructed from
/// parameters that already passed validation. Field names here are the
/// document field names in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsRecord {
    pub func: String,
    pub source: String,
    pub receiver: String,
    pub info: String,
}
