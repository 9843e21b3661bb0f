//! In-memory session state.
//!
//! `SessionState` is created when a session starts and dropped when it ends.
//! Nothing is persisted: restarting the program starts from an empty session.

use biofolio_types::biography::{BiographyRecord, CustomFields};

use crate::repository::biography::BiographyStore;

/// All state owned by one running session.
#[derive(Debug, Default)]
pub struct SessionState {
    biographies: Vec<BiographyRecord>,
    pending_custom_fields: CustomFields,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records saved so far.
    pub fn len(&self) -> usize {
        self.biographies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.biographies.is_empty()
    }
}

impl BiographyStore for SessionState {
    fn append(&mut self, record: BiographyRecord) {
        self.biographies.push(record);
        tracing::debug!(count = self.biographies.len(), "biography appended");
    }

    fn all(&self) -> &[BiographyRecord] {
        &self.biographies
    }

    fn record_custom_field_value(&mut self, name: &str, value: String) {
        self.pending_custom_fields.append(name, value);
        tracing::debug!(field = name, "custom field value recorded");
    }

    fn pending_custom_fields(&self) -> &CustomFields {
        &self.pending_custom_fields
    }
}
