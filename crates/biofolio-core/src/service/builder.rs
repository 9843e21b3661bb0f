//! Biography builder service.
//!
//! Turns one raw form submission into a normalized `BiographyRecord` and
//! commits it to the session store. Submitting a record with a custom field
//! attached also records that field in the session, and every saved record
//! receives a snapshot of all custom fields accumulated so far.

use biofolio_types::biography::{
    BiographyRecord, BiographySubmission, BiographyType, Education, is_reserved_field_name,
};
use biofolio_types::error::BiographyError;

use crate::age::parse_birthdate;
use crate::repository::biography::BiographyStore;

/// Service assembling submissions into records for one session.
///
/// Borrows the store mutably for the duration of a user action; the session
/// that owns the store outlives the builder.
pub struct BiographyBuilder<'a, S: BiographyStore> {
    store: &'a mut S,
}

impl<'a, S: BiographyStore> BiographyBuilder<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Record a custom field value ahead of the next submission.
    ///
    /// Blank names or values are ignored and return `Ok(false)`. A name that
    /// collides with a fixed record field is refused. The value is stored as
    /// entered; only the name is trimmed.
    pub fn add_custom_field(&mut self, name: &str, value: &str) -> Result<bool, BiographyError> {
        let name = name.trim();
        if name.is_empty() || value.trim().is_empty() {
            return Ok(false);
        }

        if is_reserved_field_name(name) {
            return Err(BiographyError::ReservedFieldName(name.to_string()));
        }

        self.store.record_custom_field_value(name, value.to_string());
        Ok(true)
    }

    /// Build a record from `submission` and append it to the store.
    ///
    /// Steps, in order:
    /// 1. Resolve the biography type
    /// 2. Record the submission's custom field (kept even if a later step
    ///    fails; a reserved name is dropped and the record is still saved)
    /// 3. Parse the birthdate
    /// 4. Split the multi-line blocks into lists
    /// 5. Snapshot all pending custom fields into the record
    /// 6. Append the record and return a copy of it
    pub fn submit(&mut self, submission: BiographySubmission) -> Result<BiographyRecord, BiographyError> {
        let kind = resolve_type(&submission.kind, submission.is_custom_type);
        if kind.label().trim().is_empty() {
            tracing::warn!("saving biography with an empty custom type");
        }

        if let (Some(name), Some(value)) = (
            submission.custom_field_name.as_deref(),
            submission.custom_field_value.as_deref(),
        ) {
            if let Err(e) = self.add_custom_field(name, value) {
                tracing::warn!(error = %e, "dropping custom field from submission");
            }
        }

        let birthdate = parse_birthdate(&submission.birthdate)?;

        let record = BiographyRecord {
            kind,
            photo: submission.photo_bytes,
            name: submission.name,
            birthdate,
            address: submission.address,
            education: Education {
                elementary: submission.elementary,
                high_school: submission.high_school,
                senior_high_school: submission.senior_high,
            },
            seminars_attended: split_lines(&submission.seminars),
            accomplishments: split_lines(&submission.accomplishments),
            skills: split_lines(&submission.skills),
            hobbies: split_lines(&submission.hobbies),
            custom_fields: self.store.pending_custom_fields().clone(),
        };

        self.store.append(record.clone());
        tracing::info!(kind = %record.kind, name = %record.name, "biography added");

        Ok(record)
    }
}

/// Resolve the selected type label into a `BiographyType`.
///
/// With the custom selector entry chosen, `label` is the user's free text and
/// is taken verbatim (an empty label is accepted).
pub fn resolve_type(label: &str, is_custom: bool) -> BiographyType {
    if is_custom {
        return BiographyType::Custom(label.to_string());
    }
    BiographyType::from(label.to_string())
}

/// Split a multi-line block into trimmed, non-empty lines in source order.
///
/// `\r\n` line endings are handled by the trim.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
