//! Biography store trait definition.

use biofolio_types::biography::{BiographyRecord, CustomFields};

/// Store trait for biography records and pending custom fields.
///
/// A store lives exactly as long as one session and is mutated only through
/// the builder, so the methods are synchronous and take `&mut self` for
/// writes. There are no update or delete operations.
pub trait BiographyStore {
    /// Append a record to the end of the session's biographies.
    fn append(&mut self, record: BiographyRecord);

    /// All records in append order.
    fn all(&self) -> &[BiographyRecord];

    /// Append `value` to the pending custom field `name`, creating it if absent.
    fn record_custom_field_value(&mut self, name: &str, value: String);

    /// Custom fields accumulated so far in this session.
    fn pending_custom_fields(&self) -> &CustomFields;
}
