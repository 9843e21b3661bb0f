//! Biography presenter service.
//!
//! Reads the session store and partitions its records by type label for the
//! render layer. Every call does a full scan; there is no caching.

use std::collections::BTreeMap;

use biofolio_types::biography::{BiographyRecord, is_reserved_field_name};
use biofolio_types::view::{GroupedView, RecordView, TypeGroup};
use chrono::NaiveDate;

use crate::age::calculate_age;
use crate::repository::biography::BiographyStore;

/// Read-only service producing grouped views of a session's records.
pub struct BiographyPresenter<'a, S: BiographyStore> {
    store: &'a S,
}

impl<'a, S: BiographyStore> BiographyPresenter<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Group all records by type label, computing ages relative to `today`.
    ///
    /// Groups are sorted by label in ascending byte order; records keep their
    /// append order within a group. Returns `GroupedView::Empty` when the
    /// session has no records.
    pub fn grouped_view(&self, today: NaiveDate) -> GroupedView {
        let records = self.store.all();
        if records.is_empty() {
            return GroupedView::Empty;
        }

        let mut groups: BTreeMap<&str, Vec<RecordView>> = BTreeMap::new();
        for record in records {
            groups
                .entry(record.kind.label())
                .or_default()
                .push(record_view(record, today));
        }

        GroupedView::Groups(
            groups
                .into_iter()
                .map(|(type_name, records)| TypeGroup {
                    type_name: type_name.to_string(),
                    records,
                })
                .collect(),
        )
    }

    /// Same as [`grouped_view`](Self::grouped_view), using the local date.
    pub fn grouped_view_today(&self) -> GroupedView {
        self.grouped_view(chrono::Local::now().date_naive())
    }
}

/// Build the view of one record: its fields, custom fields without any fixed
/// names, and the computed age.
pub fn record_view(record: &BiographyRecord, today: NaiveDate) -> RecordView {
    let mut record = record.clone();
    record
        .custom_fields
        .retain(|field| !is_reserved_field_name(&field.name));
    let age_years = calculate_age(record.birthdate, today);
    RecordView { record, age_years }
}
