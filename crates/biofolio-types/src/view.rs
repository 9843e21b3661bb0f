//! Presentation view models handed to the render layer.

use serde::Serialize;

use crate::biography::BiographyRecord;

/// A record ready for display, with its age computed at presentation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView {
    #[serde(flatten)]
    pub record: BiographyRecord,
    /// Whole years between the birthdate and the presentation date.
    pub age_years: i32,
}

/// All records sharing one type label, in append order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeGroup {
    pub type_name: String,
    pub records: Vec<RecordView>,
}

/// Records partitioned by type, or the empty-state signal.
///
/// `Empty` is informational: it tells the render layer to show the
/// "nothing added yet" notice instead of group headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "groups", rename_all = "lowercase")]
pub enum GroupedView {
    Empty,
    Groups(Vec<TypeGroup>),
}

impl GroupedView {
    pub fn is_empty(&self) -> bool {
        matches!(self, GroupedView::Empty)
    }

    /// The groups in display order (empty slice for the empty state).
    pub fn groups(&self) -> &[TypeGroup] {
        match self {
            GroupedView::Empty => &[],
            GroupedView::Groups(groups) => groups,
        }
    }

    /// Number of records across all groups.
    pub fn total_records(&self) -> usize {
        self.groups().iter().map(|g| g.records.len()).sum()
    }
}
