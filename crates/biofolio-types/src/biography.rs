use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use std::fmt;

/// Field names owned by the fixed record schema.
///
/// A custom field may never use one of these names; the presenter also skips
/// them when listing custom fields. The snake_case spellings of the two
/// compound keys are listed too.
pub const RESERVED_FIELD_NAMES: [&str; 12] = [
    "type",
    "photo",
    "name",
    "birthdate",
    "address",
    "education",
    "educational_attainment",
    "seminarsAttended",
    "seminars_attended",
    "accomplishments",
    "skills",
    "hobbies",
];

/// Whether `name` collides with a fixed record field.
pub fn is_reserved_field_name(name: &str) -> bool {
    RESERVED_FIELD_NAMES.contains(&name)
}

/// The kind of biography a record represents.
///
/// The two built-in kinds come from the type selector; `Custom` carries a
/// free-text label typed by the user. All three serialize to a single display
/// string, so `Custom("Personal".into())` and `Personal` group together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum BiographyType {
    Personal,
    Professional,
    Custom(String),
}

impl BiographyType {
    /// Label of the selector entry that switches to a free-text type.
    pub const CUSTOM_SENTINEL: &'static str = "Custom";

    /// Labels offered by the type selector, in display order.
    pub const SELECTOR_LABELS: [&'static str; 3] = ["Personal", "Professional", "Custom"];

    /// The display string used for grouping and rendering.
    pub fn label(&self) -> &str {
        match self {
            BiographyType::Personal => "Personal",
            BiographyType::Professional => "Professional",
            BiographyType::Custom(label) => label,
        }
    }
}

impl fmt::Display for BiographyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<BiographyType> for String {
    fn from(kind: BiographyType) -> Self {
        match kind {
            BiographyType::Custom(label) => label,
            other => other.label().to_string(),
        }
    }
}

impl From<String> for BiographyType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Personal" => BiographyType::Personal,
            "Professional" => BiographyType::Professional,
            _ => BiographyType::Custom(label),
        }
    }
}

/// Educational attainment with its three fixed levels.
///
/// Empty strings are kept as-is: a level left blank on the form is still
/// rendered, just with no value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    #[serde(rename = "Elementary")]
    pub elementary: String,
    #[serde(rename = "High School")]
    pub high_school: String,
    #[serde(rename = "Senior High School")]
    pub senior_high_school: String,
}

impl Education {
    /// Level labels paired with their values, in display order.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("Elementary", self.elementary.as_str()),
            ("High School", self.high_school.as_str()),
            ("Senior High School", self.senior_high_school.as_str()),
        ]
    }
}

/// One user-named extension field and its accumulated values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub name: String,
    pub values: Vec<String>,
}

/// Ordered mapping from custom field name to its values.
///
/// Fields keep the order in which their names were first seen; values keep
/// the order in which they were appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomFields(Vec<CustomField>);

impl CustomFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the field called `name`, creating the field if absent.
    pub fn append(&mut self, name: &str, value: String) {
        match self.0.iter_mut().find(|field| field.name == name) {
            Some(field) => field.values.push(value),
            None => self.0.push(CustomField {
                name: name.to_string(),
                values: vec![value],
            }),
        }
    }

    /// Values recorded for `name`, if the field exists.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.values.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomField> {
        self.0.iter()
    }

    /// Keep only the fields for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(&CustomField) -> bool) {
        self.0.retain(keep);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A saved biography entry.
///
/// Age is deliberately absent: it is derived from `birthdate` whenever the
/// record is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiographyRecord {
    #[serde(rename = "type")]
    pub kind: BiographyType,
    /// Raw image bytes of the uploaded photo, base64 in JSON.
    #[serde(default, with = "photo_base64")]
    pub photo: Option<Vec<u8>>,
    pub name: String,
    pub birthdate: NaiveDate,
    pub address: String,
    pub education: Education,
    pub seminars_attended: Vec<String>,
    pub accomplishments: Vec<String>,
    pub skills: Vec<String>,
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// One raw form submission, exactly as the input layer collected it.
///
/// Multi-line blocks are unsplit text; `birthdate` is the unparsed
/// `YYYY-MM-DD` string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BiographySubmission {
    /// Selected type label, or the free-text label when `is_custom_type` is set.
    #[serde(rename = "type")]
    pub kind: String,
    pub is_custom_type: bool,
    #[serde(with = "photo_base64")]
    pub photo_bytes: Option<Vec<u8>>,
    pub name: String,
    pub birthdate: String,
    pub address: String,
    pub elementary: String,
    pub high_school: String,
    pub senior_high: String,
    pub seminars: String,
    pub accomplishments: String,
    pub skills: String,
    pub hobbies: String,
    pub custom_field_name: Option<String>,
    pub custom_field_value: Option<String>,
}

/// Serde adapter storing optional binary data as a base64 string.
pub mod photo_base64 {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(photo: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match photo {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|e| STANDARD.decode(e.as_bytes()).map_err(serde::de::Error::custom))
            .transpose()
    }
}
