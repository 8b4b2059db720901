use rollcall_core::value::FieldValue;
use rollcall_core::value::GraphQLObject;
use rollcall_core::value::ScalarValue;
use serde::Deserialize;
use serde::Serialize;

/// A student record.
///
/// Serializes with the roster's wire field names (`des`, `nationalid`), which
/// are also the names used by records files.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Student {
    pub id: i64,
    pub name: String,

    #[serde(default, rename = "des", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub score: f64,

    #[serde(default, rename = "nationalid", skip_serializing_if = "Option::is_none")]
    pub national_id: Option<ScalarValue>,
}

impl GraphQLObject for Student {
    fn type_name(&self) -> &str {
        "Student"
    }

    fn field_value(&self, field_name: &str) -> Option<FieldValue> {
        match field_name {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "des" => Some(self.description.as_deref().into()),
            "score" => Some(self.score.into()),
            "nationalid" => Some(self.national_id.clone().into()),
            _ => None,
        }
    }
}

/// The fields of a student about to be enrolled. The store assigns the id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub description: Option<String>,
    pub score: f64,
    pub national_id: Option<ScalarValue>,
}
impl NewStudent {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_national_id(mut self, national_id: ScalarValue) -> Self {
        self.national_id = Some(national_id);
        self
    }

    pub(crate) fn into_student(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            description: self.description,
            score: self.score,
            national_id: self.national_id,
        }
    }
}

/// A partial update. Only fields that are `Some` are applied; for
/// `description`, `Some(None)` clears it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub score: Option<f64>,
}
impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.score.is_none()
    }

    pub(crate) fn apply_to(self, student: &mut Student) {
        if let Some(name) = self.name {
            student.name = name;
        }
        if let Some(description) = self.description {
            student.description = description;
        }
        if let Some(score) = self.score {
            student.score = score;
        }
    }
}
