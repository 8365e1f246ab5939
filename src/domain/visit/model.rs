use chrono::NaiveDate;
use serde::{Serialize, Deserialize};
use mongodb::bson::oid::ObjectId;

use crate::utils::{date_format, validation::FieldErrors};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Visit {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub pet_id: ObjectId,
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct VisitForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
}

impl VisitForm {

    /// A blank form dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        VisitForm {
            date: date_format::format_date(today),
            description: String::new(),
        }
    }

    pub fn into_visit(self, pet_id: ObjectId) -> Result<Visit, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("date", &self.date);
        errors.require("description", &self.description);

        let date = date_format::parse_date(&self.date);
        if date.is_err() {
            errors.add("date", "must be a date like 31/12/2020");
        }

        match date {
            Ok(date) if errors.is_empty() => Ok(Visit {
                id: None,
                pet_id,
                date,
                description: self.description.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }
}
