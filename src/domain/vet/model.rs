use serde::{Serialize, Deserialize};
use mongodb::bson::oid::ObjectId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Vet {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub specialties: Vec<String>,
}

impl Vet {
    pub fn new(first_name: &str, last_name: &str, specialties: &[&str]) -> Self {
        Vet {
            id: None,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
        }
    }
}
