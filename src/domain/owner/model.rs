use serde::{Serialize, Deserialize};
use mongodb::bson::oid::ObjectId;

use crate::utils::validation::FieldErrors;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Owner {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub telephone: String,
}

impl Owner {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields posted by the add and edit owner forms.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct OwnerForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub telephone: String,
}

impl OwnerForm {

    pub fn from_owner(owner: &Owner) -> Self {
        OwnerForm {
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            address: owner.address.clone(),
            city: owner.city.clone(),
            telephone: owner.telephone.clone(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("first_name", &self.first_name);
        errors.require("last_name", &self.last_name);

        let telephone = self.telephone.trim();
        if !telephone.is_empty()
            && (telephone.len() > 10 || !telephone.chars().all(|c| c.is_ascii_digit()))
        {
            errors.add("telephone", "must be up to 10 digits");
        }
        errors
    }

    pub fn into_owner(self, id: Option<ObjectId>) -> Result<Owner, FieldErrors> {
        let errors = self.validate();
        errors.into_result(Owner {
            id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            telephone: self.telephone.trim().to_string(),
        })
    }
}

/// Query string of the owner list page.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct OwnerSearch {
    pub last_name: Option<String>,
}

impl OwnerSearch {
    pub fn last_name(&self) -> Option<&str> {
        self.last_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> OwnerForm {
        OwnerForm {
            first_name: " George ".to_string(),
            last_name: "Franklin".to_string(),
            address: "110 W. Liberty St.".to_string(),
            city: "Madison".to_string(),
            telephone: "6085551023".to_string(),
        }
    }

    #[test]
    fn test_valid_form_becomes_owner() {
        let owner = form().into_owner(None).unwrap();

        assert_eq!(owner.id, None);
        assert_eq!(owner.first_name, "George");
        assert_eq!(owner.full_name(), "George Franklin");
    }

    #[test]
    fn test_names_are_required() {
        let errors = OwnerForm::default().validate();

        assert_eq!(errors.get("first_name"), Some("is required"));
        assert_eq!(errors.get("last_name"), Some("is required"));
        assert_eq!(errors.get("telephone"), None);
    }

    #[test]
    fn test_telephone_must_be_digits() {
        let mut with_letters = form();
        with_letters.telephone = "608-555".to_string();
        assert!(with_letters.validate().get("telephone").is_some());

        let mut too_long = form();
        too_long.telephone = "60855510231".to_string();
        assert!(too_long.validate().get("telephone").is_some());
    }

    #[test]
    fn test_form_from_owner_keeps_fields() {
        let owner = form().into_owner(Some(ObjectId::new())).unwrap();
        let again = OwnerForm::from_owner(&owner);

        assert_eq!(again.first_name, "George");
        assert_eq!(again.city, "Madison");
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let search = OwnerSearch { last_name: Some("  ".to_string()) };
        assert_eq!(search.last_name(), None);

        let search = OwnerSearch { last_name: Some(" Dav ".to_string()) };
        assert_eq!(search.last_name(), Some("Dav"));
    }
}
