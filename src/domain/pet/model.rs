use chrono::NaiveDate;
use serde::{Serialize, Deserialize};
use mongodb::bson::oid::ObjectId;

use crate::utils::{date_format, validation::FieldErrors};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Pet {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub birth_date: NaiveDate,
    pub owner_id: ObjectId,
    pub type_id: ObjectId,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PetType {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
}

impl PetType {
    pub fn new(name: &str) -> Self {
        PetType { id: None, name: name.to_string() }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PetForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub type_id: String,
}

impl PetForm {

    pub fn from_pet(pet: &Pet) -> Self {
        PetForm {
            name: pet.name.clone(),
            birth_date: date_format::format_date(pet.birth_date),
            type_id: pet.type_id.to_hex(),
        }
    }

    /// Checks the form on its own and against the owner's other pets and the
    /// known pet types. `id` is the pet being edited, if any.
    pub fn into_pet(
        self,
        id: Option<ObjectId>,
        owner_id: ObjectId,
        siblings: &[Pet],
        pet_types: &[PetType],
        today: NaiveDate,
    ) -> Result<Pet, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        errors.require("name", name);
        let folded = name.to_lowercase();
        let taken = siblings
            .iter()
            .any(|other| other.id != id && other.name.to_lowercase() == folded);
        if !name.is_empty() && taken {
            errors.add("name", "is already in use");
        }

        errors.require("birth_date", &self.birth_date);
        let birth_date = date_format::parse_date(&self.birth_date).ok();
        match birth_date {
            None => errors.add("birth_date", "must be a date like 31/12/2020"),
            Some(date) if date > today => errors.add("birth_date", "cannot be in the future"),
            Some(_) => {}
        }

        errors.require("type_id", &self.type_id);
        let type_id = ObjectId::parse_str(self.type_id.trim())
            .ok()
            .filter(|type_id| pet_types.iter().any(|t| t.id == Some(*type_id)));
        if type_id.is_none() {
            errors.add("type_id", "is not a known pet type");
        }

        match (birth_date, type_id) {
            (Some(birth_date), Some(type_id)) if errors.is_empty() => Ok(Pet {
                id,
                name: name.to_string(),
                birth_date,
                owner_id,
                type_id,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn cat_type() -> PetType {
        PetType { id: Some(ObjectId::new()), name: "cat".to_string() }
    }

    fn form(pet_type: &PetType) -> PetForm {
        PetForm {
            name: "Leo".to_string(),
            birth_date: "07/09/2010".to_string(),
            type_id: pet_type.id.unwrap().to_hex(),
        }
    }

    #[test]
    fn test_valid_form_becomes_pet() {
        let cat = cat_type();
        let owner_id = ObjectId::new();

        let pet = form(&cat).into_pet(None, owner_id, &[], &[cat.clone()], today()).unwrap();

        assert_eq!(pet.name, "Leo");
        assert_eq!(pet.owner_id, owner_id);
        assert_eq!(pet.type_id, cat.id.unwrap());
        assert_eq!(pet.birth_date, NaiveDate::from_ymd_opt(2010, 9, 7).unwrap());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = PetForm::default()
            .into_pet(None, ObjectId::new(), &[], &[cat_type()], today())
            .unwrap_err();

        assert_eq!(errors.get("name"), Some("is required"));
        assert_eq!(errors.get("birth_date"), Some("is required"));
        assert_eq!(errors.get("type_id"), Some("is required"));
    }

    #[test]
    fn test_future_birth_date_rejected() {
        let cat = cat_type();
        let mut future = form(&cat);
        future.birth_date = "02/06/2024".to_string();

        let errors = future.into_pet(None, ObjectId::new(), &[], &[cat], today()).unwrap_err();
        assert_eq!(errors.get("birth_date"), Some("cannot be in the future"));
    }

    #[test]
    fn test_unknown_pet_type_rejected() {
        let cat = cat_type();
        let other = cat_type();
        let errors = form(&other)
            .into_pet(None, ObjectId::new(), &[], &[cat], today())
            .unwrap_err();

        assert_eq!(errors.get("type_id"), Some("is not a known pet type"));
    }

    #[test]
    fn test_duplicate_name_rejected_except_for_itself() {
        let cat = cat_type();
        let owner_id = ObjectId::new();
        let existing = form(&cat)
            .into_pet(Some(ObjectId::new()), owner_id, &[], &[cat.clone()], today())
            .unwrap();

        let mut shouting = form(&cat);
        shouting.name = "LEO".to_string();
        let errors = shouting
            .into_pet(None, owner_id, &[existing.clone()], &[cat.clone()], today())
            .unwrap_err();
        assert_eq!(errors.get("name"), Some("is already in use"));

        let edited = form(&cat).into_pet(existing.id, owner_id, &[existing.clone()], &[cat], today());
        assert!(edited.is_ok());
    }

    #[test]
    fn test_duplicate_name_ignores_non_ascii_case() {
        let cat = cat_type();
        let owner_id = ObjectId::new();
        let mut named = form(&cat);
        named.name = "Éclair".to_string();
        let existing = named
            .into_pet(Some(ObjectId::new()), owner_id, &[], &[cat.clone()], today())
            .unwrap();

        let mut lower = form(&cat);
        lower.name = "éclair".to_string();
        let errors = lower
            .into_pet(None, owner_id, &[existing], &[cat], today())
            .unwrap_err();
        assert_eq!(errors.get("name"), Some("is already in use"));
    }

    #[test]
    fn test_form_from_pet_formats_date() {
        let cat = cat_type();
        let pet = form(&cat).into_pet(None, ObjectId::new(), &[], &[cat.clone()], today()).unwrap();
        let again = PetForm::from_pet(&pet);

        assert_eq!(again.birth_date, "07/09/2010");
        assert_eq!(again.type_id, cat.id.unwrap().to_hex());
    }
}
