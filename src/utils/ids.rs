use mongodb::bson::oid::ObjectId;

use crate::utils::errors::ApiError;

/// Parses an id taken from a URL path. Anything that is not a valid
/// ObjectId cannot name a stored document, so it reads as not found.
pub fn parse_object_id(raw: &str, what: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw.trim())
        .map_err(|_| ApiError::NotFound(format!("{} {} not found", what, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_hex_ids() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex(), "Owner").unwrap(), id);
    }

    #[test]
    fn test_invalid_id_is_not_found() {
        match parse_object_id("add", "Owner") {
            Err(ApiError::NotFound(message)) => assert_eq!(message, "Owner add not found"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }
}
