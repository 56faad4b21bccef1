//! Identifier generation

use uuid::Uuid;

/// Generate a fresh random (v4) identifier.
pub fn generate_id() -> Uuid {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct() {
        assert_ne!(generate_id(), generate_id());
    }

    #[test]
    fn test_textual_form_is_standard() {
        let id = generate_id().to_string();
        assert_eq!(id.len(), 36);
        assert_eq!(id.matches('-').count(), 4);
        assert_eq!(Uuid::parse_str(&id).unwrap().get_version_num(), 4);
    }
}
