// Common validation types and traits

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Field-level errors collected during one validation pass.
///
/// Holds at most one message per field: the first rule a field violates is
/// the one reported, later messages for the same field are dropped.
/// Insertion order is kept so errors come back in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        if self.get(field).is_some() {
            return;
        }
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    /// Records the error of a field check and passes its value through.
    pub fn check<T>(&mut self, field: &str, outcome: Result<T, String>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                self.add_error(field, &message);
                None
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for error in &self.errors {
            map.serialize_entry(&error.field, &error.message)?;
        }
        map.end()
    }
}

pub trait Validator<T> {
    type Output;

    fn validate(&self, data: &T) -> Result<Self::Output, ValidationErrors>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add_error("email", "first");
        errors.add_error("email", "second");
        errors.add_error("services", "third");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some("first"));
        assert_eq!(errors.get("services"), Some("third"));
    }

    #[test]
    fn test_check_passes_value_or_records_message() {
        let mut errors = ValidationErrors::new();

        assert_eq!(errors.check("a", Ok::<_, String>(7)), Some(7));
        assert_eq!(errors.check::<i32>("b", Err("bad".to_string())), None);
        assert!(errors.get("a").is_none());
        assert_eq!(errors.get("b"), Some("bad"));
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut errors = ValidationErrors::new();
        errors.add_error("fullName", "Full name is required");
        errors.add_error("email", "Invalid email address");

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(
            json,
            r#"{"fullName":"Full name is required","email":"Invalid email address"}"#
        );
    }
}
