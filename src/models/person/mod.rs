// Person module
// Owners that events belong to; supplied wholesale by the embedder

use serde::{Deserialize, Serialize};

use crate::models::color::ColorTag;

/// An owner of events (a person or a shared resource).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<ColorTag>,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: ColorTag) -> Self {
        self.color = Some(color);
        self
    }
}

/// Look up a person by id in a roster.
pub fn find_person<'a>(people: &'a [Person], id: &str) -> Option<&'a Person> {
    people.iter().find(|person| person.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_person() {
        let people = vec![
            Person::new("d1", "Dr. Adams"),
            Person::new("d2", "Dr. Baker").with_color(ColorTag::Green),
        ];

        assert_eq!(find_person(&people, "d2").map(|p| p.name.as_str()), Some("Dr. Baker"));
        assert!(find_person(&people, "d3").is_none());
    }

    #[test]
    fn test_deserialize_without_color() {
        let person: Person = serde_json::from_str(r#"{"id":"d1","name":"Dr. Adams"}"#).unwrap();
        assert_eq!(person.color, None);
    }
}
