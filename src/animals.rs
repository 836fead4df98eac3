// Domain model shared by the fetch client, the listing controller and the views
//
// Animals are owned by the backend; the client only ever holds a read-only,
// possibly stale copy that is replaced wholesale on each successful fetch.

use serde::{Deserialize, Deserializer, Serialize};
use std::sync::{Arc, Mutex};

/// One animal available for adoption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// Stable unique key (the API sends either a number or a string)
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    /// Species, e.g. "Cachorro"
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    /// The registration form posts this as `race`
    #[serde(alias = "race")]
    pub breed: String,
    #[serde(default)]
    pub description: String,
    /// Photo reference (URL or storage key)
    #[serde(default)]
    pub photo: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// Species offered by the filter dialog
pub const ANIMAL_TYPES: &[&str] = &["Cachorro", "Gato"];

/// Genders offered by the filter dialog
pub const ANIMAL_GENDERS: &[&str] = &["Macho", "Fêmea"];

/// Criteria narrowing the available-animals list
///
/// Replaced as a whole value, never edited in place. A filter always carries
/// at least one criterion; "no filter" is `Option::None` at the holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalFilter {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gender: Option<String>,
}

impl AnimalFilter {
    /// Build a filter from optional criteria, `None` when both are empty
    pub fn new(kind: Option<String>, gender: Option<String>) -> Option<Self> {
        let kind = kind.filter(|s| !s.trim().is_empty());
        let gender = gender.filter(|s| !s.trim().is_empty());
        if kind.is_none() && gender.is_none() {
            return None;
        }
        Some(Self { kind, gender })
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    /// Query parameters in the order the API documents them
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(kind) = &self.kind {
            pairs.push(("type", kind.as_str()));
        }
        if let Some(gender) = &self.gender {
            pairs.push(("gender", gender.as_str()));
        }
        pairs
    }

    /// Whether an animal satisfies every criterion (used by the demo backend)
    pub fn matches(&self, animal: &Animal) -> bool {
        let kind_ok = self
            .kind
            .as_deref()
            .map_or(true, |k| animal.kind.eq_ignore_ascii_case(k));
        let gender_ok = self
            .gender
            .as_deref()
            .map_or(true, |g| animal.gender.to_lowercase() == g.to_lowercase());
        kind_ok && gender_ok
    }

    /// Short human-readable summary for the status bar
    pub fn describe(&self) -> String {
        [self.kind(), self.gender()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

/// Which listing page is being shown, passed to the empty-state view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageContext {
    AnimalsAvailableToAdopt,
    /// The user's own animals; rendered outside the available-animals page
    #[allow(dead_code)]
    MyAnimals,
}

impl PageContext {
    /// Tag string shared with the web client
    pub fn tag(&self) -> &'static str {
        match self {
            PageContext::AnimalsAvailableToAdopt => "animals-available-to-adopt",
            PageContext::MyAnimals => "my-animals",
        }
    }
}

/// Cross-page animal state
///
/// Written by the page controllers, read by everything else through
/// [`AnimalsContext::available`] snapshots.
#[derive(Debug, Default)]
pub struct AnimalsContext {
    available: Vec<Animal>,
}

impl AnimalsContext {
    pub fn available(&self) -> &[Animal] {
        &self.available
    }

    /// Replace the available list wholesale
    pub fn set_available(&mut self, animals: Vec<Animal>) {
        self.available = animals;
    }
}

/// Shared animals context, handed explicitly to the controller and the views
pub type SharedAnimals = Arc<Mutex<AnimalsContext>>;

/// Ids appearing more than once, in first-seen order
pub fn duplicate_ids(animals: &[Animal]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    let mut dupes = Vec::new();
    for animal in animals {
        if !seen.insert(animal.id.as_str()) && !dupes.contains(&animal.id.as_str()) {
            dupes.push(animal.id.as_str());
        }
    }
    dupes
}

#[cfg(test)]
pub(crate) fn animal(id: &str, name: &str, kind: &str, gender: &str) -> Animal {
    Animal {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        gender: gender.to_string(),
        breed: "Vira-lata".to_string(),
        description: format!("{} é dócil e brincalhão.", name),
        photo: format!("https://fotos.adota.dev/{}.jpg", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_accepts_numeric_id_and_race() {
        let json = r#"{
            "id": 42,
            "name": "Linux",
            "type": "Cachorro",
            "gender": "Macho",
            "race": "Vira-lata",
            "description": "Cachorro dócil e brincalhão.",
            "photo": "dog1.jpg"
        }"#;

        let animal: Animal = serde_json::from_str(json).unwrap();
        assert_eq!(animal.id, "42");
        assert_eq!(animal.kind, "Cachorro");
        assert_eq!(animal.breed, "Vira-lata");
    }

    #[test]
    fn test_empty_filter_is_none() {
        assert!(AnimalFilter::new(None, None).is_none());
        assert!(AnimalFilter::new(Some("  ".into()), Some(String::new())).is_none());
        assert!(AnimalFilter::new(Some("Gato".into()), None).is_some());
    }

    #[test]
    fn test_filter_query_pairs_skip_unset_criteria() {
        let filter = AnimalFilter::new(None, Some("Fêmea".into())).unwrap();
        assert_eq!(filter.query_pairs(), vec![("gender", "Fêmea")]);

        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json, serde_json::json!({"gender": "Fêmea"}));
    }

    #[test]
    fn test_filter_matches() {
        let dog = animal("1", "Linux", "Cachorro", "Macho");
        let cat = animal("2", "Mia", "Gato", "Fêmea");
        let filter = AnimalFilter::new(Some("cachorro".into()), None).unwrap();
        assert!(filter.matches(&dog));
        assert!(!filter.matches(&cat));

        let filter = AnimalFilter::new(None, Some("FÊMEA".into())).unwrap();
        assert!(filter.matches(&cat));
    }

    #[test]
    fn test_duplicate_ids() {
        let list = vec![
            animal("1", "A", "Gato", "Macho"),
            animal("2", "B", "Gato", "Macho"),
            animal("1", "C", "Gato", "Macho"),
            animal("1", "D", "Gato", "Macho"),
        ];
        assert_eq!(duplicate_ids(&list), vec!["1"]);
        assert!(duplicate_ids(&list[..2]).is_empty());
    }

    #[test]
    fn test_page_context_tags() {
        assert_eq!(
            PageContext::AnimalsAvailableToAdopt.tag(),
            "animals-available-to-adopt"
        );
        assert_eq!(PageContext::MyAnimals.tag(), "my-animals");
    }

    #[test]
    fn test_describe_lists_set_criteria() {
        let both = AnimalFilter::new(Some("Gato".into()), Some("Fêmea".into())).unwrap();
        assert_eq!(both.describe(), "Gato · Fêmea");

        let gender_only = AnimalFilter::new(None, Some("Macho".into())).unwrap();
        assert_eq!(gender_only.describe(), "Macho");
    }
}
