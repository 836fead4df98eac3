// Demo mode: serve a fixed shelter from memory
//
// Lets the TUI be explored without an adoption API running. Latency is
// simulated so the loading state is visible, and filtering happens locally
// with the same criteria the server would apply.
//
// Run with: ADOTA_DEMO=1 cargo run --release

use super::{AnimalsApi, ApiResponse, FetchError};
use crate::animals::{Animal, AnimalFilter};
use async_trait::async_trait;
use std::time::Duration;

/// In-memory adoption API
pub struct DemoApi {
    animals: Vec<Animal>,
    latency: Duration,
}

impl DemoApi {
    pub fn new() -> Self {
        Self::with_animals(demo_shelter(), Duration::from_millis(600))
    }

    pub fn with_animals(animals: Vec<Animal>, latency: Duration) -> Self {
        Self { animals, latency }
    }
}

impl Default for DemoApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnimalsApi for DemoApi {
    fn name(&self) -> &'static str {
        "demo"
    }

    async fn fetch_available(
        &self,
        filter: Option<AnimalFilter>,
        _token: String,
    ) -> Result<ApiResponse, FetchError> {
        tokio::time::sleep(self.latency).await;

        let animals = self
            .animals
            .iter()
            .filter(|a| filter.as_ref().map_or(true, |f| f.matches(a)))
            .cloned()
            .collect();

        Ok(ApiResponse::ok(animals))
    }
}

fn demo_shelter() -> Vec<Animal> {
    let entry = |id: &str, name: &str, kind: &str, gender: &str, breed: &str, description: &str| {
        Animal {
            id: id.to_string(),
            name: name.to_string(),
            kind: kind.to_string(),
            gender: gender.to_string(),
            breed: breed.to_string(),
            description: description.to_string(),
            photo: format!("https://fotos.adota.dev/{}.jpg", id),
        }
    };

    vec![
        entry(
            "1",
            "Linux",
            "Cachorro",
            "Macho",
            "Vira-lata",
            "Cachorro dócil e brincalhão.",
        ),
        entry(
            "2",
            "Mia",
            "Gato",
            "Fêmea",
            "Siamês",
            "Gata tranquila, gosta de colo e de dormir ao sol.",
        ),
        entry(
            "3",
            "Thor",
            "Cachorro",
            "Macho",
            "Labrador",
            "Muito energético, ideal para casas com quintal.",
        ),
        entry(
            "4",
            "Luna",
            "Cachorro",
            "Fêmea",
            "Beagle",
            "Curiosa e carinhosa, se dá bem com crianças.",
        ),
        entry(
            "5",
            "Frajola",
            "Gato",
            "Macho",
            "SRD",
            "Resgatado ainda filhote, castrado e vacinado.",
        ),
    ]
}
