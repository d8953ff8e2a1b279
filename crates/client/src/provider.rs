//! PokeAPI-backed entity provider.
//!
//! Rolls a random Pokédex id (generations 1 through 8) and maps the
//! response onto the core [`Entity`]: official-artwork sprite with the
//! plain front sprite as fallback, and the attack/defense/speed base
//! stats. Stats absent from the payload default to 0 rather than failing
//! the fetch.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use serde::Deserialize;

use game_core::{AttributeSet, Entity, EntityId};
use runtime::{EntityProvider, FetchError};

/// Highest Pokédex id the provider will roll (end of generation 8).
const MAX_POKEDEX_ID: u32 = 898;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// [`EntityProvider`] implementation backed by the public PokeAPI.
pub struct PokeApiProvider {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl EntityProvider for PokeApiProvider {
    async fn fetch_random_entity(&self) -> Result<Entity, FetchError> {
        let id = rand::thread_rng().gen_range(1..=MAX_POKEDEX_ID);
        let url = format!("{}/pokemon/{}", self.base_url, id);

        tracing::debug!(%url, "Fetching entity");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Unreachable(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        let payload: PokemonResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        Ok(payload.into_entity())
    }
}

#[derive(Debug, Deserialize)]
struct PokemonResponse {
    id: u32,
    name: String,
    sprites: Sprites,
    stats: Vec<StatEntry>,
}

#[derive(Debug, Deserialize)]
struct Sprites {
    front_default: Option<String>,
    other: Option<OtherSprites>,
}

#[derive(Debug, Deserialize)]
struct OtherSprites {
    #[serde(rename = "official-artwork")]
    official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Deserialize)]
struct ArtworkSprites {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatEntry {
    base_stat: u32,
    stat: StatName,
}

#[derive(Debug, Deserialize)]
struct StatName {
    name: String,
}

impl PokemonResponse {
    fn into_entity(self) -> Entity {
        let attributes = AttributeSet::new(
            self.base_stat("attack"),
            self.base_stat("defense"),
            self.base_stat("speed"),
        );

        let image = self
            .sprites
            .other
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default)
            .or(self.sprites.front_default)
            .unwrap_or_default();

        Entity::new(EntityId(self.id), self.name, image, attributes)
    }

    fn base_stat(&self, name: &str) -> u32 {
        self.stats
            .iter()
            .find(|entry| entry.stat.name == name)
            .map(|entry| entry.base_stat)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_construction_succeeds() {
        assert!(PokeApiProvider::new("https://pokeapi.test/api/v2").is_ok());
    }

    #[test]
    fn payload_maps_onto_entity() {
        let payload: PokemonResponse = serde_json::from_str(
            r#"{
                "id": 25,
                "name": "pikachu",
                "sprites": {
                    "front_default": "https://sprites.test/25.png",
                    "other": {
                        "official-artwork": {
                            "front_default": "https://artwork.test/25.png"
                        }
                    }
                },
                "stats": [
                    {"base_stat": 55, "stat": {"name": "attack"}},
                    {"base_stat": 40, "stat": {"name": "defense"}},
                    {"base_stat": 50, "stat": {"name": "special-attack"}},
                    {"base_stat": 90, "stat": {"name": "speed"}}
                ]
            }"#,
        )
        .unwrap();

        let entity = payload.into_entity();

        assert_eq!(entity.id, EntityId(25));
        assert_eq!(entity.name, "pikachu");
        assert_eq!(entity.image, "https://artwork.test/25.png");
        assert_eq!(entity.attributes, AttributeSet::new(55, 40, 90));
    }

    #[test]
    fn missing_artwork_falls_back_to_front_sprite() {
        let payload: PokemonResponse = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "bulbasaur",
                "sprites": {"front_default": "https://sprites.test/1.png", "other": null},
                "stats": []
            }"#,
        )
        .unwrap();

        let entity = payload.into_entity();

        assert_eq!(entity.image, "https://sprites.test/1.png");
        // Absent stats default to zero instead of failing the fetch.
        assert_eq!(entity.attributes, AttributeSet::default());
    }
}
