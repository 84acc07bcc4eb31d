use crate::error::{DexError, Result};
use serde::{Deserialize, Serialize};

/// Index of the identifier segment in a summary URL split on `/`.
///
/// `https://pokeapi.co/api/v2/pokemon/25/` splits into
/// `["https:", "", "pokeapi.co", "api", "v2", "pokemon", "25", ""]`.
pub const ID_SEGMENT: usize = 6;

/// A listing record: a name plus the reference URL of its detail resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub name: String,
    pub url: String,
}

impl EntitySummary {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Returns the numeric identifier encoded in `url`.
    pub fn id(&self) -> Result<&str> {
        match self.url.split('/').nth(ID_SEGMENT) {
            Some(segment) if !segment.is_empty() => Ok(segment),
            _ => Err(DexError::InvalidSummaryUrl(self.url.clone())),
        }
    }
}

/// Builds the static sprite address for an identifier.
pub fn sprite_url(sprite_base: &str, id: &str) -> String {
    format!("{}/{}.png", sprite_base.trim_end_matches('/'), id)
}

/// Full record for one entity, fetched on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDetail {
    pub name: String,
    /// Raw height in decimetres.
    pub height: f64,
    /// Raw weight in hectograms.
    pub weight: f64,
    pub types: Vec<String>,
    pub sprite_url: String,
}

impl EntityDetail {
    pub fn height_meters(&self) -> String {
        format!("{} m", tenths(self.height))
    }

    pub fn weight_kilograms(&self) -> String {
        format!("{} kg", tenths(self.weight))
    }

    pub fn type_list(&self) -> String {
        self.types.join(",")
    }
}

// Shortest decimal form: 7 -> "0.7", 100 -> "10".
fn tenths(raw: f64) -> String {
    format!("{}", raw / 10.0)
}

/// Body of the listing endpoint. Paging fields (`count`, `next`, ...) are ignored.
#[derive(Debug, Deserialize)]
pub struct ListingPayload {
    pub results: Vec<EntitySummary>,
}

/// Body of the detail endpoint.
#[derive(Debug, Deserialize)]
pub struct DetailPayload {
    pub name: String,
    pub height: f64,
    pub weight: f64,
    pub types: Vec<TypeSlot>,
    pub sprites: Sprites,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

#[derive(Debug, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

impl DetailPayload {
    /// Converts the wire payload, using `fallback_sprite` when the API has no
    /// default sprite for the entity.
    pub fn into_detail(self, fallback_sprite: String) -> EntityDetail {
        EntityDetail {
            name: self.name,
            height: self.height,
            weight: self.weight,
            types: self.types.into_iter().map(|slot| slot.kind.name).collect(),
            sprite_url: self.sprites.front_default.unwrap_or(fallback_sprite),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_seventh_segment() {
        let summary = EntitySummary::new("pikachu", "https://pokeapi.co/api/v2/pokemon/25/");
        assert_eq!(summary.id().unwrap(), "25");
    }

    #[test]
    fn id_without_trailing_slash() {
        let summary = EntitySummary::new("mew", "https://pokeapi.co/api/v2/pokemon/151");
        assert_eq!(summary.id().unwrap(), "151");
    }

    #[test]
    fn id_missing_segment_is_an_error() {
        let summary = EntitySummary::new("broken", "https://pokeapi.co/api/");
        assert!(matches!(
            summary.id(),
            Err(DexError::InvalidSummaryUrl(url)) if url == "https://pokeapi.co/api/"
        ));
    }

    #[test]
    fn sprite_url_ignores_trailing_slash_on_base() {
        assert_eq!(
            sprite_url("https://sprites.example/pokemon/", "4"),
            "https://sprites.example/pokemon/4.png"
        );
    }

    #[test]
    fn detail_units_are_tenths() {
        let detail = EntityDetail {
            name: "bulbasaur".into(),
            height: 7.0,
            weight: 69.0,
            types: vec!["grass".into(), "poison".into()],
            sprite_url: String::new(),
        };
        assert_eq!(detail.height_meters(), "0.7 m");
        assert_eq!(detail.weight_kilograms(), "6.9 kg");
        assert_eq!(detail.type_list(), "grass,poison");
    }

    #[test]
    fn whole_units_have_no_fraction() {
        let detail = EntityDetail {
            name: "onix".into(),
            height: 88.0,
            weight: 2100.0,
            types: vec!["rock".into()],
            sprite_url: String::new(),
        };
        assert_eq!(detail.height_meters(), "8.8 m");
        assert_eq!(detail.weight_kilograms(), "210 kg");
    }

    #[test]
    fn detail_payload_decodes_pokeapi_shape() {
        let body = r#"{
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "types": [
                {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
                {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
            ],
            "sprites": {"front_default": "https://img.example/1.png", "back_default": null}
        }"#;
        let payload: DetailPayload = serde_json::from_str(body).unwrap();
        let detail = payload.into_detail("unused".into());
        assert_eq!(detail.name, "bulbasaur");
        assert_eq!(detail.types, vec!["grass", "poison"]);
        assert_eq!(detail.sprite_url, "https://img.example/1.png");
    }

    #[test]
    fn fractional_measurements_decode() {
        let body = r#"{"name":"x","height":7.5,"weight":-3,"types":[],"sprites":{"front_default":null}}"#;
        let payload: DetailPayload = serde_json::from_str(body).unwrap();
        let detail = payload.into_detail(String::new());
        assert_eq!(detail.height_meters(), "0.75 m");
        assert_eq!(detail.weight_kilograms(), "-0.3 kg");
    }

    #[test]
    fn missing_front_sprite_falls_back() {
        let body = r#"{"name":"x","height":1,"weight":1,"types":[],"sprites":{"front_default":null}}"#;
        let payload: DetailPayload = serde_json::from_str(body).unwrap();
        let detail = payload.into_detail("https://fallback/9.png".into());
        assert_eq!(detail.sprite_url, "https://fallback/9.png");
    }

    #[test]
    fn listing_payload_ignores_paging_fields() {
        let body = r#"{"count":1302,"next":null,"previous":null,"results":[{"name":"bulbasaur","url":"https://pokeapi.co/api/v2/pokemon/1/"}]}"#;
        let payload: ListingPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.results.len(), 1);
        assert_eq!(payload.results[0].id().unwrap(), "1");
    }
}
