use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, MappingError};
use crate::tool::{base, non_empty_trimmed, Tool};

pub const POKEAPI_BASE: &str = "https://pokeapi.co/api/v2";

/// Color used for types missing from [`TYPE_COLORS`]
pub const DEFAULT_TYPE_COLOR: &str = "#68A090";

/// Badge color per Pokémon type
pub const TYPE_COLORS: [(&str, &str); 18] = [
    ("normal", "#A8A878"),
    ("fire", "#F08030"),
    ("water", "#6890F0"),
    ("electric", "#F8D030"),
    ("grass", "#78C850"),
    ("ice", "#98D8D8"),
    ("fighting", "#C03028"),
    ("poison", "#A040A0"),
    ("ground", "#E0C068"),
    ("flying", "#A890F0"),
    ("psychic", "#F85888"),
    ("bug", "#A8B820"),
    ("rock", "#B8A038"),
    ("ghost", "#705898"),
    ("dragon", "#7038F8"),
    ("dark", "#705848"),
    ("steel", "#B8B8D0"),
    ("fairy", "#EE99AC"),
];

pub fn type_color(type_name: &str) -> &'static str {
    TYPE_COLORS
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_TYPE_COLOR)
}

/// PokéAPI `/pokemon/{id or name}` response (only the parts we read)
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PokeApiPokemon {
    pub id: u32,
    pub name: String,
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    pub sprites: PokeApiSprites,
    pub abilities: Vec<PokeApiAbilitySlot>,
    pub types: Vec<PokeApiTypeSlot>,
    #[serde(default)]
    pub cries: Option<PokeApiCries>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PokeApiSprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<PokeApiOtherSprites>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PokeApiOtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<PokeApiArtwork>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PokeApiArtwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PokeApiAbilitySlot {
    pub ability: PokeApiNamed,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PokeApiTypeSlot {
    #[serde(rename = "type")]
    pub type_info: PokeApiNamed,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PokeApiNamed {
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PokeApiCries {
    pub latest: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokemonType {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ability {
    pub name: String,
    pub hidden: bool,
}

/// Pokédex entry ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonProfile {
    pub id: u32,
    pub name: String,
    /// Zero-padded number, e.g. `#025`
    pub number: String,
    pub artwork_url: Option<String>,
    pub base_experience: Option<u32>,
    pub height_m: f64,
    pub weight_kg: f64,
    pub abilities: Vec<Ability>,
    pub types: Vec<PokemonType>,
    /// Background color of the card header, taken from the first listed type
    pub header_color: String,
    pub cry_url: Option<String>,
}

/// Transform a PokéAPI response into a Pokédex entry
pub fn transform_pokemon(pokemon: PokeApiPokemon) -> Result<PokemonProfile, MappingError> {
    let types: Vec<PokemonType> = pokemon
        .types
        .into_iter()
        .map(|slot| PokemonType {
            color: type_color(&slot.type_info.name).to_string(),
            name: slot.type_info.name,
        })
        .collect();

    let header_color = types
        .first()
        .map(|t| t.color.clone())
        .ok_or(MappingError::Empty("types"))?;

    let abilities = pokemon
        .abilities
        .into_iter()
        .map(|slot| Ability {
            name: slot.ability.name.replace('-', " "),
            hidden: slot.is_hidden,
        })
        .collect();

    let artwork_url = pokemon
        .sprites
        .other
        .and_then(|o| o.official_artwork)
        .and_then(|a| a.front_default)
        .or(pokemon.sprites.front_default);

    Ok(PokemonProfile {
        id: pokemon.id,
        name: pokemon.name,
        number: format!("#{:03}", pokemon.id),
        artwork_url,
        base_experience: pokemon.base_experience,
        height_m: f64::from(pokemon.height) / 10.0,
        weight_kg: f64::from(pokemon.weight) / 10.0,
        abilities,
        types,
        header_color,
        cry_url: pokemon.cries.and_then(|c| c.latest),
    })
}

/// name or Pokédex number -> profile lookup against PokéAPI
#[derive(Debug, Clone)]
pub struct PokemonTool {
    pub base_url: String,
}

impl Default for PokemonTool {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_BASE.to_string(),
        }
    }
}

impl Tool for PokemonTool {
    type Output = PokemonProfile;
    const NAME: &'static str = "pokemon";

    /// PokéAPI only knows lowercase names
    fn validate(&self, raw: &str) -> Result<String, ErrorKind> {
        non_empty_trimmed(raw).map(|name| name.to_lowercase())
    }

    fn build_url(&self, input: &str) -> String {
        format!(
            "{}/pokemon/{}",
            base(&self.base_url),
            urlencoding::encode(input)
        )
    }

    fn map(&self, payload: &serde_json::Value) -> Result<PokemonProfile, MappingError> {
        let pokemon = PokeApiPokemon::deserialize(payload)?;
        transform_pokemon(pokemon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pikachu() -> serde_json::Value {
        json!({
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "sprites": {
                "front_default": "https://img.example/sprites/25.png",
                "other": {
                    "official-artwork": {"front_default": "https://img.example/artwork/25.png"}
                }
            },
            "abilities": [
                {"ability": {"name": "static"}, "is_hidden": false},
                {"ability": {"name": "lightning-rod"}, "is_hidden": true}
            ],
            "types": [{"slot": 1, "type": {"name": "electric"}}],
            "cries": {"latest": "https://cries.example/25.ogg"}
        })
    }

    #[test]
    fn test_validate_lowercases() {
        let tool = PokemonTool::default();
        assert_eq!(tool.validate("  PIKACHU "), Ok("pikachu".to_string()));
        assert_eq!(tool.validate("25"), Ok("25".to_string()));
        assert_eq!(tool.validate("   "), Err(ErrorKind::InvalidInput));
    }

    #[test]
    fn test_build_url_after_validation() {
        let tool = PokemonTool::default();
        let input = tool.validate("PIKACHU").unwrap();
        assert_eq!(
            tool.build_url(&input),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
    }

    #[test]
    fn test_map_pikachu() {
        let profile = PokemonTool::default().map(&pikachu()).unwrap();

        assert_eq!(profile.id, 25);
        assert_eq!(profile.name, "pikachu");
        assert_eq!(profile.number, "#025");
        assert_eq!(profile.base_experience, Some(112));
        assert_eq!(profile.height_m, 0.4);
        assert_eq!(profile.weight_kg, 6.0);
        assert_eq!(
            profile.artwork_url.as_deref(),
            Some("https://img.example/artwork/25.png")
        );
        assert_eq!(profile.cry_url.as_deref(), Some("https://cries.example/25.ogg"));
    }

    #[test]
    fn test_header_color_comes_from_first_type() {
        let profile = PokemonTool::default().map(&pikachu()).unwrap();
        assert_eq!(profile.header_color, "#F8D030");
        assert_eq!(profile.header_color, type_color("electric"));
    }

    #[test]
    fn test_every_type_gets_a_color() {
        let mut value = pikachu();
        value["types"] = json!([
            {"type": {"name": "grass"}},
            {"type": {"name": "poison"}},
            {"type": {"name": "stellar"}}
        ]);
        let profile = PokemonTool::default().map(&value).unwrap();

        assert_eq!(profile.header_color, "#78C850");
        assert_eq!(profile.types[1].color, "#A040A0");
        assert_eq!(profile.types[2].color, DEFAULT_TYPE_COLOR);
    }

    #[test]
    fn test_abilities_are_readable() {
        let profile = PokemonTool::default().map(&pikachu()).unwrap();
        assert_eq!(
            profile.abilities,
            vec![
                Ability {
                    name: "static".to_string(),
                    hidden: false
                },
                Ability {
                    name: "lightning rod".to_string(),
                    hidden: true
                },
            ]
        );
    }

    #[test]
    fn test_artwork_falls_back_to_default_sprite() {
        let mut value = pikachu();
        value["sprites"]["other"] = json!({"official-artwork": {"front_default": null}});
        let profile = PokemonTool::default().map(&value).unwrap();
        assert_eq!(
            profile.artwork_url.as_deref(),
            Some("https://img.example/sprites/25.png")
        );
    }

    #[test]
    fn test_missing_cries_and_experience_are_optional() {
        let mut value = pikachu();
        value.as_object_mut().unwrap().remove("cries");
        value["base_experience"] = json!(null);
        let profile = PokemonTool::default().map(&value).unwrap();
        assert_eq!(profile.cry_url, None);
        assert_eq!(profile.base_experience, None);
    }

    #[test]
    fn test_no_types_is_malformed() {
        let mut value = pikachu();
        value["types"] = json!([]);
        let err = PokemonTool::default().map(&value).unwrap_err();
        assert_eq!(err, MappingError::Empty("types"));
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_missing_sprites_is_malformed() {
        let mut value = pikachu();
        value.as_object_mut().unwrap().remove("sprites");
        let err = PokemonTool::default().map(&value).unwrap_err();
        assert!(matches!(err, MappingError::Shape(_)));
    }

    #[test]
    fn test_type_table_has_eighteen_distinct_entries() {
        let mut names: Vec<&str> = TYPE_COLORS.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 18);
    }
}
