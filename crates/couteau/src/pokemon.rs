use crate::prelude::*;
use crate::render::{paint, rule, Render};
use colored::Colorize;
use couteau_core::pokemon::PokemonProfile;

#[derive(Debug, clap::Args, Clone)]
pub struct Options {
    /// Pokémon name or Pokédex number (e.g. "pikachu", "25")
    pub pokemon: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: Options, global: crate::Global) -> Result<()> {
    let tool = crate::config::EndpointConfig::from_env().pokemon_tool();
    crate::render::run_once(tool, &options.pokemon, options.json, &global).await
}

impl Render for PokemonProfile {
    fn render(&self) -> String {
        let header = format!("{} {}", self.number, self.name.to_uppercase());

        let types: Vec<String> = self
            .types
            .iter()
            .map(|t| paint(&t.name, &t.color).bold().to_string())
            .collect();

        let abilities: Vec<String> = self
            .abilities
            .iter()
            .map(|a| {
                if a.hidden {
                    format!("{} (hidden)", a.name)
                } else {
                    a.name.clone()
                }
            })
            .collect();

        let mut table = new_table();
        table.add_row(prettytable::row![
            "Base experience",
            self.base_experience
                .map(|xp| xp.to_string())
                .unwrap_or_else(|| "-".to_string())
        ]);
        table.add_row(prettytable::row!["Height", format!("{:.1} m", self.height_m)]);
        table.add_row(prettytable::row!["Weight", format!("{:.1} kg", self.weight_kg)]);
        table.add_row(prettytable::row!["Abilities", abilities.join(", ")]);

        let mut out = String::new();
        out.push_str(&format!("{}\n", paint(&rule(), &self.header_color)));
        out.push_str(&format!("{}\n", paint(&header, &self.header_color).bold()));
        out.push_str(&format!("{}\n", paint(&rule(), &self.header_color)));
        out.push_str(&format!("{}: {}\n", "Types".green(), types.join(" ")));
        out.push_str(&table.to_string());
        if let Some(artwork) = &self.artwork_url {
            out.push_str(&format!("{}: {}\n", "Artwork".green(), artwork.cyan().underline()));
        }
        if let Some(cry) = &self.cry_url {
            out.push_str(&format!("{}: {}\n", "Cry".green(), cry.cyan().underline()));
        }
        out
    }
}
