use std::sync::Arc;

use crate::prelude::{eprintln, println, *};
use couteau_core::Tool;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::EndpointConfig;
use crate::controller::LookupController;
use crate::fetch::{HttpFetcher, ReqwestFetcher};
use crate::render::{render_state, Render};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ToolKind {
    Gender,
    Age,
    Universities,
    Weather,
    Pokemon,
    News,
}

#[derive(Debug, clap::Args, Clone)]
pub struct Options {
    /// Tool to drive
    #[arg(value_enum)]
    pub tool: ToolKind,

    /// Print every state change as a JSON line
    #[arg(long)]
    pub json: bool,
}

/// Interactive session: every stdin line is submitted as a new lookup,
/// `:reset` clears the state and `:quit` exits. Lookups are not awaited
/// before the next line is read, so submissions can overlap.
pub async fn run(options: Options, global: crate::Global) -> Result<()> {
    let endpoints = EndpointConfig::from_env();
    let fetcher: Arc<dyn HttpFetcher> = Arc::new(ReqwestFetcher::new()?);

    if global.verbose {
        eprintln!("Endpoints: {:?}", endpoints);
    }

    match options.tool {
        ToolKind::Gender => {
            drive(LookupController::new(endpoints.gender_tool(), fetcher), options.json).await
        }
        ToolKind::Age => {
            drive(LookupController::new(endpoints.age_tool(), fetcher), options.json).await
        }
        ToolKind::Universities => {
            let tool = endpoints.universities_tool();
            drive(LookupController::new(tool, fetcher), options.json).await
        }
        ToolKind::Weather => {
            drive(LookupController::new(endpoints.weather_tool(), fetcher), options.json).await
        }
        ToolKind::Pokemon => {
            drive(LookupController::new(endpoints.pokemon_tool(), fetcher), options.json).await
        }
        ToolKind::News => {
            drive(LookupController::new(endpoints.news_tool(), fetcher), options.json).await
        }
    }
}

async fn drive<T>(controller: LookupController<T>, json: bool) -> Result<()>
where
    T: Tool,
    T::Output: Render + Serialize,
{
    eprintln!(
        "{} session: type a query and press Enter, :reset to clear, :quit to exit",
        T::NAME
    );

    let mut states = controller.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.wrap_err("Failed to read from stdin")? else {
                    break;
                };
                match line.trim() {
                    ":quit" | ":q" => break,
                    ":reset" => controller.reset(),
                    _ => {
                        controller.submit(&line);
                    }
                }
            }
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = states.borrow_and_update().clone();
                println!("{}", render_state(&state, json)?);
            }
        }
    }

    // Let the last lookup finish before leaving.
    if controller.current_state().is_pending() {
        let state = controller.wait_settled().await;
        println!("{}", render_state(&state, json)?);
    }

    Ok(())
}
