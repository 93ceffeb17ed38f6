use std::sync::Arc;

use crate::prelude::{println, *};
use colored::{ColoredString, Colorize};
use couteau_core::{LookupState, Tool};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::controller::LookupController;
use crate::fetch::{HttpFetcher, ReqwestFetcher};

/// Terminal rendering of a tool result
pub trait Render {
    fn render(&self) -> String;
}

/// Run a single lookup to completion and print the outcome.
pub async fn run_once<T>(tool: T, input: &str, json: bool, global: &crate::Global) -> Result<()>
where
    T: Tool,
    T::Output: Render,
{
    let fetcher: Arc<dyn HttpFetcher> = Arc::new(ReqwestFetcher::new()?);
    let controller = LookupController::new(tool, fetcher);

    if global.verbose {
        if let Some(url) = request_url(controller.tool(), input) {
            println!("{} {}", "GET".green(), url.cyan());
        }
    }

    let result = lookup_once(&controller, input, !json).await?;

    if json {
        let out = serde_json::to_string_pretty(&result)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", out);
    } else {
        println!("{}", result.render());
    }

    Ok(())
}

/// URL a submission of `input` would fetch, if the input is valid
pub fn request_url<T: Tool>(tool: &T, input: &str) -> Option<String> {
    tool.validate(input).ok().map(|valid| tool.build_url(&valid))
}

/// Submit `input` and wait for the visible outcome, showing a spinner meanwhile
pub async fn lookup_once<T: Tool>(
    controller: &LookupController<T>,
    input: &str,
    show_spinner: bool,
) -> Result<T::Output> {
    let spinner = if show_spinner {
        Some(new_spinner(format!("Looking up {}...", T::NAME))?)
    } else {
        None
    };

    controller.submit(input);
    let state = controller.wait_settled().await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match state {
        LookupState::Succeeded { result, .. } => Ok(result),
        LookupState::Failed { reason, .. } => Err(eyre!("{}", reason.message())),
        other => Err(eyre!("Lookup ended without an outcome: {:?}", other.request_id())),
    }
}

fn new_spinner(msg: String) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .wrap_err("Invalid spinner template")?,
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner.set_message(msg);
    Ok(spinner)
}

/// One line per state change, used by interactive sessions
pub fn render_state<O>(state: &LookupState<O>, json: bool) -> Result<String>
where
    O: Render + Serialize,
{
    if json {
        return serde_json::to_string(state).map_err(|e| eyre!("JSON serialization failed: {}", e));
    }

    Ok(match state {
        LookupState::Idle => "(cleared)".bright_black().to_string(),
        LookupState::Pending { request_id } => {
            format!("[#{request_id}] searching...").bright_black().to_string()
        }
        LookupState::Succeeded { request_id, result } => {
            format!("{}\n{}", format!("[#{request_id}]").green(), result.render())
        }
        LookupState::Failed { request_id, reason } => {
            format!("[#{request_id}] {}", reason.message()).red().to_string()
        }
    })
}

pub fn rule() -> String {
    "=".repeat(80)
}

/// Parse `#RRGGBB` into its components
pub fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Paint `text` with a `#RRGGBB` color, leaving it plain if the color is invalid
pub fn paint(text: &str, hex: &str) -> ColoredString {
    match hex_rgb(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}
