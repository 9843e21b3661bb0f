//! Interactive session (`bfolio` / `bfolio session`).
//!
//! Owns one `SessionState` for as long as the menu loop runs. Records and
//! pending custom fields are dropped when the user quits.

use anyhow::Result;
use console::style;
use dialoguer::Select;

use biofolio_core::service::builder::BiographyBuilder;
use biofolio_core::service::presenter::BiographyPresenter;
use biofolio_core::session::SessionState;
use biofolio_infra::filesystem::config_path;
use biofolio_types::biography::BiographySubmission;

use super::form::{prompt_custom_field, prompt_submission};
use super::view::print_grouped_view;
use crate::state::AppState;

const MENU: [&str; 4] = [
    "Add Biography",
    "Add Custom Field",
    "View All Biographies",
    "Quit",
];

/// Run the menu loop until the user quits.
pub async fn run_session(state: &AppState, json: bool) -> Result<()> {
    let mut session = SessionState::new();

    println!();
    println!(
        "  {} Biofolio session started. Nothing is saved after you quit.",
        style("*").cyan().bold()
    );
    println!(
        "  {}",
        style(format!(
            "Settings: {}",
            config_path(&state.data_dir).display()
        ))
        .dim()
    );

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Select an option")
            .items(&MENU)
            .default(0)
            .interact()?;

        match MENU[choice] {
            "Add Biography" => {
                let submission = prompt_submission(&state.config).await?;
                save_biography(&mut session, submission, json)?;
            }
            "Add Custom Field" => add_custom_field(&mut session)?,
            "View All Biographies" => {
                let view = BiographyPresenter::new(&session).grouped_view_today();
                print_grouped_view(&view, json)?;
            }
            _ => break,
        }
    }

    tracing::debug!(records = session.len(), "session ended");
    Ok(())
}

/// Submit one biography; a rejected submission is reported, not fatal.
fn save_biography(session: &mut SessionState, submission: BiographySubmission, json: bool) -> Result<()> {
    match BiographyBuilder::new(session).submit(submission) {
        Ok(record) if json => println!("{}", serde_json::to_string_pretty(&record)?),
        Ok(record) => {
            println!();
            println!(
                "  {} {} biography added successfully!",
                style("✓").green().bold(),
                record.kind
            );
        }
        Err(e) => {
            println!();
            println!("  {} {e}", style("✗").red().bold());
        }
    }
    Ok(())
}

fn add_custom_field(session: &mut SessionState) -> Result<()> {
    let (name, value) = prompt_custom_field()?;
    let (Some(name), Some(value)) = (name, value) else {
        return Ok(());
    };

    match BiographyBuilder::new(session).add_custom_field(&name, &value) {
        Ok(true) => println!(
            "  {} '{}' will be added to the next biography you save.",
            style("✓").green().bold(),
            name.trim()
        ),
        Ok(false) => println!("  {} Empty value, nothing recorded.", style("i").blue().bold()),
        Err(e) => println!("  {} {e}", style("✗").red().bold()),
    }
    Ok(())
}
