//! Interactive biography form.
//!
//! Prompts for every field of a submission with dialoguer and returns the raw
//! `BiographySubmission`. Normalization (splitting, trimming, custom field
//! accumulation) is left to the builder.

use std::path::Path;

use anyhow::Result;
use console::style;
use dialoguer::{Input, Select};

use biofolio_core::age::parse_birthdate;
use biofolio_infra::photo::{PhotoFormat, load_photo};
use biofolio_types::biography::{BiographySubmission, BiographyType};
use biofolio_types::config::GlobalConfig;

/// Prompt for a full biography submission.
pub async fn prompt_submission(config: &GlobalConfig) -> Result<BiographySubmission> {
    let (kind, is_custom_type) = prompt_type()?;
    let photo_bytes = prompt_photo(config).await?;

    let name = prompt_text("Name")?;
    let birthdate: String = Input::new()
        .with_prompt("Birthdate (YYYY-MM-DD)")
        .default(config.default_birthdate.clone())
        .validate_with(|input: &String| -> Result<(), String> {
            parse_birthdate(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    let address = prompt_text("Address")?;

    section("Educational Attainment");
    let elementary = prompt_text("Elementary School")?;
    let high_school = prompt_text("High School")?;
    let senior_high = prompt_text("Senior High School")?;

    section("Seminars Attended");
    let seminars = prompt_lines("Enter seminars attended, one per line")?;
    section("Accomplishments");
    let accomplishments = prompt_lines("Enter accomplishments, one per line")?;
    section("Skills");
    let skills = prompt_lines("Enter your skills, one per line")?;
    section("Hobbies");
    let hobbies = prompt_lines("Enter your hobbies, one per line")?;

    section("Add Custom Fields");
    let (custom_field_name, custom_field_value) = prompt_custom_field()?;

    Ok(BiographySubmission {
        kind,
        is_custom_type,
        photo_bytes,
        name,
        birthdate,
        address,
        elementary,
        high_school,
        senior_high,
        seminars,
        accomplishments,
        skills,
        hobbies,
        custom_field_name,
        custom_field_value,
    })
}

/// Prompt for an optional custom field name and its value.
///
/// Returns `(None, None)` when the name is left blank.
pub fn prompt_custom_field() -> Result<(Option<String>, Option<String>)> {
    let name: String = Input::new()
        .with_prompt("Field name to add (e.g., 'Certifications', 'Languages'), blank to skip")
        .allow_empty(true)
        .interact_text()?;
    if name.trim().is_empty() {
        return Ok((None, None));
    }

    let value = prompt_lines(&format!("Enter {} details", name.trim()))?;
    Ok((Some(name), Some(value)))
}

fn prompt_type() -> Result<(String, bool)> {
    let labels = BiographyType::SELECTOR_LABELS;
    let selection = Select::new()
        .with_prompt("Biography Type")
        .items(&labels)
        .default(0)
        .interact()?;

    if labels[selection] == BiographyType::CUSTOM_SENTINEL {
        let custom = prompt_text("Enter Custom Biography Type")?;
        return Ok((custom, true));
    }
    Ok((labels[selection].to_string(), false))
}

/// Ask for a photo path until a valid photo is loaded or the answer is blank.
async fn prompt_photo(config: &GlobalConfig) -> Result<Option<Vec<u8>>> {
    loop {
        let path: String = Input::new()
            .with_prompt(format!(
                "Photo path ({}), blank for none",
                config.photo_extensions.join("/")
            ))
            .allow_empty(true)
            .interact_text()?;
        let path = path.trim();
        if path.is_empty() {
            return Ok(None);
        }

        match load_photo(Path::new(path), config).await {
            Ok(bytes) => {
                println!(
                    "  {} Loaded {} photo ({} bytes)",
                    style("✓").green(),
                    PhotoFormat::sniff(&bytes),
                    bytes.len()
                );
                return Ok(Some(bytes));
            }
            Err(e) => println!("  {} {e}", style("✗").red().bold()),
        }
    }
}

fn prompt_text(prompt: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

/// Collect lines until an empty one, joined with newlines.
fn prompt_lines(prompt: &str) -> Result<String> {
    println!("  {}", style(format!("{prompt} (empty line to finish)")).dim());
    let mut lines = Vec::new();
    loop {
        let line: String = Input::new()
            .with_prompt(format!("  {}", lines.len() + 1))
            .allow_empty(true)
            .interact_text()?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

fn section(title: &str) {
    println!();
    println!("  {}", style(title).bold().underlined());
}
