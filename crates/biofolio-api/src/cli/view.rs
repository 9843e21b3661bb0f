//! Terminal rendering of grouped biographies.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use biofolio_infra::photo::PhotoFormat;
use biofolio_types::view::{GroupedView, RecordView};

/// Print a grouped view as styled text, or as JSON.
pub fn print_grouped_view(view: &GroupedView, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    if view.is_empty() {
        println!();
        println!(
            "  {} No biographies added yet. Please add a biography first.",
            style("i").blue().bold()
        );
        println!();
        return Ok(());
    }

    for group in view.groups() {
        println!();
        println!(
            "{}",
            style(format!("{} Biographies", group.type_name)).bold().cyan()
        );
        for record in &group.records {
            println!();
            print!("{}", render_record(record));
        }
    }

    println!();
    let total = view.total_records();
    println!(
        "  {} biograph{}",
        style(total).bold(),
        if total == 1 { "y" } else { "ies" }
    );
    println!();

    Ok(())
}

/// Render one record as indented lines.
pub fn render_record(view: &RecordView) -> String {
    let record = &view.record;
    let mut out = String::new();

    push_line(&mut out, format!("  {}", style(&record.name).bold().underlined()));
    push_line(&mut out, format!("  {}", format_photo(record.photo.as_deref())));
    push_field(&mut out, "Name", &record.name);
    push_field(&mut out, "Birthdate", &record.birthdate.to_string());
    push_field(&mut out, "Age", &format!("{} years old", view.age_years));
    push_field(&mut out, "Address", &record.address);

    let mut education = Table::new();
    education.load_preset(presets::UTF8_FULL_CONDENSED);
    education.set_content_arrangement(ContentArrangement::Dynamic);
    education.set_header(vec![
        Cell::new("Level").fg(Color::White),
        Cell::new("School").fg(Color::White),
    ]);
    for (level, school) in record.education.entries() {
        education.add_row(vec![Cell::new(level).fg(Color::Cyan), Cell::new(school)]);
    }
    for line in education.to_string().lines() {
        push_line(&mut out, format!("  {line}"));
    }

    push_list(&mut out, "Seminars Attended", &record.seminars_attended);
    push_list(&mut out, "Accomplishments", &record.accomplishments);
    push_list(&mut out, "Skills", &record.skills);
    push_list(&mut out, "Hobbies", &record.hobbies);
    for field in record.custom_fields.iter() {
        push_list(&mut out, &field.name, &field.values);
    }

    out
}

/// Describe a photo by format and size, or note that none was uploaded.
pub fn format_photo(photo: Option<&[u8]>) -> String {
    match photo {
        Some(bytes) => format!(
            "{} {} photo, {}",
            style("▣").green(),
            PhotoFormat::sniff(bytes),
            format_size(bytes.len())
        ),
        None => format!("{} No photo uploaded.", style("i").blue()),
    }
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

fn push_line(out: &mut String, line: String) {
    out.push_str(&line);
    out.push('\n');
}

fn push_field(out: &mut String, label: &str, value: &str) {
    push_line(out, format!("  {} {}", style(format!("{label}:")).bold(), value));
}

/// Bullet list; continuation lines of a multi-line item align under its text.
fn push_list(out: &mut String, label: &str, items: &[String]) {
    push_line(out, format!("  {}", style(format!("{label}:")).bold()));
    for item in items {
        let mut lines = item.lines();
        push_line(out, format!("    - {}", lines.next().unwrap_or_default()));
        for line in lines {
            push_line(out, format!("      {line}"));
        }
    }
}
