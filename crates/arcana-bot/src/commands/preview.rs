use arcana_core::{ArcanaConfig, Reading, TarotResult, today_utc};
use colored::Colorize;

pub fn lookup(config: &ArcanaConfig, name: &str) -> Result<(), String> {
    let service = super::open_service(config)?;
    show(service.lookup(name))
}

pub fn draw(config: &ArcanaConfig, question: Option<&str>) -> Result<(), String> {
    let service = super::open_service(config)?;
    match question {
        Some(q) => show(service.yes_or_no(q)),
        None => show(service.draw_card()),
    }
}

pub fn daily(config: &ArcanaConfig, user: &str) -> Result<(), String> {
    let service = super::open_service(config)?;
    show(service.daily(user, today_utc()))
}

fn show(reading: TarotResult<Reading>) -> Result<(), String> {
    let reading = reading.map_err(|e| e.to_string())?;
    let p = &reading.presentation;

    println!("  {}", p.title.bold());
    for line in p.description.lines() {
        println!("  {}", line.replace("**", ""));
    }
    for field in &p.fields {
        println!();
        println!("  {}", field.name.bold());
        println!("  {}", field.value);
    }
    println!();
    println!(
        "  {} {} ({} bytes)",
        "Image:".dimmed(),
        reading.attachment.filename,
        reading.attachment.bytes.len()
    );
    Ok(())
}
