use arcana_core::ArcanaConfig;
use colored::Colorize;

pub fn run(config: &ArcanaConfig) -> Result<(), String> {
    let service = super::open_service(config)?;
    let artwork = service.artwork();
    let cards = service.catalog().cards();

    let mut missing = 0;
    for card in cards {
        if !artwork.contains(card) {
            missing += 1;
            println!(
                "  {} {} ({})",
                "missing".yellow().bold(),
                card.artwork_filename(),
                card.name
            );
        }
    }

    if missing > 0 {
        return Err(format!(
            "{missing} of {} card{} missing artwork in {}",
            cards.len(),
            if cards.len() == 1 { "" } else { "s" },
            artwork.dir().display()
        ));
    }

    println!(
        "  {} {} cards, all artwork present",
        "OK".green().bold(),
        cards.len()
    );
    Ok(())
}
