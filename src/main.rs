use anyhow::Context;
use clap::Parser;
use tarot_api::app::response::ReadingView;
use tarot_api::app::server;
use tarot_api::config::cli::{DemoArgs, ReadArgs, ServeArgs};
use tarot_api::config::{Command, LogFormat};
use tarot_api::utils::{logger, validation::Validate};
use tarot_api::{AppConfig, Catalog, Cli, DeckService, ReadingGenerator, Suit};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            let heading = if e.is_config_error() {
                "Invalid configuration"
            } else {
                "Could not load configuration"
            };
            eprintln!("❌ {}: {}", heading, e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let command = cli
        .command
        .clone()
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));
    match &command {
        Command::Serve(args) => args.apply(&mut config),
        Command::Demo(DemoArgs { seed }) | Command::Read(ReadArgs { seed, .. }) => {
            if seed.is_some() {
                config.deck.seed = *seed;
            }
        }
    }

    match config.logging.format {
        LogFormat::Compact => logger::init_cli_logger(config.logging.verbose),
        LogFormat::Json => logger::init_json_logger(config.logging.verbose),
    }
    if config.logging.verbose {
        tracing::debug!("Effective config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match command {
        Command::Serve(_) => server::serve(&config)
            .await
            .context("tarot API server failed")?,
        Command::Demo(_) => run_demo(&config)?,
        Command::Read(args) => run_reading(&config, args.json)?,
    }

    Ok(())
}

fn build_deck(config: &AppConfig) -> anyhow::Result<DeckService> {
    DeckService::with_options(&Catalog::standard(), config.deck_options())
        .context("failed to initialise the deck")
}

fn run_demo(config: &AppConfig) -> anyhow::Result<()> {
    println!("====== Tarot deck walkthrough ======");

    let deck = build_deck(config)?;
    println!("\n1. Deck size");
    println!("   📊 The deck holds {} cards", deck.size()?);

    println!("\n2. Major arcana");
    let major = deck.list_major()?;
    println!("   🧙 {} major arcana, the first three:", major.len());
    for (i, card) in major.iter().take(3).enumerate() {
        println!("   {}. {}: {}", i + 1, card.id, card.name);
    }

    println!("\n3. Lookup by id");
    match deck.get_by_id("1") {
        Ok(card) => {
            println!("   🔍 Card 1 is {}", card.name);
            println!("   - type: {:?}", card.card_type());
            println!("   - current meaning: {}", card.current_meaning());
        }
        Err(e) => println!("   ❌ Lookup failed: {}", e),
    }

    println!("\n4. Draw one card");
    match deck.draw(1) {
        Ok(drawn) => {
            for card in &drawn {
                println!("   🎴 {} ({})", card.name, card.orientation_label());
                println!("   - current meaning: {}", card.current_meaning());
            }
        }
        Err(e) => println!("   ❌ Draw failed: {}", e),
    }

    println!("\n5. Catalog distribution");
    let listing = deck.list_all()?;
    println!("   - major arcana: {}", listing.major_arcana.len());
    let mut minor_total = 0;
    for suit in Suit::ALL {
        let count = listing.minor_arcana.get(&suit).map_or(0, Vec::len);
        minor_total += count;
        println!("   - {}: {}", suit, count);
    }
    println!("   - minor arcana total: {}", minor_total);

    println!("\n====== Done ======");
    Ok(())
}

fn run_reading(config: &AppConfig, as_json: bool) -> anyhow::Result<()> {
    let generator = ReadingGenerator::new(build_deck(config)?);
    let reading = generator.perform_reading()?;

    if as_json {
        let json = serde_json::to_string_pretty(&ReadingView::from(&reading))?;
        println!("{}", json);
    } else {
        println!("{}", reading.narrative());
    }
    Ok(())
}
