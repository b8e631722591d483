use std::env;
use std::fs::File;

use log::debug;

use recipe_browse::{
    AppConfig, BrowseSession, Catalog, FavoritesLedger, JsonFileStore, Segment, SystemClock,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: recipe-browse <catalog.json> [search] [filter] [sort]
    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .ok_or("Please provide a catalog JSON file as an argument")?;

    let config = AppConfig::load()?;
    let catalog = Catalog::from_json_reader(File::open(path)?)?;
    debug!("loaded {} recipes from {path}", catalog.len());

    let favorites = FavoritesLedger::open(JsonFileStore::new(&config.favorites_path));
    let mut session = BrowseSession::new(catalog, favorites, &config, SystemClock);

    if let Some(filter) = args.get(3) {
        session.filter_selected(filter);
    }
    if let Some(sort) = args.get(4) {
        session.sort_selected(sort);
    }
    let view = match args.get(2).filter(|q| !q.trim().is_empty()) {
        Some(query) => {
            session.search_changed(query.clone());
            // One-shot run: wait out the quiescence window, then settle
            std::thread::sleep(std::time::Duration::from_millis(config.debounce_ms));
            session.poll().unwrap_or_else(|| session.view())
        }
        None => session.view(),
    };

    for card in &view.cards {
        println!(
            "#{} {} [{} | {} min]{}",
            card.id,
            render_marked(&card.title),
            card.difficulty.as_str(),
            card.time,
            if card.favorite { " ♥" } else { "" },
        );
        println!("   {}", render_marked(&card.description));
    }
    println!("{}", view.counter_line());

    Ok(())
}

/// Terminal-friendly marking: wrap matched runs in brackets.
fn render_marked(text: &recipe_browse::HighlightedText) -> String {
    let mut out = String::new();
    for segment in &text.segments {
        match segment {
            Segment::Plain(t) => out.push_str(t),
            Segment::Match(t) => {
                out.push('[');
                out.push_str(t);
                out.push(']');
            }
        }
    }
    out
}
