//! List series command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list_series(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let series = store.list_series().await?;

    if series.is_empty() {
        println!("No series stored.");
        println!();
        println!("Add one with: POST /api/series");
        return Ok(());
    }

    println!("Series ({} total)", series.len());
    println!("{:-<70}", "");

    for serie in series {
        println!(
            "• [{}] {} - season {} ({} eps)",
            serie.id, serie.title, serie.season, serie.episode_count
        );
        if let Some(category) = serie.category.as_deref().filter(|c| !c.is_empty()) {
            println!("  Category: {}", category);
        }
        if let Some(cast) = serie.cast.as_deref().filter(|c| !c.is_empty()) {
            println!("  Cast: {}", cast);
        }
    }

    Ok(())
}
