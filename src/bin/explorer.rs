use anyhow::{Context, Result};
use clap::Parser;
use ensicoin_explorer::{config, BlockState, BlockStore, HttpBlockSource};
use tracing_subscriber::EnvFilter;

/// Fetch one page of blocks from the explorer API and print it.
#[derive(Debug, Parser)]
#[command(name = "explorer")]
#[command(version)]
struct Args {
    /// Path to the explorer TOML config.
    #[arg(default_value = "config/explorer.toml")]
    config: String,

    /// 1-based page to load; sent as-is, so 0 and negatives reach the API.
    #[arg(default_value_t = 1, allow_negative_numbers = true)]
    page: i64,
}

fn summary_line(page: i64, state: &BlockState, rows_per_page: u32) -> String {
    format!(
        "page {} of {} (best height {})",
        page,
        state.page_count(rows_per_page),
        state.total_blocks,
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let cfg = config::load(&args.config)?;
    let source = HttpBlockSource::new(&cfg)?;
    tracing::info!(
        endpoint = %source.endpoint(),
        page     = args.page,
        rows     = cfg.rows_per_page,
        "fetching blocks"
    );

    let store = BlockStore::new(source);
    store
        .load_blocks(args.page, cfg.rows_per_page)
        .await
        .with_context(|| format!("loading page {}", args.page))?;

    let state = store.snapshot();
    for blk in &state.blocks {
        let height = blk.height().map(|h| h.to_string()).unwrap_or_else(|| "?".into());
        println!("{:>8}  {}", height, blk.hash().unwrap_or("-"));
    }
    println!("{}", summary_line(args.page, &state, cfg.rows_per_page));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_default_config() {
        let args = Args::try_parse_from(["explorer"]).unwrap();
        assert_eq!(args.config, "config/explorer.toml");
        assert_eq!(args.page, 1);
    }

    #[test]
    fn zero_and_negative_pages_are_accepted() {
        let args = Args::try_parse_from(["explorer", "cfg.toml", "0"]).unwrap();
        assert_eq!(args.config, "cfg.toml");
        assert_eq!(args.page, 0);

        let args = Args::try_parse_from(["explorer", "cfg.toml", "-3"]).unwrap();
        assert_eq!(args.page, -3);
    }

    #[test]
    fn non_integer_page_is_rejected() {
        assert!(Args::try_parse_from(["explorer", "cfg.toml", "two"]).is_err());
    }

    #[test]
    fn summary_reports_best_height() {
        let state = BlockState { blocks: vec![], total_blocks: 42 };
        assert_eq!(summary_line(2, &state, 10), "page 2 of 5 (best height 42)");
    }
}
