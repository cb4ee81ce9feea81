use anyhow::Result;
use clap::Parser;
use snake_arcade::app::App;
use snake_arcade::game::GameConfig;
use snake_arcade::store::ScoreStore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Arcade snake with a menu and a persistent leaderboard")]
struct Cli {
    /// Where the top-10 score list is kept
    #[arg(long, default_value = "scores.json")]
    scores_file: PathBuf,

    /// Game ticks per second
    #[arg(long, default_value = "10")]
    tick_rate: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        tick_rate: cli.tick_rate.max(1),
        ..Default::default()
    };
    let store = ScoreStore::new(cli.scores_file);

    let mut app = App::new(config, store);
    app.run().await
}
