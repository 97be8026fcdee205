//! CLI dealing example.
//!
//! ```text
//! cargo run --example deal_cli -- --seed Workshop2026 --players 5 --player 2
//! cargo run --example deal_cli -- --seed Workshop2026 --players 5 --links https://example.org/eop
//! ```

use std::process::ExitCode;

use clap::Parser;
use eopdeal::{Deal, DealOptions, DistributionPolicy, Hand, host_link, player_link};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Deal Elevation of Privilege cards from a shared seed")]
struct Args {
    /// Shared seed text.
    #[arg(long)]
    seed: String,

    /// Number of players at the table.
    #[arg(long)]
    players: usize,

    /// Show only this player's hand (1-based).
    #[arg(long)]
    player: Option<usize>,

    /// Distribution policy: `balanced` or `simple`.
    #[arg(long, default_value = "balanced", value_parser = parse_policy)]
    policy: DistributionPolicy,

    /// Print host and player links under this base URL instead of cards.
    #[arg(long)]
    links: Option<String>,
}

fn parse_policy(name: &str) -> Result<DistributionPolicy, String> {
    DistributionPolicy::from_name(name).ok_or_else(|| format!("unknown policy `{name}`"))
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let options = DealOptions::default().with_policy(args.policy);

    let deal = match Deal::new(&options, &args.seed, args.players) {
        Ok(deal) => deal,
        Err(err) => {
            eprintln!("Cannot deal: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(base) = &args.links {
        println!("Host:     {}", host_link(base, deal.seed(), deal.player_count()));
        for hand in deal.hands() {
            println!(
                "Player {:>2}: {}",
                hand.player(),
                player_link(base, deal.seed(), hand.player(), deal.player_count())
            );
        }
        return ExitCode::SUCCESS;
    }

    match args.player {
        Some(player) => match deal.hand(player) {
            Ok(hand) => print_hand(hand, deal.player_count()),
            Err(err) => {
                eprintln!("Cannot show hand: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            for group in deal.host_view() {
                let ranks: Vec<&str> = group.cards.iter().map(|c| c.rank_symbol()).collect();
                println!("{:<24} {}", group.category.name(), ranks.join(" "));
            }
        }
    }

    ExitCode::SUCCESS
}

fn print_hand(hand: &Hand, players: usize) {
    println!("Player {} of {} ({} cards)", hand.player(), players, hand.len());
    for card in hand.cards() {
        println!("  {:<5} {}", card.id(), card.display_name());
    }
}
