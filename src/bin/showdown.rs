use clap::Parser;
use poker_showdown::config::TableConfig;
use poker_showdown::hand::Board;
use poker_showdown::round::Round;
use std::process::ExitCode;

/// Deal Hold'em rounds and print each showdown.
#[derive(Parser, Debug)]
#[command(name = "showdown", version = poker_showdown::VERSION)]
struct Args {
    /// Number of players at the table
    #[arg(short, long, default_value_t = 2)]
    players: usize,
    /// Number of rounds to deal
    #[arg(short, long, default_value_t = 1)]
    rounds: usize,
    /// Seed for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,
}

impl From<Args> for TableConfig {
    fn from(args: Args) -> Self {
        TableConfig { players: args.players, rounds: args.rounds, seed: args.seed }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = TableConfig::from(Args::parse());
    if let Err(e) = config.validate() {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let mut players = config.seat_players();
    let mut deck = config.deck();
    let mut board = Board::new();
    let mut round = Round::new();

    for n in 1..=config.rounds {
        let showdown = match round.run(&mut players, &mut deck, &mut board) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("round {n} aborted: {e}");
                return ExitCode::FAILURE;
            }
        };

        println!("== round {n} ==");
        let board_text: Vec<String> = board.as_slice().iter().map(|c| c.to_string()).collect();
        println!("board: {}", board_text.join(" "));
        for (player, hand) in players.iter().zip(showdown.hands()) {
            let hole: Vec<String> = player.cards().iter().map(|c| c.to_string()).collect();
            println!("{:<4} [{}]  {}", player.name(), hole.join(" "), hand);
        }
        let names: Vec<&str> = showdown.winners().iter().map(|&i| players[i].name()).collect();
        if showdown.is_tie() {
            println!("tie between {}", names.join(", "));
        } else {
            println!("winner: {}", names[0]);
        }
    }
    ExitCode::SUCCESS
}
