mod big_small;
mod big_small_logic;
mod build_info;
mod cards;
mod coin;
mod constants;
mod dice;
mod input;
mod save_manager;
mod ui;

use big_small::{BigSmallGame, GamePhase};
use cards::CardRevealDemo;
use coin::CoinTossDemo;
use constants::TICK_INTERVAL_MS;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dice::DiceDemo;
use input::{handle_input, GalleryMenu, InputResult, Screen};
use ratatui::{backend::CrosstermBackend, Terminal};
use save_manager::{SaveManager, TableSession};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "parlour {} ({} {})",
                    build_info::BUILD_VERSION,
                    build_info::BUILD_COMMIT,
                    build_info::BUILD_DATE
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Parlour - Terminal Casino Minigame Gallery\n");
                println!("Usage: parlour [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'parlour --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Resume the previous table session if one exists
    let save_manager = SaveManager::new()?;
    let session = save_manager.load_or_default();

    let mut screen = Screen::Menu;
    let mut menu = GalleryMenu::new();
    let mut table = BigSmallGame::with_session(session.balance, session.history);
    let mut dice = DiceDemo::new();
    let mut coins = CoinTossDemo::new();
    let mut cards = CardRevealDemo::new();
    let mut rng = rand::thread_rng();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_tick = Instant::now();

    // Main loop
    loop {
        terminal.draw(|f| {
            ui::draw_ui(f, screen, &menu, &table, &dice, &coins, &cards);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                match handle_input(
                    key_event,
                    &mut screen,
                    &mut menu,
                    &mut table,
                    &mut dice,
                    &mut coins,
                    &mut cards,
                    &mut rng,
                ) {
                    InputResult::Continue => {}
                    InputResult::NeedsSave => save_session(&save_manager, &table)?,
                    InputResult::Quit => break,
                }
            }
        }

        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            let was_rolling = table.phase == GamePhase::Rolling;
            table.tick();
            dice.tick();
            coins.tick();
            cards.tick();

            // Persist the ledger as soon as a round settles
            if was_rolling && table.phase == GamePhase::Result {
                save_session(&save_manager, &table)?;
            }
            last_tick = Instant::now();
        }
    }

    save_session(&save_manager, &table)?;

    // Restore terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

fn save_session(save_manager: &SaveManager, table: &BigSmallGame) -> io::Result<()> {
    save_manager.save(&TableSession {
        balance: table.balance,
        history: table.history.clone(),
    })
}
