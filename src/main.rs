use chess_tui::core::board::{Board, STANDARD_SIZE};
use chess_tui::core::config::{self, ResolvedConfig};
use chess_tui::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "chess-tui", version, about = "Terminal chess board viewer")]
struct Args {}

fn init_logger(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    // The TUI owns the screen, so logs go to a file
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn main() -> ExitCode {
    let Args {} = Args::parse();

    let (file_config, loaded) = match config::load_config() {
        Ok((file_config, source)) => (file_config, Ok(source)),
        Err(e) => (config::ChessConfig::default(), Err(e)),
    };
    let config = config::resolve(&file_config);
    init_logger(&config);
    let _ = config::report(&loaded, &config, &mut std::io::stderr());

    log::info!("chess-tui starting up");
    log::debug!("Resolved config: {:?}", config);

    let board = match Board::standard() {
        Ok(board) => board,
        Err(e) => {
            log::error!("Board setup failed: {}", e);
            eprintln!("Failed to initialize {STANDARD_SIZE}x{STANDARD_SIZE} board: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = tui::run(board, &config) {
        log::error!("Terminal setup failed: {}", e);
        eprintln!("Failed to start terminal display: {e}");
        return ExitCode::FAILURE;
    }

    log::info!("chess-tui exiting");
    ExitCode::SUCCESS
}
