use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_BASE_PATH: &str = "xiaozhi-esp32/main";

#[derive(Parser, Debug)]
#[command(author, version, about = "Add the ESP32-C3 SuperMini board to a xiaozhi-esp32 checkout", long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Patch ./xiaozhi-esp32/main/CMakeLists.txt and Kconfig.projbuild
    board-setup

    # Patch a checkout somewhere else, without writing anything
    board-setup ~/src/xiaozhi-esp32/main --dry-run

LOGGING:
    Warnings are shown by default. Use -v for info, -vv for debug,
    or set RUST_LOG to override."#)]
pub struct Args {
    #[arg(
        default_value = DEFAULT_BASE_PATH,
        help = "Directory holding CMakeLists.txt and Kconfig.projbuild"
    )]
    pub base_path: PathBuf,

    #[arg(long, help = "Report what would change without writing any file")]
    pub dry_run: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
