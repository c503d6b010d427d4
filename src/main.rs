use clap::{Parser, Subcommand};

mod commands;

use commands::{list, show, GlobalArgs};
use denox::output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "denox")]
#[command(version = VERSION)]
#[command(about = "Script runner configuration for the Deno runtime")]
struct Cli {
    /// Path to the config file (defaults to denox.yml in the working directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List scripts defined in the config file
    List,
    /// Show the composed deno invocation for a script
    Show(show::ShowArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs { config: cli.config };

    let (json_result, exit_code) = match cli.command {
        Commands::List => output::map_cmd_result_to_json(list::run(&global)),
        Commands::Show(args) => output::map_cmd_result_to_json(show::run(args, &global)),
    };

    output::print_json_result(json_result);
    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code > 255 {
        1
    } else {
        code as u8
    }
}
