use clap::Args;
use serde::Serialize;

use denox::invocation::{self, DenoInvocation};
use denox::log_status;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct ShowArgs {
    /// Script name as declared under `scripts` in the config file
    pub script: String,

    /// Extra arguments appended after the script's fixed arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Serialize)]
pub struct ShowOutput {
    pub command: String,
    pub script: String,
    #[serde(flatten)]
    pub invocation: DenoInvocation,
    pub command_line: String,
}

pub fn run(args: ShowArgs, global: &GlobalArgs) -> CmdResult<ShowOutput> {
    let path = global.resolve_config()?;
    log_status!("config", "Using {}", path.display());

    let config = denox::config::load(&path)?;
    let invocation = invocation::build_run_invocation(&config, &args.script, &args.args)?;
    let command_line = invocation.command_line();

    Ok((
        ShowOutput {
            command: "script.show".to_string(),
            script: args.script,
            invocation,
            command_line,
        },
        0,
    ))
}
