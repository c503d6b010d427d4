use serde::Serialize;

use crate::config::DenoxConfig;
use crate::error::Result;
use crate::options::build_cli_options_args;

/// Program every composed invocation launches.
pub const DENO_PROGRAM: &str = "deno";

const RUN_SUBCOMMAND: &str = "run";

/// A fully composed `deno run` command: program plus argument vector, ready
/// to hand to a process spawner.
#[derive(Debug, Clone, Serialize)]
pub struct DenoInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl DenoInvocation {
    /// Single-line rendering for display. No shell quoting is applied.
    pub fn command_line(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(self.program.clone());
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Compose the argument vector for one script: `run`, the rendered option
/// tokens, the entry point, the script's fixed arguments, then any extra
/// arguments from the caller.
pub fn build_run_invocation(
    config: &DenoxConfig,
    script_name: &str,
    extra_args: &[String],
) -> Result<DenoInvocation> {
    let script = config.script(script_name)?;
    let options = config.options_for(script);
    let tokens = build_cli_options_args(&options)?;

    let mut args = Vec::with_capacity(tokens.len() + script.args.len() + extra_args.len() + 2);
    args.push(RUN_SUBCOMMAND.to_string());
    args.extend(tokens.iter().map(|token| token.to_arg_string()));
    args.push(script.file.clone());
    args.extend(script.args.iter().cloned());
    args.extend(extra_args.iter().cloned());

    Ok(DenoInvocation {
        program: DENO_PROGRAM.to_string(),
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use std::path::Path;

    fn parse(content: &str) -> DenoxConfig {
        config::from_str(content, Path::new("denox.yml")).unwrap()
    }

    #[test]
    fn composes_run_options_file_args_in_order() {
        let config = parse(
            r#"
deno_options:
  quiet: true
scripts:
  start:
    file: server.ts
    args: ["--port", "8080"]
    deno_options:
      allow-net: ["deno.land"]
      seed: 5
"#,
        );

        let invocation =
            build_run_invocation(&config, "start", &["--verbose".to_string()]).unwrap();

        assert_eq!(invocation.program, "deno");
        assert_eq!(
            invocation.args,
            vec![
                "run",
                "--quiet",
                "--allow-net=deno.land",
                "--seed",
                "5",
                "server.ts",
                "--port",
                "8080",
                "--verbose",
            ]
        );
    }

    #[test]
    fn command_line_joins_program_and_args() {
        let config = parse(
            r#"
scripts:
  start:
    file: mod.ts
    deno_options:
      watch: true
"#,
        );

        let invocation = build_run_invocation(&config, "start", &[]).unwrap();
        assert_eq!(invocation.command_line(), "deno run --watch mod.ts");
    }

    #[test]
    fn unknown_script_propagates_not_found() {
        let config = parse("scripts: {}");
        let err = build_run_invocation(&config, "start", &[]).unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::ScriptNotFound);
    }

    #[test]
    fn bad_option_aborts_composition() {
        let config = parse(
            r#"
scripts:
  start:
    file: mod.ts
    deno_options:
      seed: not-a-number
"#,
        );

        let err = build_run_invocation(&config, "start", &[]).unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::OptionUnsupportedValueType);
    }
}
