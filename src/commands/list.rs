use serde::Serialize;

use super::{CmdResult, GlobalArgs};

#[derive(Serialize)]
pub struct ListOutput {
    pub command: String,
    pub config_path: String,
    pub scripts: Vec<ScriptSummary>,
}

#[derive(Serialize)]
pub struct ScriptSummary {
    pub name: String,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub fn run(global: &GlobalArgs) -> CmdResult<ListOutput> {
    let path = global.resolve_config()?;
    let config = denox::config::load(&path)?;

    let scripts = config
        .scripts
        .iter()
        .map(|(name, script)| ScriptSummary {
            name: name.clone(),
            file: script.file.clone(),
            description: script.description.clone(),
        })
        .collect();

    Ok((
        ListOutput {
            command: "script.list".to_string(),
            config_path: path.display().to_string(),
            scripts,
        },
        0,
    ))
}
