use std::path::PathBuf;

pub mod list;
pub mod show;

pub type CmdResult<T> = denox::Result<(T, i32)>;

pub struct GlobalArgs {
    pub config: Option<String>,
}

impl GlobalArgs {
    /// Resolve the config file path: an explicit --config wins, otherwise
    /// discovery in the working directory.
    pub fn resolve_config(&self) -> denox::Result<PathBuf> {
        if let Some(path) = &self.config {
            return Ok(PathBuf::from(path));
        }

        let cwd = std::env::current_dir().map_err(|e| {
            denox::Error::internal_io(e.to_string(), Some("resolve working directory".to_string()))
        })?;

        denox::config::find_config(&cwd)
    }
}
