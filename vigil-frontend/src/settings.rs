use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct Settings {
    pub state_dir: Option<PathBuf>,
}
