use std::path::{Path, PathBuf};

use crate::error::LinkKeeperError;

use super::{Form, Prompt};

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsForm {
    filepath: String,
    chosen: bool,
}

impl SettingsForm {
    pub fn new(current: &Path, filepath: Option<PathBuf>) -> Self {
        let chosen = filepath.is_some();
        SettingsForm {
            filepath: filepath
                .unwrap_or_else(|| current.to_path_buf())
                .to_string_lossy()
                .into_owned(),
            chosen,
        }
    }
}

impl Form for SettingsForm {
    type Submission = PathBuf;

    fn render(&mut self, prompt: &mut dyn Prompt) -> Result<(), LinkKeeperError> {
        if self.chosen {
            return Ok(());
        }
        prompt.show("The file where saves the links.")?;
        if let Some(answer) = prompt.ask("Link Filepath", &self.filepath)? {
            self.filepath = answer;
        }
        self.chosen = true;
        Ok(())
    }

    fn handle_submit(&self) -> Result<Self::Submission, LinkKeeperError> {
        if self.filepath.is_empty() {
            return Err(LinkKeeperError::Settings(
                "Link filepath is required!".to_string(),
            ));
        }
        Ok(PathBuf::from(&self.filepath))
    }

    fn close(&mut self) {
        self.filepath.clear();
        self.chosen = false;
    }
}
