use crate::error::{LinkKeeperError, ValidationError};

use super::{Form, Prompt};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct AddLinkForm {
    link_name: String,
    link_url: String,
}

impl AddLinkForm {
    /// Values already given are not asked for again.
    pub fn new(link_name: Option<String>, link_url: Option<String>) -> Self {
        AddLinkForm {
            link_name: link_name.unwrap_or_default(),
            link_url: link_url.unwrap_or_default(),
        }
    }
}

impl Form for AddLinkForm {
    type Submission = (String, String);

    fn render(&mut self, prompt: &mut dyn Prompt) -> Result<(), LinkKeeperError> {
        if !self.link_name.is_empty() && !self.link_url.is_empty() {
            return Ok(());
        }
        prompt.show("Add Link")?;
        if self.link_name.is_empty() {
            self.link_name = prompt.ask("Link name", "")?.unwrap_or_default();
        }
        if self.link_url.is_empty() {
            self.link_url = prompt.ask("Link url", "")?.unwrap_or_default();
        }
        Ok(())
    }

    fn handle_submit(&self) -> Result<Self::Submission, LinkKeeperError> {
        if self.link_name.is_empty() {
            Err(ValidationError::MissingName.into())
        } else if self.link_url.is_empty() {
            Err(ValidationError::MissingUrl.into())
        } else {
            Ok((self.link_name.clone(), self.link_url.clone()))
        }
    }

    fn close(&mut self) {
        self.link_name.clear();
        self.link_url.clear();
    }
}
