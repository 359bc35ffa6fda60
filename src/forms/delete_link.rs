use crate::error::{LinkKeeperError, ValidationError};

use super::{Form, Prompt};

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteLinkForm {
    options: Vec<String>,
    link_name: String,
    chosen: bool,
}

impl DeleteLinkForm {
    /// Without a chosen name the selection starts on the first option.
    pub fn new(options: Vec<String>, link_name: Option<String>) -> Self {
        let chosen = link_name.is_some();
        let link_name = link_name
            .or_else(|| options.first().cloned())
            .unwrap_or_default();
        DeleteLinkForm {
            options,
            link_name,
            chosen,
        }
    }

    /// A link name wins over a list position, so a link called "2" is never
    /// mistaken for the second entry.
    fn select(&self, answer: &str) -> String {
        if self.options.iter().any(|option| option == answer) {
            return answer.to_string();
        }
        match answer.parse::<usize>() {
            Ok(n) if n >= 1 && n <= self.options.len() => self.options[n - 1].clone(),
            _ => answer.to_string(),
        }
    }
}

impl Form for DeleteLinkForm {
    type Submission = String;

    fn render(&mut self, prompt: &mut dyn Prompt) -> Result<(), LinkKeeperError> {
        if self.chosen {
            return Ok(());
        }
        prompt.show("Delete Link")?;
        for (i, option) in self.options.iter().enumerate() {
            prompt.show(&format!("{:>3}. {}", i + 1, option))?;
        }
        self.link_name = match prompt.ask("Link name", &self.link_name)? {
            Some(answer) => self.select(&answer),
            None => String::new(),
        };
        self.chosen = true;
        Ok(())
    }

    fn handle_submit(&self) -> Result<Self::Submission, LinkKeeperError> {
        if self.link_name.is_empty() {
            Err(ValidationError::MissingName.into())
        } else {
            Ok(self.link_name.clone())
        }
    }

    fn close(&mut self) {
        self.options.clear();
        self.link_name.clear();
        self.chosen = false;
    }
}
