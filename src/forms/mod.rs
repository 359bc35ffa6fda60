use std::io::{self, BufRead, Write};

use crate::error::LinkKeeperError;
use crate::link_store::Links;

mod add_link;
mod delete_link;
mod search_view;
mod settings_form;

pub use add_link::AddLinkForm;
pub use delete_link::DeleteLinkForm;
pub use search_view::SearchView;
pub use settings_form::SettingsForm;

pub trait Prompt {
    /// Asks for one line, kept as typed apart from the line ending. An empty
    /// answer yields `default`, end of input yields `None`.
    fn ask(&mut self, label: &str, default: &str) -> Result<Option<String>, LinkKeeperError>;

    fn show(&mut self, line: &str) -> Result<(), LinkKeeperError>;
}

/// A dialog: collect field values, validate them into a submission, then
/// clear its state.
pub trait Form {
    type Submission;

    fn render(&mut self, prompt: &mut dyn Prompt) -> Result<(), LinkKeeperError>;

    fn handle_submit(&self) -> Result<Self::Submission, LinkKeeperError>;

    fn close(&mut self);
}

/// The form stays open (fields kept) when the submission is rejected.
pub fn open<F: Form>(
    form: &mut F,
    prompt: &mut dyn Prompt,
) -> Result<F::Submission, LinkKeeperError> {
    form.render(prompt)?;
    let submission = form.handle_submit()?;
    form.close();
    Ok(submission)
}

pub fn link_lines(links: &Links) -> Vec<String> {
    links
        .iter()
        .map(|(name, url)| format!("{}: {}", name, url))
        .collect()
}

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Terminal::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}

fn prompt_error(err: io::Error) -> LinkKeeperError {
    LinkKeeperError::Prompt(err.to_string())
}

impl<R: BufRead, W: Write> Prompt for Terminal<R, W> {
    fn ask(&mut self, label: &str, default: &str) -> Result<Option<String>, LinkKeeperError> {
        if default.is_empty() {
            write!(self.output, "{}: ", label).map_err(prompt_error)?;
        } else {
            write!(self.output, "{} [{}]: ", label, default).map_err(prompt_error)?;
        }
        self.output.flush().map_err(prompt_error)?;

        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(prompt_error)? == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        Ok(Some(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        }))
    }

    fn show(&mut self, line: &str) -> Result<(), LinkKeeperError> {
        writeln!(self.output, "{}", line).map_err(prompt_error)
    }
}
