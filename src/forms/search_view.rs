use crate::error::LinkKeeperError;
use crate::filter::filter_by_key_substring;
use crate::link_store::Links;

use super::{link_lines, Prompt};

/// Interactive list: links are loaded once when the view opens and every
/// query re-filters them locally.
pub struct SearchView {
    links: Links,
}

impl SearchView {
    pub fn new(links: Links) -> Self {
        SearchView { links }
    }

    #[tracing::instrument(skip_all)]
    pub fn run(&self, prompt: &mut dyn Prompt) -> Result<(), LinkKeeperError> {
        prompt.show("Search Links")?;
        while let Some(query) = prompt.ask("Search", "")? {
            let matches = filter_by_key_substring(&self.links, &query);
            tracing::debug!("{:?} matched {} links", query, matches.len());
            if matches.is_empty() {
                prompt.show("No links found.")?;
            }
            for line in link_lines(&matches) {
                prompt.show(&line)?;
            }
        }
        Ok(())
    }
}
