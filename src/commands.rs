use std::path::{Path, PathBuf};

use crate::error::LinkKeeperError;
use crate::forms::{self, link_lines, AddLinkForm, DeleteLinkForm, Prompt, SearchView, SettingsForm};
use crate::link_store::{LinkFile, LinkStore};
use crate::notice::Notifier;
use crate::settings::{save_settings, Settings};

pub async fn add<F: LinkFile, N: Notifier>(
    store: &LinkStore<F, N>,
    prompt: &mut dyn Prompt,
    name: Option<String>,
    url: Option<String>,
) -> Result<(), LinkKeeperError> {
    let (name, url) = forms::open(&mut AddLinkForm::new(name, url), prompt)?;
    store.add_link(&name, &url).await
}

pub async fn delete<F: LinkFile, N: Notifier>(
    store: &LinkStore<F, N>,
    prompt: &mut dyn Prompt,
    name: Option<String>,
) -> Result<(), LinkKeeperError> {
    let options = match name {
        Some(_) => vec![],
        None => store.link_names().await?,
    };
    let name = forms::open(&mut DeleteLinkForm::new(options, name), prompt)?;
    store.delete_link(&name).await
}

pub async fn list<F: LinkFile, N: Notifier>(
    store: &LinkStore<F, N>,
    prompt: &mut dyn Prompt,
    query: &str,
) -> Result<(), LinkKeeperError> {
    let links = store.list_links(query).await?;
    if links.is_empty() {
        return prompt.show("No links found.");
    }
    for line in link_lines(&links) {
        prompt.show(&line)?;
    }
    Ok(())
}

pub async fn search<F: LinkFile, N: Notifier>(
    store: &LinkStore<F, N>,
    prompt: &mut dyn Prompt,
) -> Result<(), LinkKeeperError> {
    let links = store.load_links().await?;
    SearchView::new(links).run(prompt)
}

pub fn show_settings(
    prompt: &mut dyn Prompt,
    settings_path: &Path,
    settings: &Settings,
) -> Result<(), LinkKeeperError> {
    prompt.show(&format!("Settings file: {}", settings_path.display()))?;
    prompt.show(&format!("Link Filepath: {}", settings.filepath.display()))
}

pub async fn set_link_path<N: Notifier>(
    notifier: &N,
    prompt: &mut dyn Prompt,
    settings_path: &Path,
    settings: &mut Settings,
    filepath: Option<PathBuf>,
) -> Result<(), LinkKeeperError> {
    settings.filepath = forms::open(&mut SettingsForm::new(&settings.filepath, filepath), prompt)?;
    save_settings(settings_path, settings).await?;
    notifier.notice(&format!(
        "Link Filepath set to {}",
        settings.filepath.display()
    ));
    Ok(())
}

/// Turns the outcome of a command into a notice. Returns whether the command
/// succeeded.
pub fn report<N: Notifier>(notifier: &N, result: Result<(), LinkKeeperError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::error!("{:?}", err);
            notifier.notice(&err.to_string());
            false
        }
    }
}
