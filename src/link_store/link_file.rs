use std::{future::Future, io::ErrorKind, path::PathBuf};

use tokio::fs;

use crate::error::LinkKeeperError;

pub trait LinkFile: Send + Sync {
    /// `None` when there is no file yet.
    fn read_text(&self) -> impl Future<Output = Result<Option<String>, LinkKeeperError>> + Send;

    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), LinkKeeperError>> + Send;
}

impl LinkFile for PathBuf {
    #[tracing::instrument(skip(self), fields(path = %self.display()))]
    fn read_text(&self) -> impl Future<Output = Result<Option<String>, LinkKeeperError>> + Send {
        async move {
            match fs::read_to_string(self).await {
                Ok(text) => {
                    tracing::debug!("Read {} bytes", text.len());
                    Ok(Some(text))
                }
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    tracing::debug!("Link file does not exist yet");
                    Ok(None)
                }
                Err(err) => {
                    tracing::error!("{}", err.to_string());
                    Err(LinkKeeperError::FileRead(err.to_string()))
                }
            }
        }
    }

    #[tracing::instrument(skip(self, text), fields(path = %self.display()))]
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), LinkKeeperError>> + Send {
        async move {
            match fs::write(self, text).await {
                Ok(()) => {
                    tracing::debug!("Wrote {} bytes", text.len());
                    Ok(())
                }
                Err(err) => {
                    tracing::error!("{}", err.to_string());
                    Err(LinkKeeperError::FileWrite(err.to_string()))
                }
            }
        }
    }
}
