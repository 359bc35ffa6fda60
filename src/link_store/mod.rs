mod link_file;
mod parsed_links;

pub use link_file::LinkFile;
pub use parsed_links::{Document, Links, ParsedLinks};

use serde_json::Value;

use crate::error::LinkKeeperError;
use crate::filter::filter_by_key_substring;
use crate::notice::{link_deleted, Notifier, ADD_LINK_SUCCESS};

/// Name→URL pairs kept in one JSON file. Every operation reads the whole
/// file and, when it changes something, writes the whole file back.
pub struct LinkStore<F: LinkFile, N: Notifier> {
    file: F,
    notifier: N,
}

impl<F: LinkFile, N: Notifier> LinkStore<F, N> {
    pub fn new(file: F, notifier: N) -> Self {
        LinkStore { file, notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    #[tracing::instrument(skip(self))]
    pub async fn load_parsed(&self) -> Result<ParsedLinks, LinkKeeperError> {
        let text = self.file.read_text().await?.unwrap_or_default();
        let parsed = ParsedLinks::parse(&text)?;
        tracing::debug!("Parsed {:?}", parsed);
        Ok(parsed)
    }

    pub async fn load_links(&self) -> Result<Links, LinkKeeperError> {
        self.load_parsed().await?.into_links()
    }

    pub async fn save_links(
        &self,
        links: &Links,
        success_message: &str,
    ) -> Result<(), LinkKeeperError> {
        let document: Document = links
            .iter()
            .map(|(name, url)| (name.clone(), Value::String(url.clone())))
            .collect();
        self.save_document(&document, success_message).await
    }

    #[tracing::instrument(skip(self, document))]
    async fn save_document(
        &self,
        document: &Document,
        success_message: &str,
    ) -> Result<(), LinkKeeperError> {
        let text = serde_json::to_string(document)
            .map_err(|err| LinkKeeperError::FileWrite(err.to_string()))?;
        self.file.write_text(&text).await?;
        tracing::info!("Saved {} entries", document.len());
        self.notifier.notice(success_message);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn add_link(&self, name: &str, url: &str) -> Result<(), LinkKeeperError> {
        let mut document = match self.load_parsed().await? {
            ParsedLinks::Object(document) => document,
            other => {
                tracing::warn!("Refusing to overwrite {:?}", other);
                return Err(LinkKeeperError::Format);
            }
        };
        document.insert(name.to_string(), Value::String(url.to_string()));
        self.save_document(&document, ADD_LINK_SUCCESS).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_link(&self, name: &str) -> Result<(), LinkKeeperError> {
        let mut document = self.load_parsed().await?.into_document()?;
        if document.remove(name).is_none() {
            tracing::info!("No link to remove");
        }
        self.save_document(&document, &link_deleted(name)).await
    }

    pub async fn list_links(&self, query: &str) -> Result<Links, LinkKeeperError> {
        let links = self.load_links().await?;
        let filtered = filter_by_key_substring(&links, query);
        tracing::info!("Filtered {} links to {}", links.len(), filtered.len());
        Ok(filtered)
    }

    pub async fn link_names(&self) -> Result<Vec<String>, LinkKeeperError> {
        Ok(self.load_links().await?.into_keys().collect())
    }
}

#[cfg(test)]
pub mod tests {
    use std::{
        future::Future,
        path::PathBuf,
        sync::{Arc, Mutex},
    };

    use crate::notice::tests::RecordingNotifier;

    use super::*;

    /// In-memory file. `None` content means the file does not exist.
    #[derive(Clone, Default)]
    pub struct MockFile {
        content: Arc<Mutex<Option<String>>>,
        writes: Arc<Mutex<u32>>,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl MockFile {
        pub fn with_content(content: &str) -> Self {
            MockFile {
                content: Arc::new(Mutex::new(Some(content.to_string()))),
                ..Default::default()
            }
        }

        pub fn unreadable() -> Self {
            MockFile {
                fail_reads: true,
                ..MockFile::with_content("{}")
            }
        }

        pub fn content(&self) -> Option<String> {
            self.content.lock().unwrap().clone()
        }

        pub fn writes(&self) -> u32 {
            *self.writes.lock().unwrap()
        }
    }

    impl LinkFile for MockFile {
        fn read_text(
            &self,
        ) -> impl Future<Output = Result<Option<String>, LinkKeeperError>> + Send {
            async {
                if self.fail_reads {
                    return Err(LinkKeeperError::FileRead(
                        "Permission denied (os error 13)".to_string(),
                    ));
                }
                Ok(self.content())
            }
        }

        fn write_text(
            &self,
            text: &str,
        ) -> impl Future<Output = Result<(), LinkKeeperError>> + Send {
            async move {
                if self.fail_writes {
                    return Err(LinkKeeperError::FileWrite("disk full".to_string()));
                }
                *self.writes.lock().unwrap() += 1;
                *self.content.lock().unwrap() = Some(text.to_string());
                Ok(())
            }
        }
    }

    fn links(pairs: &[(&str, &str)]) -> Links {
        pairs
            .iter()
            .map(|(name, url)| (name.to_string(), url.to_string()))
            .collect()
    }

    fn store(file: &MockFile) -> LinkStore<MockFile, RecordingNotifier> {
        LinkStore::new(file.clone(), RecordingNotifier::default())
    }

    #[tokio::test]
    async fn missing_and_empty_files_load_as_empty() {
        assert_eq!(store(&MockFile::default()).load_links().await, Ok(Links::new()));
        assert_eq!(
            store(&MockFile::with_content("")).load_links().await,
            Ok(Links::new())
        );
    }

    #[tokio::test]
    async fn add_link_keeps_other_entries() {
        let file = MockFile::with_content(r#"{"github":"https://github.com"}"#);
        let store = store(&file);
        store.add_link("gitlab", "https://gitlab.com").await.unwrap();

        assert_eq!(
            store.load_links().await.unwrap(),
            links(&[
                ("github", "https://github.com"),
                ("gitlab", "https://gitlab.com")
            ])
        );
        assert_eq!(store.notifier().notices(), vec!["Add Link successfully!"]);
    }

    #[tokio::test]
    async fn add_link_overwrites_existing_name() {
        let file = MockFile::with_content(r#"{"github":"https://github.com"}"#);
        let store = store(&file);
        store.add_link("github", "https://github.com/me").await.unwrap();
        assert_eq!(
            store.load_links().await.unwrap(),
            links(&[("github", "https://github.com/me")])
        );
    }

    #[tokio::test]
    async fn add_link_to_missing_file_creates_it() {
        let file = MockFile::default();
        store(&file).add_link("a", "https://a.example").await.unwrap();
        assert_eq!(file.content(), Some(r#"{"a":"https://a.example"}"#.to_string()));
    }

    #[tokio::test]
    async fn add_link_on_array_is_a_format_error_and_writes_nothing() {
        let file = MockFile::with_content("[1,2,3]");
        let store = store(&file);
        assert_eq!(
            store.add_link("a", "https://a.example").await,
            Err(LinkKeeperError::Format)
        );
        assert_eq!(file.writes(), 0);
        assert_eq!(file.content(), Some("[1,2,3]".to_string()));
        assert!(store.notifier().notices().is_empty());
    }

    #[tokio::test]
    async fn add_and_delete_keep_non_string_entries() {
        let file = MockFile::with_content(r#"{"github":"https://github.com","pinned":true}"#);
        let store = store(&file);

        store.add_link("x", "y").await.unwrap();
        assert_eq!(
            file.content(),
            Some(r#"{"github":"https://github.com","pinned":true,"x":"y"}"#.to_string())
        );

        store.delete_link("github").await.unwrap();
        assert_eq!(file.content(), Some(r#"{"pinned":true,"x":"y"}"#.to_string()));
        assert_eq!(store.load_links().await.unwrap(), links(&[("x", "y")]));
        assert_eq!(
            store.notifier().notices(),
            vec!["Add Link successfully!", "Link named github has been deleted!"]
        );
    }

    #[tokio::test]
    async fn add_link_on_scalar_is_a_format_error() {
        let file = MockFile::with_content("\"just text\"");
        assert_eq!(
            store(&file).add_link("a", "b").await,
            Err(LinkKeeperError::Format)
        );
        assert_eq!(file.writes(), 0);
    }

    #[tokio::test]
    async fn add_link_on_invalid_json_is_a_parse_error() {
        let file = MockFile::with_content("{");
        match store(&file).add_link("a", "b").await {
            Err(LinkKeeperError::Parse(_)) => (),
            other => assert!(false, "expected parse error, got {:?}", other),
        }
        assert_eq!(file.writes(), 0);
    }

    #[tokio::test]
    async fn delete_link_removes_only_that_entry() {
        let file = MockFile::with_content(
            r#"{"github":"https://github.com","gitlab":"https://gitlab.com"}"#,
        );
        let store = store(&file);
        store.delete_link("github").await.unwrap();

        assert_eq!(
            store.load_links().await.unwrap(),
            links(&[("gitlab", "https://gitlab.com")])
        );
        assert_eq!(
            store.notifier().notices(),
            vec!["Link named github has been deleted!"]
        );
    }

    #[tokio::test]
    async fn delete_absent_link_is_a_no_op() {
        let file = MockFile::with_content(r#"{"github":"https://github.com"}"#);
        let store = store(&file);
        store.delete_link("nope").await.unwrap();
        assert_eq!(
            store.load_links().await.unwrap(),
            links(&[("github", "https://github.com")])
        );
    }

    #[tokio::test]
    async fn failed_save_surfaces_the_error_without_a_success_notice() {
        let file = MockFile {
            fail_writes: true,
            ..MockFile::with_content("{}")
        };
        let store = store(&file);
        assert_eq!(
            store.add_link("a", "b").await,
            Err(LinkKeeperError::FileWrite("disk full".to_string()))
        );
        assert!(store.notifier().notices().is_empty());
    }

    #[tokio::test]
    async fn list_links_filters_by_name() {
        let file = MockFile::with_content(
            r#"{"github":"https://github.com","gitlab":"https://gitlab.com"}"#,
        );
        let store = store(&file);
        assert_eq!(
            store.list_links("lab").await.unwrap(),
            links(&[("gitlab", "https://gitlab.com")])
        );
        assert_eq!(store.list_links("").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn link_names_are_sorted() {
        let file = MockFile::with_content(r#"{"b":"2","a":"1"}"#);
        assert_eq!(
            store(&file).link_names().await.unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[tokio::test]
    async fn save_then_load_round_trips_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("links.json");
        let store = LinkStore::new(path, RecordingNotifier::default());
        let expected = links(&[
            ("quoted \"name\"", "https://example.com/?q=\"x\""),
            ("unicode ✓", "https://例え.jp"),
            ("", ""),
        ]);

        store.save_links(&expected, "saved").await.unwrap();

        assert_eq!(store.load_links().await.unwrap(), expected);
        assert_eq!(store.notifier().notices(), vec!["saved"]);
    }
}
