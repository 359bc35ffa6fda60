use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::LinkKeeperError;

pub type Links = BTreeMap<String, String>;

/// The whole top-level object as stored. Entries whose value is not a string
/// are carried through untouched but never shown as links.
pub type Document = Map<String, Value>;

#[derive(Debug, PartialEq, Clone)]
pub enum ParsedLinks {
    Object(Document),
    Array,
    Scalar,
}

impl ParsedLinks {
    pub fn parse(text: &str) -> Result<Self, LinkKeeperError> {
        if text.trim().is_empty() {
            return Ok(ParsedLinks::Object(Document::new()));
        }
        let value: Value =
            serde_json::from_str(text).map_err(|err| LinkKeeperError::Parse(err.to_string()))?;
        Ok(match value {
            Value::Object(document) => ParsedLinks::Object(document),
            Value::Array(_) => ParsedLinks::Array,
            _ => ParsedLinks::Scalar,
        })
    }

    pub fn into_document(self) -> Result<Document, LinkKeeperError> {
        match self {
            ParsedLinks::Object(document) => Ok(document),
            _ => Err(LinkKeeperError::Format),
        }
    }

    pub fn into_links(self) -> Result<Links, LinkKeeperError> {
        Ok(string_links(&self.into_document()?))
    }
}

pub fn string_links(document: &Document) -> Links {
    document
        .iter()
        .filter_map(|(name, url)| url.as_str().map(|url| (name.clone(), url.to_string())))
        .collect()
}
