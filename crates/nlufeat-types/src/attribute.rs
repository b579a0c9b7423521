//! Message attributes and the feature-store keys derived from them.
//!
//! An attribute names *which part* of a message a feature applies to. Every
//! attribute owns exactly one document key and one dense-feature key, so two
//! attributes never share a slot in the feature store.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Which part of a message a feature or document applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// The raw utterance text. The only attribute present at inference time.
    Text,
    /// The intent label of a training example.
    Intent,
    /// The expected bot response of a training example.
    Response,
}

/// Attributes the dense featurizer knows how to featurize.
pub const DENSE_FEATURIZABLE_ATTRIBUTES: [Attribute; 2] = [Attribute::Text, Attribute::Response];

impl Attribute {
    pub const ALL: [Attribute; 3] = [Attribute::Text, Attribute::Intent, Attribute::Response];

    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Text => "text",
            Attribute::Intent => "intent",
            Attribute::Response => "response",
        }
    }

    /// Feature-slot key holding the composed dense vector for this attribute.
    pub fn dense_features_key(self) -> &'static str {
        match self {
            Attribute::Text => "text_dense_features",
            Attribute::Intent => "intent_dense_features",
            Attribute::Response => "response_dense_features",
        }
    }

    /// Key of the embedding document produced for this attribute.
    pub fn document_key(self) -> &'static str {
        match self {
            Attribute::Text => "text_doc",
            Attribute::Intent => "intent_doc",
            Attribute::Response => "response_doc",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Attribute::Text),
            "intent" => Ok(Attribute::Intent),
            "response" => Ok(Attribute::Response),
            other => Err(format!("invalid attribute: '{other}'")),
        }
    }
}
