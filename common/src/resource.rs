//! Shared catalog resource models.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Repository,
    Notebook,
    Dataset,
    Model,
}

impl ResourceType {
    /// All types, in the order the filter buttons are shown.
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Repository,
        ResourceType::Notebook,
        ResourceType::Dataset,
        ResourceType::Model,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Repository => "REPOSITORY",
            ResourceType::Notebook => "NOTEBOOK",
            ResourceType::Dataset => "DATASET",
            ResourceType::Model => "MODEL",
        }
    }

    /// Palette name used for badges and filter buttons.
    pub fn color(&self) -> &'static str {
        match self {
            ResourceType::Notebook => "blue",
            ResourceType::Repository => "red",
            ResourceType::Dataset => "green",
            ResourceType::Model => "purple",
        }
    }

    /// Palette name for a raw type token; unknown tokens are gray.
    pub fn color_for_token(token: &str) -> &'static str {
        token.parse::<ResourceType>().map(|t| t.color()).unwrap_or("gray")
    }

    /// Comma-separated list of every valid token, for error messages.
    pub fn valid_tokens() -> String {
        Self::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid resource type: {token}")]
pub struct ParseResourceTypeError {
    pub token: String,
}

impl FromStr for ResourceType {
    type Err = ParseResourceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseResourceTypeError { token: s.to_string() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Privacy {
    #[default]
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    Verified,
    Rejected,
    Pending,
    #[default]
    None,
}

impl VerificationStatus {
    pub fn color(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "green",
            VerificationStatus::Rejected => "red",
            VerificationStatus::Pending => "yellow",
            VerificationStatus::None => "gray",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAuthor {
    pub author_id: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub header_image: String,
    /// Raw type token. The catalog may send types this client does not know.
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub authors: Vec<ResourceAuthor>,
    #[serde(default)]
    pub privacy: Privacy,
    #[serde(default)]
    pub status: VerificationStatus,
}

impl Resource {
    /// Header images are only shown for absolute http(s) URLs.
    pub fn has_header_image(&self) -> bool {
        self.header_image.starts_with("http")
    }

    /// Tags ordered by value, as cards display them.
    pub fn sorted_tags(&self) -> Vec<Tag> {
        let mut tags = self.tags.clone();
        tags.sort_by(|a, b| a.value.cmp(&b.value));
        tags
    }

    pub fn known_type(&self) -> Option<ResourceType> {
        self.resource_type.parse().ok()
    }

    /// Palette name for the type badge; unknown types are gray.
    pub fn type_color(&self) -> &'static str {
        ResourceType::color_for_token(&self.resource_type)
    }
}

/// One page of the public listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResourcePage {
    #[serde(default)]
    pub content: Vec<Resource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_type_tokens_are_upper_case() {
        for t in ResourceType::ALL {
            assert_eq!(t.as_str().parse::<ResourceType>(), Ok(t));
        }
        assert_eq!(
            "notebook".parse::<ResourceType>(),
            Err(ParseResourceTypeError { token: "notebook".to_string() })
        );
    }

    #[test]
    fn unknown_type_token_is_gray() {
        assert_eq!(ResourceType::color_for_token("MODEL"), "purple");
        assert_eq!(ResourceType::color_for_token("BOGUS"), "gray");
    }

    #[test]
    fn resource_decodes_with_missing_display_fields() {
        let json = r#"{"id":"r1","name":"Alpha","type":"DATASET","tags":[{"id":"t2","value":"zeta"},{"id":"t1","value":"alpha"}]}"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.known_type(), Some(ResourceType::Dataset));
        assert_eq!(resource.type_color(), "green");
        assert_eq!(resource.status, VerificationStatus::None);
        assert_eq!(resource.privacy, Privacy::Public);
        assert!(!resource.has_header_image());
        let values: Vec<_> = resource.sorted_tags().into_iter().map(|t| t.value).collect();
        assert_eq!(values, vec!["alpha", "zeta"]);
    }

    #[test]
    fn page_reads_content_array() {
        let json = r#"{"content":[{"id":"m","name":"Model","type":"MODEL","headerImage":"https://img/x.png","status":"VERIFIED","authors":[{"authorId":"a@b.org","role":"PRIMARY"}]}],"totalPages":1}"#;
        let page: ResourcePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.content.len(), 1);
        assert!(page.content[0].has_header_image());
        assert_eq!(page.content[0].status.color(), "green");
        assert_eq!(page.content[0].authors[0].author_id, "a@b.org");
    }

    #[test]
    fn unknown_type_keeps_the_rest_of_the_page() {
        let json = r#"{"content":[{"id":"n","name":"Nb","type":"NOTEBOOK"},{"id":"p","name":"Proj","type":"PROJECT"}]}"#;
        let page: ResourcePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[0].known_type(), Some(ResourceType::Notebook));
        assert_eq!(page.content[1].known_type(), None);
        assert_eq!(page.content[1].resource_type, "PROJECT");
        assert_eq!(page.content[1].type_color(), "gray");
    }
}
