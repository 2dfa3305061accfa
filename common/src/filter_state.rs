//! Catalog filter state and the pure reducers that evolve it.

use std::{collections::BTreeSet, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::{resource::ResourceType, search_const::PAGE_SIZE};

/// Search text, selected tags and selected resource types.
///
/// Values are immutable: every reducer returns a new state. Sets are ordered so
/// that two equal states always serialize to the same URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub search_text: String,
    pub tags: BTreeSet<String>,
    pub resource_types: BTreeSet<ResourceType>,
}

impl FilterState {
    /// An empty tag cannot be written to the URL, so toggling one is a no-op.
    pub fn toggle_tag(&self, tag: &str) -> Self {
        let mut next = self.clone();
        if tag.is_empty() {
            return next;
        }
        if !next.tags.remove(tag) {
            next.tags.insert(tag.to_string());
        }
        next
    }

    pub fn toggle_resource_type(&self, resource_type: ResourceType) -> Self {
        let mut next = self.clone();
        if !next.resource_types.remove(&resource_type) {
            next.resource_types.insert(resource_type);
        }
        next
    }

    pub fn with_search_text(&self, search_text: impl Into<String>) -> Self {
        Self { search_text: search_text.into(), ..self.clone() }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn has_resource_type(&self, resource_type: ResourceType) -> bool {
        self.resource_types.contains(&resource_type)
    }

    /// The first-page listing call for this state.
    pub fn to_list_request(&self) -> ResourceListRequest {
        ResourceListRequest {
            types: self.resource_types.iter().copied().collect(),
            tags: self.tags.iter().cloned().collect(),
            search_text: self.search_text.clone(),
            page_number: 0,
            page_size: PAGE_SIZE,
        }
    }

    pub fn empty_result_summary(&self) -> EmptyResultSummary {
        EmptyResultSummary {
            tags: self.tags.iter().cloned().collect(),
            resource_types: self.resource_types.iter().copied().collect(),
        }
    }
}

/// Parameters of `GET /resources/public`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceListRequest {
    pub types: Vec<ResourceType>,
    pub tags: Vec<String>,
    pub search_text: String,
    pub page_number: u64,
    pub page_size: u64,
}

impl ResourceListRequest {
    /// Query pairs in the order the catalog API documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("type", join_csv(self.types.iter().map(|t| t.as_str()))),
            ("tag", join_csv(self.tags.iter().map(String::as_str))),
            ("nameSearch", self.search_text.clone()),
            ("pageNumber", self.page_number.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}

pub(crate) fn join_csv<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(",")
}

/// Filters that produced an empty listing, shown in place of the result grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyResultSummary {
    pub tags: Vec<String>,
    pub resource_types: Vec<ResourceType>,
}

impl EmptyResultSummary {
    pub fn tags_line(&self) -> String {
        format!("Tags: {}", none_or_list(self.tags.iter().map(String::as_str)))
    }

    pub fn resource_types_line(&self) -> String {
        format!("Resource Types: {}", none_or_list(self.resource_types.iter().map(|t| t.as_str())))
    }
}

fn none_or_list<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let values = values.collect::<Vec<_>>();
    if values.is_empty() { "None".to_string() } else { values.join(", ") }
}

impl Display for EmptyResultSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "No resources found with the following criteria:")?;
        writeln!(f, "{}", self.tags_line())?;
        write!(f, "{}", self.resource_types_line())
    }
}
