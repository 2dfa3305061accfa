//! URL query string codec for [`FilterState`].
//!
//! `tags` and `resourceTypes` are comma-joined lists, `searchText` is the raw
//! text. All three are omitted when empty. Parameters the filter does not own
//! are carried through untouched so other page state in the URL survives.

use url::form_urlencoded;

use crate::{
    filter_state::{FilterState, join_csv},
    resource::ResourceType,
    search_const::{RESOURCE_TYPES_PARAM, SEARCH_TEXT_PARAM, TAGS_PARAM},
};

/// Result of reading filters out of a URL query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HydratedFilters {
    pub state: FilterState,
    /// `resourceTypes` tokens that name no known type. They are not part of `state`.
    pub invalid_resource_types: Vec<String>,
}

fn strip_question_mark(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}

fn is_filter_param(key: &str) -> bool {
    key == TAGS_PARAM || key == RESOURCE_TYPES_PARAM || key == SEARCH_TEXT_PARAM
}

fn split_csv(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').filter(|segment| !segment.is_empty())
}

pub fn parse_filter_query(query: &str) -> HydratedFilters {
    let pairs = form_urlencoded::parse(strip_question_mark(query).as_bytes())
        .into_owned()
        .collect::<Vec<_>>();
    // like URLSearchParams.get: the first occurrence of a key wins
    let first = |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());

    let mut hydrated = HydratedFilters::default();
    if let Some(tags) = first(TAGS_PARAM) {
        hydrated.state.tags = split_csv(tags).map(str::to_string).collect();
    }
    if let Some(types) = first(RESOURCE_TYPES_PARAM) {
        for token in split_csv(types) {
            match token.parse::<ResourceType>() {
                Ok(resource_type) => {
                    hydrated.state.resource_types.insert(resource_type);
                }
                Err(e) => hydrated.invalid_resource_types.push(e.token),
            }
        }
    }
    if let Some(search_text) = first(SEARCH_TEXT_PARAM) {
        hydrated.state.search_text = search_text.to_string();
    }
    hydrated
}

/// Replaces the filter parameters of `existing` with those of `state`.
pub fn merge_filter_query(existing: &str, state: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(strip_question_mark(existing).as_bytes()) {
        if !is_filter_param(&key) {
            serializer.append_pair(&key, &value);
        }
    }
    if !state.tags.is_empty() {
        serializer.append_pair(TAGS_PARAM, &join_csv(state.tags.iter().map(String::as_str)));
    }
    if !state.resource_types.is_empty() {
        serializer.append_pair(RESOURCE_TYPES_PARAM, &join_csv(state.resource_types.iter().map(|t| t.as_str())));
    }
    if !state.search_text.is_empty() {
        serializer.append_pair(SEARCH_TEXT_PARAM, &state.search_text);
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn serialize_filter_query(state: &FilterState) -> String {
        merge_filter_query("", state)
    }

    fn sample_states() -> Vec<FilterState> {
        vec![
            FilterState::default(),
            FilterState::default().with_search_text("deep learning"),
            FilterState::default().with_search_text("a&b=c+d%20 ü?"),
            FilterState::default().toggle_tag("climate").toggle_tag("hpc cluster"),
            FilterState::default()
                .toggle_resource_type(ResourceType::Model)
                .toggle_resource_type(ResourceType::Repository)
                .toggle_tag("näive & bold")
                .with_search_text("x"),
        ]
    }

    #[test]
    fn parse_inverts_serialize() {
        for state in sample_states() {
            let query = serialize_filter_query(&state);
            let hydrated = parse_filter_query(&query);
            assert_eq!(hydrated.state, state, "query was {query:?}");
            assert!(hydrated.invalid_resource_types.is_empty());
        }
    }

    #[test]
    fn serialization_is_canonical_and_omits_empty_params() {
        assert_eq!(serialize_filter_query(&FilterState::default()), "");
        let state = FilterState::default()
            .toggle_tag("b")
            .toggle_tag("a")
            .toggle_resource_type(ResourceType::Model)
            .toggle_resource_type(ResourceType::Repository)
            .with_search_text("deep learning");
        assert_eq!(
            serialize_filter_query(&state),
            "tags=a%2Cb&resourceTypes=REPOSITORY%2CMODEL&searchText=deep+learning"
        );
    }

    #[test]
    fn invalid_resource_types_are_reported_and_dropped() {
        let hydrated = parse_filter_query("?resourceTypes=REPOSITORY,BOGUS");
        assert_eq!(hydrated.invalid_resource_types, vec!["BOGUS".to_string()]);
        assert_eq!(hydrated.state.resource_types.into_iter().collect::<Vec<_>>(), vec![ResourceType::Repository]);
    }

    #[test]
    fn search_text_is_read_without_resource_types() {
        let hydrated = parse_filter_query("searchText=neural&tags=ai,,ml");
        assert_eq!(hydrated.state.search_text, "neural");
        assert_eq!(hydrated.state.tags.into_iter().collect::<Vec<_>>(), vec!["ai".to_string(), "ml".to_string()]);
    }

    #[test]
    fn first_occurrence_of_a_param_wins() {
        let hydrated = parse_filter_query("searchText=first&searchText=second");
        assert_eq!(hydrated.state.search_text, "first");
    }

    #[test]
    fn merge_keeps_foreign_params_and_replaces_ours() {
        let state = FilterState::default().toggle_tag("ml");
        assert_eq!(
            merge_filter_query("?page=2&tags=old&resourceTypes=MODEL&ref=nav", &state),
            "page=2&ref=nav&tags=ml"
        );
        assert_eq!(merge_filter_query("page=2&tags=old", &FilterState::default()), "page=2");
    }

    fn arb_filter_state() -> impl Strategy<Value = FilterState> {
        (
            any::<String>(),
            prop::collection::btree_set("[^,]{1,12}", 0..5),
            prop::sample::subsequence(ResourceType::ALL.to_vec(), 0..=ResourceType::ALL.len()),
        )
            .prop_map(|(search_text, tags, types)| FilterState {
                search_text,
                tags,
                resource_types: types.into_iter().collect(),
            })
    }

    proptest! {
        #[test]
        fn prop_parse_inverts_serialize(state in arb_filter_state()) {
            let hydrated = parse_filter_query(&serialize_filter_query(&state));
            prop_assert_eq!(hydrated.state, state);
            prop_assert!(hydrated.invalid_resource_types.is_empty());
        }

        #[test]
        fn prop_merge_keeps_foreign_params(state in arb_filter_state(), page in 0u32..1000) {
            let existing = format!("page={page}&tags=stale");
            let merged = merge_filter_query(&existing, &state);
            let expected_prefix = format!("page={page}");
            prop_assert!(merged.starts_with(&expected_prefix));
            prop_assert_eq!(parse_filter_query(&merged).state, state);
        }
    }
}
