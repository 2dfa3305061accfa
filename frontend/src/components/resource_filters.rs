//! Search box, tag and type filters for the resource catalog.
//!
//! All filter logic lives in [`common::filter_sync`]; this component owns the
//! signals the synchronizer's events are rendered from.

use common::{
    filter_state::{EmptyResultSummary, FilterState},
    filter_sync::{FilterSynchronizer, Notice},
    resource::{Resource, ResourceType},
};
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{md_action_icons::MdSearch, md_navigation_icons::{MdCheck, MdClose}},
};
use futures_util::StreamExt;

use crate::{
    api::resources_api::{list_all_tags, list_public_resources},
    components::resource_card::palette,
    data_definitions::{
        browser_url,
        filter_host::{ChannelHost, FilterEvent, ResourceFilterSync},
        timer::GlooScheduler,
    },
};

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    notice: Notice,
}

#[component]
pub fn ResourceFilters(mut resources: Signal<Vec<Resource>>) -> Element {
    let mut sync_handle = use_signal(|| None::<ResourceFilterSync>);
    let mut filters_view = use_signal(FilterState::default);
    let mut search_input = use_signal(String::new);
    let mut suggestions = use_signal(Vec::<String>::new);
    let mut loading = use_signal(|| false);
    let mut toasts = use_signal(Vec::<Toast>::new);
    let mut next_toast_id = use_signal(|| 0_u64);
    let mut empty_summary = use_signal(|| None::<EmptyResultSummary>);

    let events = use_coroutine(move |mut rx: UnboundedReceiver<FilterEvent>| async move {
        while let Some(event) = rx.next().await {
            match event {
                FilterEvent::ReplaceQuery(query) => browser_url::replace_query(&query),
                FilterEvent::Notify(notice) => {
                    let id = next_toast_id();
                    next_toast_id.set(id + 1);
                    toasts.write().push(Toast { id, notice });
                }
                FilterEvent::Loading(on) => loading.set(on),
                FilterEvent::FetchResources(ticket, request) => {
                    spawn(async move {
                        let result = list_public_resources(request).await.map_err(|e| e.to_string());
                        let sync = sync_handle.peek().clone();
                        if let Some(sync) = sync {
                            sync.complete(ticket, result);
                        }
                    });
                }
                FilterEvent::FetchTags => {
                    spawn(async move {
                        let result = list_all_tags().await.map_err(|e| e.to_string());
                        let sync = sync_handle.peek().clone();
                        if let Some(sync) = sync {
                            sync.accept_tags(result);
                        }
                    });
                }
                FilterEvent::Resources(list) => {
                    empty_summary.set(None);
                    resources.set(list);
                }
                FilterEvent::EmptyResult(summary) => empty_summary.set(Some(summary)),
                FilterEvent::TagSuggestions(tags) => suggestions.set(tags),
            }
        }
    });

    // runs once, on the client, after the first render
    use_effect(move || {
        if sync_handle.peek().as_ref().is_some_and(|sync| sync.is_hydrated()) {
            return;
        }
        let sync = FilterSynchronizer::new(GlooScheduler::default(), ChannelHost::new(events.tx()));
        sync.hydrate(&browser_url::current_query());
        let filters = sync.filters();
        search_input.set(filters.search_text.clone());
        filters_view.set(filters);
        sync_handle.set(Some(sync));
    });

    let current_sync = move || sync_handle.peek().clone();

    let on_search_input = move |event: Event<FormData>| {
        let text = event.value();
        search_input.set(text.clone());
        if let Some(sync) = current_sync() {
            sync.set_search_text(&text);
            filters_view.set(sync.filters());
        }
    };
    let toggle_tag = Callback::new(move |tag: String| {
        if let Some(sync) = current_sync() {
            sync.toggle_tag(&tag);
            filters_view.set(sync.filters());
        }
    });
    let toggle_resource_type = Callback::new(move |resource_type: ResourceType| {
        if let Some(sync) = current_sync() {
            sync.toggle_resource_type(resource_type);
            filters_view.set(sync.filters());
        }
    });
    let dismiss_toast = Callback::new(move |id: u64| {
        toasts.write().retain(|toast| toast.id != id);
    });

    rsx! {
        div {
            id: "x-resource-filters",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                max-width: 1000px;
                margin: 16px auto 0 auto;
            ",

            FilterSectionLabel { text: "Search by resource title".to_string() }
            div {
                style: "
                    display:flex;
                    align-items:center;
                    gap: 10px;
                    background-color: white;
                    border: 1px solid #D1D5DB;
                    border-radius: 10px;
                    padding: 8px 12px;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
                input {
                    r#type: "text",
                    placeholder: "Search by resource title",
                    value: "{search_input}",
                    style: "
                        flex:1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 15px;
                    ",
                    oninput: on_search_input,
                }
            }

            FilterSectionLabel { text: "Tags Filter".to_string() }
            div {
                style: "display:flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                for tag in suggestions() {
                    TagChip {
                        key: "{tag}",
                        selected: filters_view.read().has_tag(&tag),
                        tag: tag.clone(),
                        ontoggle: toggle_tag,
                    }
                }
            }

            FilterSectionLabel { text: "Resource Filter".to_string() }
            div {
                style: "display:flex; flex-direction: row; flex-wrap: wrap; gap: 8px;",
                for resource_type in ResourceType::ALL {
                    ResourceTypeChip {
                        key: "{resource_type}",
                        resource_type,
                        selected: filters_view.read().has_resource_type(resource_type),
                        ontoggle: toggle_resource_type,
                    }
                }
            }
        }

        if loading() {
            div {
                style: "display:flex; justify-content:center; margin-top: 12px;",
                div { class: "x-spinner" }
            }
        }

        ToastStack { toasts: toasts(), ondismiss: dismiss_toast }

        if let Some(summary) = empty_summary() {
            EmptyResultNotice { summary }
        }
    }
}

#[component]
fn FilterSectionLabel(text: String) -> Element {
    rsx! {
        div {
            style: "font-size: 13px; font-weight: 700; color: #6B7280;",
            "{text}"
        }
    }
}

#[component]
fn TagChip(tag: ReadSignal<String>, selected: bool, ontoggle: Callback<String>) -> Element {
    let background = if selected { "#BFDBFE" } else { "transparent" };
    rsx! {
        button {
            class: "x-filter-chip",
            style: "
                cursor: pointer;
                font-size: 12px;
                padding: 3px 10px;
                border-radius: 8px;
                border: 1px solid #60A5FA;
                color: #2563EB;
                background: {background};
            ",
            onclick: move |_| ontoggle(tag.read().clone()),
            "{tag}"
        }
    }
}

#[component]
fn ResourceTypeChip(resource_type: ResourceType, selected: bool, ontoggle: Callback<ResourceType>) -> Element {
    let (strong, light) = palette(resource_type.color());
    let background = if selected { light } else { "white" };
    rsx! {
        button {
            class: "x-filter-chip",
            style: "
                cursor: pointer;
                display: flex;
                align-items: center;
                gap: 6px;
                font-size: 14px;
                padding: 6px 12px;
                border-radius: 8px;
                border: 1px solid {light};
                color: {strong};
                background: {background};
            ",
            onclick: move |_| ontoggle(resource_type),
            "{resource_type}"
            if selected {
                Icon { icon: MdCheck, style: "width: 16px; height: 16px; color: {strong};" }
            }
        }
    }
}

#[component]
fn ToastStack(toasts: Vec<Toast>, ondismiss: Callback<u64>) -> Element {
    rsx! {
        div {
            style: "
                position: fixed;
                bottom: 20px;
                right: 20px;
                display: flex;
                flex-direction: column;
                gap: 10px;
                z-index: 1000;
            ",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: flex-start;
                        gap: 10px;
                        width: 360px;
                        padding: 12px 14px;
                        border-radius: 10px;
                        background: #DC2626;
                        color: white;
                        box-shadow: 0 6px 16px rgba(0,0,0,0.2);
                    ",
                    div {
                        style: "display:flex; flex-direction: column; gap: 4px; flex: 1;",
                        div { style: "font-weight: 700;", "{toast.notice.title()}" }
                        div { style: "font-size: 14px;", "{toast.notice.description()}" }
                    }
                    button {
                        style: "cursor: pointer; border: none; background: transparent; color: white;",
                        onclick: move |_| ondismiss(toast.id),
                        Icon { icon: MdClose, style: "width: 18px; height: 18px;" }
                    }
                }
            }
        }
    }
}

#[component]
fn EmptyResultNotice(summary: EmptyResultSummary) -> Element {
    rsx! {
        div {
            style: "text-align: center; color: #6B7280; margin-top: 32px; display:flex; flex-direction: column; gap: 6px;",
            div { style: "margin-bottom: 8px;", "No resources found with the following criteria:" }
            div {
                "Tags: "
                if summary.tags.is_empty() {
                    span { "None" }
                }
                for tag in summary.tags.iter() {
                    code { key: "{tag}", style: "color: #1D4ED8; background: #EFF6FF; padding: 1px 4px; margin-right: 4px;", "{tag}" }
                }
            }
            div {
                "Resource Types: "
                if summary.resource_types.is_empty() {
                    span { "None" }
                }
                for resource_type in summary.resource_types.iter() {
                    code { key: "{resource_type}", style: "color: #1D4ED8; background: #EFF6FF; padding: 1px 4px; margin-right: 4px;", "{resource_type}" }
                }
            }
        }
    }
}
