//! Bridges the filter synchronizer to the Dioxus runtime.
//!
//! The synchronizer calls into [`ChannelHost`] synchronously; every call is
//! forwarded as a [`FilterEvent`] to a coroutine that owns the signals and
//! spawns the server calls.

use common::{
    filter_state::{EmptyResultSummary, ResourceListRequest},
    filter_sync::{FilterHost, FilterSynchronizer, Notice, RequestTicket},
    resource::Resource,
};
use dioxus::{logger::tracing::debug, prelude::UnboundedSender};

use crate::data_definitions::timer::GlooScheduler;

pub type ResourceFilterSync = FilterSynchronizer<GlooScheduler, ChannelHost>;

#[derive(Debug)]
pub enum FilterEvent {
    ReplaceQuery(String),
    Notify(Notice),
    Loading(bool),
    FetchResources(RequestTicket, ResourceListRequest),
    FetchTags,
    Resources(Vec<Resource>),
    EmptyResult(EmptyResultSummary),
    TagSuggestions(Vec<String>),
}

pub struct ChannelHost {
    tx: UnboundedSender<FilterEvent>,
}

impl ChannelHost {
    pub fn new(tx: UnboundedSender<FilterEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: FilterEvent) {
        if let Err(e) = self.tx.unbounded_send(event) {
            // the page is gone
            debug!("dropping filter event: {e}");
        }
    }
}

impl FilterHost for ChannelHost {
    fn replace_query(&self, query: &str) {
        self.send(FilterEvent::ReplaceQuery(query.to_string()));
    }

    fn notify(&self, notice: Notice) {
        self.send(FilterEvent::Notify(notice));
    }

    fn set_loading(&self, loading: bool) {
        self.send(FilterEvent::Loading(loading));
    }

    fn request_resources(&self, ticket: RequestTicket, request: ResourceListRequest) {
        self.send(FilterEvent::FetchResources(ticket, request));
    }

    fn request_tags(&self) {
        self.send(FilterEvent::FetchTags);
    }

    fn set_resources(&self, resources: Vec<Resource>) {
        self.send(FilterEvent::Resources(resources));
    }

    fn show_empty_result(&self, summary: EmptyResultSummary) {
        self.send(FilterEvent::EmptyResult(summary));
    }

    fn set_tag_suggestions(&self, tags: Vec<String>) {
        self.send(FilterEvent::TagSuggestions(tags));
    }
}
