//! Keeps catalog filters, the URL query string and the listing call in step.
//!
//! The synchronizer owns the [`FilterState`] and talks to the outside world
//! through two seams: a [`Scheduler`] for the debounce timer and a
//! [`FilterHost`] for everything visible (URL, spinner, notices, results) and
//! for issuing the network calls. Completed calls come back through
//! [`FilterSynchronizer::complete`] carrying the ticket they were issued with;
//! only the latest ticket is ever applied.
//!
//! Host methods are always called after the internal state borrow has been
//! released, so a host may call straight back into the synchronizer.

use std::{
    cell::RefCell,
    fmt::Display,
    rc::{Rc, Weak},
    time::Duration,
};

use tracing::{debug, error, info, warn};

use crate::{
    filter_state::{EmptyResultSummary, FilterState, ResourceListRequest},
    resource::{Resource, ResourceType, Tag},
    schedule::{Scheduler, TimerHandle},
    search_const::{FILTER_FETCH_DELAY, SEARCH_TEXT_SETTLE_DELAY},
    url_query::{merge_filter_query, parse_filter_query},
};

/// Sequence number of an issued listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(pub u64);

/// Non-blocking, user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    InvalidResourceType { token: String },
    FetchFailed { detail: String },
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::InvalidResourceType { .. } => "Invalid resource type",
            Notice::FetchFailed { .. } => "Error fetching resources",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Notice::InvalidResourceType { token } => format!(
                "Invalid resource type: {token}. Valid types are: {}",
                ResourceType::valid_tokens()
            ),
            Notice::FetchFailed { .. } => "An error occurred while fetching resources.".to_string(),
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Idle,
    /// A fetch is scheduled and waiting for its quiet period.
    Debouncing,
    /// The latest issued fetch has not resolved yet.
    Fetching,
}

/// The runtime around a [`FilterSynchronizer`].
pub trait FilterHost {
    /// Replace (never push) the query part of the current URL.
    fn replace_query(&self, query: &str);

    fn notify(&self, notice: Notice);

    fn set_loading(&self, loading: bool);

    /// Start a listing call. Its outcome must be reported with
    /// [`FilterSynchronizer::complete`] using the same ticket.
    fn request_resources(&self, ticket: RequestTicket, request: ResourceListRequest);

    /// Start fetching the tag list; report with [`FilterSynchronizer::accept_tags`].
    fn request_tags(&self);

    fn set_resources(&self, resources: Vec<Resource>);

    /// Called right after an empty [`FilterHost::set_resources`].
    fn show_empty_result(&self, summary: EmptyResultSummary);

    fn set_tag_suggestions(&self, tags: Vec<String>);
}

enum Effect {
    ReplaceQuery(String),
    Notify(Notice),
    Loading(bool),
    RequestResources(RequestTicket, ResourceListRequest),
    RequestTags,
    Resources(Vec<Resource>),
    EmptyResult(EmptyResultSummary),
    TagSuggestions(Vec<String>),
}

#[derive(Default)]
struct SyncCore {
    filters: FilterState,
    hydrated: bool,
    /// Query read at hydration; its foreign parameters are kept on every write.
    base_query: String,
    last_written_query: String,
    /// Search text as last written to the URL; unsettled edits are not shown there yet.
    url_search_text: String,
    pending_timer: Option<TimerHandle>,
    last_ticket: u64,
    /// Latest issued request that has not resolved, with the filters it was issued for.
    outstanding: Option<(RequestTicket, FilterState)>,
}

struct Shared<S, H> {
    scheduler: S,
    host: H,
    core: RefCell<SyncCore>,
}

/// Cheap to clone; clones share the same state.
pub struct FilterSynchronizer<S: Scheduler + 'static, H: FilterHost + 'static> {
    shared: Rc<Shared<S, H>>,
}

impl<S: Scheduler + 'static, H: FilterHost + 'static> Clone for FilterSynchronizer<S, H> {
    fn clone(&self) -> Self {
        Self { shared: self.shared.clone() }
    }
}

impl<S: Scheduler + 'static, H: FilterHost + 'static> FilterSynchronizer<S, H> {
    pub fn new(scheduler: S, host: H) -> Self {
        Self {
            shared: Rc::new(Shared { scheduler, host, core: RefCell::new(SyncCore::default()) }),
        }
    }

    pub fn host(&self) -> &H {
        &self.shared.host
    }

    pub fn scheduler(&self) -> &S {
        &self.shared.scheduler
    }

    pub fn filters(&self) -> FilterState {
        self.shared.core.borrow().filters.clone()
    }

    pub fn is_hydrated(&self) -> bool {
        self.shared.core.borrow().hydrated
    }

    pub fn is_loading(&self) -> bool {
        self.shared.core.borrow().outstanding.is_some()
    }

    pub fn phase(&self) -> SyncPhase {
        let core = self.shared.core.borrow();
        if core.pending_timer.is_some() {
            SyncPhase::Debouncing
        } else if core.outstanding.is_some() {
            SyncPhase::Fetching
        } else {
            SyncPhase::Idle
        }
    }

    /// Reads the initial filters from the URL query. Only the first call has any effect.
    pub fn hydrate(&self, query: &str) {
        let mut effects = Vec::new();
        {
            let mut core = self.shared.core.borrow_mut();
            if core.hydrated {
                warn!("filters already hydrated, ignoring query {query:?}");
                return;
            }
            let hydrated = parse_filter_query(query);
            for token in hydrated.invalid_resource_types {
                warn!(%token, "ignoring invalid resource type in URL");
                effects.push(Effect::Notify(Notice::InvalidResourceType { token }));
            }
            core.url_search_text = hydrated.state.search_text.clone();
            core.filters = hydrated.state;
            core.base_query = query.strip_prefix('?').unwrap_or(query).to_string();
            core.last_written_query = core.base_query.clone();
            core.hydrated = true;
            effects.push(Effect::RequestTags);
            self.restart_timer(&mut core, FILTER_FETCH_DELAY);
        }
        self.dispatch(effects);
    }

    /// Free-text edits reach the URL and the listing only after the settle delay.
    pub fn set_search_text(&self, search_text: &str) {
        let mut core = self.shared.core.borrow_mut();
        if !core.hydrated {
            debug!("search text changed before hydration, ignored");
            return;
        }
        if core.filters.search_text == search_text {
            return;
        }
        core.filters = core.filters.with_search_text(search_text);
        self.restart_timer(&mut core, SEARCH_TEXT_SETTLE_DELAY);
    }

    pub fn toggle_tag(&self, tag: &str) {
        self.apply_toggle(|filters| filters.toggle_tag(tag));
    }

    pub fn toggle_resource_type(&self, resource_type: ResourceType) {
        self.apply_toggle(|filters| filters.toggle_resource_type(resource_type));
    }

    fn apply_toggle(&self, reduce: impl FnOnce(&FilterState) -> FilterState) {
        let mut effects = Vec::new();
        {
            let mut core = self.shared.core.borrow_mut();
            if !core.hydrated {
                debug!("filter toggled before hydration, ignored");
                return;
            }
            let next = reduce(&core.filters);
            if next == core.filters {
                return;
            }
            core.filters = next;
            let url_state = core.filters.with_search_text(core.url_search_text.clone());
            if let Some(query) = Self::write_query(&mut core, &url_state) {
                effects.push(Effect::ReplaceQuery(query));
            }
            self.restart_timer(&mut core, FILTER_FETCH_DELAY);
        }
        self.dispatch(effects);
    }

    /// Reports the outcome of the listing call issued with `ticket`.
    /// Outcomes of superseded tickets are dropped.
    pub fn complete(&self, ticket: RequestTicket, result: Result<Vec<Resource>, String>) {
        let mut effects = Vec::new();
        {
            let mut core = self.shared.core.borrow_mut();
            let issued_with = match core.outstanding.take() {
                Some((latest, filters)) if latest == ticket => filters,
                other => {
                    core.outstanding = other;
                    debug!(ticket = ticket.0, latest = core.last_ticket, "discarding superseded listing response");
                    return;
                }
            };
            effects.push(Effect::Loading(false));
            match result {
                Ok(resources) => {
                    info!(ticket = ticket.0, count = resources.len(), "listing applied");
                    let empty = resources.is_empty();
                    effects.push(Effect::Resources(resources));
                    if empty {
                        effects.push(Effect::EmptyResult(issued_with.empty_result_summary()));
                    }
                }
                Err(detail) => {
                    error!(ticket = ticket.0, %detail, "listing failed, keeping previous results");
                    effects.push(Effect::Notify(Notice::FetchFailed { detail }));
                }
            }
        }
        self.dispatch(effects);
    }

    /// Reports the outcome of the tag-list call. Failures leave suggestions empty.
    pub fn accept_tags(&self, result: Result<Vec<Tag>, String>) {
        match result {
            Ok(tags) => {
                let mut values = tags
                    .into_iter()
                    .map(|tag| tag.value)
                    .filter(|value| !value.is_empty())
                    .collect::<Vec<_>>();
                values.sort();
                values.dedup();
                self.dispatch(vec![Effect::TagSuggestions(values)]);
            }
            Err(e) => error!("failed to fetch tags: {e}"),
        }
    }

    fn write_query(core: &mut SyncCore, state: &FilterState) -> Option<String> {
        let query = merge_filter_query(&core.base_query, state);
        if query == core.last_written_query {
            return None;
        }
        core.last_written_query = query.clone();
        Some(query)
    }

    fn restart_timer(&self, core: &mut SyncCore, delay: Duration) {
        if let Some(previous) = core.pending_timer.take() {
            self.shared.scheduler.cancel(previous);
        }
        let shared: Weak<Shared<S, H>> = Rc::downgrade(&self.shared);
        let handle = self.shared.scheduler.schedule_after(
            delay,
            Box::new(move || {
                // a dropped synchronizer leaves nothing to fetch for
                if let Some(shared) = shared.upgrade() {
                    FilterSynchronizer { shared }.fire();
                }
            }),
        );
        debug!(handle = handle.0, delay_ms = delay.as_millis() as u64, "fetch scheduled");
        core.pending_timer = Some(handle);
    }

    fn fire(&self) {
        let mut effects = Vec::new();
        {
            let mut core = self.shared.core.borrow_mut();
            core.pending_timer = None;
            core.url_search_text = core.filters.search_text.clone();
            let filters = core.filters.clone();
            if let Some(query) = Self::write_query(&mut core, &filters) {
                effects.push(Effect::ReplaceQuery(query));
            }
            core.last_ticket += 1;
            let ticket = RequestTicket(core.last_ticket);
            if core.outstanding.is_none() {
                effects.push(Effect::Loading(true));
            }
            let request = filters.to_list_request();
            info!(ticket = ticket.0, ?request, "issuing listing request");
            core.outstanding = Some((ticket, filters));
            effects.push(Effect::RequestResources(ticket, request));
        }
        self.dispatch(effects);
    }

    fn dispatch(&self, effects: Vec<Effect>) {
        let host = &self.shared.host;
        for effect in effects {
            match effect {
                Effect::ReplaceQuery(query) => host.replace_query(&query),
                Effect::Notify(notice) => host.notify(notice),
                Effect::Loading(loading) => host.set_loading(loading),
                Effect::RequestResources(ticket, request) => host.request_resources(ticket, request),
                Effect::RequestTags => host.request_tags(),
                Effect::Resources(resources) => host.set_resources(resources),
                Effect::EmptyResult(summary) => host.show_empty_result(summary),
                Effect::TagSuggestions(tags) => host.set_tag_suggestions(tags),
            }
        }
    }
}
