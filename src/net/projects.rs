//! Project list resolution for the initial render and the detail view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The initial render prefers the page's embedded JSON island (works from
//! `file://`) and otherwise fetches `projects.json` bypassing the HTTP
//! cache. The detail view re-resolves the list on every click unless the
//! page opts into memoization.
//!
//! ERROR HANDLING
//! ==============
//! Loaders return `LoadError`; the callers in `components` log and keep the
//! static page content. Nothing here panics on bad data.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use std::future::Future;

use leptos::prelude::*;

use super::types::{Project, parse_projects};
use crate::config::{CachePolicy, FolioConfig};
use crate::error::LoadError;
use crate::state::modal::ModalHandle;

/// Decode the data island text, if any.
///
/// A malformed island is logged and treated as absent so the caller can
/// fall back to the network.
pub fn decode_island(raw: Option<&str>) -> Option<Vec<Project>> {
    let raw = raw?;
    match parse_projects(raw) {
        Ok(list) => Some(list),
        Err(e) => {
            leptos::logging::warn!("{}", LoadError::Island(e));
            None
        }
    }
}

/// Resolve the initial project list: island first, then `fetch`.
///
/// # Errors
///
/// Propagates whatever `fetch` fails with when the island is absent or
/// malformed.
pub async fn resolve_projects<F, Fut>(island: Option<&str>, fetch: F) -> Result<Vec<Project>, LoadError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<Project>, LoadError>>,
{
    if let Some(list) = decode_island(island) {
        return Ok(list);
    }
    fetch().await
}

/// Fetch and decode the project resource at `url`.
///
/// # Errors
///
/// [`LoadError::Network`] on transport failure, [`LoadError::Status`] on a
/// non-success response, [`LoadError::Decode`] when the body is not a
/// project array.
pub async fn fetch_projects(url: &str, bypass_cache: bool) -> Result<Vec<Project>, LoadError> {
    #[cfg(feature = "csr")]
    {
        let mut request = gloo_net::http::Request::get(url);
        if bypass_cache {
            request = request.cache(web_sys::RequestCache::NoStore);
        }
        let resp = request.send().await.map_err(|e| LoadError::Network(e.to_string()))?;
        crate::error::check_status(resp.status())?;
        let body = resp.text().await.map_err(|e| LoadError::Network(e.to_string()))?;
        parse_projects(&body).map_err(|e| LoadError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, bypass_cache);
        Err(LoadError::Network("not available outside the browser".to_owned()))
    }
}

/// Resolve the initial list for this page from its island or the network.
///
/// # Errors
///
/// See [`fetch_projects`].
pub async fn load_projects(cfg: &FolioConfig) -> Result<Vec<Project>, LoadError> {
    #[cfg(feature = "csr")]
    let island = crate::util::dom::element_text_by_id(&cfg.data_island_id);
    #[cfg(not(feature = "csr"))]
    let island: Option<String> = None;

    let url = cfg.projects_url.clone();
    resolve_projects(island.as_deref(), move || async move { fetch_projects(&url, true).await }).await
}

/// Parse a `data-idx` attribute into a list position.
pub fn parse_index(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse().ok()
}

/// Memoized "list or none" for the detail view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectCache {
    policy: CachePolicy,
    list: Option<Vec<Project>>,
}

impl ProjectCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self { policy, list: None }
    }

    /// Cached list, or `None` when a fetch is required.
    pub fn lookup(&self) -> Option<Vec<Project>> {
        match self.policy {
            CachePolicy::AlwaysFetch => None,
            CachePolicy::Memoize => self.list.clone(),
        }
    }

    /// Keep the first successful fetch when memoizing.
    pub fn remember(&mut self, list: &[Project]) {
        if self.policy == CachePolicy::Memoize && self.list.is_none() {
            self.list = Some(list.to_vec());
        }
    }
}

/// Connects a details click to a fresh list and the modal.
///
/// Concurrent clicks are not de-duplicated; whichever fetch resolves last
/// decides what the modal shows.
#[derive(Clone, Copy)]
pub struct DetailBridge {
    url: StoredValue<String>,
    cache: StoredValue<ProjectCache>,
    modal: ModalHandle,
}

impl DetailBridge {
    pub fn new(cfg: &FolioConfig, modal: ModalHandle) -> Self {
        Self {
            url: StoredValue::new(cfg.projects_url.clone()),
            cache: StoredValue::new(ProjectCache::new(cfg.detail_cache)),
            modal,
        }
    }

    pub fn modal(&self) -> ModalHandle {
        self.modal
    }

    /// Show the record at `index`, fetching the list from the network.
    pub async fn open(self, index: usize) {
        let url = self.url.get_value();
        self.open_with(index, move || async move { fetch_projects(&url, false).await })
            .await;
    }

    /// Show the record at `index`, resolving the list through `fetch` on a
    /// cache miss.
    ///
    /// An out-of-range index opens an empty dialog. A failed fetch is logged
    /// and leaves the modal as it was.
    pub async fn open_with<F, Fut>(self, index: usize, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Project>, LoadError>>,
    {
        let list = match self.cache.with_value(ProjectCache::lookup) {
            Some(list) => list,
            None => match fetch().await {
                Ok(list) => {
                    self.cache.update_value(|c| c.remember(&list));
                    list
                }
                Err(e) => {
                    leptos::logging::warn!("project details unavailable: {e}");
                    return;
                }
            },
        };
        if index >= list.len() {
            leptos::logging::debug_warn!("details index {index} out of range for {} projects", list.len());
        }
        self.modal.show(list.get(index).cloned());
    }
}
