use std::cell::Cell;

use futures::executor::block_on;
use leptos::reactive::owner::Owner;

use super::*;
use crate::state::modal::ModalState;

fn titled(title: &str) -> Project {
    Project { title: title.to_owned(), ..Project::default() }
}

fn served(list: Vec<Project>) -> impl Future<Output = Result<Vec<Project>, LoadError>> {
    async move { Ok(list) }
}

fn failing(err: LoadError) -> impl Future<Output = Result<Vec<Project>, LoadError>> {
    async move { Err(err) }
}

// =============================================================
// decode_island / resolve_projects
// =============================================================

#[test]
fn decode_island_parses_payload() {
    let list = decode_island(Some(r#"[{"title":"A"}]"#)).unwrap();
    assert_eq!(list, vec![titled("A")]);
}

#[test]
fn decode_island_treats_malformed_payload_as_absent() {
    assert_eq!(decode_island(Some("[{")), None);
    assert_eq!(decode_island(None), None);
}

#[test]
fn island_payload_skips_network() {
    let calls = Cell::new(0);
    let list = block_on(resolve_projects(Some(r#"[{"title":"A"}]"#), || {
        calls.set(calls.get() + 1);
        served(Vec::new())
    }))
    .unwrap();
    assert_eq!(calls.get(), 0);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "A");
    assert_eq!(list[0].short(), "");
}

#[test]
fn empty_island_array_is_used_as_is() {
    let calls = Cell::new(0);
    let list = block_on(resolve_projects(Some("[]"), || {
        calls.set(calls.get() + 1);
        served(vec![titled("B")])
    }))
    .unwrap();
    assert!(list.is_empty());
    assert_eq!(calls.get(), 0);
}

#[test]
fn missing_island_falls_back_to_network() {
    let list = block_on(resolve_projects(None, || served(vec![titled("B")]))).unwrap();
    assert_eq!(list, vec![titled("B")]);
}

#[test]
fn malformed_island_falls_back_to_network() {
    let list = block_on(resolve_projects(Some("not json"), || served(vec![titled("B")]))).unwrap();
    assert_eq!(list, vec![titled("B")]);
}

#[test]
fn network_failure_surfaces_status_error() {
    let result = block_on(resolve_projects(None, || failing(LoadError::Status(404))));
    assert!(matches!(result, Err(LoadError::Status(404))));
}

#[test]
fn fetch_projects_is_unavailable_without_browser() {
    assert!(matches!(block_on(fetch_projects("projects.json", true)), Err(LoadError::Network(_))));
}

// =============================================================
// parse_index
// =============================================================

#[test]
fn parse_index_reads_non_negative_integers() {
    assert_eq!(parse_index(Some("0")), Some(0));
    assert_eq!(parse_index(Some(" 12 ")), Some(12));
}

#[test]
fn parse_index_rejects_garbage() {
    assert_eq!(parse_index(None), None);
    assert_eq!(parse_index(Some("")), None);
    assert_eq!(parse_index(Some("-1")), None);
    assert_eq!(parse_index(Some("one")), None);
}

// =============================================================
// ProjectCache
// =============================================================

#[test]
fn always_fetch_cache_never_hits() {
    let mut cache = ProjectCache::new(CachePolicy::AlwaysFetch);
    cache.remember(&[titled("A")]);
    assert_eq!(cache.lookup(), None);
}

#[test]
fn memoize_cache_keeps_first_list() {
    let mut cache = ProjectCache::new(CachePolicy::Memoize);
    assert_eq!(cache.lookup(), None);
    cache.remember(&[titled("A")]);
    cache.remember(&[titled("B")]);
    assert_eq!(cache.lookup(), Some(vec![titled("A")]));
}

// =============================================================
// DetailBridge
// =============================================================

fn bridge(policy: CachePolicy) -> DetailBridge {
    let cfg = FolioConfig { detail_cache: policy, ..FolioConfig::default() };
    DetailBridge::new(&cfg, ModalHandle::new())
}

fn shown(bridge: &DetailBridge) -> ModalState {
    bridge.modal().state().get_untracked()
}

#[test]
fn details_click_shows_indexed_record() {
    Owner::new().with(|| {
        let bridge = bridge(CachePolicy::AlwaysFetch);
        let payload = r#"[{"title":"B","short":"s","link":"https://x"}]"#;
        block_on(bridge.open_with(0, || async { parse_projects(payload).map_err(|e| LoadError::Decode(e.to_string())) }));
        let state = shown(&bridge);
        assert!(state.is_open());
        let project = state.project.unwrap();
        assert_eq!(project.title, "B");
        assert_eq!(project.summary(), "s");
        assert_eq!(project.link(), Some("https://x"));
    });
}

#[test]
fn out_of_range_index_opens_empty_dialog() {
    Owner::new().with(|| {
        let bridge = bridge(CachePolicy::AlwaysFetch);
        block_on(bridge.open_with(5, || served(vec![titled("A")])));
        let state = shown(&bridge);
        assert!(state.is_open());
        assert!(state.project.is_none());
    });
}

#[test]
fn failed_detail_fetch_leaves_modal_closed() {
    Owner::new().with(|| {
        let bridge = bridge(CachePolicy::AlwaysFetch);
        block_on(bridge.open_with(0, || failing(LoadError::Network("offline".into()))));
        assert_eq!(shown(&bridge), ModalState::default());
    });
}

#[test]
fn failed_detail_fetch_keeps_previous_content() {
    Owner::new().with(|| {
        let bridge = bridge(CachePolicy::AlwaysFetch);
        block_on(bridge.open_with(0, || served(vec![titled("A")])));
        block_on(bridge.open_with(0, || failing(LoadError::Status(500))));
        assert_eq!(shown(&bridge).project, Some(titled("A")));
    });
}

#[test]
fn always_fetch_refetches_on_every_click() {
    Owner::new().with(|| {
        let bridge = bridge(CachePolicy::AlwaysFetch);
        let calls = Cell::new(0);
        for _ in 0..3 {
            block_on(bridge.open_with(0, || {
                calls.set(calls.get() + 1);
                served(vec![titled("A")])
            }));
        }
        assert_eq!(calls.get(), 3);
    });
}

#[test]
fn memoize_fetches_once() {
    Owner::new().with(|| {
        let bridge = bridge(CachePolicy::Memoize);
        let calls = Cell::new(0);
        block_on(bridge.open_with(0, || {
            calls.set(calls.get() + 1);
            served(vec![titled("A"), titled("B")])
        }));
        block_on(bridge.open_with(1, || {
            calls.set(calls.get() + 1);
            served(Vec::new())
        }));
        assert_eq!(calls.get(), 1);
        assert_eq!(shown(&bridge).project, Some(titled("B")));
    });
}

#[test]
fn latest_resolution_wins() {
    Owner::new().with(|| {
        let bridge = bridge(CachePolicy::AlwaysFetch);
        block_on(bridge.open_with(0, || served(vec![titled("first")])));
        block_on(bridge.open_with(0, || served(vec![titled("second")])));
        assert_eq!(shown(&bridge).project, Some(titled("second")));
    });
}
