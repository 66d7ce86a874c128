use std::cell::RefCell;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::rc::Rc;
use std::thread;

use html::Node;
use html::dom_snapshot::assert_snapshot;
use html::traverse::{elements_with_attr, first_element_by_name_mut, get_element_by_id};
use net::FetchError;
use serde_json::{Value, json};
use sidenav::{DomError, HttpFetcher, InitError, NavConfig, Page, ParseError, SideNav};

const DOCS: &str = r#"{"items":[
    {"label":"Home","url":"/","items":[]},
    {"label":"Docs","url":"/docs","items":[{"label":"API","url":"/docs/api","items":[]}]}
]}"#;

fn serving(body: impl Into<String>) -> impl Fn(&str) -> Result<String, FetchError> {
    let body = body.into();
    move |_uri: &str| Ok(body.clone())
}

fn failing(err: FetchError) -> impl Fn(&str) -> Result<String, FetchError> {
    move |_uri: &str| Err(err.clone())
}

fn page_at(href: &str) -> Page {
    Page::shell(href, &NavConfig::default()).unwrap()
}

fn container(page: &Page) -> &Node {
    get_element_by_id(page.document(), "nav").unwrap()
}

fn active_routes(page: &Page) -> Vec<String> {
    let mut found = Vec::new();
    elements_with_attr(page.document(), "data-hash", &mut found);
    found
        .into_iter()
        .filter(|n| n.has_class("active"))
        .map(|n| n.attr("data-hash").unwrap_or_default().to_string())
        .collect()
}

fn body_is_open(page: &Page) -> bool {
    let mut doc = page.document().clone();
    first_element_by_name_mut(&mut doc, "body").is_some_and(|b| b.has_class("nav-open"))
}

fn list_depth(node: &Node) -> usize {
    let own = usize::from(node.is_element("ul"));
    own + node.children().iter().map(list_depth).max().unwrap_or(0)
}

#[test]
fn docs_scenario_renders_and_highlights() {
    let mut page = page_at("http://localhost:8080/#/docs/api");
    let nav = SideNav::new(NavConfig::default(), serving(DOCS));
    nav.init(&mut page).unwrap();

    let nav_el = container(&page);
    assert_eq!(nav_el.children().len(), 1);
    let top = &nav_el.children()[0];
    assert_eq!(top.children().len(), 2);
    let docs = &top.children()[1];
    assert!(docs.has_class("has-child-nav"));
    assert!(!top.children()[0].has_class("has-child-nav"));
    assert_eq!(docs.children()[1].children().len(), 1);

    let active = active_routes(&page);
    assert!(active.contains(&"/docs".to_string()));
    assert!(active.contains(&"/docs/api".to_string()));
    // "/" is a substring of every path-like fragment.
    assert_eq!(active, ["/", "/docs", "/docs/api"]);
}

#[test]
fn rendered_markup_matches_expected_outline() {
    let mut page = page_at("http://localhost:8080/#/docs");
    SideNav::new(NavConfig::default(), serving(DOCS))
        .init(&mut page)
        .unwrap();
    assert_snapshot(
        container(&page),
        r#"
<nav id="nav">
  <ul>
    <li data-hash="/" class="active">
      <a href="/">
        "Home"
        <span class="glyph-span">
    <li data-hash="/docs" class="has-child-nav active">
      <a href="/docs">
        "Docs"
        <span class="glyph-span">
      <ul>
        <li data-hash="/docs/api">
          <a href="/docs/api">
            "API"
            <span class="glyph-span">"#,
    );
}

#[test]
fn fetch_uses_uri_resolved_against_page() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let record = Rc::clone(&seen);
    let fetcher = move |uri: &str| -> Result<String, FetchError> {
        record.borrow_mut().push(uri.to_string());
        Ok(DOCS.to_string())
    };
    let mut page = page_at("http://localhost:8080/guide/index.html#/docs");
    SideNav::new(NavConfig::default(), fetcher)
        .init(&mut page)
        .unwrap();
    assert_eq!(*seen.borrow(), ["http://localhost:8080/data/nav.json"]);
}

#[test]
fn http_404_aborts_before_any_dom_mutation() {
    let mut page = page_at("http://localhost:8080/#/docs");
    let before = page.document().clone();
    let nav = SideNav::new(
        NavConfig::default(),
        failing(FetchError::Http {
            status: 404,
            status_text: "Not Found".to_string(),
        }),
    );

    let err = nav.init(&mut page).unwrap_err();
    assert!(
        matches!(err, InitError::Fetch(FetchError::Http { status: 404, .. })),
        "{err}"
    );
    assert!(container(&page).children().is_empty());
    assert_eq!(page.document(), &before);
    assert_eq!(page.listener_count(), 0);
}

#[test]
fn network_error_aborts_silently() {
    let mut page = page_at("http://localhost:8080/");
    let nav = SideNav::new(
        NavConfig::default(),
        failing(FetchError::Network("connection refused".to_string())),
    );
    assert!(matches!(
        nav.init(&mut page),
        Err(InitError::Fetch(FetchError::Network(_)))
    ));
    assert!(container(&page).children().is_empty());
}

#[test]
fn malformed_body_aborts_before_render() {
    let mut page = page_at("http://localhost:8080/");
    let nav = SideNav::new(NavConfig::default(), serving("<html>not json</html>"));
    assert!(matches!(
        nav.init(&mut page),
        Err(InitError::Parse(ParseError::Syntax(_)))
    ));
    assert!(container(&page).children().is_empty());
    assert_eq!(page.listener_count(), 0);
}

#[test]
fn missing_toggle_control_stops_before_first_highlight() {
    let config = NavConfig {
        toggle_id: "burger".to_string(),
        ..NavConfig::default()
    };
    let mut page = page_at("http://localhost:8080/#/docs");
    let nav = SideNav::new(config, serving(DOCS));

    let err = nav.init(&mut page).unwrap_err();
    assert!(matches!(
        err,
        InitError::Dom(DomError::MissingElement { ref id }) if id == "burger"
    ));
    // Render ran, wiring and highlight did not.
    assert_eq!(container(&page).children().len(), 1);
    assert_eq!(page.listener_count(), 0);
    assert!(active_routes(&page).is_empty());
}

#[test]
fn second_init_is_rejected() {
    let mut page = page_at("http://localhost:8080/");
    let nav = SideNav::new(NavConfig::default(), serving(DOCS));
    assert!(!nav.is_initialized());
    nav.init(&mut page).unwrap();
    assert!(nav.is_initialized());
    assert_eq!(page.listener_count(), 2);

    assert!(matches!(
        nav.init(&mut page),
        Err(InitError::AlreadyInitialized)
    ));
    assert_eq!(page.listener_count(), 2);
    assert_eq!(container(&page).children().len(), 1);
}

#[test]
fn toggling_twice_restores_open_marker() {
    let mut page = page_at("http://localhost:8080/");
    SideNav::new(NavConfig::default(), serving(DOCS))
        .init(&mut page)
        .unwrap();
    assert!(!body_is_open(&page));

    page.click_element("mobile-open-close-btn").unwrap();
    page.pump();
    assert!(body_is_open(&page));

    page.click_element("mobile-open-close-btn").unwrap();
    page.pump();
    assert!(!body_is_open(&page));
}

#[test]
fn hash_change_rehighlights() {
    let mut page = page_at("http://localhost:8080/#/docs/api");
    SideNav::new(NavConfig::default(), serving(DOCS))
        .init(&mut page)
        .unwrap();

    page.set_hash("#home");
    assert_eq!(page.pump(), 1);
    assert!(active_routes(&page).is_empty());

    page.set_hash("#/docs");
    page.pump();
    assert_eq!(active_routes(&page), ["/", "/docs"]);

    page.set_hash("");
    page.pump();
    assert!(active_routes(&page).is_empty());
}

fn chain(depth: usize) -> Value {
    let mut node = json!({ "label": format!("L{depth}"), "url": format!("/l{depth}") });
    for level in (1..depth).rev() {
        node = json!({
            "label": format!("L{level}"),
            "url": format!("/l{level}"),
            "items": [node],
        });
    }
    json!({ "items": [node] })
}

#[test]
fn nested_list_depth_equals_tree_depth() {
    for depth in 1..=6 {
        let body = chain(depth).to_string();
        let mut page = page_at("http://localhost:8080/");
        SideNav::new(NavConfig::default(), serving(body))
            .init(&mut page)
            .unwrap();
        assert_eq!(list_depth(container(&page)), depth, "depth {depth}");
    }
}

#[test]
fn has_child_marker_tracks_children() {
    let body = json!({ "items": [
        { "label": "A", "url": "/a", "items": [
            { "label": "A1", "url": "/a/1" },
            { "label": "A2", "url": "/a/2", "items": [ { "label": "A2x", "url": "/a/2/x" } ] }
        ]},
        { "label": "B", "url": "/b", "items": [] },
        { "label": "C", "url": "/c" }
    ]})
    .to_string();
    let mut page = page_at("http://localhost:8080/");
    SideNav::new(NavConfig::default(), serving(body))
        .init(&mut page)
        .unwrap();

    let mut items = Vec::new();
    elements_with_attr(page.document(), "data-hash", &mut items);
    let parents: Vec<&str> = items
        .iter()
        .filter(|n| n.has_class("has-child-nav"))
        .filter_map(|n| n.attr("data-hash"))
        .collect();
    assert_eq!(items.len(), 6);
    assert_eq!(parents, ["/a", "/a/2"]);
    for item in &items {
        let nested = item.children().iter().any(|c| c.is_element("ul"));
        assert_eq!(nested, item.has_class("has-child-nav"));
    }
}

#[test]
fn http_fetcher_404_end_to_end() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 1024];
            let mut seen = Vec::new();
            while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap_or(0);
                if n == 0 {
                    break;
                }
                seen.extend_from_slice(&buf[..n]);
            }
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
        }
    });

    let mut page = page_at(&format!("http://{addr}/index.html"));
    let err = SideNav::new(NavConfig::default(), HttpFetcher::new())
        .init(&mut page)
        .unwrap_err();
    assert!(
        matches!(&err, InitError::Fetch(FetchError::Http { status: 404, status_text }) if status_text == "Not Found"),
        "{err}"
    );
    assert!(container(&page).children().is_empty());
}
