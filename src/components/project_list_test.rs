use super::*;

fn project(title: &str, short: Option<&str>) -> Project {
    Project { title: title.to_owned(), short: short.map(str::to_owned), ..Project::default() }
}

#[test]
fn render_entries_emits_one_item_per_project() {
    let projects: Vec<Project> = (0..4).map(|i| project(&format!("P{i}"), None)).collect();
    let html = render_entries(&projects);
    assert_eq!(html.matches(r#"<li class="project-item">"#).count(), 4);
    assert_eq!(html.matches(r#"<button class="details""#).count(), 4);
}

#[test]
fn render_entries_tags_buttons_with_position() {
    let projects = vec![project("A", None), project("B", None), project("C", None)];
    let html = render_entries(&projects);
    let positions: Vec<usize> = (0..3)
        .map(|i| html.find(&format!(r#"data-idx="{i}""#)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(html.find("A").unwrap() < positions[0]);
    assert!(html.find("C").unwrap() < positions[2]);
}

#[test]
fn render_entries_empty_list_is_empty_markup() {
    assert_eq!(render_entries(&[]), "");
}

#[test]
fn render_entries_title_only_has_empty_summary() {
    let html = render_entries(&[project("A", None)]);
    assert_eq!(
        html,
        r#"<li class="project-item"><strong>A</strong><p class="short"></p><button class="details" data-idx="0">View details</button></li>"#
    );
}

#[test]
fn render_entries_includes_short_summary() {
    let html = render_entries(&[project("B", Some("s"))]);
    assert!(html.contains("<strong>B</strong>"));
    assert!(html.contains(r#"<p class="short">s</p>"#));
}

#[test]
fn render_entries_escapes_untrusted_fields() {
    let html = render_entries(&[project("<img src=x onerror=alert(1)>", Some(r#""quoted" & 'single'"#))]);
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    assert!(html.contains("&quot;quoted&quot; &amp; &#39;single&#39;"));
}

#[test]
fn render_entries_missing_title_renders_empty_strong() {
    let html = render_entries(&[Project::default()]);
    assert!(html.contains("<strong></strong>"));
}
