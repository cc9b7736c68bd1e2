//! Tests for input parsing and the wired-up shell.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use opdeck_common::{Event, Subscription, TabId};
use opdeck_config::OpdeckConfig;
use opdeck_layout::PanelGeometryStore;
use opdeck_tabs::TabKind;

use super::input::{parse_line, Input, ShellCommand};
use super::Shell;

fn shell() -> (Shell, Rc<RefCell<Vec<Event>>>, Subscription, Instant) {
    let config = OpdeckConfig::default();
    let geometry = PanelGeometryStore::new(&config.layout.panels).unwrap();
    let start = Instant::now();
    let shell = Shell::new(&config, geometry, start).unwrap();
    let outbound = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&outbound);
    let sub = shell.bus().subscribe(move |e| {
        if e.is_outbound() {
            sink.borrow_mut().push(e.clone());
        }
    });
    (shell, outbound, sub, start)
}

#[test]
fn parses_events_and_commands() {
    assert_eq!(
        parse_line(r#"{"type":"close-tab","data":{"tabId":3}}"#).unwrap(),
        Input::Event(Event::CloseTab { tab_id: TabId(3) })
    );
    assert_eq!(
        parse_line(r#"{"cmd":"viewport","width":1024}"#).unwrap(),
        Input::Command(ShellCommand::Viewport { width: 1024.0 })
    );
    assert_eq!(
        parse_line(r#"{"cmd":"new-tab","kind":"claude-md"}"#).unwrap(),
        Input::Command(ShellCommand::NewTab {
            kind: TabKind::ClaudeMd,
            title: None
        })
    );
    assert!(parse_line("not json").is_err());
    assert!(parse_line(r#"{"cmd":"explode"}"#).is_err());
}

#[test]
fn malformed_lines_are_skipped() {
    let (mut shell, outbound, _sub, start) = shell();
    assert!(shell.handle_line("{{{", start).is_none());
    assert!(shell.handle_line("   ", start).is_none());
    assert!(shell.host().registry().is_empty());
    assert!(outbound.borrow().is_empty());
}

#[test]
fn session_event_opens_tab_and_mounts_it() {
    let (mut shell, outbound, _sub, start) = shell();
    let line = r#"{"type":"open-session-in-tab","data":{"session":{"id":"S1","project_id":"p","project_path":"/w/demo"}}}"#;
    shell.handle_line(line, start);
    shell.handle_line(line, start);

    let state = shell.handle_line(r#"{"cmd":"state"}"#, start).unwrap();
    let tabs = state["tabs"].as_array().unwrap();
    assert_eq!(tabs.len(), 1);
    assert_eq!(tabs[0]["title"], "demo");
    assert_eq!(tabs[0]["kind"], "chat");
    assert_eq!(tabs[0]["content"], "chat:S1");
    assert_eq!(state["active"], 1);
    assert_eq!(outbound.borrow().len(), 2);
}

#[test]
fn only_active_tab_has_content() {
    let (mut shell, _outbound, _sub, start) = shell();
    shell.handle_line(r#"{"cmd":"new-tab","kind":"usage"}"#, start);
    shell.handle_line(r#"{"cmd":"new-tab","kind":"agent"}"#, start);
    let state = shell.snapshot();
    let tabs = state["tabs"].as_array().unwrap();
    assert!(tabs[0]["content"].is_null());
    assert_eq!(tabs[1]["content"], "placeholder:No agent run ID specified");

    shell.handle_line(r#"{"cmd":"previous"}"#, start);
    let state = shell.snapshot();
    assert_eq!(state["tabs"][0]["content"], "usage");
    assert!(state["tabs"][1]["content"].is_null());
    assert_eq!(state["mounts"], 2);
}

#[test]
fn closing_everything_returns_home_after_delay() {
    let (mut shell, outbound, _sub, start) = shell();
    shell.handle_line(r#"{"cmd":"new-tab","kind":"projects"}"#, start);
    shell.handle_line(r#"{"type":"close-tab","data":{"tabId":1}}"#, start);
    assert!(!outbound.borrow().contains(&Event::SwitchToWelcome));

    assert!(!shell.tick(start + Duration::from_millis(50)));
    assert!(shell.tick(start + Duration::from_millis(100)));
    assert!(!shell.tick(start + Duration::from_millis(500)));
    assert_eq!(
        outbound
            .borrow()
            .iter()
            .filter(|e| **e == Event::SwitchToWelcome)
            .count(),
        1
    );
}

#[test]
fn layout_commands_drive_arrangement() {
    let (mut shell, _outbound, _sub, start) = shell();
    for line in [
        r#"{"cmd":"show","panel":"file-explorer"}"#,
        r#"{"cmd":"drag-start","panel":"file-explorer","x":100}"#,
        r#"{"cmd":"drag-move","x":1000}"#,
        r#"{"cmd":"drag-end"}"#,
    ] {
        shell.handle_line(line, start);
    }
    let state = shell.snapshot();
    assert_eq!(state["breakpoint"], "desktop");
    assert_eq!(state["arrangement"]["row"]["template"], "600px 1fr");
    assert_eq!(state["widths"]["file-explorer"], 600.0);

    shell.handle_line(r#"{"cmd":"viewport","width":500}"#, start);
    shell.handle_line(r#"{"cmd":"dismiss-backdrop"}"#, start);
    let state = shell.snapshot();
    assert_eq!(state["arrangement"]["mode"], "mobile");
    assert_eq!(state["arrangement"]["backdrop"], false);
    assert_eq!(state["widths"]["file-explorer"], 600.0);
    assert!(!shell.layout().is_visible("file-explorer"));
}

#[test]
fn outbound_events_on_input_are_not_republished() {
    let (mut shell, outbound, _sub, start) = shell();
    shell.handle_line(r#"{"type":"switch-to-welcome"}"#, start);
    assert!(outbound.borrow().is_empty());
}
