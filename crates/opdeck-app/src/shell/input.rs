//! JSON-lines input: workspace events or shell commands.
//!
//! Lines carrying a `"type"` field are workspace events
//! (`{"type":"open-create-agent-tab"}`); lines carrying `"cmd"` are shell
//! commands (`{"cmd":"viewport","width":1024}`).

use opdeck_common::{Event, TabId};
use opdeck_tabs::TabKind;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "kebab-case")]
pub enum ShellCommand {
    Viewport { width: f64 },
    Show { panel: String },
    Hide { panel: String },
    Toggle { panel: String },
    DismissBackdrop,
    DragStart { panel: String, x: f64 },
    DragMove { x: f64 },
    DragEnd,
    NewTab {
        kind: TabKind,
        #[serde(default)]
        title: Option<String>,
    },
    Activate { tab: TabId },
    Close { tab: TabId },
    Next,
    Previous,
    Move { tab: TabId, to: usize },
    State,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Event(Event),
    Command(ShellCommand),
}

pub fn parse_line(line: &str) -> Result<Input, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(line)?;
    if value.get("cmd").is_some() {
        serde_json::from_value(value).map(Input::Command)
    } else {
        serde_json::from_value(value).map(Input::Event)
    }
}
