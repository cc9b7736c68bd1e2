//! The headless shell: tab host, tab renderer, and responsive layout wired
//! together and driven by parsed input lines.

mod content;
mod input;

#[cfg(test)]
mod tests;

use content::HeadlessContent;
use input::{parse_line, Input, ShellCommand};

use std::time::{Duration, Instant};

use opdeck_common::{Event, EventBus, OpdeckError};
use opdeck_config::OpdeckConfig;
use opdeck_layout::{PanelGeometryStore, ResponsiveLayout};
use opdeck_tabs::{TabContent, TabHost, TabPanelRenderer, TabRegistry};
use serde_json::{json, Value};
use tracing::{debug, warn};

pub struct Shell {
    host: TabHost,
    renderer: TabPanelRenderer<HeadlessContent>,
    layout: ResponsiveLayout,
}

impl Shell {
    pub fn new(
        config: &OpdeckConfig,
        geometry: PanelGeometryStore,
        now: Instant,
    ) -> Result<Self, OpdeckError> {
        let bus = EventBus::new(config.events.watch_capacity);
        let registry = TabRegistry::with_max_title_len(config.tabs.max_title_len);
        let delay = Duration::from_millis(config.tabs.home_redirect_delay_ms);
        let mut host = TabHost::new(registry, bus, delay);
        host.mount(now);

        Ok(Self {
            host,
            renderer: TabPanelRenderer::new(HeadlessContent::default()),
            layout: ResponsiveLayout::new(config, geometry)?,
        })
    }

    pub fn bus(&self) -> &EventBus {
        self.host.bus()
    }

    pub fn host(&self) -> &TabHost {
        &self.host
    }

    pub fn layout(&self) -> &ResponsiveLayout {
        &self.layout
    }

    /// Parse and handle one input line. Malformed lines are logged and
    /// skipped. Returns a state snapshot when one was requested.
    pub fn handle_line(&mut self, line: &str, now: Instant) -> Option<Value> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        match parse_line(line) {
            Ok(input) => self.handle(input, now),
            Err(e) => {
                warn!(error = %e, "skipping malformed input line");
                None
            }
        }
    }

    pub fn handle(&mut self, input: Input, now: Instant) -> Option<Value> {
        let snapshot = match input {
            Input::Event(event) => {
                if event.is_outbound() {
                    debug!(event = event.name(), "outbound event on input ignored");
                } else {
                    self.host.bus().publish(event);
                }
                None
            }
            Input::Command(command) => self.command(command),
        };
        self.host.tick(now);
        snapshot
    }

    /// Advance the home-redirect timer.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.host.tick(now)
    }

    fn command(&mut self, command: ShellCommand) -> Option<Value> {
        match command {
            ShellCommand::Viewport { width } => {
                self.layout.set_viewport_width(width);
            }
            ShellCommand::Show { panel } => {
                self.layout.show(&panel);
            }
            ShellCommand::Hide { panel } => {
                self.layout.hide(&panel);
            }
            ShellCommand::Toggle { panel } => {
                self.layout.toggle(&panel);
            }
            ShellCommand::DismissBackdrop => {
                self.layout.dismiss_backdrop();
            }
            ShellCommand::DragStart { panel, x } => {
                if let Err(e) = self.layout.begin_drag(&panel, x) {
                    warn!(panel = %panel, error = %e, "drag rejected");
                }
            }
            ShellCommand::DragMove { x } => {
                self.layout.pointer_move(x);
            }
            ShellCommand::DragEnd => {
                self.layout.pointer_up();
            }
            ShellCommand::NewTab { kind, title } => {
                let title = title.unwrap_or_else(|| kind.default_title().to_string());
                let tab_id = self
                    .host
                    .registry_mut()
                    .create_tab(title, TabContent::blank(kind));
                self.host.bus().publish(Event::SwitchToTab { tab_id });
            }
            ShellCommand::Activate { tab } => {
                if !self.host.registry_mut().set_active(tab) {
                    debug!(tab_id = %tab, "activate for unknown tab ignored");
                }
            }
            ShellCommand::Close { tab } => {
                self.host.registry_mut().close_tab(tab);
            }
            ShellCommand::Next => {
                self.host.registry_mut().activate_next();
            }
            ShellCommand::Previous => {
                self.host.registry_mut().activate_previous();
            }
            ShellCommand::Move { tab, to } => {
                self.host.registry_mut().move_tab(tab, to);
            }
            ShellCommand::State => return Some(self.snapshot()),
        }
        None
    }

    /// Current tabs, mounted content, and arrangement as JSON.
    pub fn snapshot(&mut self) -> Value {
        let registry = self.host.registry();
        let tabs: Vec<Value> = self
            .renderer
            .render(&registry)
            .into_iter()
            .map(|slot| {
                json!({
                    "id": slot.tab_id,
                    "title": slot.title,
                    "kind": slot.kind,
                    "active": slot.active,
                    "content": slot.content,
                })
            })
            .collect();

        json!({
            "breakpoint": self.layout.breakpoint(),
            "viewport": self.layout.viewport_width(),
            "active": registry.active(),
            "tabs": tabs,
            "arrangement": self.layout.arrange(),
            "widths": self.layout.geometry().widths(),
            "mounts": self.renderer.factory().mounts(),
        })
    }
}
