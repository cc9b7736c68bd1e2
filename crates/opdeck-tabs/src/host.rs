//! Event-bus bindings for the tab registry.
//!
//! A [`TabHost`] subscribes to the bus while mounted and routes inbound
//! workspace events into registry operations. Every tab it opens or reuses
//! is announced with `switch-to-tab`, and an emptied strip is announced
//! with `switch-to-welcome` once the redirect delay has passed.
//!
//! Content is allowed to publish while the registry is borrowed, for example
//! from [`ContentFactory::mount`](crate::ContentFactory::mount) during a
//! render. Such events are parked and routed on the next `tick` or `mount`.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

use opdeck_common::{Event, EventBus, Subscription, TabId};
use tracing::{debug, info, warn};

use crate::empty_watch::EmptyWatch;
use crate::registry::TabRegistry;
use crate::tab::{TabContent, TabKind};

pub struct TabHost {
    registry: Rc<RefCell<TabRegistry>>,
    bus: EventBus,
    parked: Rc<RefCell<VecDeque<Event>>>,
    empty_watch: EmptyWatch,
    subscription: Option<Subscription>,
}

impl TabHost {
    pub fn new(registry: TabRegistry, bus: EventBus, home_redirect_delay: Duration) -> Self {
        Self {
            registry: Rc::new(RefCell::new(registry)),
            bus,
            parked: Rc::new(RefCell::new(VecDeque::new())),
            empty_watch: EmptyWatch::new(home_redirect_delay),
            subscription: None,
        }
    }

    /// Attach to the bus. Mounting twice keeps a single handler.
    pub fn mount(&mut self, now: Instant) {
        if self.subscription.is_some() {
            return;
        }
        let registry = Rc::clone(&self.registry);
        let bus = self.bus.clone();
        let parked = Rc::clone(&self.parked);
        self.subscription = Some(
            self.bus
                .subscribe(move |event| route(&registry, &bus, &parked, event)),
        );
        self.drain_parked();
        self.empty_watch.observe(now, self.registry.borrow().len());
        info!(tabs = self.registry.borrow().len(), "tab host mounted");
    }

    /// Detach from the bus. Events published afterwards are not handled.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.dispose();
            info!("tab host unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn registry(&self) -> Ref<'_, TabRegistry> {
        self.registry.borrow()
    }

    /// Direct access for user actions that bypass the bus, such as clicking
    /// a tab or its close button. Must not be held across a publish.
    pub fn registry_mut(&self) -> RefMut<'_, TabRegistry> {
        self.registry.borrow_mut()
    }

    /// Feed the current tab count to the home-redirect timer and publish
    /// `switch-to-welcome` if it fires. Returns whether it fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.drain_parked();
        let len = self.registry.borrow().len();
        self.empty_watch.observe(now, len);
        if self.empty_watch.poll(now, len) {
            info!("tab strip empty, returning home");
            self.bus.publish(Event::SwitchToWelcome);
            true
        } else {
            false
        }
    }

    /// Whether a home redirect is pending.
    pub fn redirect_pending(&self) -> bool {
        self.empty_watch.is_armed()
    }

    /// Number of events waiting for the registry to become free.
    pub fn parked_len(&self) -> usize {
        self.parked.borrow().len()
    }

    /// Route events that arrived while the registry was borrowed. An event
    /// that still finds the registry busy is parked again for the next pass.
    fn drain_parked(&mut self) {
        if !self.is_mounted() {
            return;
        }
        let batch: Vec<Event> = self.parked.borrow_mut().drain(..).collect();
        for event in &batch {
            route(&self.registry, &self.bus, &self.parked, event);
        }
    }
}

fn route(
    registry: &RefCell<TabRegistry>,
    bus: &EventBus,
    parked: &RefCell<VecDeque<Event>>,
    event: &Event,
) {
    let target = {
        let Ok(mut registry) = registry.try_borrow_mut() else {
            debug!(event = event.name(), "registry busy, parking event");
            parked.borrow_mut().push_back(event.clone());
            return;
        };
        match event {
            Event::OpenSessionInTab { session } | Event::SessionSelected { session } => {
                let title = session.display_title();
                Some(registry.create_tab(title, TabContent::session(session.clone())))
            }
            Event::OpenClaudeFile { file } => {
                let existing = registry.find_by_file_id(file.id()).map(|t| t.id);
                Some(match existing {
                    Some(id) => {
                        registry.set_active(id);
                        id
                    }
                    None => registry.create_tab(
                        file.file_name(),
                        TabContent::ClaudeFile {
                            file: Some(file.clone()),
                        },
                    ),
                })
            }
            Event::OpenAgentExecution { agent, tab_id } => {
                debug!(agent = %agent.name, origin = ?tab_id, "opening agent execution");
                Some(registry.create_tab(
                    agent.name.clone(),
                    TabContent::AgentExecution {
                        agent: Some(agent.clone()),
                    },
                ))
            }
            Event::OpenCreateAgentTab => Some(reuse_or_create(&mut registry, TabKind::CreateAgent)),
            Event::OpenImportAgentTab => Some(reuse_or_create(&mut registry, TabKind::ImportAgent)),
            Event::CloseTab { tab_id } => {
                registry.close_tab(*tab_id);
                None
            }
            Event::SwitchToWelcome | Event::SwitchToTab { .. } => None,
            Event::Unknown => {
                warn!("ignoring unknown workspace event");
                None
            }
        }
    };

    if let Some(tab_id) = target {
        bus.publish(Event::SwitchToTab { tab_id });
    }
}

fn reuse_or_create(registry: &mut TabRegistry, kind: TabKind) -> TabId {
    match registry.find_by_kind(kind).map(|t| t.id) {
        Some(id) => {
            registry.set_active(id);
            id
        }
        None => registry.create_tab(kind.default_title(), TabContent::blank(kind)),
    }
}
