//! Adaptive Controller
//!
//! Central state container for the shell. Owns the tab lists, the three pane
//! containers and both side bars, and turns inbound [`ShellEvent`]s into
//! [`ShellCommand`]s for the render shell.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tabsplit_layout::{Configuration, ConfigChanges, Size, Traits, VisibilityState};
use tabsplit_panes::{
    AnimationId, AnimationIds, ContentHandle, ListKind, Pane, PaneContainer, RenderShell,
    ShellCommand, SideBar, SideBarGesture, SideBarKind, SwapStatus,
};
use tabsplit_tabs::{Selection, SelectionHandler, TabAction, TabItem, TabList};

use crate::error::CoreError;
use crate::event::{Queued, ShellEvent};
use crate::transition::PendingTransition;
use crate::Result;

/// Called once when a detail presentation or dismissal has finished
pub type Completion = Box<dyn FnOnce() + Send>;

/// Size and traits the current layout was computed for
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Environment {
    pub size: Size,
    pub traits: Traits,
}

/// Announced environment values not yet applied
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Remembered {
    pub(crate) size: Option<Size>,
    pub(crate) traits: Option<Traits>,
}

/// Panes covered while the detail is presented solo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SoloCover {
    pub(crate) tab_bar: bool,
    pub(crate) master: bool,
}

/// Work to resume when an animation reports back
pub(crate) enum Continuation {
    /// Container swap lifecycle, then the caller's completion
    Swap {
        pane: Pane,
        completion: Option<Completion>,
    },
    /// Modal presentation or dismissal
    Finish(Option<Completion>),
    /// Solo presentation ended; the detail slot falls back to default content
    ClearDetail(Option<Completion>),
    /// Layout reflow; commit the new visibility state
    Transition(PendingTransition),
}

pub struct AdaptiveController<S: RenderShell> {
    pub(crate) shell: S,
    pub(crate) config: Configuration,
    pub(crate) tabs: TabList<ContentHandle>,
    pub(crate) actions: TabList<TabAction>,
    pub(crate) tab_bar: PaneContainer,
    pub(crate) master: PaneContainer,
    pub(crate) detail: PaneContainer,
    pub(crate) navigation: SideBar,
    pub(crate) master_side_bar: SideBar,
    pub(crate) ids: AnimationIds,
    /// Committed visibility state
    pub(crate) state: VisibilityState,
    pub(crate) environment: Environment,
    pub(crate) remembered: Remembered,
    pub(crate) presented: bool,
    /// Layout reflow in flight
    pub(crate) transition: Option<AnimationId>,
    /// Currently open detail; the detail container owns what is displayed
    pub(crate) detail_content: Option<ContentHandle>,
    /// Detail presented as a true modal
    pub(crate) modal: Option<ContentHandle>,
    pub(crate) solo: Option<SoloCover>,
    pub(crate) detail_docked: bool,
    /// Master side bar open, as shown by the tab bar disclosure arrow
    pub(crate) tab_bar_open: bool,
    pub(crate) continuations: HashMap<AnimationId, Continuation>,
    queue: VecDeque<Queued>,
}

/// Wiring for an [`AdaptiveController`]; the render shell is mandatory
pub struct ControllerBuilder<S> {
    shell: Option<S>,
    config: Configuration,
    tab_items: Vec<TabItem<ContentHandle>>,
    action_items: Vec<TabItem<TabAction>>,
    default_detail: Option<ContentHandle>,
}

impl<S: RenderShell> ControllerBuilder<S> {
    pub fn new() -> Self {
        Self {
            shell: None,
            config: Configuration::default(),
            tab_items: Vec::new(),
            action_items: Vec::new(),
            default_detail: None,
        }
    }

    pub fn shell(mut self, shell: S) -> Self {
        self.shell = Some(shell);
        self
    }

    pub fn configuration(mut self, config: Configuration) -> Self {
        self.config = config;
        self
    }

    pub fn tab_items(mut self, items: Vec<TabItem<ContentHandle>>) -> Self {
        self.tab_items = items;
        self
    }

    pub fn action_items(mut self, items: Vec<TabItem<TabAction>>) -> Self {
        self.action_items = items;
        self
    }

    pub fn default_detail(mut self, content: ContentHandle) -> Self {
        self.default_detail = Some(content);
        self
    }

    pub fn build(self) -> Result<AdaptiveController<S>> {
        let shell = self
            .shell
            .ok_or(CoreError::MissingComponent("render shell"))?;
        self.config.validate()?;

        let mut controller = AdaptiveController {
            shell,
            config: self.config,
            tabs: TabList::with_items(self.tab_items),
            actions: TabList::with_items(self.action_items),
            tab_bar: PaneContainer::new(Pane::TabBar),
            master: PaneContainer::new(Pane::Master),
            detail: PaneContainer::new(Pane::Detail),
            navigation: SideBar::new(SideBarKind::Navigation),
            master_side_bar: SideBar::new(SideBarKind::Master),
            ids: AnimationIds::new(),
            state: VisibilityState::inline(),
            environment: Environment::default(),
            remembered: Remembered::default(),
            presented: false,
            transition: None,
            detail_content: None,
            modal: None,
            solo: None,
            detail_docked: true,
            tab_bar_open: false,
            continuations: HashMap::new(),
            queue: VecDeque::new(),
        };

        let changes = controller.config.initial_changes();
        controller.apply_config_changes(&changes);
        controller.tab_bar.set_content(
            Some(ContentHandle::new("Tab Bar")),
            false,
            &mut controller.ids,
            &mut controller.shell,
        );
        if let Some(content) = self.default_detail {
            controller.set_default_detail(Some(content));
        }
        controller.reload_list(ListKind::Tabs);
        controller.reload_list(ListKind::Actions);

        tracing::info!(
            tabs = controller.tabs.len(),
            actions = controller.actions.len(),
            "Adaptive controller built"
        );

        Ok(controller)
    }
}

impl<S: RenderShell> Default for ControllerBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RenderShell> AdaptiveController<S> {
    pub fn builder() -> ControllerBuilder<S> {
        ControllerBuilder::new()
    }

    // === Event processing ===

    /// Queue an event and process everything pending
    pub fn dispatch(&mut self, event: ShellEvent) {
        self.queue.push_back(Queued::Event(event));
        self.tick();
    }

    /// Process queued work, including deferred list re-indexing
    pub fn tick(&mut self) {
        while let Some(queued) = self.queue.pop_front() {
            match queued {
                Queued::Event(event) => self.handle(event),
                Queued::SettleTabs => self.settle_tabs(),
                Queued::SettleActions => {
                    self.actions.settle();
                    self.reload_list(ListKind::Actions);
                }
            }
        }
    }

    pub fn has_pending_work(&self) -> bool {
        !self.queue.is_empty()
    }

    fn handle(&mut self, event: ShellEvent) {
        tracing::trace!(?event, "Handling shell event");
        match event {
            ShellEvent::Present { size, traits } => self.present(size, traits),
            ShellEvent::TraitsWillChange { traits } => self.traits_will_change(traits),
            ShellEvent::SizeWillChange { size } => self.size_will_change(size),
            ShellEvent::TabSelected { index } => self.select_tab(index),
            ShellEvent::ActionSelected { index } => self.select_action(index),
            ShellEvent::Gesture { gesture } => self.handle_gesture(gesture),
            ShellEvent::AnimationFinished { id } => self.animation_finished(id),
            ShellEvent::ShowDetail { content } => self.show_detail(content, None),
            ShellEvent::DismissDetail { animated } => self.dismiss_detail(animated, None),
        }
    }

    fn animation_finished(&mut self, id: AnimationId) {
        match self.continuations.remove(&id) {
            Some(Continuation::Swap { pane, completion }) => {
                let container = match pane {
                    Pane::TabBar => &mut self.tab_bar,
                    Pane::Master => &mut self.master,
                    Pane::Detail => &mut self.detail,
                };
                container.finish_animation(id, &mut self.shell);
                run(completion);
            }
            Some(Continuation::Finish(completion)) => run(completion),
            Some(Continuation::ClearDetail(completion)) => {
                // A detail opened meanwhile keeps the slot
                if self.detail_content.is_none() {
                    self.swap_content(Pane::Detail, None, false, None);
                }
                run(completion);
            }
            Some(Continuation::Transition(pending)) => self.complete_transition(pending),
            None => tracing::debug!(animation = %id, "Ignoring unknown animation"),
        }
    }

    /// Swap a container's content, keeping its completion until the lifecycle ends
    pub(crate) fn swap_content(
        &mut self,
        pane: Pane,
        content: Option<ContentHandle>,
        animate: bool,
        completion: Option<Completion>,
    ) {
        let container = match pane {
            Pane::TabBar => &mut self.tab_bar,
            Pane::Master => &mut self.master,
            Pane::Detail => &mut self.detail,
        };
        // A superseded swap finishes inside set_content; its completion runs right after
        let superseded = container
            .pending_animation()
            .and_then(|id| self.continuations.remove(&id));

        let status = container.set_content(content, animate, &mut self.ids, &mut self.shell);

        if let Some(Continuation::Swap { completion, .. }) = superseded {
            run(completion);
        }
        match status {
            SwapStatus::Done => run(completion),
            SwapStatus::Animating(id) => {
                self.continuations
                    .insert(id, Continuation::Swap { pane, completion });
            }
        }
    }

    // === Tab bar ===

    pub fn add_tab_item(&mut self, item: TabItem<ContentHandle>) {
        self.tabs.append(item);
        self.reload_list(ListKind::Tabs);
    }

    /// Ignored when `at` is past the end of the list
    pub fn insert_tab_item(&mut self, item: TabItem<ContentHandle>, at: usize) {
        if self.tabs.insert(item, at) {
            self.reload_list(ListKind::Tabs);
            self.queue.push_back(Queued::SettleTabs);
        }
    }

    pub fn remove_tab_item(&mut self, at: usize) -> Option<TabItem<ContentHandle>> {
        let removed = self.tabs.remove(at)?;
        self.reload_list(ListKind::Tabs);
        self.queue.push_back(Queued::SettleTabs);
        tracing::info!(index = at, title = %removed.title(), "Removed tab item");
        Some(removed)
    }

    pub fn add_action_item(&mut self, item: TabItem<TabAction>) {
        self.actions.append(item);
        self.reload_list(ListKind::Actions);
    }

    pub fn insert_action_item(&mut self, item: TabItem<TabAction>, at: usize) {
        if self.actions.insert(item, at) {
            self.reload_list(ListKind::Actions);
            self.queue.push_back(Queued::SettleActions);
        }
    }

    pub fn remove_action_item(&mut self, at: usize) -> Option<TabItem<TabAction>> {
        let removed = self.actions.remove(at)?;
        self.reload_list(ListKind::Actions);
        self.queue.push_back(Queued::SettleActions);
        Some(removed)
    }

    /// Register a host callback for main tab selections
    pub fn on_tab_selected(&mut self, handler: SelectionHandler<ContentHandle>) {
        self.tabs.set_selection_handler(handler);
    }

    /// Select a main tab, exactly as if the user tapped it
    pub fn select_tab(&mut self, index: usize) {
        // Indices from the host refer to the reloaded list
        if self.tabs.has_pending() {
            self.settle_tabs();
        }
        let Some(content) = self.tabs.get(index).map(|item| item.action().clone()) else {
            if self.tabs.select(index) == Selection::Cleared {
                self.reload_list(ListKind::Tabs);
            }
            return;
        };

        let same = self.master.content() == Some(&content);
        if self.tabs.selected_index() != Some(index) {
            self.tabs.select(index);
            self.reload_list(ListKind::Tabs);
        }
        if !same {
            self.swap_content(Pane::Master, Some(content), false, None);
            tracing::info!(index, "Switched master content");
        }

        if self.state.tab_bar_hidden {
            if same {
                self.navigation.toggle(true, &mut self.shell);
            } else {
                self.navigation.hide(true, &mut self.shell);
            }
        } else if self.state.master_hidden {
            if !self.master_side_bar.is_visible() {
                self.master_side_bar.show(true, &mut self.shell);
                self.tab_bar_open = true;
            } else if same {
                self.master_side_bar.hide(true, &mut self.shell);
                self.tab_bar_open = false;
            } else {
                self.tab_bar_open = true;
            }
            self.update_disclosure();
        }
    }

    fn select_action(&mut self, index: usize) {
        if self.actions.has_pending() {
            self.actions.settle();
        }
        let Some(action) = self.actions.get(index).map(|item| Arc::clone(item.action())) else {
            return;
        };
        self.actions.select(index);
        if self.state.tab_bar_hidden {
            self.navigation.hide(true, &mut self.shell);
        }
        action();
        self.actions.clear_selection();
        self.reload_list(ListKind::Actions);
    }

    fn settle_tabs(&mut self) {
        match self.tabs.settle() {
            Some(Selection::Selected(index)) => {
                let content = self.tabs.get(index).map(|item| item.action().clone());
                self.swap_content(Pane::Master, content, false, None);
            }
            Some(Selection::Cleared) => self.swap_content(Pane::Master, None, false, None),
            None => {}
        }
        self.reload_list(ListKind::Tabs);
    }

    fn handle_gesture(&mut self, gesture: SideBarGesture) {
        if self.navigation.is_hosted() {
            self.navigation.handle_gesture(gesture, &mut self.shell);
        } else if self.master_side_bar.handle_gesture(gesture, &mut self.shell) {
            self.tab_bar_open = self.master_side_bar.is_visible();
            self.update_disclosure();
        }
    }

    /// Close whichever side bar is open
    pub fn hide_side_bars(&mut self, animated: bool) {
        self.navigation.hide(animated, &mut self.shell);
        if self.master_side_bar.hide(animated, &mut self.shell) {
            self.tab_bar_open = false;
            self.update_disclosure();
        }
    }

    pub(crate) fn update_disclosure(&mut self) {
        self.shell.execute(ShellCommand::SetDisclosure {
            visible: self.state.master_hidden,
            open: self.tab_bar_open,
        });
    }

    pub(crate) fn set_gestures_enabled(&mut self, enabled: bool) {
        self.navigation.set_gestures_enabled(enabled);
        self.master_side_bar.set_gestures_enabled(enabled);
        self.shell
            .execute(ShellCommand::SetGesturesEnabled { enabled });
    }

    fn reload_list(&mut self, list: ListKind) {
        let selected = match list {
            ListKind::Tabs => self.tabs.selected_index(),
            ListKind::Actions => self.actions.selected_index(),
        };
        self.shell
            .execute(ShellCommand::ReloadList { list, selected });
    }

    // === Configuration ===

    /// Replace the configuration; only changed fields take effect
    pub fn set_configuration(&mut self, config: Configuration) -> Result<()> {
        config.validate()?;
        let changes = config.changes_from(&self.config);
        self.config = config;
        self.apply_config_changes(&changes);
        if changes.rules || changes.widths_changed() {
            self.relayout();
        }
        Ok(())
    }

    fn apply_config_changes(&mut self, changes: &ConfigChanges) {
        if changes.is_empty() {
            return;
        }
        if let Some(width) = changes.tab_bar_width {
            self.shell.execute(ShellCommand::SetPaneWidth {
                pane: Pane::TabBar,
                width,
            });
        }
        if let Some(width) = changes.master_width {
            self.shell.execute(ShellCommand::SetPaneWidth {
                pane: Pane::Master,
                width,
            });
        }
        if let Some(color) = changes.tab_bar_background {
            self.shell.execute(ShellCommand::SetBackground {
                pane: Pane::TabBar,
                color,
            });
        }
        if let Some(color) = changes.detail_background {
            self.shell.execute(ShellCommand::SetBackground {
                pane: Pane::Detail,
                color,
            });
        }
        if let Some(color) = changes.separator_color {
            self.shell
                .execute(ShellCommand::SetSeparatorColor { color });
        }
        if let Some(stays) = changes.detail_modal_stays_in_place {
            tracing::info!(stays_in_place = stays, "Detail modal presentation changed");
        }
    }

    pub fn set_default_detail(&mut self, content: Option<ContentHandle>) {
        self.detail
            .set_default_content(content, &mut self.ids, &mut self.shell);
    }

    // === Accessors ===

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn tabs(&self) -> &TabList<ContentHandle> {
        &self.tabs
    }

    pub fn actions(&self) -> &TabList<TabAction> {
        &self.actions
    }

    pub fn selected_tab_index(&self) -> Option<usize> {
        self.tabs.selected_index()
    }

    pub fn master_content(&self) -> Option<&ContentHandle> {
        self.master.content()
    }

    /// Content displayed by the detail container (possibly the default)
    pub fn detail_pane_content(&self) -> Option<&ContentHandle> {
        self.detail.content()
    }

    /// Currently open detail, wherever it is presented
    pub fn detail_content(&self) -> Option<&ContentHandle> {
        self.detail_content.as_ref()
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail_content.is_some()
    }

    pub fn presented_modal(&self) -> Option<&ContentHandle> {
        self.modal.as_ref()
    }

    pub fn is_solo(&self) -> bool {
        self.solo.is_some()
    }

    pub fn is_presented(&self) -> bool {
        self.presented
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    pub fn side_bar(&self, kind: SideBarKind) -> &SideBar {
        match kind {
            SideBarKind::Navigation => &self.navigation,
            SideBarKind::Master => &self.master_side_bar,
        }
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut S {
        &mut self.shell
    }
}

pub(crate) fn run(completion: Option<Completion>) {
    if let Some(completion) = completion {
        completion();
    }
}
