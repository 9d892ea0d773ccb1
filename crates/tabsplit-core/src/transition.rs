//! Layout transitions
//!
//! Environment changes are turned into a two-phase reflow: panes returning to
//! the fixed layout first, then panes leaving it. The new visibility state is
//! committed only once the reflow has finished. Changes announced while a
//! reflow is in flight are kept (latest wins) and replayed afterwards.

use tabsplit_layout::{LayoutPolicy, PaneChange, Size, Traits, VisibilityDiff, VisibilityState};
use tabsplit_panes::{Animation, AnimationKind, LayoutStep, Pane, RenderShell, ShellCommand};

use crate::controller::{AdaptiveController, Continuation, Environment};

/// Reflow waiting for its animation
#[derive(Debug, Clone, Copy)]
pub(crate) struct PendingTransition {
    target: VisibilityState,
    diff: VisibilityDiff,
    environment: Environment,
}

impl<S: RenderShell> AdaptiveController<S> {
    /// Initial layout pass. Runs once, unanimated, and selects the first tab.
    pub fn present(&mut self, size: Size, traits: Traits) {
        if self.presented {
            tracing::debug!("Shell already presented");
            return;
        }
        self.presented = true;
        self.remembered = Default::default();

        self.select_tab(0);
        self.begin_transition(size, traits, false);

        tracing::info!(
            width = size.width,
            height = size.height,
            state = %self.state,
            "Shell presented"
        );
    }

    pub(crate) fn traits_will_change(&mut self, traits: Traits) {
        self.remembered.traits = Some(traits);
    }

    pub(crate) fn size_will_change(&mut self, size: Size) {
        if !self.presented || self.transition.is_some() {
            tracing::debug!(width = size.width, "Deferring size change");
            self.remembered.size = Some(size);
            return;
        }
        let traits = self
            .remembered
            .traits
            .take()
            .unwrap_or(self.environment.traits);
        self.begin_transition(size, traits, true);
    }

    /// Re-evaluate the current environment, e.g. after the rules changed
    pub(crate) fn relayout(&mut self) {
        if !self.presented {
            return;
        }
        if let Some(id) = self.transition {
            // Replay the in-flight target once it has been committed
            if let Some(Continuation::Transition(pending)) = self.continuations.get(&id) {
                let size = pending.environment.size;
                self.remembered.size.get_or_insert(size);
            }
            return;
        }
        let Environment { size, traits } = self.environment;
        self.begin_transition(size, traits, true);
    }

    fn begin_transition(&mut self, size: Size, traits: Traits, animated: bool) {
        let decision = LayoutPolicy::evaluate(size, &traits, &self.config);
        if decision.conflict {
            tracing::error!(
                width = size.width,
                "Master and detail both asked to collapse; keeping the detail inline"
            );
        }

        let target = decision.visibility();
        let diff = self.state.diff(&target);
        let environment = Environment { size, traits };
        tracing::debug!(from = %self.state, to = %target, "Planning layout transition");

        if diff.is_empty() {
            self.environment = environment;
            return;
        }

        let mut steps = Vec::new();

        // Phase 1: panes returning to the fixed layout
        if diff.tab_bar == PaneChange::Expand {
            steps.extend(self.navigation.release(&mut self.shell));
            steps.push(LayoutStep::Dock { pane: Pane::TabBar });
            if target.detail_hidden {
                if let Some(cover) = self.solo.as_mut() {
                    cover.tab_bar = true;
                    steps.push(LayoutStep::BeginSolo {
                        cover_tab_bar: true,
                        cover_master: cover.master,
                    });
                }
            }
        }
        if diff.master == PaneChange::Expand {
            steps.extend(self.master_side_bar.release(&mut self.shell));
            steps.push(LayoutStep::Dock { pane: Pane::Master });
        }
        if diff.detail == PaneChange::Expand {
            steps.extend(self.return_detail_inline());
        }

        // Phase 2: panes leaving the fixed layout
        if diff.tab_bar == PaneChange::Collapse {
            steps.push(LayoutStep::Undock { pane: Pane::TabBar });
            steps.extend(self.navigation.host());
            if let Some(cover) = self.solo.as_mut() {
                cover.tab_bar = false;
            }
        }
        if diff.master == PaneChange::Collapse {
            steps.push(LayoutStep::Undock { pane: Pane::Master });
            steps.extend(self.master_side_bar.host());
            if let Some(cover) = self.solo.as_mut() {
                cover.master = false;
            }
        }

        if diff.master.is_changed() {
            self.tab_bar_open = false;
            self.shell.execute(ShellCommand::SetDisclosure {
                visible: target.master_hidden,
                open: false,
            });
        }

        let pending = PendingTransition {
            target,
            diff,
            environment,
        };

        if animated && !steps.is_empty() {
            let id = self.ids.next_id();
            self.shell.execute(ShellCommand::Animate {
                animation: Animation::new(id, AnimationKind::Reflow { steps }),
            });
            self.transition = Some(id);
            self.continuations
                .insert(id, Continuation::Transition(pending));
            tracing::info!(animation = %id, to = %target, "Layout transition started");
        } else {
            for step in steps {
                self.shell.execute(ShellCommand::Layout { step });
            }
            self.complete_transition(pending);
        }
    }

    pub(crate) fn complete_transition(&mut self, pending: PendingTransition) {
        self.transition = None;
        self.state = pending.target;
        self.environment = pending.environment;

        if pending.diff.detail == PaneChange::Collapse {
            match self.detail_content.clone() {
                Some(_) if self.config.detail_modal_stays_in_place => self.present_solo(),
                Some(content) => {
                    self.undock_detail();
                    self.swap_content(Pane::Detail, None, false, None);
                    self.shell.execute(ShellCommand::PresentModal {
                        content: content.clone(),
                        animation: None,
                    });
                    self.modal = Some(content);
                }
                None => self.undock_detail(),
            }
        } else if !self.state.detail_hidden && (self.modal.is_some() || self.solo.is_some()) {
            // Detail was presented collapsed while the reflow was running
            for step in self.return_detail_inline() {
                self.shell.execute(ShellCommand::Layout { step });
            }
        }

        tracing::info!(state = %self.state, "Layout transition committed");

        if let Some(size) = self.remembered.size.take() {
            let traits = self
                .remembered
                .traits
                .take()
                .unwrap_or(self.environment.traits);
            self.begin_transition(size, traits, true);
        }
    }

    pub(crate) fn undock_detail(&mut self) {
        if self.detail_docked {
            self.detail_docked = false;
            self.shell.execute(ShellCommand::Layout {
                step: LayoutStep::Undock { pane: Pane::Detail },
            });
        }
    }
}
