//! Detail presentation
//!
//! An open detail is shown in the detail pane while it is inline. Once the
//! detail pane is collapsed it is either presented as a true modal or kept in
//! place as the only visible pane (solo), depending on
//! `detail_modal_stays_in_place`.

use tabsplit_panes::{
    Animation, AnimationKind, ContentHandle, LayoutStep, Pane, RenderShell, ShellCommand,
};

use crate::controller::{run, AdaptiveController, Completion, Continuation, SoloCover};

impl<S: RenderShell> AdaptiveController<S> {
    /// Open `content` as the detail. `completion` runs once it is on screen.
    pub fn show_detail(&mut self, content: ContentHandle, completion: Option<Completion>) {
        self.hide_side_bars(true);

        if !self.state.detail_hidden {
            self.swap_content(Pane::Detail, Some(content.clone()), true, completion);
        } else if self.config.detail_modal_stays_in_place {
            if self.solo.is_none() {
                self.present_solo();
            }
            self.swap_content(Pane::Detail, Some(content.clone()), false, completion);
        } else {
            if let Some(previous) = self.modal.take() {
                self.shell.execute(ShellCommand::DismissModal {
                    content: previous,
                    animation: None,
                });
            }
            let id = self.ids.next_id();
            self.shell.execute(ShellCommand::PresentModal {
                content: content.clone(),
                animation: Some(id),
            });
            self.modal = Some(content.clone());
            self.continuations.insert(id, Continuation::Finish(completion));
        }

        tracing::info!(
            content = %content,
            collapsed = self.state.detail_hidden,
            "Showing detail"
        );
        self.detail_content = Some(content);
    }

    /// Close the open detail and restore the default detail content
    pub fn dismiss_detail(&mut self, animated: bool, completion: Option<Completion>) {
        let Some(content) = self.detail_content.take() else {
            run(completion);
            return;
        };
        tracing::info!(content = %content, animated, "Dismissing detail");

        if let Some(modal) = self.modal.take() {
            let animation = animated.then(|| self.ids.next_id());
            self.shell.execute(ShellCommand::DismissModal {
                content: modal,
                animation,
            });
            match animation {
                Some(id) => {
                    self.continuations.insert(id, Continuation::Finish(completion));
                }
                None => run(completion),
            }
        } else if let Some(cover) = self.solo.take() {
            self.end_solo(cover, animated, completion);
        } else {
            self.swap_content(Pane::Detail, None, animated, completion);
        }
    }

    /// Keep the collapsed detail docked, covering the other panes
    pub(crate) fn present_solo(&mut self) {
        if !self.detail_docked {
            self.detail_docked = true;
            self.shell.execute(ShellCommand::Layout {
                step: LayoutStep::Dock { pane: Pane::Detail },
            });
        }
        let cover = SoloCover {
            tab_bar: !self.state.tab_bar_hidden,
            master: !self.state.master_hidden,
        };
        self.shell.execute(ShellCommand::Layout {
            step: LayoutStep::BeginSolo {
                cover_tab_bar: cover.tab_bar,
                cover_master: cover.master,
            },
        });
        self.solo = Some(cover);
        self.set_gestures_enabled(false);
        tracing::debug!(?cover, "Detail presented solo");
    }

    fn end_solo(&mut self, cover: SoloCover, animated: bool, completion: Option<Completion>) {
        let step = LayoutStep::EndSolo {
            keep_shown: false,
            restore_tab_bar: cover.tab_bar,
            restore_master: cover.master,
        };
        self.detail_docked = false;
        self.set_gestures_enabled(true);

        if animated {
            let id = self.ids.next_id();
            self.shell.execute(ShellCommand::Animate {
                animation: Animation::new(id, AnimationKind::Reflow { steps: vec![step] }),
            });
            self.continuations
                .insert(id, Continuation::ClearDetail(completion));
        } else {
            self.shell.execute(ShellCommand::Layout { step });
            self.swap_content(Pane::Detail, None, false, None);
            run(completion);
        }
    }

    /// Bring a modal or solo detail back into the fixed layout
    pub(crate) fn return_detail_inline(&mut self) -> Vec<LayoutStep> {
        let mut steps = Vec::new();
        if let Some(content) = self.modal.take() {
            self.shell.execute(ShellCommand::DismissModal {
                content: content.clone(),
                animation: None,
            });
            self.swap_content(Pane::Detail, Some(content), false, None);
        }
        if let Some(cover) = self.solo.take() {
            steps.push(LayoutStep::EndSolo {
                keep_shown: true,
                restore_tab_bar: cover.tab_bar,
                restore_master: cover.master,
            });
            self.set_gestures_enabled(true);
        }
        if !self.detail_docked {
            self.detail_docked = true;
            steps.push(LayoutStep::Dock { pane: Pane::Detail });
        }
        steps
    }
}
