//! Pane Container
//!
//! A single content slot shared by the tab bar, master and detail panes.
//!
//! Swap lifecycle, old content is torn down only once the new one is attached
//! and any animation has finished:
//! ```text
//! will_detach(old) -> attach(new) -> [animation] -> detach(old) -> did_attach(new)
//! ```

use crate::command::{Animation, AnimationId, AnimationIds, AnimationKind, Pane, ShellCommand};
use crate::content::ContentHandle;
use crate::shell::RenderShell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapStatus {
    /// Lifecycle finished synchronously
    Done,
    /// Lifecycle finishes when the animation is reported complete
    Animating(AnimationId),
}

#[derive(Debug)]
struct PendingSwap {
    animation: AnimationId,
    old: Option<ContentHandle>,
    new: Option<ContentHandle>,
}

#[derive(Debug)]
pub struct PaneContainer {
    pane: Pane,
    content: Option<ContentHandle>,
    /// Shown whenever no explicit content is set
    default_content: Option<ContentHandle>,
    swap: Option<PendingSwap>,
}

impl PaneContainer {
    pub fn new(pane: Pane) -> Self {
        Self {
            pane,
            content: None,
            default_content: None,
            swap: None,
        }
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn content(&self) -> Option<&ContentHandle> {
        self.content.as_ref()
    }

    pub fn default_content(&self) -> Option<&ContentHandle> {
        self.default_content.as_ref()
    }

    /// True when the slot shows the fallback content
    pub fn shows_default(&self) -> bool {
        self.content.is_some() && self.content == self.default_content
    }

    pub fn is_animating(&self) -> bool {
        self.swap.is_some()
    }

    /// Animation driving the swap still in flight
    pub fn pending_animation(&self) -> Option<AnimationId> {
        self.swap.as_ref().map(|swap| swap.animation)
    }

    /// Replace the active content. `None` falls back to the default content.
    pub fn set_content(
        &mut self,
        content: Option<ContentHandle>,
        animate: bool,
        ids: &mut AnimationIds,
        shell: &mut dyn RenderShell,
    ) -> SwapStatus {
        // A swap still in flight is completed first so at most one old content exists
        self.finish_pending(shell);

        let next = content.or_else(|| self.default_content.clone());
        if next == self.content {
            return SwapStatus::Done;
        }

        let old = self.content.take();
        if let Some(old) = &old {
            shell.execute(ShellCommand::WillDetach {
                pane: self.pane,
                content: old.clone(),
            });
        }
        if let Some(new) = &next {
            shell.execute(ShellCommand::Attach {
                pane: self.pane,
                content: new.clone(),
            });
        }
        self.content = next.clone();

        tracing::debug!(
            pane = %self.pane,
            old = ?old.as_ref().map(ContentHandle::name),
            new = ?next.as_ref().map(ContentHandle::name),
            animate,
            "Swapping pane content"
        );

        let kind = match (&old, &next) {
            _ if !animate => None,
            (Some(from), Some(to)) => Some(AnimationKind::Slide {
                pane: self.pane,
                from: from.clone(),
                to: to.clone(),
            }),
            (Some(content), None) => Some(AnimationKind::CrossFade {
                pane: self.pane,
                content: content.clone(),
                appearing: false,
            }),
            (None, Some(content)) => Some(AnimationKind::CrossFade {
                pane: self.pane,
                content: content.clone(),
                appearing: true,
            }),
            (None, None) => None,
        };
        let Some(kind) = kind else {
            self.teardown(old, next, shell);
            return SwapStatus::Done;
        };

        let id = ids.next_id();
        shell.execute(ShellCommand::Animate {
            animation: Animation::new(id, kind),
        });
        self.swap = Some(PendingSwap {
            animation: id,
            old,
            new: next,
        });
        SwapStatus::Animating(id)
    }

    /// Complete the swap driven by `id`. Returns false for unknown or stale ids.
    pub fn finish_animation(&mut self, id: AnimationId, shell: &mut dyn RenderShell) -> bool {
        if self.pending_animation() != Some(id) {
            return false;
        }
        self.finish_pending(shell);
        true
    }

    /// Change the fallback content; an empty slot shows it immediately
    pub fn set_default_content(
        &mut self,
        content: Option<ContentHandle>,
        ids: &mut AnimationIds,
        shell: &mut dyn RenderShell,
    ) {
        let showed_default = self.content.is_none() || self.shows_default();
        self.default_content = content;
        if showed_default && self.default_content.is_some() {
            self.set_content(None, false, ids, shell);
        }
    }

    fn finish_pending(&mut self, shell: &mut dyn RenderShell) {
        if let Some(swap) = self.swap.take() {
            self.teardown(swap.old, swap.new, shell);
        }
    }

    fn teardown(
        &self,
        old: Option<ContentHandle>,
        new: Option<ContentHandle>,
        shell: &mut dyn RenderShell,
    ) {
        if let Some(old) = old {
            shell.execute(ShellCommand::Detach {
                pane: self.pane,
                content: old,
            });
        }
        if let Some(new) = new {
            shell.execute(ShellCommand::DidAttach {
                pane: self.pane,
                content: new,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::RecordingShell;

    fn lifecycle(commands: &[ShellCommand]) -> Vec<String> {
        commands
            .iter()
            .map(|c| match c {
                ShellCommand::WillDetach { content, .. } => format!("will_detach {}", content.name()),
                ShellCommand::Attach { content, .. } => format!("attach {}", content.name()),
                ShellCommand::Detach { content, .. } => format!("detach {}", content.name()),
                ShellCommand::DidAttach { content, .. } => format!("did_attach {}", content.name()),
                ShellCommand::Animate { animation } => match &animation.kind {
                    AnimationKind::Slide { .. } => "slide".to_string(),
                    AnimationKind::CrossFade { appearing, .. } => format!("fade appearing={}", appearing),
                    AnimationKind::Reflow { .. } => "reflow".to_string(),
                },
                other => format!("{:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_unanimated_swap_order() {
        let mut shell = RecordingShell::new();
        let mut ids = AnimationIds::new();
        let mut container = PaneContainer::new(Pane::Master);

        let a = ContentHandle::new("A");
        let b = ContentHandle::new("B");
        container.set_content(Some(a), false, &mut ids, &mut shell);
        shell.take();

        let status = container.set_content(Some(b.clone()), false, &mut ids, &mut shell);
        assert_eq!(status, SwapStatus::Done);
        assert_eq!(
            lifecycle(&shell.take()),
            vec!["will_detach A", "attach B", "detach A", "did_attach B"]
        );
        assert_eq!(container.content(), Some(&b));
    }

    #[test]
    fn test_animated_swap_defers_teardown() {
        let mut shell = RecordingShell::new();
        let mut ids = AnimationIds::new();
        let mut container = PaneContainer::new(Pane::Detail);
        container.set_content(Some(ContentHandle::new("A")), false, &mut ids, &mut shell);
        shell.take();

        let status = container.set_content(Some(ContentHandle::new("B")), true, &mut ids, &mut shell);
        let SwapStatus::Animating(id) = status else {
            panic!("expected an animation");
        };
        assert!(container.is_animating());
        assert_eq!(lifecycle(&shell.take()), vec!["will_detach A", "attach B", "slide"]);

        assert!(container.finish_animation(id, &mut shell));
        assert_eq!(lifecycle(&shell.take()), vec!["detach A", "did_attach B"]);
        assert!(!container.finish_animation(id, &mut shell));
    }

    #[test]
    fn test_one_sided_swaps_cross_fade() {
        let mut shell = RecordingShell::new();
        let mut ids = AnimationIds::new();
        let mut container = PaneContainer::new(Pane::Detail);

        let status = container.set_content(Some(ContentHandle::new("A")), true, &mut ids, &mut shell);
        let SwapStatus::Animating(id) = status else {
            panic!("expected an animation");
        };
        container.finish_animation(id, &mut shell);
        assert_eq!(
            lifecycle(&shell.take()),
            vec!["attach A", "fade appearing=true", "did_attach A"]
        );

        let status = container.set_content(None, true, &mut ids, &mut shell);
        let SwapStatus::Animating(id) = status else {
            panic!("expected an animation");
        };
        container.finish_animation(id, &mut shell);
        assert_eq!(
            lifecycle(&shell.take()),
            vec!["will_detach A", "fade appearing=false", "detach A"]
        );
        assert!(container.content().is_none());
    }

    #[test]
    fn test_same_content_is_noop() {
        let mut shell = RecordingShell::new();
        let mut ids = AnimationIds::new();
        let mut container = PaneContainer::new(Pane::Master);
        let a = ContentHandle::new("A");
        container.set_content(Some(a.clone()), false, &mut ids, &mut shell);
        shell.take();

        assert_eq!(container.set_content(Some(a), true, &mut ids, &mut shell), SwapStatus::Done);
        assert!(shell.is_empty());
    }

    #[test]
    fn test_new_swap_finishes_pending_one() {
        let mut shell = RecordingShell::new();
        let mut ids = AnimationIds::new();
        let mut container = PaneContainer::new(Pane::Detail);
        container.set_content(Some(ContentHandle::new("A")), false, &mut ids, &mut shell);
        container.set_content(Some(ContentHandle::new("B")), true, &mut ids, &mut shell);
        shell.take();

        container.set_content(Some(ContentHandle::new("C")), false, &mut ids, &mut shell);
        assert_eq!(
            lifecycle(&shell.take()),
            vec!["detach A", "did_attach B", "will_detach B", "attach C", "detach B", "did_attach C"]
        );
    }

    #[test]
    fn test_default_content_fills_empty_slot() {
        let mut shell = RecordingShell::new();
        let mut ids = AnimationIds::new();
        let mut container = PaneContainer::new(Pane::Detail);
        let placeholder = ContentHandle::new("Placeholder");

        container.set_default_content(Some(placeholder.clone()), &mut ids, &mut shell);
        assert_eq!(container.content(), Some(&placeholder));
        assert!(container.shows_default());

        let detail = ContentHandle::new("Detail");
        container.set_content(Some(detail.clone()), false, &mut ids, &mut shell);
        // Replacing the default does not disturb open content
        container.set_default_content(Some(ContentHandle::new("Other")), &mut ids, &mut shell);
        assert_eq!(container.content(), Some(&detail));

        container.set_content(None, false, &mut ids, &mut shell);
        assert_eq!(container.content().map(ContentHandle::name), Some("Other"));
    }
}
