//! Async runtime
//!
//! Drives an [`AdaptiveController`] from a tokio channel on a single task.
//! [`ScheduledShell`] stands in for a host that runs animations: every
//! animated command is reported back as `AnimationFinished` once its
//! duration has elapsed.

use std::time::Duration;

use tokio::sync::mpsc;

use tabsplit_panes::{AnimationId, RenderShell, ShellCommand};

use crate::controller::AdaptiveController;
use crate::error::CoreError;
use crate::event::ShellEvent;
use crate::Result;

/// Cloneable handle for feeding events into a running shell
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<ShellEvent>,
}

impl EventSender {
    pub fn send(&self, event: ShellEvent) -> Result<()> {
        self.tx.send(event).map_err(|_| CoreError::ChannelClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Create the event channel for a [`ShellRuntime`]
pub fn channel() -> (EventSender, mpsc::UnboundedReceiver<ShellEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSender { tx }, rx)
}

pub struct ShellRuntime<S: RenderShell> {
    controller: AdaptiveController<S>,
    events: mpsc::UnboundedReceiver<ShellEvent>,
}

impl<S: RenderShell> ShellRuntime<S> {
    pub fn new(
        controller: AdaptiveController<S>,
        events: mpsc::UnboundedReceiver<ShellEvent>,
    ) -> Self {
        Self { controller, events }
    }

    /// Process events until every sender is gone, then hand the controller back
    pub async fn run(mut self) -> AdaptiveController<S> {
        tracing::info!("Shell runtime started");
        let mut processed = 0u64;
        while let Some(event) = self.events.recv().await {
            self.controller.dispatch(event);
            processed += 1;
        }
        tracing::info!(events = processed, "Shell runtime stopped");
        self.controller
    }
}

/// Render shell wrapper that completes animations on a timer
pub struct ScheduledShell<S> {
    inner: S,
    events: mpsc::WeakUnboundedSender<ShellEvent>,
}

impl<S> ScheduledShell<S> {
    pub fn new(inner: S, sender: &EventSender) -> Self {
        Self {
            inner,
            events: sender.tx.downgrade(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn schedule(&self, id: AnimationId, duration: Duration) {
        let Some(events) = self.events.upgrade() else {
            tracing::debug!(animation = %id, "Event channel closed; animation not reported");
            return;
        };
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!(animation = %id, "No async runtime; animation not reported");
            return;
        };
        runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            if events.send(ShellEvent::AnimationFinished { id }).is_err() {
                tracing::debug!(animation = %id, "Shell stopped before animation finished");
            }
        });
    }
}

impl<S: RenderShell> RenderShell for ScheduledShell<S> {
    fn execute(&mut self, command: ShellCommand) {
        if let Some((id, duration)) = command.pending_animation() {
            self.schedule(id, duration);
        }
        self.inner.execute(command);
    }
}
