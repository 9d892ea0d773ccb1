//! Render shell seam

use parking_lot::Mutex;
use std::sync::Arc;

use crate::command::ShellCommand;

/// Host side of the shell: attaches content, runs animations, shows overlays
pub trait RenderShell {
    fn execute(&mut self, command: ShellCommand);
}

impl<S: RenderShell + ?Sized> RenderShell for Box<S> {
    fn execute(&mut self, command: ShellCommand) {
        (**self).execute(command)
    }
}

/// Shell that records every command
///
/// Clones share one log, so a handle kept by the host can inspect what the
/// controller issued after the shell has been moved into it.
#[derive(Debug, Clone, Default)]
pub struct RecordingShell {
    log: Arc<Mutex<Vec<ShellCommand>>>,
}

impl RecordingShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<ShellCommand> {
        self.log.lock().clone()
    }

    /// Drain the log
    pub fn take(&self) -> Vec<ShellCommand> {
        std::mem::take(&mut *self.log.lock())
    }

    pub fn len(&self) -> usize {
        self.log.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.lock().is_empty()
    }
}

impl RenderShell for RecordingShell {
    fn execute(&mut self, command: ShellCommand) {
        tracing::trace!(?command, "Shell command");
        self.log.lock().push(command);
    }
}
