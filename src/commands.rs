//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the editor
    Redraw,
    /// Run several commands in order
    Batch(Vec<Cmd>),
    /// Hand files to the toolbar's image uploader
    UploadImages { paths: Vec<PathBuf> },
    /// Persist the editor configuration
    SaveConfig,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Uploaded triggers the redraw once images are inserted
            Cmd::UploadImages { .. } => false,
            Cmd::SaveConfig => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_needs_redraw() {
        assert!(!Cmd::batch(vec![Cmd::SaveConfig, Cmd::None]).needs_redraw());
        assert!(Cmd::batch(vec![Cmd::SaveConfig, Cmd::Redraw]).needs_redraw());
        assert!(!Cmd::UploadImages { paths: vec![] }.needs_redraw());
    }
}
