//! Message queue and command processing
//!
//! Hosts feed events in through [`App::dispatch`]. Commands returned by
//! `update` are executed here and may queue further messages (an upload
//! result, for example), which are drained before `dispatch` returns.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::commands::Cmd;
use crate::messages::{ImageMsg, Msg};
use crate::model::EditorModel;
use crate::update::update;

pub struct App {
    model: EditorModel,
    /// Where `SaveConfig` writes; `None` uses the user config file
    config_path: Option<PathBuf>,
    needs_redraw: bool,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl App {
    pub fn new(model: EditorModel) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            config_path: None,
            needs_redraw: true,
            msg_tx,
            msg_rx,
        }
    }

    /// Persist configuration to `path` instead of the user config file
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut EditorModel {
        &mut self.model
    }

    pub fn into_model(self) -> EditorModel {
        self.model
    }

    /// Sender for messages produced outside the update loop
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Queue a message and process everything pending
    pub fn dispatch(&mut self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
        self.drain();
    }

    /// Process all queued messages
    pub fn drain(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd);
            }
        }
    }

    /// Whether anything changed since the last call; resets the flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        if cmd.needs_redraw() {
            self.needs_redraw = true;
        }

        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
            Cmd::UploadImages { paths } => {
                let result = self
                    .model
                    .toolbar
                    .upload(&paths)
                    .map_err(|e| format!("{:#}", e));
                let _ = self.msg_tx.send(Msg::Image(ImageMsg::Uploaded(result)));
            }
            Cmd::SaveConfig => {
                let result = match &self.config_path {
                    Some(path) => self.model.config.save_to(path),
                    None => self.model.config.save(),
                };
                if let Err(e) = result {
                    tracing::warn!("Failed to save config: {}", e);
                }
            }
        }
    }
}
