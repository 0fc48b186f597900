use std::{
    sync::mpsc::{channel, TryRecvError},
    thread,
};

use log::{info, warn};
use reader_core::{
    source::{read_text, TextSource},
    Severity, Shell,
};

use super::types::IncomingText;
use super::App;

impl App {
    /// Acquires `source` on a background thread; the text is loaded by
    /// `poll_incoming` once it arrives, between ticks.
    pub fn request_text(&mut self, source: TextSource) {
        let (tx, rx) = channel();
        self.incoming = Some(rx);
        info!("acquiring {source}");
        self.engine
            .shell_mut()
            .notify(&format!("Loading {source}…"), Severity::Info);
        thread::spawn(move || {
            let result = read_text(&source);
            let _ = tx.send(IncomingText { source, result });
        });
    }

    /// Returns whether a finished acquisition was handled.
    pub fn poll_incoming(&mut self) -> bool {
        let received = match &self.incoming {
            Some(rx) => rx.try_recv(),
            None => return false,
        };
        match received {
            Ok(msg) => {
                self.incoming = None;
                self.accept_incoming(msg);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.incoming = None;
                false
            }
        }
    }

    fn accept_incoming(&mut self, msg: IncomingText) {
        match msg.result {
            Ok(text) => {
                let title = source_title(&msg.source);
                let count = self.load_text(title, text);
                if count > 0 {
                    self.engine
                        .shell_mut()
                        .notify(&format!("Loaded {count} words"), Severity::Info);
                }
            }
            Err(err) => {
                warn!("acquiring {} failed: {err}", msg.source);
                self.engine
                    .shell_mut()
                    .notify(&err.to_string(), Severity::Error);
            }
        }
    }
}

pub fn source_title(source: &TextSource) -> String {
    match source {
        TextSource::File(path) => path
            .file_name()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| path.display().to_string()),
        TextSource::Gutenberg(_) => source.to_string(),
    }
}
