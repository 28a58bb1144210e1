//! Share sheet contract and the messages the game shares

use thiserror::Error;

use crate::catalog::Story;

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("share sheet unavailable: {0}")]
    Unavailable(String),
}

/// Platform share facility
pub trait Share {
    fn share(&self, message: &str) -> Result<(), ShareError>;
}

/// Share and ignore any failure; the player gets no error
pub fn share_quietly<S: Share + ?Sized>(sharer: &S, message: &str) {
    if let Err(e) = sharer.share(message) {
        log::warn!("Share failed: {}", e);
    }
}

/// Routing level completed
pub fn level_complete_message(level: u32) -> String {
    format!("Golden Bull Escape — I completed Level {}!", level)
}

/// Settings screen "share app"
pub fn app_message() -> &'static str {
    "Golden BULL Escape — try it now!"
}

pub fn story_message(story: &Story) -> String {
    format!("{}\n\n{}", story.title, story.body)
}

/// Native stand-in: writes the message to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogShare;

impl Share for LogShare {
    fn share(&self, message: &str) -> Result<(), ShareError> {
        log::info!("Share: {}", message);
        Ok(())
    }
}
