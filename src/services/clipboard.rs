//! System clipboard access.
//!
//! The real backend is compiled only with the `clipboard` feature; without
//! it [`default_clipboard`] returns [`NoClipboard`] and copy requests fail
//! with [`ClipboardError::Unavailable`].

use crate::types::errors::ClipboardError;

/// Trait defining clipboard writes.
pub trait ClipboardTrait {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard stand-in for builds or hosts without one.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl ClipboardTrait for NoClipboard {
    fn copy(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

/// The desktop clipboard, via the `clipboard` crate.
#[cfg(feature = "clipboard")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(feature = "clipboard")]
impl ClipboardTrait for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        use clipboard::{ClipboardContext, ClipboardProvider};

        let mut ctx: ClipboardContext = ClipboardProvider::new().map_err(|e| {
            log::warn!("Clipboard init error: {}", e);
            ClipboardError::Unavailable
        })?;
        ctx.set_contents(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// Picks the best clipboard this build supports.
pub fn default_clipboard() -> Box<dyn ClipboardTrait> {
    #[cfg(feature = "clipboard")]
    {
        Box::new(SystemClipboard)
    }
    #[cfg(not(feature = "clipboard"))]
    {
        Box::new(NoClipboard)
    }
}
