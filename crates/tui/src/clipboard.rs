use anyhow::{Context, Result};

/// Destination for copied color values.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard, opened on first use so headless sessions can still start.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().context("clipboard unavailable")?,
        };
        self.inner
            .insert(clipboard)
            .set_text(text.to_owned())
            .context("failed to write to clipboard")
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::{anyhow, Result};

    use super::ClipboardSink;

    /// Records every copy; clones share the same history.
    #[derive(Clone, Default)]
    pub(crate) struct MemoryClipboard {
        pub(crate) copies: Rc<RefCell<Vec<String>>>,
    }

    impl ClipboardSink for MemoryClipboard {
        fn copy(&mut self, text: &str) -> Result<()> {
            self.copies.borrow_mut().push(text.to_owned());
            Ok(())
        }
    }

    pub(crate) struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        fn copy(&mut self, _text: &str) -> Result<()> {
            Err(anyhow!("no display"))
        }
    }
}
