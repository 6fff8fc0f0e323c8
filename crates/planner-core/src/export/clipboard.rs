//! Clipboard bridge.

use crate::plan::PlanItem;

/// Receives text to place on a clipboard. Fire-and-forget.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str);
}

/// Collects everything written to it, most recent last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    pub entries: Vec<String>,
}

impl MemoryClipboard {
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) {
        self.entries.push(text.to_owned());
    }
}

/// Caption followed by a blank line and the `#`-prefixed hashtags.
/// `None` unless the item carries both a caption and hashtags.
pub fn copy_text(item: &PlanItem) -> Option<String> {
    if !item.is_enriched() {
        return None;
    }
    let caption = item.caption.as_deref()?;
    Some(format!("{caption}\n\n{}", item.hashtag_line()))
}

/// Copy an item's caption and hashtags. Returns `false` if the item has no
/// caption yet.
pub fn copy_item(item: &PlanItem, sink: &mut dyn ClipboardSink) -> bool {
    match copy_text(item) {
        Some(text) => {
            sink.write_text(&text);
            true
        }
        None => false,
    }
}
