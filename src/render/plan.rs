//! Render plan assembly
//!
//! Merges extracted blocks back into the message in order. Text is never
//! rewritten: gaps and rejected blocks are copied verbatim.

use super::fence::{extract_blocks, unterminated_fence};
use super::widget::{parse_and_validate, WidgetDescriptor};
use serde::Serialize;

/// One displayable piece of a message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Segment {
    Text(String),
    Widget(WidgetDescriptor),
}

/// Ordered text and widgets for a single assistant message
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderPlan {
    segments: Vec<Segment>,
}

impl RenderPlan {
    #[allow(dead_code)] // Read by tests and future renderers
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[allow(dead_code)] // Utility method
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn widgets(&self) -> impl Iterator<Item = &WidgetDescriptor> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Widget(descriptor) => Some(descriptor),
            Segment::Text(_) => None,
        })
    }

    /// True when nothing in the message became a widget
    #[allow(dead_code)] // Utility method
    pub fn is_plain_text(&self) -> bool {
        self.widgets().next().is_none()
    }

    /// Rebuild the source message: text verbatim, widgets by source range.
    #[allow(dead_code)] // Used to check coverage in tests
    pub fn reconstruct(&self, original: &str) -> String {
        let mut out = String::with_capacity(original.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Widget(descriptor) => {
                    out.push_str(original.get(descriptor.source()).unwrap_or_default());
                }
            }
        }
        out
    }

    /// Append text, merging into a trailing text segment
    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Text(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Text(text.to_string()));
        }
    }

    fn push_widget(&mut self, descriptor: WidgetDescriptor) {
        self.segments.push(Segment::Widget(descriptor));
    }
}

/// Build the render plan for one assistant message.
///
/// Never fails: blocks that do not validate stay in the text as written.
pub fn build_render_plan(text: &str) -> RenderPlan {
    let mut plan = RenderPlan::default();
    let mut cursor = 0;

    for block in extract_blocks(text) {
        plan.push_text(text.get(cursor..block.start()).unwrap_or_default());

        match parse_and_validate(&block) {
            Ok(descriptor) => plan.push_widget(descriptor),
            Err(e) => {
                tracing::debug!(
                    offset = block.start(),
                    kind = %e.kind,
                    error = %e,
                    "Data block left as text"
                );
                plan.push_text(block.raw(text));
            }
        }

        cursor = block.end();
    }

    plan.push_text(text.get(cursor..).unwrap_or_default());

    if let Some(offset) = unterminated_fence(text) {
        tracing::debug!(offset, "Unterminated data block left as text");
    }

    plan
}
