//! Structured content extraction
//!
//! Turns assistant text into an ordered render plan of text segments and
//! typed widgets. The pipeline is pure:
//!
//! 1. `fence` - locates fenced `json` blocks by byte range
//! 2. `widget` - validates each block into a typed descriptor
//! 3. `plan` - splices descriptors and untouched text back in order
//!
//! # Example
//!
//! ```ignore
//! let plan = build_render_plan("Here is AAPL: ```json\n{...}\n```");
//! for segment in plan.segments() { /* draw */ }
//! ```

mod error;
pub mod fence;
pub mod plan;
pub mod widget;

#[cfg(test)]
mod proptests;

#[allow(unused_imports)] // Public API re-exports
pub use error::{ParseError, ParseErrorKind};
#[allow(unused_imports)] // Public API re-exports
pub use fence::{extract_blocks, FencedBlock};
pub use plan::{build_render_plan, RenderPlan, Segment};
#[allow(unused_imports)] // Public API re-exports
pub use widget::{parse_and_validate, StockChart, WeatherCard, Widget, WidgetDescriptor, WidgetKind};
