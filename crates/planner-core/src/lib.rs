//! Core planning logic: input normalization, the 30-day cadence, idea /
//! caption / hashtag templating, the plan store and its commands, and the
//! bridges (persistence, export, clipboard) the operator surfaces plug into.

pub mod content;
pub mod export;
pub mod input;
pub mod kpi;
pub mod persist;
pub mod plan;
pub mod state;

pub use content::{
    CaptionOptions, FixedPicker, HookPicker, RandomPicker, generate_caption, generate_hashtags,
    generate_idea,
};
pub use export::{
    ClipboardSink, DirExportSink, ExportError, ExportSink, ExportTable, MemoryClipboard, WriterSink,
    export_plan,
};
pub use input::{InputEdit, StrategyInput, Tone, normalize_list};
pub use kpi::Kpis;
pub use persist::{STATE_KEY, Session, load_state, save_state};
pub use plan::{PlanCollection, PlanItem, PostFormat, build_plan};
pub use state::{PlanPhase, PlannerState};
