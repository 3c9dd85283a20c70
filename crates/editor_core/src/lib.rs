pub mod backend;
pub mod batch;
pub mod session;
pub mod word_list;

pub use backend::{DictBackend, LocalDictBackend};
pub use batch::{BatchAddWorkflow, BatchStep};
pub use session::{BatchOutcome, EditorSession};
pub use word_list::{OrderedWordList, PLACEHOLDER_GLYPHS};
