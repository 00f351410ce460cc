//! Text model behind the code surface: languages, per-line tokenizers, the
//! line memo, error annotations and the geometry the rendering layers share.
//! Nothing here depends on a UI toolkit.

pub mod annotations;
pub mod edit;
pub mod language;
pub mod layout;
pub mod lexicon;
pub mod lines;
pub mod token;

pub use annotations::ErrorLines;
pub use edit::{insert_indent, Splice, TAB_INDENT};
pub use language::{Language, PresentationMode};
pub use layout::{
    row_top, visible_lines, GutterLayout, LayerScroll, ScrollOffset, ScrollPhase, ScrollSync,
};
pub use lexicon::tokenize;
pub use lines::{compute_line_tokens, compute_lines, ChangeMeta, LineCache, LineSnapshot};
pub use token::{join_text, Token, TokenKind};
