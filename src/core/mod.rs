//! Locale document engine.
//!
//! ## Module Structure
//!
//! - `document`: one `common.json` file (load, edit, serialize)
//! - `document_set`: the locale folders under the target root
//! - `mirror`: copies of saved documents in additional roots
//! - `search`: case-insensitive key/value search
//! - `selection`: picking search results by index for selective delete
//! - `sync`: add / delete / find applied across every locale
//! - `translate`: translation providers for new values
//! - `usage`: unused-key scan over a source tree

pub mod document;
pub mod document_set;
pub mod mirror;
pub mod search;
pub mod selection;
pub mod sync;
pub mod translate;
pub mod usage;

pub use document::{DOCUMENT_FILE_NAME, LoadError, LocaleDocument};
pub use document_set::{LoadedDocuments, LocaleDocumentSet, LocaleSkip};
pub use mirror::MirrorWriter;
pub use search::{SearchIn, SearchMatch, SearchQuery};
pub use selection::{FixedSelector, IndexSelector, Selection, StdinSelector};
pub use sync::{
    AddOutcome, AddRequest, DeleteOutcome, FindResult, LocaleSync, SelectiveDelete, SyncReport,
    ValueSource,
};
pub use translate::{
    DeepLTranslator, IdentityTranslator, Translation, TranslationProvider, TranslationStatus,
};
pub use usage::{KeyMatcher, Matcher, UsageReport, UsageScanner};
