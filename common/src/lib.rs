//! Somm Directory Common Library
//!
//! CLIとWeb(WASM)で共有される型と表示パイプライン

pub mod types;
pub mod error;
pub mod collate;
pub mod filter;
pub mod sort;
pub mod view;
pub mod review;
pub mod store;
pub mod award;
pub mod stats;
pub mod pipeline;
pub mod controller;
pub mod export;

pub use types::{Record, RecordSet, SortDirection, SortField, StatusFilter};
pub use error::{Error, Result};
pub use view::ViewState;
pub use review::{ReviewState, SEEN_ITEMS_KEY};
pub use store::{KeyValueStore, MemoryStore};
pub use award::{award_style, AwardCategory, AwardStyle, AWARD_OPTIONS};
pub use stats::Stats;
pub use pipeline::{derive_view, DerivedView, DirectoryRow, PAGE_SIZE, PLACEHOLDER};
pub use controller::DirectoryController;
