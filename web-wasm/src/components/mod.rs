pub mod header;
pub mod stats_panel;
pub mod filter_bar;
pub mod directory_table;
pub mod pagination;
