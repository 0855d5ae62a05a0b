//! Application layer
//!
//! Sits between the binary and the stores:
//! - `config`: persisted user preferences
//! - `stores`: build stores from configuration
//! - `menu`: interactive notebook and logistics consoles

pub mod config;
pub mod menu;
pub mod stores;

pub use config::Config;
pub use menu::{Console, LogisticsCli, Menu, MenuExit, NotebookCli};
pub use stores::{open_logistics, open_notebook};
