//! Use-Case-Funktionen für Komponenten/Verbindungs-Editing.
//!
//! Jede mutierende Operation endet mit genau einem History-Snapshot
//! (`AppState::save_to_history`).

mod add_component;
mod clear;
mod connect;
mod delete_component;
mod delete_connection;
mod delete_selected;
mod quick_add;
mod rotate;
mod update_component;

pub use add_component::add_component;
pub use clear::clear_diagram;
pub use connect::add_connection;
pub use delete_component::delete_component;
pub use delete_connection::delete_connection;
pub use delete_selected::delete_selected;
pub use quick_add::{quick_add_component, quick_add_label, quick_add_slot};
pub use rotate::rotate_selected;
pub use update_component::update_component;
