//! Screens that show a function banner

pub mod graph;

pub use graph::GraphPage;
