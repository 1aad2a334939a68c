//! Document model types.
//!
//! This module defines the intermediate representation shared by the
//! Markdown translator, the content-table builder and every renderer.
//! A [`Document`] is an ordered list of [`Block`]s; each block carries
//! its kind, its text runs and paragraph-level layout.

mod block;
mod document;
mod run;

pub use block::{Alignment, Block, BlockKind, ListInfo};
pub use document::{Document, Metadata};
pub use run::TextRun;
