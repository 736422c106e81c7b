//! PDF rendering modules
//!
//! This module handles all PDF-specific operations:
//! - Embedding JPEG/PNG records as image XObjects
//! - Building output pages and the page tree

mod page;
mod xobject;

pub(crate) use page::{PageBuilder, finish_document};
pub use xobject::{EmbeddedImage, embed_image};
