// Askama page structs and JSON request/response shapes, organized by surface.
// All types are re-exported: `use magicslides::templates_structs::*`

mod api;
mod page;

pub use api::*;
pub use page::*;
