pub mod layout;
pub mod pointer;

pub use layout::wire_layout_handlers;
pub use pointer::wire_pointer_handlers;
