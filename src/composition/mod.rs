mod color_assignment;
mod composition;

pub use color_assignment::{ColorAssignment, PALETTE};
pub use composition::{ClassShare, Composition};
