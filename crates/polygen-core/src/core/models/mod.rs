pub mod atom;
pub mod composition;
