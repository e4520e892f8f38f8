pub mod archive;
pub mod drive;
pub mod target;
