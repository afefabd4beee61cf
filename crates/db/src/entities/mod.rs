//! `SeaORM` entity definitions.

pub mod contents;
