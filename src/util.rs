pub(crate) mod complex;
pub mod testing;
