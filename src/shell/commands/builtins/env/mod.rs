pub mod cd;
pub mod up;
