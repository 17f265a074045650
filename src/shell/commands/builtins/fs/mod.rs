pub mod add;
pub mod ls;
