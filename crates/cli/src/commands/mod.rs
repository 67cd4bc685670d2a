pub mod check;
pub mod explain;
pub mod legacy;
pub mod rules;
