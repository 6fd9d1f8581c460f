pub mod assemble;
pub mod foreign;
