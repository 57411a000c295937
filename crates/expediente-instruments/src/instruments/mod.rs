pub mod bai;
pub mod bdi;
