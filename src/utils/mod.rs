pub mod environment;

pub use environment::get_data_dir;
