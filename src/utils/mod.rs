pub mod paths;

pub use paths::format_path_with_tilde;
