pub mod copy_dir;
pub mod copy_file;
pub mod dir;
pub mod symlink;

pub use copy_dir::copy_dir_all;
pub use copy_file::copy_file;
pub use dir::create_dir_all;
pub use symlink::replace_symlink;
