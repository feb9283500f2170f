pub mod reader;
pub mod writer;

pub use reader::{read_table, MASTER_EXTENSIONS, UPLOAD_EXTENSIONS};
pub use writer::write_table;
