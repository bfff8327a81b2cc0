pub mod convert_cmd;
pub mod read_cmd;
pub mod validate_cmd;
pub mod write_cmd;

pub use convert_cmd::cmd_convert;
pub use read_cmd::cmd_read;
pub use validate_cmd::cmd_validate;
pub use write_cmd::cmd_write;
