mod command_result;
pub mod fetch;
pub mod helper;
pub mod init;
pub mod push;
pub mod set;
pub mod status;

pub use command_result::*;
