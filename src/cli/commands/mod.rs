mod command_result;
pub mod helper;
pub mod init;
pub mod locales;
pub mod prepare;
pub mod status;

pub use command_result::*;
