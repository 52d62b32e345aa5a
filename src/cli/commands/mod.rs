mod command_result;
pub mod init;
pub mod scan;
pub mod serve;

pub use command_result::*;
