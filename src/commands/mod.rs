pub mod base_commands;
pub mod convert_rate_cmd;
pub mod error;
pub mod estimate_cmd;
pub mod init_cmd;
pub mod report_format;
