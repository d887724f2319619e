pub mod closure;
pub mod init;
pub mod names;
