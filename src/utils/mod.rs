//! 实用工具模块
//!
//! 提供各种辅助功能和工具函数

pub mod file_tools;

pub use file_tools::FileTools;
