//! 文件工具模块
//!
//! 提供日志目录创建、日志文件追加打开以及按日期命名等工具函数。

use crate::error::{Result, SlogError};
use chrono::NaiveDate;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// 文件工具结构体
///
/// 提供各种文件操作的静态方法
pub struct FileTools;

impl FileTools {
    /// 确保目录存在，如果不存在则递归创建
    ///
    /// # 参数
    ///
    /// * `path` - 目录路径，空路径视为当前目录
    ///
    /// # 返回值
    ///
    /// 创建失败或路径存在但不是目录时返回 `SlogError::DirectoryCreation`
    pub fn ensure_directory_exists<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Ok(());
        }

        if !path.exists() {
            fs::create_dir_all(path).map_err(|e| SlogError::DirectoryCreation {
                path: path.to_path_buf(),
                source: e,
            })?
        } else if !path.is_dir() {
            return Err(SlogError::DirectoryCreation {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    format!("路径存在但不是目录: {}", path.display()),
                ),
            });
        }

        Ok(())
    }

    /// 确保文件的父目录存在
    pub fn ensure_parent_exists<P: AsRef<Path>>(file_path: P) -> Result<()> {
        match file_path.as_ref().parent() {
            Some(parent) => Self::ensure_directory_exists(parent),
            None => Ok(()),
        }
    }

    /// 以追加模式打开文件，不存在则创建
    ///
    /// 失败时返回 `SlogError::FileOpen`
    pub fn open_file_append<P: AsRef<Path>>(file_path: P) -> Result<File> {
        let file_path = file_path.as_ref();

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)
            .map_err(|e| SlogError::FileOpen {
                path: file_path.to_path_buf(),
                source: e,
            })
    }

    /// 生成按天命名的日志文件路径：`<dir>/<prefix>-DD-MM-YYYY.log`
    pub fn daily_file_path<P: AsRef<Path>>(dir: P, prefix: &str, date: NaiveDate) -> PathBuf {
        dir.as_ref()
            .join(format!("{}-{}.log", prefix, date.format("%d-%m-%Y")))
    }

    /// 检查路径是否以给定扩展名之一结尾（不区分大小写）
    pub fn has_extension(path: &str, extensions: &[&str]) -> bool {
        let lower = path.to_lowercase();
        extensions.iter().any(|ext| lower.ends_with(ext))
    }
}
