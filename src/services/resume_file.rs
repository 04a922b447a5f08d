//! 简历文件读取
//!
//! 只接受 `.pdf` / `.docx`，与生成服务支持的格式一致

use crate::error::{AppError, AppResult, FileError};
use std::path::Path;
use tokio::fs;
use tracing::debug;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// 待上传的简历
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

impl ResumeFile {
    /// 从内存构造（文件名决定 MIME 类型）
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> AppResult<Self> {
        let file_name = file_name.into();
        let mime = mime_for(&file_name).ok_or_else(|| FileError::UnsupportedType {
            path: file_name.clone(),
        })?;
        if bytes.is_empty() {
            return Err(FileError::Empty { path: file_name }.into());
        }
        Ok(Self {
            file_name,
            bytes,
            mime,
        })
    }

    /// 从磁盘读取简历
    pub async fn load(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        if !fs::try_exists(path).await.unwrap_or(false) {
            return Err(FileError::NotFound { path: display }.into());
        }
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| display.clone());
        if mime_for(&file_name).is_none() {
            return Err(FileError::UnsupportedType { path: display }.into());
        }

        let bytes = fs::read(path)
            .await
            .map_err(|e| AppError::file_read_failed(display.clone(), e))?;
        debug!("读取简历: {} ({} 字节)", file_name, bytes.len());

        Self::from_bytes(file_name, bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn mime_for(file_name: &str) -> Option<&'static str> {
    let (_, extension) = file_name.rsplit_once('.')?;
    match extension.to_lowercase().as_str() {
        "pdf" => Some(PDF_MIME),
        "docx" => Some(DOCX_MIME),
        _ => None,
    }
}
