// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::attachment::UploadFile;
use crate::domain::models::ticket::DomainError;
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

/// 允许上传的MIME类型
const ALLOWED_MIME_TYPES: [&str; 7] = [
    "image/png",
    "image/jpeg",
    "image/jpg",
    "image/webp",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

static INVALID_FILE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9._-]").unwrap());
static REPEATED_UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"_+").unwrap());

/// 上传策略
///
/// 工单附件的准入规则与对象键生成：MIME白名单、大小上限、
/// 文件名净化。
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    max_file_bytes: i64,
}

impl UploadPolicy {
    /// 创建新的上传策略实例
    pub fn new(max_file_bytes: i64) -> Self {
        Self { max_file_bytes }
    }

    /// 校验文件是否可上传
    pub fn assert_uploadable(&self, file: &UploadFile) -> Result<(), DomainError> {
        if !ALLOWED_MIME_TYPES.contains(&file.content_type.as_str()) {
            return Err(DomainError::Validation(format!(
                "Unsupported file type: {}",
                file.file_name
            )));
        }
        if file.bytes.len() as i64 > self.max_file_bytes {
            return Err(DomainError::Validation(format!(
                "File exceeds {}MB limit: {}",
                self.max_file_bytes / (1024 * 1024),
                file.file_name
            )));
        }
        Ok(())
    }
}

/// 净化文件名
///
/// 去掉非法字符、折叠下划线并限制长度，空结果退化为 "file"。
pub fn sanitize_file_name(original: &str) -> String {
    let trimmed = original.trim().replace(' ', "_");
    let cleaned = INVALID_FILE_CHARS.replace_all(&trimmed, "");
    let cleaned = REPEATED_UNDERSCORES.replace_all(&cleaned, "_");

    match cleaned.rfind('.') {
        None | Some(0) => {
            let stem: String = cleaned.chars().take(80).collect();
            if stem.is_empty() {
                "file".to_string()
            } else {
                stem
            }
        }
        Some(dot) => {
            let extension = cleaned[dot + 1..].to_lowercase();
            let stem: String = cleaned[..dot].chars().take(72).collect();
            let stem = if stem.is_empty() {
                "file".to_string()
            } else {
                stem
            };
            format!("{}.{}", stem, extension)
        }
    }
}

/// 为附件生成对象存储键
///
/// 形如 `tickets/{ticket_id}/{stem}-{唯一后缀}.{ext}`，
/// 唯一后缀避免同名文件互相覆盖。
pub fn build_object_key(ticket_id: Uuid, original_name: &str) -> String {
    let safe_name = sanitize_file_name(original_name);
    let (stem, ext) = match safe_name.rfind('.') {
        Some(dot) if dot > 0 => (safe_name[..dot].to_string(), safe_name[dot + 1..].to_string()),
        _ => (safe_name, "bin".to_string()),
    };
    let unique_suffix = &Uuid::new_v4().simple().to_string()[..8];
    format!("tickets/{}/{}-{}.{}", ticket_id, stem, unique_suffix, ext)
}

#[cfg(test)]
#[path = "upload_policy_test.rs"]
mod tests;
