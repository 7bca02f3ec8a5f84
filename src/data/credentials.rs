// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 凭证记录
///
/// 构造后不可变，描述一种测试账号的登录信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialRecord {
    /// 用户名，同时作为存储中的键
    pub username: String,
    /// 密码
    pub password: String,
    /// 账号行为描述
    pub description: String,
}

impl CredentialRecord {
    fn new(username: &str, password: &str, description: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            description: description.to_string(),
        }
    }
}

/// 凭证存储
///
/// 只读的用户类型到凭证记录映射，按插入顺序保存
/// 显式构造后注入场景编排器，初始化后无任何写路径
#[derive(Debug, Clone)]
pub struct CredentialStore {
    // Insertion-ordered; the user type key is the record's username.
    records: Vec<CredentialRecord>,
}

impl CredentialStore {
    /// 创建包含全部固定测试账号的存储
    pub fn new() -> Self {
        Self {
            records: vec![
                CredentialRecord::new(
                    "standard_user",
                    "secret_sauce",
                    "Standard user with full access",
                ),
                CredentialRecord::new(
                    "locked_out_user",
                    "secret_sauce",
                    "User account that is locked out",
                ),
                CredentialRecord::new(
                    "problem_user",
                    "secret_sauce",
                    "User with problematic behavior",
                ),
                CredentialRecord::new(
                    "performance_glitch_user",
                    "secret_sauce",
                    "User experiencing performance issues",
                ),
            ],
        }
    }

    /// 按用户类型查找凭证记录
    ///
    /// # 返回值
    ///
    /// 未知的用户类型返回`None`，这是预期结果而非错误
    pub fn get(&self, user_type: &str) -> Option<&CredentialRecord> {
        self.records.iter().find(|r| r.username == user_type)
    }

    /// 按插入顺序列出全部用户类型
    pub fn list_types(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.username.as_str()).collect()
    }

    /// 返回用于负向测试的固定无效凭证
    ///
    /// 每次调用返回相同内容
    pub fn invalid_credential(&self) -> CredentialRecord {
        CredentialRecord::new(
            "invalid_user",
            "wrong_password",
            "Invalid credentials for negative testing",
        )
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
