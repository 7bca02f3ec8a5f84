// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据模块
///
/// 提供测试场景使用的固定凭证数据
pub mod credentials;

pub use credentials::{CredentialRecord, CredentialStore};
