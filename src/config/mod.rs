// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 提供应用程序配置的加载和管理
pub mod settings;


pub use settings::Settings;
