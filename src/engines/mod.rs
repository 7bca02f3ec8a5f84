// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 引擎模块
///
/// 定义页面对象依赖的浏览器自动化能力接口
/// 任何满足该接口的自动化后端均可替换使用
pub mod cdp_engine;
pub mod traits;

pub use traits::{EngineError, PageEngine};
