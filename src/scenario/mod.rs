// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 场景模块
///
/// 组合凭证查找、页面动作和按用户类型的结果校验，
/// 形成命名的端到端登录验证场景
pub mod policy;
pub mod runner;

pub use policy::{ExpectedOutcome, LoginPolicy, SettleProfile, UserType};
pub use runner::{ScenarioError, ScenarioReport, ScenarioRunner};
