// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 数据模块
///
/// 包含测试凭证记录和凭证存储
pub mod data;

/// 引擎模块
///
/// 定义浏览器自动化能力接口及其CDP实现
pub mod engines;

/// 页面模块
///
/// 登录页面和商品列表页面的页面对象封装
pub mod pages;

/// 场景模块
///
/// 按用户类型编排端到端登录验证场景
pub mod scenario;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
