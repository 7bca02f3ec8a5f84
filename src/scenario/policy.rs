// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 锁定账号登录时的固定错误文本
pub const LOCKED_OUT_MESSAGE: &str = "Sorry, this user has been locked out";

/// 无效凭证错误文本中包含的固定片段
pub const INVALID_LOGIN_FRAGMENT: &str = "Epic sadface";

/// 登录成功后商品列表页面的标题文本
pub const INVENTORY_TITLE: &str = "Products";

/// 用户类型
///
/// 每个变体对应一种固定的凭证和行为画像
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    /// 标准账号，完整访问权限
    Standard,
    /// 被锁定的账号
    LockedOut,
    /// 行为异常的账号
    Problem,
    /// 响应缓慢的账号
    PerformanceGlitch,
}

impl UserType {
    /// 从用户类型标识解析
    ///
    /// # 返回值
    ///
    /// 未知标识返回`None`
    pub fn parse(user_type: &str) -> Option<Self> {
        match user_type {
            "standard_user" => Some(Self::Standard),
            "locked_out_user" => Some(Self::LockedOut),
            "problem_user" => Some(Self::Problem),
            "performance_glitch_user" => Some(Self::PerformanceGlitch),
            _ => None,
        }
    }

    /// 用户类型标识
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard_user",
            Self::LockedOut => "locked_out_user",
            Self::Problem => "problem_user",
            Self::PerformanceGlitch => "performance_glitch_user",
        }
    }

    /// 用户类型到预期结果的策略表
    pub fn policy(&self) -> LoginPolicy {
        match self {
            Self::Standard => LoginPolicy {
                settle: SettleProfile::Default,
                pre_check_delay: false,
                expected: ExpectedOutcome::Authenticated {
                    title: Some(INVENTORY_TITLE),
                },
            },
            Self::LockedOut => LoginPolicy {
                settle: SettleProfile::Default,
                pre_check_delay: false,
                expected: ExpectedOutcome::Rejected {
                    error: LOCKED_OUT_MESSAGE,
                },
            },
            // Eventual success, extra latency tolerated before the final check
            Self::Problem => LoginPolicy {
                settle: SettleProfile::Default,
                pre_check_delay: true,
                expected: ExpectedOutcome::Authenticated { title: None },
            },
            // Slow path, not a different outcome
            Self::PerformanceGlitch => LoginPolicy {
                settle: SettleProfile::Extended,
                pre_check_delay: false,
                expected: ExpectedOutcome::Authenticated { title: None },
            },
        }
    }
}

/// 页面稳定等待档位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleProfile {
    /// 默认等待上限
    Default,
    /// 扩展等待上限
    Extended,
}

/// 登录场景的预期结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedOutcome {
    /// 预期进入已登录视图
    Authenticated {
        /// 需要额外校验的标题文本
        title: Option<&'static str>,
    },
    /// 预期停留在登录页并显示错误
    Rejected {
        /// 预期的错误文本
        error: &'static str,
    },
}

/// 单个用户类型的登录校验策略
#[derive(Debug, Clone, Copy)]
pub struct LoginPolicy {
    /// 页面稳定等待档位
    pub settle: SettleProfile,
    /// 最终检查前是否施加有界随机延迟
    pub pre_check_delay: bool,
    /// 预期结果
    pub expected: ExpectedOutcome,
}
