// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::{EngineError, PageEngine};
use std::sync::Arc;

const USERNAME_INPUT: &str = "[data-test=\"username\"]";
const PASSWORD_INPUT: &str = "[data-test=\"password\"]";
const LOGIN_BUTTON: &str = "[data-test=\"login-button\"]";
const ERROR_MESSAGE: &str = "[data-test=\"error\"]";

/// 登录页面对象
///
/// 封装登录表单的导航和交互，不做任何输入校验，
/// 无效凭证是合法调用，其结果通过`error_text`观察
pub struct LoginPage {
    engine: Arc<dyn PageEngine>,
    base_url: String,
}

impl LoginPage {
    pub fn new(engine: Arc<dyn PageEngine>, base_url: &str) -> Self {
        Self {
            engine,
            base_url: base_url.to_string(),
        }
    }

    /// 页面入口URL
    pub fn page_url(&self) -> &str {
        &self.base_url
    }

    /// 打开登录页面，导航完成后返回
    pub async fn open(&self) -> Result<(), EngineError> {
        self.engine.navigate(&self.base_url).await
    }

    /// 填写凭证并提交登录
    ///
    /// 提交动作发出后即返回，不等待下一个页面稳定，
    /// 页面稳定等待由调用方负责
    pub async fn attempt_login(&self, username: &str, password: &str) -> Result<(), EngineError> {
        self.engine.fill(USERNAME_INPUT, username).await?;
        self.engine.fill(PASSWORD_INPUT, password).await?;
        self.engine.click(LOGIN_BUTTON).await
    }

    /// 读取错误横幅文本
    ///
    /// # 返回值
    ///
    /// 横幅不可见时返回`None`
    pub async fn error_text(&self) -> Result<Option<String>, EngineError> {
        if !self.engine.is_visible(ERROR_MESSAGE).await? {
            return Ok(None);
        }
        self.engine.text_content(ERROR_MESSAGE).await
    }
}
