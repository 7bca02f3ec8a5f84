// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含目标站点、浏览器、时序和截图等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 目标站点配置
    pub target: TargetSettings,
    /// 浏览器配置
    pub browser: BrowserSettings,
    /// 时序配置
    pub timing: TimingSettings,
    /// 截图配置
    pub screenshots: ScreenshotSettings,
}

/// 目标站点配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct TargetSettings {
    /// 登录页面入口URL
    pub base_url: String,
    /// 登录成功后的商品列表页面URL
    pub inventory_url: String,
}

/// 浏览器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserSettings {
    /// 是否无头模式运行
    pub headless: bool,
    /// 远程调试URL (可选，设置后连接已有Chrome实例)
    pub remote_debugging_url: Option<String>,
}

/// 时序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct TimingSettings {
    /// 默认页面稳定等待上限（秒）
    pub settle_timeout_secs: u64,
    /// 性能缺陷账号的扩展稳定等待上限（秒）
    pub extended_settle_timeout_secs: u64,
    /// 问题账号检查前随机延迟下界（毫秒）
    pub problem_delay_min_ms: u64,
    /// 问题账号检查前随机延迟上界（毫秒）
    pub problem_delay_max_ms: u64,
}

impl TimingSettings {
    /// 默认稳定等待时长
    pub fn settle_timeout(&self) -> Duration {
        Duration::from_secs(self.settle_timeout_secs)
    }

    /// 扩展稳定等待时长
    pub fn extended_settle_timeout(&self) -> Duration {
        Duration::from_secs(self.extended_settle_timeout_secs)
    }
}

/// 截图配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScreenshotSettings {
    /// 截图输出目录
    pub dir: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("target.base_url", "https://www.saucedemo.com/")?
            .set_default("target.inventory_url", "https://www.saucedemo.com/inventory.html")?
            // Default Browser settings
            .set_default("browser.headless", true)?
            // Default Timing settings
            .set_default("timing.settle_timeout_secs", 30)?
            .set_default("timing.extended_settle_timeout_secs", 60)?
            .set_default("timing.problem_delay_min_ms", 500)?
            .set_default("timing.problem_delay_max_ms", 1500)?
            // Default Screenshot settings
            .set_default("screenshots.dir", "./screenshots")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SAUCETEST").separator("__"));

        builder.build()?.try_deserialize()
    }
}
