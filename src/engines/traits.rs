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

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 元素未找到
    #[error("Element not found: {0}")]
    ElementNotFound(String),
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 其他浏览器错误
    #[error("Browser error: {0}")]
    Browser(String),
}

/// 浏览器自动化能力特质
///
/// 页面对象只依赖这组原语，引擎实现可互相替换
/// 每个有界等待超出上限时返回`EngineError::Timeout`而非崩溃
#[async_trait]
pub trait PageEngine: Send + Sync {
    /// 导航到指定URL，等待导航完成后返回
    async fn navigate(&self, url: &str) -> Result<(), EngineError>;

    /// 等待页面进入空闲状态，超出`timeout`返回超时错误
    async fn wait_for_load(&self, timeout: Duration) -> Result<(), EngineError>;

    /// 点击选择器命中的第一个元素
    async fn click(&self, selector: &str) -> Result<(), EngineError>;

    /// 点击选择器命中的第`index`个元素
    async fn click_nth(&self, selector: &str, index: usize) -> Result<(), EngineError>;

    /// 向选择器命中的输入框填入文本
    async fn fill(&self, selector: &str, text: &str) -> Result<(), EngineError>;

    /// 判断选择器命中的元素当前是否可见
    ///
    /// 元素不存在时返回`Ok(false)`，不视为错误
    async fn is_visible(&self, selector: &str) -> Result<bool, EngineError>;

    /// 读取选择器命中元素的文本内容
    async fn text_content(&self, selector: &str) -> Result<Option<String>, EngineError>;

    /// 统计选择器命中的元素数量
    async fn count(&self, selector: &str) -> Result<usize, EngineError>;

    /// 读取页面标题
    async fn title(&self) -> Result<String, EngineError>;

    /// 读取当前URL
    async fn current_url(&self) -> Result<String, EngineError>;

    /// 截图并保存到指定路径
    async fn screenshot(&self, path: &Path) -> Result<(), EngineError>;
}
