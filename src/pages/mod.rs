// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::{EngineError, PageEngine};
use std::time::{Duration, Instant};
use thiserror::Error;

/// 页面模块
///
/// 两个独立的页面对象共享同一组浏览器自动化原语，
/// 通过组合而非继承绑定到各自页面的命名元素
pub mod inventory;
pub mod login;

pub use inventory::InventoryPage;
pub use login::LoginPage;

/// 页面层错误类型
#[derive(Error, Debug)]
pub enum PageError {
    /// 引擎错误
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// 商品索引越界
    #[error("Item index {index} out of range ({len} items rendered)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// 轮询等待元素可见
///
/// 超出`timeout`后返回`EngineError::Timeout`
pub(crate) async fn wait_visible(
    engine: &dyn PageEngine,
    selector: &str,
    timeout: Duration,
) -> Result<(), EngineError> {
    let start = Instant::now();
    loop {
        if engine.is_visible(selector).await? {
            return Ok(());
        }
        if start.elapsed() >= timeout {
            return Err(EngineError::Timeout);
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
}
