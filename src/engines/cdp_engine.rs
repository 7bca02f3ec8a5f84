// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::BrowserSettings;
use crate::engines::traits::{EngineError, PageEngine};
use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::path::Path;
use std::time::Duration;
use tokio::task::JoinHandle;

/// 启动或连接浏览器实例
///
/// 配置了远程调试URL时连接已有的Chrome实例，否则在本地启动
/// 返回浏览器句柄和处理CDP事件流的后台任务
pub async fn launch_browser(
    settings: &BrowserSettings,
) -> Result<(Browser, JoinHandle<()>), EngineError> {
    let (browser, mut handler) = if let Some(ref url) = settings.remote_debugging_url {
        tracing::info!("Connecting to remote Chrome instance at: {}", url);
        Browser::connect(url)
            .await
            .map_err(|e| EngineError::Browser(format!("Failed to connect to remote Chrome: {}", e)))?
    } else {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .request_timeout(Duration::from_secs(30));

        builder = builder.arg("--disable-gpu").arg("--disable-dev-shm-usage");

        if !settings.headless {
            builder = builder.with_head();
        }

        Browser::launch(
            builder
                .build()
                .map_err(|e| EngineError::Browser(e.to_string()))?,
        )
        .await
        .map_err(|e| EngineError::Browser(e.to_string()))?
    };

    // Drive the CDP event stream until the browser goes away.
    let handle = tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    Ok((browser, handle))
}

/// CDP引擎
///
/// 基于chromiumoxide实现的浏览器自动化引擎
/// 每个场景绑定独立的页面实例，互不共享可变状态
pub struct CdpEngine {
    page: Page,
}

impl CdpEngine {
    /// 在给定浏览器中打开一个新页面并包装为引擎
    pub async fn new_session(browser: &Browser) -> Result<Self, EngineError> {
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;
        Ok(Self { page })
    }

    async fn eval_bool(&self, script: &str) -> Result<bool, EngineError> {
        self.page
            .evaluate(script)
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?
            .into_value()
            .map_err(|e| EngineError::Browser(e.to_string()))
    }
}

#[async_trait]
impl PageEngine for CdpEngine {
    /// 导航到指定URL
    ///
    /// goto默认等待load事件完成
    async fn navigate(&self, url: &str) -> Result<(), EngineError> {
        self.page
            .goto(url)
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;
        Ok(())
    }

    async fn wait_for_load(&self, timeout: Duration) -> Result<(), EngineError> {
        tokio::time::timeout(timeout, self.page.wait_for_navigation())
            .await
            .map_err(|_| EngineError::Timeout)?
            .map_err(|e| EngineError::Browser(e.to_string()))?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<(), EngineError> {
        self.page
            .find_element(selector)
            .await
            .map_err(|e| EngineError::ElementNotFound(format!("{}: {}", selector, e)))?
            .click()
            .await
            .map_err(|e| EngineError::Browser(format!("Click failed: {}", e)))?;
        Ok(())
    }

    async fn click_nth(&self, selector: &str, index: usize) -> Result<(), EngineError> {
        let elements = self
            .page
            .find_elements(selector)
            .await
            .map_err(|e| EngineError::ElementNotFound(format!("{}: {}", selector, e)))?;
        let element = elements
            .get(index)
            .ok_or_else(|| EngineError::ElementNotFound(format!("{}[{}]", selector, index)))?;
        element
            .click()
            .await
            .map_err(|e| EngineError::Browser(format!("Click failed: {}", e)))?;
        Ok(())
    }

    async fn fill(&self, selector: &str, text: &str) -> Result<(), EngineError> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|e| EngineError::ElementNotFound(format!("{}: {}", selector, e)))?;
        // Focus before typing so keystrokes land in the right field
        element
            .click()
            .await
            .map_err(|e| EngineError::Browser(format!("Focus failed: {}", e)))?;
        element
            .type_str(text)
            .await
            .map_err(|e| EngineError::Browser(format!("Input failed: {}", e)))?;
        Ok(())
    }

    async fn is_visible(&self, selector: &str) -> Result<bool, EngineError> {
        // Selectors use double quotes, so the JS literal uses single quotes.
        let script = format!(
            "(() => {{ const el = document.querySelector('{}'); \
             if (!el) return false; \
             const s = window.getComputedStyle(el); \
             return s.display !== 'none' && s.visibility !== 'hidden'; }})()",
            selector
        );
        self.eval_bool(&script).await
    }

    async fn text_content(&self, selector: &str) -> Result<Option<String>, EngineError> {
        let elements = self
            .page
            .find_elements(selector)
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;
        match elements.first() {
            Some(element) => element
                .inner_text()
                .await
                .map_err(|e| EngineError::Browser(e.to_string())),
            None => Ok(None),
        }
    }

    async fn count(&self, selector: &str) -> Result<usize, EngineError> {
        let elements = self
            .page
            .find_elements(selector)
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;
        Ok(elements.len())
    }

    async fn title(&self) -> Result<String, EngineError> {
        Ok(self
            .page
            .get_title()
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?
            .unwrap_or_default())
    }

    async fn current_url(&self) -> Result<String, EngineError> {
        Ok(self
            .page
            .url()
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?
            .unwrap_or_default())
    }

    async fn screenshot(&self, path: &Path) -> Result<(), EngineError> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(true)
            .build();
        let bytes = self
            .page
            .screenshot(params)
            .await
            .map_err(|e| EngineError::Browser(format!("Screenshot failed: {}", e)))?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| EngineError::Browser(format!("Screenshot dir failed: {}", e)))?;
        }
        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| EngineError::Browser(format!("Screenshot write failed: {}", e)))?;
        Ok(())
    }
}
