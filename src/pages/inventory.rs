// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::{EngineError, PageEngine};
use crate::pages::{wait_visible, PageError};
use std::sync::Arc;
use std::time::Duration;

const TITLE: &str = ".title";
const INVENTORY_ITEM: &str = ".inventory_item";
const ADD_TO_CART_BUTTON: &str = "[data-test^=\"add-to-cart\"]";
const CART_BADGE: &str = ".shopping_cart_badge";
const CART_LINK: &str = ".shopping_cart_link";
const MENU_BUTTON: &str = "#react-burger-menu-btn";
const LOGOUT_LINK: &str = "#logout_sidebar_link";

// The burger menu slides in, so the logout link needs a bounded wait.
const MENU_TIMEOUT: Duration = Duration::from_secs(5);

/// 商品列表页面对象
///
/// 登录成功后的页面，暴露标题、商品卡片、购物车和登出入口
pub struct InventoryPage {
    engine: Arc<dyn PageEngine>,
    page_url: String,
}

impl InventoryPage {
    pub fn new(engine: Arc<dyn PageEngine>, page_url: &str) -> Self {
        Self {
            engine,
            page_url: page_url.to_string(),
        }
    }

    /// 页面URL
    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// 判断当前是否处于已登录的商品列表视图
    ///
    /// 以标题元素可见作为判定依据
    pub async fn is_authenticated_view(&self) -> Result<bool, EngineError> {
        self.engine.is_visible(TITLE).await
    }

    /// 读取页面标题元素文本
    pub async fn title_text(&self) -> Result<Option<String>, EngineError> {
        self.engine.text_content(TITLE).await
    }

    /// 统计当前渲染的商品数量
    ///
    /// 0是合法结果而非错误
    pub async fn item_count(&self) -> Result<usize, EngineError> {
        self.engine.count(INVENTORY_ITEM).await
    }

    /// 将第`index`个商品加入购物车
    ///
    /// # 返回值
    ///
    /// 索引超出当前商品数量时返回`PageError::IndexOutOfRange`，不做隐式截断
    pub async fn add_to_cart(&self, index: usize) -> Result<(), PageError> {
        let len = self.item_count().await?;
        if index >= len {
            return Err(PageError::IndexOutOfRange { index, len });
        }
        self.engine.click_nth(ADD_TO_CART_BUTTON, index).await?;
        Ok(())
    }

    /// 读取购物车角标文本
    ///
    /// 购物车为空时角标不存在，返回`"0"`而非错误
    pub async fn cart_badge_count(&self) -> Result<String, EngineError> {
        if !self.engine.is_visible(CART_BADGE).await? {
            return Ok("0".to_string());
        }
        Ok(self
            .engine
            .text_content(CART_BADGE)
            .await?
            .unwrap_or_else(|| "0".to_string()))
    }

    /// 打开购物车页面
    pub async fn open_cart(&self) -> Result<(), EngineError> {
        self.engine.click(CART_LINK).await
    }

    /// 登出当前用户
    ///
    /// 先展开侧边菜单，等待登出链接可见后再点击，两步严格有序
    pub async fn logout(&self) -> Result<(), EngineError> {
        self.engine.click(MENU_BUTTON).await?;
        wait_visible(self.engine.as_ref(), LOGOUT_LINK, MENU_TIMEOUT).await?;
        self.engine.click(LOGOUT_LINK).await
    }
}
