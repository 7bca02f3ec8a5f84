// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use saucetest::config::settings::{
    BrowserSettings, ScreenshotSettings, Settings, TargetSettings, TimingSettings,
};
use saucetest::engines::{EngineError, PageEngine};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

pub const USERNAME_INPUT: &str = "[data-test=\"username\"]";
pub const PASSWORD_INPUT: &str = "[data-test=\"password\"]";
pub const LOGIN_BUTTON: &str = "[data-test=\"login-button\"]";
pub const ERROR_MESSAGE: &str = "[data-test=\"error\"]";
pub const TITLE: &str = ".title";
pub const INVENTORY_ITEM: &str = ".inventory_item";
pub const ADD_TO_CART_BUTTON: &str = "[data-test^=\"add-to-cart\"]";
pub const CART_BADGE: &str = ".shopping_cart_badge";
pub const MENU_BUTTON: &str = "#react-burger-menu-btn";
pub const LOGOUT_LINK: &str = "#logout_sidebar_link";

/// 测试用配置
///
/// 缩短时序参数，避免单元测试中的长等待
pub fn test_settings() -> Settings {
    Settings {
        target: TargetSettings {
            base_url: "https://www.saucedemo.com/".to_string(),
            inventory_url: "https://www.saucedemo.com/inventory.html".to_string(),
        },
        browser: BrowserSettings {
            headless: true,
            remote_debugging_url: None,
        },
        timing: TimingSettings {
            settle_timeout_secs: 5,
            extended_settle_timeout_secs: 10,
            problem_delay_min_ms: 1,
            problem_delay_max_ms: 5,
        },
        screenshots: ScreenshotSettings {
            dir: "./screenshots".to_string(),
        },
    }
}

/// 提交登录后假引擎应呈现的页面状态
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// 进入商品列表视图
    Authenticated { title: String, items: usize },
    /// 停留在登录页并显示错误横幅
    Rejected { error: String },
}

#[derive(Debug, Clone, Default)]
struct FakeElement {
    visible: bool,
    text: String,
    count: usize,
}

#[derive(Debug)]
struct FakeState {
    url: String,
    elements: HashMap<String, FakeElement>,
    actions: Vec<String>,
    screenshots: Vec<PathBuf>,
    cart_items: usize,
}

/// 脚本化的假引擎
///
/// 用内存中的元素表模拟登录站点的DOM，记录每个交互动作，
/// 使页面对象和场景编排器可以在没有浏览器的情况下测试
pub struct FakeEngine {
    state: Mutex<FakeState>,
    submit_outcome: SubmitOutcome,
    settle_times_out: bool,
}

impl FakeEngine {
    pub fn with_outcome(submit_outcome: SubmitOutcome) -> Self {
        Self {
            state: Mutex::new(FakeState {
                url: String::new(),
                elements: HashMap::new(),
                actions: Vec::new(),
                screenshots: Vec::new(),
                cart_items: 0,
            }),
            submit_outcome,
            settle_times_out: false,
        }
    }

    /// 页面稳定等待永远超时的引擎
    pub fn timing_out() -> Self {
        let mut engine = Self::with_outcome(SubmitOutcome::Rejected {
            error: String::new(),
        });
        engine.settle_times_out = true;
        engine
    }

    /// 按记录顺序返回全部交互动作
    pub fn actions(&self) -> Vec<String> {
        self.state.lock().unwrap().actions.clone()
    }

    /// 已请求的截图路径
    pub fn screenshots(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().screenshots.clone()
    }

    fn login_form_elements() -> HashMap<String, FakeElement> {
        let mut elements = HashMap::new();
        for selector in [USERNAME_INPUT, PASSWORD_INPUT, LOGIN_BUTTON] {
            elements.insert(
                selector.to_string(),
                FakeElement {
                    visible: true,
                    text: String::new(),
                    count: 1,
                },
            );
        }
        elements
    }

    fn apply_submit_outcome(&self, state: &mut FakeState) {
        match &self.submit_outcome {
            SubmitOutcome::Authenticated { title, items } => {
                state.url = "https://www.saucedemo.com/inventory.html".to_string();
                state.elements.insert(
                    TITLE.to_string(),
                    FakeElement {
                        visible: true,
                        text: title.clone(),
                        count: 1,
                    },
                );
                state.elements.insert(
                    INVENTORY_ITEM.to_string(),
                    FakeElement {
                        visible: true,
                        text: String::new(),
                        count: *items,
                    },
                );
                state.elements.insert(
                    ADD_TO_CART_BUTTON.to_string(),
                    FakeElement {
                        visible: true,
                        text: "Add to cart".to_string(),
                        count: *items,
                    },
                );
                state.elements.insert(
                    MENU_BUTTON.to_string(),
                    FakeElement {
                        visible: true,
                        text: String::new(),
                        count: 1,
                    },
                );
                // Present in the DOM but hidden until the menu opens
                state.elements.insert(
                    LOGOUT_LINK.to_string(),
                    FakeElement {
                        visible: false,
                        text: "Logout".to_string(),
                        count: 1,
                    },
                );
            }
            SubmitOutcome::Rejected { error } => {
                state.elements.insert(
                    ERROR_MESSAGE.to_string(),
                    FakeElement {
                        visible: true,
                        text: error.clone(),
                        count: 1,
                    },
                );
            }
        }
    }
}

#[async_trait]
impl PageEngine for FakeEngine {
    async fn navigate(&self, url: &str) -> Result<(), EngineError> {
        let mut state = self.state.lock().unwrap();
        state.actions.push(format!("navigate:{}", url));
        state.url = url.to_string();
        state.elements = Self::login_form_elements();
        state.cart_items = 0;
        Ok(())
    }

    async fn wait_for_load(&self, _timeout: Duration) -> Result<(), EngineError> {
        if self.settle_times_out {
            return Err(EngineError::Timeout);
        }
        let mut state = self.state.lock().unwrap();
        state.actions.push("wait_for_load".to_string());
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<(), EngineError> {
        let mut state = self.state.lock().unwrap();
        if !state.elements.contains_key(selector) {
            return Err(EngineError::ElementNotFound(selector.to_string()));
        }
        state.actions.push(format!("click:{}", selector));
        if selector == LOGIN_BUTTON {
            self.apply_submit_outcome(&mut state);
        } else if selector == MENU_BUTTON {
            if let Some(link) = state.elements.get_mut(LOGOUT_LINK) {
                link.visible = true;
            }
        } else if selector == LOGOUT_LINK {
            state.url = "https://www.saucedemo.com/".to_string();
            state.elements = Self::login_form_elements();
            state.cart_items = 0;
        }
        Ok(())
    }

    async fn click_nth(&self, selector: &str, index: usize) -> Result<(), EngineError> {
        let mut state = self.state.lock().unwrap();
        let count = state.elements.get(selector).map_or(0, |e| e.count);
        if index >= count {
            return Err(EngineError::ElementNotFound(format!(
                "{}[{}]",
                selector, index
            )));
        }
        state.actions.push(format!("click_nth:{}:{}", selector, index));
        if selector == ADD_TO_CART_BUTTON {
            state.cart_items += 1;
            let badge_text = state.cart_items.to_string();
            state.elements.insert(
                CART_BADGE.to_string(),
                FakeElement {
                    visible: true,
                    text: badge_text,
                    count: 1,
                },
            );
        }
        Ok(())
    }

    async fn fill(&self, selector: &str, text: &str) -> Result<(), EngineError> {
        let mut state = self.state.lock().unwrap();
        if !state.elements.contains_key(selector) {
            return Err(EngineError::ElementNotFound(selector.to_string()));
        }
        state.actions.push(format!("fill:{}={}", selector, text));
        Ok(())
    }

    async fn is_visible(&self, selector: &str) -> Result<bool, EngineError> {
        let state = self.state.lock().unwrap();
        Ok(state.elements.get(selector).is_some_and(|e| e.visible))
    }

    async fn text_content(&self, selector: &str) -> Result<Option<String>, EngineError> {
        let state = self.state.lock().unwrap();
        Ok(state.elements.get(selector).map(|e| e.text.clone()))
    }

    async fn count(&self, selector: &str) -> Result<usize, EngineError> {
        let state = self.state.lock().unwrap();
        Ok(state.elements.get(selector).map_or(0, |e| e.count))
    }

    async fn title(&self) -> Result<String, EngineError> {
        Ok("Swag Labs".to_string())
    }

    async fn current_url(&self) -> Result<String, EngineError> {
        Ok(self.state.lock().unwrap().url.clone())
    }

    async fn screenshot(&self, path: &Path) -> Result<(), EngineError> {
        let mut state = self.state.lock().unwrap();
        state.screenshots.push(path.to_path_buf());
        Ok(())
    }
}
