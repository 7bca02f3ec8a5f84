// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::Settings;
use crate::data::CredentialStore;
use crate::engines::{EngineError, PageEngine};
use crate::pages::{InventoryPage, LoginPage, PageError};
use crate::scenario::policy::{ExpectedOutcome, SettleProfile, UserType, INVALID_LOGIN_FRAGMENT};
use crate::utils::helpers::{format_test_name, random_delay};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

/// 场景错误类型
///
/// 每个变体携带场景名称和用户类型，逐层上报给测试运行器，
/// 任何一种都不会被静默吞掉，也不会自动重试
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// 未知用户类型
    #[error("Scenario '{scenario}' ({user_type}): unknown user type")]
    UnknownUserType { scenario: String, user_type: String },
    /// 观察到的状态与策略预期不符
    #[error("Scenario '{scenario}' ({user_type}): {detail}")]
    AssertionMismatch {
        scenario: String,
        user_type: String,
        detail: String,
    },
    /// 页面稳定等待超出上限
    #[error("Scenario '{scenario}' ({user_type}): settle wait exceeded bound")]
    Timeout { scenario: String, user_type: String },
    /// 页面层错误
    #[error("Scenario '{scenario}' ({user_type}): {source}")]
    Page {
        scenario: String,
        user_type: String,
        #[source]
        source: PageError,
    },
}

/// 单次场景运行的结果报告
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    /// 场景名称
    pub scenario: String,
    /// 用户类型
    pub user_type: String,
    /// 是否进入已登录视图
    pub authenticated: bool,
    /// 观察到的错误横幅文本
    pub error_text: Option<String>,
    /// 场景耗时（毫秒）
    pub elapsed_ms: u64,
}

/// 场景运行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScenarioState {
    Start,
    CredentialResolved,
    LoginSubmitted,
    OutcomeObserved,
    Validated,
}

/// 场景编排器
///
/// 组合凭证存储、页面对象和策略表驱动一次登录验证，
/// 状态机：Start → CredentialResolved → LoginSubmitted → OutcomeObserved → Validated
///
/// 每个编排器绑定独立的引擎会话，场景之间只共享只读的凭证存储
pub struct ScenarioRunner {
    store: CredentialStore,
    settings: Settings,
    engine: Arc<dyn PageEngine>,
    login: LoginPage,
    inventory: InventoryPage,
}

impl ScenarioRunner {
    /// 创建绑定到一个引擎会话的场景编排器
    pub fn new(store: CredentialStore, settings: Settings, engine: Arc<dyn PageEngine>) -> Self {
        let login = LoginPage::new(engine.clone(), &settings.target.base_url);
        let inventory = InventoryPage::new(engine.clone(), &settings.target.inventory_url);
        Self {
            store,
            settings,
            engine,
            login,
            inventory,
        }
    }

    /// 登录页面对象
    pub fn login_page(&self) -> &LoginPage {
        &self.login
    }

    /// 商品列表页面对象
    pub fn inventory_page(&self) -> &InventoryPage {
        &self.inventory
    }

    /// 运行一个已知用户类型的登录验证场景
    ///
    /// # 参数
    ///
    /// * `user_type` - 凭证存储中的用户类型标识
    ///
    /// # 返回值
    ///
    /// * `Ok(ScenarioReport)` - 场景通过校验
    /// * `Err(ScenarioError)` - 具体的失败类别
    pub async fn run(&self, user_type: &str) -> Result<ScenarioReport, ScenarioError> {
        let scenario = format!("login_{}", user_type);
        let started = Instant::now();
        self.transition(&scenario, ScenarioState::Start);

        // Start -> CredentialResolved
        let (credential, kind) = match (self.store.get(user_type), UserType::parse(user_type)) {
            (Some(record), Some(kind)) => (record.clone(), kind),
            _ => {
                return Err(ScenarioError::UnknownUserType {
                    scenario,
                    user_type: user_type.to_string(),
                })
            }
        };
        self.transition(&scenario, ScenarioState::CredentialResolved);

        // CredentialResolved -> LoginSubmitted
        self.login
            .open()
            .await
            .map_err(|e| self.page_error(&scenario, user_type, e.into()))?;
        self.login
            .attempt_login(&credential.username, &credential.password)
            .await
            .map_err(|e| self.page_error(&scenario, user_type, e.into()))?;
        self.transition(&scenario, ScenarioState::LoginSubmitted);

        let policy = kind.policy();

        // LoginSubmitted -> OutcomeObserved
        let settle_timeout = match policy.settle {
            SettleProfile::Default => self.settings.timing.settle_timeout(),
            SettleProfile::Extended => self.settings.timing.extended_settle_timeout(),
        };
        match self.engine.wait_for_load(settle_timeout).await {
            Ok(()) => {}
            Err(EngineError::Timeout) => {
                return Err(ScenarioError::Timeout {
                    scenario,
                    user_type: user_type.to_string(),
                })
            }
            Err(e) => return Err(self.page_error(&scenario, user_type, e.into())),
        }

        if policy.pre_check_delay {
            random_delay(
                self.settings.timing.problem_delay_min_ms,
                self.settings.timing.problem_delay_max_ms,
            )
            .await;
        }

        let authenticated = self
            .inventory
            .is_authenticated_view()
            .await
            .map_err(|e| self.page_error(&scenario, user_type, e.into()))?;
        let error_text = self
            .login
            .error_text()
            .await
            .map_err(|e| self.page_error(&scenario, user_type, e.into()))?;
        self.transition(&scenario, ScenarioState::OutcomeObserved);

        self.capture_screenshot(&scenario).await;

        // OutcomeObserved -> Validated
        self.validate(&scenario, user_type, &policy.expected, authenticated, &error_text)
            .await?;
        self.transition(&scenario, ScenarioState::Validated);

        Ok(ScenarioReport {
            scenario,
            user_type: user_type.to_string(),
            authenticated,
            error_text,
            elapsed_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// 运行无效凭证的负向场景
    ///
    /// 预期停留在登录页，错误文本包含固定片段
    pub async fn run_invalid_login(&self) -> Result<ScenarioReport, ScenarioError> {
        let scenario = "invalid_login".to_string();
        let credential = self.store.invalid_credential();
        let user_type = credential.username.clone();
        let started = Instant::now();
        self.transition(&scenario, ScenarioState::Start);
        self.transition(&scenario, ScenarioState::CredentialResolved);

        self.login
            .open()
            .await
            .map_err(|e| self.page_error(&scenario, &user_type, e.into()))?;
        self.login
            .attempt_login(&credential.username, &credential.password)
            .await
            .map_err(|e| self.page_error(&scenario, &user_type, e.into()))?;
        self.transition(&scenario, ScenarioState::LoginSubmitted);

        match self
            .engine
            .wait_for_load(self.settings.timing.settle_timeout())
            .await
        {
            Ok(()) => {}
            Err(EngineError::Timeout) => {
                return Err(ScenarioError::Timeout {
                    scenario,
                    user_type,
                })
            }
            Err(e) => return Err(self.page_error(&scenario, &user_type, e.into())),
        }

        let authenticated = self
            .inventory
            .is_authenticated_view()
            .await
            .map_err(|e| self.page_error(&scenario, &user_type, e.into()))?;
        let error_text = self
            .login
            .error_text()
            .await
            .map_err(|e| self.page_error(&scenario, &user_type, e.into()))?;
        self.transition(&scenario, ScenarioState::OutcomeObserved);

        self.capture_screenshot(&scenario).await;

        if authenticated {
            return Err(self.mismatch(
                &scenario,
                &user_type,
                "expected rejection but reached authenticated view".to_string(),
            ));
        }
        match &error_text {
            Some(text) if text.contains(INVALID_LOGIN_FRAGMENT) => {}
            other => {
                return Err(self.mismatch(
                    &scenario,
                    &user_type,
                    format!(
                        "expected error containing '{}', observed {:?}",
                        INVALID_LOGIN_FRAGMENT, other
                    ),
                ))
            }
        }
        self.transition(&scenario, ScenarioState::Validated);

        Ok(ScenarioReport {
            scenario,
            user_type,
            authenticated,
            error_text,
            elapsed_ms: started.elapsed().as_millis() as u64,
        })
    }

    async fn validate(
        &self,
        scenario: &str,
        user_type: &str,
        expected: &ExpectedOutcome,
        authenticated: bool,
        error_text: &Option<String>,
    ) -> Result<(), ScenarioError> {
        match expected {
            ExpectedOutcome::Rejected { error } => {
                if authenticated {
                    return Err(self.mismatch(
                        scenario,
                        user_type,
                        "expected rejection but reached authenticated view".to_string(),
                    ));
                }
                if error_text.as_deref().map(str::trim) != Some(*error) {
                    return Err(self.mismatch(
                        scenario,
                        user_type,
                        format!(
                            "expected error '{}', observed {:?}",
                            error, error_text
                        ),
                    ));
                }
            }
            ExpectedOutcome::Authenticated { title } => {
                if !authenticated {
                    return Err(self.mismatch(
                        scenario,
                        user_type,
                        format!(
                            "expected authenticated view, observed error {:?}",
                            error_text
                        ),
                    ));
                }
                if let Some(expected_title) = title {
                    let observed = self
                        .inventory
                        .title_text()
                        .await
                        .map_err(|e| self.page_error(scenario, user_type, e.into()))?;
                    if observed.as_deref().map(str::trim) != Some(*expected_title) {
                        return Err(self.mismatch(
                            scenario,
                            user_type,
                            format!(
                                "expected title '{}', observed {:?}",
                                expected_title, observed
                            ),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// 结果观察后抓取调试截图
    ///
    /// 截图失败只记录警告，不影响场景结果
    async fn capture_screenshot(&self, scenario: &str) {
        let name = format_test_name(scenario);
        let path = Path::new(&self.settings.screenshots.dir).join(format!("{}.png", name));
        if let Err(e) = self.engine.screenshot(&path).await {
            tracing::warn!(scenario = scenario, error = %e, "screenshot capture failed");
        }
    }

    fn transition(&self, scenario: &str, state: ScenarioState) {
        tracing::debug!(scenario = scenario, state = ?state, "scenario state");
    }

    fn page_error(&self, scenario: &str, user_type: &str, source: PageError) -> ScenarioError {
        ScenarioError::Page {
            scenario: scenario.to_string(),
            user_type: user_type.to_string(),
            source,
        }
    }

    fn mismatch(&self, scenario: &str, user_type: &str, detail: String) -> ScenarioError {
        ScenarioError::AssertionMismatch {
            scenario: scenario.to_string(),
            user_type: user_type.to_string(),
            detail,
        }
    }
}
