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

use saucetest::config::settings::Settings;
use saucetest::data::CredentialStore;
use saucetest::engines::cdp_engine::{launch_browser, CdpEngine};
use saucetest::scenario::ScenarioRunner;
use saucetest::utils::telemetry;
use std::sync::Arc;
use tracing::{error, info};

/// 主函数
///
/// 启动一个浏览器实例，对每种存储的用户类型运行登录验证场景，
/// 外加一个无效凭证负向场景，最后输出JSON汇总
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting saucetest...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!(target = %settings.target.base_url, "Configuration loaded");

    let store = CredentialStore::new();

    // 3. Launch the shared browser; every scenario gets its own page
    let (mut browser, handler_task) = launch_browser(&settings.browser).await?;

    let mut reports = Vec::new();
    let mut failures = Vec::new();

    for user_type in store.list_types().into_iter().map(str::to_string) {
        let engine = Arc::new(CdpEngine::new_session(&browser).await?);
        let runner = ScenarioRunner::new(store.clone(), settings.clone(), engine);

        match runner.run(&user_type).await {
            Ok(report) => {
                info!(
                    scenario = %report.scenario,
                    elapsed_ms = report.elapsed_ms,
                    "scenario passed"
                );
                // Leave the session clean for inspection of the next run
                if report.authenticated {
                    if let Err(e) = runner.inventory_page().logout().await {
                        error!(scenario = %report.scenario, error = %e, "logout failed");
                    }
                }
                reports.push(report);
            }
            Err(e) => {
                error!(error = %e, "scenario failed");
                failures.push(e.to_string());
            }
        }
    }

    // 4. Negative scenario with deliberately wrong credentials
    let engine = Arc::new(CdpEngine::new_session(&browser).await?);
    let runner = ScenarioRunner::new(store.clone(), settings.clone(), engine);
    match runner.run_invalid_login().await {
        Ok(report) => {
            info!(scenario = %report.scenario, "scenario passed");
            reports.push(report);
        }
        Err(e) => {
            error!(error = %e, "scenario failed");
            failures.push(e.to_string());
        }
    }

    browser.close().await?;
    handler_task.abort();

    println!("{}", serde_json::to_string_pretty(&reports)?);

    if !failures.is_empty() {
        anyhow::bail!("{} scenario(s) failed: {}", failures.len(), failures.join("; "));
    }
    info!("All scenarios passed");
    Ok(())
}
