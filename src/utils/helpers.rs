// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use rand::Rng;
use std::time::Duration;
use url::Url;

/// 在给定区间内随机延迟
///
/// 用于模拟不稳定账号的额外等待，区间闭合于两端
pub async fn random_delay(min_ms: u64, max_ms: u64) {
    // Draw before awaiting, ThreadRng is not Send
    let delay = rand::rng().random_range(min_ms..=max_ms);
    tokio::time::sleep(Duration::from_millis(delay)).await;
}

/// 生成指定长度的随机字母数字字符串
pub fn random_string(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// 校验字符串是否为合法URL
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}

/// 用UTC时间戳格式化测试名称
///
/// 时间戳中的`:`和`.`替换为`-`，便于用作文件名
pub fn format_test_name(base_name: &str) -> String {
    let timestamp = chrono::Utc::now()
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{}_{}", base_name, timestamp)
}
