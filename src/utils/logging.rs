/// 日志工具模块
///
/// 提供日志初始化以及格式化输出的辅助函数
use crate::config::Config;
use crate::workflow::QuizReport;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则按 `verbose` 选择 debug / info。重复调用不会报错。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 职位面试选择题");
    info!("🌐 API 地址: {}", config.api_base_url);
    info!("{}", "=".repeat(60));
}

/// 打印答题统计信息
///
/// # 参数
/// - `report`: 揭晓后的答题报告
pub fn log_quiz_summary(report: &QuizReport) {
    info!("\n{}", "=".repeat(60));
    info!("📊 答题完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!(
        "✅ 得分: {}/{}",
        report.result.score, report.result.total_questions
    );
    if report.persisted {
        info!("💾 成绩已保存");
    } else {
        info!("⚠️ 成绩未能保存（不影响查看答案）");
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Backend role", 80), "Backend role");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("职位描述很长", 2), "职位...");
    }
}
