/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use crate::models::QuizResult;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，未设置时默认 `info`，详细模式下为 `debug`。
/// 重复调用是安全的。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `source`: 题库来源描述
pub fn log_startup(source: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 测验启动");
    info!("📚 题库来源: {}", source);
    info!("{}", "=".repeat(60));
}

/// 记录题库载入信息
///
/// # 参数
/// - `title`: 题库标题
/// - `total`: 题目总数
pub fn log_questions_loaded(title: &str, total: usize) {
    info!("✓ 题库 {} 共 {} 个题目", title, total);
}

/// 打印最终成绩
///
/// # 参数
/// - `result`: 判分结果
/// - `result_log_file`: 成绩记录文件路径
pub fn log_final_score(result: QuizResult, result_log_file: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 测验完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 得分: {}", result);
    info!("{}", "=".repeat(60));
    info!("成绩已记录至: {}", result_log_file);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
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
        assert_eq!(truncate_text("短文本", 10), "短文本");
        assert_eq!(truncate_text("一二三四五", 3), "一二三...");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
