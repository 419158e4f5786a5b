//! 终端测验程序 - 编排层
//!
//! ## 职责
//!
//! 本模块是命令行程序的入口，只做演示用的逐行交互，不包含判分逻辑。
//!
//! 1. **应用初始化**：读取配置、载入题库、绑定会话
//! 2. **命令循环**：逐行读取标准输入并转成引擎命令
//! 3. **成绩记录**：判分后追加到成绩记录文件

use crate::config::Config;
use crate::models::{sample_questions, AnswerValue, Question, SAMPLE_TITLE};
use crate::orchestrator::QuizSession;
use crate::services::{InMemoryQuestionProvider, QuestionProvider, ResultWriter, TomlQuestionProvider};
use crate::utils::logging::{log_final_score, log_questions_loaded, log_startup};
use crate::workflow::{QuizEngine, QuizPhase};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

/// 终端命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 下一题；在最后一题时提交
    Next,
    Previous,
    /// 单值作答
    Answer(String),
    /// 切换多选选项
    Toggle(String),
    Submit,
    Restart,
    Help,
    Quit,
}

impl Command {
    /// 解析一行输入，无法识别时返回 `None`
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        match head {
            "n" | "next" => Some(Command::Next),
            "p" | "prev" => Some(Command::Previous),
            "a" | "answer" => Some(Command::Answer(rest.to_string())),
            "t" | "toggle" if !rest.is_empty() => Some(Command::Toggle(rest.to_string())),
            "s" | "submit" => Some(Command::Submit),
            "r" | "restart" => Some(Command::Restart),
            "h" | "help" => Some(Command::Help),
            "q" | "quit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// 应用主结构
pub struct App {
    title: String,
    result_writer: ResultWriter,
    session: QuizSession,
    _provider: Box<dyn QuestionProvider>,
}

impl App {
    /// 初始化应用
    ///
    /// 指定题库文件时在后台载入，载入完成前题目列表为空；
    /// 未指定时使用内置示例题库。
    pub async fn initialize(config: Config) -> Result<Self> {
        let (title, provider): (String, Box<dyn QuestionProvider>) = match &config.question_file {
            Some(path) => {
                log_startup(path);
                let title = Path::new(path)
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.clone());
                (title, Box::new(TomlQuestionProvider::spawn(path)))
            }
            None => {
                log_startup("内置示例题库");
                let questions = sample_questions();
                log_questions_loaded(SAMPLE_TITLE, questions.len());
                (
                    SAMPLE_TITLE.to_string(),
                    Box::new(InMemoryQuestionProvider::new(questions)),
                )
            }
        };

        let session = QuizSession::bind(provider.as_ref(), config.unknown_question_policy());

        Ok(Self {
            title,
            result_writer: ResultWriter::with_path(config.result_log_file),
            session,
            _provider: provider,
        })
    }

    pub fn engine(&self) -> &QuizEngine {
        self.session.engine()
    }

    /// 运行命令循环，直到输入 `q` 或标准输入结束
    pub async fn run(&self) -> Result<()> {
        print_help();
        self.render();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.context("读取标准输入失败")? {
            let Some(command) = Command::parse(&line) else {
                println!("无法识别的命令: {:?}（输入 h 查看帮助）", line.trim());
                continue;
            };
            if command == Command::Quit {
                break;
            }
            self.execute(command).await?;
        }

        Ok(())
    }

    /// 执行一条命令并刷新显示
    pub async fn execute(&self, command: Command) -> Result<()> {
        let engine = self.engine();
        match command {
            Command::Next if engine.is_last_question() && engine.phase() == QuizPhase::InProgress => {
                self.submit().await?;
                return Ok(());
            }
            Command::Next => {
                engine.advance();
            }
            Command::Previous => {
                engine.retreat();
            }
            Command::Answer(text) => match engine.current_question() {
                Some(question) => {
                    if let Err(e) = engine.record_single_answer(question.id(), text) {
                        println!("⚠️ {}", e);
                    }
                }
                None => println!("当前没有题目"),
            },
            Command::Toggle(option) => match engine.current_question() {
                Some(question) => {
                    if let Err(e) = engine.toggle_multi_answer(question.id(), option) {
                        println!("⚠️ {}", e);
                    }
                }
                None => println!("当前没有题目"),
            },
            Command::Submit => {
                self.submit().await?;
                return Ok(());
            }
            Command::Restart => engine.restart(),
            Command::Help => print_help(),
            Command::Quit => return Ok(()),
        }
        self.render();
        Ok(())
    }

    /// 判分、显示并记录成绩
    async fn submit(&self) -> Result<()> {
        let engine = self.engine();
        engine.submit();
        let Some(result) = engine.result() else {
            return Ok(());
        };

        println!("\n🎉 你的得分: {}", result);
        println!("输入 r 重新开始，q 退出");

        if let Err(e) = self
            .result_writer
            .write(&self.title, result, &engine.answers())
            .await
        {
            warn!("⚠️ 成绩记录失败: {}", e);
        }
        log_final_score(result, self.result_writer.path());
        Ok(())
    }

    /// 显示当前题目
    fn render(&self) {
        let state = self.engine().snapshot();
        if let Some(result) = state.result() {
            println!("\n已判分，得分 {}（输入 r 重新开始）", result);
            return;
        }
        let Some(question) = state.current_question() else {
            println!("\n题库为空，输入 s 可直接判分");
            return;
        };

        println!(
            "\n[{}/{}] {} {}",
            state.current_index + 1,
            state.question_count(),
            question.kind(),
            question.text()
        );
        let answer = state.answers.get(question.id());
        for option in question.options() {
            let marker = match answer {
                Some(AnswerValue::Single(chosen)) if chosen == option => "(*)",
                Some(AnswerValue::Multi(chosen)) if chosen.contains(option) => "[x]",
                _ if question.kind().takes_multiple_answers() => "[ ]",
                _ => "( )",
            };
            println!("  {} {}", marker, option);
        }
        if let (Question::OpenEnded { .. }, Some(AnswerValue::Single(text))) = (question, answer) {
            println!("  当前答案: {}", text);
        }

        let next = if state.is_last_question() { "提交" } else { "下一题" };
        println!("n={}  p=上一题  a <答案>  t <选项>  s=提交  h=帮助", next);
    }
}

fn print_help() {
    println!("命令:");
    println!("  n          下一题（最后一题时提交）");
    println!("  p          上一题");
    println!("  a <答案>   单值作答（判断题、单选题、问答题）");
    println!("  t <选项>   切换多选选项");
    println!("  s          提交判分");
    println!("  r          重新开始");
    println!("  q          退出");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionId;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("n"), Some(Command::Next));
        assert_eq!(Command::parse("  prev "), Some(Command::Previous));
        assert_eq!(
            Command::parse("a  The answer "),
            Some(Command::Answer("The answer".to_string()))
        );
        assert_eq!(Command::parse("a"), Some(Command::Answer(String::new())));
        assert_eq!(Command::parse("t C++"), Some(Command::Toggle("C++".to_string())));
        assert_eq!(Command::parse("t"), None);
        assert_eq!(Command::parse("jump 3"), None);
    }

    #[tokio::test]
    async fn test_next_on_last_question_submits() {
        let result_file = std::env::temp_dir().join(format!("quiz_app_{}.txt", std::process::id()));
        let config = Config {
            result_log_file: result_file.display().to_string(),
            ..Config::default()
        };
        let app = App::initialize(config).await.unwrap();

        app.execute(Command::Answer("True".to_string())).await.unwrap();
        for _ in 0..3 {
            app.execute(Command::Next).await.unwrap();
        }
        assert_eq!(app.engine().current_index(), 3);
        assert_eq!(app.engine().score(), None);

        app.execute(Command::Next).await.unwrap();
        assert_eq!(app.engine().score(), Some(1));
        assert_eq!(
            app.engine().answer_for(QuestionId(1)),
            Some(AnswerValue::from("True"))
        );

        let _ = std::fs::remove_file(&result_file);
    }

    #[tokio::test]
    async fn test_question_file_is_loaded_in_background() {
        let bank_file = std::env::temp_dir().join(format!("quiz_app_bank_{}.toml", std::process::id()));
        let content = r#"
title = "后台题库"

[[questions]]
kind = "true_false"
id = 1
text = "Rust 有垃圾回收吗？"
correct_answer = "False"

[[questions]]
kind = "open_ended"
id = 2
text = "Rust 的包管理器叫什么？"
correct_answer = "Cargo"
"#;
        tokio::fs::write(&bank_file, content).await.unwrap();

        let config = Config {
            question_file: Some(bank_file.display().to_string()),
            ..Config::default()
        };
        let app = App::initialize(config).await.unwrap();

        let mut rx = app.engine().subscribe();
        let loaded = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            rx.wait_for(|state| state.question_count() > 0),
        )
        .await
        .expect("题库加载超时")
        .unwrap()
        .question_count();
        assert_eq!(loaded, 2);
        assert_eq!(app.engine().current_question().map(|q| q.id()), Some(QuestionId(1)));

        tokio::fs::remove_file(&bank_file).await.unwrap();
    }
}
