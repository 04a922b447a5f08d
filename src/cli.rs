//! 命令行参数定义

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "job-mcq")]
#[command(about = "Job postings admin and interview MCQ practice against the jobs API")]
pub struct Cli {
    /// TOML 配置文件
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 显示详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in as an administrator
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Check sign-up details locally
    Signup {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,
    },
    /// Manage job postings
    Jobs {
        #[command(subcommand)]
        action: JobsAction,
    },
    /// Generate interview questions for a job from a resume and answer them
    Quiz {
        /// Job identifier
        job_id: String,
        /// Resume file (.pdf or .docx)
        #[arg(long)]
        resume: Option<PathBuf>,
        /// Answers as NUMBER=KEY pairs using the displayed question numbers, e.g. 1=B,2=C
        #[arg(long, value_delimiter = ',')]
        answers: Vec<AnswerPair>,
    },
}

#[derive(Subcommand, Debug)]
pub enum JobsAction {
    /// List all job postings
    List,
    /// Show one job posting
    Show { id: String },
    /// Create a job posting
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Posting date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Update a job posting
    Update {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        date: String,
    },
    /// Delete a job posting
    Delete { id: String },
}

/// 命令行中的一条作答，题号从 1 开始
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerPair {
    pub number: usize,
    pub option_key: String,
}

impl AnswerPair {
    /// 会话内使用的题目序号（从 0 开始）
    pub fn index(&self) -> usize {
        self.number - 1
    }
}

impl FromStr for AnswerPair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, key) = s
            .split_once('=')
            .ok_or_else(|| format!("expected NUMBER=KEY, got '{}'", s))?;
        let number: usize = number
            .trim()
            .parse()
            .map_err(|_| format!("invalid question number '{}'", number.trim()))?;
        if number == 0 {
            return Err("question numbers start at 1".to_string());
        }
        let option_key = key.trim();
        if option_key.is_empty() {
            return Err(format!("missing option key for question {}", number));
        }
        Ok(Self {
            number,
            option_key: option_key.to_string(),
        })
    }
}
