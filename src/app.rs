//! 应用入口：分发命令并把结果输出到终端

use crate::cli::{AnswerPair, Command, JobsAction};
use crate::clients::{ApiClient, AuthClient, JobClient};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Job, JobDraft, LoginForm, SignUpForm};
use crate::services::scoring::OptionMark;
use crate::services::validation::validate_signup;
use crate::services::ResumeFile;
use crate::utils::logging::{log_quiz_summary, log_startup};
use crate::utils::truncate_text;
use crate::workflow::{HttpQuizBackend, QuestionReview, QuizBackend, QuizReport, QuizSession};
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    api: ApiClient,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        log_startup(&config);
        let api = ApiClient::new(&config)?;
        Ok(Self { api })
    }

    /// 执行命令
    pub async fn run(&self, command: Command) -> AppResult<()> {
        match command {
            Command::Login { email, password } => self.login(email, password).await,
            Command::Signup {
                name,
                email,
                password,
                confirm_password,
            } => signup(SignUpForm {
                name,
                email,
                password,
                confirm_password,
            }),
            Command::Jobs { action } => self.jobs(action).await,
            Command::Quiz {
                job_id,
                resume,
                answers,
            } => self.quiz(job_id, resume.as_deref(), answers).await,
        }
    }

    async fn login(&self, email: String, password: String) -> AppResult<()> {
        let client = AuthClient::new(self.api.clone());
        let response = client.login(&LoginForm { email, password }).await?;
        println!(
            "{}",
            response.message.as_deref().unwrap_or("Login successful")
        );
        if let Some(token) = response.token {
            println!("token: {}", token);
        }
        Ok(())
    }

    async fn jobs(&self, action: JobsAction) -> AppResult<()> {
        let client = JobClient::new(self.api.clone());
        match action {
            JobsAction::List => {
                let jobs = client.list_jobs().await?;
                print!("{}", render_job_table(&jobs));
            }
            JobsAction::Show { id } => {
                let job = client.get_job(&id).await?;
                println!("{} [{}]", job.title, job.status);
                println!("posted: {}", job.date());
                println!();
                println!("{}", job.description);
            }
            JobsAction::Create {
                title,
                description,
                date,
            } => {
                let mut draft = JobDraft::dated_today(title, description);
                if let Some(date) = date {
                    draft.date = date;
                }
                let job_id = client.create_job(&draft).await?;
                println!("Job created successfully! {}", job_id.unwrap_or_default());
            }
            JobsAction::Update {
                id,
                title,
                description,
                date,
            } => {
                client
                    .update_job(&id, &JobDraft { title, description, date })
                    .await?;
                println!("Job updated successfully");
            }
            JobsAction::Delete { id } => {
                client.delete_job(&id).await?;
                println!("Job deleted successfully");
            }
        }
        Ok(())
    }

    async fn quiz(&self, job_id: String, resume: Option<&Path>, answers: Vec<AnswerPair>) -> AppResult<()> {
        let session = QuizSession::new(HttpQuizBackend::from_api(self.api.clone()), job_id);

        if let Err(e) = session.load_job_description().await {
            warn!("职位描述不可用: {}", e);
        }

        let resume = match resume {
            Some(path) => Some(ResumeFile::load(path).await?),
            None => None,
        };

        println!("AI is thinking... Please wait.");
        session.generate_questions(resume).await?;

        let questions = session.snapshot().review();
        if answers.is_empty() {
            let stdin = BufReader::new(tokio::io::stdin());
            answer_interactively(&session, &questions, stdin, &mut std::io::stdout()).await?;
        } else {
            for pair in &answers {
                if !session.select_answer(pair.index(), &pair.option_key) {
                    warn!("忽略第 {} 题的作答：题号超出范围", pair.number);
                }
            }
        }

        let report = session.submit_and_reveal().await?;
        print!("{}", render_report(&report));
        log_quiz_summary(&report);
        Ok(())
    }
}

/// 本地校验注册信息
fn signup(form: SignUpForm) -> AppResult<()> {
    validate_signup(&form).map_err(AppError::from)?;
    info!("✓ 注册信息校验通过: {}", form.email);
    println!("Sign-up details are valid.");
    Ok(())
}

/// 逐题读取输入并记录作答，空行跳过
///
/// 输出写入失败（如管道关闭）时返回错误，不再继续读取
async fn answer_interactively<B, R, W>(
    session: &QuizSession<B>,
    questions: &[QuestionReview],
    input: R,
    output: &mut W,
) -> AppResult<()>
where
    B: QuizBackend,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    for question in questions {
        write!(output, "{}Your answer: ", render_question(question))
            .and_then(|_| output.flush())
            .map_err(|e| AppError::file_read_failed("<stdout>", e))?;

        let line = lines
            .next_line()
            .await
            .map_err(|e| AppError::file_read_failed("<stdin>", e))?;
        let Some(line) = line else { break };
        let key = line.trim();
        if !key.is_empty() {
            session.select_answer(question.index, key);
        }
    }
    Ok(())
}

/// 职位列表
pub fn render_job_table(jobs: &[Job]) -> String {
    if jobs.is_empty() {
        return "No jobs available\n".to_string();
    }
    let mut out = format!("{:<26} {:<30} {:<12} {:<8} {}\n", "ID", "TITLE", "POSTED", "STATUS", "DESCRIPTION");
    for job in jobs {
        out.push_str(&format!(
            "{:<26} {:<30} {:<12} {:<8} {}\n",
            job.id,
            truncate_text(&job.title, 27),
            job.date(),
            job.status.to_string(),
            truncate_text(&job.description, 40)
        ));
    }
    out
}

/// 单道题（作答前）
pub fn render_question(question: &QuestionReview) -> String {
    let mut out = format!("\n{}. {}\n", question.index + 1, question.prompt);
    for (key, text, _) in &question.options {
        out.push_str(&format!("   {}: {}\n", key, text));
    }
    out
}

/// 揭晓后的完整报告
pub fn render_report(report: &QuizReport) -> String {
    let mut out = String::new();
    for question in &report.review {
        out.push_str(&format!("\n{}. {}\n", question.index + 1, question.prompt));
        for (key, text, mark) in &question.options {
            let tag = match mark {
                OptionMark::Correct => "[correct]",
                OptionMark::Incorrect => "[wrong]",
                OptionMark::Plain => "",
            };
            let chosen = if question.selected.as_deref() == Some(key.as_str()) { "*" } else { " " };
            let line = format!(" {} {}: {} {}", chosen, key, text, tag);
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.push_str(&format!("   Correct Answer: {}\n", question.correct_option_key));
        if !question.explanation.is_empty() {
            out.push_str(&format!("   Explanation: {}\n", question.explanation));
        }
    }
    out.push_str(&format!(
        "\nScore: {}/{}\n",
        report.result.score, report.result.total_questions
    ));
    out
}
