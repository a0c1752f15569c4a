use clap::{Parser, Subcommand};
use serde_json::Value;
use todos::{CreateTodoBody, DeleteTodoResponse, StatusFilter, Todo, TodoStatus, UpdateTodoStatusBody};

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
    #[error("todo not found: {0}")]
    NotFound(i64),
    #[error("server did not acknowledge deleting todo {0}")]
    NotDeleted(i64),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "todo-cli", about = "Todo app API CLI")]
struct Cli {
    #[arg(long, env = "TODO_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// List todos, optionally filtered by status.
    List {
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// Print raw JSON instead of one line per todo.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Create a pending todo.
    Create { body: String },
    /// Flip a todo between pending and completed.
    Toggle { id: i64 },
    /// Set a todo's status explicitly.
    SetStatus { id: i64, status: TodoStatus },
    /// Delete a todo.
    Delete { id: i64 },
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    client: reqwest::Client,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url, client: reqwest::Client::new() };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::List { status, json } => run_list(&ctx, status, json).await,
        Command::Create { body } => {
            let todo = create(&ctx, &body).await?;
            println!("{}", format_todo_line(&todo));
            Ok(())
        }
        Command::Toggle { id } => {
            let current = fetch_todos(&ctx, &TodoStatus::ALL)
                .await?
                .into_iter()
                .find(|todo| todo.id == id)
                .ok_or(CliError::NotFound(id))?;
            let todo = set_status(&ctx, id, current.status.toggled()).await?;
            println!("{}", format_todo_line(&todo));
            Ok(())
        }
        Command::SetStatus { id, status } => {
            let todo = set_status(&ctx, id, status).await?;
            println!("{}", format_todo_line(&todo));
            Ok(())
        }
        Command::Delete { id } => {
            delete(&ctx, id).await?;
            println!("deleted {id}");
            Ok(())
        }
    }
}

async fn run_ping(ctx: &CliContext) -> Result<(), CliError> {
    let url = endpoint_url(&ctx.base_url, "/healthz");
    let response = ctx.client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Server { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

async fn run_list(ctx: &CliContext, filter: StatusFilter, json: bool) -> Result<(), CliError> {
    let statuses = statuses_for(filter);
    let todos = fetch_todos(ctx, &statuses).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&todos)?);
        return Ok(());
    }
    if todos.is_empty() {
        println!("no todos");
    }
    for todo in &todos {
        println!("{}", format_todo_line(todo));
    }
    Ok(())
}

async fn fetch_todos(ctx: &CliContext, statuses: &[TodoStatus]) -> Result<Vec<Todo>, CliError> {
    let path = format!("/api/todos?statuses={}", todos::join_statuses(statuses));
    let value = api_request(ctx, reqwest::Method::GET, &path, None).await?;
    Ok(serde_json::from_value(value)?)
}

async fn create(ctx: &CliContext, body: &str) -> Result<Todo, CliError> {
    let payload = serde_json::to_value(CreateTodoBody { body: body.to_owned() })?;
    let value = api_request(ctx, reqwest::Method::POST, "/api/todos", Some(payload)).await?;
    Ok(serde_json::from_value(value)?)
}

async fn set_status(ctx: &CliContext, id: i64, status: TodoStatus) -> Result<Todo, CliError> {
    let payload = serde_json::to_value(UpdateTodoStatusBody { status })?;
    let path = format!("/api/todos/{id}/status");
    let value = api_request(ctx, reqwest::Method::PATCH, &path, Some(payload)).await?;
    Ok(serde_json::from_value(value)?)
}

async fn delete(ctx: &CliContext, id: i64) -> Result<(), CliError> {
    let value = api_request(ctx, reqwest::Method::DELETE, &format!("/api/todos/{id}"), None).await?;
    check_delete_ack(id, serde_json::from_value(value)?)
}

fn check_delete_ack(id: i64, ack: DeleteTodoResponse) -> Result<(), CliError> {
    if ack.ok { Ok(()) } else { Err(CliError::NotDeleted(id)) }
}

async fn api_request(
    ctx: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let url = endpoint_url(&ctx.base_url, path);
    let request = ctx.client.request(method, &url);
    let request = if let Some(json) = body { request.json(&json) } else { request };

    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;
    decode_response(status.as_u16(), &text)
}

/// Turn a raw response into JSON. Error statuses carry the body text as the
/// message; a success body that is not JSON is an error.
fn decode_response(status: u16, text: &str) -> Result<Value, CliError> {
    if !(200..300).contains(&status) {
        let message = match text.trim() {
            "" => "empty response body".to_owned(),
            body => body.to_owned(),
        };
        return Err(CliError::Server { status, message });
    }
    Ok(serde_json::from_str(text)?)
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Statuses to request from the server for a list filter.
fn statuses_for(filter: StatusFilter) -> Vec<TodoStatus> {
    match filter.status() {
        Some(status) => vec![status],
        None => TodoStatus::ALL.to_vec(),
    }
}

fn format_todo_line(todo: &Todo) -> String {
    let mark = if todo.status.is_completed() { 'x' } else { ' ' };
    format!("[{mark}] {:>4}  {}", todo.id, todo.body)
}
