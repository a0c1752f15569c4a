use super::*;

fn todo(id: i64, body: &str, status: TodoStatus) -> Todo {
    Todo { id, body: body.to_owned(), status }
}

#[test]
fn endpoint_url_trims_trailing_slash() {
    assert_eq!(endpoint_url("http://localhost:3000/", "/api/todos"), "http://localhost:3000/api/todos");
    assert_eq!(endpoint_url("http://localhost:3000", "/healthz"), "http://localhost:3000/healthz");
}

#[test]
fn statuses_for_all_requests_both() {
    assert_eq!(statuses_for(StatusFilter::All), TodoStatus::ALL.to_vec());
}

#[test]
fn statuses_for_single_filter_requests_one() {
    assert_eq!(statuses_for(StatusFilter::Pending), vec![TodoStatus::Pending]);
    assert_eq!(statuses_for(StatusFilter::Completed), vec![TodoStatus::Completed]);
}

#[test]
fn format_todo_line_marks_completed() {
    assert_eq!(format_todo_line(&todo(3, "walk dog", TodoStatus::Completed)), "[x]    3  walk dog");
    assert_eq!(format_todo_line(&todo(12, "buy milk", TodoStatus::Pending)), "[ ]   12  buy milk");
}

#[test]
fn cli_parses_list_with_status() {
    let cli = Cli::try_parse_from(["todo-cli", "list", "--status", "completed"]).unwrap();
    assert!(matches!(cli.command, Command::List { status: StatusFilter::Completed, json: false }));
}

#[test]
fn cli_parses_set_status() {
    let cli = Cli::try_parse_from(["todo-cli", "set-status", "4", "pending"]).unwrap();
    assert!(matches!(cli.command, Command::SetStatus { id: 4, status: TodoStatus::Pending }));
}

#[test]
fn cli_rejects_unknown_status() {
    assert!(Cli::try_parse_from(["todo-cli", "list", "--status", "archived"]).is_err());
}

#[test]
fn decode_response_parses_success_body() {
    let value = decode_response(200, r#"{"ok":true}"#).unwrap();
    assert_eq!(value, serde_json::json!({ "ok": true }));
}

#[test]
fn decode_response_rejects_garbled_success_body() {
    let err = decode_response(201, "<html>oops</html>").unwrap_err();
    assert!(matches!(err, CliError::InvalidJson(_)));
}

#[test]
fn decode_response_keeps_error_body_as_message() {
    let err = decode_response(400, "missing body\n").unwrap_err();
    assert!(matches!(err, CliError::Server { status: 400, ref message } if message == "missing body"));
}

#[test]
fn decode_response_reports_empty_error_body() {
    let err = decode_response(404, "").unwrap_err();
    assert_eq!(err.to_string(), "server returned 404: empty response body");
}

#[test]
fn delete_ack_must_be_ok() {
    assert!(check_delete_ack(3, DeleteTodoResponse { ok: true }).is_ok());
    let err = check_delete_ack(3, DeleteTodoResponse { ok: false }).unwrap_err();
    assert!(matches!(err, CliError::NotDeleted(3)));
}
