//! # Web API Integration Tests
//!
//! End-to-end tests against a real server instance: each test spawns the app
//! on an ephemeral port (fresh task manager per test) and drives it with a
//! plain HTTP client.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use tasktrack::config::TaskTrackConfig;
use tasktrack::web::{create_app, state::AppState};

/// Test server instance managing a running web server
struct TestServer {
    base_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with a fresh task manager on an ephemeral port
    async fn start() -> Self {
        let config = Arc::new(TaskTrackConfig::default());
        let app = create_app(AppState::new(config));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral port available");
        let addr = listener.local_addr().expect("listener has local addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server runs");
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn get_json(client: &Client, url: &str) -> Value {
    client
        .get(url)
        .send()
        .await
        .expect("request succeeds")
        .json()
        .await
        .expect("response is JSON")
}

#[tokio::test]
async fn home_and_health_respond() {
    let server = TestServer::start().await;
    let client = Client::new();

    let home = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(home.status(), StatusCode::OK);
    assert!(home.text().await.unwrap().contains("TaskTrack"));

    let health = get_json(&client, &server.url("/health")).await;
    assert_eq!(health["status"], "ok");
    assert!(health["timestamp"].is_string());
}

#[tokio::test]
async fn config_page_is_html() {
    let server = TestServer::start().await;
    let client = Client::new();

    let response = client.get(server.url("/tasktrack/config")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("<html>"));
    assert!(body.contains("Configuração"));
}

#[tokio::test]
async fn json_params_describe_three_fixed_parameters() {
    let server = TestServer::start().await;
    let client = Client::new();

    let params = get_json(&client, &server.url("/tasktrack/json-params")).await;
    let list = params["params"].as_array().unwrap();
    assert_eq!(list.len(), 3);

    assert_eq!(list[0]["name"], "max_tasks");
    assert_eq!(list[0]["type"], "integer");
    assert_eq!(list[0]["default"], 5);
    assert_eq!(list[0]["min"], 1);
    assert_eq!(list[0]["max"], 20);

    assert_eq!(list[1]["name"], "time_limit_minutes");
    assert_eq!(list[1]["default"], 30);

    assert_eq!(list[2]["name"], "allow_reorder");
    assert_eq!(list[2]["type"], "boolean");
    assert_eq!(list[2]["default"], true);

    // Idempotent: no state dependency
    let again = get_json(&client, &server.url("/tasktrack/json-params")).await;
    assert_eq!(params, again);
}

#[tokio::test]
async fn deploy_priority_task_scenario() {
    let server = TestServer::start().await;
    let client = Client::new();

    let response = client
        .post(server.url("/tasktrack/deploy"))
        .json(&json!({
            "title": "Write report",
            "task_type": "priority",
            "priority": 5,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    let task = &body["created_task"];
    assert_eq!(task["type"], "PriorityTask");
    assert_eq!(task["title"], "Write report");
    assert_eq!(task["priority"], 5);
    assert_eq!(task["done"], false);
    assert!(task["created_at"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn deploy_with_malformed_body_uses_defaults() {
    let server = TestServer::start().await;
    let client = Client::new();

    let response = client
        .post(server.url("/tasktrack/deploy"))
        .header("content-type", "application/json")
        .body("{not valid json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["created_task"]["type"], "SimpleTask");
    assert_eq!(body["created_task"]["title"], "Tarefa inicial do plano");
}

#[tokio::test]
async fn deploy_with_invalid_priority_is_client_error_and_stores_nothing() {
    let server = TestServer::start().await;
    let client = Client::new();

    let response = client
        .post(server.url("/tasktrack/deploy"))
        .json(&json!({"task_type": "priority", "priority": "very high"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let listing = get_json(&client, &server.url("/tasktrack/tasks")).await;
    assert_eq!(listing["count"], 0);
}

#[tokio::test]
async fn tasks_sorted_by_priority_descending() {
    let server = TestServer::start().await;
    let client = Client::new();

    for priority in [1, 5, 3] {
        let response = client
            .post(server.url("/tasktrack/deploy"))
            .json(&json!({
                "title": format!("task p{priority}"),
                "task_type": "priority",
                "priority": priority,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let listing = get_json(&client, &server.url("/tasktrack/tasks?sort_by=priority")).await;
    assert_eq!(listing["count"], 3);
    assert_eq!(listing["sorted_by"], "priority");

    let priorities: Vec<i64> = listing["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["priority"].as_i64().unwrap())
        .collect();
    assert_eq!(priorities, [5, 3, 1]);
}

#[tokio::test]
async fn unknown_sort_key_falls_back_to_default_order() {
    let server = TestServer::start().await;
    let client = Client::new();

    for title in ["first", "second"] {
        client
            .post(server.url("/tasktrack/deploy"))
            .json(&json!({"title": title}))
            .send()
            .await
            .unwrap();
    }

    let listing = get_json(&client, &server.url("/tasktrack/tasks?sort_by=alphabetical")).await;
    assert_eq!(listing["sorted_by"], "default");

    let titles: Vec<&str> = listing["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["first", "second"]);
}

#[tokio::test]
async fn repository_count_grows_with_each_deploy() {
    let server = TestServer::start().await;
    let client = Client::new();

    for i in 1..=4 {
        client
            .post(server.url("/tasktrack/deploy"))
            .json(&json!({"title": format!("task {i}")}))
            .send()
            .await
            .unwrap();

        let listing = get_json(&client, &server.url("/tasktrack/tasks")).await;
        assert_eq!(listing["count"], i);
    }
}

#[tokio::test]
async fn sort_strategies_catalogue_is_fixed() {
    let server = TestServer::start().await;
    let client = Client::new();

    let catalogue = get_json(&client, &server.url("/tasktrack/sort-strategies")).await;
    let strategies = catalogue["available_strategies"].as_array().unwrap();
    let keys: Vec<&str> = strategies.iter().map(|s| s.as_str().unwrap()).collect();
    assert_eq!(keys, ["priority", "deadline", "creation", "default"]);

    let description = catalogue["description"].as_object().unwrap();
    assert_eq!(description.len(), 4);
    assert!(description.contains_key("priority"));
    assert!(description.contains_key("default"));

    let again = get_json(&client, &server.url("/tasktrack/sort-strategies")).await;
    assert_eq!(catalogue, again);
}

#[tokio::test]
async fn analytics_list_has_five_fixed_descriptors() {
    let server = TestServer::start().await;
    let client = Client::new();

    let listing = get_json(&client, &server.url("/tasktrack/analytics-list")).await;
    let analytics = listing["analytics"].as_array().unwrap();
    assert_eq!(analytics.len(), 5);

    let names: Vec<&str> = analytics
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "tasks_created",
            "tasks_completed",
            "tasks_completed_on_time",
            "total_time_minutes",
            "completion_rate",
        ]
    );

    let again = get_json(&client, &server.url("/tasktrack/analytics-list")).await;
    assert_eq!(listing, again);
}

#[tokio::test]
async fn analytics_echo_ids_and_return_mock_metrics() {
    let server = TestServer::start().await;
    let client = Client::new();

    let response = client
        .post(server.url("/tasktrack/analytics"))
        .json(&json!({"activityID": "act-9", "userID": "user-7"}))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();

    assert_eq!(body["activityID"], "act-9");
    assert_eq!(body["userID"], "user-7");
    assert_eq!(body["metrics"]["tasks_created"], 5);
    assert_eq!(body["metrics"]["completion_rate"], 80.0);

    // Absent body: platform example defaults apply
    let response = client
        .post(server.url("/tasktrack/analytics"))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["activityID"], "activity-123");
    assert_eq!(body["userID"], "user-abc");
    assert_eq!(body["metrics"]["total_time_minutes"], 27.5);
}

#[tokio::test]
async fn deadline_task_deploy_reports_deadline_after_creation() {
    let server = TestServer::start().await;
    let client = Client::new();

    let response = client
        .post(server.url("/tasktrack/deploy"))
        .json(&json!({
            "title": "Com prazo",
            "task_type": "deadline",
            "minutes_from_now": 30,
        }))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();

    let task = &body["created_task"];
    assert_eq!(task["type"], "DeadlineTask");
    let created_at: chrono::DateTime<chrono::Utc> =
        task["created_at"].as_str().unwrap().parse().unwrap();
    let deadline: chrono::DateTime<chrono::Utc> =
        task["deadline"].as_str().unwrap().parse().unwrap();
    assert_eq!(deadline - created_at, chrono::Duration::minutes(30));
}
