//! API Integration Tests
//!
//! Exercise the client, the auth flow and the task operations against a
//! mock HTTP server.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    use crate::api::{Action, ApiClient, ApiError};
    use crate::auth::{authenticate, AuthMode};
    use crate::models::{Credentials, NewTask, Session, TaskId, User};
    use crate::session::{MemorySessionStore, SessionContext};
    use crate::store::{Phase, TaskBoard};
    use crate::sync;

    fn can_bind_localhost() -> bool {
        std::net::TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn session(token: &str) -> Session {
        Session {
            token: token.to_string(),
            user: User { email: "a@b.c".into(), id: "a@b.c".into() },
        }
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials { email: email.into(), password: password.into() }
    }

    async fn setup() -> (MockServer, ApiClient) {
        let server = MockServer::start().await;
        let api = ApiClient::new(server.uri());
        (server, api)
    }

    fn anonymous() -> SessionContext {
        SessionContext::new(Arc::new(MemorySessionStore::default()))
    }

    fn signed_in(token: &str) -> SessionContext {
        SessionContext::new(Arc::new(MemorySessionStore::with_session(session(token))))
    }

    fn has_no_auth_header(req: &Request) -> bool {
        !req.headers.contains_key("authorization")
    }

    // ========================
    // Auth
    // ========================

    #[tokio::test]
    async fn test_sign_in_persists_session() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let (server, api) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/sign-in"))
            .and(body_json(json!({"email": "a@b.c", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let store = Arc::new(MemorySessionStore::default());
        let sessions = SessionContext::new(store.clone());
        let session = authenticate(&api, &sessions, AuthMode::SignIn, credentials("a@b.c", "pw"))
            .await
            .expect("sign in");

        assert_eq!(session.token, "tok-1");
        assert_eq!(session.user.id, "a@b.c");
        assert_eq!(sessions.get_session(), Some(session));
        assert_eq!(store.writes(), 1);
    }

    #[tokio::test]
    async fn test_sign_up_uses_returned_identity() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let (server, api) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/sign-up"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "tok-2",
                "user": {"email": "new@b.c", "id": "u-17"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let sessions = anonymous();
        authenticate(&api, &sessions, AuthMode::SignUp, credentials("new@b.c", "pw"))
            .await
            .expect("sign up");

        assert_eq!(sessions.get_session().unwrap().user.id, "u-17");
    }

    #[tokio::test]
    async fn test_wrong_password_surfaces_detail() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let (server, api) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/sign-in"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"detail": "Invalid credentials"})),
            )
            .mount(&server)
            .await;

        let store = Arc::new(MemorySessionStore::default());
        let sessions = SessionContext::new(store.clone());
        let err = authenticate(&api, &sessions, AuthMode::SignIn, credentials("a@b.c", "bad"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(sessions.get_session().is_none());
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn test_auth_failure_without_detail() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let (server, api) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/sign-up"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let err = api.sign_up(&credentials("a@b.c", "pw")).await.unwrap_err();
        assert_eq!(err, ApiError::Rejected { status: 500, detail: None });
        assert_eq!(err.to_string(), "Authentication failed");
    }

    // ========================
    // Task list
    // ========================

    #[tokio::test]
    async fn test_load_sends_bearer_token() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let (server, api) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "1", "title": "Buy milk", "completed": false}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let tasks = sync::load(&api, &signed_in("tok-1")).await.expect("load");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Buy milk");
    }

    #[tokio::test]
    async fn test_anonymous_load_has_no_auth_header() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let (server, api) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .and(has_no_auth_header)
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let tasks = sync::load(&api, &anonymous()).await.expect("load");
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_load_prompts_login() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let (server, api) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "nope"})))
            .mount(&server)
            .await;

        let mut board = TaskBoard::default();
        board.finish_load(sync::load(&api, &signed_in("stale")).await);

        assert_eq!(board.phase, Phase::LoginRequired);
        assert_eq!(board.error.as_deref(), Some("Please login to see your tasks"));
        assert!(board.tasks.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_generic_fetch_failure() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let (server, api) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = api.list_tasks(None).await.unwrap_err();
        assert_eq!(err, ApiError::Status { action: Action::FetchTasks, status: 503 });
    }

    #[tokio::test]
    async fn test_non_array_payload_is_empty() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let (server, api) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tasks": []})))
            .mount(&server)
            .await;

        assert!(api.list_tasks(None).await.expect("load").is_empty());
    }

    #[tokio::test]
    async fn test_refetch_is_identical() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let (server, api) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2, "title": "B", "completed": true},
                {"id": 1, "title": "A", "completed": false}
            ])))
            .expect(2)
            .mount(&server)
            .await;

        let sessions = anonymous();
        let first = sync::load(&api, &sessions).await.expect("first load");
        let second = sync::load(&api, &sessions).await.expect("second load");
        assert_eq!(first, second);
        assert_eq!(first[0].id, TaskId::new("2"));
    }

    #[tokio::test]
    async fn test_add_appends_server_task() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let (server, api) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/tasks"))
            .and(body_json(json!({"title": "Walk dog"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 12, "title": "Walk dog", "completed": false
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut board = TaskBoard::default();
        board.finish_load(Ok(Vec::new()));
        let task = NewTask::parse("Walk dog").unwrap();
        assert!(board.finish_add(sync::add(&api, &anonymous(), &task).await));

        assert_eq!(board.tasks.len(), 1);
        assert_eq!(board.tasks[0].id.as_str(), "12");
    }

    #[tokio::test]
    async fn test_toggle_sends_flipped_flag() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let (server, api) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "1", "title": "Buy milk", "completed": false}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/tasks/1"))
            .and(body_json(json!({"completed": true})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let sessions = anonymous();
        let mut board = TaskBoard::default();
        board.finish_load(sync::load(&api, &sessions).await);

        let id = TaskId::new("1");
        board.finish_toggle(&id, sync::toggle(&api, &sessions, &id, false).await);

        assert!(board.tasks[0].completed);
        assert_eq!(board.tasks[0].title, "Buy milk");
    }

    #[tokio::test]
    async fn test_mutation_picks_up_refreshed_token() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let (server, api) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/api/tasks/5"))
            .and(header("authorization", "Bearer fresh"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let sessions = signed_in("old");
        sessions.set_session(&session("fresh"));
        sync::remove(&api, &sessions, &TaskId::new("5")).await.expect("delete");
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_task() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let (server, api) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/api/tasks/1"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Task not found"})))
            .mount(&server)
            .await;

        let id = TaskId::new("1");
        let mut board = TaskBoard::default();
        board.finish_load(Ok(vec![crate::models::Task {
            id: id.clone(),
            title: "Keep".into(),
            completed: false,
        }]));
        board.finish_remove(&id, sync::remove(&api, &anonymous(), &id).await);

        assert_eq!(board.tasks.len(), 1);
        assert_eq!(board.error.as_deref(), Some("Failed to delete task"));
    }

    #[tokio::test]
    async fn test_ids_are_path_encoded() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let (server, api) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/api/tasks/a%2Fb"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        api.delete_task(None, &TaskId::new("a/b")).await.expect("delete");
    }

    #[tokio::test]
    async fn test_unreachable_server_uses_action_message() {
        // Port 9 (discard) on localhost is expected to refuse connections
        let api = ApiClient::new("http://127.0.0.1:9");
        let err = api.create_task(None, &NewTask::parse("x").unwrap()).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport { action: Action::CreateTask, .. }));
        assert_eq!(err.to_string(), "Failed to create task");
    }
}
