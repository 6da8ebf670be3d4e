use bytes::Bytes;
use pretty_assertions::assert_eq;
use roster::{NOT_FOUND_BODY, Response, Router, Status, User, UserStore, app};

const POTATO: &str = r#"{"first_name":"potato", "last_name":"white", "email":"bravopotato@gmail.com"}"#;

async fn send(app: &Router<UserStore>, method: &str, uri: &str, body: &str) -> Response {
    let req = http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Bytes::from(body.to_owned()))
        .unwrap();
    app.handle(req).await
}

fn text(res: &Response) -> &str {
    std::str::from_utf8(res.body()).unwrap()
}

fn user(res: &Response) -> User {
    serde_json::from_slice(res.body()).unwrap()
}

async fn create_potato(app: &Router<UserStore>) -> User {
    let res = send(app, "POST", "/users", POTATO).await;
    assert_eq!(res.status_code(), Status::Created);
    user(&res)
}

#[tokio::test]
async fn index_greets() {
    let app = app(UserStore::new());
    let res = send(&app, "GET", "/", "").await;
    assert_eq!(res.status_code(), Status::Ok);
    assert_eq!(text(&res), "Hello World");
}

#[tokio::test]
async fn list_of_empty_store_is_an_empty_array() {
    let app = app(UserStore::new());
    let res = send(&app, "GET", "/users", "").await;
    assert_eq!(res.status_code(), Status::Ok);
    assert_eq!(res.header("content-type"), Some("application/json"));
    assert_eq!(text(&res), "[]");
}

#[tokio::test]
async fn create_assigns_increasing_ids_and_stamps_created_at() {
    let app = app(UserStore::new());
    let before = chrono::Utc::now();

    let res = send(&app, "POST", "/users", POTATO).await;
    assert_eq!(res.status_code(), Status::Created);
    assert_eq!(res.header("content-type"), Some("application/json"));
    let first = user(&res);
    assert_eq!(first.id, 1);
    assert_eq!(first.first_name, "potato");
    assert_eq!(first.last_name, "white");
    assert_eq!(first.email, "bravopotato@gmail.com");
    assert!(first.created_at >= before);

    let second = create_potato(&app).await;
    assert!(second.id > first.id);
}

#[tokio::test]
async fn create_accepts_partial_body() {
    let app = app(UserStore::new());
    let res = send(&app, "POST", "/users", r#"{"email":"x@example.com"}"#).await;
    assert_eq!(res.status_code(), Status::Created);
    let created = user(&res);
    assert_eq!(created.email, "x@example.com");
    assert_eq!(created.first_name, "");
}

#[tokio::test]
async fn null_body_creates_an_empty_user_and_updates_nothing() {
    let app = app(UserStore::new());

    let res = send(&app, "POST", "/users", "null").await;
    assert_eq!(res.status_code(), Status::Created);
    let empty = user(&res);
    assert_eq!((empty.id, empty.first_name.as_str(), empty.email.as_str()), (1, "", ""));

    let created = create_potato(&app).await;
    let uri = format!("/users/{}", created.id);
    let res = send(&app, "PUT", &uri, "null").await;
    assert_eq!(res.status_code(), Status::Ok);
    assert_eq!(user(&send(&app, "GET", &uri, "").await), created);
}

#[tokio::test]
async fn create_rejects_malformed_json_with_error_text() {
    let store = UserStore::new();
    let app = app(store.clone());

    for body in ["", "{", "[1,2]", r#"{"first_name": 5}"#] {
        let res = send(&app, "POST", "/users", body).await;
        assert_eq!(res.status_code(), Status::BadRequest, "body {body:?}");
        assert!(res.header("content-type").unwrap().starts_with("text/plain"));
        assert!(!res.body().is_empty());
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn read_after_create_returns_identical_record() {
    let app = app(UserStore::new());
    let created = create_potato(&app).await;

    let res = send(&app, "GET", &format!("/users/{}", created.id), "").await;
    assert_eq!(res.status_code(), Status::Ok);
    assert_eq!(res.header("content-type"), Some("application/json"));
    assert_eq!(user(&res), created);
}

#[tokio::test]
async fn read_of_unknown_id_is_ok_with_message() {
    let app = app(UserStore::new());
    for id in ["89", "56"] {
        let res = send(&app, "GET", &format!("/users/{id}"), "").await;
        assert_eq!(res.status_code(), Status::Ok);
        assert_eq!(text(&res), format!("No User ID:{id}"));
    }
}

#[tokio::test]
async fn non_numeric_ids_are_bad_requests() {
    let app = app(UserStore::new());
    for (method, body) in [("GET", ""), ("DELETE", ""), ("PUT", POTATO)] {
        let res = send(&app, method, "/users/abc", body).await;
        assert_eq!(res.status_code(), Status::BadRequest, "{method}");
        assert_eq!(text(&res), "invalid digit found in string");
    }

    let res = send(&app, "GET", "/users/99999999999999999999999", "").await;
    assert_eq!(res.status_code(), Status::BadRequest);
}

#[tokio::test]
async fn ids_outside_the_token_pattern_do_not_match() {
    let app = app(UserStore::new());
    for uri in ["/users/-1", "/users/1.5", "/users/a_b", "/users/ABC", "/users/1F"] {
        let res = send(&app, "GET", uri, "").await;
        assert_eq!(res.status_code(), Status::NotFound, "{uri}");
        assert_eq!(text(&res), NOT_FOUND_BODY);
    }
}

#[tokio::test]
async fn delete_of_unknown_id_leaves_store_untouched() {
    let store = UserStore::new();
    let app = app(store.clone());
    let created = create_potato(&app).await;

    let res = send(&app, "DELETE", "/users/2", "").await;
    assert_eq!(res.status_code(), Status::Ok);
    assert_eq!(text(&res), "No User ID:2");
    assert_eq!(store.list(), vec![created]);
}

#[tokio::test]
async fn delete_removes_the_user() {
    let app = app(UserStore::new());
    let created = create_potato(&app).await;
    let uri = format!("/users/{}", created.id);

    let res = send(&app, "DELETE", &uri, "").await;
    assert_eq!(res.status_code(), Status::Ok);
    assert_eq!(text(&res), format!("Deleted User ID:{}", created.id));

    let res = send(&app, "GET", &uri, "").await;
    assert_eq!(text(&res), format!("No User ID:{}", created.id));

    let res = send(&app, "DELETE", &uri, "").await;
    assert_eq!(text(&res), format!("No User ID:{}", created.id));
}

#[tokio::test]
async fn update_merges_non_empty_fields() {
    let app = app(UserStore::new());
    let created = create_potato(&app).await;
    let uri = format!("/users/{}", created.id);

    let res = send(&app, "PUT", &uri, r#"{"first_name":"carrot"}"#).await;
    assert_eq!(res.status_code(), Status::Ok);
    assert!(res.body().is_empty());

    let fetched = user(&send(&app, "GET", &uri, "").await);
    assert_eq!(fetched, User { first_name: "carrot".into(), ..created });
}

#[tokio::test]
async fn update_with_full_record_keeps_id_and_created_at() {
    let app = app(UserStore::new());
    let created = create_potato(&app).await;
    let uri = format!("/users/{}", created.id);

    let mut changed = created.clone();
    changed.first_name = "carrot".into();
    changed.email = "carrot@example.com".into();
    let mut body = serde_json::to_value(&changed).unwrap();
    body["id"] = 77.into();
    body["created_at"] = "2000-01-01T00:00:00Z".into();

    let res = send(&app, "PUT", &uri, &body.to_string()).await;
    assert_eq!(res.status_code(), Status::Ok);
    assert_eq!(user(&send(&app, "GET", &uri, "").await), changed);
}

#[tokio::test]
async fn update_of_unknown_id_is_no_content_and_mutates_nothing() {
    let store = UserStore::new();
    let app = app(store.clone());

    let res = send(&app, "PUT", "/users/1", POTATO).await;
    assert_eq!(res.status_code(), Status::NoContent);
    assert!(res.body().is_empty());
    assert!(store.is_empty());
}

#[tokio::test]
async fn update_rejects_malformed_json() {
    let app = app(UserStore::new());
    let created = create_potato(&app).await;
    let uri = format!("/users/{}", created.id);

    let res = send(&app, "PUT", &uri, "not json").await;
    assert_eq!(res.status_code(), Status::BadRequest);
    assert_eq!(user(&send(&app, "GET", &uri, "").await), created);
}

#[tokio::test]
async fn list_returns_every_created_user() {
    let app = app(UserStore::new());
    let mut created = Vec::new();
    for i in 0..5 {
        let body = format!(r#"{{"first_name":"user{i}"}}"#);
        created.push(user(&send(&app, "POST", "/users", &body).await));
    }

    let res = send(&app, "GET", "/users", "").await;
    let listed: Vec<User> = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(listed, created);
}

#[tokio::test]
async fn unregistered_routes_and_methods() {
    let app = app(UserStore::new());

    let res = send(&app, "GET", "/accounts", "").await;
    assert_eq!(res.status_code(), Status::NotFound);

    let res = send(&app, "PATCH", "/users/1", "{}").await;
    assert_eq!(res.status_code(), Status::MethodNotAllowed);
    assert_eq!(res.header("allow"), Some("DELETE, GET, PUT"));

    let res = send(&app, "DELETE", "/users", "").await;
    assert_eq!(res.status_code(), Status::MethodNotAllowed);
    assert_eq!(res.header("allow"), Some("GET, POST"));
}
