//! Route table of the service.

use crate::request::Request;
use crate::router::Router;
use crate::users::{UserStore, handlers};

/// Every route the service answers, bound to `store`.
///
/// | Method | Path | Handler |
/// |---|---|---|
/// | GET | `/` | greeting |
/// | GET | `/users` | [`handlers::list`] |
/// | POST | `/users` | [`handlers::create`] |
/// | GET | `/users/{id}` | [`handlers::show`] |
/// | PUT | `/users/{id}` | [`handlers::update`] |
/// | DELETE | `/users/{id}` | [`handlers::destroy`] |
pub fn app(store: UserStore) -> Router<UserStore> {
    Router::with_state(store)
        .get("/", index)
        .get("/users", handlers::list)
        .post("/users", handlers::create)
        .get("/users/{id}", handlers::show)
        .put("/users/{id}", handlers::update)
        .delete("/users/{id}", handlers::destroy)
}

async fn index(_req: Request, _store: UserStore) -> &'static str {
    "Hello World"
}
