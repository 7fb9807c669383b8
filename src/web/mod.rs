//! Request routing and dispatch.
//!
//! The web layer is independent of the HTTP transport: `server` turns
//! socket traffic into [`Request`] values and writes back the [`Response`]
//! returned by [`dispatch`].

pub mod dtos;
pub mod forms;
pub mod handlers;
pub mod views;

use crate::db::Database;
use crate::error::AppError;
use crate::validation::parse_integer;
use forms::Form;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Per-request handle to shared state.
#[derive(Clone)]
pub struct AppContext {
    pub db: Arc<Mutex<Database>>,
}

impl AppContext {
    pub fn new(db: Arc<Mutex<Database>>) -> Self {
        Self { db }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    /// Any other verb, kept as sent so it can be logged.
    Other(String),
}

impl Method {
    pub fn parse(verb: &str) -> Self {
        match verb {
            "GET" => Method::Get,
            "POST" => Method::Post,
            other => Method::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Other(verb) => write!(f, "{verb}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Request target; any query string is ignored when routing.
    pub path: String,
    /// Raw form-encoded body (empty for GET)
    pub body: String,
}

impl Request {
    pub fn get(path: &str) -> Self {
        Self { method: Method::Get, path: path.to_string(), body: String::new() }
    }

    pub fn post(path: &str, body: &str) -> Self {
        Self { method: Method::Post, path: path.to_string(), body: body.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Html { status: u16, body: String },
    Json { status: u16, body: String },
    /// 303 See Other
    Redirect { location: String },
}

impl Response {
    pub fn html(body: String) -> Self {
        Response::Html { status: 200, body }
    }

    pub fn json(body: String) -> Self {
        Response::Json { status: 200, body }
    }

    pub fn redirect(location: &str) -> Self {
        Response::Redirect { location: location.to_string() }
    }

    fn error(status: u16, message: &str) -> Self {
        Response::Html { status, body: views::error_page(status, message) }
    }

    pub fn status(&self) -> u16 {
        match self {
            Response::Html { status, .. } | Response::Json { status, .. } => *status,
            Response::Redirect { .. } => 303,
        }
    }
}

impl From<AppError> for Response {
    fn from(e: AppError) -> Self {
        let status = e.status_code();
        // Server-side failures are logged by the db helpers; keep details out of the page
        let message = if status >= 500 { "Internal error".to_string() } else { e.to_string() };
        Response::error(status, &message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Index,
    Categories,
    AddCategory,
    EditCategory(i64),
    Items,
    AddItem,
    EditItem(i64),
    Flip(i64),
    ApiListing,
}

impl Route {
    /// Match a request path. Returns `None` for unknown paths, including
    /// id segments that are not integers.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split_once('?').map_or(path, |(p, _)| p);
        let id = |segment: &str| parse_integer("id", segment).ok();

        match path {
            "/" => Some(Route::Index),
            "/categories" => Some(Route::Categories),
            "/add_category" => Some(Route::AddCategory),
            "/items" => Some(Route::Items),
            "/add_item" => Some(Route::AddItem),
            "/api/listing" => Some(Route::ApiListing),
            other => {
                let (prefix, segment) = other.rsplit_once('/')?;
                match prefix {
                    "/edit_category" => id(segment).map(Route::EditCategory),
                    "/edit_item" => id(segment).map(Route::EditItem),
                    "/flip" => id(segment).map(Route::Flip),
                    _ => None,
                }
            }
        }
    }
}

/// Route a request to its handler and turn any error into an error page.
pub fn dispatch(ctx: &AppContext, request: &Request) -> Response {
    let Some(route) = Route::parse(&request.path) else {
        return Response::error(404, "Page not found");
    };

    let result = match (route, &request.method) {
        (Route::Index, Method::Get) => handlers::index(ctx),
        (Route::ApiListing, Method::Get) => handlers::api_listing(ctx),
        (Route::Categories, Method::Get) => handlers::list_categories(ctx),
        (Route::AddCategory, Method::Get) => Ok(handlers::add_category_form()),
        (Route::AddCategory, Method::Post) => {
            handlers::create_category(ctx, &Form::parse(&request.body))
        }
        (Route::EditCategory(id), Method::Get) => handlers::edit_category_form(ctx, id),
        (Route::EditCategory(id), Method::Post) => {
            handlers::update_category(ctx, id, &Form::parse(&request.body))
        }
        (Route::Items, Method::Get) => handlers::list_items(ctx),
        (Route::AddItem, Method::Get) => handlers::add_item_form(ctx),
        (Route::AddItem, Method::Post) => handlers::create_item(ctx, &Form::parse(&request.body)),
        (Route::EditItem(id), Method::Get) => handlers::edit_item_form(ctx, id),
        (Route::EditItem(id), Method::Post) => {
            handlers::update_item(ctx, id, &Form::parse(&request.body))
        }
        (Route::Flip(id), Method::Get) => handlers::flip_item(ctx, id),
        _ => return Response::error(405, "Method not allowed"),
    };

    result.unwrap_or_else(Response::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    fn context() -> (AppContext, tempfile::TempDir) {
        let (db, dir) = setup_test_db();
        (AppContext::new(Arc::new(Mutex::new(db))), dir)
    }

    fn body(response: &Response) -> &str {
        match response {
            Response::Html { body, .. } | Response::Json { body, .. } => body.as_str(),
            Response::Redirect { location } => location.as_str(),
        }
    }

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse("/"), Some(Route::Index));
        assert_eq!(Route::parse("/categories"), Some(Route::Categories));
        assert_eq!(Route::parse("/edit_category/3"), Some(Route::EditCategory(3)));
        assert_eq!(Route::parse("/edit_item/12"), Some(Route::EditItem(12)));
        assert_eq!(Route::parse("/flip/7?x=1"), Some(Route::Flip(7)));
        assert_eq!(Route::parse("/flip/seven"), None);
        assert_eq!(Route::parse("/flip/"), None);
        assert_eq!(Route::parse("/nowhere"), None);
        assert_eq!(Route::parse("/edit_item/1/extra"), None);
    }

    #[test]
    fn test_unknown_path_is_404() {
        let (ctx, _dir) = context();
        assert_eq!(dispatch(&ctx, &Request::get("/nowhere")).status(), 404);
    }

    #[test]
    fn test_wrong_method_is_405() {
        let (ctx, _dir) = context();
        assert_eq!(dispatch(&ctx, &Request::post("/", "")).status(), 405);
        assert_eq!(dispatch(&ctx, &Request::post("/flip/1", "")).status(), 405);
    }

    #[test]
    fn test_other_verbs_keep_their_name_and_are_405() {
        assert_eq!(Method::parse("GET"), Method::Get);
        assert_eq!(Method::parse("POST"), Method::Post);

        let delete = Method::parse("DELETE");
        assert_eq!(delete, Method::Other("DELETE".to_string()));
        assert_eq!(delete.to_string(), "DELETE");

        let (ctx, _dir) = context();
        let request = Request { method: delete, path: "/items".to_string(), body: String::new() };
        assert_eq!(dispatch(&ctx, &request).status(), 405);
        assert_eq!(dispatch(&ctx, &Request { path: "/nowhere".to_string(), ..request }).status(), 404);
    }

    #[test]
    fn test_full_flow() {
        let (ctx, _dir) = context();

        let response = dispatch(&ctx, &Request::post("/add_category", "description=Produce&priority=1"));
        assert_eq!(response, Response::redirect("/add_category"));
        dispatch(&ctx, &Request::post("/add_category", "description=Dairy&priority=2"));

        let response = dispatch(
            &ctx,
            &Request::post("/add_item", "name=Apple&quantity=3&price=0.5&category_id=1"),
        );
        assert_eq!(response, Response::redirect("/add_item"));
        dispatch(&ctx, &Request::post("/add_item", "name=Milk&quantity=2&price=1000&category_id=2"));

        let index = dispatch(&ctx, &Request::get("/"));
        assert_eq!(index.status(), 200);
        let html = body(&index);
        assert!(html.contains("Total: 2,001.50"));
        let produce_at = html.find("Produce").unwrap();
        let dairy_at = html.find("Dairy").unwrap();
        assert!(produce_at < dairy_at);

        let response = dispatch(&ctx, &Request::post("/edit_category/2", "description=Dairy&priority=0"));
        assert_eq!(response, Response::redirect("/categories"));

        let html = body(&dispatch(&ctx, &Request::get("/items"))).to_string();
        assert!(html.find("Dairy").unwrap() < html.find("Produce").unwrap());
        assert!(!html.contains("Total:"));

        assert_eq!(dispatch(&ctx, &Request::get("/flip/1")), Response::redirect("/"));
    }

    #[test]
    fn test_duplicate_create_is_409() {
        let (ctx, _dir) = context();
        dispatch(&ctx, &Request::post("/add_category", "description=Produce&priority=1"));
        let response = dispatch(&ctx, &Request::post("/add_category", "description=Produce&priority=1"));
        assert_eq!(response.status(), 409);
    }

    #[test]
    fn test_malformed_input_is_400() {
        let (ctx, _dir) = context();
        dispatch(&ctx, &Request::post("/add_category", "description=Produce&priority=1"));
        let response = dispatch(
            &ctx,
            &Request::post("/add_item", "name=Apple&quantity=lots&price=0.5&category_id=1"),
        );
        assert_eq!(response.status(), 400);
        assert!(body(&response).contains("Invalid quantity"));
    }

    #[test]
    fn test_missing_ids_are_404() {
        let (ctx, _dir) = context();
        assert_eq!(dispatch(&ctx, &Request::get("/edit_item/5")).status(), 404);
        assert_eq!(dispatch(&ctx, &Request::get("/edit_category/5")).status(), 404);
        assert_eq!(dispatch(&ctx, &Request::get("/flip/5")).status(), 404);
    }

    #[test]
    fn test_forms_render() {
        let (ctx, _dir) = context();
        dispatch(&ctx, &Request::post("/add_category", "description=Produce&priority=1"));

        let add_item = dispatch(&ctx, &Request::get("/add_item"));
        assert!(body(&add_item).contains("<option value=\"1\">Produce</option>"));

        let edit_category = dispatch(&ctx, &Request::get("/edit_category/1"));
        assert!(body(&edit_category).contains("value=\"Produce\""));

        assert_eq!(dispatch(&ctx, &Request::get("/add_category")).status(), 200);
        assert_eq!(dispatch(&ctx, &Request::get("/categories")).status(), 200);
    }

    #[test]
    fn test_api_listing_json() {
        let (ctx, _dir) = context();
        dispatch(&ctx, &Request::post("/add_category", "description=Empty&priority=0"));
        dispatch(&ctx, &Request::post("/add_category", "description=Produce&priority=1"));
        dispatch(&ctx, &Request::post("/add_item", "name=Apple&quantity=3&price=0.5&category_id=2"));

        let response = dispatch(&ctx, &Request::get("/api/listing"));
        assert_eq!(response.status(), 200);

        let value: serde_json::Value = serde_json::from_str(body(&response)).unwrap();
        assert_eq!(value["total_display"], "1.50");
        assert_eq!(value["groups"][0]["category"]["description"], "Empty");
        assert_eq!(value["groups"][0]["items"].as_array().unwrap().len(), 0);
        assert_eq!(value["groups"][1]["items"][0]["name"], "Apple");
        assert_eq!(value["groups"][1]["items"][0]["done"], false);
    }
}
