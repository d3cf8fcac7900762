#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, patch},
};
use serde_json::{Value, json};

// In-process stand-in for the remote POS backend. It owns the menu catalog,
// reprices submitted orders from it (10% tax), and records every order
// payload it receives so tests can assert on the wire shape.
#[derive(Clone)]
pub struct Stub(pub Arc<Mutex<StubState>>);

pub struct StubState {
    pub menu: Vec<Value>,
    pub categories: Vec<Value>,
    pub orders: Vec<Value>,
    pub received: Vec<Value>,
    pub fail_next_submit: bool,
    seq: u32,
}

impl StubState {
    fn new() -> Self {
        Self {
            menu: vec![
                json!({"_id": "m1", "name": "Pad Thai", "price": 1000, "category": "c-mains"}),
                json!({"_id": "m2", "name": "Green Curry", "price": 1250, "category": "c-mains"}),
                json!({"_id": "m3", "name": "Thai Iced Tea", "price": 450,
                       "category": {"_id": "c-drinks", "name": "Drinks"}, "available": false}),
            ],
            categories: vec![
                json!({"_id": "c-mains", "name": "Mains"}),
                json!({"_id": "c-drinks", "name": "Drinks"}),
            ],
            orders: Vec::new(),
            received: Vec::new(),
            fail_next_submit: false,
            seq: 0,
        }
    }
}

impl Stub {
    pub fn fail_next_submit(&self) {
        self.0.lock().unwrap().fail_next_submit = true;
    }

    pub fn received(&self) -> Vec<Value> {
        self.0.lock().unwrap().received.clone()
    }
}

pub async fn spawn_stub() -> (String, Stub) {
    let stub = Stub(Arc::new(Mutex::new(StubState::new())));
    let app = Router::new()
        .route("/menu/item", get(list_menu))
        .route("/menu/category", get(list_categories))
        .route("/orders", axum::routing::post(create_order).get(list_orders))
        .route("/orders/kitchen", get(kitchen_queue))
        .route("/orders/{id}/status", patch(update_status))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), stub)
}

fn page_params(params: &HashMap<String, String>) -> (i64, i64) {
    let page = params.get("page").and_then(|v| v.parse().ok()).unwrap_or(1);
    let limit = params.get("limit").and_then(|v| v.parse().ok()).unwrap_or(20);
    (page, limit)
}

fn envelope(items: &[Value], page: i64, limit: i64) -> Value {
    let total = items.len() as i64;
    let total_pages = if total == 0 { 1 } else { (total + limit - 1) / limit };
    let start = ((page - 1) * limit).clamp(0, total) as usize;
    let end = (start + limit as usize).min(items.len());
    json!({
        "data": items[start..end].to_vec(),
        "pagination": {
            "currentPage": page,
            "totalPages": total_pages,
            "totalItems": total,
            "limit": limit,
        }
    })
}

fn category_id(item: &Value) -> Option<&str> {
    let category = item.get("category")?;
    category.as_str().or_else(|| category["_id"].as_str())
}

fn status_name(order: &Value) -> &str {
    let status = &order["status"];
    status
        .as_str()
        .or_else(|| status["name"].as_str())
        .unwrap_or("")
}

async fn list_menu(
    State(stub): State<Stub>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let state = stub.0.lock().unwrap();
    let (page, limit) = page_params(&params);
    let items: Vec<Value> = state
        .menu
        .iter()
        .filter(|item| match params.get("category") {
            Some(wanted) => category_id(item) == Some(wanted.as_str()),
            None => true,
        })
        .cloned()
        .collect();
    Json(envelope(&items, page, limit))
}

async fn list_categories(
    State(stub): State<Stub>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let state = stub.0.lock().unwrap();
    let (page, limit) = page_params(&params);
    Json(envelope(&state.categories, page, limit))
}

async fn create_order(
    State(stub): State<Stub>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut state = stub.0.lock().unwrap();
    state.received.push(payload.clone());

    if state.fail_next_submit {
        state.fail_next_submit = false;
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "order service unavailable"})),
        );
    }

    let inputs = payload["items"].as_array().cloned().unwrap_or_default();
    if inputs.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "order has no items"})),
        );
    }

    // Reprice every line from the catalog; client-side prices are ignored.
    let mut lines = Vec::new();
    let mut subtotal: i64 = 0;
    for input in &inputs {
        let id = input["menuItem"].as_str().unwrap_or_default();
        let quantity = input["quantity"].as_i64().unwrap_or(0);
        let Some(item) = state.menu.iter().find(|m| m["_id"] == id) else {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"message": format!("unknown menu item: {id}")})),
            );
        };
        let price = item["price"].as_i64().unwrap_or(0);
        subtotal += price * quantity;
        lines.push(json!({
            "name": item["name"],
            "quantity": quantity,
            "price": price,
        }));
    }
    let tax = (subtotal as f64 * 0.10).round() as i64;

    state.seq += 1;
    let order = json!({
        "_id": format!("ord-{}", state.seq),
        "items": lines,
        "totalAmount": subtotal + tax,
        "status": "pending",
        "type": payload["type"],
        "paymentMethod": payload["paymentMethod"],
        "clientName": payload["clientName"],
        "clientPhone": payload["clientPhone"],
        "tableId": payload.get("tableId").cloned().unwrap_or(Value::Null),
        "createdAt": chrono::Utc::now().to_rfc3339(),
    });
    state.orders.push(order.clone());
    (StatusCode::CREATED, Json(order))
}

async fn list_orders(
    State(stub): State<Stub>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let state = stub.0.lock().unwrap();
    let (page, limit) = page_params(&params);
    Json(envelope(&state.orders, page, limit))
}

async fn update_status(
    State(stub): State<Stub>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut state = stub.0.lock().unwrap();
    let Some(order) = state.orders.iter_mut().find(|o| o["_id"] == id.as_str()) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "order not found"})),
        );
    };
    // Reply with the object form of status to mirror backends that expand it.
    order["status"] = json!({"name": body["status"]});
    (StatusCode::OK, Json(order.clone()))
}

async fn kitchen_queue(State(stub): State<Stub>) -> Json<Value> {
    let state = stub.0.lock().unwrap();
    let active: Vec<Value> = state
        .orders
        .iter()
        .filter(|order| matches!(status_name(order), "pending" | "preparing" | "ready"))
        .cloned()
        .collect();
    Json(json!(active))
}
