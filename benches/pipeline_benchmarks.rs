//! Performance benchmarks for the leave pipeline.
//!
//! Covers the pure stages (policy evaluation and message composition) and a
//! full request through the router with the in-memory store and the log
//! transport.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tower::ServiceExt;

use leave_desk::api::{AppState, create_router};
use leave_desk::models::{EmployeeRecord, RecipientRole};
use leave_desk::pipeline::{LeavePipeline, NotificationDispatcher, compose, evaluate};
use leave_desk::store::InMemoryLeaveStore;
use leave_desk::transport::LogTransport;

fn sample_record() -> EmployeeRecord {
    EmployeeRecord {
        emp_id: "E900".to_string(),
        emp_name: "Priya Nair".to_string(),
        role: "Engineer".to_string(),
        dept: "Platform".to_string(),
        date_of_joining: NaiveDate::from_ymd_opt(2021, 4, 1).unwrap(),
        total_leaves: 12,
        applied_leaves: 3,
        status: "active".to_string(),
        email: "priya@example.com".to_string(),
        is_on_probation: false,
    }
}

fn create_test_state() -> AppState {
    let dispatcher = NotificationDispatcher::new(
        Arc::new(LogTransport::new("leave-desk@example.com")),
        Duration::from_secs(1),
    );
    AppState::new(LeavePipeline::new(
        Arc::new(InMemoryLeaveStore::new()),
        dispatcher,
        "hr-admin@example.com",
    ))
}

fn bench_policy(c: &mut Criterion) {
    c.bench_function("evaluate_policy", |b| {
        b.iter(|| {
            for applied in 0..8 {
                black_box(evaluate(black_box(applied % 2 == 0), black_box(applied)));
            }
        })
    });
}

fn bench_compose(c: &mut Criterion) {
    let record = sample_record();
    let decision = evaluate(false, 3);
    let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

    c.bench_function("compose_escalation", |b| {
        b.iter(|| {
            black_box(compose(
                black_box(&record),
                black_box(&decision),
                RecipientRole::Admin,
                today,
            ))
        })
    });
}

fn bench_submit(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "emp_id": "E900",
        "emp_name": "Priya Nair",
        "role": "Engineer",
        "dept": "Platform",
        "date_of_joining": "2021-04-01",
        "applied_leaves": 2,
        "status": "active",
        "email": "priya@example.com"
    })
    .to_string();

    c.bench_function("submit_request", |b| {
        b.to_async(&runtime).iter(|| {
            let router = router.clone();
            let body = body.clone();
            async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/employees")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response.status())
            }
        })
    });
}

criterion_group!(benches, bench_policy, bench_compose, bench_submit);
criterion_main!(benches);
