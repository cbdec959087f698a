//! Sanitizer throughput over a realistic admin user listing.
//!
//! Each pass sanitizes 500 user rows under every standing policy, once
//! through the typed record path and once through the loose JSON path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Map, Value};

use wedplan_core::{sanitize_value, FieldPolicy};

fn user_rows(count: usize) -> Vec<Map<String, Value>> {
    (0..count)
        .map(|i| {
            let row = json!({
                "id": i,
                "email": format!("guest{}@example.com", i),
                "name": format!("Guest {}", i),
                "password_hash": "$2b$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW",
                "reset_token": null,
                "reset_token_expires": null,
                "failed_login_attempts": i % 4,
                "locked_until": null,
                "is_admin": i == 0,
                "couple_id": format!("c0ffee00-0000-4000-8000-{:012}", i / 2),
                "role": "couple",
                "created_at": "2026-03-01T12:00:00Z",
                "onboarding_step": 3
            });
            match row {
                Value::Object(map) => map,
                _ => Map::new(),
            }
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let rows = user_rows(500);
    let payload = Value::Array(rows.iter().cloned().map(Value::Object).collect());

    let mut group = c.benchmark_group("sanitize_500_users");
    for policy in FieldPolicy::ALL {
        group.bench_function(format!("records/{}", policy.name()), |b| {
            b.iter(|| policy.apply_all(black_box(&rows)))
        });
        group.bench_function(format!("json/{}", policy.name()), |b| {
            b.iter(|| sanitize_value(black_box(&payload), policy))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
