//! Full lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every client
//! operation over real HTTP. Success values are decoded into the typed
//! records so schema drift between the crates shows up here. Also pins the
//! documented behavior that error responses decode as success values.

use serde_json::json;
use water_core::{Consumption, Payload, User, WaterClient};

fn payload(value: serde_json::Value) -> Payload {
    value.as_object().expect("payload must be an object").clone()
}

#[test]
fn consumption_lifecycle() {
    // Step 1: start mock server on a random port.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    let client = WaterClient::new(&format!("http://{addr}"));

    // Step 2: list users — should be empty.
    let users = client.list_users().unwrap();
    assert_eq!(users, json!([]));

    // Step 3: create a user and decode it as a typed record.
    let created = client
        .create_user(&payload(json!({
            "name": "Maria",
            "email": "maria@example.com"
        })))
        .unwrap();
    let maria: User = serde_json::from_value(created).unwrap();
    assert_eq!(maria.name, "Maria");
    assert_eq!(maria.email, "maria@example.com");
    let user_id = maria.id.to_string();

    // Step 4: get the created user.
    let fetched: User = serde_json::from_value(client.get_user(&user_id).unwrap()).unwrap();
    assert_eq!(fetched, maria);

    // Step 5: a 404 body still comes back as a decoded success value —
    // status codes are not inspected.
    let missing = client.get_user("9999").unwrap();
    assert_eq!(missing, json!({"error": "not found"}));

    // Step 6: a validation failure (400) behaves the same way.
    let rejected = client.create_user(&payload(json!({"name": "No Email"}))).unwrap();
    assert_eq!(rejected, json!({"error": "email required"}));

    // Step 7: record two months of consumption.
    let first = client
        .create_consumption(
            &user_id,
            &payload(json!({"year": 2024, "month": 1, "cubic_meters": 12.5})),
        )
        .unwrap();
    let first: Consumption = serde_json::from_value(first).unwrap();
    assert_eq!(first.user_id, maria.id);
    assert_eq!((first.year, first.month), (2024, 1));
    assert_eq!(first.cubic_meters, 12.5);

    client
        .create_consumption(
            &user_id,
            &payload(json!({"year": 2024, "month": 2, "cubic_meters": 11.0})),
        )
        .unwrap();

    // Step 8: a duplicate month is a server-side 500, which the client still
    // returns as a decoded value.
    let duplicate = client
        .create_consumption(
            &user_id,
            &payload(json!({"year": 2024, "month": 1, "cubic_meters": 99.0})),
        )
        .unwrap();
    assert!(duplicate["error"].as_str().unwrap().contains("duplicate"));

    // Step 9: per-user listing, ordered by (year, month).
    let rows = client.list_user_consumptions(&user_id).unwrap();
    let rows: Vec<Consumption> = serde_json::from_value(rows).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].month, 1);
    assert_eq!(rows[1].month, 2);

    // Step 10: unfiltered global listing.
    let all = client.list_consumptions(&[]).unwrap();
    assert_eq!(all.as_array().unwrap().len(), 2);

    // Step 11: filtered listing.
    let january = client
        .list_consumptions(&[("year", "2024"), ("month", "1")])
        .unwrap();
    let january: Vec<Consumption> = serde_json::from_value(january).unwrap();
    assert_eq!(january.len(), 1);
    assert_eq!(january[0].id, first.id);

    // Step 12: a filter matching nothing yields an empty array.
    let none = client.list_consumptions(&[("year", "1999")]).unwrap();
    assert_eq!(none, json!([]));
}
