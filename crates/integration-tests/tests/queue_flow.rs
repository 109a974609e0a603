//! Queue Service Integration Tests
//!
//! Exercises the full service surface the way the transport layer does:
//! join, list, get, advance, remove, and the renumbering rules that tie
//! them together.

use std::sync::Arc;

use waitline_core::application::queue::JoinRequest;
use waitline_core::application::QueueService;
use waitline_core::port::Clock;
use waitline_core::QueueError;

struct FixedClock;

impl Clock for FixedClock {
    fn today(&self) -> String {
        "26/10/2024".to_string()
    }
}

fn service() -> Arc<QueueService> {
    Arc::new(QueueService::new(Arc::new(FixedClock)))
}

fn join_req(name: &str) -> JoinRequest {
    JoinRequest {
        name: name.to_string(),
        service_type: "N".to_string(),
        entry_date: None,
    }
}

#[tokio::test]
async fn empty_queue_lists_nothing() {
    let service = service();
    assert!(service.list().await.is_empty());
}

#[tokio::test]
async fn first_join_lands_at_position_one() {
    let service = service();

    let position = service
        .join(JoinRequest {
            name: "Ana".to_string(),
            service_type: "N".to_string(),
            entry_date: Some("01/01/2025".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(position, 1);

    let listing = service.list().await;
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].position, 1);
    assert_eq!(listing[0].name, "Ana");
    assert_eq!(listing[0].entry_date, "01/01/2025");
}

#[tokio::test]
async fn joins_fill_positions_in_arrival_order() {
    let service = service();

    for (i, name) in ["Breno", "Larissa", "Karen", "Sérgio"].iter().enumerate() {
        let position = service.join(join_req(name)).await.unwrap();
        assert_eq!(position, i as u32 + 1);
    }

    let positions: Vec<u32> = service.list().await.iter().map(|e| e.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn get_reports_one_client_or_not_found() {
    let service = service();
    service.join(join_req("Ana")).await.unwrap();

    let entry = service.get(1).await.unwrap();
    assert_eq!(entry.name, "Ana");
    assert_eq!(entry.entry_date, "26/10/2024");

    assert_eq!(service.get(5).await.unwrap_err(), QueueError::NotFound(5));
}

#[tokio::test]
async fn join_validation_is_enforced_at_the_service() {
    let service = service();

    let too_long = JoinRequest {
        name: "x".repeat(21),
        service_type: "N".to_string(),
        entry_date: None,
    };
    assert!(matches!(
        service.join(too_long).await.unwrap_err(),
        QueueError::InvalidName(_)
    ));

    let bad_type = JoinRequest {
        name: "Ana".to_string(),
        service_type: "X".to_string(),
        entry_date: None,
    };
    assert_eq!(
        service.join(bad_type).await.unwrap_err(),
        QueueError::InvalidServiceType("X".to_string())
    );

    // Nothing slipped into the line.
    assert!(service.list().await.is_empty());
}

#[tokio::test]
async fn remove_closes_the_gap_behind_the_removed_client() {
    let service = service();
    for name in ["a", "b", "c", "d"] {
        service.join(join_req(name)).await.unwrap();
    }

    service.remove(2).await.unwrap();

    let listing = service.list().await;
    let positions: Vec<u32> = listing.iter().map(|e| e.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
    assert_eq!(listing[1].name, "c"); // formerly position 3
    assert_eq!(listing[2].name, "d"); // formerly position 4
}

#[tokio::test]
async fn remove_unknown_position_reports_not_found() {
    let service = service();
    service.join(join_req("a")).await.unwrap();

    assert_eq!(service.remove(9).await.unwrap_err(), QueueError::NotFound(9));
}

#[tokio::test]
async fn advance_on_empty_queue_fails() {
    let service = service();
    assert_eq!(service.advance().await.unwrap_err(), QueueError::EmptyQueue);
}

#[tokio::test]
async fn advance_moves_the_line_up_and_keeps_the_served_client_addressable() {
    let service = service();
    for name in ["a", "b", "c"] {
        service.join(join_req(name)).await.unwrap();
    }

    service.advance().await.unwrap();

    // The listing shows only the two still waiting, renumbered to 1 and 2.
    let listing = service.list().await;
    let positions: Vec<u32> = listing.iter().map(|e| e.position).collect();
    assert_eq!(positions, vec![1, 2]);
    assert_eq!(listing[0].name, "b");
    assert_eq!(listing[1].name, "c");

    // The served client kept position 1, so a lookup at 1 can resolve to
    // the served record rather than the new front of the line.
    let at_one = service.get(1).await.unwrap();
    assert_eq!(at_one.name, "a");
}

#[tokio::test]
async fn served_client_can_be_removed_by_retained_position() {
    let service = service();
    for name in ["a", "b"] {
        service.join(join_req(name)).await.unwrap();
    }
    service.advance().await.unwrap();

    // Position 1 matches the served "a" first; removing it renumbers
    // nothing (the active "b" also sits at 1, not strictly greater).
    service.remove(1).await.unwrap();

    let listing = service.list().await;
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].name, "b");
    assert_eq!(listing[0].position, 1);
}

#[tokio::test]
async fn serving_the_sole_client_shifts_the_next_join_past_them() {
    let service = service();
    service.join(join_req("a")).await.unwrap();
    service.advance().await.unwrap();

    // The served record still holds position 1 and the assignment basis
    // counts it, so the newcomer is numbered 2 and the line no longer
    // starts at 1.
    let position = service.join(join_req("b")).await.unwrap();
    assert_eq!(position, 2);

    let positions: Vec<u32> = service.list().await.iter().map(|e| e.position).collect();
    assert_eq!(positions, vec![2]);
}

#[tokio::test]
async fn full_counter_day_flow() {
    let service = service();

    // Morning: four arrivals.
    for name in ["Breno", "Larissa", "Karen", "Sérgio"] {
        service.join(join_req(name)).await.unwrap();
    }

    // Serve one, one gives up and is removed, one more arrives.
    service.advance().await.unwrap();
    service.remove(2).await.unwrap(); // Karen, renumbered from 3
    service.join(join_req("Paula")).await.unwrap();

    let listing = service.list().await;
    let names: Vec<&str> = listing.iter().map(|e| e.name.as_str()).collect();
    let positions: Vec<u32> = listing.iter().map(|e| e.position).collect();
    assert_eq!(names, vec!["Larissa", "Sérgio", "Paula"]);
    assert_eq!(positions, vec![1, 2, 3]);
}
