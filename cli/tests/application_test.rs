//! End-to-end purchase tests.
//!
//! Runs console orders through the real `TicketService`, with recording
//! collaborators in place of seat booking and payment.
//!
//! Run with: `cargo test --test application_test`

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use cinema_tickets::{build_ticket_service, Config, ConsoleAdaptor, PurchaseOutcome, TicketOrderRequest};
use cinema_tickets_core::{
    AccountId, MAX_TICKETS, Money, PurchaseError, TicketService, TicketServiceConfig,
};
use cinema_tickets_testing::{CallLog, init_test_tracing, recording_environment};

fn create_adaptor() -> (ConsoleAdaptor<TicketService, Vec<u8>>, CallLog) {
    init_test_tracing();
    let (env, log) = recording_environment();
    (ConsoleAdaptor::new(TicketService::new(env), Vec::new()), log)
}

fn order(adult: i64, child: i64, infant: i64) -> TicketOrderRequest {
    TicketOrderRequest::new(Some(adult), Some(child), Some(infant))
}

fn printed(adaptor: ConsoleAdaptor<TicketService, Vec<u8>>) -> String {
    String::from_utf8(adaptor.into_writer()).unwrap().trim().to_string()
}

#[test]
fn test_valid_order_reserves_and_pays() {
    let (mut adaptor, log) = create_adaptor();

    let outcome = adaptor.process_purchase(1, &order(2, 0, 0)).unwrap();

    assert!(outcome.is_purchased());
    let account = AccountId::parse(Some(1)).unwrap();
    assert_eq!(log.reservations(), vec![(account, 2)]);
    assert_eq!(log.payments(), vec![(account, Money::from_units(40))]);
    assert_eq!(
        printed(adaptor),
        "Purchasing 2 tickets with 2 seats at a cost of £40 for accountId=1"
    );
}

#[test]
fn test_adult_and_child_order() {
    let (mut adaptor, _) = create_adaptor();

    adaptor.process_purchase(1, &order(1, 2, 0)).unwrap();

    assert_eq!(
        printed(adaptor),
        "Purchasing 3 tickets with 3 seats at a cost of £40 for accountId=1"
    );
}

#[test]
fn test_too_many_tickets() {
    let (mut adaptor, log) = create_adaptor();

    let outcome = adaptor.process_purchase(1, &order(10, 10, 10)).unwrap();

    assert_eq!(
        outcome,
        PurchaseOutcome::Rejected(PurchaseError::MaximumTicketsExceeded {
            maximum: MAX_TICKETS,
            requested: 30,
        })
    );
    assert!(log.is_empty());
    assert_eq!(
        printed(adaptor),
        "Tickets ordering failed - too many tickets requested maximumAllowed=20 numberOrdered=30"
    );
}

#[test]
fn test_invalid_account() {
    let (mut adaptor, log) = create_adaptor();

    let outcome = adaptor.process_purchase(-1, &order(3, 2, 3)).unwrap();

    assert_eq!(outcome, PurchaseOutcome::Rejected(PurchaseError::InvalidAccountNumber));
    assert!(log.is_empty());
    assert_eq!(printed(adaptor), "Tickets ordering failed - invalid accountNumber=-1");
}

#[test]
fn test_no_tickets() {
    let (mut adaptor, log) = create_adaptor();

    adaptor.process_purchase(1, &order(0, 0, 0)).unwrap();

    assert!(log.is_empty());
    assert_eq!(printed(adaptor), "Tickets ordering failed - no tickets were ordered");
}

#[test]
fn test_no_adults() {
    let (mut adaptor, log) = create_adaptor();

    let outcome = adaptor.process_purchase(1, &order(0, 2, 3)).unwrap();

    assert_eq!(outcome, PurchaseOutcome::Rejected(PurchaseError::NoAdultTicketsRequested));
    assert!(log.is_empty());
    assert_eq!(printed(adaptor), "Tickets ordering failed - no adult tickets were ordered");
}

#[test]
fn test_no_adults_with_invalid_account_reports_adults() {
    let (mut adaptor, log) = create_adaptor();

    adaptor.process_purchase(-1, &order(0, 2, 3)).unwrap();

    assert!(log.is_empty());
    assert_eq!(printed(adaptor), "Tickets ordering failed - no adult tickets were ordered");
}

#[test]
fn test_negative_counts_are_ignored() {
    let (mut adaptor, log) = create_adaptor();

    let outcome = adaptor.process_purchase(4, &order(2, -3, -1)).unwrap();

    assert!(outcome.is_purchased());
    assert_eq!(log.reservations(), vec![(AccountId::parse(Some(4)).unwrap(), 2)]);
}

#[test]
fn test_configured_ceiling_is_reported() {
    init_test_tracing();
    let (env, log) = recording_environment();
    let service = TicketService::with_config(TicketServiceConfig::with_max_tickets(4), env);
    let mut adaptor = ConsoleAdaptor::new(service, Vec::new());

    adaptor.process_purchase(1, &order(3, 2, 0)).unwrap();

    assert!(log.is_empty());
    assert_eq!(
        printed(adaptor),
        "Tickets ordering failed - too many tickets requested maximumAllowed=4 numberOrdered=5"
    );
}

#[test]
fn test_built_service_uses_config() {
    let config = Config::from_lookup(|key| (key == "CINEMA_MAX_TICKETS").then(|| "6".to_string()));

    let service = build_ticket_service(&config);

    assert_eq!(service.config().max_tickets, 6);
}

#[test]
fn test_built_service_accepts_valid_order() {
    init_test_tracing();
    let service = build_ticket_service(&Config::default());
    let mut adaptor = ConsoleAdaptor::new(service, Vec::new());

    let outcome = adaptor.process_purchase(1, &order(2, 3, 1)).unwrap();

    assert!(outcome.is_purchased());
    assert_eq!(
        printed(adaptor),
        "Purchasing 6 tickets with 5 seats at a cost of £70 for accountId=1"
    );
}
