//! Reservation-aware stock availability.
//!
//! Availability is on-hand minus reserved, floored at zero. The decision
//! functions are pure reads over a snapshot; two racing issues against the
//! same snapshot are serialized by the storage layer, not here.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use atelier_core::{DomainError, DomainResult, JobCardId, LocationId, UserId, ValueObject};

use crate::stock::{InventoryItem, MovementRef, MovementType, StockLevel, StockMovement};

/// Unreserved quantity available for new issuance.
///
/// Never negative, even when reservations transiently overshoot on-hand.
pub fn available_quantity(stock: StockLevel) -> Decimal {
    (stock.quantity - stock.reserved_quantity).max(Decimal::ZERO)
}

/// Whether `requested` can be satisfied from available stock.
pub fn is_available(stock: StockLevel, requested: Decimal) -> bool {
    available_quantity(stock) >= requested
}

/// Outcome of an issuance check.
///
/// `requires_override` is true exactly when the snapshot cannot cover the
/// request. If `can_issue` is also true, the request only succeeded via an
/// override: the caller must verify the actor holds override privilege and
/// must audit-log the issue.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDecision {
    pub can_issue: bool,
    pub available: Decimal,
    pub requires_override: bool,
}

impl ValueObject for IssueDecision {}

/// Decide whether `requested` can be issued from `stock`.
///
/// Issuance proceeds when stock is sufficient, or when the caller has
/// explicitly signalled an override. Permission checking for that override
/// happens outside this crate; this only surfaces the signal.
pub fn check_issue(stock: StockLevel, requested: Decimal, allow_override: bool) -> IssueDecision {
    let available = available_quantity(stock);
    let sufficient = available >= requested;

    IssueDecision {
        can_issue: sufficient || allow_override,
        available,
        requires_override: !sufficient,
    }
}

/// Command: issue stock to production or sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRequest {
    pub location_id: LocationId,
    pub quantity: Decimal,
    /// Job card consuming the stock; its reservation is released on issue.
    pub job_card_id: Option<JobCardId>,
    /// Caller-granted permission to issue beyond availability.
    pub allow_override: bool,
    pub issued_by: UserId,
    pub notes: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Everything the caller must persist atomically after an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueOutcome {
    /// Goes onto the (item, location) stock level.
    pub new_on_hand: Decimal,
    /// Reservation after release; unchanged for issues with no job card.
    pub new_reserved: Decimal,
    /// Quantity × the item's weighted-average cost at issue time.
    pub cost_of_goods: Decimal,
    pub movement: StockMovement,
    /// True when the issue went through on override. The caller must write
    /// an audit-log entry distinct from the ordinary movement.
    pub audit_required: bool,
}

/// Apply an issuance against a stock snapshot.
///
/// Insufficient stock without an override is an `InsufficientStock` error
/// carrying the available quantity; the raw decision data is available
/// through [`check_issue`] for callers that want to prompt before retrying
/// with an override.
pub fn issue(
    item: &InventoryItem,
    stock: StockLevel,
    request: &IssueRequest,
) -> DomainResult<IssueOutcome> {
    if request.quantity <= Decimal::ZERO {
        return Err(DomainError::validation("issue quantity must be positive"));
    }

    let decision = check_issue(stock, request.quantity, request.allow_override);
    if !decision.can_issue {
        return Err(DomainError::insufficient_stock(
            request.quantity,
            decision.available,
        ));
    }

    // Job-card issues consume their reservation; ad-hoc issues leave it.
    let new_reserved = if request.job_card_id.is_some() {
        (stock.reserved_quantity - request.quantity).max(Decimal::ZERO)
    } else {
        stock.reserved_quantity
    };

    if decision.requires_override {
        tracing::warn!(
            item = %item.id,
            location = %request.location_id,
            requested = %request.quantity,
            available = %decision.available,
            "stock issued on override"
        );
    } else {
        tracing::debug!(
            item = %item.id,
            location = %request.location_id,
            quantity = %request.quantity,
            "stock issued"
        );
    }

    let notes = if decision.requires_override {
        Some(format!(
            "OVERRIDE: {}",
            request.notes.as_deref().unwrap_or_default()
        ))
    } else {
        request.notes.clone()
    };

    Ok(IssueOutcome {
        new_on_hand: stock.quantity - request.quantity,
        new_reserved,
        cost_of_goods: request.quantity * item.weighted_avg_cost,
        movement: StockMovement {
            movement_type: MovementType::Issue,
            inventory_item_id: item.id,
            location_id: request.location_id,
            quantity: -request.quantity,
            unit_cost: item.weighted_avg_cost,
            reference: request.job_card_id.map(MovementRef::JobCard),
            actor: request.issued_by,
            notes,
            occurred_at: request.occurred_at,
        },
        audit_required: decision.requires_override,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::InventoryItemId;
    use rust_decimal_macros::dec;

    fn test_item(weighted_avg_cost: Decimal) -> InventoryItem {
        InventoryItem {
            id: InventoryItemId::new(),
            name: "Chiffon".to_string(),
            uom: "m".to_string(),
            weighted_avg_cost,
        }
    }

    fn test_request(quantity: Decimal) -> IssueRequest {
        IssueRequest {
            location_id: LocationId::new(),
            quantity,
            job_card_id: None,
            allow_override: false,
            issued_by: UserId::new(),
            notes: None,
            occurred_at: Utc::now(),
        }
    }

    #[test]
    fn available_is_on_hand_minus_reserved() {
        let stock = StockLevel::new(dec!(100), dec!(30));
        assert_eq!(available_quantity(stock), dec!(70));
    }

    #[test]
    fn available_is_floored_at_zero_on_reservation_overshoot() {
        let stock = StockLevel::new(dec!(10), dec!(25));
        assert_eq!(available_quantity(stock), Decimal::ZERO);
        assert!(!is_available(stock, dec!(1)));
    }

    #[test]
    fn exact_availability_is_sufficient() {
        let stock = StockLevel::new(dec!(100), dec!(30));
        assert!(is_available(stock, dec!(70)));
        assert!(!is_available(stock, dec!(70.001)));
    }

    #[test]
    fn sufficient_stock_needs_no_override() {
        let stock = StockLevel::new(dec!(100), dec!(0));
        let decision = check_issue(stock, dec!(40), false);

        assert!(decision.can_issue);
        assert!(!decision.requires_override);
        assert_eq!(decision.available, dec!(100));
    }

    #[test]
    fn insufficient_stock_without_override_is_denied() {
        let stock = StockLevel::new(dec!(100), dec!(80));
        let decision = check_issue(stock, dec!(40), false);

        assert!(!decision.can_issue);
        assert!(decision.requires_override);
        assert_eq!(decision.available, dec!(20));
    }

    #[test]
    fn override_permits_issuing_beyond_availability() {
        let stock = StockLevel::new(dec!(100), dec!(80));
        let decision = check_issue(stock, dec!(40), true);

        assert!(decision.can_issue);
        assert!(decision.requires_override);
    }

    #[test]
    fn issue_decrements_on_hand_and_prices_at_the_blended_cost() {
        let item = test_item(dec!(12.50));
        let stock = StockLevel::new(dec!(100), dec!(10));

        let outcome = issue(&item, stock, &test_request(dec!(8))).unwrap();

        assert_eq!(outcome.new_on_hand, dec!(92));
        assert_eq!(outcome.new_reserved, dec!(10));
        assert_eq!(outcome.cost_of_goods, dec!(100.00));
        assert_eq!(outcome.movement.movement_type, MovementType::Issue);
        assert_eq!(outcome.movement.quantity, dec!(-8));
        assert_eq!(outcome.movement.unit_cost, dec!(12.50));
        assert!(!outcome.audit_required);
    }

    #[test]
    fn job_card_issue_releases_its_reservation() {
        let item = test_item(dec!(5));
        let stock = StockLevel::new(dec!(100), dec!(30));
        let job_card_id = JobCardId::new();
        let request = IssueRequest {
            job_card_id: Some(job_card_id),
            ..test_request(dec!(20))
        };

        let outcome = issue(&item, stock, &request).unwrap();

        assert_eq!(outcome.new_reserved, dec!(10));
        assert_eq!(
            outcome.movement.reference,
            Some(MovementRef::JobCard(job_card_id))
        );
    }

    #[test]
    fn reservation_release_is_floored_at_zero() {
        let item = test_item(dec!(5));
        let stock = StockLevel::new(dec!(100), dec!(15));
        let request = IssueRequest {
            job_card_id: Some(JobCardId::new()),
            allow_override: true,
            ..test_request(dec!(90))
        };

        let outcome = issue(&item, stock, &request).unwrap();
        assert_eq!(outcome.new_reserved, Decimal::ZERO);
    }

    #[test]
    fn insufficient_stock_is_a_structured_error() {
        let item = test_item(dec!(5));
        let stock = StockLevel::new(dec!(100), dec!(80));

        let err = issue(&item, stock, &test_request(dec!(40))).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientStock {
                requested: dec!(40),
                available: dec!(20),
            }
        );
    }

    #[test]
    fn override_issue_is_flagged_for_audit() {
        let item = test_item(dec!(5));
        let stock = StockLevel::new(dec!(100), dec!(80));
        let request = IssueRequest {
            allow_override: true,
            notes: Some("rush order".to_string()),
            ..test_request(dec!(40))
        };

        let outcome = issue(&item, stock, &request).unwrap();

        assert!(outcome.audit_required);
        assert_eq!(outcome.movement.notes.as_deref(), Some("OVERRIDE: rush order"));
        // Overrides can take on-hand below the reservation line.
        assert_eq!(outcome.new_on_hand, dec!(60));
    }

    #[test]
    fn override_on_sufficient_stock_stays_an_ordinary_issue() {
        let item = test_item(dec!(5));
        let stock = StockLevel::new(dec!(100), dec!(0));
        let request = IssueRequest {
            allow_override: true,
            ..test_request(dec!(10))
        };

        let outcome = issue(&item, stock, &request).unwrap();
        assert!(!outcome.audit_required);
        assert_eq!(outcome.movement.notes, None);
    }

    #[test]
    fn non_positive_issue_quantity_is_rejected() {
        let item = test_item(dec!(5));
        let stock = StockLevel::new(dec!(100), dec!(0));

        let err = issue(&item, stock, &test_request(dec!(0))).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn qty() -> impl Strategy<Value = Decimal> {
            (0u32..10_000).prop_map(Decimal::from)
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: availability is never negative, whatever the
            /// reservation level.
            #[test]
            fn available_quantity_is_never_negative(
                on_hand in qty(),
                reserved in qty(),
            ) {
                let stock = StockLevel::new(on_hand, reserved);
                prop_assert!(available_quantity(stock) >= Decimal::ZERO);
            }

            /// Property: without an override, the decision agrees with
            /// `is_available`.
            #[test]
            fn decision_without_override_matches_is_available(
                on_hand in qty(),
                reserved in qty(),
                requested in qty(),
            ) {
                let stock = StockLevel::new(on_hand, reserved);
                let decision = check_issue(stock, requested, false);

                prop_assert_eq!(decision.can_issue, is_available(stock, requested));
                prop_assert_eq!(decision.requires_override, !decision.can_issue);
            }

            /// Property: an override always permits issuance at the
            /// decision level.
            #[test]
            fn override_always_permits(
                on_hand in qty(),
                reserved in qty(),
                requested in qty(),
            ) {
                let stock = StockLevel::new(on_hand, reserved);
                prop_assert!(check_issue(stock, requested, true).can_issue);
            }
        }
    }
}
