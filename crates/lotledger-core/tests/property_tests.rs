//! Property-based tests for lotledger-core.
//!
//! These tests verify the ledger invariants hold for arbitrary operation
//! sequences using proptest.
//!
//! Run with: cargo test -p lotledger-core --test `property_tests`

use lotledger_core::Ledger;
use proptest::prelude::*;

// ============================================================================
// Arbitrary generators
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Op {
    Add { quantity: u64, unit_price: u64 },
    Withdraw { requested: u64 },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u64..=1_000, 0u64..=1_000)
            .prop_map(|(quantity, unit_price)| Op::Add {
                quantity,
                unit_price
            }),
        (0u64..=1_500).prop_map(|requested| Op::Withdraw { requested }),
    ]
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(arb_op(), 0..64)
}

/// Reference model: every unit held individually, drained from the front.
#[derive(Default)]
struct UnitModel {
    units: std::collections::VecDeque<u64>,
}

impl UnitModel {
    fn add(&mut self, quantity: u64, unit_price: u64) {
        for _ in 0..quantity {
            self.units.push_back(unit_price);
        }
    }

    fn withdraw(&mut self, requested: u64) -> u128 {
        let mut total = 0u128;
        for _ in 0..requested {
            let Some(price) = self.units.pop_front() else {
                break;
            };
            total += u128::from(price);
        }
        total
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Each withdrawal's total price equals the sum, over the units actually
    /// removed, of the price of the lot each unit came from.
    #[test]
    fn prop_totals_match_unit_model(ops in arb_ops()) {
        let mut ledger = Ledger::new();
        let mut model = UnitModel::default();

        for op in ops {
            match op {
                Op::Add { quantity, unit_price } => {
                    ledger.add(quantity, unit_price);
                    model.add(quantity, unit_price);
                }
                Op::Withdraw { requested } => {
                    prop_assert_eq!(
                        ledger.withdraw(requested).total_price,
                        model.withdraw(requested)
                    );
                }
            }
        }

        prop_assert_eq!(ledger.remaining_units(), model.units.len() as u128);
    }

    /// No lot is touched while an earlier lot still has units: everything
    /// before the head is exhausted, everything after it is untouched.
    #[test]
    fn prop_fifo_consumption_order(ops in arb_ops()) {
        let mut ledger = Ledger::new();
        let mut added = Vec::new();

        for op in ops {
            match op {
                Op::Add { quantity, unit_price } => {
                    ledger.add(quantity, unit_price);
                    added.push(quantity);
                }
                Op::Withdraw { requested } => {
                    ledger.withdraw(requested);
                }
            }

            let head = ledger.head();
            for (i, lot) in ledger.lots().iter().enumerate() {
                if i < head {
                    prop_assert!(lot.is_exhausted());
                } else if i > head {
                    prop_assert_eq!(lot.quantity, added[i]);
                }
            }
        }
    }

    /// The head index never moves backwards and quantities never grow.
    #[test]
    fn prop_head_and_quantities_monotonic(ops in arb_ops()) {
        let mut ledger = Ledger::new();
        let mut last_head = 0;
        let mut last_quantities: Vec<u64> = Vec::new();

        for op in ops {
            match op {
                Op::Add { quantity, unit_price } => ledger.add(quantity, unit_price),
                Op::Withdraw { requested } => {
                    ledger.withdraw(requested);
                }
            }

            prop_assert!(ledger.head() >= last_head);
            for (i, lot) in ledger.lots().iter().enumerate() {
                if let Some(&previous) = last_quantities.get(i) {
                    prop_assert!(lot.quantity <= previous);
                }
            }

            last_head = ledger.head();
            last_quantities = ledger.lots().iter().map(|lot| lot.quantity).collect();
        }
    }

    /// Withdrawing zero units returns zero and changes nothing.
    #[test]
    fn prop_withdraw_zero_is_identity(ops in arb_ops()) {
        let mut ledger = Ledger::new();
        for op in ops {
            match op {
                Op::Add { quantity, unit_price } => ledger.add(quantity, unit_price),
                Op::Withdraw { requested } => {
                    ledger.withdraw(requested);
                }
            }
        }

        let before = ledger.clone();
        let withdrawal = ledger.withdraw(0);
        prop_assert_eq!(withdrawal.total_price, 0);
        prop_assert_eq!(withdrawal.units, 0);
        prop_assert_eq!(ledger, before);
    }

    /// Over-asking drains everything: the total equals the value of all
    /// remaining units and the ledger ends fully exhausted.
    #[test]
    fn prop_over_withdraw_exhausts(ops in arb_ops()) {
        let mut ledger = Ledger::new();
        for op in ops {
            match op {
                Op::Add { quantity, unit_price } => ledger.add(quantity, unit_price),
                Op::Withdraw { requested } => {
                    ledger.withdraw(requested);
                }
            }
        }

        let remaining = ledger.remaining_units();
        let remaining_value: u128 = ledger
            .pending_lots()
            .iter()
            .map(lotledger_core::Lot::remaining_value)
            .sum();

        // The generator keeps totals far below u64::MAX.
        let request = u64::try_from(remaining).unwrap() + 1;
        let withdrawal = ledger.withdraw(request);
        prop_assert_eq!(u128::from(withdrawal.units), remaining);
        prop_assert_eq!(withdrawal.total_price, remaining_value);
        prop_assert!(ledger.is_exhausted());
    }
}
