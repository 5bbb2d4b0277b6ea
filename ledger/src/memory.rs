//! In-memory ledger for tests and single-node deployments.

use crate::error::LedgerError;
use crate::Ledger;
use commons_types::Principal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A plain balance map. Minting exists only here — the core itself never
/// creates value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryLedger {
    balances: HashMap<Principal, u64>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a principal out of thin air (bootstrap / test setup).
    pub fn mint(&mut self, who: &Principal, amount: u64) -> Result<(), LedgerError> {
        let balance = self.balances.entry(who.clone()).or_insert(0);
        *balance = balance.checked_add(amount).ok_or(LedgerError::Overflow)?;
        Ok(())
    }
}

impl Ledger for MemoryLedger {
    fn balance_of(&self, who: &Principal) -> u64 {
        self.balances.get(who).copied().unwrap_or(0)
    }

    fn transfer(
        &mut self,
        from: &Principal,
        to: &Principal,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        // Both sides validated; the writes below cannot fail.
        self.balances.insert(from.clone(), available - amount);
        self.balances.insert(to.clone(), credited);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str) -> Principal {
        Principal::new(name)
    }

    #[test]
    fn unknown_principal_holds_zero() {
        let ledger = MemoryLedger::new();
        assert_eq!(ledger.balance_of(&p("nobody")), 0);
    }

    #[test]
    fn transfer_moves_value() {
        let mut ledger = MemoryLedger::new();
        ledger.mint(&p("alice"), 100).unwrap();
        ledger.transfer(&p("alice"), &p("bob"), 40).unwrap();
        assert_eq!(ledger.balance_of(&p("alice")), 60);
        assert_eq!(ledger.balance_of(&p("bob")), 40);
    }

    #[test]
    fn transfer_without_funds_changes_nothing() {
        let mut ledger = MemoryLedger::new();
        ledger.mint(&p("alice"), 30).unwrap();
        let err = ledger.transfer(&p("alice"), &p("bob"), 31).unwrap_err();
        match err {
            LedgerError::InsufficientBalance { needed, available } => {
                assert_eq!(needed, 31);
                assert_eq!(available, 30);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(ledger.balance_of(&p("alice")), 30);
        assert_eq!(ledger.balance_of(&p("bob")), 0);
    }

    #[test]
    fn self_transfer_is_a_no_op_on_balance() {
        let mut ledger = MemoryLedger::new();
        ledger.mint(&p("alice"), 50).unwrap();
        ledger.transfer(&p("alice"), &p("alice"), 20).unwrap();
        assert_eq!(ledger.balance_of(&p("alice")), 50);
    }
}
