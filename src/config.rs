use multiversx_sc::{api::ManagedTypeApi, types::BigUint};

// ============================================================
// Constants
// ============================================================

/// 1 EGLD in its smallest denomination
pub const ONE_EGLD: u64 = 1_000_000_000_000_000_000;

/// Airline registration fee in whole EGLD. The amount in the smallest
/// denomination exceeds `i64::MAX`, so it only exists as a `BigUint`.
pub const AIRLINE_REGISTRATION_FEE_EGLD: u64 = 10;

/// Upper bound on the premium held by a single policy: 1 EGLD
pub const MAX_INSURANCE: u64 = ONE_EGLD;

/// Exact fee an oracle pays to register: 1 EGLD
pub const ORACLE_REGISTRATION_FEE: u64 = ONE_EGLD;

/// Active airline count from which admission needs multiparty consensus
pub const MULTIPARTY_THRESHOLD: u32 = 4;

/// Matching oracle responses needed to finalize a flight status
pub const MIN_RESPONSES: u32 = 3;

/// Oracle indexes are drawn from 0..ORACLE_INDEX_RANGE
pub const ORACLE_INDEX_RANGE: u8 = 10;

/// Distinct indexes assigned to each oracle
pub const ORACLE_INDEX_COUNT: usize = 3;

/// Fee an airline pays to take part in the registry: 10 EGLD
pub fn airline_registration_fee<M: ManagedTypeApi>() -> BigUint<M> {
    &BigUint::<M>::from(ONE_EGLD) * AIRLINE_REGISTRATION_FEE_EGLD
}

/// Admission votes a pending airline needs, given the current active count.
///
/// A single incumbent may admit newcomers until the registry holds
/// `MULTIPARTY_THRESHOLD` airlines; past that a majority is required.
pub fn admission_quorum(active_count: u32) -> u32 {
    if active_count < MULTIPARTY_THRESHOLD {
        1
    } else {
        (active_count + 1) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_quorum_is_single_vote() {
        for active in 0..MULTIPARTY_THRESHOLD {
            assert_eq!(admission_quorum(active), 1);
        }
    }

    #[test]
    fn test_majority_quorum_rounds_up() {
        assert_eq!(admission_quorum(4), 2);
        assert_eq!(admission_quorum(5), 3);
        assert_eq!(admission_quorum(6), 3);
        assert_eq!(admission_quorum(7), 4);
    }

    #[test]
    fn test_fee_constants() {
        assert_eq!(AIRLINE_REGISTRATION_FEE_EGLD, 10);
        assert_eq!(MAX_INSURANCE, ORACLE_REGISTRATION_FEE);
        // Small-integer operands must stay within i64 on the VM.
        assert!(ONE_EGLD <= i64::MAX as u64);
    }
}
