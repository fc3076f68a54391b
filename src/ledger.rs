multiversx_sc::imports!();

/// Pooled balance accounting. Every EGLD the contract holds is attributed
/// to exactly one of these buckets, and payouts only ever leave through
/// `take_payout`.
#[multiversx_sc::module]
pub trait LedgerModule {
    fn record_airline_funding(&self, amount: &BigUint) {
        self.airline_funds().update(|total| *total += amount);
    }

    fn record_premium(&self, amount: &BigUint) {
        self.premium_pool().update(|total| *total += amount);
    }

    fn record_oracle_fee(&self, amount: &BigUint) {
        self.oracle_fees().update(|total| *total += amount);
    }

    fn credit_payout(&self, customer: &ManagedAddress, amount: &BigUint) {
        self.pending_payout(customer).update(|pending| *pending += amount);
        self.credited_total().update(|total| *total += amount);
    }

    /// Zeroes the customer's pending payout and returns what it held.
    fn take_payout(&self, customer: &ManagedAddress) -> BigUint {
        let amount = self.pending_payout(customer).take();
        if amount > 0u64 {
            self.withdrawn_total().update(|total| *total += &amount);
        }
        amount
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getInsurancePayment)]
    fn get_insurance_payment(&self, customer: &ManagedAddress) -> BigUint {
        self.pending_payout(customer).get()
    }

    /// (airline funds, premiums, oracle fees, credited, withdrawn)
    #[view(getPoolSummary)]
    fn get_pool_summary(&self) -> MultiValue5<BigUint, BigUint, BigUint, BigUint, BigUint> {
        (
            self.airline_funds().get(),
            self.premium_pool().get(),
            self.oracle_fees().get(),
            self.credited_total().get(),
            self.withdrawn_total().get(),
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("airlineFunds")]
    fn airline_funds(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("premiumPool")]
    fn premium_pool(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("oracleFees")]
    fn oracle_fees(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("pendingPayout")]
    fn pending_payout(&self, customer: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("creditedTotal")]
    fn credited_total(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("withdrawnTotal")]
    fn withdrawn_total(&self) -> SingleValueMapper<BigUint>;
}
