multiversx_sc::imports!();

use crate::config::MAX_INSURANCE;
use crate::errors::{
    ERR_FLIGHT_FINALIZED, ERR_FLIGHT_NOT_ELIGIBLE, ERR_INVALID_AMOUNT, ERR_NOTHING_TO_WITHDRAW,
};
use crate::types::{FlightKey, FlightStatus, InsurancePolicy};

#[multiversx_sc::module]
pub trait InsuranceModule:
    crate::operational::OperationalModule
    + crate::ledger::LedgerModule
    + crate::airlines::AirlinesModule
    + crate::flights::FlightsModule
{
    // ========================================================
    // ENDPOINT: buy
    // Premium for a registered, not yet finalized flight. A second
    // purchase tops up the same policy, still capped at 1 EGLD.
    // ========================================================

    #[endpoint(buy)]
    #[payable("EGLD")]
    fn buy(&self, airline: ManagedAddress, designator: ManagedBuffer, timestamp: u64) {
        self.require_operational();

        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        let flight_key = self.flight_key(&airline, &designator, timestamp);
        let flight = self.require_flight(&flight_key);
        require!(!flight.is_finalized(), ERR_FLIGHT_FINALIZED);

        require!(
            payment_amount > 0u64 && payment_amount <= MAX_INSURANCE,
            ERR_INVALID_AMOUNT
        );

        let policy_mapper = self.policy(&caller, &flight_key);
        let mut policy = if policy_mapper.is_empty() {
            InsurancePolicy {
                paid: BigUint::zero(),
                credited: BigUint::zero(),
                is_credited: false,
                purchased_at: self.blockchain().get_block_timestamp(),
            }
        } else {
            policy_mapper.get()
        };

        policy.paid += &payment_amount;
        require!(policy.paid <= MAX_INSURANCE, ERR_INVALID_AMOUNT);

        policy_mapper.set(&policy);
        self.flight_insurees(&flight_key).insert(caller.clone());
        self.record_premium(&payment_amount);

        self.insurance_purchased_event(&caller, &flight_key, &payment_amount);
    }

    // ========================================================
    // ENDPOINT: creditInsurees
    // Owner-triggered crediting for a flight finalized as late
    // due to the airline. Safe to call repeatedly.
    // ========================================================

    #[endpoint(creditInsurees)]
    fn credit_insurees(
        &self,
        airline: ManagedAddress,
        designator: ManagedBuffer,
        timestamp: u64,
    ) {
        self.require_operational();
        self.require_contract_owner();

        let flight_key = self.flight_key(&airline, &designator, timestamp);
        let flight = self.require_flight(&flight_key);
        require!(
            flight.status_code == FlightStatus::LateAirline.code(),
            ERR_FLIGHT_NOT_ELIGIBLE
        );

        self.credit_flight_insurees(&flight_key);
    }

    // ========================================================
    // ENDPOINT: withdrawPayout
    // Customer pulls every credited payout. Policies stay as
    // the audit trail.
    // ========================================================

    #[endpoint(withdrawPayout)]
    fn withdraw_payout(&self) {
        self.require_operational();

        let caller = self.blockchain().get_caller();
        require!(
            self.pending_payout(&caller).get() > 0u64,
            ERR_NOTHING_TO_WITHDRAW
        );

        let payout = self.take_payout(&caller);
        self.send().direct_egld(&caller, &payout);
        self.payout_withdrawn_event(&caller, &payout);
    }

    // ========================================================
    // INTERNAL: crediting
    // The `is_credited` flag, not the flight status, decides
    // whether a policy still owes a payout.
    // ========================================================

    fn credit_flight_insurees(&self, flight_key: &FlightKey<Self::Api>) {
        for customer in self.flight_insurees(flight_key).iter() {
            let policy_mapper = self.policy(&customer, flight_key);
            let mut policy = policy_mapper.get();
            if policy.is_credited {
                continue;
            }

            // 1.5x, rounded down
            let payout = (&policy.paid * 3u64) / 2u64;
            policy.credited = payout.clone();
            policy.is_credited = true;
            policy_mapper.set(&policy);

            self.credit_payout(&customer, &payout);
            self.insuree_credited_event(&customer, flight_key, &payout);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getPolicy)]
    fn get_policy(
        &self,
        customer: ManagedAddress,
        airline: ManagedAddress,
        designator: ManagedBuffer,
        timestamp: u64,
    ) -> OptionalValue<InsurancePolicy<Self::Api>> {
        let flight_key = self.flight_key(&airline, &designator, timestamp);
        let policy_mapper = self.policy(&customer, &flight_key);
        if policy_mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(policy_mapper.get())
        }
    }

    #[view(getInsureesCount)]
    fn get_insurees_count(
        &self,
        airline: ManagedAddress,
        designator: ManagedBuffer,
        timestamp: u64,
    ) -> u32 {
        let flight_key = self.flight_key(&airline, &designator, timestamp);
        self.flight_insurees(&flight_key).len() as u32
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("insurancePurchased")]
    fn insurance_purchased_event(
        &self,
        #[indexed] customer: &ManagedAddress,
        #[indexed] flight_key: &FlightKey<Self::Api>,
        amount: &BigUint,
    );

    #[event("insureeCredited")]
    fn insuree_credited_event(
        &self,
        #[indexed] customer: &ManagedAddress,
        #[indexed] flight_key: &FlightKey<Self::Api>,
        payout: &BigUint,
    );

    #[event("payoutWithdrawn")]
    fn payout_withdrawn_event(&self, #[indexed] customer: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("policy")]
    fn policy(
        &self,
        customer: &ManagedAddress,
        flight_key: &FlightKey<Self::Api>,
    ) -> SingleValueMapper<InsurancePolicy<Self::Api>>;

    #[storage_mapper("flightInsurees")]
    fn flight_insurees(
        &self,
        flight_key: &FlightKey<Self::Api>,
    ) -> UnorderedSetMapper<ManagedAddress>;
}
