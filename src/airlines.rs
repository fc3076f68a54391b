multiversx_sc::imports!();

use crate::config::{admission_quorum, airline_registration_fee, MULTIPARTY_THRESHOLD};
use crate::errors::{
    ERR_ALREADY_ACTIVE, ERR_ALREADY_FUNDED, ERR_INSUFFICIENT_FEE, ERR_NOT_AUTHORIZED,
};
use crate::types::AirlineStatus;

#[multiversx_sc::module]
pub trait AirlinesModule:
    crate::operational::OperationalModule + crate::ledger::LedgerModule
{
    // ========================================================
    // ENDPOINT: payRegistrationFee
    // The fee admits the caller directly while the registry is
    // small; afterwards it parks the airline until enough active
    // airlines vote for it.
    // ========================================================

    #[endpoint(payRegistrationFee)]
    #[payable("EGLD")]
    fn pay_registration_fee(&self) {
        self.require_operational();

        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        require!(
            self.airline_status(&caller).get() == AirlineStatus::Unregistered,
            ERR_ALREADY_FUNDED
        );
        let required_fee: BigUint = airline_registration_fee();
        require!(payment_amount >= required_fee, ERR_INSUFFICIENT_FEE);

        self.funded_amount(&caller).set(&payment_amount);
        self.record_airline_funding(&payment_amount);
        self.airline_funded_event(&caller, &payment_amount);

        if self.active_airline_count() < MULTIPARTY_THRESHOLD {
            self.activate_airline(&caller);
        } else {
            self.airline_status(&caller).set(AirlineStatus::PendingFunding);
        }
    }

    // ========================================================
    // ENDPOINT: registerAirline
    // An active airline votes to admit a candidate that already
    // paid its fee. Repeat votes are ignored.
    // ========================================================

    #[endpoint(registerAirline)]
    fn register_airline(&self, candidate: ManagedAddress) {
        self.require_operational();

        let caller = self.blockchain().get_caller();
        require!(self.is_airline(&caller), ERR_NOT_AUTHORIZED);

        match self.airline_status(&candidate).get() {
            AirlineStatus::Active => sc_panic!(ERR_ALREADY_ACTIVE),
            // Votes only count once the fee is on the table.
            AirlineStatus::Unregistered => {}
            AirlineStatus::PendingFunding => {
                if !self.admission_votes(&candidate).insert(caller.clone()) {
                    return;
                }

                let votes = self.admission_votes(&candidate).len() as u32;
                self.airline_vote_event(&candidate, &caller, votes);

                if votes >= admission_quorum(self.active_airline_count()) {
                    self.activate_airline(&candidate);
                }
            }
        }
    }

    // ========================================================
    // ENDPOINT: authorizeCaller / deauthorizeCaller
    // Governing callers allowed to read the airline count.
    // ========================================================

    #[endpoint(authorizeCaller)]
    fn authorize_caller(&self, address: ManagedAddress) {
        self.require_operational();
        self.require_contract_owner();

        if self.authorized_callers().insert(address.clone()) {
            self.caller_authorized_event(&address);
        }
    }

    #[endpoint(deauthorizeCaller)]
    fn deauthorize_caller(&self, address: ManagedAddress) {
        self.require_operational();
        self.require_contract_owner();

        if self.authorized_callers().swap_remove(&address) {
            self.caller_deauthorized_event(&address);
        }
    }

    /// Restricted read: only authorized governing callers may see the count.
    #[endpoint(getAirlinesCount)]
    fn get_airlines_count(&self) -> u32 {
        let caller = self.blockchain().get_caller();
        require!(
            self.authorized_callers().contains(&caller),
            ERR_NOT_AUTHORIZED
        );

        self.active_airline_count()
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn activate_airline(&self, airline: &ManagedAddress) {
        self.airline_status(airline).set(AirlineStatus::Active);
        self.active_airlines().insert(airline.clone());
        self.airline_activated_event(airline, self.active_airline_count());
    }

    fn active_airline_count(&self) -> u32 {
        self.active_airlines().len() as u32
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isAirline)]
    fn is_airline(&self, airline: &ManagedAddress) -> bool {
        self.airline_status(airline).get() == AirlineStatus::Active
    }

    #[view(getAirlineStatus)]
    fn get_airline_status(&self, airline: &ManagedAddress) -> AirlineStatus {
        self.airline_status(airline).get()
    }

    #[view(getFundedAmount)]
    fn get_funded_amount(&self, airline: &ManagedAddress) -> BigUint {
        self.funded_amount(airline).get()
    }

    #[view(getAdmissionVotes)]
    fn get_admission_votes(&self, candidate: &ManagedAddress) -> u32 {
        self.admission_votes(candidate).len() as u32
    }

    #[view(hasVotedFor)]
    fn has_voted_for(&self, candidate: &ManagedAddress, voter: &ManagedAddress) -> bool {
        self.admission_votes(candidate).contains(voter)
    }

    #[view(isAuthorizedCaller)]
    fn is_authorized_caller(&self, address: &ManagedAddress) -> bool {
        self.authorized_callers().contains(address)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("airlineFunded")]
    fn airline_funded_event(&self, #[indexed] airline: &ManagedAddress, amount: &BigUint);

    #[event("airlineVote")]
    fn airline_vote_event(
        &self,
        #[indexed] candidate: &ManagedAddress,
        #[indexed] voter: &ManagedAddress,
        votes: u32,
    );

    #[event("airlineActivated")]
    fn airline_activated_event(&self, #[indexed] airline: &ManagedAddress, active_count: u32);

    #[event("callerAuthorized")]
    fn caller_authorized_event(&self, #[indexed] address: &ManagedAddress);

    #[event("callerDeauthorized")]
    fn caller_deauthorized_event(&self, #[indexed] address: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("airlineStatus")]
    fn airline_status(&self, airline: &ManagedAddress) -> SingleValueMapper<AirlineStatus>;

    #[storage_mapper("fundedAmount")]
    fn funded_amount(&self, airline: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("activeAirlines")]
    fn active_airlines(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Insertion-ordered voters per candidate
    #[storage_mapper("admissionVotes")]
    fn admission_votes(&self, candidate: &ManagedAddress) -> SetMapper<ManagedAddress>;

    #[storage_mapper("authorizedCallers")]
    fn authorized_callers(&self) -> UnorderedSetMapper<ManagedAddress>;
}
