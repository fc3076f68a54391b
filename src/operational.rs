multiversx_sc::imports!();

use crate::errors::{ERR_CONTRACT_PAUSED, ERR_NOT_AUTHORIZED};

#[multiversx_sc::module]
pub trait OperationalModule {
    // ========================================================
    // ENDPOINT: setOperatingStatus
    // Owner-only kill switch. Finalized buckets and credited
    // policies are untouched by a toggle.
    // ========================================================

    #[endpoint(setOperatingStatus)]
    fn set_operating_status(&self, operational: bool) {
        self.require_contract_owner();

        self.operational().set(operational);
        self.operating_status_changed_event(operational);
    }

    #[view(isOperational)]
    fn is_operational(&self) -> bool {
        self.operational().get()
    }

    // ========================================================
    // INTERNAL: guards
    // ========================================================

    /// Must run before any other check in a mutating endpoint.
    fn require_operational(&self) {
        require!(self.operational().get(), ERR_CONTRACT_PAUSED);
    }

    fn require_contract_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address(),
            ERR_NOT_AUTHORIZED
        );
    }

    #[event("operatingStatusChanged")]
    fn operating_status_changed_event(&self, #[indexed] operational: bool);

    #[storage_mapper("operational")]
    fn operational(&self) -> SingleValueMapper<bool>;
}
