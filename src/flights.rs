multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_FLIGHT, ERR_NOT_AUTHORIZED, ERR_UNKNOWN_FLIGHT};
use crate::types::{Flight, FlightKey, FlightStatus};

#[multiversx_sc::module]
pub trait FlightsModule:
    crate::operational::OperationalModule
    + crate::ledger::LedgerModule
    + crate::airlines::AirlinesModule
{
    // ========================================================
    // ENDPOINT: registerFlight
    // Caller is the operating airline. Registering a known key
    // again leaves the existing record alone.
    // ========================================================

    #[endpoint(registerFlight)]
    fn register_flight(&self, designator: ManagedBuffer, timestamp: u64) {
        self.require_operational();

        let caller = self.blockchain().get_caller();
        require!(self.is_airline(&caller), ERR_NOT_AUTHORIZED);
        require!(!designator.is_empty(), ERR_INVALID_FLIGHT);

        let flight_key = self.flight_key(&caller, &designator, timestamp);
        if !self.flights(&flight_key).is_empty() {
            return;
        }

        let flight = Flight {
            airline: caller.clone(),
            designator,
            timestamp,
            status_code: FlightStatus::Unknown.code(),
            registered_at: self.blockchain().get_block_timestamp(),
        };
        self.flights(&flight_key).set(&flight);

        self.flight_registered_event(&caller, &flight.designator, timestamp);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// keccak256(airline ‖ designator ‖ timestamp). Address and timestamp
    /// have fixed widths, so the designator boundary is unambiguous.
    fn flight_key(
        &self,
        airline: &ManagedAddress,
        designator: &ManagedBuffer,
        timestamp: u64,
    ) -> FlightKey<Self::Api> {
        let mut serialized = ManagedBuffer::new();
        serialized.append(airline.as_managed_buffer());
        serialized.append(designator);
        serialized.append_bytes(&timestamp.to_be_bytes());

        self.crypto().keccak256(&serialized)
    }

    fn require_flight(&self, flight_key: &FlightKey<Self::Api>) -> Flight<Self::Api> {
        require!(!self.flights(flight_key).is_empty(), ERR_UNKNOWN_FLIGHT);
        self.flights(flight_key).get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isFlight)]
    fn is_flight(
        &self,
        airline: ManagedAddress,
        designator: ManagedBuffer,
        timestamp: u64,
    ) -> bool {
        let flight_key = self.flight_key(&airline, &designator, timestamp);
        !self.flights(&flight_key).is_empty()
    }

    /// Unknown flights report `FlightStatus::Unknown` (0).
    #[view(getFlightStatus)]
    fn get_flight_status(
        &self,
        airline: ManagedAddress,
        designator: ManagedBuffer,
        timestamp: u64,
    ) -> u8 {
        let flight_key = self.flight_key(&airline, &designator, timestamp);
        if self.flights(&flight_key).is_empty() {
            return FlightStatus::Unknown.code();
        }
        self.flights(&flight_key).get().status_code
    }

    #[view(getFlightKey)]
    fn get_flight_key(
        &self,
        airline: ManagedAddress,
        designator: ManagedBuffer,
        timestamp: u64,
    ) -> FlightKey<Self::Api> {
        self.flight_key(&airline, &designator, timestamp)
    }

    #[view(getFlight)]
    fn get_flight(
        &self,
        airline: ManagedAddress,
        designator: ManagedBuffer,
        timestamp: u64,
    ) -> Flight<Self::Api> {
        let flight_key = self.flight_key(&airline, &designator, timestamp);
        self.require_flight(&flight_key)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("flightRegistered")]
    fn flight_registered_event(
        &self,
        #[indexed] airline: &ManagedAddress,
        #[indexed] designator: &ManagedBuffer,
        #[indexed] timestamp: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("flights")]
    fn flights(&self, flight_key: &FlightKey<Self::Api>) -> SingleValueMapper<Flight<Self::Api>>;
}
