multiversx_sc::imports!();

use crate::config::{
    MIN_RESPONSES, ORACLE_INDEX_COUNT, ORACLE_INDEX_RANGE, ORACLE_REGISTRATION_FEE,
};
use crate::errors::{
    ERR_BUCKET_SEALED, ERR_DUPLICATE_SUBMISSION, ERR_FLIGHT_FINALIZED, ERR_INVALID_ORACLE_FEE,
    ERR_INVALID_STATUS_CODE, ERR_ORACLE_ALREADY_REGISTERED, ERR_ORACLE_NOT_REGISTERED,
    ERR_UNAUTHORIZED_INDEX, ERR_UNKNOWN_REQUEST,
};
use crate::types::{FlightKey, FlightStatus, OracleIndexes, OracleRequest, RequestKey};

/// Oracle consensus: a status request opens one bucket per (index, flight),
/// only oracles holding that index may answer it, and the first status
/// code to collect `MIN_RESPONSES` matching answers seals the bucket and
/// finalizes the flight.
#[multiversx_sc::module]
pub trait OraclesModule:
    crate::operational::OperationalModule
    + crate::ledger::LedgerModule
    + crate::airlines::AirlinesModule
    + crate::flights::FlightsModule
    + crate::insurance::InsuranceModule
{
    // ========================================================
    // ENDPOINT: registerOracle
    // ========================================================

    #[endpoint(registerOracle)]
    #[payable("EGLD")]
    fn register_oracle(&self) {
        self.require_operational();

        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        require!(
            self.oracle_indexes(&caller).is_empty(),
            ERR_ORACLE_ALREADY_REGISTERED
        );
        require!(
            payment_amount == ORACLE_REGISTRATION_FEE,
            ERR_INVALID_ORACLE_FEE
        );

        let indexes = self.generate_indexes();
        self.oracle_indexes(&caller).set(indexes);
        self.record_oracle_fee(&payment_amount);

        self.oracle_registered_event(&caller, indexes[0], indexes[1], indexes[2]);
    }

    // ========================================================
    // ENDPOINT: fetchFlightStatus
    // Broadcasts a request carrying a random index. Oracles
    // holding that index answer via submitOracleResponse.
    // ========================================================

    #[endpoint(fetchFlightStatus)]
    fn fetch_flight_status(
        &self,
        airline: ManagedAddress,
        designator: ManagedBuffer,
        timestamp: u64,
    ) -> u8 {
        self.require_operational();

        let flight_key = self.flight_key(&airline, &designator, timestamp);
        let flight = self.require_flight(&flight_key);
        require!(!flight.is_finalized(), ERR_FLIGHT_FINALIZED);

        let mut rand_source = RandomnessSource::new();
        let index = rand_source.next_u8_in_range(0, ORACLE_INDEX_RANGE);

        let request_key = self.request_key(index, &flight_key);
        if self.oracle_requests(&request_key).is_empty() {
            let request = OracleRequest {
                index,
                flight_key,
                requester: self.blockchain().get_caller(),
                requested_at: self.blockchain().get_block_timestamp(),
                is_open: true,
                status_code: FlightStatus::Unknown.code(),
            };
            self.oracle_requests(&request_key).set(&request);
        }

        self.oracle_request_event(index, &airline, &designator, timestamp);

        index
    }

    // ========================================================
    // ENDPOINT: submitOracleResponse
    // Sealing happens on the response that brings a status code
    // to MIN_RESPONSES; later responses are rejected, so a flight
    // is finalized and credited at most once.
    // ========================================================

    #[endpoint(submitOracleResponse)]
    fn submit_oracle_response(
        &self,
        index: u8,
        airline: ManagedAddress,
        designator: ManagedBuffer,
        timestamp: u64,
        status_code: u8,
    ) {
        self.require_operational();

        let caller = self.blockchain().get_caller();
        require!(
            self.has_oracle_index(&caller, index),
            ERR_UNAUTHORIZED_INDEX
        );

        let status = match FlightStatus::from_code(status_code) {
            Some(status) if status.is_terminal() => status,
            _ => sc_panic!(ERR_INVALID_STATUS_CODE),
        };

        let flight_key = self.flight_key(&airline, &designator, timestamp);
        let request_key = self.request_key(index, &flight_key);
        require!(
            !self.oracle_requests(&request_key).is_empty(),
            ERR_UNKNOWN_REQUEST
        );

        let mut request = self.oracle_requests(&request_key).get();
        require!(request.is_open, ERR_BUCKET_SEALED);
        // Another index bucket may already have finalized this flight.
        let flight = self.require_flight(&flight_key);
        require!(!flight.is_finalized(), ERR_BUCKET_SEALED);

        require!(
            !self.oracle_responses(&request_key).contains_key(&caller),
            ERR_DUPLICATE_SUBMISSION
        );

        self.oracle_responses(&request_key)
            .insert(caller.clone(), status_code);
        let matching = self
            .response_count(&request_key, status_code)
            .update(|count| {
                *count += 1;
                *count
            });

        self.oracle_report_event(&airline, &designator, timestamp, &caller, status_code);

        if matching < MIN_RESPONSES {
            return;
        }

        request.is_open = false;
        request.status_code = status_code;
        self.oracle_requests(&request_key).set(&request);

        self.finalize_flight(&flight_key, status);
        self.flight_status_info_event(&airline, &designator, timestamp, status_code);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn finalize_flight(&self, flight_key: &FlightKey<Self::Api>, status: FlightStatus) {
        self.flights(flight_key)
            .update(|flight| flight.status_code = status.code());

        if status == FlightStatus::LateAirline {
            self.credit_flight_insurees(flight_key);
        }
    }

    /// Three distinct indexes from the VM's seeded randomness source.
    fn generate_indexes(&self) -> OracleIndexes {
        let mut rand_source = RandomnessSource::new();
        let mut indexes = [0u8; ORACLE_INDEX_COUNT];
        let mut assigned = 0usize;

        while assigned < ORACLE_INDEX_COUNT {
            let candidate = rand_source.next_u8_in_range(0, ORACLE_INDEX_RANGE);
            if !indexes[..assigned].contains(&candidate) {
                indexes[assigned] = candidate;
                assigned += 1;
            }
        }

        indexes
    }

    fn has_oracle_index(&self, oracle: &ManagedAddress, index: u8) -> bool {
        let mapper = self.oracle_indexes(oracle);
        !mapper.is_empty() && mapper.get().contains(&index)
    }

    fn request_key(
        &self,
        index: u8,
        flight_key: &FlightKey<Self::Api>,
    ) -> RequestKey<Self::Api> {
        let mut serialized = ManagedBuffer::new();
        serialized.append_bytes(&[index]);
        serialized.append(flight_key.as_managed_buffer());

        self.crypto().keccak256(&serialized)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isOracleRegistered)]
    fn is_oracle_registered(&self, oracle: &ManagedAddress) -> bool {
        !self.oracle_indexes(oracle).is_empty()
    }

    #[view(getOracleIndexes)]
    fn get_oracle_indexes(&self, oracle: &ManagedAddress) -> MultiValue3<u8, u8, u8> {
        let mapper = self.oracle_indexes(oracle);
        require!(!mapper.is_empty(), ERR_ORACLE_NOT_REGISTERED);

        let indexes = mapper.get();
        (indexes[0], indexes[1], indexes[2]).into()
    }

    #[view(isRequestOpen)]
    fn is_request_open(
        &self,
        index: u8,
        airline: ManagedAddress,
        designator: ManagedBuffer,
        timestamp: u64,
    ) -> bool {
        let flight_key = self.flight_key(&airline, &designator, timestamp);
        let request_key = self.request_key(index, &flight_key);
        let mapper = self.oracle_requests(&request_key);
        !mapper.is_empty() && mapper.get().is_open
    }

    #[view(getResponseCount)]
    fn get_response_count(
        &self,
        index: u8,
        airline: ManagedAddress,
        designator: ManagedBuffer,
        timestamp: u64,
        status_code: u8,
    ) -> u32 {
        let flight_key = self.flight_key(&airline, &designator, timestamp);
        let request_key = self.request_key(index, &flight_key);
        self.response_count(&request_key, status_code).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("oracleRegistered")]
    fn oracle_registered_event(
        &self,
        #[indexed] oracle: &ManagedAddress,
        #[indexed] first_index: u8,
        #[indexed] second_index: u8,
        #[indexed] third_index: u8,
    );

    #[event("oracleRequest")]
    fn oracle_request_event(
        &self,
        #[indexed] index: u8,
        #[indexed] airline: &ManagedAddress,
        #[indexed] designator: &ManagedBuffer,
        #[indexed] timestamp: u64,
    );

    #[event("oracleReport")]
    fn oracle_report_event(
        &self,
        #[indexed] airline: &ManagedAddress,
        #[indexed] designator: &ManagedBuffer,
        #[indexed] timestamp: u64,
        #[indexed] oracle: &ManagedAddress,
        status_code: u8,
    );

    #[event("flightStatusInfo")]
    fn flight_status_info_event(
        &self,
        #[indexed] airline: &ManagedAddress,
        #[indexed] designator: &ManagedBuffer,
        #[indexed] timestamp: u64,
        status_code: u8,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("oracleIndexes")]
    fn oracle_indexes(&self, oracle: &ManagedAddress) -> SingleValueMapper<OracleIndexes>;

    #[storage_mapper("oracleRequests")]
    fn oracle_requests(
        &self,
        request_key: &RequestKey<Self::Api>,
    ) -> SingleValueMapper<OracleRequest<Self::Api>>;

    /// Insertion-ordered submitter → status code per bucket
    #[storage_mapper("oracleResponses")]
    fn oracle_responses(
        &self,
        request_key: &RequestKey<Self::Api>,
    ) -> MapMapper<ManagedAddress, u8>;

    #[storage_mapper("responseCount")]
    fn response_count(
        &self,
        request_key: &RequestKey<Self::Api>,
        status_code: u8,
    ) -> SingleValueMapper<u32>;
}
