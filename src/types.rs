multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::config::ORACLE_INDEX_COUNT;

/// Storage key of a flight: keccak256(airline ‖ designator ‖ timestamp).
pub type FlightKey<M> = ManagedByteArray<M, 32>;

/// Storage key of an oracle request bucket: keccak256(index ‖ flight key).
pub type RequestKey<M> = ManagedByteArray<M, 32>;

// ============================================================
// Airline Status: admission lifecycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum AirlineStatus {
    /// Never paid the registration fee. Empty storage decodes here.
    Unregistered,
    /// Fee paid while the registry required consensus; awaiting votes.
    PendingFunding,
    /// Admitted: may register flights and vote on admissions.
    Active,
}

// ============================================================
// Flight Status: wire codes are fixed
// ============================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FlightStatus {
    Unknown = 0,
    OnTime = 10,
    LateAirline = 20,
    LateWeather = 30,
    LateTechnical = 40,
    LateOther = 50,
}

impl FlightStatus {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(FlightStatus::Unknown),
            10 => Some(FlightStatus::OnTime),
            20 => Some(FlightStatus::LateAirline),
            30 => Some(FlightStatus::LateWeather),
            40 => Some(FlightStatus::LateTechnical),
            50 => Some(FlightStatus::LateOther),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Oracles may only report terminal statuses.
    pub fn is_terminal(self) -> bool {
        self != FlightStatus::Unknown
    }
}

// ============================================================
// Flight
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Flight<M: ManagedTypeApi> {
    pub airline: ManagedAddress<M>,
    pub designator: ManagedBuffer<M>,
    pub timestamp: u64,
    /// One of the `FlightStatus` codes; 0 until finalized by the oracles
    pub status_code: u8,
    pub registered_at: u64,
}

impl<M: ManagedTypeApi> Flight<M> {
    pub fn is_finalized(&self) -> bool {
        self.status_code != FlightStatus::Unknown.code()
    }
}

// ============================================================
// Insurance Policy: one per (customer, flight)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct InsurancePolicy<M: ManagedTypeApi> {
    pub paid: BigUint<M>,
    /// Payout recorded for this policy; zero until credited
    pub credited: BigUint<M>,
    pub is_credited: bool,
    pub purchased_at: u64,
}

// ============================================================
// Oracle Request: one response bucket per (index, flight)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct OracleRequest<M: ManagedTypeApi> {
    pub index: u8,
    pub flight_key: FlightKey<M>,
    pub requester: ManagedAddress<M>,
    pub requested_at: u64,
    /// Cleared once a status code reaches the response quorum
    pub is_open: bool,
    /// Status the bucket was sealed with; 0 while open
    pub status_code: u8,
}

pub type OracleIndexes = [u8; ORACLE_INDEX_COUNT];
