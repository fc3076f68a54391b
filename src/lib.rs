#![no_std]

multiversx_sc::imports!();

pub mod airlines;
pub mod config;
pub mod errors;
pub mod flight_surety_proxy;
pub mod flights;
pub mod insurance;
pub mod ledger;
pub mod operational;
pub mod oracles;
pub mod types;

use config::{
    airline_registration_fee, MAX_INSURANCE, MIN_RESPONSES, MULTIPARTY_THRESHOLD,
    ORACLE_INDEX_RANGE, ORACLE_REGISTRATION_FEE,
};

// ============================================================
// Contract
// ============================================================

/// Airline consortium, flight delay insurance and oracle-driven flight
/// status resolution in one ledger. Each transaction runs alone against
/// contract storage, so vote and response counts never interleave.
#[multiversx_sc::contract]
pub trait FlightSurety:
    operational::OperationalModule
    + ledger::LedgerModule
    + airlines::AirlinesModule
    + flights::FlightsModule
    + insurance::InsuranceModule
    + oracles::OraclesModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the administrator. The genesis airline is
    /// admitted without a fee so that someone can vote from day one.
    #[init]
    fn init(&self, first_airline: ManagedAddress) {
        self.operational().set(true);
        self.activate_airline(&first_airline);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue6<BigUint, BigUint, BigUint, u32, u32, u8> {
        let airline_fee: BigUint = airline_registration_fee();
        (
            airline_fee,
            BigUint::from(MAX_INSURANCE),
            BigUint::from(ORACLE_REGISTRATION_FEE),
            MULTIPARTY_THRESHOLD,
            MIN_RESPONSES,
            ORACLE_INDEX_RANGE,
        )
            .into()
    }
}
