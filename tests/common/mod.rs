// Shared blackbox harness for the FlightSurety contract tests.
#![allow(dead_code)]

use multiversx_sc_scenario::imports::*;

use flight_surety::config::ONE_EGLD;
use flight_surety::flight_surety_proxy::FlightSuretyProxy;
use flight_surety::types::AirlineStatus;

pub const CODE_PATH: MxscPath = MxscPath::new("output/flight-surety.mxsc.json");

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const GOVERNOR: TestAddress = TestAddress::new("governor");
pub const FIRST_AIRLINE: TestAddress = TestAddress::new("first-airline");
pub const CUSTOMER: TestAddress = TestAddress::new("customer");
pub const OTHER_CUSTOMER: TestAddress = TestAddress::new("other-customer");
pub const SC_ADDRESS: TestSCAddress = TestSCAddress::new("flight-surety");

pub const AIRLINE_NAMES: [&str; 7] = [
    "airline-1", "airline-2", "airline-3", "airline-4", "airline-5", "airline-6", "airline-7",
];

pub const ORACLE_NAMES: [&str; 40] = [
    "oracle-00", "oracle-01", "oracle-02", "oracle-03", "oracle-04", "oracle-05", "oracle-06",
    "oracle-07", "oracle-08", "oracle-09", "oracle-10", "oracle-11", "oracle-12", "oracle-13",
    "oracle-14", "oracle-15", "oracle-16", "oracle-17", "oracle-18", "oracle-19", "oracle-20",
    "oracle-21", "oracle-22", "oracle-23", "oracle-24", "oracle-25", "oracle-26", "oracle-27",
    "oracle-28", "oracle-29", "oracle-30", "oracle-31", "oracle-32", "oracle-33", "oracle-34",
    "oracle-35", "oracle-36", "oracle-37", "oracle-38", "oracle-39",
];

pub const FLIGHT: &str = "ND1309";
pub const DEPARTURE: u64 = 1_700_000_000;

pub const STATUS_UNKNOWN: u8 = 0;
pub const STATUS_ON_TIME: u8 = 10;
pub const STATUS_LATE_AIRLINE: u8 = 20;
pub const STATUS_LATE_WEATHER: u8 = 30;

pub fn airline(i: usize) -> TestAddress<'static> {
    TestAddress::new(AIRLINE_NAMES[i])
}

pub fn oracle(name: &'static str) -> TestAddress<'static> {
    TestAddress::new(name)
}

pub fn egld(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(ONE_EGLD)
}

pub fn milli_egld(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(ONE_EGLD / 1_000)
}

pub fn flight_id(designator: &str) -> ManagedBuffer<StaticApi> {
    ManagedBuffer::from(designator)
}

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CODE_PATH, flight_surety::ContractBuilder);
    blockchain
}

/// A registered oracle and the indexes it was assigned.
pub struct TestOracle {
    pub name: &'static str,
    pub indexes: [u8; 3],
}

impl TestOracle {
    pub fn holds(&self, index: u8) -> bool {
        self.indexes.contains(&index)
    }
}

pub struct FlightSuretyTestState {
    pub world: ScenarioWorld,
}

impl FlightSuretyTestState {
    /// Deploys with `FIRST_AIRLINE` as genesis and `GOVERNOR` authorized
    /// to read the airline count.
    pub fn new() -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1).balance(egld(100));
        world.account(GOVERNOR).nonce(1);
        world.account(FIRST_AIRLINE).nonce(1).balance(egld(100));
        world.account(CUSTOMER).nonce(1).balance(egld(100));
        world.account(OTHER_CUSTOMER).nonce(1).balance(egld(100));
        for name in AIRLINE_NAMES {
            world.account(TestAddress::new(name)).nonce(1).balance(egld(100));
        }
        for name in ORACLE_NAMES {
            world.account(TestAddress::new(name)).nonce(1).balance(egld(5));
        }

        world
            .tx()
            .from(OWNER)
            .typed(FlightSuretyProxy)
            .init(FIRST_AIRLINE)
            .code(CODE_PATH)
            .new_address(SC_ADDRESS)
            .run();

        world
            .tx()
            .from(OWNER)
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .authorize_caller(GOVERNOR)
            .run();

        Self { world }
    }

    // ── Operational ──

    pub fn set_operating_status(&mut self, operational: bool) {
        self.world
            .tx()
            .from(OWNER)
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .set_operating_status(operational)
            .run();
    }

    pub fn is_operational(&mut self) -> bool {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .is_operational()
            .returns(ReturnsResult)
            .run()
    }

    // ── Airlines ──

    pub fn pay_registration_fee(&mut self, airline: TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(airline)
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .pay_registration_fee()
            .egld(amount)
            .run();
    }

    pub fn pay_registration_fee_expect_err(
        &mut self,
        airline: TestAddress,
        amount: BigUint<StaticApi>,
        err_message: &str,
    ) {
        self.world
            .tx()
            .from(airline)
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .pay_registration_fee()
            .egld(amount)
            .returns(ExpectError(4, err_message))
            .run();
    }

    pub fn register_airline(&mut self, voter: TestAddress, candidate: TestAddress) {
        self.world
            .tx()
            .from(voter)
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .register_airline(candidate)
            .run();
    }

    pub fn register_airline_expect_err(
        &mut self,
        voter: TestAddress,
        candidate: TestAddress,
        err_message: &str,
    ) {
        self.world
            .tx()
            .from(voter)
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .register_airline(candidate)
            .returns(ExpectError(4, err_message))
            .run();
    }

    /// Pays the full fee for each of the first `count` test airlines.
    pub fn fund_airlines(&mut self, count: usize) {
        for i in 0..count {
            self.pay_registration_fee(airline(i), egld(10));
        }
    }

    pub fn airlines_count(&mut self) -> u32 {
        self.world
            .tx()
            .from(GOVERNOR)
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .get_airlines_count()
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_airline(&mut self, airline: TestAddress) -> bool {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .is_airline(airline)
            .returns(ReturnsResult)
            .run()
    }

    pub fn airline_status(&mut self, airline: TestAddress) -> AirlineStatus {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .get_airline_status(airline)
            .returns(ReturnsResult)
            .run()
    }

    pub fn admission_votes(&mut self, candidate: TestAddress) -> u32 {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .get_admission_votes(candidate)
            .returns(ReturnsResult)
            .run()
    }

    // ── Flights ──

    pub fn register_flight(&mut self, airline: TestAddress, designator: &str, timestamp: u64) {
        self.world
            .tx()
            .from(airline)
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .register_flight(flight_id(designator), timestamp)
            .run();
    }

    pub fn is_flight(&mut self, airline: TestAddress, designator: &str, timestamp: u64) -> bool {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .is_flight(airline, flight_id(designator), timestamp)
            .returns(ReturnsResult)
            .run()
    }

    pub fn flight_status(&mut self, airline: TestAddress, designator: &str, timestamp: u64) -> u8 {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .get_flight_status(airline, flight_id(designator), timestamp)
            .returns(ReturnsResult)
            .run()
    }

    // ── Insurance ──

    pub fn buy(&mut self, customer: TestAddress, airline: TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(customer)
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .buy(airline, flight_id(FLIGHT), DEPARTURE)
            .egld(amount)
            .run();
    }

    pub fn buy_expect_err(
        &mut self,
        customer: TestAddress,
        airline: TestAddress,
        amount: BigUint<StaticApi>,
        err_message: &str,
    ) {
        self.world
            .tx()
            .from(customer)
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .buy(airline, flight_id(FLIGHT), DEPARTURE)
            .egld(amount)
            .returns(ExpectError(4, err_message))
            .run();
    }

    pub fn credit_insurees(&mut self, airline: TestAddress) {
        self.world
            .tx()
            .from(OWNER)
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .credit_insurees(airline, flight_id(FLIGHT), DEPARTURE)
            .run();
    }

    pub fn insurance_payment(&mut self, customer: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .get_insurance_payment(customer)
            .returns(ReturnsResult)
            .run()
    }

    // ── Oracles ──

    pub fn register_oracles(&mut self) -> Vec<TestOracle> {
        let mut oracles = Vec::new();
        for name in ORACLE_NAMES {
            self.world
                .tx()
                .from(oracle(name))
                .to(SC_ADDRESS)
                .typed(FlightSuretyProxy)
                .register_oracle()
                .egld(egld(1))
                .run();

            let (first, second, third) = self
                .world
                .query()
                .to(SC_ADDRESS)
                .typed(FlightSuretyProxy)
                .get_oracle_indexes(oracle(name))
                .returns(ReturnsResult)
                .run()
                .into_tuple();

            oracles.push(TestOracle {
                name,
                indexes: [first, second, third],
            });
        }
        oracles
    }

    pub fn fetch_flight_status(&mut self, airline: TestAddress) -> u8 {
        self.world
            .tx()
            .from(CUSTOMER)
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .fetch_flight_status(airline, flight_id(FLIGHT), DEPARTURE)
            .returns(ReturnsResult)
            .run()
    }

    pub fn submit_response(
        &mut self,
        oracle_name: &'static str,
        index: u8,
        airline: TestAddress,
        status_code: u8,
    ) {
        self.world
            .tx()
            .from(oracle(oracle_name))
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .submit_oracle_response(index, airline, flight_id(FLIGHT), DEPARTURE, status_code)
            .run();
    }

    pub fn submit_response_expect_err(
        &mut self,
        oracle_name: &'static str,
        index: u8,
        airline: TestAddress,
        status_code: u8,
        err_message: &str,
    ) {
        self.world
            .tx()
            .from(oracle(oracle_name))
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .submit_oracle_response(index, airline, flight_id(FLIGHT), DEPARTURE, status_code)
            .returns(ExpectError(4, err_message))
            .run();
    }

    pub fn is_request_open(&mut self, index: u8, airline: TestAddress) -> bool {
        self.world
            .query()
            .to(SC_ADDRESS)
            .typed(FlightSuretyProxy)
            .is_request_open(index, airline, flight_id(FLIGHT), DEPARTURE)
            .returns(ReturnsResult)
            .run()
    }

    // ── Scenario setup ──

    /// Funds `airline-1`, registers `FLIGHT` for it and sells `CUSTOMER`
    /// a 0.5 EGLD policy.
    pub fn insured_flight(&mut self) -> TestAddress<'static> {
        let operator = airline(0);
        self.pay_registration_fee(operator, egld(10));
        self.register_flight(operator, FLIGHT, DEPARTURE);
        self.buy(CUSTOMER, operator, milli_egld(500));
        operator
    }
}

/// Oracles holding `index`, in registration order.
pub fn holders_of(oracles: &[TestOracle], index: u8) -> Vec<&'static str> {
    oracles
        .iter()
        .filter(|oracle| oracle.holds(index))
        .map(|oracle| oracle.name)
        .collect()
}
