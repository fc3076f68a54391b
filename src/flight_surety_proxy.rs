// Typed proxy for the FlightSurety contract, in the layout produced by
// `sc-meta all proxy` (see sc-config.toml).

#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

use crate::types::{AirlineStatus, Flight, InsurancePolicy};

pub struct FlightSuretyProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FlightSuretyProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FlightSuretyProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FlightSuretyProxyMethods { wrapped_tx: tx }
    }
}

pub struct FlightSuretyProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> FlightSuretyProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        first_airline: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&first_airline)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> FlightSuretyProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(
        self,
    ) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> FlightSuretyProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_operating_status<
        Arg0: ProxyArg<bool>,
    >(
        self,
        operational: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setOperatingStatus")
            .argument(&operational)
            .original_result()
    }

    pub fn is_operational(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isOperational")
            .original_result()
    }

    pub fn get_insurance_payment<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        customer: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getInsurancePayment")
            .argument(&customer)
            .original_result()
    }

    pub fn get_pool_summary(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue5<BigUint<Env::Api>, BigUint<Env::Api>, BigUint<Env::Api>, BigUint<Env::Api>, BigUint<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPoolSummary")
            .original_result()
    }

    pub fn pay_registration_fee(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("payRegistrationFee")
            .original_result()
    }

    pub fn register_airline<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        candidate: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("registerAirline")
            .argument(&candidate)
            .original_result()
    }

    pub fn authorize_caller<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("authorizeCaller")
            .argument(&address)
            .original_result()
    }

    pub fn deauthorize_caller<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("deauthorizeCaller")
            .argument(&address)
            .original_result()
    }

    pub fn get_airlines_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAirlinesCount")
            .original_result()
    }

    pub fn is_airline<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        airline: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isAirline")
            .argument(&airline)
            .original_result()
    }

    pub fn get_airline_status<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        airline: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, AirlineStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAirlineStatus")
            .argument(&airline)
            .original_result()
    }

    pub fn get_funded_amount<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        airline: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFundedAmount")
            .argument(&airline)
            .original_result()
    }

    pub fn get_admission_votes<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        candidate: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAdmissionVotes")
            .argument(&candidate)
            .original_result()
    }

    pub fn has_voted_for<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        candidate: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasVotedFor")
            .argument(&candidate)
            .argument(&voter)
            .original_result()
    }

    pub fn is_authorized_caller<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isAuthorizedCaller")
            .argument(&address)
            .original_result()
    }

    pub fn register_flight<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        designator: Arg0,
        timestamp: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("registerFlight")
            .argument(&designator)
            .argument(&timestamp)
            .original_result()
    }

    pub fn is_flight<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        airline: Arg0,
        designator: Arg1,
        timestamp: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isFlight")
            .argument(&airline)
            .argument(&designator)
            .argument(&timestamp)
            .original_result()
    }

    pub fn get_flight_status<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        airline: Arg0,
        designator: Arg1,
        timestamp: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u8> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFlightStatus")
            .argument(&airline)
            .argument(&designator)
            .argument(&timestamp)
            .original_result()
    }

    pub fn get_flight_key<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        airline: Arg0,
        designator: Arg1,
        timestamp: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedByteArray<Env::Api, 32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFlightKey")
            .argument(&airline)
            .argument(&designator)
            .argument(&timestamp)
            .original_result()
    }

    pub fn get_flight<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        airline: Arg0,
        designator: Arg1,
        timestamp: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Flight<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFlight")
            .argument(&airline)
            .argument(&designator)
            .argument(&timestamp)
            .original_result()
    }

    pub fn buy<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        airline: Arg0,
        designator: Arg1,
        timestamp: Arg2,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("buy")
            .argument(&airline)
            .argument(&designator)
            .argument(&timestamp)
            .original_result()
    }

    pub fn credit_insurees<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        airline: Arg0,
        designator: Arg1,
        timestamp: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("creditInsurees")
            .argument(&airline)
            .argument(&designator)
            .argument(&timestamp)
            .original_result()
    }

    pub fn withdraw_payout(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawPayout")
            .original_result()
    }

    pub fn get_policy<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<u64>,
    >(
        self,
        customer: Arg0,
        airline: Arg1,
        designator: Arg2,
        timestamp: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<InsurancePolicy<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPolicy")
            .argument(&customer)
            .argument(&airline)
            .argument(&designator)
            .argument(&timestamp)
            .original_result()
    }

    pub fn get_insurees_count<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        airline: Arg0,
        designator: Arg1,
        timestamp: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getInsureesCount")
            .argument(&airline)
            .argument(&designator)
            .argument(&timestamp)
            .original_result()
    }

    pub fn register_oracle(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("registerOracle")
            .original_result()
    }

    pub fn fetch_flight_status<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        airline: Arg0,
        designator: Arg1,
        timestamp: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u8> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("fetchFlightStatus")
            .argument(&airline)
            .argument(&designator)
            .argument(&timestamp)
            .original_result()
    }

    pub fn submit_oracle_response<
        Arg0: ProxyArg<u8>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<u8>,
    >(
        self,
        index: Arg0,
        airline: Arg1,
        designator: Arg2,
        timestamp: Arg3,
        status_code: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("submitOracleResponse")
            .argument(&index)
            .argument(&airline)
            .argument(&designator)
            .argument(&timestamp)
            .argument(&status_code)
            .original_result()
    }

    pub fn is_oracle_registered<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        oracle: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isOracleRegistered")
            .argument(&oracle)
            .original_result()
    }

    pub fn get_oracle_indexes<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        oracle: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue3<u8, u8, u8>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOracleIndexes")
            .argument(&oracle)
            .original_result()
    }

    pub fn is_request_open<
        Arg0: ProxyArg<u8>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<u64>,
    >(
        self,
        index: Arg0,
        airline: Arg1,
        designator: Arg2,
        timestamp: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isRequestOpen")
            .argument(&index)
            .argument(&airline)
            .argument(&designator)
            .argument(&timestamp)
            .original_result()
    }

    pub fn get_response_count<
        Arg0: ProxyArg<u8>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<u8>,
    >(
        self,
        index: Arg0,
        airline: Arg1,
        designator: Arg2,
        timestamp: Arg3,
        status_code: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getResponseCount")
            .argument(&index)
            .argument(&airline)
            .argument(&designator)
            .argument(&timestamp)
            .argument(&status_code)
            .original_result()
    }

    pub fn get_contract_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue6<BigUint<Env::Api>, BigUint<Env::Api>, BigUint<Env::Api>, u32, u32, u8>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContractConfig")
            .original_result()
    }
}
