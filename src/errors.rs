pub const ERR_CONTRACT_PAUSED: &str = "Contract is currently not operational";
pub const ERR_NOT_AUTHORIZED: &str = "Caller is not authorized";

// ── Airlines ──
pub const ERR_ALREADY_FUNDED: &str = "Airline has already paid the registration fee";
pub const ERR_INSUFFICIENT_FEE: &str = "Registration fee is below the required amount";
pub const ERR_ALREADY_ACTIVE: &str = "Airline is already active";

// ── Flights & insurance ──
pub const ERR_INVALID_FLIGHT: &str = "Flight designator cannot be empty";
pub const ERR_UNKNOWN_FLIGHT: &str = "Flight is not registered";
pub const ERR_FLIGHT_FINALIZED: &str = "Flight status is already finalized";
pub const ERR_INVALID_AMOUNT: &str = "Insurance amount must be above zero and at most 1 EGLD";
pub const ERR_FLIGHT_NOT_ELIGIBLE: &str = "Flight is not late due to the airline";
pub const ERR_NOTHING_TO_WITHDRAW: &str = "Nothing to withdraw";

// ── Oracles ──
pub const ERR_INVALID_ORACLE_FEE: &str = "Oracle registration fee must be exactly 1 EGLD";
pub const ERR_ORACLE_ALREADY_REGISTERED: &str = "Oracle is already registered";
pub const ERR_ORACLE_NOT_REGISTERED: &str = "Oracle is not registered";
pub const ERR_UNAUTHORIZED_INDEX: &str = "Index does not match oracle request";
pub const ERR_INVALID_STATUS_CODE: &str = "Unknown flight status code";
pub const ERR_UNKNOWN_REQUEST: &str = "Flight or timestamp do not match oracle request";
pub const ERR_BUCKET_SEALED: &str = "Oracle request is already finalized";
pub const ERR_DUPLICATE_SUBMISSION: &str = "Oracle has already responded to this request";
