use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrossChainError {
    OriginNotAllowed = 801,
    WrongDestination = 802,
    MalformedMessage = 803,
    MessageNotFound = 804,
    MessengerNotConfigured = 805,
}
