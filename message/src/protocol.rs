//! Protocol version levels.
//!
//! Each level is the first protocol version at which the named feature is
//! recognised by peers.

/// Oldest version we talk to.
pub const MINIMUM: u32 = 31402;
/// `getheaders`/`headers`.
pub const HEADERS: u32 = 31800;
/// https://github.com/bitcoin/bips/blob/master/bip-0014.mediawiki
pub const BIP14: u32 = 60000;
/// `pong` and the ping nonce.
/// https://github.com/bitcoin/bips/blob/master/bip-0031.mediawiki
pub const BIP31: u32 = 60001;
/// `mempool`.
/// https://github.com/bitcoin/bips/blob/master/bip-0035.mediawiki
pub const BIP35: u32 = 60002;
/// Bloom filters.
pub const BIP37: u32 = 70001;
/// `reject`.
pub const BIP61: u32 = 70002;
pub const BIP111: u32 = 70011;
/// `sendheaders`.
pub const BIP130: u32 = 70012;
/// `feefilter`.
pub const BIP133: u32 = 70013;
/// Newest version we know.
pub const MAXIMUM: u32 = BIP133;
