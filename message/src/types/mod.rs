mod feefilter;
mod filteradd;
mod getaddr;
mod mempool;
mod ping;
mod pong;
mod sendheaders;
mod verack;

pub use self::feefilter::FeeFilter;
pub use self::filteradd::{FilterAdd, MAX_FILTER_ADD_SIZE};
pub use self::getaddr::GetAddr;
pub use self::mempool::MemPool;
pub use self::ping::Ping;
pub use self::pong::Pong;
pub use self::sendheaders::SendHeaders;
pub use self::verack::Verack;
