pub mod address;
pub mod balance;
pub mod config;
pub mod consts;
pub mod distribution;
pub mod error;
pub mod leaderboard;
pub mod nft;
pub mod quiz;
pub mod registry;
pub mod rpc;
pub mod session;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_helpers;

pub mod prelude {
    pub use crate::address::*;
    pub use crate::balance::*;
    pub use crate::config::*;
    pub use crate::consts::*;
    pub use crate::distribution::*;
    pub use crate::error::DashError;
    pub use crate::leaderboard::*;
    pub use crate::nft::*;
    pub use crate::quiz::*;
    pub use crate::registry::*;
    pub use crate::rpc::*;
    pub use crate::session::*;
    pub use crate::storage::*;
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn two_arg_result(ok: bool) -> Result<u8, String> {
        if ok {
            Ok(7)
        } else {
            Err(DashError::Storage("full".into()).to_string())
        }
    }

    #[test]
    fn prelude_leaves_std_result_alone() {
        assert_eq!(two_arg_result(true), Ok(7));
        assert_eq!(two_arg_result(false).unwrap_err(), "storage error: full");
    }
}
