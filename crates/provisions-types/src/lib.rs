pub mod eligibility;
pub mod felt;
pub mod message;
pub mod serde_helpers;
pub mod transaction;

pub use eligibility::*;
pub use felt::*;
pub use message::*;
pub use transaction::*;
