//! Phone-number backend implementations.

pub(crate) mod traits;

#[cfg(feature = "phonenumber")]
pub mod phonenumber;

pub use traits::{AsYouType, PhoneBackend};

#[cfg(feature = "phonenumber")]
pub use phonenumber::{PhonenumberBackend, PhonenumberError, PhonenumberFormatter};
