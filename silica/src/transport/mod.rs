// silica/src/transport/mod.rs

//! Reader transports: the [`Transport`] trait, a recording mock, and the
//! optional USB implementation.

pub mod mock;
pub mod traits;
#[cfg(feature = "usb")]
pub mod usb;

pub use mock::MockTransport;
pub use traits::{SenseTarget, TagHandle, Transport};
#[cfg(feature = "usb")]
pub use usb::UsbTransport;

use crate::Result;

/// Open the default transport for the given device search path.
///
/// With the `usb` feature enabled this opens the first matching reader;
/// without it there is no usable device and callers get
/// [`Error::DeviceNotFound`].
pub fn open_default(device: &str) -> Result<Box<dyn Transport>> {
    #[cfg(feature = "usb")]
    {
        let t = usb::UsbTransport::open(device)?;
        Ok(Box::new(t))
    }
    #[cfg(not(feature = "usb"))]
    {
        let _ = device;
        Err(crate::Error::DeviceNotFound)
    }
}
