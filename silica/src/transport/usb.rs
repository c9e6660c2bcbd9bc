// silica/src/transport/usb.rs

#![cfg(feature = "usb")]

//! rusb-backed transport for Sony readers.

use std::time::Duration;

use rusb::UsbContext;
use rusb::{Context, DeviceHandle};

use crate::transport::traits::{SenseTarget, TagHandle, Transport};
use crate::types::Idm;
use crate::{Error, Result};

const SONY_VENDOR_ID: u16 = 0x054c;

/// Minimal rusb-backed transport. This is intentionally small: it opens the
/// first Sony reader on the bus, claims its interface, and exposes the raw
/// bulk in/out path. Framing, retries and device quirks beyond that are the
/// caller's problem.
pub struct UsbTransport {
    handle: DeviceHandle<Context>,
    in_ep: u8,
    out_ep: u8,
}

impl UsbTransport {
    /// Open the first matching reader. The only supported search path is
    /// "usb"; anything else reports no usable device.
    pub fn open(device: &str) -> Result<Self> {
        if device != "usb" {
            return Err(Error::DeviceNotFound);
        }

        let ctx = Context::new()?;
        for dev in ctx.devices()?.iter() {
            let dd = dev.device_descriptor()?;
            if dd.vendor_id() != SONY_VENDOR_ID {
                continue;
            }

            let Some((in_ep, out_ep, iface)) = find_bulk_endpoints(&dev) else {
                continue;
            };

            let mut handle = dev.open()?;
            // On Linux the kernel HID driver may own the reader.
            if let Ok(true) = handle.kernel_driver_active(iface) {
                let _ = handle.detach_kernel_driver(iface);
            }
            handle.claim_interface(iface)?;

            log::debug!(
                "opened usb reader, in_ep={:#04x} out_ep={:#04x}",
                in_ep,
                out_ep
            );
            return Ok(Self {
                handle,
                in_ep,
                out_ep,
            });
        }

        Err(Error::DeviceNotFound)
    }
}

/// Locate the first interface carrying one bulk IN and one bulk OUT
/// endpoint.
fn find_bulk_endpoints(dev: &rusb::Device<Context>) -> Option<(u8, u8, u8)> {
    let config = dev.active_config_descriptor().ok()?;
    for iface in config.interfaces() {
        for desc in iface.descriptors() {
            let mut in_ep = None;
            let mut out_ep = None;
            for ep in desc.endpoint_descriptors() {
                if ep.transfer_type() != rusb::TransferType::Bulk {
                    continue;
                }
                match ep.direction() {
                    rusb::Direction::In => in_ep = Some(ep.address()),
                    rusb::Direction::Out => out_ep = Some(ep.address()),
                }
            }
            if let (Some(i), Some(o)) = (in_ep, out_ep) {
                return Some((i, o, iface.number()));
            }
        }
    }
    None
}

impl Transport for UsbTransport {
    fn exchange(&mut self, command: Option<&[u8]>, timeout: Duration) -> Result<Vec<u8>> {
        if let Some(cmd) = command {
            self.handle.write_bulk(self.out_ep, cmd, timeout)?;
        }

        let mut buf = [0u8; 256];
        let n = match self.handle.read_bulk(self.in_ep, &mut buf, timeout) {
            Ok(n) => n,
            Err(rusb::Error::Timeout) => return Err(Error::Timeout),
            Err(e) => return Err(e.into()),
        };
        Ok(buf[..n].to_vec())
    }

    fn sense(&mut self, _target: &SenseTarget) -> Result<Option<TagHandle>> {
        // Poll for any system code; a polling-style answer carries the IDm
        // in bytes 1..9 after the status byte is stripped.
        let poll = crate::protocol::frame_command(&[
            crate::constants::CMD_POLLING,
            0xff,
            0xff,
            0x00,
            0x00,
        ])?;

        let raw = match self.exchange(Some(&poll), crate::utils::default_exchange_timeout()) {
            Ok(raw) => raw,
            Err(Error::Timeout) => return Ok(None),
            Err(e) => return Err(e),
        };

        let resp = crate::protocol::strip_status(&raw);
        if resp.len() >= 9 && resp[0] == crate::constants::RESP_POLLING {
            let idm = Idm::try_from(&resp[1..9])?;
            Ok(Some(TagHandle::new(idm)))
        } else {
            Ok(None)
        }
    }
}
