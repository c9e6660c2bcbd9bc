// silica/src/main.rs

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use silica::console::Console;
use silica::protocol::resolve;
use silica::transport::{self, SenseTarget};
use silica::utils::parse_hex;
use silica::{card, Error, SystemCode};

const EXIT_FAILURE: u8 = 1;
const EXIT_NO_DEVICE: u8 = 3;

#[derive(Parser, Debug)]
#[command(name = "silica", version, about = "Communicate directly with FeliCa cards")]
struct Cli {
    /// Exchange timeout in seconds.
    #[arg(short = 't', long, value_name = "SECS", default_value_t = 1.0)]
    timeout: f64,

    /// Local device search path.
    #[arg(long, value_name = "PATH", default_value = "usb")]
    device: String,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Interactive raw command console.
    Console {
        /// Polling system code (4 hex digits).
        #[arg(short = 's', long, value_name = "HEX4", default_value = "FFFF")]
        system_code: String,
    },
    /// Write one system block: a block number, idm[_pmm], ser[vice] or
    /// sys[tem], plus a hex parameter.
    Write {
        /// Block number or symbolic target.
        command: String,
        /// Parameter in hex.
        parameter: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let timeout = Duration::from_secs_f64(cli.timeout);

    match cli.command {
        Cmd::Console { system_code } => run_console(&cli.device, timeout, &system_code),
        Cmd::Write { command, parameter } => run_write(&cli.device, timeout, &command, &parameter),
    }
}

fn exit_code_for(err: &Error) -> u8 {
    match err {
        Error::DeviceNotFound => EXIT_NO_DEVICE,
        #[cfg(feature = "usb")]
        Error::Usb(_) => EXIT_NO_DEVICE,
        _ => EXIT_FAILURE,
    }
}

fn run_console(device: &str, timeout: Duration, system_code: &str) -> ExitCode {
    let system_code = match SystemCode::from_hex(system_code) {
        Ok(sc) => sc,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let mut transport = match transport::open_default(device) {
        Ok(t) => t,
        Err(err) => {
            log::debug!("open failed: {}", err);
            eprintln!("No device");
            return ExitCode::from(EXIT_NO_DEVICE);
        }
    };

    match transport.sense(&SenseTarget::FELICA_212F) {
        Ok(Some(_)) => {}
        Ok(None) => {
            eprintln!("No card");
            return ExitCode::from(EXIT_FAILURE);
        }
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(exit_code_for(&err));
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(transport.as_mut(), timeout, system_code);
    match console.run(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn run_write(device: &str, timeout: Duration, command: &str, parameter: &str) -> ExitCode {
    let param = match parse_hex(parameter) {
        Ok(p) => p,
        Err(_) => {
            eprintln!("Parameter must be in hex format");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let request = match resolve(command, &param) {
        Ok(r) => r,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let mut transport = match transport::open_default(device) {
        Ok(t) => t,
        Err(err) => {
            log::debug!("open failed: {}", err);
            eprintln!("No device");
            return ExitCode::from(EXIT_NO_DEVICE);
        }
    };

    println!("Waiting for a FeliCa...");
    let tag = match transport.sense(&SenseTarget::FELICA_212F) {
        Ok(Some(tag)) => tag,
        Ok(None) => {
            eprintln!("No card");
            return ExitCode::from(EXIT_FAILURE);
        }
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(exit_code_for(&err));
        }
    };
    println!("Tag found: {}", tag.idm().to_hex());

    match card::write_system_block(transport.as_mut(), &request, timeout) {
        Ok(()) => {
            println!("Write completed");
            ExitCode::SUCCESS
        }
        Err(Error::TagCommand { block }) => {
            eprintln!(
                "Unable to write to block {:02X}h. The tag might not be a SiliCa.",
                block
            );
            ExitCode::from(EXIT_FAILURE)
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(exit_code_for(&err))
        }
    }
}
