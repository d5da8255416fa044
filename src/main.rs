use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use wlanapi::config::{DEFAULT_LOG_FILTER, DEFAULT_WATCH_SECS, LOG_ENV_VAR};
use wlanapi::wlan::{
    BssType, Guid, NotificationEvent, Session, Ssid, start_listener, sys,
};
use wlanapi::{WlanError, reason_code_to_string};

/// Inspect wireless adapters through the Windows Native WiFi API
#[derive(Parser, Debug)]
#[command(
    name = "wlaninfo",
    about = "Inspect wireless adapters, networks and profiles through wlanapi.dll.",
    long_about = None,
    version = env!("CARGO_PKG_VERSION"),
    disable_version_flag = true
)]
struct Args {
    /// Print version information
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: (),

    /// Interface GUID, defaults to the first interface
    #[arg(short, long, global = true)]
    interface: Option<Guid>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List wireless interfaces
    Interfaces,
    /// List visible networks
    Networks {
        /// Trigger a scan first
        #[arg(long)]
        scan: bool,
    },
    /// List BSS entries, optionally for one SSID
    Bss {
        #[arg(long)]
        ssid: Option<Ssid>,
    },
    /// List saved profiles, or print one profile's XML
    Profiles {
        #[arg(long)]
        show: Option<String>,
    },
    /// Show the current connection
    Status,
    /// Print notifications as they arrive
    Watch {
        #[arg(short, long, default_value_t = DEFAULT_WATCH_SECS)]
        seconds: u64,
    },
    /// Describe a WLAN reason code
    Reason {
        #[arg(value_parser = parse_code)]
        code: u32,
    },
}

fn parse_code(value: &str) -> Result<u32, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|e| e.to_string())
}

fn resolve_interface(session: &Session, interface: Option<Guid>) -> Result<Guid> {
    match interface {
        Some(guid) => Ok(guid),
        None => Ok(session.first_interface_guid()?),
    }
}

fn list_interfaces(session: &Session) -> Result<()> {
    let list = session.enum_interfaces()?;
    for (index, interface) in list.items.iter().enumerate() {
        let marker = if index as u32 == list.current_index { "*" } else { " " };
        println!(
            "{marker} {}  {:<14} {}",
            interface.guid, interface.state, interface.description
        );
    }
    Ok(())
}

fn list_networks(session: &Session, interface: &Guid, scan: bool) -> Result<()> {
    if scan {
        session.scan(interface)?;
        // Scan results arrive asynchronously; give the driver a moment.
        std::thread::sleep(Duration::from_secs(2));
    }
    let mut networks = session.available_networks(interface, 0)?;
    networks.sort_by(|a, b| b.signal_quality.cmp(&a.signal_quality));
    for network in networks {
        let ssid = if network.ssid.is_empty() {
            "<hidden>".to_string()
        } else {
            network.ssid.to_string()
        };
        println!(
            "{:>3}%  {:<32} {:<10} {:<8} {}",
            network.signal_quality,
            ssid,
            network.auth_algorithm,
            network.cipher_algorithm,
            if network.is_connected() { "connected" } else { "" }
        );
    }
    Ok(())
}

fn list_bss(session: &Session, interface: &Guid, ssid: Option<&Ssid>) -> Result<()> {
    for entry in session.bss_list(interface, ssid, BssType::Any, false)? {
        println!(
            "{}  {:>4} dBm  ch {:>3}  {:<10} {}",
            entry.bssid,
            entry.rssi,
            entry.channel(),
            entry.phy_type,
            entry.ssid
        );
    }
    Ok(())
}

fn list_profiles(session: &Session, interface: &Guid, show: Option<&str>) -> Result<()> {
    if let Some(name) = show {
        let profile = session
            .profile(interface, name, 0)
            .wrap_err_with(|| format!("Failed to read profile '{name}'"))?;
        println!("{}", profile.xml);
        return Ok(());
    }
    for profile in session.profiles(interface)? {
        let scope = if profile.is_group_policy() {
            "group policy"
        } else if profile.is_per_user() {
            "user"
        } else {
            "all users"
        };
        println!("{:<32} {scope}", profile.name);
    }
    Ok(())
}

fn show_status(session: &Session, interface: &Guid) -> Result<()> {
    let state = session.interface_state(interface)?;
    println!("State:   {state}");
    let connection = match session.current_connection(interface) {
        Ok(connection) => connection,
        Err(WlanError::Status { code, .. }) if code == wlanapi::error::ERROR_INVALID_STATE => {
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    println!("SSID:    {}", connection.ssid);
    println!("BSSID:   {}", connection.bssid);
    println!("Profile: {}", connection.profile_name);
    println!("Signal:  {}%", connection.signal_quality);
    println!(
        "Rate:    {} / {} Mbps",
        connection.rx_rate / 1000,
        connection.tx_rate / 1000
    );
    println!(
        "Auth:    {} / {}",
        connection.auth_algorithm, connection.cipher_algorithm
    );
    if let Ok(channel) = session.channel_number(interface) {
        println!("Channel: {channel}");
    }
    Ok(())
}

async fn watch(seconds: u64) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let _listener = start_listener(sys::WLAN_NOTIFICATION_SOURCE_ALL, tx)?;
    let deadline = tokio::time::sleep(Duration::from_secs(seconds));
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            _ = &mut deadline => break,
            notification = rx.recv() => {
                let Some(notification) = notification else { break };
                match notification.event {
                    NotificationEvent::Connected(c) => println!("Connected to {}", c.ssid),
                    NotificationEvent::Disconnected(c) => println!("Disconnected from {}", c.ssid),
                    NotificationEvent::ConnectionFailed { connection, reason } => {
                        println!("Connection to {} failed: {reason}", connection.ssid)
                    }
                    NotificationEvent::ScanFailed { reason, .. } => {
                        println!("Scan failed: {reason}")
                    }
                    NotificationEvent::Other { data } => println!(
                        "source 0x{:X} code {} ({} bytes)",
                        notification.source,
                        notification.code,
                        data.len()
                    ),
                    event => println!("{event:?}"),
                }
            }
        }
    }
    Ok(())
}

fn run_blocking(interface: Option<Guid>, command: Command) -> Result<()> {
    let session = Session::open().wrap_err("Failed to open a WLAN session")?;
    match command {
        Command::Interfaces => list_interfaces(&session),
        Command::Networks { scan } => {
            list_networks(&session, &resolve_interface(&session, interface)?, scan)
        }
        Command::Bss { ssid } => list_bss(
            &session,
            &resolve_interface(&session, interface)?,
            ssid.as_ref(),
        ),
        Command::Profiles { show } => list_profiles(
            &session,
            &resolve_interface(&session, interface)?,
            show.as_deref(),
        ),
        Command::Status => show_status(&session, &resolve_interface(&session, interface)?),
        Command::Watch { .. } | Command::Reason { .. } => Err(eyre!("not a blocking command")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV_VAR)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Reason { code } => {
            println!("{}", reason_code_to_string(code));
            Ok(())
        }
        Command::Watch { seconds } => watch(seconds).await,
        command => {
            let interface = args.interface;
            tokio::task::spawn_blocking(move || run_blocking(interface, command)).await?
        }
    }
}
