// mixlib test application -- CLI tool for exercising the X-Air/X32 driver
// against a real console or a mock transport.
//
// Usage:
//   mixlib-test-app --model xr18 --ip 192.168.1.40 info
//   mixlib-test-app --model xr18 --ip 192.168.1.40 names
//   mixlib-test-app --model xr16 --ip 192.168.1.40 fader get 7
//   mixlib-test-app --model xr16 --ip 192.168.1.40 fader set 7 0.75
//   mixlib-test-app --model x32 --ip 192.168.1.64 mute get 2
//   mixlib-test-app --model x32 --ip 192.168.1.64 tape get
//   mixlib-test-app --model xr12 --mock info
//   mixlib-test-app list

use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use mixlib::xair::builder::XAirBuilder;
use mixlib::xair::models::{x32, xair_12, xair_16, xair_18, XAirModel};
use mixlib::xair::TapeStatus;
use mixlib::xair::XAirConsole;
use mixlib_test_harness::MockDatagramTransport;

/// mixlib test application -- exercises the console driver from the
/// command line.
#[derive(Parser)]
#[command(name = "mixlib-test-app", version, about)]
struct Cli {
    /// Console model. Required for all commands except `list`.
    #[arg(long, value_enum)]
    model: Option<Model>,

    /// Console IP address (e.g. 192.168.1.40).
    /// Required unless --mock is used.
    #[arg(long)]
    ip: Option<std::net::IpAddr>,

    /// Override the local listen port (default: 8888).
    #[arg(long)]
    local_port: Option<u16>,

    /// Override the reply settling delay in milliseconds (default: 50).
    #[arg(long)]
    settle_ms: Option<u64>,

    /// Use a mock transport instead of a real socket.
    /// Useful for verifying CLI parsing and builder wiring without a console.
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Model {
    Xr12,
    Xr16,
    Xr18,
    X32,
}

impl Model {
    fn definition(self) -> XAirModel {
        match self {
            Model::Xr12 => xair_12(),
            Model::Xr16 => xair_16(),
            Model::Xr18 => xair_18(),
            Model::X32 => x32(),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List all supported console models.
    List,
    /// Print the selected model's configuration and endpoints.
    Info,
    /// Read every channel name (sequential warm-up) and print them.
    Names,
    /// Get or set a channel fader.
    Fader {
        #[command(subcommand)]
        op: FaderOp,
    },
    /// Get or set a mute group.
    Mute {
        #[command(subcommand)]
        op: MuteOp,
    },
    /// Get or set the USB recorder transport state.
    Tape {
        #[command(subcommand)]
        op: TapeOp,
    },
}

#[derive(Subcommand)]
enum FaderOp {
    /// Read a channel's fader level.
    Get { channel: u16 },
    /// Set a channel's fader level (0.0..=1.0).
    Set { channel: u16, value: f32 },
}

#[derive(Subcommand)]
enum MuteOp {
    /// Read a mute group's engaged state.
    Get { group: u16 },
    /// Engage (on) or release (off) a mute group.
    Set { group: u16, engaged: bool },
}

#[derive(Subcommand)]
enum TapeOp {
    /// Read the transport state.
    Get,
    /// Set the transport state by wire code (0=stop .. 6=rewind).
    Set { code: i32 },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Command::List = cli.command {
        for model in mixlib::supported_consoles() {
            println!(
                "{:5}  {:2} channels, {:2} aux buses, {} mute groups, OSC port {}",
                model.name,
                model.channel_count,
                model.aux_bus_count,
                model.mute_group_count,
                model.remote_port
            );
        }
        return Ok(());
    }

    let mut console = connect(&cli).await?;

    match cli.command {
        Command::List => unreachable!("handled above"),
        Command::Info => {
            let model = console.model();
            println!("model:       {}", model.name);
            println!("channels:    {}", model.channel_count);
            println!("aux buses:   {}", model.aux_bus_count);
            println!("mute groups: {}", model.mute_group_count);
            println!("remote:      {}", console.remote_addr());
            println!("local:       {}", console.local_addr()?);
        }
        Command::Names => {
            console.initialize().await;
            for ch in 1..=console.model().channel_count {
                let name = console.channel_name(ch).unwrap_or("");
                let label = if name.is_empty() { "(unnamed)" } else { name };
                println!("ch {ch:02}: {label}");
            }
        }
        Command::Fader { op } => match op {
            FaderOp::Get { channel } => {
                println!("{}", console.get_fader(channel).await);
            }
            FaderOp::Set { channel, value } => {
                console.set_fader(channel, value).await;
            }
        },
        Command::Mute { op } => match op {
            MuteOp::Get { group } => {
                println!("{}", console.get_mute_group(group).await);
            }
            MuteOp::Set { group, engaged } => {
                console.set_mute_group(group, engaged).await;
            }
        },
        Command::Tape { op } => match op {
            TapeOp::Get => {
                println!("{:?}", console.get_tape_status().await);
            }
            TapeOp::Set { code } => {
                let status = TapeStatus::from_code(code)
                    .with_context(|| format!("unknown tape state code {code}"))?;
                console.set_tape_status(status).await;
            }
        },
    }

    Ok(())
}

/// Build the console from CLI arguments, over UDP or the mock transport.
async fn connect(cli: &Cli) -> Result<XAirConsole> {
    let Some(model) = cli.model else {
        bail!("--model is required for this command");
    };

    let mut builder = XAirBuilder::new(model.definition());
    if let Some(port) = cli.local_port {
        builder = builder.local_port(port);
    }
    if let Some(ms) = cli.settle_ms {
        builder = builder.settle_delay(Duration::from_millis(ms));
    }

    if cli.mock {
        let console = builder
            .build_with_transport(Box::new(MockDatagramTransport::new()))
            .await?;
        return Ok(console);
    }

    let Some(ip) = cli.ip else {
        bail!("--ip is required unless --mock is used");
    };

    builder
        .remote_ip(ip)
        .build()
        .await
        .context("failed to bind the local UDP socket")
}
