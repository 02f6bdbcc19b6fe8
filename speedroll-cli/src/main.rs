mod order;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use speedroll_checkout::{
    CheckoutConfig, CheckoutError, CheckoutSession, DeliveryType, SubmitReceipt,
};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use order::{OrderFile, load_config, load_order};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The order summary text
    Message,
    /// The chat link carrying the encoded summary
    Link,
    /// Message, link and confirmation navigation as JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "speedroll-cli", version)]
#[command(about = "Build the Speed Roll WhatsApp order summary from an order file")]
struct Args {
    /// Order file holding the cart and the checkout form
    #[arg(long)]
    order: PathBuf,

    /// Checkout config JSON (business phone, confirmation delay)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Business phone to address the chat to, overriding the config
    #[arg(long, conflicts_with = "no_phone")]
    phone: Option<String>,

    /// Open the generic compose view instead of a direct chat
    #[arg(long)]
    no_phone: bool,

    /// What to print
    #[arg(long, value_enum, default_value_t = OutputFormat::Message)]
    output: OutputFormat,

    /// Optional path to write the output instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let order = load_order(&args.order)?;
    let config = resolve_config(&args)?;

    announce_banner();

    match submit_order(order, config) {
        Ok(receipt) => {
            let mut output_target = OutputTarget::new(args.out.clone())?;
            write_receipt(output_target.writer(), &receipt, args.output)?;
            output_target.flush_inner()?;
            eprintln!("{}", "✅ Pedido listo para enviar".green().bold());
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {err}", "❌".red());
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn announce_banner() {
    eprintln!("{}", "🍣 Speed Roll Checkout".bright_cyan().bold());
    eprintln!("{}", "======================".cyan());
}

fn resolve_config(args: &Args) -> Result<CheckoutConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if args.no_phone {
        config.business_phone = None;
    } else if let Some(phone) = &args.phone {
        config.business_phone = Some(phone.clone());
    }
    Ok(config)
}

/// Run the order through a checkout session.
///
/// The form's delivery choice is replayed through the toggle so the total is
/// recomputed from the cart rather than trusted from the file.
fn submit_order(order: OrderFile, config: CheckoutConfig) -> Result<SubmitReceipt, CheckoutError> {
    let OrderFile { cart, checkout } = order;
    let requested = checkout.delivery_type;
    let launcher = |url: &str| log::debug!("order link: {url}");
    let mut session = CheckoutSession::new(cart, launcher, config);
    session.with_state_mut(|state| {
        *state = checkout;
        state.delivery_type = DeliveryType::Pickup;
    });
    session.select_delivery(requested);
    session.submit()
}

fn write_receipt(out: &mut dyn Write, receipt: &SubmitReceipt, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Message => writeln!(out, "{}", receipt.message)?,
        OutputFormat::Link => writeln!(out, "{}", receipt.link)?,
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(receipt).context("failed to serialize receipt")?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
