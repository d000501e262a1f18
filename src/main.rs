//! crossbook - Binary Entry Point
//!
//! Builds a book from the orders given on the command line (or the built-in
//! sample book when none are given), prints it, runs one match pass and
//! prints every trade, the resulting book and the pass receipt.
//!
//! ```text
//! crossbook 3.00-300-buy 2.00-200-sell
//! RUST_LOG=debug crossbook
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crossbook::{MatchingEngine, Order, OrderBook, Trade};

#[derive(Parser, Debug)]
#[command(name = "crossbook", version, about = "Run one price-crossing match pass")]
struct Cli {
    /// Orders as PRICE-SIZE-SIDE, e.g. 3.00-300-buy
    #[arg(value_name = "ORDER", allow_hyphen_values = true)]
    orders: Vec<Order>,

    /// Reject negative or non-finite input instead of admitting it as-is
    #[arg(long)]
    strict: bool,
}

/// The sample book: three bids and two asks
fn sample_orders() -> Vec<Order> {
    vec![
        Order::buy(1.0, 100),
        Order::buy(2.0, 200),
        Order::buy(3.0, 300),
        Order::sell(2.0, 200),
        Order::sell(3.0, 300),
    ]
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let orders = if cli.orders.is_empty() {
        sample_orders()
    } else {
        cli.orders
    };

    let mut book = OrderBook::with_capacity(orders.len());
    for order in orders {
        if cli.strict {
            if let Err(err) = book.try_add_order(order) {
                eprintln!("error: {order}: {err}");
                return ExitCode::FAILURE;
            }
        } else {
            book.add_order(order);
        }
    }

    println!("{book}");

    let mut engine = MatchingEngine::new();
    let result = engine.run(&mut book, &mut |trade: &Trade| println!("{trade}"));

    println!("{book}");
    println!(
        "pass {}: {} trades, volume {}, state root {}",
        result.receipt.pass,
        result.receipt.trades_executed,
        result.receipt.volume,
        result.receipt.state_root_hex()
    );

    ExitCode::SUCCESS
}
