//! `nexus score`: one-shot allocation for a message.

use console::style;

use nexus_core::allocator::ContributionAllocator;
use nexus_types::allocation::ContributionAllocation;

/// Score `message` and print the allocation. No session is involved.
pub fn score(message: &str, json: bool) -> anyhow::Result<()> {
    let allocation = ContributionAllocator::new().allocate(message);

    if json {
        println!("{}", serde_json::to_string_pretty(&allocation)?);
    } else {
        print_allocation(&allocation);
    }

    Ok(())
}

pub fn print_allocation(allocation: &ContributionAllocation) {
    println!();
    println!(
        "  {} {} tokens",
        style("+").green().bold(),
        style(allocation.tokens_awarded).green().bold()
    );
    println!("  {}  {}", style("Reason:").bold(), allocation.reason);
    println!(
        "  {}  {}",
        style("Reference:").bold(),
        style(&allocation.reference_id).dim()
    );
    println!();
}
