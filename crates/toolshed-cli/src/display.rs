//! Vertical card display for directory entries.
//!
//! One section per bucket with a count header, one card per entry.

use toolshed_core::{Buckets, Item};
use toolshed_fetch::Source;

/// Print the three buckets as card sections.
pub fn print_buckets(buckets: &Buckets<'_>, query: &str, source: Source) {
    if source == Source::Fallback {
        println!("(primary source unavailable, showing embedded dataset)");
        println!();
    }

    if buckets.is_empty() {
        if query.is_empty() {
            println!("No entries loaded.");
        } else {
            println!("No entries match \"{query}\".");
        }
        return;
    }

    print_section("AI", &buckets.ai);
    print_section("Analytics", &buckets.analytics);
    print_section("Other", &buckets.other);
}

fn print_section(header: &str, items: &[&Item]) {
    println!("{} ({})", header, items.len());
    if items.is_empty() {
        println!("  (none)");
        println!();
        return;
    }
    for item in items {
        print_card(item);
    }
    println!();
}

fn print_card(item: &Item) {
    println!("  === {} ===", item.name);
    println!("    {:<12} {}", "kind", item.kind);
    if !item.description.is_empty() {
        println!("    {:<12} {}", "description", item.description);
    }
    println!("    {:<12} {}", "url", item.url);
}
