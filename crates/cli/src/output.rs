//! Terminal rendering for the catalogue commands.

use basket::Basket;
use catalogue::Product;
use colored::Colorize;
use pipeline::{DEFAULT_CATEGORIES, PAGE_SIZE_OPTIONS, Page, price_presets};

pub fn print_status(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.red());
}

/// Print one page as a table, marking products already in the basket
pub fn print_page(page: &Page<'_>, basket: &Basket, is_guest: bool) {
    if page.is_empty() {
        println!("{}", "No products match your filter criteria.".yellow());
    } else {
        println!(
            "{}",
            format!("{:>5}  {:<40} {:>10}  {}", "ID", "Title", "Price", "Description")
                .bold()
                .blue()
        );
        for product in &page.items {
            let marker = if basket.contains(product) {
                "●".green()
            } else {
                " ".normal()
            };
            println!(
                "{:>5}{} {:<40} {:>10.2}  {}",
                product.id,
                marker,
                truncate(&product.title, 40),
                product.price,
                product.preview_description()
            );
        }
    }

    println!();
    println!(
        "Page {} of {}  ({} matching, {} per page){}{}",
        page.page,
        page.total_pages,
        page.total_matched,
        page.page_size,
        if page.has_previous() { "  [prev]" } else { "" },
        if page.has_next() { "  [next]" } else { "" },
    );
    let who = if is_guest {
        "Logged in as Guest"
    } else {
        "Logged in as User"
    };
    println!("{}", who.dimmed());
}

/// Print the detail view: description, reviews and tags
pub fn print_details(product: &Product, in_basket: bool) {
    println!("{}", product.title.bold().blue());
    println!(
        "{}Category: {}   Price: {:.2}{}",
        "• ".green(),
        product.category,
        product.price,
        if in_basket { "   (in basket)" } else { "" }
    );
    if let Some(brand) = &product.brand {
        println!("{}Brand: {}", "• ".green(), brand);
    }
    if !product.description.is_empty() {
        println!();
        println!("{}", product.description);
    }

    println!();
    println!("{}", "Reviews".bold());
    if product.reviews.is_empty() {
        println!("  (none)");
    }
    for review in &product.reviews {
        println!("  - {}: {}", review.reviewer_name.bold(), review.comment);
    }

    println!();
    println!("{}", "Tags".bold());
    if product.tags.is_empty() {
        println!("  (none)");
    }
    for tag in &product.tags {
        println!("  - {}", tag);
    }
}

pub fn print_basket(basket: &Basket) {
    if basket.is_empty() {
        println!("{}", "Your basket is empty.".yellow());
        return;
    }
    println!("{}", "Basket:".bold().blue());
    for product in basket.iter() {
        println!(
            "  {:>5}  {:<40} {:>10.2}",
            product.id,
            truncate(&product.title, 40),
            product.price
        );
    }
    println!(
        "{} items, total {:.2}",
        basket.len().to_string().green(),
        basket.total_price()
    );
}

/// Print the selector choices. `loaded` are the categories found in the
/// catalogue file, possibly empty.
pub fn print_options(loaded: &[String]) {
    println!("{}", "Categories:".bold().blue());
    for category in DEFAULT_CATEGORIES {
        println!("  - {}", category);
    }
    for category in loaded {
        let is_default = DEFAULT_CATEGORIES
            .iter()
            .any(|default| default.eq_ignore_ascii_case(category));
        if !is_default {
            println!("  - {}", category.dimmed());
        }
    }

    println!("{}", "Price ranges:".bold().blue());
    for preset in price_presets() {
        println!("  - {}", preset);
    }

    let sizes: Vec<String> = PAGE_SIZE_OPTIONS.iter().map(|s| s.to_string()).collect();
    println!("{} {}", "Items per page:".bold().blue(), sizes.join(", "));
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Chair", 40), "Chair");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }
}
