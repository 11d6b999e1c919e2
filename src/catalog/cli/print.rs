use catalog::api::{CmdMessage, MessageLevel};
use catalog::model::Product;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

pub(super) fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", render_message(message));
    }
}

/// One line per product: `ID: 1 | Name: Widget | Price: $9.99 | Quantity: 5`.
/// Names are padded to the widest name in the list so the columns line up.
pub(super) fn render_products(products: &[Product]) -> String {
    let name_width = products
        .iter()
        .map(|p| p.name().width())
        .max()
        .unwrap_or(0);

    products
        .iter()
        .map(|p| {
            let padding = name_width.saturating_sub(p.name().width());
            format!(
                "ID: {} | Name: {}{} | Price: {} | Quantity: {}",
                p.product_id(),
                p.name(),
                " ".repeat(padding),
                p.display_price(),
                p.quantity()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn print_products(products: &[Product]) {
    if !products.is_empty() {
        println!("{}", render_products(products));
    }
}
