//! # Terminal Views
//!
//! Plain-text renderings of the storefront pages. Every function is pure and returns
//! the full text, so the binary only decides where it goes.

use crate::lifecycle::ProductDetail;
use crate::model::{total_quantity, CartLine, Product};

pub const NO_PRODUCTS: &str = "No products found";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const EMPTY_CART: &str = "Your cart is empty";
pub const EMPTY_WISHLIST: &str = "Your wishlist is empty";

/// `12.5` becomes `$12.50`.
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

fn item_count(n: u64) -> String {
    if n == 1 {
        "1 item".to_string()
    } else {
        format!("{n} items")
    }
}

fn product_row(product: &Product) -> String {
    format!(
        "#{:<4} {:<40} {:>10}  ★ {:.1} ({})  [{}]",
        product.id,
        truncate(&product.title, 40),
        format_price(product.price),
        product.rating.rate,
        product.rating.count,
        product.category
    )
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// The listing page.
pub fn render_product_grid(products: &[Product]) -> String {
    if products.is_empty() {
        return format!(
            "{NO_PRODUCTS}\nTry a different search or browse all products."
        );
    }
    let mut lines: Vec<String> = products.iter().map(product_row).collect();
    lines.push(String::new());
    lines.push(if products.len() == 1 {
        "1 product".to_string()
    } else {
        format!("{} products", products.len())
    });
    lines.join("\n")
}

pub fn render_categories(categories: &[String]) -> String {
    std::iter::once("all".to_string())
        .chain(categories.iter().cloned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// The product page; `None` renders the not-found page.
pub fn render_product_detail(detail: Option<&ProductDetail>) -> String {
    let Some(detail) = detail else {
        return format!(
            "{PRODUCT_NOT_FOUND}\nThe product you're looking for doesn't exist or has been removed."
        );
    };
    let product = &detail.product;

    let mut lines = vec![
        product.title.clone(),
        format!("Category: {}", product.category),
        format!(
            "Rating:   ★ {:.1} ({} reviews)",
            product.rating.rate, product.rating.count
        ),
        format!("Price:    {}", format_price(product.price)),
    ];
    if !product.description.is_empty() {
        lines.push(String::new());
        lines.push(product.description.clone());
    }
    lines.push(String::new());
    lines.push(if detail.in_wishlist {
        "♥ In your wishlist".to_string()
    } else {
        "♡ Not in your wishlist".to_string()
    });
    if detail.in_cart > 0 {
        lines.push(format!("In your cart: {}", detail.in_cart));
    }
    lines.join("\n")
}

/// The cart page with per-line subtotals and the order summary.
pub fn render_cart(lines: &[CartLine]) -> String {
    if lines.is_empty() {
        return format!(
            "{EMPTY_CART}\nLooks like you haven't added anything to your cart yet."
        );
    }

    let total_price: f64 = lines.iter().map(CartLine::subtotal).sum();

    let mut out = vec![
        format!("Your Cart ({})", item_count(total_quantity(lines))),
        String::new(),
    ];
    for line in lines {
        out.push(format!(
            "#{:<4} {:<40} {:>3} x {:>10} = {:>10}",
            line.id(),
            truncate(&line.product.title, 40),
            line.quantity,
            format_price(line.product.price),
            format_price(line.subtotal())
        ));
    }
    out.push(String::new());
    out.push("Order Summary".to_string());
    out.push(format!("  Subtotal  {:>12}", format_price(total_price)));
    out.push(format!("  Shipping  {:>12}", "Free"));
    out.push(format!("  Total     {:>12}", format_price(total_price)));
    out.join("\n")
}

pub fn render_wishlist(items: &[Product]) -> String {
    if items.is_empty() {
        return format!(
            "{EMPTY_WISHLIST}\nSave items you like by adding them to your wishlist."
        );
    }
    let mut lines = vec![
        format!("Your Wishlist ({})", item_count(items.len() as u64)),
        String::new(),
    ];
    lines.extend(items.iter().map(product_row));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(109.95), "$109.95");
    }

    #[test]
    fn test_empty_grid() {
        assert!(render_product_grid(&[]).starts_with("No products found"));
    }

    #[test]
    fn test_grid_lists_every_product() {
        let products = vec![
            Product::new(1, "Backpack", 109.95).with_category("bags"),
            Product::new(2, "Mug", 5.0),
        ];
        let text = render_product_grid(&products);
        assert!(text.contains("Backpack"));
        assert!(text.contains("$109.95"));
        assert!(text.contains("[bags]"));
        assert!(text.ends_with("2 products"));
    }

    #[test]
    fn test_cart_view() {
        let lines = vec![
            CartLine::new(Product::new(7, "Lamp", 20.0), 3),
            CartLine::new(Product::new(8, "Bulb", 2.5), 1),
        ];
        let text = render_cart(&lines);
        assert!(text.starts_with("Your Cart (4 items)"));
        assert!(text.contains("$60.00"));
        assert!(text.contains("Free"));
        assert!(text.contains("Total"));
        assert!(text.contains("$62.50"));
    }

    #[test]
    fn test_cart_view_singular() {
        let lines = vec![CartLine::new(Product::new(7, "Lamp", 20.0), 1)];
        assert!(render_cart(&lines).starts_with("Your Cart (1 item)"));
    }

    #[test]
    fn test_cart_view_counts_past_u32_range() {
        let lines = vec![
            CartLine::new(Product::new(7, "Lamp", 20.0), u32::MAX),
            CartLine::new(Product::new(8, "Bulb", 2.5), 1),
        ];
        assert!(render_cart(&lines).starts_with("Your Cart (4294967296 items)"));
    }

    #[test]
    fn test_empty_cart_and_wishlist() {
        assert!(render_cart(&[]).starts_with(EMPTY_CART));
        assert!(render_wishlist(&[]).starts_with(EMPTY_WISHLIST));
    }

    #[test]
    fn test_wishlist_view() {
        let items = vec![Product::new(5, "Ring", 9.99)];
        let text = render_wishlist(&items);
        assert!(text.starts_with("Your Wishlist (1 item)"));
        assert!(text.contains("Ring"));
    }

    #[test]
    fn test_product_detail() {
        let detail = ProductDetail {
            product: Product::new(5, "Ring", 9.99)
                .with_category("jewelery")
                .with_rating(4.6, 400),
            in_wishlist: true,
            in_cart: 2,
        };
        let text = render_product_detail(Some(&detail));
        assert!(text.contains("Ring"));
        assert!(text.contains("$9.99"));
        assert!(text.contains("★ 4.6 (400 reviews)"));
        assert!(text.contains("In your wishlist"));
        assert!(text.contains("In your cart: 2"));

        assert!(render_product_detail(None).starts_with(PRODUCT_NOT_FOUND));
    }

    #[test]
    fn test_long_titles_are_truncated() {
        let title = "x".repeat(60);
        let row = product_row(&Product::new(1, title, 1.0));
        assert!(row.contains('…'));
        assert!(!row.contains(&"x".repeat(41)));
    }
}
