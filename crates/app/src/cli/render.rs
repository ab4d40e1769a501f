use cinema_cart::{cart::Cart, summary::CartSummary};

pub(crate) fn print_cart(cart: &Cart) -> Result<(), String> {
    let summary = CartSummary::from_cart(cart).map_err(|error| error.to_string())?;

    if cart.is_empty() {
        println!("cart is empty");
    }

    for (item, line) in cart.items().iter().zip(summary.lines()) {
        println!("line_id: {}", item.id);
        println!("movie: {} ({})", item.movie.title, item.movie.id);
        println!(
            "screening: {} {} seats: {}",
            item.selected_date,
            item.selected_time,
            item.selected_seats.join(",")
        );
        println!(
            "quantity: {} x {} = {}",
            line.quantity, line.unit_price, line.subtotal
        );
        println!();
    }

    println!("total_items: {}", summary.total_items());
    println!("total_price: {}", summary.total_price());
    println!("updated_at: {}", cart.updated_at());

    if !summary.can_checkout() {
        println!("checkout unavailable: cart is empty");
    }

    Ok(())
}
