use cinema_cart_app::domain::carts::CartViewModel;

use super::{render, settled};

pub(crate) async fn run(view_model: &mut CartViewModel) -> Result<(), String> {
    view_model.clear_cart().await;
    settled(view_model)?;

    render::print_cart(view_model.cart())
}
