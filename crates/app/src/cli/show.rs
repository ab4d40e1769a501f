use cinema_cart_app::domain::carts::CartViewModel;

use super::render;

pub(crate) fn run(view_model: &CartViewModel) -> Result<(), String> {
    render::print_cart(view_model.cart())
}
