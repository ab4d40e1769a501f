use cinema_cart::items::LineItemId;
use cinema_cart_app::domain::carts::CartViewModel;
use clap::Args;

use super::{render, settled};

#[derive(Debug, Args)]
pub(crate) struct UpdateArgs {
    /// Line id as printed by `show`
    line_id: LineItemId,

    /// New quantity
    #[arg(allow_negative_numbers = true)]
    quantity: i64,
}

pub(crate) async fn run(args: UpdateArgs, view_model: &mut CartViewModel) -> Result<(), String> {
    view_model
        .update_quantity(args.line_id, args.quantity)
        .await;
    settled(view_model)?;

    render::print_cart(view_model.cart())
}
