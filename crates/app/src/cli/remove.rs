use cinema_cart::items::LineItemId;
use cinema_cart_app::domain::carts::CartViewModel;
use clap::Args;

use super::{render, settled};

#[derive(Debug, Args)]
pub(crate) struct RemoveArgs {
    /// Line id as printed by `show`
    line_id: LineItemId,
}

pub(crate) async fn run(args: RemoveArgs, view_model: &mut CartViewModel) -> Result<(), String> {
    view_model.remove_from_cart(args.line_id).await;
    settled(view_model)?;

    render::print_cart(view_model.cart())
}
