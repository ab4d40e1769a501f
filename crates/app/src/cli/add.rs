use std::num::NonZeroU32;

use cinema_cart::{items::AddItemRequest, movies::MovieSnapshot};
use cinema_cart_app::domain::carts::CartViewModel;
use clap::Args;

use super::{render, settled};

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    /// Catalog id of the movie
    #[arg(long)]
    movie_id: u64,

    /// Movie title
    #[arg(long)]
    title: String,

    /// Movie subtitle
    #[arg(long, default_value = "")]
    sub_title: String,

    /// Poster image reference
    #[arg(long, default_value = "")]
    poster_img_url: String,

    /// Screening date
    #[arg(long)]
    date: String,

    /// Screening time
    #[arg(long)]
    time: String,

    /// Seat label; repeat for several seats
    #[arg(long = "seat")]
    seats: Vec<String>,

    /// Unit price
    #[arg(long)]
    price: u64,

    /// Number of tickets
    #[arg(long, default_value = "1")]
    quantity: NonZeroU32,
}

pub(crate) async fn run(args: AddArgs, view_model: &mut CartViewModel) -> Result<(), String> {
    let movie = MovieSnapshot {
        id: args.movie_id,
        title: args.title,
        sub_title: args.sub_title,
        poster_img_url: args.poster_img_url,
    };

    let request = AddItemRequest {
        movie_id: args.movie_id,
        quantity: args.quantity,
        selected_date: args.date,
        selected_time: args.time,
        selected_seats: args.seats,
        price: args.price,
    };

    view_model.add_to_cart(movie, request).await;
    settled(view_model)?;

    render::print_cart(view_model.cart())
}
